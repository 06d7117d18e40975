use serde::Serialize;

use crate::ports::{BulkAction, Column, SortableColumn};

pub(super) const COLUMNS: &[Column] = &[
    Column { key: "cb", label: r#"<input type="checkbox" />"# },
    Column { key: "date_added", label: "Date" },
    Column { key: "blocked_type", label: "Type" },
    Column { key: "user_ip", label: "IP Address" },
    Column { key: "start_block", label: "Starts" },
    Column { key: "end_block", label: "Ends" },
    Column { key: "reason", label: "Reason" },
    Column { key: "actions", label: "Actions" },
];

pub(super) const SORTABLE_COLUMNS: &[SortableColumn] = &[
    SortableColumn { key: "date_added", orderby: "date_added", initially_desc: false },
    SortableColumn { key: "blocked_type", orderby: "blocked_type", initially_desc: false },
    SortableColumn { key: "user_ip", orderby: "user_ip", initially_desc: false },
    SortableColumn { key: "start_block", orderby: "start_block", initially_desc: false },
    SortableColumn { key: "end_block", orderby: "end_block", initially_desc: false },
];

pub(super) const BULK_ACTIONS: &[BulkAction] = &[BulkAction {
    key: "delete",
    label: "Delete Selected",
}];

/// Visible, hidden and sortable columns as published alongside pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeaders {
    pub columns: Vec<Column>,
    pub hidden: Vec<&'static str>,
    pub sortable: Vec<SortableColumn>,
}
