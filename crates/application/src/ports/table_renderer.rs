use serde::Serialize;
use zerospam_domain::{PaginationArgs, SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SortableColumn {
    pub key: &'static str,
    pub orderby: &'static str,
    pub initially_desc: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BulkAction {
    pub key: &'static str,
    pub label: &'static str,
}

/// One cell of markup, already escaped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCell {
    pub column: &'static str,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRow {
    pub id: i64,
    pub cells: Vec<RenderedCell>,
}

impl RenderedRow {
    pub fn cell(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|c| c.column == column)
            .map(|c| c.html.as_str())
    }
}

/// Everything a renderer needs to draw the admin table: columns, rows,
/// pagination metadata and the bulk-action list.
#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub singular: &'static str,
    pub plural: &'static str,
    pub columns: Vec<Column>,
    pub sortable: Vec<SortableColumn>,
    pub hidden: Vec<&'static str>,
    pub rows: Vec<RenderedRow>,
    pub pagination: Option<PaginationArgs>,
    pub current_page: u32,
    pub bulk_actions: Vec<BulkAction>,
    pub top_nav: String,
    pub bottom_nav: String,
    pub orderby: String,
    pub order: SortOrder,
    pub search: Option<String>,
    pub request_uri: String,
    /// Token for the bulk-action form, filled in by whoever issues nonces.
    pub nonce: Option<String>,
}

/// Admin chrome: turns a [`TableView`] into a full page fragment.
pub trait TableRenderer: Send + Sync {
    fn render(&self, view: &TableView) -> String;
}
