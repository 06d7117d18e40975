pub mod blocked_table;

pub use blocked_table::{
    BlockedTable, BulkActionOutcome, ColumnHeaders, TablePage, TableSettings, TablenavPosition,
};
