mod columns;
mod markup;
mod table;

pub use columns::ColumnHeaders;
pub use markup::TablenavPosition;
pub use table::{BlockedTable, BulkActionOutcome, TablePage, TableSettings};
