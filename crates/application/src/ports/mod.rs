mod nonce_verifier;
mod row_store;
mod table_renderer;

pub use nonce_verifier::{NonceIssuer, NonceVerifier};
pub use row_store::RowStore;
pub use table_renderer::{
    BulkAction, Column, RenderedCell, RenderedRow, SortableColumn, TableRenderer, TableView,
};
