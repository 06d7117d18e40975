use async_trait::async_trait;
use zerospam_domain::{BlockedRecord, DomainError, QueryDescriptor};

/// Generic row storage keyed by table name.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Rows of `table` matching the descriptor. An empty vector means no match.
    async fn query(
        &self,
        table: &str,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<BlockedRecord>, DomainError>;

    async fn delete(&self, table: &str, id_field: &str, id: i64) -> Result<(), DomainError>;
}
