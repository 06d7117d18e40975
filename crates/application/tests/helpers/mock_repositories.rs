#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::RwLock;
use zerospam_application::ports::{NonceVerifier, RowStore};
use zerospam_domain::{BlockedRecord, DomainError, Match, QueryDescriptor, SortOrder};

/// In-memory row store that applies descriptors and records every call.
#[derive(Clone, Default)]
pub struct MockRowStore {
    rows: Arc<RwLock<Vec<(String, BlockedRecord)>>>,
    queries: Arc<RwLock<Vec<(String, QueryDescriptor)>>>,
    deletes: Arc<RwLock<Vec<(String, String, i64)>>>,
    failing_ids: Arc<RwLock<HashSet<i64>>>,
    fail_queries: Arc<RwLock<bool>>,
}

impl MockRowStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, key_type: &str, record: BlockedRecord) {
        self.rows.write().await.push((key_type.to_string(), record));
    }

    pub async fn insert_ip(&self, record: BlockedRecord) {
        self.insert("ip", record).await;
    }

    pub async fn fail_delete_of(&self, id: i64) {
        self.failing_ids.write().await.insert(id);
    }

    pub async fn set_fail_queries(&self, fail: bool) {
        *self.fail_queries.write().await = fail;
    }

    pub async fn queries(&self) -> Vec<(String, QueryDescriptor)> {
        self.queries.read().await.clone()
    }

    pub async fn deletes(&self) -> Vec<(String, String, i64)> {
        self.deletes.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

fn matches(key_type: &str, record: &BlockedRecord, descriptor: &QueryDescriptor) -> bool {
    descriptor.conditions.iter().all(|c| {
        let value = if c.field == "key_type" {
            Some(key_type.to_string())
        } else {
            record.field(&c.field)
        };
        match (value, c.matching) {
            (Some(v), Match::Exact) => v == c.value,
            (Some(v), Match::Contains) => v.contains(&c.value),
            (None, _) => false,
        }
    })
}

#[async_trait]
impl RowStore for MockRowStore {
    async fn query(
        &self,
        table: &str,
        descriptor: &QueryDescriptor,
    ) -> Result<Vec<BlockedRecord>, DomainError> {
        self.queries
            .write()
            .await
            .push((table.to_string(), descriptor.clone()));

        if *self.fail_queries.read().await {
            return Err(DomainError::DatabaseError("mock query failure".to_string()));
        }

        let mut rows: Vec<BlockedRecord> = self
            .rows
            .read()
            .await
            .iter()
            .filter(|(key_type, r)| matches(key_type, r, descriptor))
            .map(|(_, r)| r.clone())
            .collect();

        rows.sort_by(|a, b| {
            let ord = a
                .field(&descriptor.orderby)
                .cmp(&b.field(&descriptor.orderby));
            match descriptor.order {
                SortOrder::Asc => ord,
                SortOrder::Desc => ord.reverse(),
            }
        });

        let offset = descriptor.offset.unwrap_or(0) as usize;
        let limit = descriptor.limit.map(|l| l as usize).unwrap_or(usize::MAX);
        Ok(rows.into_iter().skip(offset).take(limit).collect())
    }

    async fn delete(&self, table: &str, id_field: &str, id: i64) -> Result<(), DomainError> {
        self.deletes
            .write()
            .await
            .push((table.to_string(), id_field.to_string(), id));

        if self.failing_ids.read().await.contains(&id) {
            return Err(DomainError::DatabaseError(format!("cannot delete {}", id)));
        }

        self.rows.write().await.retain(|(_, r)| r.blocked_id != id);
        Ok(())
    }
}

/// Accepts exactly one token for one action.
pub struct MockNonceVerifier {
    valid: String,
}

impl MockNonceVerifier {
    pub fn accepting(valid: &str) -> Self {
        Self {
            valid: valid.to_string(),
        }
    }
}

impl NonceVerifier for MockNonceVerifier {
    fn verify(&self, nonce: &str, action: &str) -> bool {
        action == "zerospam_nonce" && !nonce.is_empty() && nonce == self.valid
    }
}

pub fn record(id: i64, ip: &str, blocked_type: &str, date_added: &str) -> BlockedRecord {
    BlockedRecord {
        blocked_id: id,
        user_ip: ip.to_string(),
        blocked_type: blocked_type.to_string(),
        start_block: Some(date_added.to_string()),
        end_block: Some("2030-01-01 00:00:00".to_string()),
        date_added: Some(date_added.to_string()),
        reason: Some("Spam detected".to_string()),
    }
}
