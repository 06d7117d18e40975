use super::Repositories;
use std::sync::Arc;
use zerospam_application::use_cases::{BlockedTable, TableSettings};
use zerospam_domain::Config;

pub struct UseCases {
    pub blocked_table: Arc<BlockedTable>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> Self {
        let settings = TableSettings {
            ip_lookup_url: config.table.ip_lookup_url.clone(),
            empty_result: config.table.empty_result,
        };

        Self {
            blocked_table: Arc::new(BlockedTable::new(
                repos.row_store.clone(),
                repos.nonces.clone(),
                settings,
            )),
        }
    }
}
