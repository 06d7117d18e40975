use std::sync::Arc;
use zerospam_application::ports::{NonceIssuer, TableRenderer};
use zerospam_application::use_cases::BlockedTable;

#[derive(Clone)]
pub struct AppState {
    pub blocked_table: Arc<BlockedTable>,
    pub renderer: Arc<dyn TableRenderer>,
    pub nonces: Arc<dyn NonceIssuer>,
}
