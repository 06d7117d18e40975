use sqlx::SqlitePool;
use std::sync::Arc;
use zerospam_domain::Config;
use zerospam_infrastructure::{repositories::SqliteRowStore, security::HmacNonceVerifier};

pub struct Repositories {
    pub row_store: Arc<SqliteRowStore>,
    pub nonces: Arc<HmacNonceVerifier>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, config: &Config) -> Self {
        Self {
            row_store: Arc::new(SqliteRowStore::new(pool)),
            nonces: Arc::new(HmacNonceVerifier::new(
                &config.security.nonce_secret,
                config.security.nonce_lifetime_secs,
            )),
        }
    }
}
