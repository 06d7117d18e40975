use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SecurityConfig {
    /// Key used to sign bulk-action nonces. Must be set for the server to start.
    #[serde(default)]
    pub nonce_secret: String,

    #[serde(default = "default_nonce_lifetime_secs")]
    pub nonce_lifetime_secs: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            nonce_secret: String::new(),
            nonce_lifetime_secs: default_nonce_lifetime_secs(),
        }
    }
}

fn default_nonce_lifetime_secs() -> u64 {
    86_400
}
