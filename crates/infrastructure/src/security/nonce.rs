//! Time-limited action tokens signed with HMAC-SHA256.
//!
//! A token is bound to an action and to a "tick", half of the configured
//! lifetime. Tokens from the current and the previous tick are accepted, so a
//! token stays valid for at least half and at most the full lifetime.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use ring::hmac;
use subtle::ConstantTimeEq;
use zerospam_application::ports::{NonceIssuer, NonceVerifier};

const TOKEN_LEN: usize = 16;

pub struct HmacNonceVerifier {
    key: hmac::Key,
    lifetime_secs: u64,
}

impl HmacNonceVerifier {
    pub fn new(secret: &str, lifetime_secs: u64) -> Self {
        Self {
            key: hmac::Key::new(hmac::HMAC_SHA256, secret.as_bytes()),
            lifetime_secs: lifetime_secs.max(2),
        }
    }

    fn tick(&self, now_secs: i64) -> i64 {
        let half = (self.lifetime_secs / 2) as i64;
        now_secs.max(0) / half + 1
    }

    fn token_for(&self, tick: i64, action: &str) -> String {
        let tag = hmac::sign(&self.key, format!("{}|{}", tick, action).as_bytes());
        let mut encoded = URL_SAFE_NO_PAD.encode(tag.as_ref());
        encoded.truncate(TOKEN_LEN);
        encoded
    }

    pub fn issue_at(&self, action: &str, now_secs: i64) -> String {
        self.token_for(self.tick(now_secs), action)
    }

    pub fn verify_at(&self, nonce: &str, action: &str, now_secs: i64) -> bool {
        if nonce.is_empty() {
            return false;
        }
        let tick = self.tick(now_secs);
        [tick, tick - 1].into_iter().any(|t| {
            let expected = self.token_for(t, action);
            bool::from(expected.as_bytes().ct_eq(nonce.as_bytes()))
        })
    }
}

impl NonceVerifier for HmacNonceVerifier {
    fn verify(&self, nonce: &str, action: &str) -> bool {
        self.verify_at(nonce, action, chrono::Utc::now().timestamp())
    }
}

impl NonceIssuer for HmacNonceVerifier {
    fn issue(&self, action: &str) -> String {
        self.issue_at(action, chrono::Utc::now().timestamp())
    }
}
