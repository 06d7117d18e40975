/// Checks a request token against the action it is meant to authorize.
pub trait NonceVerifier: Send + Sync {
    fn verify(&self, nonce: &str, action: &str) -> bool;
}

/// Mints tokens that a matching [`NonceVerifier`] accepts.
pub trait NonceIssuer: Send + Sync {
    fn issue(&self, action: &str) -> String;
}
