pub mod nonce;

pub use nonce::HmacNonceVerifier;
