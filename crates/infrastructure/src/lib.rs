//! Zero Spam Infrastructure Layer
pub mod database;
pub mod repositories;
pub mod security;
