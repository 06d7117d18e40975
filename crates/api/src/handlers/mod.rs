pub mod blocked;
pub mod health;

pub use blocked::{get_blocked_table, post_blocked_table};
pub use health::health_check;
