//! Zero Spam Domain Layer
pub mod blocked_record;
pub mod config;
pub mod errors;
pub mod pagination;
pub mod query_descriptor;
pub mod table_request;

pub use blocked_record::{BlockedRecord, BlockedType, ZERO_DATE};
pub use config::{CliOverrides, Config, ConfigError, EmptyResultPolicy};
pub use errors::DomainError;
pub use pagination::{offset_for_page, PaginationArgs, PER_PAGE};
pub use query_descriptor::{Match, QueryDescriptor, SortOrder, WhereCondition};
pub use table_request::{sanitize_text, TableRequest};
