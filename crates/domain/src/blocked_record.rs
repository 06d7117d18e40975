use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp the store uses for "never set".
pub const ZERO_DATE: &str = "0000-00-00 00:00:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockedType {
    Permanent,
    Temporary,
    Other(String),
}

impl BlockedType {
    pub fn as_str(&self) -> &str {
        match self {
            BlockedType::Permanent => "permanent",
            BlockedType::Temporary => "temporary",
            BlockedType::Other(s) => s.as_str(),
        }
    }

    pub fn is_permanent(&self) -> bool {
        matches!(self, BlockedType::Permanent)
    }
}

impl From<&str> for BlockedType {
    fn from(s: &str) -> Self {
        match s {
            "permanent" => BlockedType::Permanent,
            "temporary" => BlockedType::Temporary,
            other => BlockedType::Other(other.to_string()),
        }
    }
}

impl FromStr for BlockedType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}

impl fmt::Display for BlockedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the `blocked` table as handed back by the row store.
///
/// Timestamps are kept as the store's raw strings; they may be missing,
/// empty, or [`ZERO_DATE`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockedRecord {
    pub blocked_id: i64,
    pub user_ip: String,
    pub blocked_type: String,
    pub start_block: Option<String>,
    pub end_block: Option<String>,
    pub date_added: Option<String>,
    pub reason: Option<String>,
}

impl BlockedRecord {
    pub fn new(blocked_id: i64, user_ip: impl Into<String>, blocked_type: impl Into<String>) -> Self {
        Self {
            blocked_id,
            user_ip: user_ip.into(),
            blocked_type: blocked_type.into(),
            ..Default::default()
        }
    }

    pub fn kind(&self) -> BlockedType {
        BlockedType::from(self.blocked_type.as_str())
    }

    pub fn is_permanent(&self) -> bool {
        self.kind().is_permanent()
    }

    /// Raw value of a named column, `None` when the column is unknown or unset.
    pub fn field(&self, column: &str) -> Option<String> {
        match column {
            "blocked_id" => Some(self.blocked_id.to_string()),
            "user_ip" => Some(self.user_ip.clone()),
            "blocked_type" => Some(self.blocked_type.clone()),
            "start_block" => self.start_block.clone(),
            "end_block" => self.end_block.clone(),
            "date_added" => self.date_added.clone(),
            "reason" => self.reason.clone(),
            _ => None,
        }
    }
}
