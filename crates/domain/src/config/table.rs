use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the table does when the page query comes back empty.
///
/// `Skip` leaves the table without pagination metadata, exactly like a failed
/// query. `Publish` renders an empty page with zero totals instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyResultPolicy {
    #[default]
    Skip,
    Publish,
}

impl EmptyResultPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyResultPolicy::Skip => "skip",
            EmptyResultPolicy::Publish => "publish",
        }
    }
}

impl FromStr for EmptyResultPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "skip" => Ok(EmptyResultPolicy::Skip),
            "publish" => Ok(EmptyResultPolicy::Publish),
            other => Err(format!(
                "Invalid empty result policy '{}': must be 'skip' or 'publish'",
                other
            )),
        }
    }
}

impl fmt::Display for EmptyResultPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TableConfig {
    /// Base URL the IP column links to; the encoded address is appended.
    #[serde(default = "default_ip_lookup_url")]
    pub ip_lookup_url: String,

    #[serde(default)]
    pub empty_result: EmptyResultPolicy,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            ip_lookup_url: default_ip_lookup_url(),
            empty_result: EmptyResultPolicy::default(),
        }
    }
}

fn default_ip_lookup_url() -> String {
    "https://www.zerospam.org/ip-lookup/".to_string()
}
