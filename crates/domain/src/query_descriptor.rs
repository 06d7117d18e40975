use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Lenient parse used for request input: anything that is not `asc`
    /// sorts descending.
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(format!("Invalid sort order '{}': must be 'asc' or 'desc'", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Match {
    Exact,
    Contains,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhereCondition {
    pub field: String,
    pub value: String,
    pub matching: Match,
}

impl WhereCondition {
    pub fn exact(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            matching: Match::Exact,
        }
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
            matching: Match::Contains,
        }
    }
}

/// What to fetch from the row store for one table render.
///
/// Conditions keep insertion order and are ANDed together.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryDescriptor {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub order: SortOrder,
    pub orderby: String,
    pub conditions: Vec<WhereCondition>,
}

impl QueryDescriptor {
    pub fn new(order: SortOrder, orderby: impl Into<String>) -> Self {
        Self {
            limit: None,
            offset: None,
            order,
            orderby: orderby.into(),
            conditions: Vec::new(),
        }
    }

    pub fn paged(mut self, limit: u32, offset: u32) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }

    pub fn with_condition(mut self, condition: WhereCondition) -> Self {
        self.push_condition(condition);
        self
    }

    /// Adds a condition, replacing any earlier one on the same field.
    pub fn push_condition(&mut self, condition: WhereCondition) {
        match self.conditions.iter_mut().find(|c| c.field == condition.field) {
            Some(existing) => *existing = condition,
            None => self.conditions.push(condition),
        }
    }

    pub fn condition(&self, field: &str) -> Option<&WhereCondition> {
        self.conditions.iter().find(|c| c.field == field)
    }

    /// Same filters and sort with limit/offset removed, for counting.
    pub fn without_paging(&self) -> Self {
        Self {
            limit: None,
            offset: None,
            ..self.clone()
        }
    }
}
