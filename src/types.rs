use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CorkboardError;

/// A ticket as served by the listing endpoint.
///
/// `status` is a free-form label; columns on the board are derived from
/// whatever distinct statuses the collection contains. `priority_level`
/// sorts descending (higher = more urgent) and `priority_name` is the
/// display label that goes with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub status: String,
    pub assigned_user: String,
    pub priority_level: i64,
    pub priority_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Grouping {
    #[default]
    Status,
    User,
    Priority,
}

impl fmt::Display for Grouping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Grouping::Status => write!(f, "status"),
            Grouping::User => write!(f, "user"),
            Grouping::Priority => write!(f, "priority"),
        }
    }
}

impl FromStr for Grouping {
    type Err = CorkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "status" => Ok(Grouping::Status),
            "user" => Ok(Grouping::User),
            "priority" => Ok(Grouping::Priority),
            _ => Err(CorkboardError::InvalidGrouping(s.to_string())),
        }
    }
}

pub const VALID_GROUPINGS: &[&str] = &["status", "user", "priority"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Priority,
    Title,
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Priority => write!(f, "priority"),
            SortKey::Title => write!(f, "title"),
        }
    }
}

impl FromStr for SortKey {
    type Err = CorkboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "priority" => Ok(SortKey::Priority),
            "title" => Ok(SortKey::Title),
            _ => Err(CorkboardError::InvalidSortKey(s.to_string())),
        }
    }
}

pub const VALID_SORT_KEYS: &[&str] = &["priority", "title"];

/// The pair of display selectors driving the board's derived ordering.
///
/// Setters return a fresh value; changing one selector never touches the
/// other. Defaults reset on every process start, nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayConfig {
    pub grouping: Grouping,
    pub sort: SortKey,
}

impl DisplayConfig {
    pub fn with_grouping(self, grouping: Grouping) -> Self {
        Self { grouping, ..self }
    }

    pub fn with_sort(self, sort: SortKey) -> Self {
        Self { sort, ..self }
    }
}
