use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of cache event categories. The typed API makes an invalid
/// category unrepresentable; the string boundary rejects unknown names
/// through [`FromStr`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Hit,
    Miss,
    Set,
    Delete,
}

impl EventKind {
    pub const ALL: [EventKind; 4] = [
        EventKind::Hit,
        EventKind::Miss,
        EventKind::Set,
        EventKind::Delete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Hit => "hit",
            EventKind::Miss => "miss",
            EventKind::Set => "set",
            EventKind::Delete => "delete",
        }
    }

    /// Index into per-kind tables (observer lists).
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category name outside the closed set was supplied at a string boundary.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown cache event category {0:?} (expected hit, miss, set or delete)")]
pub struct UnknownEventError(pub String);

impl FromStr for EventKind {
    type Err = UnknownEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(EventKind::Hit),
            "miss" => Ok(EventKind::Miss),
            "set" => Ok(EventKind::Set),
            "delete" => Ok(EventKind::Delete),
            other => Err(UnknownEventError(other.to_string())),
        }
    }
}
