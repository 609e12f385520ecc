//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.
//!
//! `TodoId` is opaque: the client mints numeric ids from the wall clock, but
//! whatever the server sends back is kept as-is and used for every later
//! request against that item. Two ids are the same id when they render to
//! the same path segment, so `5` and `"5"` name one item.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Identifier of a todo item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TodoId {
    /// Any JSON number: negative and fractional ids are kept verbatim.
    Number(Number),
    Text(String),
}

impl TodoId {
    /// Mint a candidate id from the current time in milliseconds.
    pub fn from_clock() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        TodoId::from(u64::try_from(millis).unwrap_or_default())
    }

    /// The rendered form, as it appears in paths and on screen.
    pub fn key(&self) -> Cow<'_, str> {
        match self {
            TodoId::Number(n) => Cow::Owned(n.to_string()),
            TodoId::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl PartialEq for TodoId {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for TodoId {}

impl Hash for TodoId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.key())
    }
}

impl FromStr for TodoId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(n) = s.parse::<u64>() {
            return Ok(TodoId::from(n));
        }
        if let Ok(n) = s.parse::<i64>() {
            return Ok(TodoId::Number(Number::from(n)));
        }
        Ok(TodoId::Text(s.to_string()))
    }
}

impl From<u64> for TodoId {
    fn from(n: u64) -> Self {
        TodoId::Number(Number::from(n))
    }
}

/// A single todo item, both as sent to and as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoItem {
    pub id: TodoId,
    pub text: String,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
