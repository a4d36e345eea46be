//! Identifier of the user whose reports are requested

use serde::{Deserialize, Serialize};
use std::fmt;

/// Report service user identifier
///
/// Stored as text so both numeric and opaque ids work; accepts a JSON
/// number or string when loaded from settings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawUserId", into = "String")]
pub struct UserId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawUserId {
    Number(u64),
    Text(String),
}

impl From<RawUserId> for UserId {
    fn from(raw: RawUserId) -> Self {
        match raw {
            RawUserId::Number(n) => Self(n.to_string()),
            RawUserId::Text(s) => Self(s),
        }
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// The source falls back to user 1 when nobody is signed in
impl Default for UserId {
    fn default() -> Self {
        Self("1".to_string())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
