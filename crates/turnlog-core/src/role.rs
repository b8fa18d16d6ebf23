use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical speaker role for a dialogue turn.
///
/// Closed set on purpose: downstream consumers match on it exhaustively
/// instead of string-comparing whatever vocabulary the source log used.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = crate::markers::MarkerError;

    /// Parse a canonical role name. Accepts the legacy "agent" spelling
    /// some older voice-log dumps used for the model side.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "user" => Ok(Role::User),
            "assistant" | "agent" => Ok(Role::Assistant),
            other => Err(crate::markers::MarkerError::UnknownRole {
                value: other.to_string(),
            }),
        }
    }
}
