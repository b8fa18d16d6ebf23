use crate::role::Role;
use serde::{Deserialize, Serialize};

/// One contiguous, role-attributed span of dialogue content.
///
/// Invariants upheld by the parser: `content` is trimmed and non-empty,
/// and `sequence_index` equals the turn's position in emission order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub sequence_index: usize,
}

/// The `{role, content}` record shape handed to the ingestion side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageRecord {
    pub role: Role,
    pub content: String,
}

impl From<&Turn> for MessageRecord {
    fn from(turn: &Turn) -> Self {
        MessageRecord {
            role: turn.role,
            content: turn.content.clone(),
        }
    }
}

impl From<Turn> for MessageRecord {
    fn from(turn: Turn) -> Self {
        MessageRecord {
            role: turn.role,
            content: turn.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_serializes_with_role_string() {
        let turn = Turn {
            role: Role::User,
            content: "hello".to_string(),
            sequence_index: 0,
        };
        let json = serde_json::to_value(&turn).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
        assert_eq!(json["sequence_index"], 0);
    }

    #[test]
    fn message_record_drops_sequence_index() {
        let turn = Turn {
            role: Role::Assistant,
            content: "hi".to_string(),
            sequence_index: 3,
        };
        let record = MessageRecord::from(&turn);
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("sequence_index").is_none());
        assert_eq!(json["role"], "assistant");
    }
}
