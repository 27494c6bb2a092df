//! User record and its display projection

use serde::{Deserialize, Serialize};

/// Stored representation of one account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Unique identifier, immutable once created
    id: String,
    /// Password as produced by the store's hasher
    password: String,
    /// Display name; empty means "use the ID"
    nickname: String,
    /// Free-text comment
    comment: String,
}

impl UserRecord {
    /// Create a fresh record with no nickname or comment
    pub fn new(id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            password: password.into(),
            nickname: String::new(),
            comment: String::new(),
        }
    }

    /// Attach a nickname
    pub fn with_nickname(mut self, nickname: impl Into<String>) -> Self {
        self.nickname = nickname.into();
        self
    }

    /// Attach a comment
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }
}

/// Presentation view of a [`UserRecord`]
///
/// The nickname is never empty: it falls back to the user ID. The password
/// is not carried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUser {
    #[serde(rename = "user_id")]
    pub id: String,
    pub nickname: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
}

impl From<&UserRecord> for DisplayUser {
    fn from(record: &UserRecord) -> Self {
        let nickname = if record.nickname().is_empty() {
            record.id().to_string()
        } else {
            record.nickname().to_string()
        };

        Self {
            id: record.id().to_string(),
            nickname,
            comment: record.comment().to_string(),
        }
    }
}

impl From<UserRecord> for DisplayUser {
    fn from(record: UserRecord) -> Self {
        Self::from(&record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_blank() {
        let record = UserRecord::new("TaroYamada", "PaSSwd4TY");

        assert_eq!(record.id(), "TaroYamada");
        assert_eq!(record.password(), "PaSSwd4TY");
        assert!(record.nickname().is_empty());
        assert!(record.comment().is_empty());
    }

    #[test]
    fn test_display_fills_nickname_from_id() {
        let record = UserRecord::new("TaroYamada", "PaSSwd4TY");
        let display = DisplayUser::from(&record);

        assert_eq!(display.id, "TaroYamada");
        assert_eq!(display.nickname, "TaroYamada");
        // Derivation leaves the record alone
        assert!(record.nickname().is_empty());
    }

    #[test]
    fn test_display_keeps_existing_nickname() {
        let record = UserRecord::new("TaroYamada", "PaSSwd4TY")
            .with_nickname("Taro")
            .with_comment("I'm happy.");
        let display = DisplayUser::from(record);

        assert_eq!(display.nickname, "Taro");
        assert_eq!(display.comment, "I'm happy.");
    }

    #[test]
    fn test_display_serialization() {
        let display = DisplayUser::from(UserRecord::new("TaroYamada", "PaSSwd4TY"));

        let json = serde_json::to_string(&display).unwrap();
        assert_eq!(json, r#"{"user_id":"TaroYamada","nickname":"TaroYamada"}"#);
        assert!(!json.contains("PaSSwd4TY"));
    }

    #[test]
    fn test_display_serialization_with_comment() {
        let display =
            DisplayUser::from(UserRecord::new("TaroYamada", "PaSSwd4TY").with_comment("hello"));

        let json = serde_json::to_string(&display).unwrap();
        assert!(json.contains(r#""comment":"hello""#));
    }
}
