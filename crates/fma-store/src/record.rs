use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{StoreError, StoreResult};

/// Field map of a stored record.
pub type Fields = serde_json::Map<String, Value>;

/// The tables of the progression store.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Table {
    /// One row per user: XP and level. Keyed by `(user_id)`.
    Users,
    /// Finished units. Keyed by `(user_id, unit_key)`.
    Completions,
    /// Earned badges. Keyed by `(user_id, badge_key)`.
    Badges,
}

impl Table {
    pub const ALL: [Table; 3] = [Table::Users, Table::Completions, Table::Badges];

    /// Physical table name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Users => "storyboard_users",
            Self::Completions => "storyboard_user_stories",
            Self::Badges => "storyboard_user_badges",
        }
    }

    /// Number of parts in this table's composite key.
    pub fn key_arity(self) -> usize {
        match self {
            Self::Users => 1,
            Self::Completions | Self::Badges => 2,
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Composite record key: an ordered list of string parts.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordKey(Vec<String>);

impl RecordKey {
    pub fn single(a: impl Into<String>) -> Self {
        Self(vec![a.into()])
    }

    pub fn pair(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self(vec![a.into(), b.into()])
    }

    pub fn parts(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the leading parts equal `prefix`.
    pub fn starts_with(&self, prefix: &[&str]) -> bool {
        prefix.len() <= self.0.len() && self.0.iter().zip(prefix).all(|(a, b)| a == b)
    }
}

impl fmt::Debug for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordKey({self})")
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join("/"))
    }
}

/// A stored row.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub table: Table,
    pub key: RecordKey,
    /// Store-wide insertion sequence, used for stable ordering.
    pub seq: u64,
    pub fields: Fields,
}

impl Record {
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Decode the field map into a typed record.
    pub fn decode<T: DeserializeOwned>(&self) -> StoreResult<T> {
        decode_fields(&self.fields)
    }
}

/// Read a non-negative integer field.
pub fn u64_field(fields: &Fields, name: &str) -> StoreResult<u64> {
    fields
        .get(name)
        .and_then(Value::as_u64)
        .ok_or_else(|| StoreError::InvalidField {
            field: name.to_string(),
            reason: "expected a non-negative integer".into(),
        })
}

/// Encode a typed value into a field map. The value must serialize as a
/// JSON object.
pub fn encode_fields<T: Serialize>(value: &T) -> StoreResult<Fields> {
    match serde_json::to_value(value).map_err(|e| StoreError::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::Serialization(format!(
            "expected an object, got {other}"
        ))),
    }
}

/// Decode a field map into a typed value.
pub fn decode_fields<T: DeserializeOwned>(fields: &Fields) -> StoreResult<T> {
    serde_json::from_value(Value::Object(fields.clone()))
        .map_err(|e| StoreError::Serialization(e.to_string()))
}
