//! Backend-assigned record identifiers.
//!
//! Storage backends assign ids in their own native form: the file backend
//! numbers records sequentially, the document backend generates string keys.
//! `RecordId` carries either form through the rest of the system without
//! callers having to know which backend produced it.

use core::fmt;

use serde::{Deserialize, Serialize};

/// An opaque record identifier assigned by a storage backend.
///
/// Serializes transparently as a JSON number or string, matching whatever
/// the backend handed out:
///
/// ```
/// use elanicia_core::RecordId;
///
/// let seq = RecordId::Seq(3);
/// assert_eq!(serde_json::to_string(&seq).unwrap(), "3");
///
/// let key = RecordId::key("68a1f0c2d4e5f60718293a4b");
/// assert_eq!(
///     serde_json::to_string(&key).unwrap(),
///     "\"68a1f0c2d4e5f60718293a4b\""
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    /// Sequential integer id (file backend).
    Seq(i64),
    /// Generated string key (document backend).
    Key(String),
}

impl RecordId {
    /// Create a string-keyed id.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// The sequential value, if this id is numeric.
    #[must_use]
    pub const fn as_seq(&self) -> Option<i64> {
        match self {
            Self::Seq(n) => Some(*n),
            Self::Key(_) => None,
        }
    }

    /// The string key, if this id is a generated key.
    #[must_use]
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Self::Seq(_) => None,
            Self::Key(key) => Some(key),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seq(n) => write!(f, "{n}"),
            Self::Key(key) => write!(f, "{key}"),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Seq(id)
    }
}

impl From<String> for RecordId {
    fn from(key: String) -> Self {
        Self::Key(key)
    }
}
