//! Problem details value types.
//!
//! [`Problem`] carries the members fixed by RFC 9457 §3.1, while
//! [`ExtensionMembers`] collects every other member of the document
//! (RFC 9457 §3.2).

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The `type` URI implied when a problem document omits the member.
pub const ABOUT_BLANK: &str = "about:blank";

/// The members of a problem details document defined by RFC 9457.
///
/// Every field defaults to its empty value. `status` is never read from the
/// document body; it always reflects the status code of the HTTP response the
/// document arrived with.
///
/// `Problem` does not implement `Deserialize`: a derived decoder
/// would trust the body's `status` and reject mistyped members. Build one from
/// a body with [`crate::ProblemParser`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Problem {
    /// URI reference identifying the problem type. Empty means `about:blank`.
    #[serde(rename = "type", skip_serializing_if = "String::is_empty")]
    pub r#type: String,

    /// HTTP status code of the response carrying the document.
    #[serde(skip_serializing_if = "is_zero")]
    pub status: u16,

    /// Short, human-readable summary of the problem type.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,

    /// Human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub detail: String,

    /// URI reference identifying this specific occurrence.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub instance: String,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
const fn is_zero(status: &u16) -> bool {
    *status == 0
}

impl Problem {
    /// Creates an empty problem carrying only the given status code.
    #[must_use]
    pub fn with_status(status: u16) -> Self {
        Self {
            status,
            ..Self::default()
        }
    }

    /// Returns the problem type, substituting [`ABOUT_BLANK`] when absent.
    #[must_use]
    pub fn effective_type(&self) -> &str {
        if self.r#type.is_empty() {
            ABOUT_BLANK
        } else {
            &self.r#type
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.status)?;
        let summary = if self.title.is_empty() {
            self.effective_type()
        } else {
            &self.title
        };
        write!(f, " {summary}")?;
        if !self.detail.is_empty() {
            write!(f, ": {}", self.detail)?;
        }
        Ok(())
    }
}

/// Members of a problem document that are not part of the [`Problem`] schema.
///
/// Values are kept exactly as decoded, whatever their JSON type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionMembers(Map<String, Value>);

impl ExtensionMembers {
    /// Creates an empty set of extension members.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Deserializes the member stored under `key` into `T`.
    ///
    /// Returns `Ok(None)` when the member is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`serde_json::Error`] if the stored value does not fit `T`.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, serde_json::Error> {
        self.0.get(key).map(T::deserialize).transpose()
    }

    /// Returns `true` if a member named `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Inserts a member, returning the previous value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when the document carried no extension members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the members.
    pub fn iter(&self) -> serde_json::map::Iter<'_> {
        self.0.iter()
    }

    /// Consumes the set, returning the underlying JSON map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for ExtensionMembers {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for ExtensionMembers {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ExtensionMembers {
    type Item = (String, Value);
    type IntoIter = serde_json::map::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ExtensionMembers {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
