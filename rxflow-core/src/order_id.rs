use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::CoreError;

/// Opaque, non-PHI order identifier.
///
/// # Invariants
/// - Never empty; surrounding whitespace is stripped at construction.
/// - Equality and hashing ignore case; `Display` keeps the case it was entered with.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            tracing::warn!("rejected blank order id");
            return Err(CoreError::EmptyIdentifier);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw user input (trimmed first).
    pub fn matches(&self, raw: &str) -> bool {
        fold(&self.0).eq(fold(raw.trim()))
    }

    /// Case-folded form used as the final sort key. Folds per char, the same
    /// way equality does, so distinct ids never share a key.
    pub fn sort_key(&self) -> String {
        fold(&self.0).collect()
    }
}

fn fold(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

impl PartialEq for OrderId {
    fn eq(&self, other: &Self) -> bool {
        self.matches(&other.0)
    }
}

impl Eq for OrderId {}

impl Hash for OrderId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in fold(&self.0) {
            c.hash(state);
        }
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        OrderId::parse(&raw).map_err(serde::de::Error::custom)
    }
}
