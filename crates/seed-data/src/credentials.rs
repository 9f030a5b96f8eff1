//! Bearer tokens keyed by user identifier.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::SeedError;

/// Identifier (email) to bearer token mapping.
///
/// Keeps insertion order so collected tokens print in signin order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    entries: Vec<(String, String)>,
}

impl Credentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a token, replacing any previous token for the same identifier.
    pub fn insert(&mut self, identifier: impl Into<String>, token: impl Into<String>) {
        let identifier = identifier.into();
        let token = token.into();
        match self.entries.iter_mut().find(|(id, _)| *id == identifier) {
            Some(entry) => entry.1 = token,
            None => self.entries.push((identifier, token)),
        }
    }

    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(id, _)| id == identifier)
            .map(|(_, token)| token.as_str())
    }

    /// Like [`get`](Self::get), but a missing identifier is an error.
    pub fn resolve(&self, identifier: &str) -> Result<&str, SeedError> {
        self.get(identifier)
            .ok_or_else(|| SeedError::MissingCredential(identifier.to_string()))
    }

    /// Copies every entry of `other` into `self`.
    pub fn extend(&mut self, other: Credentials) {
        for (identifier, token) in other.entries {
            self.insert(identifier, token);
        }
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, token)| token.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Credentials {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(id, token)| (id, token)))
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = BTreeMap::<String, String>::deserialize(deserializer)?;
        Ok(Self {
            entries: map.into_iter().collect(),
        })
    }
}

/// Pairs `tokens[i]` with `records[i]`.
///
/// Both lists must have the same length; a mismatch would attribute records
/// to the wrong users, so it is rejected instead of truncated.
pub fn pair_positional<'a, R>(
    tokens: &'a [String],
    records: &'a [R],
) -> Result<Vec<(&'a str, &'a R)>, SeedError> {
    if tokens.len() != records.len() {
        return Err(SeedError::PairingMismatch {
            tokens: tokens.len(),
            records: records.len(),
        });
    }

    Ok(tokens
        .iter()
        .map(String::as_str)
        .zip(records.iter())
        .collect())
}
