//! Identifier for a single roulette search

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A unique, time-ordered identifier for one search invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchId(Uuid);

impl SearchId {
    /// Create a new time-ordered search ID
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for SearchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SearchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_search_id_is_unique() {
        assert_ne!(SearchId::new(), SearchId::new());
    }

    #[test]
    fn search_ids_are_time_ordered_v7() {
        let id = SearchId::new();
        let uuid = Uuid::parse_str(&id.to_string()).unwrap();
        assert_eq!(uuid.get_version_num(), 7);
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = SearchId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
