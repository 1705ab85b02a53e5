//! Shared identity for patients and staff.

use serde::{Deserialize, Serialize};

use super::{ModelError, ModelResult};

/// First and last name of a person. Two names are equal iff both parts match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PersonName {
    first: String,
    last: String,
}

impl PersonName {
    /// Create a name, rejecting blank parts.
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> ModelResult<Self> {
        let first = first.into();
        let last = last.into();
        if first.trim().is_empty() || last.trim().is_empty() {
            return Err(ModelError::BlankName);
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> &str {
        &self.first
    }

    pub fn last(&self) -> &str {
        &self.last
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }

    /// Case-sensitive match on both parts.
    pub fn matches(&self, first: &str, last: &str) -> bool {
        self.first == first && self.last == last
    }

    /// Whether `term` is this full name, ignoring case in any script.
    pub fn matches_full_name(&self, term: &str) -> bool {
        same_ignoring_case(&self.full_name(), term)
    }
}

/// Unicode-aware case-insensitive comparison.
pub fn same_ignoring_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Behaviour common to everyone the clinic tracks.
pub trait Person {
    fn name(&self) -> &PersonName;

    /// One-line human readable description.
    fn description(&self) -> String;

    fn first_name(&self) -> &str {
        self.name().first()
    }

    fn last_name(&self) -> &str {
        self.name().last()
    }

    fn full_name(&self) -> String {
        self.name().full_name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let name = PersonName::new("Aandi", "Acute").unwrap();
        assert_eq!(name.full_name(), "Aandi Acute");
        assert_eq!(name.first(), "Aandi");
        assert_eq!(name.last(), "Acute");
    }

    #[test]
    fn test_blank_names_rejected() {
        assert_eq!(PersonName::new("", "Acute"), Err(ModelError::BlankName));
        assert_eq!(PersonName::new("Aandi", "   "), Err(ModelError::BlankName));
    }

    #[test]
    fn test_equality_by_both_parts() {
        let a = PersonName::new("Amy", "Anguish").unwrap();
        let b = PersonName::new("Amy", "Anguish").unwrap();
        let c = PersonName::new("Amy", "Other").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_full_name_match_ignores_case_beyond_ascii() {
        let name = PersonName::new("Émile", "Zoë").unwrap();
        assert!(name.matches_full_name("émile zoë"));
        assert!(name.matches_full_name("ÉMILE ZOË"));
        assert!(!name.matches_full_name("Emile Zoe"));
        assert!(!name.matches("émile", "zoë"));
    }
}
