//! Spending categories
//!
//! The category set is closed: every transaction, budget entry and filter
//! uses this one enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{TrackerError, ValidationField};

/// A spending category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Entertainment,
    Health,
    Shopping,
    Education,
    Other,
}

impl Category {
    /// Every category, in canonical display order
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Transportation,
        Category::Housing,
        Category::Entertainment,
        Category::Health,
        Category::Shopping,
        Category::Education,
        Category::Other,
    ];

    /// The lowercase identifier ("food")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transportation => "transportation",
            Self::Housing => "housing",
            Self::Entertainment => "entertainment",
            Self::Health => "health",
            Self::Shopping => "shopping",
            Self::Education => "education",
            Self::Other => "other",
        }
    }

    /// The capitalised label shown to users ("Food")
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Housing => "Housing",
            Self::Entertainment => "Entertainment",
            Self::Health => "Health",
            Self::Shopping => "Shopping",
            Self::Education => "Education",
            Self::Other => "Other",
        }
    }

    /// Parse a category identifier, reporting unknown values as a validation error
    pub fn parse(s: &str) -> Result<Self, TrackerError> {
        let needle = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| {
                TrackerError::validation(
                    ValidationField::Category,
                    format!("unknown category '{}'", needle),
                )
            })
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::parse("food").unwrap(), Category::Food);
        assert_eq!(Category::parse("  Housing ").unwrap(), Category::Housing);
        assert_eq!("EDUCATION".parse::<Category>().unwrap(), Category::Education);
    }

    #[test]
    fn test_parse_unknown_is_validation_error() {
        let err = Category::parse("groceries").unwrap_err();
        assert_eq!(err.field(), Some(ValidationField::Category));
        assert!(Category::parse("").is_err());
    }

    #[test]
    fn test_every_identifier_round_trips() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.as_str()).unwrap(), category);
            assert_eq!(Category::parse(category.label()).unwrap(), category);
        }
    }

    #[test]
    fn test_display_uses_label() {
        assert_eq!(Category::Transportation.to_string(), "Transportation");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Entertainment).unwrap();
        assert_eq!(json, "\"entertainment\"");
        let parsed: Category = serde_json::from_str("\"health\"").unwrap();
        assert_eq!(parsed, Category::Health);
    }
}
