use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::ParseError;

/// Physical condition of the item being listed
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    #[default]
    New,
    LikeNew,
    Good,
    Used,
    ForParts,
}

impl Condition {
    /// Variants in the order the selection control shows them
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Used,
        Condition::ForParts,
    ];

    /// Value sent to the listing API
    pub fn wire_value(self) -> &'static str {
        match self {
            Condition::New => "NEW",
            Condition::LikeNew => "LIKE_NEW",
            Condition::Good => "GOOD",
            Condition::Used => "USED",
            Condition::ForParts => "FOR_PARTS",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

impl FromStr for Condition {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|condition| condition.wire_value() == s)
            .ok_or_else(|| ParseError::UnknownCondition(s.to_string()))
    }
}

/// Category reference data, owned by the catalog service
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub slug: String,
}

/// In-progress listing being authored in the form.
///
/// Serialized with camelCase keys; this is the exact body of the creation
/// request. Missing keys deserialize to the form's initial values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ListingDraft {
    #[validate(length(min = 3))]
    pub title: String,
    #[validate(length(min = 10))]
    pub description: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(length(min = 3))]
    pub location: String,
    pub category_id: String,
    pub condition: Condition,
    pub offers_shipping: bool,
    pub price_negotiable: bool,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            price: 0.0,
            location: String::new(),
            category_id: String::new(),
            condition: Condition::New,
            offers_shipping: false,
            price_negotiable: false,
        }
    }
}

/// Listing API response to a successful creation request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedListing {
    pub id: String,
}
