use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use strsim::levenshtein;

use crate::errors::InputError;

/// Largest edit distance still offered as a "did you mean" hint.
const SUGGESTION_DISTANCE: usize = 3;

/// Fixed set of spending categories an expense can be filed under.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Food,
    Travel,
    Shopping,
    Medical,
    Stationary,
    Grocery,
    Bills,
    Other,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Food,
        Category::Travel,
        Category::Shopping,
        Category::Medical,
        Category::Stationary,
        Category::Grocery,
        Category::Bills,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Travel => "Travel",
            Category::Shopping => "Shopping",
            Category::Medical => "Medical",
            Category::Stationary => "Stationary",
            Category::Grocery => "Grocery",
            Category::Bills => "Bills",
            Category::Other => "Other",
        }
    }

    /// Comma-separated list of every category name, in declaration order.
    pub fn listing() -> String {
        Self::ALL
            .iter()
            .map(Category::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Closest category to a rejected input, if any is near enough to hint at.
    pub fn suggest(input: &str) -> Option<Category> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        Self::ALL
            .iter()
            .map(|category| (levenshtein(&category.as_str().to_lowercase(), &needle), *category))
            .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
            .min_by_key(|(distance, _)| *distance)
            .map(|(_, category)| category)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InputError;

    /// Exact, case-sensitive match against the category names.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| InputError::InvalidCategory(value.to_string()))
    }
}

/// Membership test against the fixed category set.
pub fn is_valid_category(value: &str) -> bool {
    value.parse::<Category>().is_ok()
}
