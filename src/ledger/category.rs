use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// Categories offered when no configuration overrides them.
pub const DEFAULT_CATEGORIES: [&str; 7] = [
    "Food & Dining",
    "Transportation",
    "Shopping",
    "Bills & Utilities",
    "Entertainment",
    "Healthcare",
    "Other",
];

/// Names the spending bucket a transaction or budget belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Category {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for Category {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Ordered list of the categories a session may use.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategorySet(Vec<Category>);

impl CategorySet {
    /// Builds a set, silently dropping repeated names (first occurrence wins).
    pub fn new<I, C>(names: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        let mut categories: Vec<Category> = Vec::new();
        for name in names {
            let category = name.into();
            if !categories.contains(&category) {
                categories.push(category);
            }
        }
        Self(categories)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|category| category.as_str() == name)
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.0.iter().find(|category| category.as_str() == name)
    }

    /// The category a fresh form starts with.
    pub fn first(&self) -> Option<&Category> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the first name that appears more than once, if any.
    ///
    /// `new` never produces duplicates, but a deserialized set can.
    pub fn first_duplicate(&self) -> Option<&Category> {
        self.0
            .iter()
            .enumerate()
            .find(|(index, category)| self.0[..*index].contains(category))
            .map(|(_, category)| category)
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}
