use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::Category;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attraction {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub rating: f64,
    pub distance: String,
    pub image: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
}

impl Attraction {
    /// `needle` must already be lowercased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }

    pub fn in_categories(&self, categories: &BTreeSet<String>) -> bool {
        categories.is_empty() || categories.contains(self.category.id())
    }
}
