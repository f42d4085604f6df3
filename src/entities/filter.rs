use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entities::Attraction;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub selected_categories: BTreeSet<String>,
}

impl FilterState {
    pub fn apply(&self, catalog: &[Attraction]) -> Vec<Attraction> {
        filter(catalog, &self.search_term, &self.selected_categories)
    }

    #[tracing::instrument(skip(self))]
    pub fn toggle_category(&mut self, category_id: &str) {
        self.selected_categories = toggle(&self.selected_categories, category_id);
    }

    pub fn is_selected(&self, category_id: &str) -> bool {
        self.selected_categories.contains(category_id)
    }
}

/// Keeps catalog order. Category ids outside the fixed enumeration match
/// nothing.
pub fn filter(
    catalog: &[Attraction],
    search_term: &str,
    selected_categories: &BTreeSet<String>,
) -> Vec<Attraction> {
    let needle = search_term.to_lowercase();

    catalog
        .iter()
        .filter(|attraction| {
            attraction.name_contains(&needle) && attraction.in_categories(selected_categories)
        })
        .cloned()
        .collect()
}

pub fn toggle(selected: &BTreeSet<String>, category_id: &str) -> BTreeSet<String> {
    let mut next = selected.clone();

    if !next.remove(category_id) {
        next.insert(category_id.to_string());
    }

    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_attractions;

    fn categories(ids: &[&str]) -> BTreeSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn names(attractions: &[Attraction]) -> Vec<&str> {
        attractions.iter().map(|a| a.name.as_str()).collect()
    }

    #[test]
    fn empty_search_matches_all() {
        let catalog = sample_attractions();
        assert_eq!(filter(&catalog, "", &BTreeSet::new()), catalog);
    }

    #[test]
    fn category_filter_keeps_order() {
        let catalog = sample_attractions();
        let result = filter(&catalog, "", &categories(&["landmark"]));

        assert_eq!(names(&result), vec!["Golden Gate Bridge", "Lombard Street"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let catalog = sample_attractions();

        let result = filter(&catalog, "GOLDEN", &BTreeSet::new());
        assert_eq!(names(&result), vec!["Golden Gate Bridge"]);

        let result = filter(&catalog, "wHaRf", &BTreeSet::new());
        assert_eq!(names(&result), vec!["Fisherman's Wharf"]);
    }

    #[test]
    fn search_and_categories_combine() {
        let catalog = sample_attractions();

        let result = filter(&catalog, "street", &categories(&["landmark", "museum"]));
        assert_eq!(names(&result), vec!["Lombard Street"]);

        let result = filter(&catalog, "street", &categories(&["museum"]));
        assert!(result.is_empty());
    }

    #[test]
    fn filter_is_idempotent() {
        let catalog = sample_attractions();
        let selected = categories(&["landmark", "restaurant"]);

        let once = filter(&catalog, "a", &selected);
        let twice = filter(&once, "a", &selected);
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_category_is_inert() {
        let catalog = sample_attractions();

        assert!(filter(&catalog, "", &categories(&["beach"])).is_empty());

        let result = filter(&catalog, "", &categories(&["beach", "museum"]));
        assert_eq!(names(&result), vec!["Alcatraz Island"]);
    }

    #[test]
    fn toggle_is_an_involution() {
        let start = categories(&["landmark", "park"]);

        for id in ["museum", "landmark", "unknown"] {
            assert_eq!(toggle(&toggle(&start, id), id), start);
        }

        assert_eq!(toggle(&start, "park"), categories(&["landmark"]));
        assert_eq!(toggle(&BTreeSet::new(), "museum"), categories(&["museum"]));
    }

    #[test]
    fn filter_state_applies_its_fields() {
        let catalog = sample_attractions();
        let mut state = FilterState::default();

        state.toggle_category("museum");
        assert!(state.is_selected("museum"));
        assert_eq!(names(&state.apply(&catalog)), vec!["Alcatraz Island"]);

        state.toggle_category("museum");
        state.search_term = "lomb".into();
        assert_eq!(names(&state.apply(&catalog)), vec!["Lombard Street"]);
    }
}
