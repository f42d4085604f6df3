use serde::{Deserialize, Serialize};

use crate::entities::{Attraction, Category, FilterState};
use crate::state::AppState;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryBadge {
    pub id: String,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttractionCard {
    pub attraction: Attraction,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmptyMessage {
    pub title: String,
    pub hint: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SidebarView {
    pub open: bool,
    pub filter: FilterState,
    pub categories: Vec<CategoryBadge>,
    pub attractions: Vec<AttractionCard>,
    pub empty_message: Option<EmptyMessage>,
}

impl SidebarView {
    pub fn build(state: &AppState, catalog: &[Attraction]) -> Self {
        let categories = Category::ALL
            .into_iter()
            .map(|category| CategoryBadge {
                id: category.id().into(),
                label: category.label().into(),
                selected: state.filter.is_selected(category.id()),
            })
            .collect();

        let attractions: Vec<AttractionCard> = state
            .filter
            .apply(catalog)
            .into_iter()
            .map(|attraction| AttractionCard {
                selected: state.selection.is_selected(&attraction.id),
                attraction,
            })
            .collect();

        let empty_message = attractions.is_empty().then(|| EmptyMessage {
            title: "No attractions found".into(),
            hint: "Try adjusting your search or filters".into(),
        });

        Self {
            open: state.sidebar_open,
            filter: state.filter.clone(),
            categories,
            attractions,
            empty_message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_attractions;
    use crate::state::Action;

    #[test]
    fn default_sidebar_lists_everything() {
        let view = SidebarView::build(&AppState::default(), &sample_attractions());

        assert!(view.open);
        assert_eq!(view.attractions.len(), 4);
        assert!(view.empty_message.is_none());

        let ids: Vec<&str> = view.categories.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["landmark", "museum", "restaurant", "park"]);
        assert!(view.categories.iter().all(|c| !c.selected));
    }

    #[test]
    fn filtered_sidebar_marks_state() {
        let mut state = AppState::default();
        state.apply(Action::ToggleCategory("landmark".into()));
        state.apply(Action::SelectAttraction("4".into()));

        let view = SidebarView::build(&state, &sample_attractions());

        let names: Vec<&str> = view
            .attractions
            .iter()
            .map(|card| card.attraction.name.as_str())
            .collect();
        assert_eq!(names, vec!["Golden Gate Bridge", "Lombard Street"]);
        assert!(!view.attractions[0].selected);
        assert!(view.attractions[1].selected);
        assert!(view.categories[0].selected);
    }

    #[test]
    fn park_filter_shows_empty_message() {
        let mut state = AppState::default();
        state.apply(Action::ToggleCategory("park".into()));

        let view = SidebarView::build(&state, &sample_attractions());

        assert!(view.attractions.is_empty());
        assert_eq!(view.empty_message.unwrap().title, "No attractions found");
    }
}
