//! Application state and the reducer that mutates it.

use serde::{Deserialize, Serialize};

use crate::entities::{FilterState, Notice, Route, SearchForm, SelectionState};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub search: SearchForm,
    pub route: Option<Route>,
    pub filter: FilterState,
    pub selection: SelectionState,
    pub sidebar_open: bool,
    pub notice: Option<Notice>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            search: SearchForm::default(),
            route: None,
            filter: FilterState::default(),
            selection: SelectionState::default(),
            sidebar_open: true,
            notice: None,
        }
    }
}

#[derive(Clone, Debug)]
pub enum Action {
    EditSource(String),
    EditDestination(String),
    SwapLocations,
    ShowRoute(Route),
    RejectSearch,
    SetSearchTerm(String),
    ToggleCategory(String),
    SelectAttraction(String),
    ToggleSidebar,
}

impl AppState {
    #[tracing::instrument(skip(self))]
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::EditSource(text) => self.search.source = text,
            Action::EditDestination(text) => self.search.destination = text,
            Action::SwapLocations => self.search.swap(),
            Action::ShowRoute(route) => {
                self.notice = Some(Notice::route_found(
                    &self.search.source,
                    &self.search.destination,
                ));
                self.route = Some(route);
            }
            Action::RejectSearch => self.notice = Some(Notice::missing_information()),
            Action::SetSearchTerm(text) => self.filter.search_term = text,
            Action::ToggleCategory(id) => self.filter.toggle_category(&id),
            Action::SelectAttraction(id) => self.selection.select(&id),
            Action::ToggleSidebar => self.sidebar_open = !self.sidebar_open,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Location, NoticeVariant};

    fn route() -> Route {
        Route::new(
            Location::new("Chicago, IL", 41.8781, -87.6298),
            Location::new("New York, NY", 40.7128, -74.0060),
        )
    }

    #[test]
    fn sidebar_starts_open() {
        let mut state = AppState::default();
        assert!(state.sidebar_open);

        state.apply(Action::ToggleSidebar);
        assert!(!state.sidebar_open);

        state.apply(Action::ToggleSidebar);
        assert!(state.sidebar_open);
    }

    #[test]
    fn show_route_records_notice_from_inputs() {
        let mut state = AppState::default();
        state.apply(Action::EditSource("chicago".into()));
        state.apply(Action::EditDestination("new york".into()));

        let route = route();
        state.apply(Action::ShowRoute(route.clone()));

        assert_eq!(state.route, Some(route));
        let notice = state.notice.unwrap();
        assert_eq!(notice.title, "Route Found");
        assert_eq!(notice.description, "Navigation from chicago to new york");
        assert_eq!(notice.variant, NoticeVariant::Default);
    }

    #[test]
    fn reject_keeps_previous_route() {
        let mut state = AppState::default();
        let route = route();
        state.apply(Action::ShowRoute(route.clone()));

        state.apply(Action::RejectSearch);

        assert_eq!(state.route, Some(route));
        let notice = state.notice.unwrap();
        assert_eq!(notice.title, "Missing Information");
        assert_eq!(notice.variant, NoticeVariant::Destructive);
    }

    #[test]
    fn swap_exchanges_inputs() {
        let mut state = AppState::default();
        state.apply(Action::EditSource("a".into()));
        state.apply(Action::EditDestination("b".into()));

        state.apply(Action::SwapLocations);

        assert_eq!(state.search, SearchForm::new("b", "a"));
    }

    #[test]
    fn filter_and_selection_actions() {
        let mut state = AppState::default();

        state.apply(Action::SetSearchTerm("bridge".into()));
        state.apply(Action::ToggleCategory("landmark".into()));
        state.apply(Action::SelectAttraction("1".into()));

        assert_eq!(state.filter.search_term, "bridge");
        assert!(state.filter.is_selected("landmark"));
        assert!(state.selection.is_selected("1"));

        state.apply(Action::ToggleCategory("landmark".into()));
        state.apply(Action::SelectAttraction("1".into()));

        assert!(state.filter.selected_categories.is_empty());
        assert_eq!(state.selection.selected_attraction_id, None);
    }

    #[test]
    fn state_serializes() {
        let state = AppState::default();
        let value = serde_json::to_value(&state).unwrap();

        assert_eq!(value["sidebar_open"], serde_json::json!(true));
        assert_eq!(value["route"], serde_json::Value::Null);
    }
}
