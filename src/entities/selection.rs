use serde::{Deserialize, Serialize};

/// Clicking the selected id again clears the selection.
pub fn select(current: Option<&str>, clicked: &str) -> Option<String> {
    match current {
        Some(id) if id == clicked => None,
        _ => Some(clicked.to_string()),
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionState {
    pub selected_attraction_id: Option<String>,
}

impl SelectionState {
    #[tracing::instrument(skip(self))]
    pub fn select(&mut self, clicked: &str) {
        self.selected_attraction_id = select(self.selected_attraction_id.as_deref(), clicked);
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_attraction_id.as_deref() == Some(id)
    }
}

#[test]
fn select_toggle_test() {
    let first = select(None, "1");
    assert_eq!(first.as_deref(), Some("1"));
    assert_eq!(select(first.as_deref(), "1"), None);

    assert_eq!(select(Some("1"), "2").as_deref(), Some("2"));
}

#[test]
fn selection_state_test() {
    let mut selection = SelectionState::default();

    selection.select("3");
    assert!(selection.is_selected("3"));
    assert!(!selection.is_selected("4"));

    selection.select("4");
    assert_eq!(selection.selected_attraction_id.as_deref(), Some("4"));

    selection.select("4");
    assert_eq!(selection, SelectionState::default());
}
