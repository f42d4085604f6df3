use serde::{Deserialize, Serialize};

/// Raw text of the source and destination inputs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchForm {
    pub source: String,
    pub destination: String,
}

impl SearchForm {
    pub fn new(source: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.source.trim().is_empty() && !self.destination.trim().is_empty()
    }

    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.destination);
    }
}

#[test]
fn is_complete_test() {
    assert!(SearchForm::new("a", "b").is_complete());
    assert!(!SearchForm::new("  ", "b").is_complete());
    assert!(!SearchForm::new("a", "").is_complete());
    assert!(!SearchForm::default().is_complete());
}

#[test]
fn swap_test() {
    let original = SearchForm::new("Chicago", "New York");

    let mut form = original.clone();
    form.swap();
    assert_eq!(form, SearchForm::new("New York", "Chicago"));

    form.swap();
    assert_eq!(form, original);
}
