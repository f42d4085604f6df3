use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Destructive,
}

impl Notice {
    fn new(title: &str, description: String, variant: Variant) -> Self {
        Self {
            title: title.into(),
            description,
            variant,
            created_at: Utc::now(),
        }
    }

    pub fn route_found(source: &str, destination: &str) -> Self {
        Self::new(
            "Route Found",
            format!("Navigation from {} to {}", source, destination),
            Variant::Default,
        )
    }

    pub fn missing_information() -> Self {
        Self::new(
            "Missing Information",
            "Please enter both source and destination locations.".into(),
            Variant::Destructive,
        )
    }
}
