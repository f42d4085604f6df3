mod attraction_api;
mod helpers;
mod map_api;
mod route_api;
mod search_api;
mod sidebar_api;

use tokio::sync::Mutex;

use crate::{
    api::API,
    catalog::sample_attractions,
    config::Config,
    entities::{Attraction, Location},
    external::places::known_places,
    state::AppState,
};

pub struct Engine {
    config: Config,
    places: Vec<Location>,
    catalog: Vec<Attraction>,
    state: Mutex<AppState>,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self::with_data(config, known_places(), sample_attractions())
    }

    #[tracing::instrument(name = "Engine::with_data", skip_all)]
    pub fn with_data(config: Config, places: Vec<Location>, catalog: Vec<Attraction>) -> Self {
        tracing::info!(
            "loaded {} known places and {} attractions",
            places.len(),
            catalog.len()
        );

        Self {
            config,
            places,
            catalog,
            state: Mutex::new(AppState::default()),
        }
    }
}

impl API for Engine {}
