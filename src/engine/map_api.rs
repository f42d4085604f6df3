use super::Engine;

use async_trait::async_trait;

use crate::{
    api::MapAPI,
    error::{invalid_input_error, Error},
    state::AppState,
    views::{Canvas, MapView},
};

#[async_trait]
impl MapAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_map(&self, canvas: Option<Canvas>) -> Result<MapView, Error> {
        let canvas = canvas.unwrap_or(self.config.canvas);

        if !canvas.is_valid() {
            return Err(invalid_input_error());
        }

        let state = self.state.lock().await;

        Ok(MapView::build(&state, &self.catalog, canvas))
    }

    #[tracing::instrument(skip(self))]
    async fn find_state(&self) -> Result<AppState, Error> {
        let state = self.state.lock().await;

        Ok(state.clone())
    }
}
