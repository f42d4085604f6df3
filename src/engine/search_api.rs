use super::{helpers, Engine};

use async_trait::async_trait;

use crate::{
    api::SearchAPI,
    entities::{Route, SearchForm},
    error::Error,
    state::Action,
};

#[async_trait]
impl SearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_search(&self) -> Result<SearchForm, Error> {
        let state = self.state.lock().await;

        Ok(state.search.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn edit_search(
        &self,
        source: Option<String>,
        destination: Option<String>,
    ) -> Result<SearchForm, Error> {
        let mut state = self.state.lock().await;

        if let Some(source) = source {
            state.apply(Action::EditSource(source));
        }
        if let Some(destination) = destination {
            state.apply(Action::EditDestination(destination));
        }

        Ok(state.search.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn swap_locations(&self) -> Result<SearchForm, Error> {
        let mut state = self.state.lock().await;
        state.apply(Action::SwapLocations);

        Ok(state.search.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn submit_search(&self) -> Result<Route, Error> {
        let mut state = self.state.lock().await;

        helpers::submit_search(&mut state, &self.places, &self.config)
    }
}
