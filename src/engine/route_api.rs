use super::{helpers, Engine};

use async_trait::async_trait;

use crate::{api::RouteAPI, entities::Route, error::Error, state::Action};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_route(&self, source: String, destination: String) -> Result<Route, Error> {
        let mut state = self.state.lock().await;

        state.apply(Action::EditSource(source));
        state.apply(Action::EditDestination(destination));

        helpers::submit_search(&mut state, &self.places, &self.config)
    }

    #[tracing::instrument(skip(self))]
    async fn find_route(&self) -> Result<Option<Route>, Error> {
        let state = self.state.lock().await;

        Ok(state.route.clone())
    }
}
