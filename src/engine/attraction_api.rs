use super::Engine;

use async_trait::async_trait;
use std::collections::BTreeSet;

use crate::{
    api::AttractionAPI,
    entities::{filter, Attraction, Category, CategoryInfo, SelectionState},
    error::{unknown_attraction_error, Error},
    state::Action,
};

impl Engine {
    fn catalog_entry(&self, id: &str) -> Result<&Attraction, Error> {
        self.catalog
            .iter()
            .find(|attraction| attraction.id == id)
            .ok_or_else(unknown_attraction_error)
    }
}

#[async_trait]
impl AttractionAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn list_attractions(
        &self,
        query: String,
        categories: BTreeSet<String>,
    ) -> Result<Vec<Attraction>, Error> {
        Ok(filter(&self.catalog, &query, &categories))
    }

    #[tracing::instrument(skip(self))]
    async fn find_attraction(&self, id: String) -> Result<Attraction, Error> {
        Ok(self.catalog_entry(&id)?.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn select_attraction(&self, id: String) -> Result<SelectionState, Error> {
        self.catalog_entry(&id)?;

        let mut state = self.state.lock().await;
        state.apply(Action::SelectAttraction(id));

        Ok(state.selection.clone())
    }

    #[tracing::instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<CategoryInfo>, Error> {
        Ok(Category::ALL.into_iter().map(CategoryInfo::from).collect())
    }
}
