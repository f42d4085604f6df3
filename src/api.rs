use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::entities::{Attraction, CategoryInfo, Route, SearchForm, SelectionState};
use crate::error::Error;
use crate::state::AppState;
use crate::views::{Canvas, MapView, SidebarView};

#[async_trait]
pub trait RouteAPI {
    async fn search_route(&self, source: String, destination: String) -> Result<Route, Error>;
    async fn find_route(&self) -> Result<Option<Route>, Error>;
}

#[async_trait]
pub trait SearchAPI {
    async fn find_search(&self) -> Result<SearchForm, Error>;
    async fn edit_search(
        &self,
        source: Option<String>,
        destination: Option<String>,
    ) -> Result<SearchForm, Error>;
    async fn swap_locations(&self) -> Result<SearchForm, Error>;
    async fn submit_search(&self) -> Result<Route, Error>;
}

#[async_trait]
pub trait AttractionAPI {
    async fn list_attractions(
        &self,
        query: String,
        categories: BTreeSet<String>,
    ) -> Result<Vec<Attraction>, Error>;
    async fn find_attraction(&self, id: String) -> Result<Attraction, Error>;
    async fn select_attraction(&self, id: String) -> Result<SelectionState, Error>;
    async fn list_categories(&self) -> Result<Vec<CategoryInfo>, Error>;
}

#[async_trait]
pub trait SidebarAPI {
    async fn find_sidebar(&self) -> Result<SidebarView, Error>;
    async fn toggle_sidebar(&self) -> Result<SidebarView, Error>;
    async fn update_search_term(&self, search_term: String) -> Result<SidebarView, Error>;
    async fn toggle_category(&self, category_id: String) -> Result<SidebarView, Error>;
}

#[async_trait]
pub trait MapAPI {
    async fn find_map(&self, canvas: Option<Canvas>) -> Result<MapView, Error>;
    async fn find_state(&self) -> Result<AppState, Error>;
}

pub trait API: RouteAPI + SearchAPI + AttractionAPI + SidebarAPI + MapAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
