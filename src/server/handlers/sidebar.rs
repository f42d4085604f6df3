use axum::extract::{Extension, Json, Path};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, SidebarAPI};
use crate::error::Error;
use crate::views::SidebarView;

#[derive(Serialize, Deserialize)]
pub struct SearchTermParams {
    search_term: String,
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<SidebarView>, Error> {
    let view = api.find_sidebar().await?;

    Ok(view.into())
}

pub async fn toggle(Extension(api): Extension<DynAPI>) -> Result<Json<SidebarView>, Error> {
    let view = api.toggle_sidebar().await?;

    Ok(view.into())
}

pub async fn update_search_term(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<SearchTermParams>,
) -> Result<Json<SidebarView>, Error> {
    let view = api.update_search_term(params.search_term).await?;

    Ok(view.into())
}

pub async fn toggle_category(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<SidebarView>, Error> {
    let view = api.toggle_category(id).await?;

    Ok(view.into())
}
