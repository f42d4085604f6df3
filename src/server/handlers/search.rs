use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, SearchAPI};
use crate::entities::{Route, SearchForm};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct EditParams {
    source: Option<String>,
    destination: Option<String>,
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<SearchForm>, Error> {
    let form = api.find_search().await?;

    Ok(form.into())
}

pub async fn edit(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<EditParams>,
) -> Result<Json<SearchForm>, Error> {
    let form = api.edit_search(params.source, params.destination).await?;

    Ok(form.into())
}

pub async fn swap(Extension(api): Extension<DynAPI>) -> Result<Json<SearchForm>, Error> {
    let form = api.swap_locations().await?;

    Ok(form.into())
}

pub async fn submit(Extension(api): Extension<DynAPI>) -> Result<Json<Route>, Error> {
    let route = api.submit_search().await?;

    Ok(route.into())
}
