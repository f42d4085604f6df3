use axum::extract::{Extension, Json};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, RouteAPI};
use crate::{entities::Route, error::Error};

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    source: String,
    destination: String,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    Json(params): Json<CreateParams>,
) -> Result<Json<Route>, Error> {
    let route = api.search_route(params.source, params.destination).await?;

    Ok(route.into())
}

pub async fn find(Extension(api): Extension<DynAPI>) -> Result<Json<Option<Route>>, Error> {
    let route = api.find_route().await?;

    Ok(route.into())
}
