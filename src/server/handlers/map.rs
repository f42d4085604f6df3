use axum::extract::{Extension, Json, Query};
use serde::{Deserialize, Serialize};

use crate::api::{DynAPI, MapAPI};
use crate::error::{invalid_input_error, Error};
use crate::state::AppState;
use crate::views::{Canvas, MapView};

#[derive(Serialize, Deserialize)]
pub struct FindParams {
    width: Option<f64>,
    height: Option<f64>,
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<FindParams>,
) -> Result<Json<MapView>, Error> {
    let canvas = match (params.width, params.height) {
        (None, None) => None,
        (Some(width), Some(height)) => Some(Canvas { width, height }),
        _ => return Err(invalid_input_error()),
    };

    let view = api.find_map(canvas).await?;

    Ok(view.into())
}

pub async fn find_state(Extension(api): Extension<DynAPI>) -> Result<Json<AppState>, Error> {
    let state = api.find_state().await?;

    Ok(state.into())
}
