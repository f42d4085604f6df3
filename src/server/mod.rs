mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, patch, post, put},
    Router,
};

use crate::api::{DynAPI, API};
use crate::error::{server_error, Error};
use crate::server::handlers::{attractions, map, routes, search, sidebar};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/route", post(routes::create).get(routes::find))
        .route("/search", get(search::find).put(search::edit))
        .route("/search/swap", patch(search::swap))
        .route("/search/submit", post(search::submit))
        .route("/attractions", get(attractions::list))
        .route("/attractions/:id", get(attractions::find))
        .route("/attractions/:id/select", patch(attractions::select))
        .route("/categories", get(attractions::list_categories))
        .route("/sidebar", get(sidebar::find))
        .route("/sidebar/toggle", patch(sidebar::toggle))
        .route("/sidebar/search", put(sidebar::update_search_term))
        .route(
            "/sidebar/categories/:id/toggle",
            patch(sidebar::toggle_category),
        )
        .route("/map", get(map::find))
        .route("/state", get(map::find_state))
        .layer(Extension(api))
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) -> Result<(), Error> {
    let api = Arc::new(api) as DynAPI;
    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .map_err(server_error)
}
