use crate::{
    config::Config,
    entities::{Location, Route},
    error::{missing_information_error, Error},
    external::places::resolve,
    state::{Action, AppState},
};

/// Resolves the stored form into a route, or records the rejection notice.
#[tracing::instrument(skip(state, places, config))]
pub fn submit_search(
    state: &mut AppState,
    places: &[Location],
    config: &Config,
) -> Result<Route, Error> {
    if !state.search.is_complete() {
        tracing::warn!("route search rejected: missing source or destination");
        state.apply(Action::RejectSearch);
        return Err(missing_information_error());
    }

    let source = resolve(
        places,
        &state.search.source,
        config.source_fallback.lat,
        config.source_fallback.lng,
    );
    let destination = resolve(
        places,
        &state.search.destination,
        config.destination_fallback.lat,
        config.destination_fallback.lng,
    );

    let route = Route::new(source, destination);
    tracing::info!(
        "route {} from {:?} to {:?}",
        route.id,
        route.source.name,
        route.destination.name
    );

    state.apply(Action::ShowRoute(route.clone()));

    Ok(route)
}
