use std::collections::BTreeSet;

use axum::extract::{Extension, Json, Path, Query};
use serde::{Deserialize, Serialize};

use crate::api::{AttractionAPI, DynAPI};
use crate::entities::{Attraction, CategoryInfo, SelectionState};
use crate::error::Error;

#[derive(Serialize, Deserialize)]
pub struct ListParams {
    query: Option<String>,
    /// Comma separated category ids.
    categories: Option<String>,
}

fn parse_categories(raw: Option<&str>) -> BTreeSet<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

pub async fn list(
    Extension(api): Extension<DynAPI>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Attraction>>, Error> {
    let categories = parse_categories(params.categories.as_deref());
    let attractions = api
        .list_attractions(params.query.unwrap_or_default(), categories)
        .await?;

    Ok(attractions.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<Attraction>, Error> {
    let attraction = api.find_attraction(id).await?;

    Ok(attraction.into())
}

pub async fn select(
    Extension(api): Extension<DynAPI>,
    Path(id): Path<String>,
) -> Result<Json<SelectionState>, Error> {
    let selection = api.select_attraction(id).await?;

    Ok(selection.into())
}

pub async fn list_categories(
    Extension(api): Extension<DynAPI>,
) -> Result<Json<Vec<CategoryInfo>>, Error> {
    let categories = api.list_categories().await?;

    Ok(categories.into())
}

#[test]
fn parse_categories_test() {
    assert!(parse_categories(None).is_empty());
    assert!(parse_categories(Some("")).is_empty());

    let parsed = parse_categories(Some("museum, landmark,,museum"));
    let expected: BTreeSet<String> = ["landmark".to_string(), "museum".to_string()]
        .into_iter()
        .collect();
    assert_eq!(parsed, expected);
}
