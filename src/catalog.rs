//! Hard-coded attractions shown around the San Francisco demo route.

use crate::entities::{Attraction, Category};

const PLACEHOLDER_IMAGE: &str = "/api/placeholder/300/200";

fn attraction(
    id: &str,
    name: &str,
    category: Category,
    rating: f64,
    distance: &str,
    description: &str,
    (lat, lng): (f64, f64),
) -> Attraction {
    Attraction {
        id: id.into(),
        name: name.into(),
        category,
        rating,
        distance: distance.into(),
        image: PLACEHOLDER_IMAGE.into(),
        description: description.into(),
        lat,
        lng,
    }
}

pub fn sample_attractions() -> Vec<Attraction> {
    vec![
        attraction(
            "1",
            "Golden Gate Bridge",
            Category::Landmark,
            4.8,
            "0.5 km",
            "Iconic suspension bridge and symbol of San Francisco",
            (37.8199, -122.4783),
        ),
        attraction(
            "2",
            "Alcatraz Island",
            Category::Museum,
            4.7,
            "1.2 km",
            "Former federal prison on a historic island",
            (37.8267, -122.4230),
        ),
        attraction(
            "3",
            "Fisherman's Wharf",
            Category::Restaurant,
            4.3,
            "2.1 km",
            "Famous waterfront area with dining and entertainment",
            (37.8080, -122.4177),
        ),
        attraction(
            "4",
            "Lombard Street",
            Category::Landmark,
            4.5,
            "3.0 km",
            "The most crooked street in the world",
            (37.8021, -122.4187),
        ),
    ]
}

#[test]
fn sample_ids_are_unique() {
    let catalog = sample_attractions();
    let mut ids: Vec<&str> = catalog.iter().map(|a| a.id.as_str()).collect();
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), catalog.len());
    assert!(catalog.iter().all(|a| (0.0..=5.0).contains(&a.rating)));
}
