use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Landmark,
    Museum,
    Restaurant,
    Park,
}

impl Category {
    /// Display order of the sidebar badges.
    pub const ALL: [Category; 4] = [
        Category::Landmark,
        Category::Museum,
        Category::Restaurant,
        Category::Park,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::Landmark => "landmark",
            Self::Museum => "museum",
            Self::Restaurant => "restaurant",
            Self::Park => "park",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Landmark => "Landmarks",
            Self::Museum => "Museums",
            Self::Restaurant => "Restaurants",
            Self::Park => "Parks",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.id() == id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryInfo {
    pub id: String,
    pub label: String,
}

impl From<Category> for CategoryInfo {
    fn from(category: Category) -> Self {
        Self {
            id: category.id().into(),
            label: category.label().into(),
        }
    }
}

#[test]
fn category_id_test() {
    for category in Category::ALL {
        assert_eq!(Category::from_id(category.id()), Some(category));
    }

    assert_eq!(Category::from_id("beach"), None);
    assert_eq!(Category::from_id("Landmark"), None);
}
