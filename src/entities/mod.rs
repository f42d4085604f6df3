mod attraction;
mod category;
mod filter;
mod location;
mod notice;
mod route;
mod search;
mod selection;

pub use attraction::Attraction;
pub use category::{Category, CategoryInfo};
pub use filter::{filter, toggle, FilterState};
pub use location::{Coordinates, Location};
pub use notice::{Notice, Variant as NoticeVariant};
pub use route::Route;
pub use search::SearchForm;
pub use selection::{select, SelectionState};
