mod map;
mod sidebar;

pub use map::{project, AttractionMarker, Canvas, EndpointMarker, MapView, ScreenPoint, DEFAULT_CENTER};
pub use sidebar::{AttractionCard, CategoryBadge, EmptyMessage, SidebarView};
