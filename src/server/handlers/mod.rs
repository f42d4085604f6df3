pub mod attractions;
pub mod map;
pub mod routes;
pub mod search;
pub mod sidebar;
