pub mod listing_service;
pub mod map_tiles;

pub use listing_service::*;
