pub mod carousel;
pub mod location_map;
pub mod property_card;
pub mod property_modal;
pub mod showcase;

pub use carousel::Carousel;
pub use location_map::LocationMap;
pub use property_card::PropertyCard;
pub use property_modal::PropertyModal;
pub use showcase::ShowcasePage;
