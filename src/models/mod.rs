pub mod card_view;
pub mod listing;
pub mod listing_detail;
pub mod photo;

pub use card_view::CardView;
pub use listing::{FeatureCategory, Listing, VirtualTour};
pub use listing_detail::ListingDetail;
pub use photo::{Photo, PhotoSize};
