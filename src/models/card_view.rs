use crate::format::{format_price_opt, text_or_na};
use crate::models::{Listing, PhotoSize};

/// Image shown for listings without photos
pub const PLACEHOLDER_IMAGE: &str = "/api/placeholder/800/600";

/// Summary shown on a carousel card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: String,
    pub image_url: String,
}

impl CardView {
    pub fn from_listing(listing: &Listing) -> Self {
        let image_url = listing
            .photos
            .first()
            .and_then(|photo| photo.url(PhotoSize::Medium))
            .unwrap_or(PLACEHOLDER_IMAGE)
            .to_string();

        Self {
            id: listing.id.clone(),
            title: text_or_na(listing.title.as_deref()),
            location: location_line(listing),
            price: format_price_opt(listing.price),
            image_url,
        }
    }
}

/// `"City, Area"`, skipping missing parts
pub fn location_line(listing: &Listing) -> String {
    [listing.city.as_deref(), listing.area_name.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
