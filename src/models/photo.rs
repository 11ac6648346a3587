use crate::models::card_view::PLACEHOLDER_IMAGE;
use dioxus_gallery::GalleryPhoto;
use serde::{Deserialize, Serialize};

/// One listing photo at three resolution tiers.
///
/// Its position in the parent listing's photo list is its identity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Photo {
    #[serde(rename = "Uri300", default)]
    pub thumbnail: Option<String>,
    #[serde(rename = "Uri800", default)]
    pub medium: Option<String>,
    #[serde(rename = "Uri1600", default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoSize {
    Thumbnail, // 300px for strips and previews
    Medium,    // 800px for cards and the inline flipper
    Large,     // 1600px for the fullscreen overlay
}

impl Photo {
    /// URL for `size`, falling back to the nearest available tier
    pub fn url(&self, size: PhotoSize) -> Option<&str> {
        let order = match size {
            PhotoSize::Thumbnail => [&self.thumbnail, &self.medium, &self.large],
            PhotoSize::Medium => [&self.medium, &self.large, &self.thumbnail],
            PhotoSize::Large => [&self.large, &self.medium, &self.thumbnail],
        };
        order
            .into_iter()
            .flatten()
            .map(String::as_str)
            .find(|url| !url.is_empty())
    }
}

impl Photo {
    /// Gallery entry with every tier filled, placeholders where nothing exists
    pub fn to_gallery_photo(&self) -> GalleryPhoto {
        let pick = |size| self.url(size).unwrap_or(PLACEHOLDER_IMAGE).to_string();
        GalleryPhoto {
            thumbnail_url: pick(PhotoSize::Thumbnail),
            medium_url: pick(PhotoSize::Medium),
            large_url: pick(PhotoSize::Large),
        }
    }
}
