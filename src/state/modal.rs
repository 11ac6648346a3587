use crate::models::Listing;
use dioxus_gallery::{GalleryNav, PhotoCursor};

/// Detail panel state: the open listing and its inline photo position
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModalState {
    open: Option<OpenListing>,
}

#[derive(Clone, Debug, PartialEq)]
struct OpenListing {
    listing_id: String,
    photos: PhotoCursor,
}

impl ModalState {
    /// Shows `listing`, starting at its first photo
    pub fn open(&mut self, listing: &Listing) {
        self.open = Some(OpenListing {
            listing_id: listing.id.clone(),
            photos: PhotoCursor::new(listing.photos.len()),
        });
    }

    /// Returns `false` if the panel was already closed
    pub fn close(&mut self) -> bool {
        self.open.take().is_some()
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    pub fn listing_id(&self) -> Option<&str> {
        self.open.as_ref().map(|o| o.listing_id.as_str())
    }

    /// Photo position; a closed panel has an empty cursor
    pub fn cursor(&self) -> PhotoCursor {
        self.open.as_ref().map(|o| o.photos).unwrap_or_default()
    }

    pub fn navigate(&mut self, nav: GalleryNav) -> bool {
        match self.open.as_mut() {
            Some(open) => open.photos.apply(nav),
            None => false,
        }
    }
}
