use dioxus_gallery::{GalleryNav, PhotoCursor};

/// Fullscreen overlay state, independent of the modal's photo position
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    open: bool,
    cursor: PhotoCursor,
}

impl GalleryState {
    /// Opens at the first photo
    pub fn open(&mut self, photo_count: usize) {
        self.open = true;
        self.cursor = PhotoCursor::new(photo_count);
    }

    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn cursor(&self) -> PhotoCursor {
        self.cursor
    }

    pub fn navigate(&mut self, nav: GalleryNav) -> bool {
        self.open && self.cursor.apply(nav)
    }
}
