use super::{
    route_key, AutoplayTimer, CarouselState, GalleryState, KeyAction, ModalState, NavKey,
    PauseReason, Swipe, SwipeTracker, TimerHandle,
};
use crate::models::Listing;
use dioxus_gallery::GalleryNav;

/// All interaction state of the showcase page behind one set of operations.
///
/// Every operation that may start the autoplay timer takes the starter
/// closure, so the page decides how a timer runs while this type decides
/// when.
#[derive(Debug)]
pub struct ShowcaseController<H: TimerHandle> {
    carousel: CarouselState,
    swipe: SwipeTracker,
    autoplay: AutoplayTimer<H>,
    modal: ModalState,
    gallery: GalleryState,
}

impl<H: TimerHandle> ShowcaseController<H> {
    pub fn new(listing_count: usize, visible_cards: usize, swipe_threshold: f64) -> Self {
        Self {
            carousel: CarouselState::new(listing_count, visible_cards),
            swipe: SwipeTracker::new(swipe_threshold),
            autoplay: AutoplayTimer::new(),
            modal: ModalState::default(),
            gallery: GalleryState::default(),
        }
    }

    pub fn carousel(&self) -> &CarouselState {
        &self.carousel
    }

    pub fn modal(&self) -> &ModalState {
        &self.modal
    }

    pub fn gallery(&self) -> &GalleryState {
        &self.gallery
    }

    #[allow(dead_code)]
    pub fn autoplay(&self) -> &AutoplayTimer<H> {
        &self.autoplay
    }

    pub fn start_autoplay(&mut self, start: impl FnOnce() -> H) {
        self.autoplay.restart(start);
    }

    /// Manual carousel step. The timer restarts only if the window moved.
    pub fn step(&mut self, forward: bool, start: impl FnOnce() -> H) -> bool {
        let moved = if forward {
            self.carousel.advance()
        } else {
            self.carousel.retreat()
        };
        if moved {
            self.autoplay.restart(start);
        }
        moved
    }

    pub fn autoplay_tick(&mut self) -> usize {
        self.carousel.autoplay_tick()
    }

    pub fn touch_start(&mut self, screen_x: f64) {
        self.swipe.touch_start(screen_x);
    }

    /// Finishes a swipe; a left swipe shows the next cards
    pub fn touch_end(&mut self, screen_x: f64, start: impl FnOnce() -> H) -> bool {
        match self.swipe.touch_end(screen_x) {
            Some(Swipe::Left) => self.step(true, start),
            Some(Swipe::Right) => self.step(false, start),
            None => false,
        }
    }

    pub fn set_page_hidden(&mut self, hidden: bool, start: impl FnOnce() -> H) {
        if hidden {
            self.autoplay.pause(PauseReason::PageHidden);
        } else {
            self.autoplay.resume(PauseReason::PageHidden, start);
        }
    }

    /// Shows `listing` in the detail panel and holds autoplay back
    pub fn open_listing(&mut self, listing: &Listing) {
        self.modal.open(listing);
        self.gallery.close();
        self.autoplay.pause(PauseReason::ModalOpen);
    }

    /// Closes the panel together with its overlay. Returns `false` and
    /// leaves autoplay untouched if the panel was not open.
    pub fn close_modal(&mut self, start: impl FnOnce() -> H) -> bool {
        if !self.modal.close() {
            return false;
        }
        self.gallery.close();
        self.autoplay.resume(PauseReason::ModalOpen, start);
        true
    }

    pub fn navigate_modal(&mut self, nav: GalleryNav) -> bool {
        self.modal.navigate(nav)
    }

    /// Opens the overlay over the open panel's photos
    pub fn open_gallery(&mut self, photo_count: usize) -> bool {
        if !self.modal.is_open() {
            return false;
        }
        self.gallery.open(photo_count);
        true
    }

    pub fn close_gallery(&mut self) -> bool {
        self.gallery.close()
    }

    pub fn navigate_gallery(&mut self, nav: GalleryNav) -> bool {
        self.gallery.navigate(nav)
    }

    /// Applies a key press to the topmost open layer and reports what it did
    pub fn handle_key(&mut self, key: NavKey, start: impl FnOnce() -> H) -> Option<KeyAction> {
        let action = route_key(key, self.modal.is_open(), self.gallery.is_open())?;
        match action {
            KeyAction::CarouselPrev => {
                self.step(false, start);
            }
            KeyAction::CarouselNext => {
                self.step(true, start);
            }
            KeyAction::ModalPhoto(nav) => {
                self.navigate_modal(nav);
            }
            KeyAction::GalleryPhoto(nav) => {
                self.navigate_gallery(nav);
            }
            KeyAction::CloseGallery => {
                self.close_gallery();
            }
            KeyAction::CloseModal => {
                self.close_modal(start);
            }
        }
        Some(action)
    }
}
