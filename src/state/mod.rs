//! Interaction state of the showcase widgets, kept apart from rendering.

pub mod autoplay;
pub mod carousel;
pub mod controller;
pub mod gallery;
pub mod keyboard;
pub mod modal;

pub use autoplay::{AutoplayTimer, PauseReason, TimerHandle};
pub use carousel::{CarouselState, Swipe, SwipeTracker};
pub use controller::ShowcaseController;
pub use gallery::GalleryState;
pub use keyboard::{route_key, KeyAction, NavKey};
pub use modal::ModalState;
