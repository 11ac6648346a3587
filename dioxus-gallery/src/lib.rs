//! # Dioxus Gallery
//!
//! Photo navigation widgets for Dioxus.
//!
//! The widgets are controlled components: the parent owns a [`PhotoCursor`],
//! passes it down, and applies the [`GalleryNav`] requests the widgets raise.
//! This keeps every index in exactly one place and lets the navigation rules be
//! tested without a renderer.
//!
//! - [`PhotoFlipper`]: inline main image with prev/next buttons and a thumbnail strip
//! - [`GalleryOverlay`]: fullscreen viewer with counter, thumbnails and a backdrop
//! - [`ThumbnailStrip`]: the clickable thumbnail row both of them use

use dioxus::prelude::*;

mod cursor;

pub use cursor::{GalleryNav, PhotoCursor};

/// One photo in the gallery, addressed by its position in the sequence
#[derive(Clone, PartialEq, Debug)]
pub struct GalleryPhoto {
    /// Small image for thumbnail strips
    pub thumbnail_url: String,
    /// Image used by the inline flipper
    pub medium_url: String,
    /// Image used by the fullscreen overlay
    pub large_url: String,
}

const NAV_BUTTON_STYLE: &str = "position: absolute; top: 50%; transform: translateY(-50%); width: 44px; height: 44px; background: rgba(0, 0, 0, 0.45); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;";

fn nav_button_style(side: &str, enabled: bool) -> String {
    format!(
        "{} {}: 12px; opacity: {};",
        NAV_BUTTON_STYLE,
        side,
        if enabled { "1" } else { "0.4" }
    )
}

/// Alt text of the photo at zero-based `index`, e.g. "Photo 3"
pub fn numbered_alt(label: &str, index: usize) -> String {
    format!("{} {}", label, index + 1)
}

/// Row of clickable thumbnails with the active position highlighted
#[component]
pub fn ThumbnailStrip(
    photos: Vec<GalleryPhoto>,
    /// Highlighted position
    active: Option<usize>,
    on_select: EventHandler<usize>,
    /// Dark variant for the fullscreen overlay
    #[props(default = false)]
    dark: bool,
    /// Alt text prefix, numbered per thumbnail
    #[props(default = "Thumbnail".to_string())]
    alt_label: String,
) -> Element {
    let strip_style = if dark {
        "display: flex; gap: 8px; overflow-x: auto; padding: 12px 16px; background: rgba(0, 0, 0, 0.7);"
    } else {
        "display: flex; gap: 8px; overflow-x: auto; padding: 8px 0;"
    };

    rsx! {
        div { style: "{strip_style}",
            for (index, photo) in photos.into_iter().enumerate() {
                img {
                    key: "{index}",
                    src: "{photo.thumbnail_url}",
                    alt: numbered_alt(&alt_label, index),
                    class: if active == Some(index) { "thumbnail active" } else { "thumbnail" },
                    style: if active == Some(index) {
                        "width: 72px; height: 54px; object-fit: cover; border-radius: 4px; cursor: pointer; border: 2px solid #0066cc; opacity: 1;"
                    } else {
                        "width: 72px; height: 54px; object-fit: cover; border-radius: 4px; cursor: pointer; border: 2px solid transparent; opacity: 0.6;"
                    },
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_select.call(index);
                    },
                }
            }
        }
    }
}

/// Inline photo viewer with prev/next buttons disabled at the first/last photo
#[component]
pub fn PhotoFlipper(
    photos: Vec<GalleryPhoto>,
    cursor: PhotoCursor,
    on_navigate: EventHandler<GalleryNav>,
    #[props(default = "No photos available".to_string())] empty_label: String,
    #[props(default = "Photo".to_string())] photo_label: String,
    #[props(default = "Thumbnail".to_string())] thumbnail_label: String,
) -> Element {
    let Some(index) = cursor.current().filter(|i| *i < photos.len()) else {
        return rsx! {
            div {
                style: "padding: 48px 24px; text-align: center; background: #f5f5f5; border-radius: 8px; color: #999;",
                "{empty_label}"
            }
        };
    };
    let current = photos[index].clone();
    let has_prev = cursor.has_prev();
    let has_next = cursor.has_next();

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 8px;",
            div {
                class: "main-image-container",
                style: "position: relative; width: 100%; aspect-ratio: 4/3; background: #f0f0f0; border-radius: 8px; overflow: hidden;",
                img {
                    src: "{current.medium_url}",
                    alt: numbered_alt(&photo_label, index),
                    style: "width: 100%; height: 100%; object-fit: cover;",
                }
                button {
                    class: "modal-nav-btn prev",
                    style: nav_button_style("left", has_prev),
                    disabled: !has_prev,
                    onclick: move |_| on_navigate.call(GalleryNav::Prev),
                    "‹"
                }
                button {
                    class: "modal-nav-btn next",
                    style: nav_button_style("right", has_next),
                    disabled: !has_next,
                    onclick: move |_| on_navigate.call(GalleryNav::Next),
                    "›"
                }
            }
            ThumbnailStrip {
                photos,
                active: Some(index),
                alt_label: thumbnail_label,
                on_select: move |position| on_navigate.call(GalleryNav::Jump(position)),
            }
        }
    }
}

/// Fullscreen photo viewer
///
/// Only a click that lands on the overlay element itself closes it; the
/// header, the image area and the thumbnail strip swallow their clicks.
#[component]
pub fn GalleryOverlay(
    photos: Vec<GalleryPhoto>,
    cursor: PhotoCursor,
    on_navigate: EventHandler<GalleryNav>,
    on_close: EventHandler<()>,
    #[props(default = "No photos available".to_string())] empty_label: String,
    #[props(default = "Photo".to_string())] photo_label: String,
    #[props(default = "Thumbnail".to_string())] thumbnail_label: String,
) -> Element {
    let current = cursor
        .current()
        .and_then(|index| photos.get(index).cloned().map(|photo| (index, photo)));
    let counter = cursor.counter_label().unwrap_or_default();
    let has_prev = cursor.has_prev();
    let has_next = cursor.has_next();

    rsx! {
        div {
            class: "gallery-modal show",
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.95); z-index: 2000; display: flex; flex-direction: column;",
            onclick: move |_| on_close.call(()),
            // Header
            div {
                style: "display: flex; justify-content: space-between; align-items: center; padding: 16px; background: rgba(0, 0, 0, 0.7);",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "gallery-counter", style: "color: white; font-size: 16px;", "{counter}" }
                button {
                    class: "gallery-close",
                    style: "width: 40px; height: 40px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 24px; cursor: pointer; border: none;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
            }
            // Main image
            div {
                class: "gallery-main",
                style: "flex: 1; display: flex; align-items: center; justify-content: center; padding: 20px; position: relative;",
                onclick: move |evt| evt.stop_propagation(),
                if let Some((index, photo)) = current {
                    img {
                        src: "{photo.large_url}",
                        alt: numbered_alt(&photo_label, index),
                        style: "max-width: 100%; max-height: 100%; object-fit: contain;",
                    }
                } else {
                    div { style: "color: white; font-size: 24px;", "{empty_label}" }
                }
                button {
                    class: "gallery-nav prev",
                    style: nav_button_style("left", has_prev),
                    disabled: !has_prev,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_navigate.call(GalleryNav::Prev);
                    },
                    "‹"
                }
                button {
                    class: "gallery-nav next",
                    style: nav_button_style("right", has_next),
                    disabled: !has_next,
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_navigate.call(GalleryNav::Next);
                    },
                    "›"
                }
            }
            div { onclick: move |evt| evt.stop_propagation(),
                ThumbnailStrip {
                    photos,
                    active: cursor.current(),
                    dark: true,
                    alt_label: thumbnail_label,
                    on_select: move |position| on_navigate.call(GalleryNav::Jump(position)),
                }
            }
        }
    }
}
