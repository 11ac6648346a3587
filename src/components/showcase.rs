use crate::components::{Carousel, PropertyModal};
use crate::config::AppConfig;
use crate::models::CardView;
use crate::platform;
use crate::services::ListingCatalog;
use crate::state::carousel::{INITIAL_TRANSITION, SLIDE_TRANSITION};
use crate::state::{KeyAction, ShowcaseController, TimerHandle};
use dioxus::prelude::*;
use dioxus_gallery::{GalleryOverlay, GalleryPhoto};
use dioxus_i18n::t;
use std::rc::Rc;
use std::time::Duration;

impl TimerHandle for Task {
    fn cancel(self) {
        Task::cancel(self);
    }
}

/// Carousel, detail panel and fullscreen gallery over one listing catalog.
///
/// Owns every piece of interaction state; the child components only render
/// what they are handed and report user input back.
#[component]
pub fn ShowcasePage(catalog: ListingCatalog) -> Element {
    let config = use_context::<AppConfig>();
    let carousel_config = config.carousel.clone();
    let interval = Duration::from_millis(carousel_config.autoplay_interval_ms);

    // Read-only after load
    let catalog = use_signal(|| catalog);
    let mut showcase = use_signal(|| {
        ShowcaseController::<Task>::new(
            catalog.peek().len(),
            carousel_config.visible_cards,
            carousel_config.swipe_threshold_px,
        )
    });
    let mut transition = use_signal(|| INITIAL_TRANSITION);
    let mut first_card = use_signal(|| None::<Rc<MountedData>>);
    let mut card_width = use_signal(|| None::<f64>);

    // Slots are sized relative to the viewport, so the width is taken again
    // before every move
    let measure_card = move || {
        spawn(async move {
            let Some(card) = first_card.peek().clone() else {
                return;
            };
            match card.get_client_rect().await {
                Ok(rect) => card_width.set(Some(rect.size.width)),
                Err(e) => log::warn!("Could not measure carousel card: {:?}", e),
            }
        });
    };

    let start_timer = move || {
        spawn(async move {
            loop {
                tokio::time::sleep(interval).await;
                measure_card();
                let index = showcase.write().autoplay_tick();
                transition.set(SLIDE_TRANSITION);
                log::trace!("Autoplay moved carousel to {}", index);
            }
        })
    };

    use_hook(move || {
        showcase.write().start_autoplay(start_timer);
    });

    use_future(move || async move {
        platform::watch_visibility(move |hidden| {
            showcase.write().set_page_hidden(hidden, start_timer);
        })
        .await;
    });

    use_future(move || async move {
        platform::watch_resize(measure_card).await;
    });

    let mut slid = move |moved: bool| {
        if moved {
            transition.set(SLIDE_TRANSITION);
            measure_card();
        }
    };

    let mut step_carousel = move |forward: bool| {
        let moved = showcase.write().step(forward, start_timer);
        slid(moved);
    };

    let mut open_listing = move |id: String| {
        let catalog = catalog.read();
        let listing = match catalog.get(&id) {
            Ok(listing) => listing,
            Err(e) => {
                log::warn!("Cannot open listing: {}", e);
                return;
            }
        };
        showcase.write().open_listing(listing);
        platform::lock_scroll();
    };

    let mut close_modal = move || {
        if showcase.write().close_modal(start_timer) {
            platform::unlock_scroll();
        }
    };

    let mut open_gallery = move || {
        let count = showcase
            .read()
            .modal()
            .listing_id()
            .and_then(|id| catalog.read().find(id).map(|l| l.photos.len()));
        if let Some(count) = count {
            showcase.write().open_gallery(count);
        }
    };

    use_future(move || async move {
        platform::watch_keys(move |key| {
            let action = showcase.write().handle_key(key, start_timer);
            match action {
                Some(KeyAction::CarouselPrev | KeyAction::CarouselNext) => slid(true),
                Some(KeyAction::CloseModal) => platform::unlock_scroll(),
                _ => {}
            }
        })
        .await;
    });

    let cards: Vec<CardView> = catalog
        .read()
        .listings()
        .iter()
        .map(CardView::from_listing)
        .collect();
    let (carousel_state, modal_cursor, gallery_open, gallery_cursor, open) = {
        let state = showcase.read();
        let open = state
            .modal()
            .listing_id()
            .and_then(|id| catalog.read().find(id).cloned());
        (
            *state.carousel(),
            state.modal().cursor(),
            state.gallery().is_open(),
            state.gallery().cursor(),
            open,
        )
    };
    let gallery_photos: Vec<GalleryPhoto> = open
        .as_ref()
        .map(|l| l.photos.iter().map(|p| p.to_gallery_photo()).collect())
        .unwrap_or_default();

    rsx! {
        div { style: "padding: 32px 0;",
            div { style: "text-align: center; margin-bottom: 24px;",
                h1 { style: "margin: 0; font-size: 32px; color: #333;", {t!("app-title")} }
                p { style: "margin: 8px 0 0; color: #666;", {t!("app-subtitle")} }
            }

            if cards.is_empty() {
                div { style: "padding: 48px; text-align: center; color: #999;", {t!("listings-empty")} }
            } else {
                Carousel {
                    cards,
                    state: carousel_state,
                    card_width: card_width().unwrap_or(carousel_config.fallback_card_width_px),
                    gap: carousel_config.card_gap_px,
                    visible_cards: carousel_config.visible_cards,
                    transition: transition().to_string(),
                    on_prev: move |_| step_carousel(false),
                    on_next: move |_| step_carousel(true),
                    on_open: move |id| open_listing(id),
                    on_first_card_mounted: move |card| {
                        first_card.set(Some(card));
                        measure_card();
                    },
                    on_touch_start: move |x| showcase.write().touch_start(x),
                    on_touch_end: move |x| {
                        let moved = showcase.write().touch_end(x, start_timer);
                        slid(moved);
                    },
                }
            }

            if let Some(listing) = open {
                PropertyModal {
                    listing,
                    cursor: modal_cursor,
                    on_photo_nav: move |nav| {
                        showcase.write().navigate_modal(nav);
                    },
                    on_view_all: move |_| open_gallery(),
                    on_close: move |_| close_modal(),
                }
            }

            if gallery_open {
                GalleryOverlay {
                    photos: gallery_photos,
                    cursor: gallery_cursor,
                    empty_label: t!("photos-empty"),
                    photo_label: t!("photo-alt"),
                    thumbnail_label: t!("thumbnail-alt"),
                    on_navigate: move |nav| {
                        showcase.write().navigate_gallery(nav);
                    },
                    on_close: move |_| {
                        showcase.write().close_gallery();
                    },
                }
            }
        }
    }
}
