use crate::components::PropertyCard;
use crate::models::CardView;
use crate::state::CarouselState;
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::rc::Rc;

/// Three-card window onto the listing sequence
#[component]
pub fn Carousel(
    cards: Vec<CardView>,
    state: CarouselState,
    card_width: f64,
    gap: f64,
    visible_cards: usize,
    transition: String,
    on_prev: EventHandler<()>,
    on_next: EventHandler<()>,
    on_open: EventHandler<String>,
    /// Hands out the first card so its width can be measured
    on_first_card_mounted: EventHandler<Rc<MountedData>>,
    on_touch_start: EventHandler<f64>,
    on_touch_end: EventHandler<f64>,
) -> Element {
    let track_style = state.track_style(card_width, gap, &transition);
    let prev_disabled = state.prev_disabled();
    let next_disabled = state.next_disabled();
    let slot_style = format!(
        "flex: 0 0 calc((100% - {} * {}px) / {});",
        visible_cards.saturating_sub(1),
        gap,
        visible_cards.max(1)
    );

    rsx! {
        div { class: "carousel", style: "position: relative; padding: 0 56px;",
            button {
                id: "prevButton",
                class: "carousel-button prev",
                title: t!("carousel-prev"),
                style: control_style("left", prev_disabled),
                disabled: prev_disabled,
                onclick: move |_| on_prev.call(()),
                "‹"
            }
            div { style: "overflow: hidden;",
                div {
                    id: "carouselTrack",
                    class: "carousel-track",
                    style: "{track_style}",
                    ontouchstart: move |evt| {
                        if let Some(touch) = evt.data().touches_changed().first() {
                            on_touch_start.call(touch.screen_coordinates().x);
                        }
                    },
                    ontouchend: move |evt| {
                        if let Some(touch) = evt.data().touches_changed().first() {
                            on_touch_end.call(touch.screen_coordinates().x);
                        }
                    },
                    for (index, card) in cards.into_iter().enumerate() {
                        div {
                            key: "{card.id}",
                            style: "{slot_style}",
                            onmounted: move |evt| {
                                if index == 0 {
                                    on_first_card_mounted.call(evt.data());
                                }
                            },
                            PropertyCard { card: card.clone(), on_open }
                        }
                    }
                }
            }
            button {
                id: "nextButton",
                class: "carousel-button next",
                title: t!("carousel-next"),
                style: control_style("right", next_disabled),
                disabled: next_disabled,
                onclick: move |_| on_next.call(()),
                "›"
            }
        }
    }
}

fn control_style(side: &str, disabled: bool) -> String {
    format!(
        "position: absolute; top: 50%; {}: 0; transform: translateY(-50%); width: 44px; height: 44px; border-radius: 50%; border: none; background: #0066cc; color: white; font-size: 24px; cursor: pointer; opacity: {};",
        side,
        if disabled { "0.5" } else { "1" }
    )
}
