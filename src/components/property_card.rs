use crate::models::CardView;
use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn PropertyCard(card: CardView, on_open: EventHandler<String>) -> Element {
    let id = card.id.clone();

    rsx! {
        div {
            class: "property-card",
            "data-property-id": "{card.id}",
            style: "position: relative; height: 420px; border-radius: 12px; overflow: hidden; cursor: pointer; box-shadow: 0 4px 16px rgba(0,0,0,0.15);",
            onclick: move |_| on_open.call(id.clone()),
            img {
                class: "property-image",
                src: "{card.image_url}",
                alt: "{card.title}",
                style: "width: 100%; height: 100%; object-fit: cover;",
            }
            div {
                class: "property-overlay",
                style: "position: absolute; inset: 0; background: linear-gradient(to top, rgba(0,0,0,0.75), rgba(0,0,0,0) 60%);",
            }
            div {
                class: "property-content",
                style: "position: absolute; left: 0; right: 0; bottom: 0; padding: 20px; color: white;",
                h3 { class: "property-title", style: "margin: 0 0 4px; font-size: 22px; font-weight: 600;", "{card.title}" }
                p { class: "property-location", style: "margin: 0 0 8px; font-size: 14px; opacity: 0.85;", "{card.location}" }
                p { class: "property-price", style: "margin: 0 0 12px; font-size: 20px; font-weight: 700;", "{card.price}" }
                button {
                    class: "property-details-btn",
                    style: "padding: 8px 16px; background: transparent; color: white; border: 1px solid white; border-radius: 4px; font-size: 12px; letter-spacing: 1px; cursor: pointer;",
                    {t!("card-view-details")}
                }
            }
        }
    }
}
