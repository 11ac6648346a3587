use crate::components::LocationMap;
use crate::config::AppConfig;
use crate::models::{Listing, ListingDetail};
use dioxus::prelude::*;
use dioxus_gallery::{GalleryNav, GalleryPhoto, PhotoCursor, PhotoFlipper};
use dioxus_i18n::t;

const SECTION_TITLE_STYLE: &str = "margin: 0 0 12px; font-size: 18px; color: #333; font-weight: 600;";

/// Detail panel for one listing
#[component]
pub fn PropertyModal(
    listing: Listing,
    cursor: PhotoCursor,
    on_photo_nav: EventHandler<GalleryNav>,
    on_view_all: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let config = use_context::<AppConfig>();
    let detail = ListingDetail::build(&listing, config.modal.preview_photo_count);
    let photos: Vec<GalleryPhoto> = listing.photos.iter().map(|p| p.to_gallery_photo()).collect();
    let show_map = config.map.enabled;

    rsx! {
        div {
            id: "propertyModal",
            class: "modal show",
            style: "position: fixed; inset: 0; background: rgba(0, 0, 0, 0.6); z-index: 1000; display: flex; align-items: flex-start; justify-content: center; overflow-y: auto; padding: 40px 16px;",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-content",
                style: "position: relative; width: 100%; max-width: 960px; background: white; border-radius: 12px; padding: 24px; display: flex; flex-direction: column; gap: 24px;",
                onclick: move |evt| evt.stop_propagation(),
                button {
                    class: "close-modal",
                    title: t!("modal-close"),
                    style: "position: absolute; top: 12px; right: 12px; width: 36px; height: 36px; border-radius: 50%; border: none; background: #e0e0e0; font-size: 20px; cursor: pointer;",
                    onclick: move |_| on_close.call(()),
                    "×"
                }

                PhotoFlipper {
                    photos,
                    cursor,
                    on_navigate: on_photo_nav,
                    empty_label: t!("photos-empty"),
                    photo_label: t!("photo-alt"),
                    thumbnail_label: t!("thumbnail-alt"),
                }

                div { class: "property-details", style: "display: flex; flex-direction: column; gap: 24px;",
                    // Header
                    div { class: "property-header",
                        h2 { style: "margin: 0; font-size: 28px; color: #333;", "{detail.title}" }
                        p { class: "property-location", style: "margin: 4px 0; color: #666;", "{detail.location}" }
                        p { class: "modal-price", style: "margin: 0; font-size: 24px; font-weight: 700; color: #0066cc;", "{detail.price}" }
                    }

                    // Preview strip
                    if !detail.preview_thumbnails.is_empty() {
                        div { class: "gallery-preview", style: "display: grid; grid-template-columns: repeat(5, 1fr); gap: 8px;",
                            for (index, url) in detail.preview_thumbnails.iter().enumerate() {
                                img {
                                    key: "{index}",
                                    src: "{url}",
                                    alt: "Property preview",
                                    style: "width: 100%; aspect-ratio: 4/3; object-fit: cover; border-radius: 6px;",
                                }
                            }
                            if let Some(count) = detail.view_all_count {
                                div {
                                    class: "view-all-photos",
                                    style: "display: flex; align-items: center; justify-content: center; text-align: center; background: #0066cc; color: white; border-radius: 6px; font-size: 13px; font-weight: 600; cursor: pointer; padding: 8px;",
                                    onclick: move |_| on_view_all.call(()),
                                    span { {t!("detail-view-all", count: count)} }
                                }
                            }
                        }
                    }

                    // Stats
                    div { class: "data-grid", style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px;",
                        for stat in detail.stats.iter() {
                            div { key: "{stat.label_id}", class: "data-item", style: "padding: 14px; background: #f5f5f5; border-radius: 8px; text-align: center;",
                                div { class: "data-label", style: "font-size: 12px; color: #666; font-weight: 600;", {t!(stat.label_id)} }
                                div { class: "data-value", style: "font-size: 20px; color: #333; font-weight: 700;", "{stat.value}" }
                            }
                        }
                    }

                    // Attribute table
                    div { class: "details-section",
                        h3 { style: SECTION_TITLE_STYLE, {t!("detail-property-information")} }
                        table { class: "property-details-table", style: "width: 100%; border-collapse: collapse;",
                            tbody {
                                for row in detail.info_rows.iter() {
                                    tr { key: "{row.label_id}", style: "border-bottom: 1px solid #eee;",
                                        th { style: "text-align: left; padding: 8px; color: #666; font-weight: 600; width: 40%;", {t!(row.label_id)} }
                                        td { style: "padding: 8px; color: #333;", "{row.value}" }
                                    }
                                }
                            }
                        }
                    }

                    // Location
                    div { class: "details-section location-section",
                        h3 { style: SECTION_TITLE_STYLE, {t!("detail-location")} }
                        div { class: "location-content", style: "display: flex; flex-direction: column; gap: 12px;",
                            if let (true, Some((latitude, longitude))) = (show_map, detail.location_section.coordinates) {
                                LocationMap {
                                    map_id: detail.location_section.map_id.clone(),
                                    latitude,
                                    longitude,
                                }
                            }
                            div { class: "location-actions",
                                p { class: "location-address", style: "margin: 0 0 8px; color: #333;", "{detail.location_section.address}" }
                                if let Some(url) = detail.location_section.osm_url.clone() {
                                    a {
                                        class: "view-map-btn",
                                        href: "{url}",
                                        target: "_blank",
                                        style: "color: #0066cc; font-size: 14px;",
                                        {t!("detail-view-on-osm")}
                                    }
                                }
                            }
                        }
                    }

                    if let Some(tour_url) = detail.virtual_tour_url.clone() {
                        div { class: "virtual-tour", style: "padding: 16px; background: #e8f4f8; border-radius: 8px;",
                            h3 { style: SECTION_TITLE_STYLE, {t!("detail-virtual-tour-title")} }
                            a { href: "{tour_url}", target: "_blank", style: "color: #0066cc;", {t!("detail-virtual-tour-link")} }
                        }
                    }

                    if !detail.feature_groups.is_empty() {
                        div { class: "details-section",
                            h3 { style: SECTION_TITLE_STYLE, {t!("detail-features")} }
                            div { class: "features-grid", style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 16px;",
                                for group in detail.feature_groups.iter() {
                                    div { key: "{group.category.message_id()}", class: "feature-category",
                                        h4 { style: "margin: 0 0 4px; font-size: 14px; color: #0066cc;", {t!(group.category.message_id())} }
                                        p { style: "margin: 0; font-size: 14px; color: #555; line-height: 1.4;", "{group.text}" }
                                    }
                                }
                            }
                        }
                    }

                    if let Some(description) = detail.description.clone() {
                        div { class: "details-section",
                            h3 { style: SECTION_TITLE_STYLE, {t!("detail-description")} }
                            p { style: "margin: 0; color: #555; line-height: 1.6; white-space: pre-wrap;", "{description}" }
                        }
                    }
                }
            }
        }
    }
}
