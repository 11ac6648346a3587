use crate::config::AppConfig;
use crate::services::map_tiles::{TileView, TILE_SIZE};
use dioxus::prelude::*;
use dioxus_i18n::t;
use std::time::Duration;

/// Static, non-interactive map preview centred on a coordinate.
///
/// Tiles are drawn only after the configured delay so the panel layout has
/// settled around the container.
#[component]
pub fn LocationMap(map_id: String, latitude: f64, longitude: f64) -> Element {
    let config = use_context::<AppConfig>();
    let map = config.map.clone();
    let delay = Duration::from_millis(map.init_delay_ms);
    let mut ready = use_signal(|| false);

    use_future(move || async move {
        tokio::time::sleep(delay).await;
        ready.set(true);
    });

    let tiles = ready().then(|| TileView::centered(latitude, longitude, &map));

    rsx! {
        div {
            id: "{map_id}",
            class: "map-container",
            style: "position: relative; width: 100%; height: 260px; overflow: hidden; border-radius: 8px; background: #eef1f4; pointer-events: none; user-select: none;",
            if let Some(view) = tiles {
                div {
                    style: "position: absolute; left: 50%; top: 50%; width: {TILE_SIZE * 3.0}px; height: {TILE_SIZE * 3.0}px; transform: translate({view.shift_x_px}px, {view.shift_y_px}px);",
                    for tile in view.tiles {
                        img {
                            key: "{tile.url}",
                            src: "{tile.url}",
                            alt: "",
                            draggable: "false",
                            style: "position: absolute; left: {tile.left_px}px; top: {tile.top_px}px; width: {TILE_SIZE}px; height: {TILE_SIZE}px;",
                        }
                    }
                }
                // Marker pin, anchored at its tip
                div {
                    class: "custom-marker",
                    style: "position: absolute; left: 50%; top: 50%; width: 30px; height: 30px; transform: translate(-15px, -30px);",
                    div {
                        class: "marker-pin",
                        style: "width: 30px; height: 30px; border-radius: 50% 50% 50% 0; background: #0066cc; transform: rotate(-45deg); box-shadow: 0 2px 6px rgba(0,0,0,0.3);",
                    }
                }
                div {
                    style: "position: absolute; right: 0; bottom: 0; padding: 2px 6px; background: rgba(255,255,255,0.8); font-size: 10px; color: #555;",
                    "{map.attribution}"
                }
            } else {
                div {
                    style: "width: 100%; height: 100%; display: flex; align-items: center; justify-content: center; color: #999; font-size: 14px;",
                    {t!("map-loading")}
                }
            }
        }
    }
}
