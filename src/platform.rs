//! Small bridges into the host document.

use crate::state::NavKey;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;

/// Forwards `document.hidden` on every visibility change
const VISIBILITY_BRIDGE: &str = r#"
document.addEventListener('visibilitychange', () => {
    dioxus.send(document.hidden);
});
await new Promise(() => {});
"#;

/// Forwards navigation keys pressed anywhere in the document
const KEY_BRIDGE: &str = r#"
document.addEventListener('keydown', (e) => {
    if (['ArrowLeft', 'ArrowRight', 'Escape', 'Esc'].includes(e.key)) {
        dioxus.send(e.key);
    }
});
await new Promise(() => {});
"#;

const RESIZE_BRIDGE: &str = r#"
window.addEventListener('resize', () => {
    dioxus.send(true);
});
await new Promise(() => {});
"#;

/// Blocks page scrolling behind an open panel
pub fn lock_scroll() {
    let _ = document::eval("document.body.style.overflow = 'hidden';");
}

pub fn unlock_scroll() {
    let _ = document::eval("document.body.style.overflow = '';");
}

/// Runs `script` and hands every message it sends to `on_message` until the
/// bridge fails
async fn run_bridge<T: DeserializeOwned>(
    name: &str,
    script: &str,
    mut on_message: impl FnMut(T),
) {
    let mut bridge = document::eval(script);
    loop {
        match bridge.recv::<T>().await {
            Ok(message) => on_message(message),
            Err(e) => {
                log::warn!("{} bridge closed: {:?}", name, e);
                break;
            }
        }
    }
}

/// Calls `on_change(hidden)` for every page visibility change
pub async fn watch_visibility(mut on_change: impl FnMut(bool)) {
    run_bridge("Visibility", VISIBILITY_BRIDGE, move |hidden: bool| {
        log::debug!("Page visibility changed, hidden: {}", hidden);
        on_change(hidden);
    })
    .await;
}

/// Calls `on_key` for every navigation key, wherever the focus is
pub async fn watch_keys(mut on_key: impl FnMut(NavKey)) {
    run_bridge("Keyboard", KEY_BRIDGE, move |name: String| {
        match NavKey::from_key_name(&name) {
            Some(key) => on_key(key),
            None => log::trace!("Ignoring key {}", name),
        }
    })
    .await;
}

/// Calls `on_resize` whenever the window size changes
pub async fn watch_resize(mut on_resize: impl FnMut()) {
    run_bridge("Resize", RESIZE_BRIDGE, move |_: bool| on_resize()).await;
}
