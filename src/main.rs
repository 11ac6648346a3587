use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use dioxus_i18n::t;

mod components;
mod config;
mod error;
mod format;
mod i18n;
mod models;
mod platform;
mod services;
mod state;

use components::ShowcasePage;
use config::AppConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    let config = AppConfig::load();
    log::info!(
        "Starting listing showcase (autoplay every {} ms, map {})",
        config.carousel.autoplay_interval_ms,
        if config.map.enabled { "on" } else { "off" }
    );
    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default().with_max_level(log::LevelFilter::Info),
    );
}

#[component]
fn App() -> Element {
    let config = use_context::<AppConfig>();
    let locale = config.locale.clone();
    use_init_i18n(move || i18n::init_i18n(&locale));
    let listings_path = config.data.listings_path.clone();

    let catalog = use_resource(move || {
        let path = listings_path.clone();
        async move {
            let result = services::load_catalog(path.as_deref()).await;
            if let Err(e) = &result {
                log::error!("Loading listings failed: {}", e);
            }
            result
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "min-height: 100vh; font-family: sans-serif; background: #fafafa;",
            match &*catalog.read() {
                None => rsx! {
                    div { style: "padding: 48px; text-align: center;",
                        div { style: "font-size: 48px; margin-bottom: 16px;", "⏳" }
                        div { style: "color: #666;", {t!("loading-listings")} }
                    }
                },
                Some(Err(e)) => rsx! {
                    div { style: "background: #fee; border: 1px solid #fcc; color: #c33; padding: 12px; margin: 16px; border-radius: 8px; font-size: 14px;",
                        "⚠️ "
                        {t!("error-loading", error: e.user_message())}
                    }
                },
                Some(Ok(catalog)) => rsx! {
                    ShowcasePage { catalog: catalog.clone() }
                },
            }
        }
    }
}
