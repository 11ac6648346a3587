use dioxus_i18n::prelude::*;
use unic_langid::{langid, LanguageIdentifier};

fn bundled_locale() -> LanguageIdentifier {
    langid!("en-US")
}

/// Picks the configured locale if translations for it are bundled,
/// otherwise US English
pub fn resolve_locale(requested: &str) -> LanguageIdentifier {
    let bundled = bundled_locale();
    match requested.parse::<LanguageIdentifier>() {
        Ok(id) if id == bundled => id,
        Ok(id) => {
            log::warn!("No translations for {}, using {}", id, bundled);
            bundled
        }
        Err(e) => {
            log::warn!("Invalid locale {:?} ({}), using {}", requested, e, bundled);
            bundled
        }
    }
}

/// Initialize i18n configuration for the configured locale
pub fn init_i18n(locale: &str) -> I18nConfig {
    I18nConfig::new(resolve_locale(locale)).with_locale(Locale::new_static(
        bundled_locale(),
        include_str!("../locales/en-US.ftl"),
    ))
}
