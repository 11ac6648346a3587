use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable pointing at the config file
pub const CONFIG_ENV: &str = "SHOWCASE_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "showcase.toml";

/// Application configuration, loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// UI language, e.g. `en-US`
    pub locale: String,
    pub carousel: CarouselConfig,
    pub modal: ModalConfig,
    pub map: MapConfig,
    pub data: DataConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            carousel: CarouselConfig::default(),
            modal: ModalConfig::default(),
            map: MapConfig::default(),
            data: DataConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CarouselConfig {
    /// Cards shown side by side
    pub visible_cards: usize,
    pub card_gap_px: f64,
    /// Card width used until the first card has been measured
    pub fallback_card_width_px: f64,
    pub autoplay_interval_ms: u64,
    pub swipe_threshold_px: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            visible_cards: 3,
            card_gap_px: 32.0,
            fallback_card_width_px: 360.0,
            autoplay_interval_ms: 6000,
            swipe_threshold_px: 50.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ModalConfig {
    /// Thumbnails in the preview strip; more photos add a "view all" affordance
    pub preview_photo_count: usize,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            preview_photo_count: 4,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MapConfig {
    pub enabled: bool,
    /// Tile URL template with `{s}`, `{z}`, `{x}`, `{y}` and `{r}` placeholders
    pub tile_url: String,
    pub attribution: String,
    pub zoom: u8,
    /// Delay between mounting the container and drawing the tiles
    pub init_delay_ms: u64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tile_url: "https://{s}.basemaps.cartocdn.com/light_all/{z}/{x}/{y}{r}.png".to_string(),
            attribution: "© OpenStreetMap contributors".to_string(),
            zoom: 15,
            init_delay_ms: 100,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct DataConfig {
    /// JSON file with the listing records. `None` uses the bundled sample data.
    pub listings_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads `path`; a missing file yields the defaults
    pub fn load_from(path: &Path) -> Result<Self, AppError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Self::from_toml_str(&raw),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Loads from `$SHOWCASE_CONFIG` or `showcase.toml`, falling back to the
    /// defaults when the file is invalid
    pub fn load() -> Self {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Ignoring config {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.locale.parse::<unic_langid::LanguageIdentifier>().is_err() {
            return Err(AppError::Validation(format!(
                "locale {:?} is not a language identifier",
                self.locale
            )));
        }
        if self.carousel.visible_cards == 0 {
            return Err(AppError::Validation(
                "carousel.visible_cards must be at least 1".to_string(),
            ));
        }
        if self.carousel.autoplay_interval_ms == 0 {
            return Err(AppError::Validation(
                "carousel.autoplay_interval_ms must be positive".to_string(),
            ));
        }
        if self.map.zoom > 19 {
            return Err(AppError::Validation(
                "map.zoom must be between 0 and 19".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_page_layout() {
        let config = AppConfig::default();
        assert_eq!(config.carousel.visible_cards, 3);
        assert_eq!(config.carousel.card_gap_px, 32.0);
        assert_eq!(config.carousel.autoplay_interval_ms, 6000);
        assert_eq!(config.carousel.swipe_threshold_px, 50.0);
        assert_eq!(config.modal.preview_photo_count, 4);
        assert_eq!(config.map.init_delay_ms, 100);
        assert!(config.data.listings_path.is_none());
        assert_eq!(config.locale, "en-US");
    }

    #[test]
    fn test_locale_key() {
        let config = AppConfig::from_toml_str("locale = \"en-GB\"\n").unwrap();
        assert_eq!(config.locale, "en-GB");
        assert_eq!(config.carousel.visible_cards, 3);

        let result = AppConfig::from_toml_str("locale = \"not a locale!\"\n");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [carousel]
            autoplay_interval_ms = 3000

            [map]
            enabled = false
            "#,
        )
        .unwrap();
        assert_eq!(config.carousel.autoplay_interval_ms, 3000);
        assert_eq!(config.carousel.visible_cards, 3);
        assert!(!config.map.enabled);
        assert_eq!(config.map.zoom, 15);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let result = AppConfig::from_toml_str("[carousel]\nvisible_cards = 0\n");
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = AppConfig::from_toml_str("[carousel]\nvisible_cards = \"three\"\n");
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("listing-showcase-does-not-exist.toml");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
