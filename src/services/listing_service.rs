use crate::error::AppError;
use crate::models::Listing;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

/// Listing records bundled with the binary
const SAMPLE_LISTINGS: &str = include_str!("../../data/sample_listings.json");

/// Read-only, display-ordered listing sequence shared by all controllers
#[derive(Debug, Clone, PartialEq)]
pub struct ListingCatalog {
    listings: Arc<[Listing]>,
}

impl ListingCatalog {
    /// Builds a catalog, rejecting duplicate ids
    pub fn new(listings: Vec<Listing>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.id.as_str()) {
                return Err(AppError::Validation(format!(
                    "Duplicate listing id {}",
                    listing.id
                )));
            }
        }
        Ok(Self {
            listings: listings.into(),
        })
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn find(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    pub fn get(&self, id: &str) -> Result<&Listing, AppError> {
        self.find(id)
            .ok_or_else(|| AppError::NotFound(format!("Listing {}", id)))
    }
}

/// Parses a JSON array of listing records
pub fn parse_listings(raw: &str) -> Result<ListingCatalog, AppError> {
    let listings: Vec<Listing> = serde_json::from_str(raw)?;
    ListingCatalog::new(listings)
}

pub fn load_listings(path: &Path) -> Result<ListingCatalog, AppError> {
    let raw = std::fs::read_to_string(path)?;
    let catalog = parse_listings(&raw)?;
    log::info!("Loaded {} listings from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Loads `path` on the blocking pool, or the bundled sample data without a path
pub async fn load_catalog(path: Option<&Path>) -> Result<ListingCatalog, AppError> {
    match path {
        Some(path) => {
            let path = path.to_path_buf();
            tokio::task::spawn_blocking(move || load_listings(&path))
                .await
                .map_err(|e| AppError::Other(format!("Listing loader panicked: {}", e)))?
        }
        None => {
            let catalog = parse_listings(SAMPLE_LISTINGS)?;
            log::info!("Loaded {} bundled sample listings", catalog.len());
            Ok(catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let raw = r#"[{"id":"a"},{"id":"b"},{"id":"a"}]"#;
        let result = parse_listings(raw);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_catalog_keeps_insertion_order() {
        let raw = r#"[{"id":"z"},{"id":"a"},{"id":"m"}]"#;
        let catalog = parse_listings(raw).unwrap();
        let ids: Vec<_> = catalog.listings().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["z", "a", "m"]);
        assert!(catalog.find("a").is_some());
        assert!(matches!(catalog.get("nope"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_malformed_data_is_parse_error() {
        assert!(matches!(parse_listings("{not json"), Err(AppError::Parse(_))));
    }

    #[test]
    fn test_loosely_typed_record_keeps_catalog() {
        let raw = r#"[
            {"id": "a", "photos": null},
            {"id": "b", "propertyclass": 5, "photos": [null]},
            {"id": "c"}
        ]"#;
        let catalog = parse_listings(raw).unwrap();
        assert_eq!(catalog.len(), 3);
        assert!(catalog.listings().iter().all(|l| l.photos.is_empty()));
    }

    #[tokio::test]
    async fn test_bundled_sample_data_loads() {
        let catalog = load_catalog(None).await.unwrap();
        assert!(catalog.len() >= 3);
        assert!(catalog.listings().iter().any(|l| l.photos.len() > 4));
        assert!(catalog.listings().iter().any(|l| l.photos.is_empty()));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "listing-showcase-test-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"[{"id":"file-1","city":"Austin"}]"#).unwrap();
        let catalog = load_catalog(Some(&path)).await.unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.listings()[0].city.as_deref(), Some("Austin"));
    }

    #[tokio::test]
    async fn test_missing_file_is_filesystem_error() {
        let path = std::env::temp_dir().join("listing-showcase-missing.json");
        let result = load_catalog(Some(&path)).await;
        assert!(matches!(result, Err(AppError::Filesystem(_))));
    }
}
