use crate::models::photo::Photo;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A property listing as delivered by the data loader.
///
/// Field names follow the loader's record shape. Everything except `id` is
/// optional; missing values render as placeholders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Listing {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(rename = "subdivisionname", default, deserialize_with = "de_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "de_text")]
    pub city: Option<String>,
    #[serde(rename = "mlsareamajor", default, deserialize_with = "de_text")]
    pub area_name: Option<String>,
    #[serde(rename = "unparsedaddress", default, deserialize_with = "de_text")]
    pub address: Option<String>,
    #[serde(rename = "currentpricepublic", default, deserialize_with = "de_number")]
    pub price: Option<f64>,
    #[serde(rename = "bedstotal", default, deserialize_with = "de_number")]
    pub beds: Option<f64>,
    #[serde(rename = "bathroomstotaldecimal", default, deserialize_with = "de_number")]
    pub baths: Option<f64>,
    #[serde(rename = "buildingareatotal", default, deserialize_with = "de_number")]
    pub building_area: Option<f64>,
    #[serde(rename = "mlsid", default, deserialize_with = "de_text")]
    pub mls_id: Option<String>,
    #[serde(rename = "propertytypelabel", default, deserialize_with = "de_text")]
    pub property_type: Option<String>,
    #[serde(rename = "propertyclass", default, deserialize_with = "de_text")]
    pub property_class: Option<String>,
    #[serde(rename = "yearbuilt", default, deserialize_with = "de_number")]
    pub year_built: Option<f64>,
    #[serde(rename = "lotsizedimensions", default, deserialize_with = "de_text")]
    pub lot_size: Option<String>,
    #[serde(rename = "roomstotal", default, deserialize_with = "de_number")]
    pub rooms: Option<f64>,
    #[serde(rename = "majorchangetype", default, deserialize_with = "de_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "de_number")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "de_number")]
    pub longitude: Option<f64>,
    #[serde(rename = "virtualtourscount", default, deserialize_with = "de_number")]
    pub virtual_tour_count: Option<f64>,
    #[serde(rename = "vrTour", default, deserialize_with = "de_virtual_tour")]
    pub virtual_tour: Option<VirtualTour>,
    #[serde(rename = "publicremarks", default, deserialize_with = "de_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "de_photos")]
    pub photos: Vec<Photo>,

    #[serde(rename = "interiorfeatures", default)]
    pub interior_features: Option<Value>,
    #[serde(rename = "exteriorfeatures", default)]
    pub exterior_features: Option<Value>,
    #[serde(rename = "poolfeatures", default)]
    pub pool_features: Option<Value>,
    #[serde(rename = "patioandporchfeatures", default)]
    pub patio_features: Option<Value>,
    #[serde(rename = "architecturalstyle", default)]
    pub architectural_style: Option<Value>,
    #[serde(default)]
    pub electric: Option<Value>,
    #[serde(rename = "kitchenappliances", default)]
    pub kitchen_appliances: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VirtualTour {
    #[serde(rename = "Uri", default)]
    pub uri: Option<String>,
}

/// Feature groups shown in the detail panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureCategory {
    Interior,
    Exterior,
    Pool,
    Patio,
    ArchitecturalStyle,
    Electric,
    KitchenAppliances,
}

impl FeatureCategory {
    pub fn all() -> &'static [FeatureCategory] {
        static ALL: [FeatureCategory; 7] = [
            FeatureCategory::Interior,
            FeatureCategory::Exterior,
            FeatureCategory::Pool,
            FeatureCategory::Patio,
            FeatureCategory::ArchitecturalStyle,
            FeatureCategory::Electric,
            FeatureCategory::KitchenAppliances,
        ];
        &ALL
    }

    /// Fluent message id of the group heading
    pub fn message_id(&self) -> &'static str {
        match self {
            FeatureCategory::Interior => "feature-interior",
            FeatureCategory::Exterior => "feature-exterior",
            FeatureCategory::Pool => "feature-pool",
            FeatureCategory::Patio => "feature-patio",
            FeatureCategory::ArchitecturalStyle => "feature-architectural-style",
            FeatureCategory::Electric => "feature-electric",
            FeatureCategory::KitchenAppliances => "feature-kitchen-appliances",
        }
    }
}

impl Listing {
    pub fn feature(&self, category: FeatureCategory) -> Option<&Value> {
        match category {
            FeatureCategory::Interior => self.interior_features.as_ref(),
            FeatureCategory::Exterior => self.exterior_features.as_ref(),
            FeatureCategory::Pool => self.pool_features.as_ref(),
            FeatureCategory::Patio => self.patio_features.as_ref(),
            FeatureCategory::ArchitecturalStyle => self.architectural_style.as_ref(),
            FeatureCategory::Electric => self.electric.as_ref(),
            FeatureCategory::KitchenAppliances => self.kitchen_appliances.as_ref(),
        }
    }

    /// Both coordinates, if the listing is geocoded
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some((lat, lon)),
            _ => None,
        }
    }

    pub fn has_virtual_tour(&self) -> bool {
        self.virtual_tour_count.unwrap_or(0.0) > 0.0
    }
}

// Loader records mix numbers and numeric strings ("3", "", 3.5).
fn de_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn de_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// `null` means no photos; entries that are not photo objects are dropped.
fn de_photos<'de, D>(deserializer: D) -> Result<Vec<Photo>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Array(entries)) => entries,
        _ => return Ok(Vec::new()),
    };
    Ok(entries
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|entry| match serde_json::from_value::<Photo>(entry) {
            Ok(photo) => Some(photo),
            Err(e) => {
                log::debug!("Skipping malformed photo entry: {}", e);
                None
            }
        })
        .collect())
}

fn de_virtual_tour<'de, D>(deserializer: D) -> Result<Option<VirtualTour>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "listing id must be a string or number, got {}",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_loader_record() {
        let raw = r#"{
            "id": 1017,
            "subdivisionname": "Maple Ridge",
            "city": "Austin",
            "currentpricepublic": "650000",
            "bedstotal": 4,
            "bathroomstotaldecimal": "2.5",
            "buildingareatotal": "",
            "mlsid": 5551234,
            "latitude": 30.27,
            "longitude": -97.74,
            "virtualtourscount": 1,
            "vrTour": {"Uri": "https://tour.example/1017"},
            "poolfeatures": "{\"hasPool\":true}",
            "photos": [{"Uri300": "a.jpg", "Uri800": "b.jpg"}]
        }"#;
        let listing: Listing = serde_json::from_str(raw).unwrap();
        assert_eq!(listing.id, "1017");
        assert_eq!(listing.price, Some(650000.0));
        assert_eq!(listing.baths, Some(2.5));
        assert_eq!(listing.building_area, None);
        assert_eq!(listing.mls_id.as_deref(), Some("5551234"));
        assert_eq!(listing.coordinates(), Some((30.27, -97.74)));
        assert!(listing.has_virtual_tour());
        assert!(listing.feature(FeatureCategory::Pool).is_some());
        assert!(listing.feature(FeatureCategory::Electric).is_none());
        assert_eq!(listing.photos.len(), 1);
    }

    #[test]
    fn test_missing_photos_is_empty_list() {
        let listing: Listing = serde_json::from_str(r#"{"id":"x"}"#).unwrap();
        assert!(listing.photos.is_empty());
        assert!(!listing.has_virtual_tour());
        assert_eq!(listing.coordinates(), None);
    }

    #[test]
    fn test_null_or_broken_photos_do_not_reject_record() {
        let listings: Vec<Listing> = serde_json::from_str(
            r#"[
                {"id": "a", "photos": null},
                {"id": "b", "photos": [null, 3, {"Uri800": "m.jpg"}, {"Uri300": 7}]},
                {"id": "c", "photos": "none"}
            ]"#,
        )
        .unwrap();
        assert!(listings[0].photos.is_empty());
        assert_eq!(listings[1].photos.len(), 1);
        assert_eq!(listings[1].photos[0].medium.as_deref(), Some("m.jpg"));
        assert!(listings[2].photos.is_empty());
    }

    #[test]
    fn test_free_text_fields_accept_numbers() {
        let listing: Listing = serde_json::from_str(
            r#"{
                "id": "a",
                "propertyclass": 5,
                "propertytypelabel": 12,
                "majorchangetype": null,
                "city": ["Austin"],
                "publicremarks": 1,
                "vrTour": "https://tour.example"
            }"#,
        )
        .unwrap();
        assert_eq!(listing.property_class.as_deref(), Some("5"));
        assert_eq!(listing.property_type.as_deref(), Some("12"));
        assert_eq!(listing.status, None);
        assert_eq!(listing.city, None);
        assert_eq!(listing.description.as_deref(), Some("1"));
        assert_eq!(listing.virtual_tour, None);
    }

    #[test]
    fn test_id_must_be_scalar() {
        assert!(serde_json::from_str::<Listing>(r#"{"id":[1]}"#).is_err());
    }
}
