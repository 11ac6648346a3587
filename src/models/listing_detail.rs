use crate::format::{
    format_area, format_features, format_price_opt, is_truthy, number_or_na, text_or_na,
};
use crate::models::card_view::location_line;
use crate::models::{FeatureCategory, Listing, PhotoSize};

/// Zoom level of the external map link
const OSM_LINK_ZOOM: u8 = 15;

/// Labelled value; `label_id` is a Fluent message id
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledValue {
    pub label_id: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureGroupView {
    pub category: FeatureCategory,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LocationView {
    /// DOM id of the map container
    pub map_id: String,
    pub address: String,
    pub coordinates: Option<(f64, f64)>,
    pub osm_url: Option<String>,
}

/// Everything the detail panel shows for one listing
#[derive(Debug, Clone, PartialEq)]
pub struct ListingDetail {
    pub id: String,
    pub title: String,
    pub location: String,
    pub price: String,
    pub preview_thumbnails: Vec<String>,
    /// Total photo count when it exceeds the preview strip
    pub view_all_count: Option<usize>,
    pub stats: Vec<LabelledValue>,
    pub info_rows: Vec<LabelledValue>,
    pub location_section: LocationView,
    /// Link target when the listing advertises a virtual tour
    pub virtual_tour_url: Option<String>,
    pub feature_groups: Vec<FeatureGroupView>,
    pub description: Option<String>,
}

impl ListingDetail {
    pub fn build(listing: &Listing, preview_photo_count: usize) -> Self {
        let preview_thumbnails = listing
            .photos
            .iter()
            .take(preview_photo_count)
            .filter_map(|photo| photo.url(PhotoSize::Thumbnail))
            .map(str::to_string)
            .collect();
        let view_all_count =
            (listing.photos.len() > preview_photo_count).then_some(listing.photos.len());

        let stats = vec![
            LabelledValue {
                label_id: "detail-beds",
                value: number_or_na(listing.beds),
            },
            LabelledValue {
                label_id: "detail-baths",
                value: number_or_na(listing.baths),
            },
            LabelledValue {
                label_id: "detail-area",
                value: format_area(listing.building_area),
            },
        ];

        let info_rows = vec![
            LabelledValue {
                label_id: "detail-mls-id",
                value: text_or_na(listing.mls_id.as_deref()),
            },
            LabelledValue {
                label_id: "detail-property-type",
                value: text_or_na(listing.property_type.as_deref()),
            },
            LabelledValue {
                label_id: "detail-property-class",
                value: text_or_na(listing.property_class.as_deref()),
            },
            LabelledValue {
                label_id: "detail-year-built",
                value: number_or_na(listing.year_built),
            },
            LabelledValue {
                label_id: "detail-lot-size",
                value: text_or_na(listing.lot_size.as_deref()),
            },
            LabelledValue {
                label_id: "detail-total-rooms",
                value: number_or_na(listing.rooms),
            },
            LabelledValue {
                label_id: "detail-status",
                value: text_or_na(listing.status.as_deref()),
            },
        ];

        let coordinates = listing.coordinates();
        let location_section = LocationView {
            map_id: format!("map-{}", listing.id),
            address: text_or_na(listing.address.as_deref()),
            coordinates,
            osm_url: coordinates.map(|(lat, lon)| {
                format!(
                    "https://www.openstreetmap.org/?mlat={}&mlon={}&zoom={}",
                    lat, lon, OSM_LINK_ZOOM
                )
            }),
        };

        let virtual_tour_url = listing.has_virtual_tour().then(|| {
            listing
                .virtual_tour
                .as_ref()
                .and_then(|tour| tour.uri.clone())
                .filter(|uri| !uri.is_empty())
                .unwrap_or_else(|| "#".to_string())
        });

        let feature_groups = FeatureCategory::all()
            .iter()
            .filter_map(|category| {
                let value = listing.feature(*category).filter(|v| is_truthy(v))?;
                Some(FeatureGroupView {
                    category: *category,
                    text: format_features(value),
                })
            })
            .collect();

        Self {
            id: listing.id.clone(),
            title: text_or_na(listing.title.as_deref()),
            location: location_line(listing),
            price: format_price_opt(listing.price),
            preview_thumbnails,
            view_all_count,
            stats,
            info_rows,
            location_section,
            virtual_tour_url,
            feature_groups,
            description: listing.description.clone().filter(|d| !d.trim().is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Photo, VirtualTour};
    use serde_json::json;

    fn photos(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo {
                thumbnail: Some(format!("t{}.jpg", i)),
                medium: Some(format!("m{}.jpg", i)),
                large: None,
            })
            .collect()
    }

    #[test]
    fn test_view_all_only_above_preview_count() {
        let mut listing = Listing {
            id: "p".to_string(),
            photos: photos(4),
            ..Default::default()
        };
        let detail = ListingDetail::build(&listing, 4);
        assert_eq!(detail.preview_thumbnails.len(), 4);
        assert_eq!(detail.view_all_count, None);

        listing.photos = photos(9);
        let detail = ListingDetail::build(&listing, 4);
        assert_eq!(detail.preview_thumbnails, vec!["t0.jpg", "t1.jpg", "t2.jpg", "t3.jpg"]);
        assert_eq!(detail.view_all_count, Some(9));
    }

    #[test]
    fn test_missing_fields_render_placeholder() {
        let listing = Listing {
            id: "q".to_string(),
            ..Default::default()
        };
        let detail = ListingDetail::build(&listing, 4);
        assert!(detail.stats.iter().all(|s| s.value == "N/A"));
        assert!(detail.info_rows.iter().all(|r| r.value == "N/A"));
        assert_eq!(detail.location_section.address, "N/A");
        assert_eq!(detail.location_section.osm_url, None);
        assert_eq!(detail.virtual_tour_url, None);
        assert!(detail.feature_groups.is_empty());
        assert!(detail.preview_thumbnails.is_empty());
    }

    #[test]
    fn test_location_and_virtual_tour() {
        let listing = Listing {
            id: "r".to_string(),
            latitude: Some(30.5),
            longitude: Some(-97.25),
            virtual_tour_count: Some(2.0),
            virtual_tour: Some(VirtualTour { uri: None }),
            ..Default::default()
        };
        let detail = ListingDetail::build(&listing, 4);
        assert_eq!(detail.location_section.map_id, "map-r");
        assert_eq!(
            detail.location_section.osm_url.as_deref(),
            Some("https://www.openstreetmap.org/?mlat=30.5&mlon=-97.25&zoom=15")
        );
        assert_eq!(detail.virtual_tour_url.as_deref(), Some("#"));
    }

    #[test]
    fn test_feature_groups_in_display_order() {
        let listing = Listing {
            id: "s".to_string(),
            kitchen_appliances: Some(json!({"dishwasher": true})),
            pool_features: Some(json!(r#"{"hasPool":true,"hasSpa":false}"#)),
            electric: Some(json!("")),
            ..Default::default()
        };
        let detail = ListingDetail::build(&listing, 4);
        let groups: Vec<_> = detail
            .feature_groups
            .iter()
            .map(|g| (g.category, g.text.as_str()))
            .collect();
        assert_eq!(
            groups,
            vec![
                (FeatureCategory::Pool, "Pool"),
                (FeatureCategory::KitchenAppliances, "dishwasher"),
            ]
        );
    }
}
