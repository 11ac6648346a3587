//! Slippy-map tile layout for the static location preview.

use crate::config::MapConfig;
use std::f64::consts::PI;

/// Edge length of a map tile in pixels
pub const TILE_SIZE: f64 = 256.0;
/// Web Mercator latitude limit
const MAX_LATITUDE: f64 = 85.051_128_78;
const SUBDOMAINS: [&str; 3] = ["a", "b", "c"];

/// One positioned tile inside the 3x3 grid
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedTile {
    pub url: String,
    /// Offset from the grid's top-left corner
    pub left_px: f64,
    pub top_px: f64,
}

/// A 3x3 tile grid centred on a coordinate
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    pub tiles: Vec<PlacedTile>,
    /// Translation that puts the coordinate at the container centre when the
    /// grid's top-left corner sits at the container centre
    pub shift_x_px: f64,
    pub shift_y_px: f64,
}

/// Fractional tile coordinates of a point at `zoom`
pub fn tile_position(lat: f64, lon: f64, zoom: u8) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let lon = ((lon + 180.0).rem_euclid(360.0)) - 180.0;
    let n = f64::from(1u32 << zoom);
    let x = (lon + 180.0) / 360.0 * n;
    let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * n;
    (x, y.clamp(0.0, n - f64::EPSILON))
}

/// Expands the `{s}`, `{z}`, `{x}`, `{y}` and `{r}` placeholders
pub fn tile_url(template: &str, zoom: u8, x: u32, y: u32) -> String {
    let subdomain = SUBDOMAINS[((x + y) % SUBDOMAINS.len() as u32) as usize];
    template
        .replace("{s}", subdomain)
        .replace("{z}", &zoom.to_string())
        .replace("{x}", &x.to_string())
        .replace("{y}", &y.to_string())
        .replace("{r}", "")
}

impl TileView {
    pub fn centered(lat: f64, lon: f64, config: &MapConfig) -> Self {
        let zoom = config.zoom;
        let (x, y) = tile_position(lat, lon, zoom);
        let center_x = x.floor() as i64;
        let center_y = y.floor() as i64;
        let tiles_per_axis = 1i64 << zoom;

        let mut tiles = Vec::with_capacity(9);
        for dy in -1..=1i64 {
            for dx in -1..=1i64 {
                let ty = center_y + dy;
                if ty < 0 || ty >= tiles_per_axis {
                    continue;
                }
                // The world wraps horizontally
                let tx = (center_x + dx).rem_euclid(tiles_per_axis);
                tiles.push(PlacedTile {
                    url: tile_url(&config.tile_url, zoom, tx as u32, ty as u32),
                    left_px: (dx + 1) as f64 * TILE_SIZE,
                    top_px: (dy + 1) as f64 * TILE_SIZE,
                });
            }
        }

        Self {
            tiles,
            shift_x_px: -(TILE_SIZE + x.fract() * TILE_SIZE),
            shift_y_px: -(TILE_SIZE + y.fract() * TILE_SIZE),
        }
    }
}
