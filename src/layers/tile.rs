//! Base tile layers: OpenStreetMap and WMS sources.
//!
//! Sources only build request URLs; fetching, caching, and drawing tiles is
//! the hosting map component's job.

use crate::core::config::{MapConfig, WmsLayerConfig};
use crate::core::constants::{EARTH_RADIUS, EPSG_3857, TILE_SIZE};
use crate::core::extent::Extent;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// A coordinate in the slippy map tile grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// Checks that the tile exists at its zoom level
    pub fn is_valid(&self) -> bool {
        let max_coord = 2_u32.pow(self.z as u32);
        self.x < max_coord && self.y < max_coord
    }

    /// The tile's footprint in Web Mercator meters (EPSG:3857).
    ///
    /// Tile y grows southward, mercator y grows northward.
    pub fn mercator_extent(&self) -> Extent {
        let half_world = PI * EARTH_RADIUS;
        let tile_span = 2.0 * half_world / 2_f64.powi(self.z as i32);

        let min_x = -half_world + self.x as f64 * tile_span;
        let max_y = half_world - self.y as f64 * tile_span;
        Extent::new(min_x, max_y - tile_span, min_x + tile_span, max_y)
    }
}

/// Trait representing anything that can produce tile URLs for a given coordinate.
pub trait TileSource: Send + Sync {
    /// Build a URL for the requested `coord`.
    fn url(&self, coord: TileCoord) -> String;

    /// Attribution line to show on the map for this source.
    fn attribution(&self) -> &str {
        ""
    }
}

/// Tile source for the public OpenStreetMap servers.
pub struct OpenStreetMapSource {
    subdomains: Vec<&'static str>,
}

impl OpenStreetMapSource {
    pub fn new() -> Self {
        Self {
            subdomains: vec!["a", "b", "c"],
        }
    }
}

impl Default for OpenStreetMapSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TileSource for OpenStreetMapSource {
    fn url(&self, coord: TileCoord) -> String {
        if self.subdomains.is_empty() {
            return format!(
                "https://tile.openstreetmap.org/{}/{}/{}.png",
                coord.z, coord.x, coord.y
            );
        }

        let idx = ((coord.x + coord.y) % self.subdomains.len() as u32) as usize;
        let sub = self.subdomains[idx];
        format!(
            "https://{}.tile.openstreetmap.org/{}/{}/{}.png",
            sub, coord.z, coord.x, coord.y
        )
    }

    fn attribution(&self) -> &str {
        "© OpenStreetMap contributors"
    }
}

/// Tile source issuing WMS GetMap requests against a configured endpoint.
pub struct WmsTileSource {
    url: String,
    layers: String,
    version: String,
}

impl WmsTileSource {
    pub fn new(
        url: impl Into<String>,
        layers: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            layers: layers.into(),
            version: version.into(),
        }
    }

    pub fn from_config(config: &WmsLayerConfig) -> Self {
        Self::new(&config.url, &config.layers, &config.version)
    }

    /// WMS 1.3.0 renamed the SRS parameter to CRS
    fn crs_param(&self) -> &'static str {
        if self.version.starts_with("1.3") {
            "CRS"
        } else {
            "SRS"
        }
    }
}

impl TileSource for WmsTileSource {
    fn url(&self, coord: TileCoord) -> String {
        let bbox = coord.mercator_extent();
        let sep = if self.url.contains('?') { '&' } else { '?' };
        format!(
            "{}{}SERVICE=WMS&REQUEST=GetMap&VERSION={}&LAYERS={}&STYLES=&{}={}&BBOX={},{},{},{}&WIDTH={}&HEIGHT={}&FORMAT=image/png",
            self.url,
            sep,
            self.version,
            self.layers,
            self.crs_param(),
            EPSG_3857,
            bbox.min_x,
            bbox.min_y,
            bbox.max_x,
            bbox.max_y,
            TILE_SIZE,
            TILE_SIZE,
        )
    }
}

/// A background tile layer wrapping a source.
pub struct TileLayer {
    source: Box<dyn TileSource>,
}

impl TileLayer {
    pub fn new(source: Box<dyn TileSource>) -> Self {
        Self { source }
    }

    /// OpenStreetMap base layer
    pub fn osm() -> Self {
        Self::new(Box::new(OpenStreetMapSource::new()))
    }

    /// WMS base layer from connection parameters
    pub fn wms(config: &WmsLayerConfig) -> Self {
        Self::new(Box::new(WmsTileSource::from_config(config)))
    }

    /// Builds the base layer a configuration asks for: OSM when `use_osm`
    /// is set, otherwise a WMS layer. A configuration that disables OSM but
    /// carries no WMS parameters falls back to OSM.
    pub fn from_config(config: &MapConfig) -> Self {
        if config.use_osm {
            return Self::osm();
        }

        match &config.layer {
            Some(layer) => {
                log::info!("building WMS base layer for {}", layer.url);
                Self::wms(layer)
            }
            None => {
                log::warn!("useOSM is false but no WMS layer is configured, falling back to OSM");
                Self::osm()
            }
        }
    }

    pub fn source(&self) -> &dyn TileSource {
        self.source.as_ref()
    }

    pub fn tile_url(&self, coord: TileCoord) -> String {
        self.source.url(coord)
    }

    pub fn attribution(&self) -> &str {
        self.source.attribution()
    }
}
