//! Coordinate reference system registry and extent reprojection.
//!
//! The registry is an owned value rather than a process-wide table: a
//! [`crate::MapContext`] seeds one during construction and every lookup goes
//! through it, so registration happens exactly once per context instead of
//! by ambient global mutation.

use crate::core::constants::{EARTH_RADIUS, EPSG_2154, EPSG_3857, EPSG_4326, MAX_LATITUDE};
use crate::core::extent::Extent;
use crate::{MapError, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::f64::consts::PI;

/// A proj4-style projection definition keyed by its EPSG code.
///
/// Definitions are stored verbatim; the registry never inspects or validates
/// the definition string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionDef {
    pub code: String,
    #[serde(rename = "value")]
    pub definition: String,
}

impl ProjectionDef {
    pub fn new(code: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            definition: definition.into(),
        }
    }
}

/// Definitions every registry starts with.
static BUILTIN_DEFS: Lazy<Vec<ProjectionDef>> = Lazy::new(|| {
    vec![
        ProjectionDef::new(EPSG_4326, "+proj=longlat +datum=WGS84 +no_defs"),
        ProjectionDef::new(
            EPSG_3857,
            "+proj=merc +a=6378137 +b=6378137 +lat_ts=0 +lon_0=0 +x_0=0 +y_0=0 +k=1 +units=m +no_defs",
        ),
        ProjectionDef::new(
            EPSG_2154,
            "+proj=lcc +lat_1=49 +lat_2=44 +lat_0=46.5 +lon_0=3 +x_0=700000 +y_0=6600000 +ellps=GRS80 +towgs84=0,0,0,0,0,0,0 +units=m +no_defs",
        ),
    ]
});

/// An owned table of known coordinate reference systems.
#[derive(Debug, Clone, Default)]
pub struct ProjectionRegistry {
    defs: HashMap<String, ProjectionDef>,
}

impl ProjectionRegistry {
    /// Creates a registry seeded with WGS84, Web Mercator and Lambert-93.
    pub fn new() -> Self {
        let mut registry = Self {
            defs: HashMap::new(),
        };
        for def in BUILTIN_DEFS.iter() {
            registry.register(def.clone());
        }
        registry
    }

    /// Registers a definition. Last writer wins on duplicate codes.
    pub fn register(&mut self, def: ProjectionDef) {
        log::debug!("registering projection {}", def.code);
        self.defs.insert(def.code.clone(), def);
    }

    /// Registers every definition in the iterator, as supplied.
    pub fn register_all<I>(&mut self, defs: I)
    where
        I: IntoIterator<Item = ProjectionDef>,
    {
        for def in defs {
            self.register(def);
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.defs.contains_key(code)
    }

    pub fn get(&self, code: &str) -> Option<&ProjectionDef> {
        self.defs.get(code)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Transforms a single coordinate between two reference systems.
    ///
    /// Identical codes pass the coordinate through untouched. The built-in
    /// transform path covers EPSG:4326 <-> EPSG:3857; any other pair is an
    /// error since this crate carries no general projection engine.
    pub fn transform(&self, x: f64, y: f64, src: &str, dst: &str) -> Result<(f64, f64)> {
        if src == dst {
            return Ok((x, y));
        }

        match (src, dst) {
            (EPSG_4326, EPSG_3857) => Ok(wgs84_to_mercator(x, y)),
            (EPSG_3857, EPSG_4326) => Ok(mercator_to_wgs84(x, y)),
            _ => Err(MapError::Projection(format!(
                "no transform path from {} to {}",
                src, dst
            ))),
        }
    }

    /// Reprojects an extent corner-wise between two reference systems.
    ///
    /// Returns the input unchanged when the codes are identical or the
    /// extent is absent.
    pub fn reproject_extent(
        &self,
        extent: Option<Extent>,
        src: &str,
        dst: &str,
    ) -> Result<Option<Extent>> {
        let extent = match extent {
            Some(e) if src != dst => e,
            other => return Ok(other),
        };

        let (min_x, min_y) = self.transform(extent.min_x, extent.min_y, src, dst)?;
        let (max_x, max_y) = self.transform(extent.max_x, extent.max_y, src, dst)?;
        Ok(Some(Extent::new(min_x, min_y, max_x, max_y)))
    }
}

/// Converts a WGS84 lon/lat pair to Web Mercator meters (EPSG:3857)
pub fn wgs84_to_mercator(lon: f64, lat: f64) -> (f64, f64) {
    let lat = lat.clamp(-MAX_LATITUDE, MAX_LATITUDE);
    let x = lon.to_radians() * EARTH_RADIUS;
    let y = ((PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
    (x, y)
}

/// Converts Web Mercator meters back to a WGS84 lon/lat pair
pub fn mercator_to_wgs84(x: f64, y: f64) -> (f64, f64) {
    let lon = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    (lon, lat)
}
