//! Map configuration with per-field defaulting.
//!
//! The catalog supplies configuration as a JSON object with every field
//! optional. Defaulting happens once, at load time, so consumers always see
//! a fully-populated [`MapConfig`] instead of re-checking optional fields.

use crate::core::constants::{EPSG_3857, EPSG_4326};
use crate::core::projection::ProjectionDef;
use serde::{Deserialize, Serialize};

/// A projection offered to the user in the map's projection switcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionEntry {
    pub code: String,
    pub label: String,
}

impl ProjectionEntry {
    pub fn new(code: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            label: label.into(),
        }
    }
}

/// Connection parameters for a WMS base layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WmsLayerConfig {
    pub url: String,
    pub layers: String,
    #[serde(default = "default_wms_version")]
    pub version: String,
}

fn default_wms_version() -> String {
    "1.3.0".to_string()
}

/// Map configuration as supplied by the catalog, with defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapConfig {
    /// Use OpenStreetMap as the base layer; when false a WMS base layer is
    /// built from `layer`.
    #[serde(rename = "useOSM", default = "default_use_osm")]
    pub use_osm: bool,

    /// Display projection of the map view.
    #[serde(default = "default_projection")]
    pub projection: String,

    /// Projections offered in the UI switcher.
    #[serde(default = "default_projection_list")]
    pub projection_list: Vec<ProjectionEntry>,

    /// WMS base layer parameters, used when `use_osm` is false.
    #[serde(default)]
    pub layer: Option<WmsLayerConfig>,

    /// Additional proj4 definitions to register on startup.
    #[serde(rename = "proj4js", default)]
    pub projection_defs: Vec<ProjectionDef>,
}

fn default_use_osm() -> bool {
    true
}

fn default_projection() -> String {
    EPSG_3857.to_string()
}

fn default_projection_list() -> Vec<ProjectionEntry> {
    vec![
        ProjectionEntry::new(EPSG_4326, "WGS84 (EPSG:4326)"),
        ProjectionEntry::new(EPSG_3857, "Google mercator (EPSG:3857)"),
    ]
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            use_osm: default_use_osm(),
            projection: default_projection(),
            projection_list: default_projection_list(),
            layer: None,
            projection_defs: Vec::new(),
        }
    }
}

impl MapConfig {
    /// Builds a configuration from an optional JSON value.
    ///
    /// A present, deserializable object wins; anything else (absent value,
    /// non-object, unreadable fields) falls back to the default
    /// configuration.
    pub fn from_value(value: Option<&serde_json::Value>) -> Self {
        match value {
            Some(v) if v.is_object() => match serde_json::from_value(v.clone()) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("malformed map configuration, using defaults: {}", err);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = MapConfig::default();
        assert!(config.use_osm);
        assert_eq!(config.projection, "EPSG:3857");
        assert_eq!(config.projection_list.len(), 2);
        assert_eq!(config.projection_list[0].code, "EPSG:4326");
        assert_eq!(config.projection_list[1].code, "EPSG:3857");
        assert!(config.layer.is_none());
    }

    #[test]
    fn test_from_value_absent() {
        assert_eq!(MapConfig::from_value(None), MapConfig::default());
    }

    #[test]
    fn test_from_value_non_object() {
        let value = json!("not a config");
        assert_eq!(MapConfig::from_value(Some(&value)), MapConfig::default());
    }

    #[test]
    fn test_from_value_partial_object_gets_defaults() {
        let value = json!({ "projection": "EPSG:4326" });
        let config = MapConfig::from_value(Some(&value));
        assert_eq!(config.projection, "EPSG:4326");
        // Unspecified fields keep their defaults
        assert!(config.use_osm);
        assert_eq!(config.projection_list.len(), 2);
    }

    #[test]
    fn test_from_value_wms_config() {
        let value = json!({
            "useOSM": false,
            "layer": {
                "url": "https://wms.example.org/wms",
                "layers": "countries",
                "version": "1.1.1"
            }
        });
        let config = MapConfig::from_value(Some(&value));
        assert!(!config.use_osm);
        let layer = config.layer.unwrap();
        assert_eq!(layer.url, "https://wms.example.org/wms");
        assert_eq!(layer.layers, "countries");
        assert_eq!(layer.version, "1.1.1");
    }

    #[test]
    fn test_wms_version_defaults() {
        let value = json!({
            "layer": { "url": "https://wms.example.org/wms", "layers": "base" }
        });
        let config = MapConfig::from_value(Some(&value));
        assert_eq!(config.layer.unwrap().version, "1.3.0");
    }

    #[test]
    fn test_proj4_defs_list() {
        let value = json!({
            "proj4js": [
                { "code": "EPSG:27572", "value": "+proj=lcc +lat_1=46.8" }
            ]
        });
        let config = MapConfig::from_value(Some(&value));
        assert_eq!(config.projection_defs.len(), 1);
        assert_eq!(config.projection_defs[0].code, "EPSG:27572");
    }
}
