//! # Carta
//!
//! Typed map helpers for catalog applications.
//!
//! This library provides the map-facing utility layer a catalog UI needs:
//! extent math and parsing, an owned projection registry, map configuration
//! with per-field defaults, base tile-layer construction (OSM or WMS), and
//! eased zoom transitions over a resolution-based view model.

pub mod animation;
pub mod core;
pub mod data;
pub mod layers;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::{MapConfig, ProjectionEntry, WmsLayerConfig},
    extent::{coverage_text, Extent},
    map::MapContext,
    projection::{ProjectionDef, ProjectionRegistry},
    view::View,
};

pub use layers::tile::{OpenStreetMapSource, TileCoord, TileLayer, TileSource, WmsTileSource};

pub use animation::{easing::EasingType, zoom::ZoomTransition};

pub use data::record::extent_from_record;

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("Projection error: {0}")]
    Projection(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid extent: {0}")]
    InvalidExtent(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
