pub mod tile;

pub use tile::{OpenStreetMapSource, TileCoord, TileLayer, TileSource, WmsTileSource};
