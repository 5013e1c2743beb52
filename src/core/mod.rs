pub mod config;
pub mod constants;
pub mod extent;
pub mod map;
pub mod projection;
pub mod view;

// Re-export commonly used types for convenience
pub use config::{MapConfig, ProjectionEntry, WmsLayerConfig};
pub use extent::Extent;
pub use map::MapContext;
pub use projection::{ProjectionDef, ProjectionRegistry};
pub use view::View;
