//! Shared constants derived from common web-map conventions.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

/// Spherical earth radius used by the Web Mercator projection, in meters.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Latitude beyond which Web Mercator is undefined; inputs are clamped here.
pub const MAX_LATITUDE: f64 = 85.0511287798;

/// WGS84 geographic coordinates.
pub const EPSG_4326: &str = "EPSG:4326";

/// Spherical Web Mercator.
pub const EPSG_3857: &str = "EPSG:3857";

/// Lambert-93, the French national grid; registered by default for
/// catalogs carrying IGN data.
pub const EPSG_2154: &str = "EPSG:2154";

/// Duration of the programmatic zoom animation in milliseconds.
pub const ZOOM_DURATION_MS: u64 = 250;

/// Programmatic +/- zoom step when calling `zoom_by`.
pub const DEFAULT_ZOOM_DELTA: i32 = 1;
