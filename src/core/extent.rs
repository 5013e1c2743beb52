use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box in map coordinates, ordered
/// (min_x, min_y, max_x, max_y).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Extent {
    /// Creates a new extent from individual coordinates
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Returns the extent as a `[min_x, min_y, max_x, max_y]` array
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }

    /// Parses an extent from a delimited string of exactly four numeric
    /// components, e.g. `"150|-12|160|12"` with `'|'`.
    ///
    /// Returns `None` if the component count is wrong or any component does
    /// not parse as a float.
    pub fn parse_delimited(s: &str, sep: char) -> Option<Self> {
        let parts: Vec<&str> = s.split(sep).collect();
        if parts.len() != 4 {
            return None;
        }

        let mut coords = [0.0; 4];
        for (slot, part) in coords.iter_mut().zip(&parts) {
            *slot = part.trim().parse().ok()?;
        }

        Some(Self::from(coords))
    }

    /// Checks that every coordinate is finite and nonzero.
    ///
    /// Zero coordinates are rejected: catalog records use all-zero boxes as
    /// "no coverage" placeholders, so a 0.0 on any axis marks the extent
    /// unusable for display purposes.
    pub fn is_valid(&self) -> bool {
        self.to_array().iter().all(|v| v.is_finite() && *v != 0.0)
    }

    /// Returns true if the extent is degenerate: min and max coincide on
    /// both axes, i.e. the box collapses to a single point.
    pub fn is_point(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }

    /// Width along the x axis
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height along the y axis
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Gets the center of the extent
    pub fn center(&self) -> (f64, f64) {
        (
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Traces the extent as a closed rectangular ring.
    ///
    /// The ring visits (min_x, min_y), (min_x, max_y), (max_x, max_y),
    /// (max_x, min_y) and repeats the first corner to close, which is the
    /// corner order catalog geometry consumers expect.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring = LineString::from(vec![
            Coord {
                x: self.min_x,
                y: self.min_y,
            },
            Coord {
                x: self.min_x,
                y: self.max_y,
            },
            Coord {
                x: self.max_x,
                y: self.max_y,
            },
            Coord {
                x: self.max_x,
                y: self.min_y,
            },
            Coord {
                x: self.min_x,
                y: self.min_y,
            },
        ]);
        Polygon::new(ring, vec![])
    }
}

impl From<[f64; 4]> for Extent {
    fn from(c: [f64; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}

/// Renders an extent as a Dublin Core coverage description, e.g.
/// `North 90, South -90, East -180, West 180` or with a trailing
/// `. {location}` label.
///
/// East carries `min_x` and West carries `max_x`: the swap comes from the
/// catalog's historical dc:coverage encoding and downstream consumers parse
/// this exact shape. An absent extent renders as the empty string.
pub fn coverage_text(extent: Option<&Extent>, location: Option<&str>) -> String {
    match extent {
        Some(e) => {
            let mut dc = format!(
                "North {}, South {}, East {}, West {}",
                e.max_y, e.min_y, e.min_x, e.max_x
            );
            if let Some(loc) = location {
                dc.push_str(". ");
                dc.push_str(loc);
            }
            dc
        }
        None => String::new(),
    }
}
