//! Extent extraction from catalog metadata records.

use crate::core::extent::Extent;
use serde_json::Value;

/// Field on metadata records carrying the record's bounding box.
const GEO_BOX_FIELD: &str = "geoBox";

/// Reads a record's bounding box from its `geoBox` field.
///
/// The field holds a pipe-delimited string such as `"150|-12|160|12"`; some
/// records carry a list of such strings, in which case the first entry is
/// used. An absent or malformed field yields `None`, the caller decides what
/// a record without coverage means.
pub fn extent_from_record(record: &Value) -> Option<Extent> {
    let geo_box = record.get(GEO_BOX_FIELD)?;

    let encoded = match geo_box {
        Value::String(s) => s.as_str(),
        Value::Array(items) => items.first()?.as_str()?,
        _ => return None,
    };

    Extent::parse_delimited(encoded, '|')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_geo_box() {
        let record = json!({ "geoBox": "150|-12|160|12" });
        assert_eq!(
            extent_from_record(&record),
            Some(Extent::new(150.0, -12.0, 160.0, 12.0))
        );
    }

    #[test]
    fn test_list_geo_box_uses_first_entry() {
        let record = json!({ "geoBox": ["-10|35|30|70", "150|-12|160|12"] });
        assert_eq!(
            extent_from_record(&record),
            Some(Extent::new(-10.0, 35.0, 30.0, 70.0))
        );
    }

    #[test]
    fn test_missing_field() {
        assert_eq!(extent_from_record(&json!({})), None);
        assert_eq!(extent_from_record(&json!({ "title": "Bathymetry" })), None);
    }

    #[test]
    fn test_malformed_field() {
        assert_eq!(extent_from_record(&json!({ "geoBox": "150|-12|160" })), None);
        assert_eq!(extent_from_record(&json!({ "geoBox": "a|b|c|d" })), None);
        assert_eq!(extent_from_record(&json!({ "geoBox": 42 })), None);
        assert_eq!(extent_from_record(&json!({ "geoBox": [] })), None);
        assert_eq!(extent_from_record(&json!({ "geoBox": [42] })), None);
    }
}
