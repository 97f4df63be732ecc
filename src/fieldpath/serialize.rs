//! Serialization for field path types.
//!
//! Paths serialize as their user-facing display string so that difference
//! reports round through JSON tooling without a custom renderer.

use super::{FieldPath, Segment};
use serde::ser::{Serialize, Serializer};

impl Serialize for Segment {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Segment::Name(name) => serializer.serialize_str(name),
            Segment::Index(i) => serializer.serialize_str(&format!("[{}]", i)),
            Segment::Key(k) => serializer.serialize_str(&format!("[{:?}]", k)),
            Segment::Transparent => serializer.serialize_str(""),
        }
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_display_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_serializes_as_display_string() {
        let path = FieldPath::from_segments(vec![
            Segment::name("players"),
            Segment::index(1),
            Segment::Transparent,
            Segment::name("salary"),
        ]);
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, "\"players[1].salary\"");
    }
}
