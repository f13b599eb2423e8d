#![cfg(all(feature = "serde", feature = "geometry", feature = "text"))]

//! Integration tests for serde support.
//!
//! These tests verify that the domain types serialize to, and deserialize
//! from, JSON.

use rstest::rstest;
use traverso::geometry::{Circle, Image, Point, Shape, Square};
use traverso::optics::Indexed;
use traverso::text::Text;

// =============================================================================
// Geometry
// =============================================================================

#[rstest]
fn test_point_json_format() {
    let json = serde_json::to_string(&Point::new(1.5, -2.0)).unwrap();
    assert_eq!(json, r#"{"x":1.5,"y":-2.0}"#);
}

#[rstest]
fn test_image_json_roundtrip() {
    let image = Image::from(vec![
        Shape::from(Circle::new(Point::new(3.0, 4.0), 5.0)),
        Shape::from(Square::new(Point::new(0.0, 0.0), 2.0)),
    ]);
    let json = serde_json::to_string(&image).unwrap();
    let restored: Image = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, image);
}

// =============================================================================
// Text and Indexed
// =============================================================================

#[rstest]
#[case("")]
#[case("hello world")]
#[case("line\nbreak \u{2028} ünïcode")]
fn test_text_serializes_as_string(#[case] contents: &str) {
    let text = Text::from(contents);
    let json = serde_json::to_string(&text).unwrap();
    assert_eq!(json, serde_json::to_string(contents).unwrap());
    let restored: Text = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, contents);
}

#[rstest]
fn test_indexed_json_roundtrip() {
    let indexed = Indexed::new(3, "value".to_string());
    let json = serde_json::to_string(&indexed).unwrap();
    let restored: Indexed<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, indexed);
}
