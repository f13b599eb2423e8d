//! Tests for traversals over geometric shapes.
//!
//! Shapes and points are generated with proptest strategies: coordinates in
//! `0..100`, circle radii and square sizes in `0..10`, and up to four shapes
//! per image.

#![cfg(feature = "geometry")]
#![forbid(unsafe_code)]

use proptest::prelude::*;
use rstest::rstest;
use traverso::geometry::{Circle, Image, Point, Shape, Square};
use traverso::optics::Traversal;

// =============================================================================
// Strategies
// =============================================================================

fn point_strategy() -> impl Strategy<Value = Point> {
    (0.0..100.0_f64, 0.0..100.0_f64).prop_map(|(x, y)| Point::new(x, y))
}

fn circle_strategy() -> impl Strategy<Value = Circle> {
    (point_strategy(), 0.0..10.0_f64).prop_map(|(center, radius)| Circle::new(center, radius))
}

fn square_strategy() -> impl Strategy<Value = Square> {
    (point_strategy(), 0.0..10.0_f64).prop_map(|(top_left, size)| Square::new(top_left, size))
}

fn shape_strategy() -> impl Strategy<Value = Shape> {
    prop_oneof![
        circle_strategy().prop_map(Shape::Circle),
        square_strategy().prop_map(Shape::Square),
    ]
}

fn image_strategy() -> impl Strategy<Value = Image> {
    prop::collection::vec(shape_strategy(), 0..5).prop_map(Image::from)
}

// =============================================================================
// Fixed Examples
// =============================================================================

#[rstest]
fn test_circle_center_traversal_yields_center() {
    let mut circle = Circle::new(Point::new(3.0, 4.0), 5.0);
    let center = Circle::center_traversal().head_option(&mut circle);
    assert_eq!(center, Some(Point::new(3.0, 4.0)));
}

#[rstest]
#[case(3)]
#[case(0)]
fn test_image_shapes_count(#[case] count: u32) {
    let mut image: Image = (0..count)
        .map(|offset| Shape::from(Circle::new(Point::new(f64::from(offset), 0.0), 1.0)))
        .collect();
    assert_eq!(Image::shapes().length(&mut image), count as usize);
}

#[rstest]
fn test_circle_radius_field_traversal() {
    let mut image = Image::from(vec![
        Shape::from(Circle::new(Point::new(0.0, 0.0), 1.0)),
        Shape::from(Square::new(Point::new(0.0, 0.0), 1.0)),
        Shape::from(Circle::new(Point::new(0.0, 0.0), 2.0)),
    ]);
    let radii = Image::shapes()
        .compose(&Shape::circle_traversal())
        .compose(&Circle::radius_traversal());
    radii.modify_all(&mut image, |radius| radius * 10.0);
    let collected: Vec<f64> = radii.parts_of(&mut image).collect();
    assert_eq!(collected, vec![10.0, 20.0]);
}

#[rstest]
fn test_nested_point_coordinates() {
    let mut image = Image::from(vec![Shape::from(Square::new(Point::new(1.0, 2.0), 2.0))]);
    let xs = Image::shapes()
        .compose(&Shape::center_traversal())
        .compose(&Point::x_traversal());
    xs.set_all(&mut image, &0.0);
    assert_eq!(image.iter().next().map(Shape::center), Some(Point::new(0.0, 3.0)));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_circle_center_traversal_matches_center(mut circle in circle_strategy()) {
        let expected = *circle.center();
        prop_assert_eq!(Circle::center_traversal().head_option(&mut circle), Some(expected));
    }

    #[test]
    fn prop_shape_center_traversal_matches_center(mut shape in shape_strategy()) {
        let expected = shape.center();
        let centers: Vec<Point> = Shape::center_traversal().parts_of(&mut shape).collect();
        prop_assert_eq!(centers, vec![expected]);
    }

    #[test]
    fn prop_shapes_count_matches_image(mut image in image_strategy()) {
        let expected = image.len();
        prop_assert_eq!(Image::shapes().length(&mut image), expected);
    }

    #[test]
    fn prop_traversal_corresponds_to_iterator_pipeline(mut image in image_strategy()) {
        let expected: Vec<Point> = image
            .iter()
            .filter(|shape| matches!(shape, Shape::Square(_)))
            .map(Shape::center)
            .collect();
        let square_centers: Traversal<Image, Point> = Traversal::identity()
            .flat_map(|image: &mut Image| image.shapes_mut())
            .filter(|shape| matches!(shape, Shape::Square(_)))
            .map(Shape::center);
        let actual: Vec<Point> = square_centers.parts_of(&mut image).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_center_update_for_stored_and_computed_centers(
        mut shape in shape_strategy(),
        new_center in point_strategy(),
    ) {
        Shape::center_traversal().traverse(&mut shape, |center| {
            center.x = new_center.x;
            center.y = new_center.y;
        });
        prop_assert_eq!(shape.center(), new_center);
    }

    #[test]
    fn prop_centroid_is_mean(points in prop::collection::vec(point_strategy(), 1..10)) {
        let centroid = Point::centroid(&points);
        let count = points.len() as f64;
        let x = points.iter().map(|point| point.x).sum::<f64>() / count;
        let y = points.iter().map(|point| point.y).sum::<f64>() / count;
        prop_assert!(centroid.is_some_and(|centroid| {
            (centroid.x - x).abs() < 1e-9 && (centroid.y - y).abs() < 1e-9
        }), "centroid {:?} is not the mean ({}, {})", centroid, x, y);
    }
}
