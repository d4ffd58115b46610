use approx::assert_relative_eq;
use nalgebra::Point2;

use crate::rotate::rotate_point;

#[test]
fn test_quarter_turn_about_origin() {
    let rotated = rotate_point(Point2::new(1.0, 0.0), Point2::origin(), 90.0);
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.y, 1.0, epsilon = 1e-12);
}

#[test]
fn test_rotation_about_offset_pivot() {
    let pivot = Point2::new(10.0, 10.0);
    let rotated = rotate_point(Point2::new(11.0, 10.0), pivot, 180.0);
    assert_relative_eq!(rotated.x, 9.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.y, 10.0, epsilon = 1e-12);
}

#[test]
fn test_full_turn_is_identity() {
    let point = Point2::new(3.0, -4.0);
    let rotated = rotate_point(point, Point2::new(1.0, 1.0), 360.0);
    assert_relative_eq!(rotated.x, point.x, epsilon = 1e-9);
    assert_relative_eq!(rotated.y, point.y, epsilon = 1e-9);
}

#[test]
fn test_negative_angle_rotates_clockwise() {
    let rotated = rotate_point(Point2::new(1.0, 0.0), Point2::origin(), -90.0);
    assert_relative_eq!(rotated.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(rotated.y, -1.0, epsilon = 1e-12);
}

#[test]
fn test_rotation_preserves_distance_to_pivot() {
    let pivot = Point2::new(2.0, 5.0);
    let point = Point2::new(7.0, -1.0);
    let rotated = rotate_point(point, pivot, 37.0);
    assert_relative_eq!(
        (rotated - pivot).norm(),
        (point - pivot).norm(),
        epsilon = 1e-12
    );
}
