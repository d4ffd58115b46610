//! Point rotation about a pivot.

use nalgebra::Point2;

/// Rotate `point` about `pivot` by `degrees` (counterclockwise)
pub fn rotate_point(point: Point2<f64>, pivot: Point2<f64>, degrees: f64) -> Point2<f64> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    let dx = point.x - pivot.x;
    let dy = point.y - pivot.y;
    Point2::new(
        pivot.x + dx * cos - dy * sin,
        pivot.y + dx * sin + dy * cos,
    )
}
