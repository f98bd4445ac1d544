// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Metrics and rigid motions.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Squared Euclidean distance between `p` and `q`.
#[inline]
pub fn squared_distance(p: Point, q: Point) -> f64 {
    (q - p).hypot2()
}

/// Euclidean distance between `p` and `q`.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    squared_distance(p, q).sqrt()
}

/// Rotate `point` about `center` by `angle` radians (counter-clockwise for a y-up frame).
///
/// Returns a new point; the inputs are left untouched.
pub fn rotate_about(point: Point, angle: f64, center: Point) -> Point {
    let (sin, cos) = (angle.sin(), angle.cos());
    let d = point - center;
    Point::new(
        cos * d.x - sin * d.y + center.x,
        sin * d.x + cos * d.y + center.y,
    )
}

/// Squared distance from `point` to the finite segment `start..end`.
///
/// The point is projected onto the infinite line through the segment and the
/// projection parameter is clamped to `[0, 1]`. A zero-length segment
/// (`start == end`) degrades to the squared distance to `start`.
pub fn point_segment_distance_squared(start: Point, end: Point, point: Point) -> f64 {
    let v = end - start;
    let len2 = v.hypot2();
    if len2 == 0.0 {
        return squared_distance(point, start);
    }
    let t = ((point - start).dot(v) / len2).clamp(0.0, 1.0);
    squared_distance(point, start + t * v)
}

/// Distance from `point` to the finite segment `start..end`.
///
/// See [`point_segment_distance_squared`].
#[inline]
pub fn point_segment_distance(start: Point, end: Point, point: Point) -> f64 {
    point_segment_distance_squared(start, end, point).sqrt()
}
