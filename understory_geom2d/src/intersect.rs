// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parametric line intersection.

use kurbo::Point;

use crate::PARALLEL_EPSILON;

/// Parameters of the crossing of `a0 + t·(a1 − a0)` and `b0 + s·(b1 − b0)`.
///
/// Returns `(t, s)` or `None` when the directions are parallel within
/// [`PARALLEL_EPSILON`].
#[inline]
fn solve(a0: Point, a1: Point, b0: Point, b1: Point) -> Option<(f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let denom = da.cross(db);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }
    let d = a0 - b0;
    let t = db.cross(d) / denom;
    let s = da.cross(d) / denom;
    Some((t, s))
}

/// Intersection of the finite segments `a_start..a_end` and `b_start..b_end`.
///
/// Only proper crossings are reported: both parameters must lie in the open
/// interval `(0, 1)`, so segments that merely share or touch at an endpoint do
/// not intersect. Parallel and collinear segments never intersect.
///
/// Whether an intersection exists does not depend on argument order; the
/// returned point is computed along the first segment and matches the swapped
/// call up to rounding.
pub fn segment_intersection(
    a_start: Point,
    a_end: Point,
    b_start: Point,
    b_end: Point,
) -> Option<Point> {
    let (t, s) = solve(a_start, a_end, b_start, b_end)?;
    if t > 0.0 && t < 1.0 && s > 0.0 && s < 1.0 {
        Some(a_start + t * (a_end - a_start))
    } else {
        None
    }
}

/// Intersection of the ray from `origin` through `through` with the segment
/// `b_start..b_end`.
///
/// The ray extends past `through` to infinity (`t >= 0`). Segment endpoints
/// are included (`0 <= s <= 1`) so that a ray grazing a vertex registers the
/// hit. A zero-length ray (`origin == through`) is singular and never hits.
pub fn ray_intersection(
    origin: Point,
    through: Point,
    b_start: Point,
    b_end: Point,
) -> Option<Point> {
    let (t, s) = solve(origin, through, b_start, b_end)?;
    if t >= 0.0 && (0.0..=1.0).contains(&s) {
        Some(origin + t * (through - origin))
    } else {
        None
    }
}
