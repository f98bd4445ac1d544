// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Output of a visibility query.

use alloc::vec::Vec;

use kurbo::{Line, Point};

/// Ordered boundary of the region visible from a viewpoint.
///
/// The boundary is an implicitly closed loop: the last point connects back to
/// the first. Vertices are ordered by strictly non-increasing polar angle
/// around the viewpoint, which for a y-up frame is a clockwise walk.
///
/// The polygon is produced fresh for each query and is meant to be consumed
/// right away, typically by filling [`VisibilityPolygon::fan`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityPolygon {
    points: Vec<Point>,
}

impl VisibilityPolygon {
    pub(crate) fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Boundary vertices in sweep order.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of boundary vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Boundary edges, including the closing edge from the last vertex to the first.
    pub fn edges(&self) -> impl Iterator<Item = Line> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Line::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Triangle fan `(viewpoint, p[i], p[i + 1])` covering the visible region,
    /// closed with `(viewpoint, p[n - 1], p[0])`.
    pub fn fan(&self, viewpoint: Point) -> impl Iterator<Item = [Point; 3]> + '_ {
        self.edges().map(move |e| [viewpoint, e.p0, e.p1])
    }

    /// Enclosed area (shoelace formula), independent of winding.
    pub fn area(&self) -> f64 {
        if self.points.len() < 3 {
            return 0.0;
        }
        let twice: f64 = self
            .edges()
            .map(|e| e.p0.x * e.p1.y - e.p1.x * e.p0.y)
            .sum();
        0.5 * twice.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn square() -> VisibilityPolygon {
        VisibilityPolygon::from_points(vec![
            Point::new(0.0, 10.0),
            Point::new(10.0, 10.0),
            Point::new(10.0, 0.0),
            Point::new(0.0, 0.0),
        ])
    }

    #[test]
    fn area_ignores_winding() {
        let cw = square();
        let mut pts = cw.points().to_vec();
        pts.reverse();
        let ccw = VisibilityPolygon::from_points(pts);
        assert_eq!(cw.area(), 100.0);
        assert_eq!(ccw.area(), 100.0);
    }

    #[test]
    fn degenerate_polygons_have_no_area() {
        assert_eq!(VisibilityPolygon::default().area(), 0.0);
        let two = VisibilityPolygon::from_points(vec![Point::ORIGIN, Point::new(1.0, 1.0)]);
        assert_eq!(two.area(), 0.0);
    }

    #[test]
    fn fan_closes_from_last_to_first() {
        let poly = square();
        let vp = Point::new(5.0, 5.0);
        let tris: Vec<_> = poly.fan(vp).collect();
        assert_eq!(tris.len(), 4);
        assert_eq!(
            tris[3],
            [vp, Point::new(0.0, 0.0), Point::new(0.0, 10.0)]
        );
        assert!(tris.iter().all(|t| t[0] == vp));
    }

    #[test]
    fn empty_polygon_has_no_edges() {
        assert_eq!(VisibilityPolygon::default().edges().count(), 0);
        assert!(VisibilityPolygon::default().is_empty());
    }
}
