// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Angular sweep over ray targets.

use alloc::vec;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Line, Point};
use understory_geom2d::{ray_intersection, rotate_about, segment_intersection, squared_distance};
use understory_segment_scene::{Scene, Segment, crossings};

use crate::polygon::VisibilityPolygon;
use crate::viewport::Viewport;

/// Parameters controlling a visibility query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibilityParams {
    /// Angle in radians by which each vertex is bracketed on either side.
    ///
    /// One bracketing ray slips past an occluder corner while the other is
    /// blocked by it, which is what exposes the shadow edge. Vertices of
    /// unrelated occluders that fall within this angle of each other may be
    /// swept in the wrong order, so the value trades robustness against
    /// resolution and is best tuned empirically for the scene scale.
    pub angular_epsilon: f64,
    /// Also cast rays at points where two scene segments cross.
    pub include_crossings: bool,
}

impl Default for VisibilityParams {
    fn default() -> Self {
        Self {
            angular_epsilon: 1e-6,
            include_crossings: true,
        }
    }
}

/// Computes visibility polygons for a viewpoint among opaque segments.
///
/// The viewport acts as an implicit closed occluder, so the result is always
/// clipped to it. The computation is a plain `O(targets × occluders)` sweep:
///
/// 1. Collect ray targets: the four viewport corners; every segment endpoint;
///    every point where a segment crosses the viewport boundary; and, when
///    enabled, every point where two segments cross. Each target except the
///    corners is bracketed by copies rotated `∓ε` about the viewpoint.
///    Only nodes referenced by at least one segment are targets; isolated
///    nodes occlude nothing and are ignored, so a scene without segments
///    always yields exactly the four corners.
/// 2. Drop targets outside the viewport and targets that coincide with the
///    viewpoint.
/// 3. Sort targets by descending polar angle around the viewpoint.
/// 4. Cast a ray through each target and keep the nearest hit against the
///    viewport edges and the scene segments, first found on ties.
///
/// The nearest hits, in sweep order, form the [`VisibilityPolygon`].
#[derive(Clone, Copy, Debug, Default)]
pub struct VisibilityEngine {
    /// Query parameters.
    pub params: VisibilityParams,
}

impl VisibilityEngine {
    /// Create an engine with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with explicit parameters.
    pub fn with_params(params: VisibilityParams) -> Self {
        Self { params }
    }

    /// Visibility polygon of `viewpoint` among the segments of `scene`.
    pub fn compute_scene(
        &self,
        viewpoint: Point,
        viewport: &Viewport,
        scene: &Scene,
    ) -> VisibilityPolygon {
        self.compute(viewpoint, viewport, scene.nodes(), scene.segments())
    }

    /// Visibility polygon of `viewpoint` among `segments`, whose endpoints are
    /// resolved through `nodes`.
    ///
    /// The viewpoint is expected to lie strictly inside `viewport`.
    pub fn compute(
        &self,
        viewpoint: Point,
        viewport: &Viewport,
        nodes: &[Point],
        segments: &[Segment],
    ) -> VisibilityPolygon {
        let targets = self.ray_targets(viewpoint, viewport, nodes, segments);
        let edges = viewport.edges();

        let mut points = Vec::with_capacity(targets.len());
        for target in targets {
            match nearest_hit(viewpoint, target, &edges, nodes, segments) {
                Some(hit) => points.push(hit),
                None => log::trace!("ray through {target:?} hit nothing; skipped"),
            }
        }
        log::trace!(
            "visibility polygon from {viewpoint:?}: {} vertices over {} segments",
            points.len(),
            segments.len()
        );
        VisibilityPolygon::from_points(points)
    }

    /// Filtered ray targets in sweep order.
    pub(crate) fn ray_targets(
        &self,
        viewpoint: Point,
        viewport: &Viewport,
        nodes: &[Point],
        segments: &[Segment],
    ) -> Vec<Point> {
        let eps = self.params.angular_epsilon;
        let mut raw: Vec<Point> = Vec::with_capacity(4 + 3 * 2 * segments.len());
        raw.extend(viewport.corners());

        let mut bracket = |p: Point| {
            raw.push(rotate_about(p, -eps, viewpoint));
            raw.push(p);
            raw.push(rotate_about(p, eps, viewpoint));
        };

        // Endpoints of segments. Nodes that no segment uses cannot occlude.
        let mut seen = vec![false; nodes.len()];
        for seg in segments {
            for n in [seg.start, seg.end] {
                if !seen[n] {
                    seen[n] = true;
                    bracket(nodes[n]);
                }
            }
        }

        // Where the occluders leave the viewport.
        for edge in viewport.edges() {
            for seg in segments {
                if let Some(p) =
                    segment_intersection(edge.p0, edge.p1, nodes[seg.start], nodes[seg.end])
                {
                    bracket(p);
                }
            }
        }

        if self.params.include_crossings {
            for p in crossings(nodes, segments) {
                bracket(p);
            }
        }

        let total = raw.len();
        let mut keyed: Vec<(f64, Point)> = raw
            .into_iter()
            .filter(|p| viewport.contains(*p) && *p != viewpoint)
            .map(|p| ((p.y - viewpoint.y).atan2(p.x - viewpoint.x), p))
            .collect();
        log::trace!(
            "{} of {total} ray targets inside the viewport",
            keyed.len()
        );
        keyed.sort_by(|a, b| b.0.total_cmp(&a.0));
        keyed.into_iter().map(|(_, p)| p).collect()
    }
}

/// Nearest hit of the ray `viewpoint → target` against viewport edges first,
/// then scene segments. Ties keep the first hit found.
fn nearest_hit(
    viewpoint: Point,
    target: Point,
    edges: &[Line; 4],
    nodes: &[Point],
    segments: &[Segment],
) -> Option<Point> {
    let occluders = edges.iter().map(|e| (e.p0, e.p1)).chain(
        segments
            .iter()
            .map(|s| (nodes[s.start], nodes[s.end])),
    );
    let mut best: Option<(f64, Point)> = None;
    for (a, b) in occluders {
        let Some(hit) = ray_intersection(viewpoint, target, a, b) else {
            continue;
        };
        let d2 = squared_distance(viewpoint, hit);
        if best.is_none_or(|(best_d2, _)| d2 < best_d2) {
            best = Some((d2, hit));
        }
    }
    best.map(|(_, p)| p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use kurbo::Rect;

    fn unit_room() -> Viewport {
        Viewport::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0))
    }

    fn angles(viewpoint: Point, points: &[Point]) -> Vec<f64> {
        points
            .iter()
            .map(|p| (p.y - viewpoint.y).atan2(p.x - viewpoint.x))
            .collect()
    }

    #[test]
    fn empty_scene_yields_the_corners() {
        let engine = VisibilityEngine::new();
        let vp = Point::new(5.0, 5.0);
        let poly = engine.compute(vp, &unit_room(), &[], &[]);
        assert_eq!(
            poly.points(),
            &[
                Point::new(0.0, 10.0),
                Point::new(10.0, 10.0),
                Point::new(10.0, 0.0),
                Point::new(0.0, 0.0),
            ]
        );
        assert_abs_diff_eq!(poly.area(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn corners_only_for_any_interior_viewpoint() {
        let engine = VisibilityEngine::new();
        let room = unit_room();
        for vp in [
            Point::new(0.5, 0.5),
            Point::new(9.0, 1.0),
            Point::new(2.0, 7.5),
            Point::new(5.0, 9.99),
        ] {
            let poly = engine.compute(vp, &room, &[], &[]);
            assert_eq!(poly.len(), 4, "viewpoint {vp:?}");
            for p in poly.points() {
                assert!(room.corners().iter().any(|c| (*c - *p).hypot() < 1e-9));
            }
            assert_abs_diff_eq!(poly.area(), 100.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn isolated_nodes_add_no_targets() {
        let engine = VisibilityEngine::new();
        let nodes = [Point::new(3.0, 3.0), Point::new(7.0, 2.0)];
        let poly = engine.compute(Point::new(5.0, 5.0), &unit_room(), &nodes, &[]);
        assert_eq!(poly.len(), 4);
    }

    #[test]
    fn full_height_wall_clips_the_far_side() {
        let engine = VisibilityEngine::new();
        let nodes = [Point::new(5.0, -5.0), Point::new(5.0, 15.0)];
        let segments = [Segment::new(0, 1)];
        let vp = Point::new(2.0, 5.0);
        let poly = engine.compute(vp, &unit_room(), &nodes, &segments);

        assert!(!poly.is_empty());
        for p in poly.points() {
            assert!(p.x <= 5.0 + 1e-9, "vertex {p:?} beyond the wall");
        }
        // Visible region is exactly the left half of the room.
        assert_abs_diff_eq!(poly.area(), 50.0, epsilon = 1e-6);
    }

    #[test]
    fn short_wall_casts_a_trapezoid_shadow() {
        let engine = VisibilityEngine::new();
        let nodes = [Point::new(7.0, 4.0), Point::new(7.0, 6.0)];
        let segments = [Segment::new(0, 1)];
        let vp = Point::new(5.0, 5.0);
        let poly = engine.compute(vp, &unit_room(), &nodes, &segments);

        // Shadow spans x in 7..10, widening from 2 to 5 units.
        assert_abs_diff_eq!(poly.area(), 100.0 - 10.5, epsilon = 1e-4);
        let near = |q: Point| poly.points().iter().any(|p| (*p - q).hypot() < 1e-4);
        assert!(near(Point::new(7.0, 6.0)));
        assert!(near(Point::new(7.0, 4.0)));
        assert!(near(Point::new(10.0, 7.5)));
        assert!(near(Point::new(10.0, 2.5)));
    }

    #[test]
    fn output_is_sorted_by_descending_angle() {
        let engine = VisibilityEngine::new();
        let nodes = [
            Point::new(2.0, 2.0),
            Point::new(4.0, 8.0),
            Point::new(8.0, 3.0),
            Point::new(6.0, 9.0),
        ];
        let segments = [Segment::new(0, 1), Segment::new(2, 3)];
        let vp = Point::new(5.0, 5.0);
        let targets = engine.ray_targets(vp, &unit_room(), &nodes, &segments);
        let a = angles(vp, &targets);
        assert!(a.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn targets_bracket_endpoints_and_boundary_exits() {
        let engine = VisibilityEngine::new();
        let vp = Point::new(2.0, 5.0);

        // Fully inside: 4 corners + 3 samples per endpoint.
        let inside = [Point::new(4.0, 4.0), Point::new(4.0, 6.0)];
        let t = engine.ray_targets(vp, &unit_room(), &inside, &[Segment::new(0, 1)]);
        assert_eq!(t.len(), 4 + 2 * 3);

        // Crossing the room: endpoints are outside, but each boundary exit
        // contributes its own sample plus the bracket that stays inside.
        let through = [Point::new(5.0, -5.0), Point::new(5.0, 15.0)];
        let t = engine.ray_targets(vp, &unit_room(), &through, &[Segment::new(0, 1)]);
        assert_eq!(t.len(), 4 + 2 * 2);
    }

    #[test]
    fn crossings_become_targets_when_enabled() {
        let nodes = [
            Point::new(3.0, 3.0),
            Point::new(7.0, 7.0),
            Point::new(3.0, 7.0),
            Point::new(7.0, 3.0),
        ];
        let segments = [Segment::new(0, 1), Segment::new(2, 3)];
        let vp = Point::new(1.0, 5.0);

        let with = VisibilityEngine::new().ray_targets(vp, &unit_room(), &nodes, &segments);
        let without = VisibilityEngine::with_params(VisibilityParams {
            include_crossings: false,
            ..VisibilityParams::default()
        })
        .ray_targets(vp, &unit_room(), &nodes, &segments);
        assert_eq!(with.len(), without.len() + 3);
        assert!(with.contains(&Point::new(5.0, 5.0)));
    }

    #[test]
    fn viewpoint_on_a_target_skips_it() {
        let engine = VisibilityEngine::new();
        let nodes = [Point::new(5.0, 5.0), Point::new(8.0, 5.0)];
        let segments = [Segment::new(0, 1)];
        let vp = Point::new(5.0, 5.0);
        let targets = engine.ray_targets(vp, &unit_room(), &nodes, &segments);
        assert!(!targets.contains(&vp));
    }

    #[test]
    fn scene_and_slices_agree() {
        let mut scene = Scene::new();
        let a = scene.add_node(Point::new(7.0, 4.0));
        let b = scene.add_node(Point::new(7.0, 6.0));
        scene.add_segment(a, b).unwrap();
        let engine = VisibilityEngine::new();
        let vp = Point::new(5.0, 5.0);
        assert_eq!(
            engine.compute_scene(vp, &unit_room(), &scene),
            engine.compute(vp, &unit_room(), scene.nodes(), scene.segments())
        );
    }
}
