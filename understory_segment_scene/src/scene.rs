// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node/segment store.

use alloc::vec::Vec;

use kurbo::{Line, Point};
use smallvec::SmallVec;

use crate::error::SceneError;
use crate::query::{Nearest, crossings, nearest_node, nearest_segment};

/// Indices of the segments attached to one node, in ascending order.
pub type ConnectedSegments = SmallVec<[usize; 4]>;

/// An edge between two nodes, stored as node indices.
///
/// `start` and `end` are distinguishable while a segment is being built, but
/// for existence checks the segment is undirected; see [`Segment::same_edge`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Segment {
    /// Index of the first node.
    pub start: usize,
    /// Index of the second node.
    pub end: usize,
}

impl Segment {
    /// Create a segment from two node indices.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Whether both ends name the same node.
    #[inline]
    pub const fn is_self_loop(&self) -> bool {
        self.start == self.end
    }

    /// Whether `node` is one of the two ends.
    #[inline]
    pub const fn touches(&self, node: usize) -> bool {
        self.start == node || self.end == node
    }

    /// Undirected equality: `(a, b)` is the same edge as `(b, a)`.
    #[inline]
    pub const fn same_edge(&self, other: &Self) -> bool {
        (self.start == other.start && self.end == other.end)
            || (self.start == other.end && self.end == other.start)
    }
}

/// What [`Scene::remove_node`] took out of the scene.
#[derive(Clone, Debug, PartialEq)]
pub struct RemovedNode {
    /// Position of the removed node.
    pub position: Point,
    /// Segments that referenced the node, with their indices as they were before removal.
    pub segments: SmallVec<[Segment; 4]>,
}

/// Owner of the node and segment sequences.
///
/// Every segment index is kept valid by construction: all mutations go
/// through methods that either preserve the invariant or return a
/// [`SceneError`] without touching the store.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    nodes: Vec<Point>,
    segments: Vec<Segment>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// All nodes in index order.
    #[inline]
    pub fn nodes(&self) -> &[Point] {
        &self.nodes
    }

    /// All segments in index order.
    #[inline]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of nodes.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of segments.
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Whether the scene holds no nodes (and therefore no segments).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Position of node `index`, if it exists.
    #[inline]
    pub fn node(&self, index: usize) -> Option<Point> {
        self.nodes.get(index).copied()
    }

    /// Segment `index`, if it exists.
    #[inline]
    pub fn segment(&self, index: usize) -> Option<Segment> {
        self.segments.get(index).copied()
    }

    /// Resolve segment `index` into its endpoint positions.
    pub fn segment_endpoints(&self, index: usize) -> Option<Line> {
        let seg = self.segments.get(index)?;
        Some(Line::new(self.nodes[seg.start], self.nodes[seg.end]))
    }

    /// Iterate over all segments resolved into endpoint positions.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.segments
            .iter()
            .map(|s| Line::new(self.nodes[s.start], self.nodes[s.end]))
    }

    /// Append a node and return its index.
    pub fn add_node(&mut self, position: Point) -> usize {
        self.nodes.push(position);
        self.nodes.len() - 1
    }

    /// Move node `index` to `position`.
    pub fn move_node(&mut self, index: usize, position: Point) -> Result<(), SceneError> {
        let len = self.nodes.len();
        let node = self
            .nodes
            .get_mut(index)
            .ok_or(SceneError::NodeOutOfRange { index, len })?;
        *node = position;
        Ok(())
    }

    /// Place the endpoints of segment `index` at `start` and `end`.
    pub fn place_segment(
        &mut self,
        index: usize,
        start: Point,
        end: Point,
    ) -> Result<(), SceneError> {
        let seg = self.segment_checked(index)?;
        self.nodes[seg.start] = start;
        self.nodes[seg.end] = end;
        Ok(())
    }

    /// Indices of all segments that reference `node`, ascending.
    pub fn connected_segments(&self, node: usize) -> ConnectedSegments {
        self.segments
            .iter()
            .enumerate()
            .filter(|(_, s)| s.touches(node))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether a segment equal to `segment` exists, in either direction.
    pub fn segment_exists(&self, segment: Segment) -> bool {
        self.segments.iter().any(|s| s.same_edge(&segment))
    }

    /// Insert the segment `start → end` and return its index.
    ///
    /// Self-loops and undirected duplicates are refused.
    pub fn add_segment(&mut self, start: usize, end: usize) -> Result<usize, SceneError> {
        let len = self.nodes.len();
        for index in [start, end] {
            if index >= len {
                return Err(SceneError::NodeOutOfRange { index, len });
            }
        }
        let segment = Segment::new(start, end);
        if segment.is_self_loop() {
            return Err(SceneError::SelfLoop { node: start });
        }
        if self.segment_exists(segment) {
            return Err(SceneError::DuplicateSegment { start, end });
        }
        self.segments.push(segment);
        Ok(self.segments.len() - 1)
    }

    /// Remove segment `index`. Node indices are unaffected.
    pub fn remove_segment(&mut self, index: usize) -> Result<Segment, SceneError> {
        self.segment_checked(index)?;
        Ok(self.segments.remove(index))
    }

    /// Remove node `index` together with every segment attached to it.
    ///
    /// Afterwards every surviving segment endpoint greater than `index` is
    /// decremented by one, so the remaining segments keep referring to the
    /// same positions.
    pub fn remove_node(&mut self, index: usize) -> Result<RemovedNode, SceneError> {
        let len = self.nodes.len();
        if index >= len {
            return Err(SceneError::NodeOutOfRange { index, len });
        }

        let attached = self.connected_segments(index);
        let mut removed: SmallVec<[Segment; 4]> = attached
            .iter()
            .rev()
            .map(|&i| self.segments.remove(i))
            .collect();
        removed.reverse();
        for seg in &mut self.segments {
            if seg.start > index {
                seg.start -= 1;
            }
            if seg.end > index {
                seg.end -= 1;
            }
        }
        let position = self.nodes.remove(index);
        log::debug!(
            "removed node {index} and {} attached segment(s)",
            removed.len()
        );
        Ok(RemovedNode {
            position,
            segments: removed,
        })
    }

    /// Remove all nodes and segments.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.segments.clear();
    }

    /// Every point where two distinct segments properly cross.
    ///
    /// See [`crossings`].
    pub fn crossings(&self) -> Vec<Point> {
        crossings(&self.nodes, &self.segments)
    }

    /// Closest node to `point`, or `None` when the scene has no nodes.
    pub fn nearest_node(&self, point: Point) -> Option<Nearest> {
        if self.nodes.is_empty() {
            return None;
        }
        nearest_node(point, &self.nodes)
    }

    /// Closest segment to `point`, or `None` when the scene has no segments.
    pub fn nearest_segment(&self, point: Point) -> Option<Nearest> {
        if self.segments.is_empty() {
            return None;
        }
        nearest_segment(point, &self.nodes, &self.segments)
    }

    fn segment_checked(&self, index: usize) -> Result<Segment, SceneError> {
        self.segments
            .get(index)
            .copied()
            .ok_or(SceneError::SegmentOutOfRange {
                index,
                len: self.segments.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// A square 0-1-2-3 with one diagonal 0-2.
    fn square() -> Scene {
        let mut scene = Scene::new();
        for (x, y) in [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)] {
            scene.add_node(Point::new(x, y));
        }
        for (a, b) in [(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)] {
            scene.add_segment(a, b).unwrap();
        }
        scene
    }

    #[test]
    fn undirected_existence() {
        let mut scene = Scene::new();
        let a = scene.add_node(Point::new(0.0, 0.0));
        let b = scene.add_node(Point::new(1.0, 1.0));
        scene.add_segment(a, b).unwrap();
        assert!(scene.segment_exists(Segment::new(a, b)));
        assert!(scene.segment_exists(Segment::new(b, a)));
        assert_eq!(
            scene.add_segment(b, a),
            Err(SceneError::DuplicateSegment { start: b, end: a })
        );
        assert_eq!(scene.segment_count(), 1);
    }

    #[test]
    fn self_loop_rejected() {
        let mut scene = Scene::new();
        let a = scene.add_node(Point::new(0.0, 0.0));
        assert_eq!(scene.add_segment(a, a), Err(SceneError::SelfLoop { node: a }));
        assert_eq!(scene.segment_count(), 0);
    }

    #[test]
    fn segment_to_missing_node_rejected() {
        let mut scene = Scene::new();
        scene.add_node(Point::new(0.0, 0.0));
        assert_eq!(
            scene.add_segment(0, 3),
            Err(SceneError::NodeOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn connected_segments_are_ascending() {
        let scene = square();
        assert_eq!(scene.connected_segments(0).as_slice(), &[0, 3, 4]);
        assert_eq!(scene.connected_segments(1).as_slice(), &[0, 1]);
        assert!(Scene::new().connected_segments(0).is_empty());
    }

    #[test]
    fn remove_node_drops_attached_and_renumbers() {
        let mut scene = square();
        let removed = scene.remove_node(1).unwrap();
        assert_eq!(removed.position, Point::new(10.0, 0.0));
        assert_eq!(
            removed.segments.as_slice(),
            &[Segment::new(0, 1), Segment::new(1, 2)]
        );
        assert_eq!(scene.node_count(), 3);
        assert_eq!(
            scene.segments(),
            &[Segment::new(1, 2), Segment::new(2, 0), Segment::new(0, 1)]
        );
    }

    #[test]
    fn remove_node_keeps_geometry_of_survivors() {
        // Every configuration of a small graph: removal must keep each surviving
        // segment attached to the same two positions.
        for victim in 0..4 {
            let mut scene = square();
            let before: Vec<(Point, Point)> = scene
                .segments()
                .iter()
                .filter(|s| !s.touches(victim))
                .map(|s| (scene.nodes()[s.start], scene.nodes()[s.end]))
                .collect();
            scene.remove_node(victim).unwrap();
            let after: Vec<(Point, Point)> = scene.lines().map(|l| (l.p0, l.p1)).collect();
            assert_eq!(before, after, "removing node {victim}");
            for s in scene.segments() {
                assert!(s.start < scene.node_count() && s.end < scene.node_count());
            }
        }
    }

    #[test]
    fn remove_isolated_last_node() {
        let mut scene = square();
        let extra = scene.add_node(Point::new(50.0, 50.0));
        let removed = scene.remove_node(extra).unwrap();
        assert!(removed.segments.is_empty());
        assert_eq!(scene.segment_count(), 5);
        assert_eq!(scene.segments()[4], Segment::new(0, 2));
    }

    #[test]
    fn remove_out_of_range() {
        let mut scene = square();
        assert_eq!(
            scene.remove_node(4),
            Err(SceneError::NodeOutOfRange { index: 4, len: 4 })
        );
        assert_eq!(
            scene.remove_segment(9),
            Err(SceneError::SegmentOutOfRange { index: 9, len: 5 })
        );
    }

    #[test]
    fn remove_segment_keeps_nodes() {
        let mut scene = square();
        assert_eq!(scene.remove_segment(4), Ok(Segment::new(0, 2)));
        assert_eq!(scene.node_count(), 4);
        assert_eq!(scene.segment_count(), 4);
    }

    #[test]
    fn move_and_place() {
        let mut scene = square();
        scene.move_node(2, Point::new(12.0, 12.0)).unwrap();
        assert_eq!(scene.node(2), Some(Point::new(12.0, 12.0)));
        scene
            .place_segment(0, Point::new(1.0, -1.0), Point::new(11.0, -1.0))
            .unwrap();
        assert_eq!(
            scene.segment_endpoints(0),
            Some(Line::new((1.0, -1.0), (11.0, -1.0)))
        );
        // Node 1 is shared with segment 1, which follows along.
        assert_eq!(
            scene.segment_endpoints(1),
            Some(Line::new((11.0, -1.0), (12.0, 12.0)))
        );
        assert!(scene.move_node(7, Point::ORIGIN).is_err());
        assert_eq!(
            scene.place_segment(9, Point::ORIGIN, Point::ORIGIN),
            Err(SceneError::SegmentOutOfRange { index: 9, len: 5 })
        );
    }

    #[test]
    fn crossings_report_each_pair_once() {
        let mut scene = square();
        // Second diagonal crosses the first at the center.
        scene.add_segment(1, 3).unwrap();
        let crossings = scene.crossings();
        assert_eq!(crossings.len(), 1);
        assert_abs_diff_eq!(crossings[0].x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(crossings[0].y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn crossing_of_skewed_segments() {
        let mut scene = Scene::new();
        for (x, y) in [(0.0, 0.0), (3.0, 7.0), (0.0, 5.0), (9.0, 1.0)] {
            scene.add_node(Point::new(x, y));
        }
        scene.add_segment(0, 1).unwrap();
        scene.add_segment(2, 3).unwrap();
        let crossings = scene.crossings();
        assert_eq!(crossings.len(), 1);
        // Both lines pass through the reported point.
        let p = crossings[0];
        assert_abs_diff_eq!(p.y, 7.0 / 3.0 * p.x, epsilon = 1e-9);
        assert_abs_diff_eq!(p.y, 5.0 - 4.0 / 9.0 * p.x, epsilon = 1e-9);
    }

    #[test]
    fn nearest_segment_distance_to_slanted_edge() {
        let scene = square();
        // Closest to the diagonal 0-2: distance to the line y = x.
        let hit = scene.nearest_segment(Point::new(4.0, 5.0)).unwrap();
        assert_eq!(hit.index, 4);
        assert_abs_diff_eq!(hit.distance_squared, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn shared_vertices_are_not_crossings() {
        assert!(square().crossings().is_empty());
    }

    #[test]
    fn clear_empties_everything() {
        let mut scene = square();
        scene.clear();
        assert!(scene.is_empty());
        assert_eq!(scene.segment_count(), 0);
        assert!(scene.nearest_node(Point::ORIGIN).is_none());
        assert!(scene.nearest_segment(Point::ORIGIN).is_none());
    }
}
