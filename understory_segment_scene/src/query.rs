// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nearest-geometry lookups.
//!
//! Both queries are plain linear scans over the input slices. Ties resolve to
//! the lowest index, since a later candidate only replaces the current best
//! when it is strictly closer.
//!
//! Querying an empty collection is a caller bug: callers are expected to
//! check for emptiness first (an empty scene simply means "nothing to snap
//! to"). Debug builds assert; release builds return `None`.

use alloc::vec::Vec;
use core::cmp::Ordering;

use kurbo::Point;
use understory_geom2d::{point_segment_distance_squared, segment_intersection, squared_distance};

use crate::scene::Segment;

/// Result of a nearest lookup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Nearest {
    /// Index of the closest element in the queried slice.
    pub index: usize,
    /// Squared distance from the query point to that element.
    pub distance_squared: f64,
}

impl Nearest {
    /// Whether the hit lies inside a screen-space snap radius.
    ///
    /// `zoom` converts world units into screen units; the comparison is done on
    /// squared values: `distance² · zoom² <= radius²`.
    #[inline]
    pub fn within(&self, radius: f64, zoom: f64) -> bool {
        self.distance_squared * zoom * zoom <= radius * radius
    }

    /// Compare two hits by distance; ties compare equal.
    pub fn cmp_distance(&self, other: &Self) -> Ordering {
        self.distance_squared
            .partial_cmp(&other.distance_squared)
            .unwrap_or(Ordering::Equal)
    }
}

fn first_minimum(distances: impl Iterator<Item = f64>) -> Option<Nearest> {
    let mut best: Option<Nearest> = None;
    for (index, distance_squared) in distances.enumerate() {
        let candidate = Nearest {
            index,
            distance_squared,
        };
        match best {
            Some(b) if candidate.cmp_distance(&b) != Ordering::Less => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Closest node to `point`.
pub fn nearest_node(point: Point, nodes: &[Point]) -> Option<Nearest> {
    debug_assert!(
        !nodes.is_empty(),
        "nearest_node requires at least one node"
    );
    first_minimum(nodes.iter().map(|n| squared_distance(point, *n)))
}

/// Closest segment to `point`, with segment endpoints resolved through `nodes`.
pub fn nearest_segment(point: Point, nodes: &[Point], segments: &[Segment]) -> Option<Nearest> {
    debug_assert!(
        !segments.is_empty(),
        "nearest_segment requires at least one segment"
    );
    first_minimum(
        segments
            .iter()
            .map(|s| point_segment_distance_squared(nodes[s.start], nodes[s.end], point)),
    )
}

/// Every point where two distinct segments properly cross.
///
/// Each unordered pair is tested once. Segments that merely share an endpoint,
/// touch, or run parallel contribute nothing; see
/// [`understory_geom2d::segment_intersection`].
pub fn crossings(nodes: &[Point], segments: &[Segment]) -> Vec<Point> {
    let mut out = Vec::new();
    for (i, a) in segments.iter().enumerate() {
        for b in &segments[i + 1..] {
            if let Some(p) =
                segment_intersection(nodes[a.start], nodes[a.end], nodes[b.start], nodes[b.end])
            {
                out.push(p);
            }
        }
    }
    out
}
