// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The clipping rectangle supplied with each query.

use kurbo::{Line, Point, Rect};

/// Four corners of the visible region, in top-left, top-right, bottom-right,
/// bottom-left order.
///
/// The corners are expected to form an axis-aligned rectangle in the query's
/// coordinate space. Whether "top" means larger or smaller `y` is up to the
/// caller; [`Viewport::contains`] uses the extent of the corners and does not
/// care about orientation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    corners: [Point; 4],
}

impl Viewport {
    /// Build a viewport from its four corners.
    pub const fn new(
        top_left: Point,
        top_right: Point,
        bottom_right: Point,
        bottom_left: Point,
    ) -> Self {
        Self {
            corners: [top_left, top_right, bottom_right, bottom_left],
        }
    }

    /// Build a viewport from a [`Rect`], using kurbo's y-down naming of corners.
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs();
        Self::new(
            Point::new(rect.x0, rect.y0),
            Point::new(rect.x1, rect.y0),
            Point::new(rect.x1, rect.y1),
            Point::new(rect.x0, rect.y1),
        )
    }

    /// The corners in top-left, top-right, bottom-right, bottom-left order.
    #[inline]
    pub fn corners(&self) -> [Point; 4] {
        self.corners
    }

    /// The four boundary edges, each running from one corner to the next.
    pub fn edges(&self) -> [Line; 4] {
        let c = self.corners;
        [
            Line::new(c[0], c[1]),
            Line::new(c[1], c[2]),
            Line::new(c[2], c[3]),
            Line::new(c[3], c[0]),
        ]
    }

    /// Axis-aligned extent of the corners.
    pub fn bounds(&self) -> Rect {
        let c = self.corners;
        Rect::from_points(c[0], c[2]).union(Rect::from_points(c[1], c[3]))
    }

    /// Whether `p` lies inside or on the boundary.
    ///
    /// Unlike [`Rect::contains`], both the minimum and maximum edges are inclusive.
    pub fn contains(&self, p: Point) -> bool {
        let b = self.bounds();
        b.x0 <= p.x && p.x <= b.x1 && b.y0 <= p.y && p.y <= b.y1
    }
}

impl From<Rect> for Viewport {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
