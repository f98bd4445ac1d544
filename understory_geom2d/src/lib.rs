// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_geom2d --heading-base-level=0

//! Understory Geom2D: stateless geometry kernels for point-and-segment editors.
//!
//! This crate collects the handful of numeric building blocks that a
//! segment-based editor needs every frame, expressed over [`kurbo`] types:
//!
//! - Euclidean metrics: [`squared_distance`] and [`distance`].
//! - Rotation of a point about a center: [`rotate_about`].
//! - Distance from a point to a finite segment, with the zero-length segment
//!   treated as a point: [`point_segment_distance_squared`].
//! - Segment/segment crossing with endpoints excluded: [`segment_intersection`].
//! - Ray/segment hit with endpoints included: [`ray_intersection`].
//!
//! All functions are pure and deterministic for given inputs. None of them
//! mutate their arguments.
//!
//! ## Intersection conventions
//!
//! Both intersection routines solve the same 2×2 system through the cross
//! product determinant of the two direction vectors. When its magnitude is
//! below [`PARALLEL_EPSILON`] the lines are treated as parallel and no
//! intersection is reported, including for collinear overlaps. This is an
//! approximation, not a degenerate-geometry resolver.
//!
//! The two routines differ in which parameter ranges count as a hit:
//!
//! | Routine | first operand | second operand |
//! |---------|---------------|----------------|
//! | [`segment_intersection`] | `0 < t < 1` | `0 < s < 1` |
//! | [`ray_intersection`] | `t >= 0` | `0 <= s <= 1` |
//!
//! Segments that only touch at an endpoint therefore do not cross, while a ray
//! grazing a segment endpoint does hit it.
//!
//! ```rust
//! use kurbo::Point;
//! use understory_geom2d::{ray_intersection, segment_intersection};
//!
//! let hit = segment_intersection(
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//!     Point::new(10.0, 0.0),
//! );
//! assert_eq!(hit, Some(Point::new(5.0, 5.0)));
//!
//! // A ray from the origin through (1, 0) reaches the wall at x = 4.
//! let wall = ray_intersection(
//!     Point::ORIGIN,
//!     Point::new(1.0, 0.0),
//!     Point::new(4.0, -1.0),
//!     Point::new(4.0, 1.0),
//! );
//! assert_eq!(wall, Some(Point::new(4.0, 0.0)));
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float math through `kurbo/libm`.
//!
//! This crate is `no_std`.

#![no_std]

mod distance;
mod intersect;

pub use distance::{
    distance, point_segment_distance, point_segment_distance_squared, rotate_about,
    squared_distance,
};
pub use intersect::{ray_intersection, segment_intersection};

/// Determinant magnitude below which two directions are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;
