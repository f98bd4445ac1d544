// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_visibility --heading-base-level=0

//! Understory Visibility: 2D visibility polygons among opaque line segments.
//!
//! Given a viewpoint, a rectangular [`Viewport`], and a set of segment
//! occluders, [`VisibilityEngine`] computes the region visible from the
//! viewpoint as a [`VisibilityPolygon`]. The viewport edges act as an extra
//! closed occluder, so the region is always bounded.
//!
//! The engine is a simple angular sweep: it casts one ray through every
//! interesting point (viewport corners, occluder endpoints, points where
//! occluders cross the viewport or each other), keeps the nearest hit of each
//! ray, and emits the hits in descending polar-angle order. Every point other
//! than a corner is bracketed by two extra rays rotated by a small angle
//! ([`VisibilityParams::angular_epsilon`]) so the sweep can see past occluder
//! corners and expose the shadow edges behind them.
//!
//! Cost is `O(T · S)` for `T` ray targets and `S` segments, which is fine for
//! editor-sized scenes. There is no spatial index.
//!
//! ## Coordinates
//!
//! Polar angles are plain `atan2(dy, dx)`, so with y pointing up the
//! vertices are walked clockwise; with kurbo's y-down convention they are
//! walked counterclockwise on screen. [`VisibilityPolygon::area`] does not
//! depend on the orientation.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_segment_scene::Scene;
//! use understory_visibility::{VisibilityEngine, Viewport};
//!
//! let viewport = Viewport::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
//!
//! // A wall spanning the whole room at x = 5.
//! let mut scene = Scene::new();
//! let a = scene.add_node(Point::new(5.0, -5.0));
//! let b = scene.add_node(Point::new(5.0, 15.0));
//! scene.add_segment(a, b).unwrap();
//!
//! let engine = VisibilityEngine::new();
//! let poly = engine.compute_scene(Point::new(2.0, 5.0), &viewport, &scene);
//!
//! // Only the left half of the room is visible.
//! assert!(poly.points().iter().all(|p| p.x <= 5.0 + 1e-9));
//! assert!((poly.area() - 50.0).abs() < 1e-6);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwards to `kurbo/std`.
//! - `libm`: `no_std` float math through `kurbo/libm`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod engine;
mod polygon;
mod viewport;

pub use engine::{VisibilityEngine, VisibilityParams};
pub use polygon::VisibilityPolygon;
pub use viewport::Viewport;
