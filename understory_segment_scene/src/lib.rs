// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_segment_scene --heading-base-level=0

//! Understory Segment Scene: an index-based store of nodes and line segments.
//!
//! A [`Scene`] owns two sequences:
//!
//! - **Nodes**: 2D points ([`kurbo::Point`]) identified by their position in the node sequence.
//! - **Segments**: [`Segment`] values holding two node indices.
//!
//! Segments reference nodes by index rather than by handle, so the store keeps
//! the graph consistent itself: removing a node first removes every segment
//! attached to it and then shifts all higher node indices down by one. Inserting
//! a segment rejects self-loops and duplicates, where `(a, b)` and `(b, a)` are
//! the same edge.
//!
//! The [`query`] module provides linear-scan nearest lookups ([`nearest_node`],
//! [`nearest_segment`]) used for snapping a pointer to existing geometry. There is
//! no spatial acceleration structure; scenes are expected to be interactive-editor
//! sized.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_segment_scene::{Scene, SceneError, Segment};
//!
//! let mut scene = Scene::new();
//! let a = scene.add_node(Point::new(0.0, 0.0));
//! let b = scene.add_node(Point::new(10.0, 0.0));
//! let c = scene.add_node(Point::new(10.0, 10.0));
//! scene.add_segment(a, b).unwrap();
//! scene.add_segment(b, c).unwrap();
//!
//! // Undirected duplicates are rejected.
//! assert_eq!(
//!     scene.add_segment(b, a),
//!     Err(SceneError::DuplicateSegment { start: b, end: a })
//! );
//!
//! // Removing node `a` drops the segment attached to it and renumbers the rest.
//! scene.remove_node(a).unwrap();
//! assert_eq!(scene.segments(), &[Segment::new(0, 1)]);
//!
//! // Snap a pointer to the closest remaining node.
//! let near = scene.nearest_node(Point::new(9.0, 9.0)).unwrap();
//! assert_eq!(near.index, 1);
//! assert_eq!(near.distance_squared, 2.0);
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

mod error;
pub mod query;
mod scene;

pub use error::SceneError;
pub use query::{Nearest, crossings, nearest_node, nearest_segment};
pub use scene::{ConnectedSegments, RemovedNode, Scene, Segment};
