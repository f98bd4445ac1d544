// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_sketch --heading-base-level=0

//! Understory Sketch: a frame-driven editor for nodes, segments, and visibility.
//!
//! This crate ties [`understory_segment_scene`] and [`understory_visibility`]
//! into an interactive editing model. It does not draw anything and does not
//! read devices. The host feeds one [`FrameInput`] per tick and renders from the
//! scene and the returned [`FrameReport`].
//!
//! - [`Mode`]: the eight interaction modes, one active at a time.
//! - [`Editor`]: the state machine. Each mode carries only the selection it
//!   needs (a dragged node, a grabbed segment, the pending start of a segment
//!   chain), so leaving a mode can never leave stale selection behind.
//! - [`ButtonTracker`] / [`ButtonState`]: turn a polled "is down" level into
//!   pressed / held / released edges. Creation and deletion act on press,
//!   drags follow held, and drops happen on release.
//! - [`SketchSession`]: owns a [`Scene`](understory_segment_scene::Scene) and
//!   an [`Editor`] for the lifetime of one editing session.
//!
//! Snapping compares in screen space: geometry within
//! [`SketchConfig::snap_radius`] screen units of the pointer, scaled by the
//! frame's zoom, is picked instead of creating new geometry.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_sketch::{ButtonState, FrameInput, Mode, SketchConfig, SketchSession};
//! use understory_visibility::Viewport;
//!
//! let viewport = Viewport::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
//! let mut session = SketchSession::new(SketchConfig::default());
//!
//! // Enter segment mode and click twice to draw one segment.
//! session.frame(&FrameInput::new(Point::ORIGIN, viewport).selecting(Mode::AddSegment));
//! for p in [Point::new(20.0, 20.0), Point::new(80.0, 20.0)] {
//!     session.frame(&FrameInput::new(p, viewport).with_primary(ButtonState::DOWN));
//!     session.frame(&FrameInput::new(p, viewport).with_primary(ButtonState::RELEASED));
//! }
//! assert_eq!(session.scene().segment_count(), 1);
//!
//! // Switch to the visibility query and hold the button below the segment.
//! session.frame(&FrameInput::new(Point::ORIGIN, viewport).selecting(Mode::AddSegment));
//! session.frame(&FrameInput::new(Point::ORIGIN, viewport).selecting(Mode::VisibilityQuery));
//! let report = session.frame(
//!     &FrameInput::new(Point::new(50.0, 50.0), viewport).with_primary(ButtonState::HELD),
//! );
//! let poly = report.visibility.unwrap();
//! assert!(poly.area() < 100.0 * 100.0);
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

mod editor;
mod frame;
pub mod input;
mod mode;
mod session;

pub use editor::{Editor, SketchConfig};
pub use frame::{FrameInput, FrameReport, Snap};
pub use input::{ButtonState, ButtonTracker};
pub use mode::Mode;
pub use session::SketchSession;
