// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame input and output of the editor.

use kurbo::Point;
use understory_visibility::{Viewport, VisibilityPolygon};

use crate::input::ButtonState;
use crate::mode::Mode;

/// Everything the editor reads in one frame.
///
/// The host is responsible for mapping screen coordinates into scene
/// coordinates before filling this in; `zoom` is only used to scale the
/// screen-space snap radius.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameInput {
    /// Pointer position in scene coordinates.
    pub pointer: Point,
    /// Scene-to-screen scale factor.
    pub zoom: f64,
    /// Visible region in scene coordinates. Bounds visibility queries.
    pub viewport: Viewport,
    /// Primary (confirm / drag) button.
    pub primary: ButtonState,
    /// A mode key went down this frame.
    pub mode_select: Option<Mode>,
    /// The cancel key went down this frame.
    pub cancel: bool,
    /// The clear key is down this frame.
    pub clear: bool,
}

impl FrameInput {
    /// A quiet frame: pointer at `pointer`, zoom 1, no buttons.
    pub fn new(pointer: Point, viewport: Viewport) -> Self {
        Self {
            pointer,
            zoom: 1.0,
            viewport,
            primary: ButtonState::empty(),
            mode_select: None,
            cancel: false,
            clear: false,
        }
    }

    /// Set the primary button state.
    pub fn with_primary(mut self, primary: ButtonState) -> Self {
        self.primary = primary;
        self
    }

    /// Set the zoom factor.
    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    /// Press the key for `mode`.
    pub fn selecting(mut self, mode: Mode) -> Self {
        self.mode_select = Some(mode);
        self
    }

    /// Press the cancel key.
    pub fn cancelling(mut self) -> Self {
        self.cancel = true;
        self
    }

    /// Hold the clear key.
    pub fn clearing(mut self) -> Self {
        self.clear = true;
        self
    }
}

/// What the pointer is locked onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Snap {
    /// A node, by index.
    Node(usize),
    /// A segment, by index.
    Segment(usize),
}

/// What the editor produced in one frame, for the host to render.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Mode after this frame's transitions.
    pub mode: Mode,
    /// Geometry under the pointer, or being dragged.
    ///
    /// Indices refer to the scene as it is after this frame's mutation.
    pub snap: Option<Snap>,
    /// The pointer, moved onto the snapped node if there is one.
    pub snapped_pointer: Point,
    /// First node of the segment being built in [`Mode::AddSegment`].
    pub pending_start: Option<usize>,
    /// Region visible from the pointer, while a visibility query is held.
    pub visibility: Option<VisibilityPolygon>,
}

impl FrameReport {
    pub(crate) fn new(mode: Mode, pointer: Point) -> Self {
        Self {
            mode,
            snap: None,
            snapped_pointer: pointer,
            pending_start: None,
            visibility: None,
        }
    }
}
