// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The mode state machine.

use kurbo::{Point, Vec2};
use understory_segment_scene::{Scene, SceneError};
use understory_visibility::{VisibilityEngine, VisibilityParams};

use crate::frame::{FrameInput, FrameReport, Snap};
use crate::mode::Mode;

/// Editor configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchConfig {
    /// Snap radius in screen units.
    ///
    /// The pointer locks onto geometry when
    /// `distance² · zoom² <= snap_radius²`.
    pub snap_radius: f64,
    /// Parameters for [`Mode::VisibilityQuery`].
    pub visibility: VisibilityParams,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            snap_radius: 10.0,
            visibility: VisibilityParams::default(),
        }
    }
}

/// A segment being dragged, with node offsets from the pointer at grab time.
#[derive(Clone, Copy, Debug, PartialEq)]
struct SegmentGrab {
    index: usize,
    start_offset: Vec2,
    end_offset: Vec2,
}

/// Active mode together with the selection that only makes sense in it.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Activity {
    Idle,
    AddNode,
    MoveNode { dragging: Option<usize> },
    DeleteNode,
    AddSegment { pending_start: Option<usize> },
    MoveSegment { grab: Option<SegmentGrab> },
    DeleteSegment,
    VisibilityQuery,
}

impl Activity {
    fn enter(mode: Mode) -> Self {
        match mode {
            Mode::Idle => Self::Idle,
            Mode::AddNode => Self::AddNode,
            Mode::MoveNode => Self::MoveNode { dragging: None },
            Mode::DeleteNode => Self::DeleteNode,
            Mode::AddSegment => Self::AddSegment {
                pending_start: None,
            },
            Mode::MoveSegment => Self::MoveSegment { grab: None },
            Mode::DeleteSegment => Self::DeleteSegment,
            Mode::VisibilityQuery => Self::VisibilityQuery,
        }
    }

    fn mode(&self) -> Mode {
        match self {
            Self::Idle => Mode::Idle,
            Self::AddNode => Mode::AddNode,
            Self::MoveNode { .. } => Mode::MoveNode,
            Self::DeleteNode => Mode::DeleteNode,
            Self::AddSegment { .. } => Mode::AddSegment,
            Self::MoveSegment { .. } => Mode::MoveSegment,
            Self::DeleteSegment => Mode::DeleteSegment,
            Self::VisibilityQuery => Mode::VisibilityQuery,
        }
    }
}

/// Frame-driven editor for a [`Scene`].
///
/// The editor owns no geometry. Each call to [`Editor::frame`] interprets one
/// frame of input against the scene it is given, in this order:
///
/// 1. Mode keys. A mode key enters that mode from [`Mode::Idle`] and leaves it
///    again when pressed a second time. Keys for other modes are ignored while
///    a mode is active. Cancel returns to idle. Leaving a mode drops its
///    selection.
/// 2. Clear. While held, every node and segment is removed, the current mode's
///    selection is reset, and no editing happens.
/// 3. The active mode's behavior:
///
/// | Mode | Snaps to | Primary button |
/// |------|----------|----------------|
/// | [`AddNode`](Mode::AddNode) | nodes | press: add a node unless snapped |
/// | [`MoveNode`](Mode::MoveNode) | nodes | press: grab; held: follow the pointer; release: drop |
/// | [`DeleteNode`](Mode::DeleteNode) | nodes | press: delete with attached segments |
/// | [`AddSegment`](Mode::AddSegment) | nodes | press: extend the chain from the pending start |
/// | [`MoveSegment`](Mode::MoveSegment) | segments | press: grab; held: follow the pointer; release: drop |
/// | [`DeleteSegment`](Mode::DeleteSegment) | segments | press: delete |
/// | [`VisibilityQuery`](Mode::VisibilityQuery) | nothing | held: compute the visibility polygon |
///
/// An empty scene means there is nothing to snap to; it is never an error.
#[derive(Clone, Debug)]
pub struct Editor {
    config: SketchConfig,
    engine: VisibilityEngine,
    activity: Activity,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Editor {
    /// Create an idle editor.
    pub fn new(config: SketchConfig) -> Self {
        Self {
            config,
            engine: VisibilityEngine::with_params(config.visibility),
            activity: Activity::Idle,
        }
    }

    /// Configuration in use.
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.activity.mode()
    }

    /// First node of the segment chain in [`Mode::AddSegment`].
    pub fn pending_start(&self) -> Option<usize> {
        match self.activity {
            Activity::AddSegment { pending_start } => pending_start,
            _ => None,
        }
    }

    /// Node or segment currently being dragged.
    pub fn dragging(&self) -> Option<Snap> {
        match self.activity {
            Activity::MoveNode { dragging } => dragging.map(Snap::Node),
            Activity::MoveSegment { grab } => grab.map(|g| Snap::Segment(g.index)),
            _ => None,
        }
    }

    /// Apply a mode key. Returns whether the mode changed.
    pub fn select_mode(&mut self, mode: Mode) -> bool {
        let current = self.mode();
        if current.is_idle() && !mode.is_idle() {
            self.activity = Activity::enter(mode);
            log::debug!("entered {mode} mode");
            true
        } else if !current.is_idle() && mode == current {
            self.activity = Activity::Idle;
            log::debug!("left {current} mode");
            true
        } else {
            log::trace!("mode key {mode} ignored while in {current} mode");
            false
        }
    }

    /// Return to [`Mode::Idle`], dropping any selection.
    pub fn cancel(&mut self) {
        if !self.mode().is_idle() {
            log::debug!("cancelled {} mode", self.mode());
        }
        self.activity = Activity::Idle;
    }

    /// Drop the current mode's selection without leaving the mode.
    pub fn reset_selection(&mut self) {
        self.activity = Activity::enter(self.mode());
    }

    /// Run one frame.
    pub fn frame(&mut self, scene: &mut Scene, input: &FrameInput) -> FrameReport {
        let toggled = input.mode_select.is_some_and(|m| self.select_mode(m));
        if input.cancel && !toggled {
            self.cancel();
        }

        if input.clear {
            if !scene.is_empty() {
                log::debug!(
                    "cleared {} nodes and {} segments",
                    scene.node_count(),
                    scene.segment_count()
                );
            }
            scene.clear();
            self.reset_selection();
        } else {
            self.edit(scene, input);
        }

        let mut report = self.hover(scene, input);
        if self.mode() == Mode::VisibilityQuery && input.primary.held() {
            let poly = self
                .engine
                .compute_scene(input.pointer, &input.viewport, scene);
            log::trace!("visibility polygon with {} vertices", poly.len());
            report.visibility = Some(poly);
        }
        report
    }

    /// Apply the primary button to the scene.
    fn edit(&mut self, scene: &mut Scene, input: &FrameInput) {
        let pointer = input.pointer;
        let primary = input.primary;
        let node_snap = snap_node(scene, pointer, self.config.snap_radius, input.zoom);
        let segment_snap = snap_segment(scene, pointer, self.config.snap_radius, input.zoom);

        match &mut self.activity {
            Activity::Idle | Activity::VisibilityQuery => {}
            Activity::AddNode => {
                if primary.pressed() && node_snap.is_none() {
                    let index = scene.add_node(pointer);
                    log::debug!("added node {index} at {pointer:?}");
                }
            }
            Activity::MoveNode { dragging } => {
                if dragging.is_none() && primary.pressed() {
                    *dragging = node_snap;
                }
                if let Some(index) = *dragging {
                    if primary.held() {
                        log_refusal(scene.move_node(index, pointer));
                    }
                    if primary.released() {
                        log::debug!("dropped node {index} at {pointer:?}");
                        *dragging = None;
                    }
                }
            }
            Activity::DeleteNode => {
                if let (true, Some(index)) = (primary.pressed(), node_snap) {
                    log_refusal(scene.remove_node(index).map(drop));
                }
            }
            Activity::AddSegment { pending_start } => {
                if primary.pressed() {
                    let node = node_snap.unwrap_or_else(|| {
                        let index = scene.add_node(pointer);
                        log::debug!("added node {index} at {pointer:?}");
                        index
                    });
                    match *pending_start {
                        None => *pending_start = Some(node),
                        Some(start) => match scene.add_segment(start, node) {
                            Ok(index) => {
                                log::debug!("added segment {index} ({start}, {node})");
                                *pending_start = Some(node);
                            }
                            Err(err) => log::debug!("segment rejected: {err}"),
                        },
                    }
                }
            }
            Activity::MoveSegment { grab } => {
                if grab.is_none() && primary.pressed() {
                    *grab = segment_snap.and_then(|index| {
                        let line = scene.segment_endpoints(index)?;
                        Some(SegmentGrab {
                            index,
                            start_offset: line.p0 - pointer,
                            end_offset: line.p1 - pointer,
                        })
                    });
                }
                if let Some(g) = *grab {
                    if primary.held() {
                        log_refusal(scene.place_segment(
                            g.index,
                            pointer + g.start_offset,
                            pointer + g.end_offset,
                        ));
                    }
                    if primary.released() {
                        log::debug!("dropped segment {}", g.index);
                        *grab = None;
                    }
                }
            }
            Activity::DeleteSegment => {
                if let (true, Some(index)) = (primary.pressed(), segment_snap) {
                    match scene.remove_segment(index) {
                        Ok(seg) => {
                            log::debug!("removed segment {index} ({}, {})", seg.start, seg.end);
                        }
                        Err(err) => log::debug!("scene refused edit: {err}"),
                    }
                }
            }
        }
    }

    /// Snap feedback for the scene as it is after this frame's edit.
    fn hover(&self, scene: &Scene, input: &FrameInput) -> FrameReport {
        let mode = self.mode();
        let mut report = FrameReport::new(mode, input.pointer);
        report.pending_start = self.pending_start();

        if let Some(dragged) = self.dragging() {
            report.snap = Some(dragged);
            return report;
        }
        let radius = self.config.snap_radius;
        if mode.snaps_to_nodes() {
            if let Some(index) = snap_node(scene, input.pointer, radius, input.zoom) {
                report.snap = Some(Snap::Node(index));
                if let Some(p) = scene.node(index) {
                    report.snapped_pointer = p;
                }
            }
        } else if mode.snaps_to_segments() {
            report.snap = snap_segment(scene, input.pointer, radius, input.zoom).map(Snap::Segment);
        }
        report
    }
}

fn snap_node(scene: &Scene, pointer: Point, radius: f64, zoom: f64) -> Option<usize> {
    scene
        .nearest_node(pointer)
        .filter(|hit| hit.within(radius, zoom))
        .map(|hit| hit.index)
}

fn snap_segment(scene: &Scene, pointer: Point, radius: f64, zoom: f64) -> Option<usize> {
    scene
        .nearest_segment(pointer)
        .filter(|hit| hit.within(radius, zoom))
        .map(|hit| hit.index)
}

fn log_refusal(result: Result<(), SceneError>) {
    if let Err(err) = result {
        log::debug!("scene refused edit: {err}");
    }
}
