// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One editing session: a scene plus the editor driving it.

use understory_segment_scene::Scene;

use crate::editor::{Editor, SketchConfig};
use crate::frame::{FrameInput, FrameReport};
use crate::mode::Mode;

/// Owns the scene being edited and the editor state.
///
/// Create one when editing starts and drop it when editing ends. The host
/// calls [`SketchSession::frame`] once per tick and renders from
/// [`SketchSession::scene`] and the returned [`FrameReport`].
#[derive(Clone, Debug, Default)]
pub struct SketchSession {
    scene: Scene,
    editor: Editor,
}

impl SketchSession {
    /// Start a session on an empty scene.
    pub fn new(config: SketchConfig) -> Self {
        Self::with_scene(Scene::new(), config)
    }

    /// Start a session on existing geometry.
    pub fn with_scene(scene: Scene, config: SketchConfig) -> Self {
        Self {
            scene,
            editor: Editor::new(config),
        }
    }

    /// The geometry being edited.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The editor state.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// The active mode.
    pub fn mode(&self) -> Mode {
        self.editor.mode()
    }

    /// Process one frame of input.
    pub fn frame(&mut self, input: &FrameInput) -> FrameReport {
        self.editor.frame(&mut self.scene, input)
    }

    /// End the session and keep the geometry.
    pub fn into_scene(self) -> Scene {
        self.scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ButtonTracker;
    use kurbo::{Point, Rect};
    use understory_segment_scene::Segment;
    use understory_visibility::Viewport;

    #[test]
    fn scripted_session_builds_and_queries() {
        let viewport = Viewport::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let mut session = SketchSession::new(SketchConfig {
            snap_radius: 0.5,
            ..SketchConfig::default()
        });
        let mut primary = ButtonTracker::new();
        let mut frame = |session: &mut SketchSession, x: f64, y: f64, down: bool| {
            let input =
                FrameInput::new(Point::new(x, y), viewport).with_primary(primary.update(down));
            session.frame(&input)
        };

        session.frame(&FrameInput::new(Point::ORIGIN, viewport).selecting(Mode::AddSegment));
        frame(&mut session, 7.0, 4.0, true);
        frame(&mut session, 7.0, 4.0, false);
        frame(&mut session, 7.0, 6.0, true);
        frame(&mut session, 7.0, 6.0, false);
        assert_eq!(session.scene().segments(), &[Segment::new(0, 1)]);

        session.frame(&FrameInput::new(Point::ORIGIN, viewport).selecting(Mode::AddSegment));
        session.frame(&FrameInput::new(Point::ORIGIN, viewport).selecting(Mode::VisibilityQuery));
        assert_eq!(session.mode(), Mode::VisibilityQuery);

        let report = frame(&mut session, 5.0, 5.0, true);
        let poly = report.visibility.expect("query is held");
        approx::assert_abs_diff_eq!(poly.area(), 89.5, epsilon = 1e-4);

        let scene = session.into_scene();
        assert_eq!(scene.node_count(), 2);
    }

    #[test]
    fn with_scene_starts_idle() {
        let mut scene = Scene::new();
        scene.add_node(Point::new(1.0, 2.0));
        let session = SketchSession::with_scene(scene, SketchConfig::default());
        assert_eq!(session.mode(), Mode::Idle);
        assert_eq!(session.scene().node_count(), 1);
        assert_eq!(session.editor().config().snap_radius, 10.0);
    }
}
