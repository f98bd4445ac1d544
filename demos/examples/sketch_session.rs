// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted editing session: draw a few walls, drag one, then query visibility.
//!
//! This example shows how a host drives `understory_sketch`:
//! - poll a raw button level and turn it into edges with `ButtonTracker`,
//! - feed one `FrameInput` per tick to a `SketchSession`,
//! - render from the scene and the returned `FrameReport`.
//!
//! Run:
//! - `cargo run -p understory_demos --example sketch_session`
//! - `RUST_LOG=debug cargo run -p understory_demos --example sketch_session` to see editor events.

use kurbo::{Point, Rect};
use understory_sketch::{ButtonTracker, FrameInput, FrameReport, Mode, SketchConfig, SketchSession};
use understory_visibility::Viewport;

/// One tick of scripted input.
#[derive(Clone, Copy, Debug)]
enum Step {
    /// Press a mode key.
    Key(Mode),
    /// Pointer at `(x, y)` with the primary button down or up.
    Pointer(f64, f64, bool),
}

struct Host {
    session: SketchSession,
    viewport: Viewport,
    primary: ButtonTracker,
}

impl Host {
    fn tick(&mut self, step: Step) -> FrameReport {
        let input = match step {
            Step::Key(mode) => FrameInput::new(Point::ORIGIN, self.viewport).selecting(mode),
            Step::Pointer(x, y, down) => FrameInput::new(Point::new(x, y), self.viewport)
                .with_primary(self.primary.update(down)),
        };
        self.session.frame(&input)
    }

    fn click(&mut self, x: f64, y: f64) {
        self.tick(Step::Pointer(x, y, true));
        self.tick(Step::Pointer(x, y, false));
    }
}

fn main() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let mut host = Host {
        session: SketchSession::new(SketchConfig::default()),
        viewport: Viewport::from_rect(Rect::new(0.0, 0.0, 400.0, 300.0)),
        primary: ButtonTracker::new(),
    };

    // Two walls: an L-shaped polyline and a free-standing pillar edge.
    host.tick(Step::Key(Mode::AddSegment));
    for (x, y) in [(100.0, 60.0), (100.0, 200.0), (260.0, 200.0)] {
        host.click(x, y);
    }
    host.tick(Step::Key(Mode::AddSegment));
    host.tick(Step::Key(Mode::AddSegment));
    host.click(300.0, 80.0);
    host.click(340.0, 140.0);
    host.tick(Step::Key(Mode::AddSegment));

    // Drag the pillar 20 units to the left.
    host.tick(Step::Key(Mode::MoveSegment));
    host.tick(Step::Pointer(320.0, 110.0, true));
    host.tick(Step::Pointer(300.0, 110.0, true));
    host.tick(Step::Pointer(300.0, 110.0, false));
    host.tick(Step::Key(Mode::MoveSegment));

    let scene = host.session.scene();
    log::info!(
        "scene: {} nodes, {} segments, {} crossings",
        scene.node_count(),
        scene.segment_count(),
        scene.crossings().len()
    );
    for (i, line) in scene.lines().enumerate() {
        println!("segment {i}: {:?} -> {:?}", line.p0, line.p1);
    }

    // Hold the query from inside the L.
    host.tick(Step::Key(Mode::VisibilityQuery));
    let viewpoint = Point::new(180.0, 120.0);
    let report = host.tick(Step::Pointer(viewpoint.x, viewpoint.y, true));
    let Some(poly) = report.visibility else {
        log::warn!("no visibility polygon produced");
        return;
    };

    println!(
        "visibility from {viewpoint:?}: {} vertices, area {:.1} of {:.1}",
        poly.len(),
        poly.area(),
        host.viewport.bounds().area()
    );
    for (i, tri) in poly.fan(viewpoint).enumerate().take(8) {
        println!("  fan[{i}]: {:?} {:?}", tri[1], tri[2]);
    }
    if poly.len() > 8 {
        println!("  ... {} more", poly.len() - 8);
    }
}
