// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edge-triggered button state.
//!
//! Hosts usually poll a raw "is down" level once per frame. The editor needs
//! three distinct signals derived from that level:
//!
//! - [`ButtonState::PRESSED`] fires on the frame the button goes down.
//! - [`ButtonState::HELD`] is set on every frame the button is down, including
//!   the pressed frame.
//! - [`ButtonState::RELEASED`] fires on the frame the button goes up.
//!
//! [`ButtonTracker`] turns the polled level into these flags:
//!
//! ```
//! use understory_sketch::{ButtonState, ButtonTracker};
//!
//! let mut primary = ButtonTracker::new();
//! assert_eq!(primary.update(true), ButtonState::PRESSED | ButtonState::HELD);
//! assert_eq!(primary.update(true), ButtonState::HELD);
//! assert_eq!(primary.update(false), ButtonState::RELEASED);
//! assert_eq!(primary.update(false), ButtonState::empty());
//! ```

bitflags::bitflags! {
    /// Per-frame state of a button.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ButtonState: u8 {
        /// The button went down this frame.
        const PRESSED  = 0b0000_0001;
        /// The button is down this frame.
        const HELD     = 0b0000_0010;
        /// The button went up this frame.
        const RELEASED = 0b0000_0100;
    }
}

impl ButtonState {
    /// State of a button that has just gone down.
    pub const DOWN: Self = Self::PRESSED.union(Self::HELD);

    /// Whether the button went down this frame.
    #[inline]
    pub fn pressed(self) -> bool {
        self.contains(Self::PRESSED)
    }

    /// Whether the button is down this frame.
    #[inline]
    pub fn held(self) -> bool {
        self.contains(Self::HELD)
    }

    /// Whether the button went up this frame.
    #[inline]
    pub fn released(self) -> bool {
        self.contains(Self::RELEASED)
    }
}

/// Derives [`ButtonState`] from a polled level.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonTracker {
    down: bool,
}

impl ButtonTracker {
    /// A tracker for a button that starts up.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed this frame's level and get this frame's state.
    pub fn update(&mut self, down: bool) -> ButtonState {
        let state = match (self.down, down) {
            (false, true) => ButtonState::DOWN,
            (true, true) => ButtonState::HELD,
            (true, false) => ButtonState::RELEASED,
            (false, false) => ButtonState::empty(),
        };
        self.down = down;
        state
    }
}
