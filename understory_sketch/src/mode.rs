// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Editor modes.

/// Interaction mode of the editor.
///
/// Exactly one mode is active at a time. Non-idle modes are entered from
/// [`Mode::Idle`] only; selecting the active mode again, or cancelling, returns
/// to idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// No tool active.
    #[default]
    Idle,
    /// Place new nodes.
    AddNode,
    /// Drag existing nodes.
    MoveNode,
    /// Delete nodes and their attached segments.
    DeleteNode,
    /// Chain segments between new or existing nodes.
    AddSegment,
    /// Drag a segment together with both of its nodes.
    MoveSegment,
    /// Delete single segments.
    DeleteSegment,
    /// Show the region visible from the pointer.
    VisibilityQuery,
}

impl Mode {
    /// All modes, in toolbar order.
    pub const ALL: [Self; 8] = [
        Self::Idle,
        Self::AddNode,
        Self::MoveNode,
        Self::DeleteNode,
        Self::AddSegment,
        Self::MoveSegment,
        Self::DeleteSegment,
        Self::VisibilityQuery,
    ];

    /// Whether this is [`Mode::Idle`].
    #[inline]
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether this mode snaps the pointer to nodes.
    pub const fn snaps_to_nodes(self) -> bool {
        matches!(
            self,
            Self::AddNode | Self::MoveNode | Self::DeleteNode | Self::AddSegment
        )
    }

    /// Whether this mode snaps the pointer to segments.
    pub const fn snaps_to_segments(self) -> bool {
        matches!(self, Self::MoveSegment | Self::DeleteSegment)
    }

    /// Short toolbar label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::AddNode => "node: add",
            Self::MoveNode => "node: move",
            Self::DeleteNode => "node: delete",
            Self::AddSegment => "segment: add",
            Self::MoveSegment => "segment: move",
            Self::DeleteSegment => "segment: delete",
            Self::VisibilityQuery => "visibility",
        }
    }
}

impl core::fmt::Display for Mode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapping_targets_are_disjoint() {
        for mode in Mode::ALL {
            assert!(
                !(mode.snaps_to_nodes() && mode.snaps_to_segments()),
                "{mode} snaps to both"
            );
        }
        assert!(!Mode::Idle.snaps_to_nodes());
        assert!(!Mode::VisibilityQuery.snaps_to_segments());
    }

    #[test]
    fn labels_are_distinct() {
        for (i, a) in Mode::ALL.iter().enumerate() {
            for b in &Mode::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }
}
