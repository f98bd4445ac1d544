// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for scene mutations.

use thiserror::Error;

/// Reasons a [`Scene`](crate::Scene) mutation was refused.
///
/// The store is left unchanged whenever one of these is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SceneError {
    /// A node index does not refer to an existing node.
    #[error("node index {index} out of range (scene has {len} nodes)")]
    NodeOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of nodes at the time of the call.
        len: usize,
    },

    /// A segment index does not refer to an existing segment.
    #[error("segment index {index} out of range (scene has {len} segments)")]
    SegmentOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of segments at the time of the call.
        len: usize,
    },

    /// Both ends of the proposed segment are the same node.
    #[error("segment would connect node {node} to itself")]
    SelfLoop {
        /// The node used for both ends.
        node: usize,
    },

    /// An equal segment already exists, in either direction.
    #[error("segment between nodes {start} and {end} already exists")]
    DuplicateSegment {
        /// Proposed start node.
        start: usize,
        /// Proposed end node.
        end: usize,
    },
}
