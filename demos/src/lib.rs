// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Understory visibility and sketch crates.
//!
//! See the `examples/` directory of this package.
