// Copyright 2026 the Treeline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Runnable demos for the Treeline crates; see the `examples/` directory.
