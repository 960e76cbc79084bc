// Copyright 2026 the Lazy Font Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `lazy_font`.
//!
//! - The `util` module holds the mock rasterizer and recording texture
//!   shared by the other test modules.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes it
//!   easy to share the mock types across modules.
//! - For test naming, put the topic of the test at the start of the name:
//!   `metrics_flip_negates...` rather than `flip_negates_metrics...`.

#![allow(missing_docs, reason = "we don't need docs for testing")]

mod atlas;
mod util;
