// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate contains the integration test suite for `grapple`.
//!
//! - The `util` module contains the shared grid-layout mock host that the
//!   scenario tests drive the selection against.
//! - We do not use the default Rust test harness, but instead use this
//!   `mod.rs` file as the entry point to run all other tests, which makes it
//!   easier to share utilities between tests.
//! - For test naming, try to put the "topic" of the test at the start of the
//!   name instead of the end, e.g. `menu_select_all_strict_subset` rather
//!   than `select_all_strict_subset_menu`.

#![allow(missing_docs, reason = "we don't need docs for testing")]
#![allow(clippy::cast_possible_truncation, reason = "not critical for testing")]

mod util;
