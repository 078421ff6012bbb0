// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-driven text selection over a host-provided text layout.
//!
//! Grapple implements the selection interaction of a custom text renderer:
//! long-press to select a word, drag either handle to adjust the range, tap
//! to clear, and a context menu offering copy/quote/lookup/translate/share
//! actions on the selected substring.
//!
//! The crate owns no rendering, layout, or menu chrome. Two host-facing
//! traits supply those collaborators:
//!
//! - [`TextLayout`] maps points to text offsets and ranges to covering
//!   rectangles with edge anchors.
//! - [`SelectionHost`] receives highlight, handle, menu, and action
//!   callbacks, and answers host predicates such as whether a selection may
//!   begin at a point.
//!
//! [`TextSelection`] bundles the two moving parts — the
//! [`SelectionGesture`] touch classifier and the [`SelectionController`]
//! that owns the range — and hands out a transient [`SelectionDriver`] for
//! delivering events:
//!
//! ```
//! # use grapple::*;
//! # use kurbo::Point;
//! # use std::time::{Duration, Instant};
//! # struct Host(VisibleText);
//! # impl TextLayout for Host {
//! #     fn visible_text(&self) -> &VisibleText { &self.0 }
//! #     fn offset_at_point(&self, _: Point, _: bool) -> Option<usize> { Some(0) }
//! #     fn range_geometry(&self, _: core::ops::Range<usize>) -> Option<RangeGeometry> { None }
//! # }
//! # impl SelectionHost for Host {
//! #     fn present_menu(&mut self, _: kurbo::Rect, _: &[MenuEntry]) {}
//! #     fn perform_action(&mut self, _: &str, _: SelectionAction) {}
//! # }
//! let mut host = Host(VisibleText::new("hello world"));
//! let mut selection = TextSelection::default();
//! let mut driver = selection.drive(&mut host);
//! let down = Instant::now();
//! driver.touch_began(Point::new(10.0, 8.0), down);
//! driver.process_time(down + Duration::from_millis(300));
//! driver.touch_ended();
//! ```
//!
//! The visible text may be a substituted view of an underlying original
//! string; [`VisibleText`] carries the substitution spans and selections are
//! reported in original-text coordinates.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET

pub use kurbo;

mod controller;
mod driver;
mod geometry;
mod gesture;
mod handles;
mod menu;
mod segment;
mod selection;
mod visible_text;

#[cfg(test)]
mod tests;

pub use controller::{
    HighlightTransition, SelectionConfig, SelectionController, SelectionHost, TextLayout,
};
pub use driver::{HandleSweep, SelectionDriver, TextSelection};
pub use geometry::{EdgeAnchor, RangeGeometry};
pub use gesture::{GestureHost, SelectionGesture};
pub use handles::{Handle, HandleMarkers};
pub use menu::{ActionToggles, MenuEntry, SelectionAction};
pub use segment::{IcuWordBreaker, WordBreaker};
pub use selection::Selection;
pub use visible_text::{Substitution, VisibleText};
