// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

use crate::handles::Handle;

/// Defines a range within the visible text.
///
/// The two ends are byte offsets into the visible string. The anchor is the
/// end adjusted by the left handle and the focus is the end adjusted by the
/// right handle; after the handles have been dragged past each other the
/// anchor may lie after the focus. Use [`text_range`](Self::text_range) for
/// the normalized range.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq)]
pub struct Selection {
    anchor: usize,
    focus: usize,
}

impl Selection {
    /// Creates a new selection from the given anchor and focus offsets.
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self { anchor, focus }
    }

    /// Creates a new collapsed selection at the given byte offset.
    pub fn collapsed(index: usize) -> Self {
        Self::new(index, index)
    }

    /// Creates a new forward selection covering `range`.
    pub fn from_range(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }

    /// Returns the anchor of the selection.
    pub fn anchor(&self) -> usize {
        self.anchor
    }

    /// Returns the focus of the selection.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Returns true if the anchor and focus of the selection are the same.
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// Returns the underlying text range of the selection.
    ///
    /// The result is normalized: the order in which the two ends were set
    /// never affects which region the range covers.
    pub fn text_range(&self) -> Range<usize> {
        let start = self.anchor.min(self.focus);
        let end = self.anchor.max(self.focus);
        start..end
    }

    /// Returns a new selection with the end owned by `handle` moved to
    /// `index`.
    #[must_use]
    pub fn with_handle(self, handle: Handle, index: usize) -> Self {
        match handle {
            Handle::Left => Self::new(index, self.focus),
            Handle::Right => Self::new(self.anchor, index),
        }
    }
}

impl From<Range<usize>> for Selection {
    fn from(value: Range<usize>) -> Self {
        Self::from_range(value)
    }
}
