// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible/original text and the offset translation between them.
//!
//! The rendered string may be a transformed view of an underlying original
//! string: entity-driven replacements substitute ranges of the original with
//! different-length visible content. Selections are stored in visible
//! coordinates but reported in original coordinates, so both translation
//! directions live here.

use core::ops::Range;

/// A span of the visible text that replaced different original content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    /// Byte range in the visible text.
    pub range: Range<usize>,
    /// The original content the range replaced.
    pub original: String,
}

impl Substitution {
    /// Creates a substitution of `range` in the visible text for `original`.
    pub fn new(range: Range<usize>, original: impl Into<String>) -> Self {
        Self {
            range,
            original: original.into(),
        }
    }
}

/// The rendered text together with its substitution spans.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct VisibleText {
    text: String,
    substitutions: Vec<Substitution>,
}

impl VisibleText {
    /// Creates a visible text identical to its original.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            substitutions: Vec::new(),
        }
    }

    /// Creates a visible text with substitution spans.
    ///
    /// Spans must not overlap; they are kept sorted by start offset.
    pub fn with_substitutions(
        text: impl Into<String>,
        mut substitutions: Vec<Substitution>,
    ) -> Self {
        substitutions.sort_by_key(|sub| sub.range.start);
        debug_assert!(
            substitutions
                .windows(2)
                .all(|pair| pair[0].range.end <= pair[1].range.start),
            "substitution spans must not overlap"
        );
        Self {
            text: text.into(),
            substitutions,
        }
    }

    /// The visible string.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The substitution spans, ordered by start offset.
    pub fn substitutions(&self) -> &[Substitution] {
        &self.substitutions
    }

    /// Returns true if the visible string is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The range covering the entire visible string.
    pub fn full_range(&self) -> Range<usize> {
        0..self.text.len()
    }

    /// Translates a visible-text range into original-text coordinates.
    ///
    /// Walks the substitution spans in a single left-to-right scan,
    /// accumulating the length difference of every span before the range
    /// start into the start and of every span inside the range into the
    /// length. A span straddling a range boundary counts its full original
    /// length against the clipped visible run on both sides of the boundary,
    /// so exact round trips need range endpoints outside substitution spans.
    pub fn to_original(&self, range: Range<usize>) -> Range<usize> {
        let mut start = range.start as isize;
        let mut len = range.len() as isize;
        for sub in &self.substitutions {
            let before = clip(&sub.range, &(0..range.start));
            if !before.is_empty() {
                start += sub.original.len() as isize - before.len() as isize;
            }
            let within = clip(&sub.range, &range);
            if !within.is_empty() {
                len += sub.original.len() as isize - within.len() as isize;
            }
        }
        let start = start.max(0) as usize;
        let len = len.max(0) as usize;
        start..start + len
    }

    /// Translates an original-text range into visible-text coordinates.
    ///
    /// Folds the substitutions back into a working view of the string one at
    /// a time, restarting the scan after each fold-in, then applies the
    /// accumulated length differences the same way as [`to_original`]
    /// (mirrored). The restart preserves left-to-right fold ordering and is
    /// worst-case quadratic in span count.
    ///
    /// [`to_original`]: Self::to_original
    pub fn from_original(&self, range: Range<usize>) -> Range<usize> {
        // Each folded entry is the span's range in original coordinates plus
        // the length of the visible content it had replaced.
        let mut pending = self.substitutions.clone();
        let mut folded: Vec<(Range<usize>, usize)> = Vec::new();
        let mut scan_from = 0;
        loop {
            let Some(position) = pending
                .iter()
                .position(|sub| sub.range.start >= scan_from)
            else {
                break;
            };
            let sub = pending.remove(position);
            let visible_len = sub.range.len();
            let delta = sub.original.len() as isize - visible_len as isize;
            let replaced = sub.range.start..sub.range.start + sub.original.len();
            for later in &mut pending {
                if later.range.start >= sub.range.end {
                    later.range.start = later.range.start.saturating_add_signed(delta);
                    later.range.end = later.range.end.saturating_add_signed(delta);
                }
            }
            scan_from = replaced.end;
            folded.push((replaced, visible_len));
        }

        let mut start = range.start as isize;
        let mut len = range.len() as isize;
        for (replaced, visible_len) in &folded {
            let before = clip(replaced, &(0..range.start));
            if !before.is_empty() {
                start += *visible_len as isize - before.len() as isize;
            }
            let within = clip(replaced, &range);
            if !within.is_empty() {
                len += *visible_len as isize - within.len() as isize;
            }
        }
        let start = start.max(0) as usize;
        let len = len.max(0) as usize;
        start..start + len
    }

    /// Extracts the substring for a visible-text range with original content
    /// folded back in.
    ///
    /// Every substitution span overlapping the range contributes its full
    /// original string in place of the overlapped visible run.
    pub fn resolve(&self, range: Range<usize>) -> String {
        let range = clip(&range, &self.full_range());
        let mut out = String::new();
        let mut cursor = range.start;
        for sub in &self.substitutions {
            let within = clip(&sub.range, &range);
            if within.is_empty() {
                continue;
            }
            if within.start > cursor {
                out.push_str(self.text.get(cursor..within.start).unwrap_or(""));
            }
            out.push_str(&sub.original);
            cursor = within.end;
        }
        if cursor < range.end {
            out.push_str(self.text.get(cursor..range.end).unwrap_or(""));
        }
        out
    }
}

/// Intersection of two ranges, empty (and anchored at the overlap start)
/// when they are disjoint.
fn clip(a: &Range<usize>, b: &Range<usize>) -> Range<usize> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    start..end.max(start)
}
