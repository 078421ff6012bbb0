// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Locale-aware word segmentation.

use core::ops::Range;

use icu_locale_core::LanguageIdentifier;
use icu_segmenter::WordSegmenter;
use icu_segmenter::options::WordBreakOptions;

/// Word-boundary segmentation over a full string.
///
/// Exact boundary rules are locale and algorithm defined; implementations
/// only need to return the ordered spans of word-like tokens.
pub trait WordBreaker {
    /// Returns the ordered byte spans of word-like tokens in `text`.
    ///
    /// Spans are non-overlapping and strictly increasing; whitespace and
    /// punctuation fall between spans.
    fn word_spans(&self, text: &str) -> Vec<Range<usize>>;

    /// Returns the token containing the byte offset, or a single-character
    /// range at the offset when no token contains it.
    ///
    /// Returns `None` when `offset` is past the end of `text` or not on a
    /// character boundary.
    fn word_at(&self, text: &str, offset: usize) -> Option<Range<usize>> {
        let tail = text.get(offset..)?;
        for span in self.word_spans(text) {
            if span.start > offset {
                break;
            }
            if offset < span.end {
                return Some(span);
            }
        }
        let ch = tail.chars().next()?;
        Some(offset..offset + ch.len_utf8())
    }
}

/// Word segmentation backed by ICU4X.
///
/// Uses the automatic segmentation model, which selects between rule-based
/// and dictionary/LSTM segmentation per script. An optional content locale
/// refines locale-sensitive boundaries.
#[derive(Clone, Debug, Default)]
pub struct IcuWordBreaker {
    locale: Option<LanguageIdentifier>,
}

impl IcuWordBreaker {
    /// Creates a segmenter with no content locale.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a segmenter tailored to the given content locale.
    pub fn with_locale(locale: LanguageIdentifier) -> Self {
        Self {
            locale: Some(locale),
        }
    }
}

impl WordBreaker for IcuWordBreaker {
    fn word_spans(&self, text: &str) -> Vec<Range<usize>> {
        let mut options = WordBreakOptions::default();
        options.content_locale = self.locale.as_ref();
        let segmenter = WordSegmenter::try_new_auto(options).unwrap();
        let mut iter = segmenter.as_borrowed().segment_str(text);
        let mut spans = Vec::new();
        // The first boundary reported by ICU4X is the leading one at 0.
        let mut prev = iter.next().unwrap_or_default();
        // Not a for loop: word_type is read from the iterator between steps.
        while let Some(boundary) = iter.next() {
            if iter.word_type().is_word_like() {
                spans.push(prev..boundary);
            }
            prev = boundary;
        }
        spans
    }
}
