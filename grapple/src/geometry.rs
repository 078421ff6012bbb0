// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// The position and height of one vertical edge of a selected range.
///
/// `point` is the top of the edge in the selection's coordinate space.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EdgeAnchor {
    /// Top of the edge.
    pub point: Point,
    /// Height of the edge.
    pub height: f64,
}

/// The visual geometry of a text range, as produced by the host's text
/// layout for a given range.
///
/// Recomputed whenever the range or the layout changes; never cached across
/// layout changes.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeGeometry {
    /// Rectangles covering the range, one or more per line.
    pub rects: Vec<Rect>,
    /// The edge at the start of the range.
    pub start: EdgeAnchor,
    /// The edge at the end of the range.
    pub end: EdgeAnchor,
}

impl RangeGeometry {
    /// Returns true if the geometry covers no area.
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Returns the union of the covering rectangles.
    pub fn bounding_rect(&self) -> Rect {
        let mut result = Rect::ZERO;
        for rect in &self.rects {
            if result.is_zero_area() {
                result = *rect;
            } else {
                result = result.union(*rect);
            }
        }
        result
    }
}
