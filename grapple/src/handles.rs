// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::controller::SelectionConfig;
use crate::geometry::RangeGeometry;

/// Identifies which end of an active selection a drag gesture is adjusting.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Handle {
    /// The handle at the start edge of the normalized range.
    Left,
    /// The handle at the end edge of the normalized range.
    Right,
}

/// Screen frames of the two selection handles.
///
/// Present only while a non-empty range with non-degenerate geometry exists;
/// the frames double as the hit regions for handle drags.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandleMarkers {
    /// Frame of the left handle, knob above the start edge.
    pub left: Rect,
    /// Frame of the right handle, knob below the end edge.
    pub right: Rect,
}

impl HandleMarkers {
    /// Derives handle frames from range geometry and the configured knob
    /// metrics.
    pub(crate) fn from_geometry(geometry: &RangeGeometry, config: &SelectionConfig) -> Self {
        let width = config.knob_width;
        let diameter = config.knob_diameter;
        let start = geometry.start;
        let end = geometry.end;
        let left = Rect::from_origin_size(
            Point::new((start.point.x - width / 2.0).floor(), start.point.y - diameter),
            Size::new(width, diameter + start.height),
        );
        let right = Rect::from_origin_size(
            Point::new((end.point.x - width / 2.0).floor(), end.point.y),
            Size::new(width, diameter + end.height),
        );
        Self { left, right }
    }

    /// Returns the frame of the given handle.
    pub fn frame(&self, handle: Handle) -> Rect {
        match handle {
            Handle::Left => self.left,
            Handle::Right => self.right,
        }
    }

    /// Returns the point a drag of the given handle is anchored to.
    ///
    /// Offset vertically by half the knob width toward the text so that the
    /// drag translation tracks the edge rather than the knob circle.
    pub fn grab_point(&self, handle: Handle) -> Point {
        match handle {
            Handle::Left => (self.left + Vec2::new(0.0, self.left.width() / 2.0)).center(),
            Handle::Right => (self.right + Vec2::new(0.0, -self.right.width() / 2.0)).center(),
        }
    }

    /// Hit-tests the handles at `point`.
    ///
    /// The primary hit regions are tried first, then the larger fallback
    /// regions, left handle before right in each tier. Returns the hit
    /// handle together with its grab point.
    pub(crate) fn handle_at_point(
        &self,
        point: Point,
        config: &SelectionConfig,
    ) -> Option<(Handle, Point)> {
        let primary = config.primary_hit_outset;
        for handle in [Handle::Left, Handle::Right] {
            if self.frame(handle).inflate(primary.x, primary.y).contains(point) {
                return Some((handle, self.grab_point(handle)));
            }
        }
        let fallback = config.fallback_hit_outset;
        for handle in [Handle::Left, Handle::Right] {
            if self.frame(handle).inflate(fallback, fallback).contains(point) {
                return Some((handle, self.grab_point(handle)));
            }
        }
        None
    }
}
