// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A grid-layout mock host.
//!
//! Lays the visible text out on a fixed-advance grid, one cell per ASCII
//! character, lines split on `'\n'`. Precise enough to exercise point
//! mapping, range geometry, handle frames, and menu anchoring without a real
//! text stack.

use std::ops::Range;
use std::time::{Duration, Instant};

use kurbo::{Point, Rect, Vec2};

use grapple::{
    EdgeAnchor, HighlightTransition, MenuEntry, RangeGeometry, SelectionAction, SelectionDriver,
    SelectionHost, TextLayout, TextSelection, VisibleText,
};

pub const ADVANCE: f64 = 10.0;
pub const LINE_HEIGHT: f64 = 16.0;

/// The center of the glyph cell at `col`/`row`.
pub fn cell(col: usize, row: usize) -> Point {
    Point::new(
        (col as f64 + 0.5) * ADVANCE,
        (row as f64 + 0.5) * LINE_HEIGHT,
    )
}

#[derive(Debug, PartialEq)]
pub enum HostEvent {
    Active(bool),
    Range(Option<Range<usize>>),
    Highlight {
        rects: usize,
        transition: HighlightTransition,
    },
    MenuPresented {
        anchor: Rect,
        entries: Vec<MenuEntry>,
    },
    MenuDismissed,
    Action(String, SelectionAction),
    Reveal(Rect),
    CancelledAncestors,
}

pub struct GridHost {
    pub visible: VisibleText,
    /// Top-left of the laid-out text, movable to simulate relayout.
    pub origin: Point,
    pub translation_available: bool,
    pub allow_selection: bool,
    pub events: Vec<HostEvent>,
}

impl GridHost {
    pub fn new(text: &str) -> Self {
        Self::with_visible(VisibleText::new(text))
    }

    pub fn with_visible(visible: VisibleText) -> Self {
        Self {
            visible,
            origin: Point::ORIGIN,
            translation_available: false,
            allow_selection: true,
            events: Vec::new(),
        }
    }

    /// Byte ranges of the lines of the visible text.
    fn rows(&self) -> Vec<Range<usize>> {
        let text = self.visible.text();
        let mut rows = Vec::new();
        let mut start = 0;
        for (index, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                rows.push(start..index);
                start = index + 1;
            }
        }
        rows.push(start..text.len());
        rows
    }

    /// Row index and column of a byte offset, preferring the row that
    /// contains the offset over a trailing line boundary.
    fn locate(&self, offset: usize) -> (usize, usize) {
        let rows = self.rows();
        for (index, row) in rows.iter().enumerate() {
            if offset <= row.end {
                let col = offset.saturating_sub(row.start);
                return (index, col);
            }
        }
        let last = rows.len() - 1;
        (last, rows[last].len())
    }
}

impl TextLayout for GridHost {
    fn visible_text(&self) -> &VisibleText {
        &self.visible
    }

    fn offset_at_point(&self, point: Point, nearest: bool) -> Option<usize> {
        let local = point - self.origin.to_vec2();
        let rows = self.rows();
        if nearest {
            let row_count = rows.len() as f64;
            let row = (local.y / LINE_HEIGHT).floor().clamp(0.0, row_count - 1.0) as usize;
            let line = &rows[row];
            let col_count = line.len() as f64;
            let col = (local.x / ADVANCE).round().clamp(0.0, col_count) as usize;
            Some(line.start + col)
        } else {
            if local.x < 0.0 || local.y < 0.0 {
                return None;
            }
            let row = (local.y / LINE_HEIGHT).floor() as usize;
            let line = rows.get(row)?;
            let col = (local.x / ADVANCE).floor() as usize;
            if col >= line.len() {
                return None;
            }
            Some(line.start + col)
        }
    }

    fn range_geometry(&self, range: Range<usize>) -> Option<RangeGeometry> {
        let len = self.visible.text().len();
        let range = range.start.min(len)..range.end.min(len);
        if range.is_empty() {
            return None;
        }
        let mut rects = Vec::new();
        for (index, line) in self.rows().iter().enumerate() {
            let start = range.start.max(line.start);
            let end = range.end.min(line.end);
            if start >= end {
                continue;
            }
            let x0 = self.origin.x + (start - line.start) as f64 * ADVANCE;
            let x1 = self.origin.x + (end - line.start) as f64 * ADVANCE;
            let y0 = self.origin.y + index as f64 * LINE_HEIGHT;
            rects.push(Rect::new(x0, y0, x1, y0 + LINE_HEIGHT));
        }
        if rects.is_empty() {
            return None;
        }
        let edge = |offset: usize| {
            let (row, col) = self.locate(offset);
            EdgeAnchor {
                point: Point::new(
                    self.origin.x + col as f64 * ADVANCE,
                    self.origin.y + row as f64 * LINE_HEIGHT,
                ),
                height: LINE_HEIGHT,
            }
        };
        Some(RangeGeometry {
            rects,
            start: edge(range.start),
            end: edge(range.end),
        })
    }
}

impl SelectionHost for GridHost {
    fn can_begin_selection(&mut self, _point: Point) -> bool {
        self.allow_selection
    }

    fn set_selection_active(&mut self, active: bool) {
        self.events.push(HostEvent::Active(active));
    }

    fn update_range(&mut self, range: Option<Range<usize>>) {
        self.events.push(HostEvent::Range(range));
    }

    fn update_highlight(&mut self, geometry: Option<&RangeGeometry>, transition: HighlightTransition) {
        self.events.push(HostEvent::Highlight {
            rects: geometry.map(|geometry| geometry.rects.len()).unwrap_or(0),
            transition,
        });
    }

    fn present_menu(&mut self, anchor: Rect, entries: &[MenuEntry]) {
        self.events.push(HostEvent::MenuPresented {
            anchor,
            entries: entries.to_vec(),
        });
    }

    fn dismiss_menu(&mut self) {
        self.events.push(HostEvent::MenuDismissed);
    }

    fn perform_action(&mut self, text: &str, action: SelectionAction) {
        self.events.push(HostEvent::Action(text.to_owned(), action));
    }

    fn translation_available(&self) -> bool {
        self.translation_available
    }

    fn reveal_rect(&mut self, rect: Rect) {
        self.events.push(HostEvent::Reveal(rect));
    }

    fn cancel_ancestor_gestures(&mut self) {
        self.events.push(HostEvent::CancelledAncestors);
    }
}

pub struct Env {
    pub host: GridHost,
    pub selection: TextSelection,
}

impl Env {
    pub fn new(text: &str) -> Self {
        Self::with_visible(VisibleText::new(text))
    }

    pub fn with_visible(visible: VisibleText) -> Self {
        Self {
            host: GridHost::with_visible(visible),
            selection: TextSelection::default(),
        }
    }

    pub fn driver(&mut self) -> SelectionDriver<'_, GridHost> {
        self.selection.drive(&mut self.host)
    }

    /// Press and hold at `point` until the long-press arm fires, then lift.
    pub fn long_press(&mut self, point: Point) {
        let down = Instant::now();
        let mut driver = self.driver();
        driver.touch_began(point, down);
        driver.process_time(down + Duration::from_millis(400));
        driver.touch_ended();
    }

    /// A quick down/up at `point`.
    pub fn tap(&mut self, point: Point) {
        let mut driver = self.driver();
        driver.touch_began(point, Instant::now());
        driver.touch_ended();
    }

    /// Touch down at `from`, move to `to`, lift.
    pub fn drag(&mut self, from: Point, to: Point) {
        let mut driver = self.driver();
        driver.touch_began(from, Instant::now());
        driver.touch_moved(to);
        driver.touch_ended();
    }

    /// Drain the recorded host events.
    pub fn take_events(&mut self) -> Vec<HostEvent> {
        std::mem::take(&mut self.host.events)
    }

    /// The grab point the gesture layer would capture for a handle, for
    /// aiming drags in tests.
    pub fn grab_point(&self, handle: grapple::Handle) -> Point {
        self.selection
            .controller()
            .handle_markers()
            .expect("handles visible")
            .grab_point(handle)
    }
}

/// Convenience vector between two points.
pub fn delta(dx: f64, dy: f64) -> Vec2 {
    Vec2::new(dx, dy)
}
