// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch-stream classification for text selection.
//!
//! [`SelectionGesture`] turns raw touch events into semantic callbacks on a
//! [`GestureHost`]: begin a selection at a point, drag an existing handle,
//! finish a drag, or clear the selection. It owns no text knowledge; handle
//! hit-testing and the active-selection flag are queried from the host.

use std::time::{Duration, Instant};

use kurbo::Point;
use tracing::trace;

use crate::handles::Handle;

/// Receiver for the semantic callbacks of a [`SelectionGesture`].
///
/// Queries never extend the gesture's lifetime; the host is borrowed per
/// event delivery.
pub trait GestureHost {
    /// Hit-tests the selection handles, returning the hit handle and its
    /// grab point.
    fn handle_at_point(&mut self, point: Point) -> Option<(Handle, Point)>;

    /// Whether a selection is currently active.
    fn selection_is_active(&self) -> bool;

    /// Whether a long press at `point` may begin a selection.
    fn can_begin_selection(&mut self, point: Point) -> bool {
        let _ = point;
        true
    }

    /// A long press settled at `point`.
    fn begin_selection(&mut self, point: Point);

    /// A drag moved `handle` to `point`.
    fn move_handle(&mut self, handle: Handle, point: Point);

    /// The active handle drag lifted.
    fn finished_moving_handle(&mut self);

    /// A tap asked for the selection to be cleared.
    fn clear_selection(&mut self);

    /// A handle drag began; ancestor scroll gestures must not steal it.
    fn cancel_ancestor_gestures(&mut self) {}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum State {
    Idle,
    /// Touch down away from the handles, long-press timer armed.
    Pending,
    /// Touch down on a handle, dragging it.
    Dragging,
    Ended,
    Failed,
    Cancelled,
}

/// Classifies a raw touch stream into selection gestures.
///
/// Single-threaded and runloop-agnostic: the caller supplies the time of
/// each event and polls [`process_time`](Self::process_time) for the
/// one-shot long-press arm, scheduling its wakeup from
/// [`long_press_deadline`](Self::long_press_deadline).
#[derive(Debug)]
pub struct SelectionGesture {
    long_press: Duration,
    state: State,
    long_press_deadline: Option<Instant>,
    /// Handle being dragged, its grab point, and the initial touch point.
    moving_handle: Option<(Handle, Point, Point)>,
    current_location: Option<Point>,
    did_recognize_tap: bool,
}

impl SelectionGesture {
    /// Creates a recognizer with the given long-press hold duration.
    pub fn new(long_press: Duration) -> Self {
        Self {
            long_press,
            state: State::Idle,
            long_press_deadline: None,
            moving_handle: None,
            current_location: None,
            did_recognize_tap: false,
        }
    }

    /// Returns the recognizer to its idle state, discarding any armed timer
    /// and drag capture.
    pub fn reset(&mut self) {
        self.state = State::Idle;
        self.long_press_deadline = None;
        self.moving_handle = None;
        self.current_location = None;
    }

    /// The deadline of the armed long-press timer, if any.
    ///
    /// Hosts integrate with their runloop by scheduling a wakeup for this
    /// instant and calling [`process_time`](Self::process_time).
    pub fn long_press_deadline(&self) -> Option<Instant> {
        self.long_press_deadline
    }

    /// Whether the last touch sequence recognized a tap on an active
    /// selection.
    ///
    /// One-shot: hosts read this while handling the same event turn and
    /// clear it with [`end_turn`](Self::end_turn) on the next turn of their
    /// runloop.
    pub fn did_recognize_tap(&self) -> bool {
        self.did_recognize_tap
    }

    /// Clears the one-shot tap flag.
    pub fn end_turn(&mut self) {
        self.did_recognize_tap = false;
    }

    /// A touch landed at `point`.
    pub fn touch_began<H: GestureHost>(&mut self, host: &mut H, point: Point, now: Instant) {
        if self.state != State::Idle {
            self.reset();
        }
        self.current_location = Some(point);
        if let Some((handle, grab_point)) = host.handle_at_point(point) {
            trace!(?handle, "touch captured a selection handle");
            self.moving_handle = Some((handle, grab_point, point));
            host.cancel_ancestor_gestures();
            self.state = State::Dragging;
        } else if host.can_begin_selection(point) {
            if self.long_press_deadline.is_none() {
                self.long_press_deadline = Some(now + self.long_press);
            }
            self.state = State::Pending;
        } else {
            self.state = State::Failed;
        }
    }

    /// The touch moved to `point`.
    ///
    /// Movement does not disarm the long-press timer; a press that wanders
    /// still begins a selection at its latest location.
    pub fn touch_moved<H: GestureHost>(&mut self, host: &mut H, point: Point) {
        self.current_location = Some(point);
        if let Some((handle, grab_point, initial)) = self.moving_handle {
            // Pure translation from the captured grab point, not an absolute
            // mapping of the touch location.
            host.move_handle(handle, grab_point + (point - initial));
        }
    }

    /// The touch lifted.
    pub fn touch_ended<H: GestureHost>(&mut self, host: &mut H) {
        if self.long_press_deadline.take().is_some() {
            // The long press never fired: this was a tap.
            if host.selection_is_active() {
                self.did_recognize_tap = true;
            }
            host.clear_selection();
        } else if self.current_location.is_some() && self.moving_handle.is_some() {
            host.finished_moving_handle();
        }
        self.state = State::Ended;
    }

    /// The touch was cancelled by the host.
    pub fn touch_cancelled(&mut self) {
        self.long_press_deadline = None;
        self.moving_handle = None;
        self.state = State::Cancelled;
    }

    /// Fires the long-press arm when its deadline has passed.
    pub fn process_time<H: GestureHost>(&mut self, host: &mut H, now: Instant) {
        let Some(deadline) = self.long_press_deadline else {
            return;
        };
        if now < deadline {
            return;
        }
        self.long_press_deadline = None;
        if let Some(point) = self.current_location {
            trace!("long press settled, beginning selection");
            host.begin_selection(point);
            self.state = State::Ended;
        }
    }
}
