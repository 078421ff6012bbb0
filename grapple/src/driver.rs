// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wiring between the gesture recognizer and the selection controller.

use core::ops::Range;
use std::time::Instant;

use kurbo::Point;

use crate::controller::{SelectionConfig, SelectionController, SelectionHost};
use crate::gesture::{GestureHost, SelectionGesture};
use crate::handles::Handle;
use crate::menu::MenuEntry;

/// A complete text-selection interaction: gesture recognizer plus selection
/// controller.
///
/// The host delivers touch events and programmatic operations through a
/// transient [`SelectionDriver`] obtained from [`drive`](Self::drive).
#[derive(Debug)]
pub struct TextSelection {
    gesture: SelectionGesture,
    controller: SelectionController,
}

impl Default for TextSelection {
    fn default() -> Self {
        Self::new(SelectionConfig::default())
    }
}

impl TextSelection {
    /// Creates an interaction with the given configuration.
    pub fn new(config: SelectionConfig) -> Self {
        Self {
            gesture: SelectionGesture::new(config.long_press),
            controller: SelectionController::with_config(config),
        }
    }

    /// The gesture recognizer.
    pub fn gesture(&self) -> &SelectionGesture {
        &self.gesture
    }

    /// The selection controller.
    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    /// Mutable access to the selection controller.
    pub fn controller_mut(&mut self) -> &mut SelectionController {
        &mut self.controller
    }

    /// Whether the last touch sequence recognized a tap on an active
    /// selection. See [`SelectionGesture::did_recognize_tap`].
    pub fn did_recognize_tap(&self) -> bool {
        self.gesture.did_recognize_tap()
    }

    /// Clears the one-shot tap flag; call on the next runloop turn after
    /// event delivery.
    pub fn end_turn(&mut self) {
        self.gesture.end_turn();
    }

    /// Run a series of [`SelectionDriver`] methods against a host.
    pub fn drive<'drv, H: SelectionHost>(&'drv mut self, host: &'drv mut H) -> SelectionDriver<'drv, H> {
        SelectionDriver {
            gesture: &mut self.gesture,
            controller: &mut self.controller,
            host,
        }
    }
}

/// Routes gesture callbacks into the controller and the host.
struct GestureWiring<'a, H: SelectionHost> {
    controller: &'a mut SelectionController,
    host: &'a mut H,
}

impl<H: SelectionHost> GestureHost for GestureWiring<'_, H> {
    fn handle_at_point(&mut self, point: Point) -> Option<(Handle, Point)> {
        self.controller.handle_at_point(point)
    }

    fn selection_is_active(&self) -> bool {
        self.controller.is_active()
    }

    fn can_begin_selection(&mut self, point: Point) -> bool {
        self.host.can_begin_selection(point)
    }

    fn begin_selection(&mut self, point: Point) {
        self.controller.begin_selection(&mut *self.host, point);
    }

    fn move_handle(&mut self, handle: Handle, point: Point) {
        self.controller.move_handle(&mut *self.host, handle, point);
    }

    fn finished_moving_handle(&mut self) {
        self.controller.finished_moving_handle(&mut *self.host);
    }

    fn clear_selection(&mut self) {
        self.controller.cancel_selection(&mut *self.host);
    }

    fn cancel_ancestor_gestures(&mut self) {
        self.host.cancel_ancestor_gestures();
    }
}

/// Host-driven interpolation of the right handle toward a target offset.
///
/// Produced by [`SelectionDriver::handle_sweep`]; the host samples positions
/// over its own frame clock and feeds them through
/// [`SelectionDriver::move_handle`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandleSweep {
    /// The handle being swept.
    pub handle: Handle,
    /// The sweep's starting point.
    pub from: Point,
    /// The sweep's end point.
    pub to: Point,
}

impl HandleSweep {
    /// The swept position at `progress` in `0.0..=1.0`.
    pub fn position_at(&self, progress: f64) -> Point {
        self.from.lerp(self.to, progress)
    }
}

/// Transient bundle borrowing a [`TextSelection`] and its host for a series
/// of operations.
#[derive(Debug)]
pub struct SelectionDriver<'a, H: SelectionHost> {
    /// The gesture recognizer.
    pub gesture: &'a mut SelectionGesture,
    /// The selection controller.
    pub controller: &'a mut SelectionController,
    /// The host collaborator.
    pub host: &'a mut H,
}

impl<H: SelectionHost> SelectionDriver<'_, H> {
    // --- MARK: Touch delivery ---

    /// A touch landed at `point`.
    pub fn touch_began(&mut self, point: Point, now: Instant) {
        let mut wiring = GestureWiring {
            controller: &mut *self.controller,
            host: &mut *self.host,
        };
        self.gesture.touch_began(&mut wiring, point, now);
    }

    /// The touch moved to `point`.
    pub fn touch_moved(&mut self, point: Point) {
        let mut wiring = GestureWiring {
            controller: &mut *self.controller,
            host: &mut *self.host,
        };
        self.gesture.touch_moved(&mut wiring, point);
    }

    /// The touch lifted.
    pub fn touch_ended(&mut self) {
        let mut wiring = GestureWiring {
            controller: &mut *self.controller,
            host: &mut *self.host,
        };
        self.gesture.touch_ended(&mut wiring);
    }

    /// The touch was cancelled by the host.
    pub fn touch_cancelled(&mut self) {
        self.gesture.touch_cancelled();
    }

    /// Fires the long-press arm when its deadline has passed. Schedule the
    /// wakeup from [`SelectionGesture::long_press_deadline`].
    pub fn process_time(&mut self, now: Instant) {
        let mut wiring = GestureWiring {
            controller: &mut *self.controller,
            host: &mut *self.host,
        };
        self.gesture.process_time(&mut wiring, now);
    }

    // --- MARK: Programmatic operations ---

    /// Moves one end of the selection to the offset nearest `point`.
    pub fn move_handle(&mut self, handle: Handle, point: Point) {
        self.controller.move_handle(&mut *self.host, handle, point);
    }

    /// Reopens the menu for the now-settled range after a handle drag.
    pub fn finished_moving_handle(&mut self) {
        self.controller.finished_moving_handle(&mut *self.host);
    }

    /// Sets the selection to a range in original-text coordinates.
    pub fn set_selection(&mut self, range: Range<usize>, display_menu: bool) {
        self.controller.set_selection(&mut *self.host, range, display_menu);
    }

    /// The current normalized range in original-text coordinates.
    pub fn get_selection(&self) -> Option<Range<usize>> {
        self.controller.get_selection(&*self.host)
    }

    /// Selects the entire visible text.
    pub fn select_all(&mut self, display_menu: bool) {
        self.controller.select_all(&mut *self.host, display_menu);
    }

    /// Clears the selection and notifies the host.
    pub fn cancel_selection(&mut self) {
        self.controller.cancel_selection(&mut *self.host);
        self.gesture.reset();
    }

    /// Re-derives geometry from the stored range after an external relayout.
    pub fn update_layout(&mut self) {
        self.controller.update_layout(&mut *self.host);
    }

    /// Executes a chosen menu entry.
    pub fn activate_menu_entry(&mut self, entry: MenuEntry) {
        self.controller.activate_menu_entry(&mut *self.host, entry);
    }

    /// Selects the first word of the text without presenting the menu.
    pub fn select_word_at_start(&mut self) {
        self.controller.select_word_at_start(&mut *self.host);
    }

    /// Builds a sweep of the right handle from its current grab point to the
    /// start of the character at `index` in the visible text.
    ///
    /// Requires visible handles and resolvable target geometry.
    pub fn handle_sweep(&self, index: usize) -> Option<HandleSweep> {
        let markers = self.controller.handle_markers()?;
        let text = self.host.visible_text().text();
        let ch = text.get(index..)?.chars().next()?;
        let target = self.host.range_geometry(index..index + ch.len_utf8())?;
        let to = target.rects.first()?.center();
        Some(HandleSweep {
            handle: Handle::Right,
            from: markers.frame(Handle::Right).center(),
            to,
        })
    }
}
