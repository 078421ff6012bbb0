// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection controller and its host-facing traits.

use core::fmt::Debug;
use core::ops::Range;
use std::time::Duration;

use kurbo::{Point, Rect, Vec2};
use tracing::{debug, trace};

use crate::geometry::RangeGeometry;
use crate::handles::{Handle, HandleMarkers};
use crate::menu::{ActionToggles, MenuEntry, SelectionAction, menu_entries};
use crate::segment::{IcuWordBreaker, WordBreaker};
use crate::selection::Selection;
use crate::visible_text::VisibleText;

/// The host's text-layout service.
///
/// Point-to-offset mapping and range geometry are resolved here; the
/// controller never performs layout itself.
pub trait TextLayout {
    /// The visible text backing the layout.
    fn visible_text(&self) -> &VisibleText;

    /// Maps a point to a byte offset in the visible text.
    ///
    /// With `nearest` false the point must hit an actual glyph; with
    /// `nearest` true the closest offset is returned, since drags may land
    /// between glyphs.
    fn offset_at_point(&self, point: Point, nearest: bool) -> Option<usize>;

    /// The covering rectangles and edge anchors for a visible-text range.
    fn range_geometry(&self, range: Range<usize>) -> Option<RangeGeometry>;
}

/// How the highlight visuals change on a selection update.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HighlightTransition {
    /// The highlight became visible and should animate in.
    ///
    /// `emphasized` asks for the zooming entry used when a fresh selection
    /// begins, as opposed to the plain fade of a programmatic update.
    Appear {
        /// Use the zooming entry animation.
        emphasized: bool,
    },
    /// An already-visible highlight moved; no entry animation.
    Update,
    /// The highlight should animate out and disappear.
    Dismiss,
}

/// Host services and notifications around the [`SelectionController`].
///
/// Supplied per call as a borrowed collaborator; the controller stores no
/// callbacks and never extends the host's lifetime.
pub trait SelectionHost: TextLayout {
    /// Whether a long press at `point` may begin a selection.
    fn can_begin_selection(&mut self, point: Point) -> bool {
        let _ = point;
        true
    }

    /// The selection became active or inactive.
    fn set_selection_active(&mut self, active: bool) {
        let _ = active;
    }

    /// The normalized visible range changed; `None` when cleared.
    fn update_range(&mut self, range: Option<Range<usize>>) {
        let _ = range;
    }

    /// The highlight visuals for the current geometry changed.
    fn update_highlight(&mut self, geometry: Option<&RangeGeometry>, transition: HighlightTransition) {
        let _ = (geometry, transition);
    }

    /// Present the context menu anchored to `anchor`, entries in order.
    ///
    /// The host owns labels, localization, and its own dismiss token; a
    /// chosen entry is reported back through
    /// [`SelectionController::activate_menu_entry`].
    fn present_menu(&mut self, anchor: Rect, entries: &[MenuEntry]);

    /// Dismiss the presented menu, if any.
    fn dismiss_menu(&mut self) {}

    /// Perform `action` on the resolved substring.
    fn perform_action(&mut self, text: &str, action: SelectionAction);

    /// Whether the host's text-intelligence translation feature is
    /// available.
    fn translation_available(&self) -> bool {
        false
    }

    /// Scroll the nearest scrollable ancestor to reveal `rect`.
    fn reveal_rect(&mut self, rect: Rect) {
        let _ = rect;
    }

    /// A handle drag began; ancestor scroll gestures must not steal it.
    fn cancel_ancestor_gestures(&mut self) {}
}

/// Tunable metrics of the selection interaction.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionConfig {
    /// Hold duration before a touch begins a selection.
    pub long_press: Duration,
    /// Width of a handle knob frame.
    pub knob_width: f64,
    /// Diameter of the knob circle capping a handle.
    pub knob_diameter: f64,
    /// Outset of the primary handle hit regions, per axis.
    pub primary_hit_outset: Vec2,
    /// Outset of the fallback handle hit regions, both axes.
    pub fallback_hit_outset: f64,
    /// Upward offset of the reveal rect while dragging a handle.
    pub reveal_offset: f64,
    /// Height of the reveal rect while dragging a handle.
    pub reveal_height: f64,
    /// Vertical outset applied to the menu anchor rect.
    pub menu_anchor_outset: f64,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            long_press: Duration::from_millis(300),
            knob_width: 12.0,
            knob_diameter: 12.0,
            primary_hit_outset: Vec2::new(4.0, 8.0),
            fallback_hit_outset: 14.0,
            reveal_offset: 50.0,
            reveal_height: 100.0,
            menu_anchor_outset: 12.0,
        }
    }
}

/// Owns the current selection range and drives highlight, handles, and menu
/// through a [`SelectionHost`].
///
/// All operations are silent no-ops when their mapping fails: a point that
/// hits no text begins no selection, and a drag without a prior selection
/// has no effect. The absence of a selection is the only observable failure
/// signal.
pub struct SelectionController {
    config: SelectionConfig,
    toggles: ActionToggles,
    words: Box<dyn WordBreaker>,
    selection: Option<Selection>,
    geometry: Option<RangeGeometry>,
    handles: Option<HandleMarkers>,
    menu_shown: bool,
    active: bool,
}

impl Debug for SelectionController {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SelectionController")
            .field("config", &self.config)
            .field("toggles", &self.toggles)
            .field("words", &"dyn WordBreaker")
            .field("selection", &self.selection)
            .field("geometry", &self.geometry)
            .field("handles", &self.handles)
            .field("menu_shown", &self.menu_shown)
            .field("active", &self.active)
            .finish()
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionController {
    /// Creates a controller with default configuration and ICU word
    /// segmentation.
    pub fn new() -> Self {
        Self::with_config(SelectionConfig::default())
    }

    /// Creates a controller with the given configuration.
    pub fn with_config(config: SelectionConfig) -> Self {
        Self {
            config,
            toggles: ActionToggles::default(),
            words: Box::new(IcuWordBreaker::new()),
            selection: None,
            geometry: None,
            handles: None,
            menu_shown: false,
            active: false,
        }
    }

    /// Replaces the word segmentation implementation.
    pub fn set_word_breaker(&mut self, words: Box<dyn WordBreaker>) {
        self.words = words;
    }

    /// The controller's configuration.
    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// The menu action toggles.
    pub fn toggles(&self) -> ActionToggles {
        self.toggles
    }

    /// Mutable access to the menu action toggles.
    pub fn toggles_mut(&mut self) -> &mut ActionToggles {
        &mut self.toggles
    }

    /// The current selection, in visible-text coordinates.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The geometry of the current selection, if it resolved to any.
    pub fn geometry(&self) -> Option<&RangeGeometry> {
        self.geometry.as_ref()
    }

    /// The handle marker frames, present only while a selection with
    /// non-degenerate geometry exists.
    pub fn handle_markers(&self) -> Option<&HandleMarkers> {
        self.handles.as_ref()
    }

    /// Whether a selection is active.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether a menu presentation has been requested and not dismissed.
    pub fn menu_shown(&self) -> bool {
        self.menu_shown
    }

    /// Hit-tests the selection handles at `point`, returning the hit handle
    /// and its grab point.
    pub fn handle_at_point(&self, point: Point) -> Option<(Handle, Point)> {
        self.handles?.handle_at_point(point, &self.config)
    }

    // --- MARK: Gesture entry points ---

    /// Begins a word selection at `point`.
    ///
    /// Maps the point to an offset (exact glyph hits only), snaps to the
    /// containing word token or a single-character range, then shows
    /// highlight, handles, and menu. A point that hits no glyph is a no-op.
    pub fn begin_selection<H: SelectionHost>(&mut self, host: &mut H, point: Point) {
        let Some(index) = host.offset_at_point(point, false) else {
            return;
        };
        let range = {
            let visible = host.visible_text();
            self.words.word_at(visible.text(), index)
        };
        let Some(range) = range else {
            return;
        };
        debug!(start = range.start, end = range.end, "beginning selection");
        self.dismiss_current(host);
        self.selection = Some(Selection::from_range(range));
        self.update_selection(host, true);
        self.display_menu(host);
        self.active = true;
        host.set_selection_active(true);
    }

    /// Moves one end of the selection to the offset nearest `point`.
    ///
    /// Requires an existing selection with geometry; a drag with no prior
    /// selection has no effect. Also asks the host to keep the touch point
    /// visible, offset upward by the configured margin.
    pub fn move_handle<H: SelectionHost>(&mut self, host: &mut H, handle: Handle, point: Point) {
        let Some(selection) = self.selection else {
            return;
        };
        if self.geometry.is_none() {
            return;
        }
        let Some(index) = host.offset_at_point(point, true) else {
            return;
        };
        let updated = selection.with_handle(handle, index);
        if updated != selection {
            self.selection = Some(updated);
            self.update_selection(host, false);
        }
        let reveal = Rect::new(
            point.x,
            point.y - self.config.reveal_offset,
            point.x + 1.0,
            point.y - self.config.reveal_offset + self.config.reveal_height,
        );
        host.reveal_rect(reveal);
    }

    /// Reopens the menu for the now-settled range after a handle drag.
    pub fn finished_moving_handle<H: SelectionHost>(&mut self, host: &mut H) {
        self.display_menu(host);
    }

    // --- MARK: Programmatic selection ---

    /// Sets the selection to a range expressed in original-text coordinates.
    pub fn set_selection<H: SelectionHost>(
        &mut self,
        host: &mut H,
        range: Range<usize>,
        display_menu: bool,
    ) {
        let range = host.visible_text().from_original(range);
        self.selection = Some(Selection::from_range(range));
        self.update_selection(host, true);
        self.active = true;
        host.set_selection_active(true);
        if display_menu {
            self.display_menu(host);
        }
    }

    /// The current normalized range in original-text coordinates, or `None`
    /// if there is no selection.
    pub fn get_selection<H: TextLayout>(&self, host: &H) -> Option<Range<usize>> {
        let selection = self.selection?;
        Some(host.visible_text().to_original(selection.text_range()))
    }

    /// Selects the entire visible text.
    pub fn select_all<H: SelectionHost>(&mut self, host: &mut H, display_menu: bool) {
        let range = host.visible_text().full_range();
        self.selection = Some(Selection::from_range(range));
        self.update_selection(host, true);
        self.active = true;
        host.set_selection_active(true);
        if display_menu {
            self.display_menu(host);
        }
    }

    /// Clears the selection, hides highlight and handles, dismisses any open
    /// menu, and notifies the host that selection became inactive.
    pub fn cancel_selection<H: SelectionHost>(&mut self, host: &mut H) {
        trace!("cancelling selection");
        self.dismiss_current(host);
        self.active = false;
        host.set_selection_active(false);
    }

    /// Re-derives geometry, handles, and highlight from the stored range
    /// after an external relayout.
    pub fn update_layout<H: SelectionHost>(&mut self, host: &mut H) {
        if self.selection.is_some() {
            self.update_selection(host, false);
        }
    }

    /// Selects the first word of the text without presenting the menu.
    ///
    /// Used by hosts to stage a demonstration selection.
    pub fn select_word_at_start<H: SelectionHost>(&mut self, host: &mut H) {
        let range = {
            let visible = host.visible_text();
            self.words.word_at(visible.text(), 0)
        };
        let Some(range) = range else {
            return;
        };
        self.selection = Some(Selection::from_range(range));
        self.update_selection(host, true);
        self.active = true;
        host.set_selection_active(true);
    }

    // --- MARK: Menu ---

    /// Executes a chosen menu entry.
    ///
    /// Resolves the substring with original content folded back in, hands it
    /// to the host's action sink, and cancels the selection. "Select all"
    /// instead re-selects the full text and re-presents the menu.
    pub fn activate_menu_entry<H: SelectionHost>(&mut self, host: &mut H, entry: MenuEntry) {
        let Some(selection) = self.selection else {
            return;
        };
        let range = selection.text_range();
        if entry == MenuEntry::SelectAll {
            host.dismiss_menu();
            self.menu_shown = false;
            self.select_all(host, true);
            return;
        }
        let (text, action) = {
            let visible = host.visible_text();
            let action = match entry {
                MenuEntry::Copy => SelectionAction::Copy,
                MenuEntry::Quote => SelectionAction::Quote(visible.to_original(range.clone())),
                MenuEntry::Lookup => SelectionAction::Lookup,
                MenuEntry::Translate => SelectionAction::Translate,
                MenuEntry::Share => SelectionAction::Share,
                MenuEntry::SelectAll => return,
            };
            (visible.resolve(range), action)
        };
        host.perform_action(&text, action);
        self.cancel_selection(host);
    }

    /// Presents the menu for the current range.
    ///
    /// Requires a selection whose geometry resolved to a non-empty area.
    fn display_menu<H: SelectionHost>(&mut self, host: &mut H) {
        let Some(selection) = self.selection else {
            return;
        };
        let Some(geometry) = &self.geometry else {
            return;
        };
        if geometry.is_empty() {
            return;
        }
        let range = selection.text_range();
        let anchor = geometry
            .bounding_rect()
            .inflate(0.0, self.config.menu_anchor_outset);
        let is_full_range = range == host.visible_text().full_range();
        let entries = menu_entries(self.toggles, host.translation_available(), is_full_range);
        if self.menu_shown {
            host.dismiss_menu();
        }
        host.present_menu(anchor, &entries);
        self.menu_shown = true;
    }

    // --- MARK: Internal state ---

    /// Clears range, highlight, and menu without touching the active flag.
    fn dismiss_current<H: SelectionHost>(&mut self, host: &mut H) {
        self.selection = None;
        self.update_selection(host, false);
        if self.menu_shown {
            host.dismiss_menu();
            self.menu_shown = false;
        }
    }

    /// Recomputes geometry and handle markers for the stored range and
    /// pushes the resulting highlight state to the host.
    fn update_selection<H: SelectionHost>(&mut self, host: &mut H, animate_in: bool) {
        let range = self.selection.map(|selection| selection.text_range());
        host.update_range(range.clone());
        let geometry = range
            .and_then(|range| host.range_geometry(range))
            .filter(|geometry| !geometry.is_empty());
        let had_highlight = self.handles.is_some();
        match &geometry {
            Some(geometry) => {
                self.handles = Some(HandleMarkers::from_geometry(geometry, &self.config));
                let transition = if had_highlight {
                    HighlightTransition::Update
                } else {
                    HighlightTransition::Appear {
                        emphasized: animate_in,
                    }
                };
                host.update_highlight(Some(geometry), transition);
            }
            None => {
                self.handles = None;
                if had_highlight {
                    host.update_highlight(None, HighlightTransition::Dismiss);
                }
            }
        }
        self.geometry = geometry;
    }
}
