// Copyright 2026 the Grapple Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

/// A semantic operation on the selected substring, performed by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectionAction {
    /// Copy the substring to the pasteboard.
    Copy,
    /// Share the substring through the host's share surface.
    Share,
    /// Look the substring up in the host's reference surface.
    Lookup,
    /// Speak the substring aloud.
    Speak,
    /// Translate the substring.
    Translate,
    /// Quote the sub-range, in original-text coordinates.
    Quote(Range<usize>),
}

/// One entry of the selection context menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MenuEntry {
    /// Copy the selection.
    Copy,
    /// Quote the selection.
    Quote,
    /// Look the selection up.
    Lookup,
    /// Translate the selection.
    Translate,
    /// Extend the selection to the full text.
    SelectAll,
    /// Share the selection.
    Share,
}

/// Which actions the embedding application offers in the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ActionToggles {
    /// Offer "copy".
    pub copy: bool,
    /// Offer "look up".
    pub lookup: bool,
    /// Offer "quote".
    pub quote: bool,
    /// Offer "translate" when the host reports translation available.
    pub translate: bool,
    /// Offer "share" on full-text selections.
    pub share: bool,
}

impl Default for ActionToggles {
    fn default() -> Self {
        Self {
            copy: true,
            lookup: true,
            quote: false,
            translate: true,
            share: true,
        }
    }
}

/// Assembles the menu for the current range, in fixed order.
///
/// "Select all" is offered exactly while the range is a strict subset of the
/// full text; a full-text range offers "share" in its place.
pub(crate) fn menu_entries(
    toggles: ActionToggles,
    translation_available: bool,
    is_full_range: bool,
) -> Vec<MenuEntry> {
    let mut entries = Vec::new();
    if toggles.copy {
        entries.push(MenuEntry::Copy);
    }
    if toggles.quote {
        entries.push(MenuEntry::Quote);
    }
    if toggles.lookup {
        entries.push(MenuEntry::Lookup);
    }
    if toggles.translate && translation_available {
        entries.push(MenuEntry::Translate);
    }
    if !is_full_range {
        entries.push(MenuEntry::SelectAll);
    } else if toggles.share {
        entries.push(MenuEntry::Share);
    }
    entries
}
