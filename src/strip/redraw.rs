//! Per-tab redraw pipeline.
//!
//! A redraw applies, in order: label text and tooltip, edge border accents,
//! configuration-driven state (close-button placement, sizing mode, icon
//! flag), active/inactive state, dirty state, pin state, and any live drag
//! or hover feedback. Colors come exclusively from the theme lookup; roles
//! the theme does not define are unset, never defaulted.

use crate::group::EditorGroup;
use crate::surface::{StripSurface, StyleSlot, TabFlag};
use crate::theme::ColorRole;

use super::TitleStrip;

impl TitleStrip {
    /// Redraw every tab.
    pub(crate) fn redraw_all(&self, group: &dyn EditorGroup, surface: &mut dyn StripSurface) {
        for index in 0..self.store.len() {
            self.redraw_tab(index, group, surface);
        }
    }

    /// Redraw the tab at `index`; guarded no-op when out of range.
    pub(crate) fn redraw_tab(
        &self,
        index: usize,
        group: &dyn EditorGroup,
        surface: &mut dyn StripSurface,
    ) {
        let (Some(handle), Some(label), Some(doc)) = (
            self.store.handle(index),
            self.labels.get(index),
            group.document(index),
        ) else {
            log::warn!("Redraw of tab {} skipped: no visual record", index);
            return;
        };

        // Label text and tooltip
        surface.set_label(handle, &label.name, &label.description, &label.title);

        // Edge accents: leftmost and rightmost tabs carry the border color
        let first = index == 0;
        let last = index + 1 == self.store.len();
        surface.set_flag(handle, TabFlag::First, first);
        surface.set_flag(handle, TabFlag::Last, last);
        let border = if first || last {
            self.theme.color(ColorRole::Border)
        } else {
            None
        };
        surface.set_color(handle, StyleSlot::Border, border);

        // Configuration-driven state
        let close = self.config.close_button;
        surface.set_flag(
            handle,
            TabFlag::CloseLeft,
            close == crate::config::CloseButtonPlacement::Left,
        );
        surface.set_flag(
            handle,
            TabFlag::CloseRight,
            close == crate::config::CloseButtonPlacement::Right,
        );
        surface.set_flag(
            handle,
            TabFlag::Shrink,
            self.config.sizing == crate::config::TabSizing::Shrink,
        );
        surface.set_flag(handle, TabFlag::Icon, self.config.show_icons);

        // Active/inactive state and colors
        let active = group.active_index() == Some(index);
        surface.set_flag(handle, TabFlag::Active, active);
        let (bg, fg) = if active {
            (ColorRole::ActiveBackground, ColorRole::ActiveForeground)
        } else {
            (ColorRole::InactiveBackground, ColorRole::InactiveForeground)
        };
        surface.set_color(handle, StyleSlot::Background, self.theme.color(bg));
        surface.set_color(handle, StyleSlot::Foreground, self.theme.color(fg));

        // Dirty and pin state
        surface.set_flag(handle, TabFlag::Dirty, doc.is_dirty());
        surface.set_flag(handle, TabFlag::Pinned, doc.is_pinned());

        // Re-assert drag-over feedback so a mid-drag redraw does not drop it
        if self.drag.feedback_active(index) {
            surface.set_flag(handle, TabFlag::DraggedOver, true);
            surface.set_color(
                handle,
                StyleSlot::Outline,
                self.theme.color(ColorRole::DropFeedback),
            );
        }

        // Likewise for pointer hover
        if self.hovered == Some(index) {
            self.apply_hover(index, surface);
        }
    }

    /// The pointer entered a tab: overlay the hover colors.
    pub fn hover_enter(
        &mut self,
        index: usize,
        group: &dyn EditorGroup,
        surface: &mut dyn StripSurface,
    ) {
        if index >= self.store.len() {
            return;
        }
        if let Some(prev) = self.hovered.replace(index) {
            // Surfaces may deliver the new enter before the old leave.
            if prev != index {
                self.redraw_tab(prev, group, surface);
            }
        }
        self.apply_hover(index, surface);
    }

    /// The pointer left a tab: restore its canonical colors.
    pub fn hover_leave(
        &mut self,
        index: usize,
        group: &dyn EditorGroup,
        surface: &mut dyn StripSurface,
    ) {
        if self.hovered == Some(index) {
            self.hovered = None;
            self.redraw_tab(index, group, surface);
        }
    }

    /// Tab the pointer currently hovers, if any.
    pub fn hovered_tab(&self) -> Option<usize> {
        self.hovered
    }

    /// Write the hover colors over the canonical ones. Roles the theme does
    /// not define leave the canonical colors in place rather than unsetting.
    fn apply_hover(&self, index: usize, surface: &mut dyn StripSurface) {
        let Some(handle) = self.store.handle(index) else {
            return;
        };
        if let Some(bg) = self.theme.color(ColorRole::HoverBackground) {
            surface.set_color(handle, StyleSlot::Background, Some(bg));
        }
        if let Some(border) = self.theme.color(ColorRole::HoverBorder) {
            surface.set_color(handle, StyleSlot::Border, Some(border));
        }
    }
}
