//! Drag-and-drop of tabs: reorder within the group, transfer across groups.
//!
//! A [`DragSession`] is created by the surrounding application when a drag
//! gesture starts and carries the dragged document's identity for the
//! lifetime of that one gesture; every terminal event (drop, cancel, end)
//! consumes it so no stale identity leaks into a later drag. Drag-enter and
//! drag-leave on a tab use a nested counter because a tab's child elements
//! fire their own enter/leave pairs; a naive toggle would flicker.

use std::collections::HashMap;

use crate::group::{DocumentId, EditorGroup, GroupId};
use crate::surface::{StripSurface, StyleSlot, TabFlag};
use crate::theme::ColorRole;

use super::TitleStrip;

/// Identity carried by one drag gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    /// Document being dragged
    pub doc: DocumentId,
    /// Group the drag started in
    pub source_group: GroupId,
}

/// Result of dropping onto the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// Drop was a no-op (same position, or stale payload)
    None,
    /// Reorder applied within this group
    Moved {
        /// Source index
        from: usize,
        /// Final index after removal adjustment
        to: usize,
    },
    /// Document from another group should move here; the application owns
    /// both groups and applies the transfer
    TransferMove {
        /// Dragged document
        doc: DocumentId,
        /// Group the document leaves
        source_group: GroupId,
        /// Target index in this group
        to: usize,
    },
    /// Document from another group should open here without leaving its
    /// source (copy modifier held)
    TransferCopy {
        /// Dragged document
        doc: DocumentId,
        /// Source group, untouched by the copy
        source_group: GroupId,
        /// Target index in this group
        to: usize,
    },
    /// No recognizable payload; the host may route this to external
    /// file-drop handling
    External,
}

/// Per-strip drag state: the active session and nested drag-over counters.
#[derive(Debug, Default)]
pub(crate) struct DragController {
    session: Option<DragSession>,
    over: HashMap<usize, u32>,
}

impl DragController {
    pub(crate) fn begin(&mut self, session: DragSession) {
        self.session = Some(session);
        self.over.clear();
    }

    pub(crate) fn session(&self) -> Option<DragSession> {
        self.session
    }

    /// Increment the nested counter; `true` when feedback becomes active.
    pub(crate) fn enter(&mut self, index: usize) -> bool {
        let count = self.over.entry(index).or_insert(0);
        *count += 1;
        *count == 1
    }

    /// Decrement the nested counter; `true` when feedback clears.
    pub(crate) fn leave(&mut self, index: usize) -> bool {
        match self.over.get_mut(&index) {
            Some(count) if *count > 0 => {
                *count -= 1;
                *count == 0
            }
            _ => false,
        }
    }

    pub(crate) fn feedback_active(&self, index: usize) -> bool {
        self.over.get(&index).is_some_and(|c| *c > 0)
    }

    /// Consume the session and counters at a terminal drag event.
    pub(crate) fn end(&mut self) -> Option<DragSession> {
        self.over.clear();
        self.session.take()
    }
}

/// Insertion index for a drop at `pointer_x`, given tab center positions.
///
/// Pure helper, testable without a surface: the drop lands before the first
/// tab whose center lies right of the pointer, or after the last tab.
pub fn drop_insert_index(centers: &[f32], pointer_x: f32) -> usize {
    centers
        .iter()
        .position(|&center| pointer_x < center)
        .unwrap_or(centers.len())
}

/// Convert an insertion index to an effective target index, accounting for
/// removal of the source tab. Indices after the source shift down by one.
pub fn insertion_to_target_index(insert_index: usize, drag_source_index: Option<usize>) -> usize {
    match drag_source_index {
        Some(src) if insert_index > src => insert_index - 1,
        _ => insert_index,
    }
}

impl TitleStrip {
    /// Start tracking a drag gesture.
    pub fn begin_drag(&mut self, session: DragSession) {
        log::debug!(
            "Drag started: doc {} from group {}",
            session.doc,
            session.source_group
        );
        self.drag.begin(session);
    }

    /// A drag entered a tab or one of its child elements.
    pub fn drag_enter(&mut self, index: usize, surface: &mut dyn StripSurface) {
        if self.drag.enter(index) {
            if let Some(handle) = self.store.handle(index) {
                surface.set_flag(handle, TabFlag::DraggedOver, true);
                surface.set_color(
                    handle,
                    StyleSlot::Outline,
                    self.theme.color(ColorRole::DropFeedback),
                );
            }
        }
    }

    /// A drag left a tab or one of its child elements.
    pub fn drag_leave(&mut self, index: usize, surface: &mut dyn StripSurface) {
        if self.drag.leave(index) {
            self.clear_feedback(index, surface);
        }
    }

    /// Abandon the current drag gesture, clearing all feedback.
    pub fn cancel_drag(&mut self, surface: &mut dyn StripSurface) {
        self.clear_all_feedback(surface);
        self.drag.end();
    }

    /// Handle a drop at `insert_index`.
    ///
    /// A same-group drop is applied directly through the host group (and the
    /// strip re-synchronized); a cross-group drop is returned as a transfer
    /// outcome for the application to apply, since it owns both groups. A
    /// copy requires the copy modifier AND a foreign source group. Dropping
    /// a document onto its own position is suppressed.
    pub fn handle_drop(
        &mut self,
        group: &mut dyn EditorGroup,
        surface: &mut dyn StripSurface,
        insert_index: usize,
        copy_modifier: bool,
    ) -> DropOutcome {
        self.clear_all_feedback(surface);
        let Some(session) = self.drag.end() else {
            return DropOutcome::External;
        };

        if session.source_group == group.id() {
            let Some(src) = group.index_of(session.doc) else {
                log::warn!("Dropped doc {} no longer in group", session.doc);
                return DropOutcome::None;
            };
            // Dropping in place (before or after itself) is a no-op.
            if insert_index == src || insert_index == src + 1 {
                return DropOutcome::None;
            }
            let to = insertion_to_target_index(insert_index, Some(src));
            group.move_editor(src, to);
            self.handle_move(group, surface, src, to);
            return DropOutcome::Moved { from: src, to };
        }

        let to = insertion_to_target_index(insert_index, None);
        if copy_modifier {
            DropOutcome::TransferCopy {
                doc: session.doc,
                source_group: session.source_group,
                to,
            }
        } else {
            DropOutcome::TransferMove {
                doc: session.doc,
                source_group: session.source_group,
                to,
            }
        }
    }

    /// Whether drag feedback is currently shown on a tab.
    pub fn drag_feedback_active(&self, index: usize) -> bool {
        self.drag.feedback_active(index)
    }

    /// Whether a drag session is currently tracked.
    pub fn is_dragging(&self) -> bool {
        self.drag.session().is_some()
    }

    fn clear_feedback(&self, index: usize, surface: &mut dyn StripSurface) {
        if let Some(handle) = self.store.handle(index) {
            surface.set_flag(handle, TabFlag::DraggedOver, false);
            surface.set_color(handle, StyleSlot::Outline, None);
        }
    }

    fn clear_all_feedback(&self, surface: &mut dyn StripSurface) {
        for index in 0..self.store.len() {
            if self.drag.feedback_active(index) {
                self.clear_feedback(index, surface);
            }
        }
    }
}
