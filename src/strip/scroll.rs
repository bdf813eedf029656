//! Reveal scrolling: keep the active tab fully visible.
//!
//! Layout requests are coalesced to a single pending computation per display
//! refresh tick; the host drives the tick by calling
//! [`TitleStrip::run_layout`](super::TitleStrip::run_layout). The reveal
//! math itself is a pure function so it can be tested without a surface.

use crate::group::EditorGroup;
use crate::surface::{StripSurface, TabBounds};

use super::TitleStrip;

/// Coalescing scheduler for the deferred layout pass.
///
/// Two states: idle and scheduled. A request while already scheduled is a
/// no-op; the scheduler returns to idle after every run regardless of
/// outcome. `suppress_once` skips exactly one reveal (scroll dimensions are
/// still pushed) to protect rapid sequential closes from visual thrashing.
#[derive(Debug, Default)]
pub(crate) struct RevealScheduler {
    scheduled: bool,
    suppress_once: bool,
}

impl RevealScheduler {
    /// Transition idle -> scheduled; `true` when newly scheduled.
    pub(crate) fn request(&mut self) -> bool {
        let newly = !self.scheduled;
        self.scheduled = true;
        newly
    }

    /// Consume the pending request, returning whether one was pending.
    pub(crate) fn take(&mut self) -> bool {
        std::mem::take(&mut self.scheduled)
    }

    /// Cancel any pending request and suppression (disposal path).
    pub(crate) fn cancel(&mut self) {
        self.scheduled = false;
        self.suppress_once = false;
    }

    /// Skip the next reveal (position unchanged, dimensions still pushed).
    pub(crate) fn suppress_next(&mut self) {
        self.suppress_once = true;
    }

    /// Clear and report the suppression flag.
    pub(crate) fn consume_suppression(&mut self) -> bool {
        std::mem::take(&mut self.suppress_once)
    }

    #[cfg(test)]
    pub(crate) fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

/// Scroll offset that brings the active tab fully into view.
///
/// `None` when the current offset already shows the whole tab. A tab
/// overflowing the trailing edge scrolls right by exactly the overflow; a
/// tab left of the offset, or wider than the viewport, snaps the offset to
/// its leading edge.
pub fn reveal_offset(active: TabBounds, viewport_width: f32, scroll_offset: f32) -> Option<f32> {
    if active.trailing() > scroll_offset + viewport_width && active.width <= viewport_width {
        Some(scroll_offset + active.trailing() - (scroll_offset + viewport_width))
    } else if scroll_offset > active.offset || active.width > viewport_width {
        Some(active.offset)
    } else {
        None
    }
}

impl TitleStrip {
    /// Request the coalesced layout pass for the next tick.
    pub fn request_layout(&mut self) {
        if self.reveal.request() {
            log::debug!("Reveal layout scheduled");
        }
    }

    /// Run the pending layout pass, if any. Returns `true` when a pass ran.
    ///
    /// The pass locates the active document's tab, pushes recomputed scroll
    /// dimensions, then adjusts the scroll offset unless a one-shot
    /// suppression is armed. The scheduler is idle again on return.
    pub fn run_layout(&mut self, group: &dyn EditorGroup, surface: &mut dyn StripSurface) -> bool {
        if !self.reveal.take() {
            return false;
        }

        let Some(active_index) = group.active_index() else {
            return true;
        };
        let Some(bounds) = surface.tab_bounds(active_index) else {
            return true;
        };

        let viewport_width = surface.viewport_width();
        let content_width = surface.content_width();
        surface.set_scroll_dimensions(content_width, viewport_width);

        if self.reveal.consume_suppression() {
            log::debug!("Reveal suppressed once after close");
            return true;
        }

        if let Some(offset) = reveal_offset(bounds, viewport_width, surface.scroll_offset()) {
            log::debug!(
                "Revealing tab {} at offset {:.1}",
                active_index,
                offset
            );
            surface.set_scroll_offset(offset);
        }
        true
    }
}
