//! Ordered store of per-document tab visual records.
//!
//! Index `i` in the store always corresponds to document `i` in the host's
//! ordering. Records are only ever disposed from the tail: closing an
//! intermediate document removes the last record and relies on the full
//! redraw that follows to reassign index-bound state.

use crate::surface::{StripSurface, TabHandle};

/// Visual record of one open document: the surface element it owns.
#[derive(Debug)]
pub(crate) struct TabVisual {
    pub(crate) handle: TabHandle,
}

impl TabVisual {
    fn dispose(self, surface: &mut dyn StripSurface) {
        surface.dispose_tab(self.handle);
    }
}

/// Ordered collection of tab visual records, kept index-aligned with the
/// host's document list.
#[derive(Debug, Default)]
pub(crate) struct TabStore {
    visuals: Vec<TabVisual>,
}

impl TabStore {
    pub(crate) fn len(&self) -> usize {
        self.visuals.len()
    }

    pub(crate) fn handle(&self, index: usize) -> Option<TabHandle> {
        self.visuals.get(index).map(|v| v.handle)
    }

    /// Append or tail-trim visual records until the count matches the host
    /// document count, restoring the index-alignment invariant.
    pub(crate) fn ensure_count(&mut self, surface: &mut dyn StripSurface, count: usize) {
        while self.visuals.len() < count {
            let handle = surface.create_tab();
            self.visuals.push(TabVisual { handle });
        }
        while self.visuals.len() > count {
            if let Some(visual) = self.visuals.pop() {
                visual.dispose(surface);
            }
        }
    }

    /// Dispose every record.
    pub(crate) fn clear(&mut self, surface: &mut dyn StripSurface) {
        for visual in self.visuals.drain(..).rev() {
            visual.dispose(surface);
        }
    }
}
