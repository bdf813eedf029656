//! Tab strip orchestration for one editor group.
//!
//! The host delivers lifecycle events (document opened/closed/moved/
//! activated/label-changed, group activation, option changes) and the strip
//! restores its central invariant before returning from each: visual record
//! `i` and label `i` always correspond to host document `i`.
//!
//! ## Module layout
//!
//! - [`store`]: ordered [`TabVisual`](store::TabVisual) records, tail-trimmed.
//! - [`redraw`]: per-tab redraw pipeline (labels, borders, config, state).
//! - [`scroll`]: coalesced reveal layout keeping the active tab visible.
//! - [`drag`]: drag sessions, nested enter/leave feedback, drop policy.

pub mod drag;
pub mod scroll;
mod redraw;
mod store;

pub use drag::{DragSession, DropOutcome};

use crate::config::{StripConfig, StripVisibility};
use crate::group::{DocumentId, EditorGroup, OpenOptions};
use crate::label::{self, TabLabel};
use crate::surface::StripSurface;
use crate::theme::Theme;

use drag::DragController;
use scroll::RevealScheduler;
use store::TabStore;

/// Controller for the tab strip of a single editor group.
pub struct TitleStrip {
    config: StripConfig,
    theme: Theme,
    labels: Vec<TabLabel>,
    store: TabStore,
    reveal: RevealScheduler,
    drag: DragController,
    group_active: bool,
    /// Tab the pointer currently hovers, if any.
    hovered: Option<usize>,
    /// Deferred activation of a clicked tab, opened on the next tick so
    /// input focus has been released first. At most one pending; idempotent.
    pending_activation: Option<DocumentId>,
}

impl TitleStrip {
    /// Create a strip for an (initially empty) group.
    pub fn new(config: StripConfig, theme: Theme) -> Self {
        Self {
            config,
            theme,
            labels: Vec::new(),
            store: TabStore::default(),
            reveal: RevealScheduler::default(),
            drag: DragController::default(),
            group_active: false,
            hovered: None,
            pending_activation: None,
        }
    }

    /// Whether the strip should be visible for the current document count.
    pub fn should_show(&self, document_count: usize) -> bool {
        match self.config.visibility {
            StripVisibility::Always => true,
            StripVisibility::WhenMultiple => document_count > 1,
            StripVisibility::Never => false,
        }
    }

    /// Computed labels, index-aligned with the host documents.
    pub fn labels(&self) -> &[TabLabel] {
        &self.labels
    }

    /// Number of tab visual records.
    pub fn visual_count(&self) -> usize {
        self.store.len()
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> &StripConfig {
        &self.config
    }

    /// Replace the active theme and repaint.
    pub fn set_theme(
        &mut self,
        theme: Theme,
        group: &dyn EditorGroup,
        surface: &mut dyn StripSurface,
    ) {
        self.theme = theme;
        self.redraw_all(group, surface);
    }

    /// A document was opened in the group.
    pub fn handle_open(&mut self, group: &dyn EditorGroup, surface: &mut dyn StripSurface) {
        self.store.ensure_count(surface, group.len());
        self.compute_labels(group);
        self.redraw_all(group, surface);
        log::info!("Tab opened (total: {})", self.store.len());
    }

    /// A document was closed.
    ///
    /// While the group still has an active document, trailing visual records
    /// are trimmed until counts match; the intermediate records keep their
    /// elements and the full redraw reassigns their state. An emptied group
    /// clears every record and the action toolbar.
    pub fn handle_close(&mut self, group: &dyn EditorGroup, surface: &mut dyn StripSurface) {
        self.hovered = self.hovered.filter(|&h| h < group.len());
        if group.active_index().is_some() {
            self.store.ensure_count(surface, group.len());
            self.compute_labels(group);
            self.redraw_all(group, surface);
            // Rapid sequential closes must not bounce the scroll position;
            // the next layout pass updates dimensions only.
            self.reveal.suppress_next();
            self.request_layout();
        } else {
            self.store.clear(surface);
            self.labels.clear();
            surface.clear_toolbar();
        }
        log::info!("Tab closed (total: {})", self.store.len());
    }

    /// A document moved from `from` to `to` within the group.
    ///
    /// No name or description changed, so the label vector is spliced in
    /// place rather than recomputed.
    pub fn handle_move(
        &mut self,
        group: &dyn EditorGroup,
        surface: &mut dyn StripSurface,
        from: usize,
        to: usize,
    ) {
        if from >= self.labels.len() || to >= self.labels.len() {
            log::warn!("Move {} -> {} out of range, ignored", from, to);
            return;
        }
        let label = self.labels.remove(from);
        self.labels.insert(to, label);
        self.redraw_all(group, surface);
        self.request_layout();
        log::info!("Tab moved {} -> {}", from, to);
    }

    /// A document's name or description source changed.
    ///
    /// One rename can affect every duplicate-bearing sibling, so the whole
    /// label set is recomputed.
    pub fn handle_label_update(&mut self, group: &dyn EditorGroup, surface: &mut dyn StripSurface) {
        self.compute_labels(group);
        self.redraw_all(group, surface);
        self.request_layout();
    }

    /// The group's active document changed.
    pub fn handle_activate(&mut self, group: &dyn EditorGroup, surface: &mut dyn StripSurface) {
        self.redraw_all(group, surface);
        self.request_layout();
    }

    /// The group itself became active or inactive within the workbench.
    pub fn set_group_active(
        &mut self,
        active: bool,
        group: &dyn EditorGroup,
        surface: &mut dyn StripSurface,
    ) {
        self.group_active = active;
        self.redraw_all(group, surface);
        surface.update_toolbar(active);
        self.request_layout();
    }

    /// Whether the strip's group is the active one.
    pub fn is_group_active(&self) -> bool {
        self.group_active
    }

    /// A new configuration snapshot arrived.
    pub fn update_options(
        &mut self,
        new: StripConfig,
        group: &dyn EditorGroup,
        surface: &mut dyn StripSurface,
    ) {
        let old = std::mem::replace(&mut self.config, new);
        if self.config.labels_changed(&old) {
            log::debug!("Label format changed, recomputing labels");
            self.compute_labels(group);
        }
        if self.config.redraw_changed(&old) {
            self.redraw_all(group, surface);
        }
    }

    /// Defer activation of a clicked tab to the next tick, after input
    /// focus has been released. A second request supersedes the first.
    pub fn request_activation(&mut self, doc: DocumentId) {
        self.pending_activation = Some(doc);
    }

    /// Request activation of the document after the active one, wrapping.
    pub fn activate_next(&mut self, group: &dyn EditorGroup) {
        self.activate_relative(group, 1);
    }

    /// Request activation of the document before the active one, wrapping.
    pub fn activate_previous(&mut self, group: &dyn EditorGroup) {
        self.activate_relative(group, -1);
    }

    fn activate_relative(&mut self, group: &dyn EditorGroup, step: isize) {
        let count = group.len();
        let Some(active) = group.active_index() else {
            return;
        };
        if count == 0 {
            return;
        }
        let target = (active as isize + step).rem_euclid(count as isize) as usize;
        if let Some(doc) = group.document(target) {
            self.request_activation(doc.id());
        }
    }

    /// Host tick: run the deferred activation, then any pending layout.
    pub fn on_frame(&mut self, group: &mut dyn EditorGroup, surface: &mut dyn StripSurface) {
        if let Some(id) = self.pending_activation.take() {
            if let Some(index) = group.index_of(id) {
                if let Some(doc) = group.document(index) {
                    group.open_editor(
                        doc,
                        OpenOptions {
                            index: Some(index),
                            active: true,
                            pinned: false,
                        },
                    );
                    self.handle_activate(group, surface);
                }
            }
        }
        self.run_layout(group, surface);
    }

    /// Release every visual record and cancel pending deferred work.
    pub fn dispose(&mut self, surface: &mut dyn StripSurface) {
        self.pending_activation = None;
        self.hovered = None;
        self.reveal.cancel();
        self.drag.end();
        self.store.clear(surface);
        self.labels.clear();
    }

    fn compute_labels(&mut self, group: &dyn EditorGroup) {
        self.labels = label::compute_labels(&group.documents(), self.config.label_format);
        debug_assert_eq!(self.labels.len(), group.len());
    }
}
