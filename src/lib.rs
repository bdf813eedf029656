//! Tab strip core for a single editor group.
//!
//! This crate keeps a horizontally scrolling tab strip synchronized with a
//! host-managed, ordered collection of open documents: one visual record per
//! document, labels deduplicated by minimal distinguishing path segments,
//! the active tab revealed by a coalesced layout pass, and drag/drop
//! covering in-group reorder and cross-group transfer. The host environment
//! and rendering toolkit stay behind the [`group::EditorGroup`] and
//! [`surface::StripSurface`] traits; the strip owns no documents and draws
//! no pixels itself.

/// Crate version, for hosts that surface it.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod group;
pub mod label;
pub mod strip;
pub mod surface;
pub mod theme;

pub use config::{CloseButtonPlacement, LabelFormat, StripConfig, StripVisibility, TabSizing};
pub use error::StripError;
pub use group::{Document, DocumentId, EditorGroup, GroupId, OpenOptions};
pub use label::{TabLabel, Verbosity};
pub use strip::{DragSession, DropOutcome, TitleStrip};
pub use surface::{StripSurface, StyleSlot, TabBounds, TabFlag, TabHandle};
pub use theme::{ColorRole, Rgb, Theme};
