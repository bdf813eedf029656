//! Host collaborator contract.
//!
//! The strip never owns documents; it mirrors an ordered, mutable collection
//! the host manages and is notified of every mutation. Both sides of the
//! contract are traits so host environments vary by implementation, never by
//! inheritance chains.

use std::rc::Rc;

use crate::label::Verbosity;

/// Stable identity of an open document, handed out by the host.
pub type DocumentId = u64;

/// Identity of an editor group, used to distinguish drag source from target.
pub type GroupId = u64;

/// An open document as the strip sees it.
///
/// Identity, dirty and pin state, a display name, and a description
/// generator evaluated at a requested verbosity. A document that has no
/// path-like description at a given verbosity returns `None`; the strip
/// degrades those to empty descriptions rather than failing.
pub trait Document {
    /// Stable identity
    fn id(&self) -> DocumentId;
    /// Display name (typically the file name)
    fn name(&self) -> String;
    /// Full title for tooltips
    fn title(&self) -> String;
    /// Whether the document has unsaved changes
    fn is_dirty(&self) -> bool;
    /// Whether the document is pinned (resists preview styling)
    fn is_pinned(&self) -> bool;
    /// Description at the requested verbosity, `None` when unavailable
    fn description(&self, verbosity: Verbosity) -> Option<String>;
}

/// Options for opening a document in a group.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenOptions {
    /// Target index within the group, appended when `None`
    pub index: Option<usize>,
    /// Whether the document becomes the group's active document
    pub active: bool,
    /// Whether the document opens pinned
    pub pinned: bool,
}

/// The ordered document collection one tab strip represents.
///
/// All operations are synchronous from the strip's perspective; the host
/// delivers a lifecycle event back to the strip after every mutation.
pub trait EditorGroup {
    /// Group identity
    fn id(&self) -> GroupId;
    /// Number of open documents
    fn len(&self) -> usize;
    /// Whether the group is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Document at `index`, `None` when out of range
    fn document(&self, index: usize) -> Option<Rc<dyn Document>>;
    /// All documents in order
    fn documents(&self) -> Vec<Rc<dyn Document>>;
    /// Index of the active document, `None` when the group is empty
    fn active_index(&self) -> Option<usize>;
    /// Index of a document by identity
    fn index_of(&self, doc: DocumentId) -> Option<usize>;
    /// Open a document, inserting at `opts.index` or appending
    fn open_editor(&mut self, doc: Rc<dyn Document>, opts: OpenOptions);
    /// Close the document at `index`; no-op when out of range
    fn close_editor(&mut self, index: usize);
    /// Move a document between indices within the group
    fn move_editor(&mut self, from: usize, to: usize);
    /// Pin the document at `index`
    fn pin_editor(&mut self, index: usize);
}
