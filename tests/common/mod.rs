//! Shared integration test fixtures for tab-strip.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{FixtureDoc, FixtureGroup, RecordingSurface};
//! ```
//!
//! Note: Rust integration tests use `mod common;` (not `use`) to bring in
//! helpers from `tests/common/mod.rs`. The `#[allow(dead_code)]` attribute
//! suppresses warnings when only a subset of helpers are used per file.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use tab_strip::surface::{StripSurface, StyleSlot, TabBounds, TabFlag, TabHandle};
use tab_strip::theme::{ColorRole, Rgb, Theme};
use tab_strip::{Document, DocumentId, EditorGroup, GroupId, OpenOptions, Verbosity};

/// Test document with per-verbosity descriptions and mutable state.
pub struct FixtureDoc {
    id: DocumentId,
    name: RefCell<String>,
    dirty: Cell<bool>,
    pinned: Cell<bool>,
    short: RefCell<Option<String>>,
    medium: RefCell<Option<String>>,
    long: RefCell<Option<String>>,
}

impl FixtureDoc {
    /// Document with no path-like description at any verbosity.
    pub fn untitled(id: DocumentId, name: &str) -> Rc<Self> {
        Rc::new(Self {
            id,
            name: RefCell::new(name.to_string()),
            dirty: Cell::new(false),
            pinned: Cell::new(false),
            short: RefCell::new(None),
            medium: RefCell::new(None),
            long: RefCell::new(None),
        })
    }

    /// Document backed by an absolute `/`-separated path: long is the full
    /// parent path, medium the parent path as well, short its last segment.
    pub fn from_path(id: DocumentId, path: &str) -> Rc<Self> {
        let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let name = segments.pop().unwrap_or("untitled").to_string();
        let parent = format!("/{}", segments.join("/"));
        let doc = Self::untitled(id, &name);
        *doc.short.borrow_mut() = segments.last().map(|s| s.to_string());
        *doc.medium.borrow_mut() = Some(parent.clone());
        *doc.long.borrow_mut() = Some(parent);
        doc
    }

    pub fn set_descriptions(&self, short: Option<&str>, medium: Option<&str>, long: Option<&str>) {
        *self.short.borrow_mut() = short.map(str::to_string);
        *self.medium.borrow_mut() = medium.map(str::to_string);
        *self.long.borrow_mut() = long.map(str::to_string);
    }

    pub fn rename(&self, name: &str) {
        *self.name.borrow_mut() = name.to_string();
    }

    pub fn set_dirty(&self, dirty: bool) {
        self.dirty.set(dirty);
    }

    pub fn set_pinned(&self, pinned: bool) {
        self.pinned.set(pinned);
    }
}

impl Document for FixtureDoc {
    fn id(&self) -> DocumentId {
        self.id
    }

    fn name(&self) -> String {
        self.name.borrow().clone()
    }

    fn title(&self) -> String {
        self.long
            .borrow()
            .clone()
            .map(|p| format!("{}/{}", p, self.name.borrow()))
            .unwrap_or_else(|| self.name.borrow().clone())
    }

    fn is_dirty(&self) -> bool {
        self.dirty.get()
    }

    fn is_pinned(&self) -> bool {
        self.pinned.get()
    }

    fn description(&self, verbosity: Verbosity) -> Option<String> {
        match verbosity {
            Verbosity::Short => self.short.borrow().clone(),
            Verbosity::Medium => self.medium.borrow().clone(),
            Verbosity::Long => self.long.borrow().clone(),
        }
    }
}

/// In-memory editor group implementing the host contract.
pub struct FixtureGroup {
    id: GroupId,
    docs: Vec<Rc<FixtureDoc>>,
    active: Option<usize>,
}

impl FixtureGroup {
    pub fn new(id: GroupId) -> Self {
        Self {
            id,
            docs: Vec::new(),
            active: None,
        }
    }

    pub fn with_docs(id: GroupId, docs: Vec<Rc<FixtureDoc>>) -> Self {
        let active = if docs.is_empty() { None } else { Some(0) };
        Self { id, docs, active }
    }

    pub fn doc(&self, index: usize) -> Rc<FixtureDoc> {
        self.docs[index].clone()
    }

    pub fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
    }

    pub fn push(&mut self, doc: Rc<FixtureDoc>) {
        self.docs.push(doc);
        if self.active.is_none() {
            self.active = Some(0);
        }
    }

    pub fn remove(&mut self, index: usize) {
        self.docs.remove(index);
        if self.docs.is_empty() {
            self.active = None;
        } else if let Some(active) = self.active {
            if active >= self.docs.len() {
                self.active = Some(self.docs.len() - 1);
            }
        }
    }

    pub fn ids(&self) -> Vec<DocumentId> {
        self.docs.iter().map(|d| d.id()).collect()
    }
}

impl EditorGroup for FixtureGroup {
    fn id(&self) -> GroupId {
        self.id
    }

    fn len(&self) -> usize {
        self.docs.len()
    }

    fn document(&self, index: usize) -> Option<Rc<dyn Document>> {
        self.docs.get(index).map(|d| d.clone() as Rc<dyn Document>)
    }

    fn documents(&self) -> Vec<Rc<dyn Document>> {
        self.docs
            .iter()
            .map(|d| d.clone() as Rc<dyn Document>)
            .collect()
    }

    fn active_index(&self) -> Option<usize> {
        self.active
    }

    fn index_of(&self, doc: DocumentId) -> Option<usize> {
        self.docs.iter().position(|d| d.id() == doc)
    }

    fn open_editor(&mut self, doc: Rc<dyn Document>, opts: OpenOptions) {
        let id = doc.id();
        let existing = self.index_of(id);
        let index = match existing {
            Some(i) => i,
            None => {
                // Fixture groups hold concrete docs; clone the observable
                // state of a document arriving from another group.
                let concrete = FixtureDoc::untitled(id, &doc.name());
                concrete.set_descriptions(
                    doc.description(Verbosity::Short).as_deref(),
                    doc.description(Verbosity::Medium).as_deref(),
                    doc.description(Verbosity::Long).as_deref(),
                );
                concrete.set_dirty(doc.is_dirty());
                concrete.set_pinned(doc.is_pinned());
                let at = opts.index.unwrap_or(self.docs.len()).min(self.docs.len());
                self.docs.insert(at, concrete);
                at
            }
        };
        if opts.active {
            self.active = Some(index);
        }
        if opts.pinned {
            self.docs[index].set_pinned(true);
        }
    }

    fn close_editor(&mut self, index: usize) {
        if index < self.docs.len() {
            self.remove(index);
        }
    }

    fn move_editor(&mut self, from: usize, to: usize) {
        if from >= self.docs.len() || to >= self.docs.len() {
            return;
        }
        let doc = self.docs.remove(from);
        self.docs.insert(to, doc);
        if self.active == Some(from) {
            self.active = Some(to);
        }
    }

    fn pin_editor(&mut self, index: usize) {
        if let Some(doc) = self.docs.get(index) {
            doc.set_pinned(true);
        }
    }
}

/// Recorded state of one surface tab element.
#[derive(Debug, Default, Clone)]
pub struct TabElement {
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub flags: HashSet<TabFlag>,
    pub colors: HashMap<StyleSlot, Option<Rgb>>,
}

/// Recording surface: keeps elements in visual order with fixed-width
/// geometry so reveal math can be exercised deterministically.
pub struct RecordingSurface {
    next_handle: u64,
    pub elements: HashMap<TabHandle, TabElement>,
    pub order: Vec<TabHandle>,
    pub tab_width: f32,
    pub viewport: f32,
    pub scroll: f32,
    pub scroll_dimensions: Option<(f32, f32)>,
    pub toolbar_active: Option<bool>,
    pub toolbar_cleared: bool,
    pub disposed: Vec<TabHandle>,
}

impl RecordingSurface {
    pub fn new(tab_width: f32, viewport: f32) -> Self {
        Self {
            next_handle: 0,
            elements: HashMap::new(),
            order: Vec::new(),
            tab_width,
            viewport,
            scroll: 0.0,
            scroll_dimensions: None,
            toolbar_active: None,
            toolbar_cleared: false,
            disposed: Vec::new(),
        }
    }

    pub fn element(&self, index: usize) -> &TabElement {
        &self.elements[&self.order[index]]
    }

    pub fn has_flag(&self, index: usize, flag: TabFlag) -> bool {
        self.element(index).flags.contains(&flag)
    }

    pub fn color(&self, index: usize, slot: StyleSlot) -> Option<Rgb> {
        self.element(index).colors.get(&slot).copied().flatten()
    }
}

impl StripSurface for RecordingSurface {
    fn create_tab(&mut self) -> TabHandle {
        let handle = TabHandle(self.next_handle);
        self.next_handle += 1;
        self.elements.insert(handle, TabElement::default());
        self.order.push(handle);
        handle
    }

    fn dispose_tab(&mut self, tab: TabHandle) {
        self.elements.remove(&tab);
        self.order.retain(|h| *h != tab);
        self.disposed.push(tab);
    }

    fn set_label(&mut self, tab: TabHandle, name: &str, description: &str, tooltip: &str) {
        if let Some(el) = self.elements.get_mut(&tab) {
            el.name = name.to_string();
            el.description = description.to_string();
            el.tooltip = tooltip.to_string();
        }
    }

    fn set_flag(&mut self, tab: TabHandle, flag: TabFlag, on: bool) {
        if let Some(el) = self.elements.get_mut(&tab) {
            if on {
                el.flags.insert(flag);
            } else {
                el.flags.remove(&flag);
            }
        }
    }

    fn set_color(&mut self, tab: TabHandle, slot: StyleSlot, color: Option<Rgb>) {
        if let Some(el) = self.elements.get_mut(&tab) {
            el.colors.insert(slot, color);
        }
    }

    fn tab_bounds(&self, index: usize) -> Option<TabBounds> {
        if index >= self.order.len() {
            return None;
        }
        Some(TabBounds {
            offset: index as f32 * self.tab_width,
            width: self.tab_width,
        })
    }

    fn viewport_width(&self) -> f32 {
        self.viewport
    }

    fn content_width(&self) -> f32 {
        self.order.len() as f32 * self.tab_width
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll
    }

    fn set_scroll_dimensions(&mut self, content_width: f32, viewport_width: f32) {
        self.scroll_dimensions = Some((content_width, viewport_width));
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll = offset;
    }

    fn update_toolbar(&mut self, group_active: bool) {
        self.toolbar_active = Some(group_active);
        self.toolbar_cleared = false;
    }

    fn clear_toolbar(&mut self) {
        self.toolbar_active = None;
        self.toolbar_cleared = true;
    }
}

/// Theme with every role defined, for color assertions.
pub fn full_theme() -> Theme {
    Theme::new()
        .with(ColorRole::ActiveBackground, [30, 30, 30])
        .with(ColorRole::InactiveBackground, [45, 45, 45])
        .with(ColorRole::ActiveForeground, [255, 255, 255])
        .with(ColorRole::InactiveForeground, [150, 150, 150])
        .with(ColorRole::Border, [0, 120, 215])
        .with(ColorRole::DropFeedback, [80, 160, 255])
        .with(ColorRole::HoverBackground, [60, 60, 60])
        .with(ColorRole::HoverBorder, [90, 90, 90])
}
