//! Abstract rendering surface for the tab strip.
//!
//! The strip produces a container with one child element per open document.
//! Visual state is expressed as toggled [`TabFlag`]s and per-role style
//! colors; geometry queries feed the reveal computation. Concrete
//! implementations bind this to an actual toolkit; tests use a recording
//! implementation.

use crate::theme::Rgb;

/// Opaque handle to one tab element inside the surface container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabHandle(pub u64);

/// Boolean visual state toggled on a tab element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabFlag {
    /// Tab represents the group's active document
    Active,
    /// Document has unsaved changes
    Dirty,
    /// Document is pinned (rendered non-italic)
    Pinned,
    /// A drag session currently hovers this tab
    DraggedOver,
    /// Leftmost tab in the strip (accent border)
    First,
    /// Rightmost tab in the strip (accent border)
    Last,
    /// Close button rendered on the left edge
    CloseLeft,
    /// Close button rendered on the right edge
    CloseRight,
    /// Strip is in shrink sizing mode
    Shrink,
    /// File icon visible (an icon theme is active)
    Icon,
}

/// Inline style slot written per tab from theme colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleSlot {
    /// Tab background
    Background,
    /// Label foreground
    Foreground,
    /// Tab border
    Border,
    /// Drag-over outline
    Outline,
}

/// Content-relative position of one tab element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabBounds {
    /// Leading edge offset within the strip content, in pixels
    pub offset: f32,
    /// Element width in pixels
    pub width: f32,
}

impl TabBounds {
    /// Trailing edge offset within the strip content.
    pub fn trailing(&self) -> f32 {
        self.offset + self.width
    }
}

/// Rendering surface produced by the strip.
///
/// Child elements are kept in visual order by the surface itself: a created
/// tab appends to the container and disposal removes it. The strip only ever
/// disposes from the tail, so indices into the container stay aligned with
/// the host's document ordering.
pub trait StripSurface {
    /// Append a new tab element to the container and return its handle.
    fn create_tab(&mut self) -> TabHandle;
    /// Remove a tab element and release its resources.
    fn dispose_tab(&mut self, tab: TabHandle);
    /// Set the visible label and tooltip of a tab.
    fn set_label(&mut self, tab: TabHandle, name: &str, description: &str, tooltip: &str);
    /// Toggle a boolean visual state flag on a tab.
    fn set_flag(&mut self, tab: TabHandle, flag: TabFlag, on: bool);
    /// Write a style slot; `None` unsets it (theme has no color for the role).
    fn set_color(&mut self, tab: TabHandle, slot: StyleSlot, color: Option<Rgb>);

    /// Bounds of the tab at a visual index, `None` when out of range.
    fn tab_bounds(&self, index: usize) -> Option<TabBounds>;
    /// Visible viewport width of the strip, in pixels.
    fn viewport_width(&self) -> f32;
    /// Total content width of the strip, in pixels.
    fn content_width(&self) -> f32;
    /// Current horizontal scroll offset.
    fn scroll_offset(&self) -> f32;
    /// Push recomputed scroll dimensions to the scroll bar.
    fn set_scroll_dimensions(&mut self, content_width: f32, viewport_width: f32);
    /// Set the horizontal scroll offset.
    fn set_scroll_offset(&mut self, offset: f32);

    /// Update the group action toolbar for the group-active state.
    fn update_toolbar(&mut self, group_active: bool);
    /// Clear the group action toolbar (group became empty).
    fn clear_toolbar(&mut self);
}
