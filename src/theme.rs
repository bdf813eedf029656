//! Theme color lookup for tab visual state.
//!
//! Tabs never hardcode colors: every style write goes through a [`Theme`]
//! keyed by semantic [`ColorRole`]. A role absent from the active theme
//! resolves to `None`, which the surface must treat as "unset", never as a
//! default color.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// RGB color triple
pub type Rgb = [u8; 3];

/// Semantic color roles resolved from the active theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRole {
    /// Background of the active tab
    ActiveBackground,
    /// Background of inactive tabs
    InactiveBackground,
    /// Foreground (label text) of the active tab
    ActiveForeground,
    /// Foreground of inactive tabs
    InactiveForeground,
    /// Accent border on the strip edges
    Border,
    /// Highlight shown while a drag hovers a tab
    DropFeedback,
    /// Background of a hovered tab
    HoverBackground,
    /// Border of a hovered tab
    HoverBorder,
}

/// Color lookup table for the active theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    colors: HashMap<ColorRole, Rgb>,
}

impl Theme {
    /// Create an empty theme; every role resolves to `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a color role, `None` when the theme does not define it.
    pub fn color(&self, role: ColorRole) -> Option<Rgb> {
        self.colors.get(&role).copied()
    }

    /// Define a color for a role, replacing any previous value.
    pub fn set(&mut self, role: ColorRole, color: Rgb) {
        self.colors.insert(role, color);
    }

    /// Builder-style variant of [`Theme::set`].
    pub fn with(mut self, role: ColorRole, color: Rgb) -> Self {
        self.set(role, color);
        self
    }
}
