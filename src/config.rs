//! Tab strip configuration types.
//!
//! The host hands the strip a [`StripConfig`] snapshot and a fresh one on
//! every settings change; `update_options` compares the two field by field
//! to decide whether labels must be recomputed or tabs redrawn.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::StripError;
use crate::label::Verbosity;

/// Label format for tab descriptions.
///
/// `Short`, `Medium` and `Long` pin the description verbosity directly.
/// `Default` uses medium verbosity and additionally shortens descriptions of
/// same-named documents down to their distinguishing path segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LabelFormat {
    /// Shortest descriptions, no duplicate handling
    Short,
    /// Medium descriptions, no duplicate handling
    Medium,
    /// Full descriptions, no duplicate handling
    Long,
    /// Medium descriptions with duplicate shortening (default)
    #[default]
    Default,
}

impl LabelFormat {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            LabelFormat::Short => "Short",
            LabelFormat::Medium => "Medium",
            LabelFormat::Long => "Long",
            LabelFormat::Default => "Default",
        }
    }

    /// All available formats for UI iteration
    pub fn all() -> &'static [LabelFormat] {
        &[
            LabelFormat::Short,
            LabelFormat::Medium,
            LabelFormat::Long,
            LabelFormat::Default,
        ]
    }

    /// Parse a configuration string. Unrecognized values fall back to
    /// `Default` (medium verbosity with duplicate shortening).
    pub fn parse(value: &str) -> Self {
        match value {
            "short" => LabelFormat::Short,
            "medium" => LabelFormat::Medium,
            "long" => LabelFormat::Long,
            _ => LabelFormat::Default,
        }
    }

    /// Verbosity level requested from document descriptions
    pub fn verbosity(&self) -> Verbosity {
        match self {
            LabelFormat::Short => Verbosity::Short,
            LabelFormat::Medium => Verbosity::Medium,
            LabelFormat::Long => Verbosity::Long,
            LabelFormat::Default => Verbosity::Medium,
        }
    }

    /// Whether same-named documents get their descriptions shortened
    pub fn shorten_duplicates(&self) -> bool {
        matches!(self, LabelFormat::Default)
    }
}

/// Close button placement on a tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CloseButtonPlacement {
    /// No close button
    Off,
    /// Close button on the left edge of the tab
    Left,
    /// Close button on the right edge of the tab (default)
    #[default]
    Right,
}

impl CloseButtonPlacement {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            CloseButtonPlacement::Off => "Off",
            CloseButtonPlacement::Left => "Left",
            CloseButtonPlacement::Right => "Right",
        }
    }

    /// All available placements for UI iteration
    pub fn all() -> &'static [CloseButtonPlacement] {
        &[
            CloseButtonPlacement::Off,
            CloseButtonPlacement::Left,
            CloseButtonPlacement::Right,
        ]
    }
}

/// Tab sizing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TabSizing {
    /// Tabs keep their natural width (default)
    #[default]
    Fit,
    /// Tabs shrink to fit the available viewport
    Shrink,
}

impl TabSizing {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TabSizing::Fit => "Fit",
            TabSizing::Shrink => "Shrink",
        }
    }
}

/// Strip visibility mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StripVisibility {
    /// Always show the tab strip (default)
    #[default]
    Always,
    /// Show the strip only when the group holds multiple documents
    WhenMultiple,
    /// Never show the strip
    Never,
}

/// Configuration snapshot consumed by the tab strip.
///
/// Supplied as a whole on every change; never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StripConfig {
    /// Description verbosity and duplicate handling
    pub label_format: LabelFormat,
    /// Close button placement
    pub close_button: CloseButtonPlacement,
    /// Tab sizing mode
    pub sizing: TabSizing,
    /// Whether file icons are rendered in tabs
    pub show_icons: bool,
    /// Icon theme identifier, if an icon theme is active
    pub icon_theme: Option<String>,
    /// Strip visibility mode
    pub visibility: StripVisibility,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            label_format: LabelFormat::Default,
            close_button: CloseButtonPlacement::Right,
            sizing: TabSizing::Fit,
            show_icons: true,
            icon_theme: None,
            visibility: StripVisibility::Always,
        }
    }
}

impl StripConfig {
    /// Load configuration from a TOML file, using defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No strip config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(StripError::Io)
            .with_context(|| format!("reading strip config {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .with_context(|| format!("parsing strip config {}", path.display()))?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(contents: &str) -> std::result::Result<Self, StripError> {
        Ok(toml::from_str(contents)?)
    }

    /// Whether a change from `old` to `self` invalidates computed labels.
    pub fn labels_changed(&self, old: &StripConfig) -> bool {
        self.label_format != old.label_format
    }

    /// Whether a change from `old` to `self` requires redrawing every tab.
    pub fn redraw_changed(&self, old: &StripConfig) -> bool {
        self.label_format != old.label_format
            || self.close_button != old.close_button
            || self.sizing != old.sizing
            || self.show_icons != old.show_icons
            || self.icon_theme != old.icon_theme
    }
}
