//! Typed errors for the tab strip.
//!
//! The strip itself is a best-effort presentation layer: malformed
//! descriptions degrade to empty strings and out-of-range operations are
//! guarded no-ops, so the only fallible surface is configuration loading.
//! Load functions return `anyhow::Result`; `StripError` values are wrapped
//! inside so callers can downcast when they need the concrete cause.

use thiserror::Error;

/// Errors that can occur when loading strip configuration.
#[derive(Debug, Error)]
pub enum StripError {
    /// I/O failure reading the configuration file
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// TOML syntax or type error in the configuration file
    #[error("TOML parse error in config: {0}")]
    Parse(#[from] toml::de::Error),
}
