//! Error Types
//!
//! This module defines the error types used throughout the timelapse engine.
//!
//! # Overview
//!
//! The main error type [`TimelapseError`] covers the configuration-phase failure
//! modes:
//! - Malformed easing curves (rejected at construction)
//! - Invalid timing or channel configuration (rejected at setup)
//! - Unknown preset selections
//! - Settings parsing errors
//!
//! Missing actuators are *not* fatal. The per-frame `tick` never returns an
//! error; a channel whose actuator is absent degrades to a no-op and the
//! condition is reported through the `log` facade.
//!
//! # Usage
//!
//! ```rust,ignore
//! use timelapse::errors::{TimelapseError, Result};
//!
//! fn build() -> Result<TimelapseController> {
//!     TimelapseController::new(TimelapseSettings::default())
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// The main error type for the timelapse engine.
#[derive(Error, Debug)]
pub enum TimelapseError {
    // ========================================================================
    // Curve Errors
    // ========================================================================
    /// The keyframe set cannot form a curve (empty, unsorted, duplicated
    /// times, or non-finite components).
    #[error("Invalid curve: {0}")]
    InvalidCurve(String),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A timing or channel setting is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// No preset is registered under the requested name.
    #[error("Speed curve preset not found: {0}")]
    PresetNotFound(String),

    /// Preset index out of bounds.
    #[error("Speed curve preset index out of bounds: {index} (presets: {len})")]
    PresetIndexOutOfBounds {
        /// The requested index
        index: usize,
        /// Number of registered presets
        len: usize,
    },

    // ========================================================================
    // Runtime Diagnostics
    // ========================================================================
    /// A channel is enabled but its actuator is absent. Only ever logged.
    #[error("{channel} actuator missing, channel skipped")]
    MissingActuator {
        /// The channel that was skipped
        channel: ChannelKind,
    },

    // ========================================================================
    // Format & Parsing Errors
    // ========================================================================
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Identifies one of the driven channels in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Sun,
    Clouds,
    Water,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChannelKind::Sun => "Directional light",
            ChannelKind::Clouds => "Volumetric clouds",
            ChannelKind::Water => "Water surface",
        };
        f.write_str(name)
    }
}

/// Alias for `Result<T, TimelapseError>`.
pub type Result<T> = std::result::Result<T, TimelapseError>;
