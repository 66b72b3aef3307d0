//! Timelapse Settings
//!
//! The configuration surface of a [`TimelapseController`](crate::TimelapseController):
//! cycle timing, the speed curve (preset or explicit keyframes), the trigger
//! key and the per-channel start/end values.
//!
//! Settings are plain `serde` data, so hosts can keep them in scene files or
//! load them from JSON:
//!
//! ```rust,ignore
//! use timelapse::settings::TimelapseSettings;
//!
//! let settings = TimelapseSettings::from_json_str(r#"{
//!     "cycle_duration": 30.0,
//!     "mode": "OneShot",
//!     "preset": "EaseInOut",
//!     "water": { "enabled": true, "time_multiplier": 3.0 }
//! }"#)?;
//! ```
//!
//! Missing fields fall back to [`Default`], which mirrors a freshly added
//! timelapse component: a 60 second looping sunrise-to-sunset sweep with
//! drifting clouds and water control off.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::animation::channels::RotationPolicy;
use crate::animation::clock::{TimingMode, validate_cycle_duration};
use crate::animation::curve::Curve;
use crate::animation::presets::PresetLibrary;
use crate::errors::{Result, TimelapseError};
use crate::input::Key;

// ---------------------------------------------------------------------------
// Channel settings
// ---------------------------------------------------------------------------

/// Directional light rotation channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SunSettings {
    pub enabled: bool,
    /// Start orientation as `(x, y, z)` Euler angles in degrees.
    pub rotation_start: Vec3,
    /// End orientation as `(x, y, z)` Euler angles in degrees.
    pub rotation_end: Vec3,
    pub policy: RotationPolicy,
}

impl Default for SunSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            rotation_start: Vec3::new(180.0, -30.0, 0.0),
            rotation_end: Vec3::new(0.0, -30.0, 0.0),
            policy: RotationPolicy::FullOrientation,
        }
    }
}

/// Volumetric cloud offset channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudSettings {
    pub enabled: bool,
    pub offset_start: Vec3,
    pub offset_end: Vec3,
}

impl Default for CloudSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            offset_start: Vec3::ZERO,
            offset_end: Vec3::new(100.0, 0.0, 0.0),
        }
    }
}

/// Water simulation speed channel. Only driven in non-repeating modes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterSettings {
    pub enabled: bool,
    /// Scales the shaped-progress derivative into a simulation rate.
    pub time_multiplier: f32,
}

impl Default for WaterSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            time_multiplier: 2.0,
        }
    }
}

// ---------------------------------------------------------------------------
// TimelapseSettings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelapseSettings {
    /// Length of one cycle in seconds. Must be positive.
    pub cycle_duration: f32,
    pub mode: TimingMode,
    /// Speed curve preset, looked up in [`PresetLibrary`].
    pub preset: Option<String>,
    /// Explicit speed curve. Takes precedence over `preset`.
    pub curve: Option<Curve>,
    /// Key toggling [`TimingMode::Triggered`] between idle and running.
    pub trigger_key: Key,
    pub sun: SunSettings,
    pub clouds: CloudSettings,
    pub water: WaterSettings,
}

impl Default for TimelapseSettings {
    fn default() -> Self {
        Self {
            cycle_duration: 60.0,
            mode: TimingMode::Loop,
            preset: Some("Linear".to_string()),
            curve: None,
            trigger_key: Key::Space,
            sun: SunSettings::default(),
            clouds: CloudSettings::default(),
            water: WaterSettings::default(),
        }
    }
}

impl TimelapseSettings {
    /// Parses and validates settings from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        validate_cycle_duration(self.cycle_duration)?;

        if !self.water.time_multiplier.is_finite() {
            return Err(TimelapseError::InvalidConfiguration(format!(
                "water time multiplier must be finite, got {}",
                self.water.time_multiplier
            )));
        }

        let vectors = [
            ("sun.rotation_start", self.sun.rotation_start),
            ("sun.rotation_end", self.sun.rotation_end),
            ("clouds.offset_start", self.clouds.offset_start),
            ("clouds.offset_end", self.clouds.offset_end),
        ];
        if let Some((name, _)) = vectors.iter().find(|(_, v)| !v.is_finite()) {
            return Err(TimelapseError::InvalidConfiguration(format!(
                "{name} must be finite"
            )));
        }

        if self.curve.is_none()
            && let Some(name) = &self.preset
            && PresetLibrary::find_index_by_name(name).is_none()
        {
            return Err(TimelapseError::PresetNotFound(name.clone()));
        }

        Ok(())
    }

    /// Resolves the speed curve: explicit curve, then named preset, then
    /// the linear preset. Also returns the preset name when one was used.
    pub fn resolve_curve(&self) -> Result<(Curve, Option<&'static str>)> {
        if let Some(curve) = &self.curve {
            return Ok((curve.clone(), None));
        }

        let name = self.preset.as_deref().unwrap_or("Linear");
        let entry = PresetLibrary::find_index_by_name(name)
            .and_then(PresetLibrary::get)
            .ok_or_else(|| TimelapseError::PresetNotFound(name.to_string()))?;

        Ok((entry.curve.clone(), Some(entry.name)))
    }
}
