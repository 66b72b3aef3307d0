//! Channel drivers.
//!
//! Each channel turns shaped progress into a value for one actuator. Channels
//! are independent: a disabled channel is silent, and a channel whose actuator
//! is missing logs once and skips itself without affecting the others.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::animation::progress::ProgressSample;
use crate::animation::values::Interpolatable;
use crate::errors::{ChannelKind, TimelapseError};
use crate::scene::actuators::{CloudActuator, EnvironmentTargets, LightActuator, WaterActuator};
use crate::settings::{CloudSettings, SunSettings, WaterSettings};

/// How the sun channel blends between its start and end orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RotationPolicy {
    /// Spherical interpolation between the two full orientations.
    #[default]
    FullOrientation,
    /// Linear interpolation of the X (elevation) angle only; Y and Z stay at
    /// their start values.
    SingleAxis,
}

/// Converts `(x, y, z)` Euler degrees to a rotation applied Z first, then X,
/// then Y.
#[must_use]
pub fn euler_degrees_to_quat(degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::YXZ,
        degrees.y.to_radians(),
        degrees.x.to_radians(),
        degrees.z.to_radians(),
    )
}

/// Tracks whether a missing actuator has already been reported.
#[derive(Debug, Clone)]
struct ActuatorWatch {
    channel: ChannelKind,
    missing_reported: bool,
}

impl ActuatorWatch {
    fn new(channel: ChannelKind) -> Self {
        Self {
            channel,
            missing_reported: false,
        }
    }

    fn missing(&mut self) {
        if !self.missing_reported {
            self.missing_reported = true;
            log::warn!(
                "[Timelapse] {}",
                TimelapseError::MissingActuator {
                    channel: self.channel
                }
            );
        }
    }

    fn present(&mut self) {
        if self.missing_reported {
            self.missing_reported = false;
            log::info!("[Timelapse] {} actuator available again", self.channel);
        }
    }
}

// ============================================================================
// Rotation
// ============================================================================

#[derive(Debug, Clone)]
pub struct RotationChannel {
    pub enabled: bool,
    pub policy: RotationPolicy,
    start_degrees: Vec3,
    end_degrees: Vec3,
    start: Quat,
    end: Quat,
    watch: ActuatorWatch,
}

impl RotationChannel {
    #[must_use]
    pub fn new(settings: &SunSettings) -> Self {
        Self {
            enabled: settings.enabled,
            policy: settings.policy,
            start_degrees: settings.rotation_start,
            end_degrees: settings.rotation_end,
            start: euler_degrees_to_quat(settings.rotation_start),
            end: euler_degrees_to_quat(settings.rotation_end),
            watch: ActuatorWatch::new(ChannelKind::Sun),
        }
    }

    /// Orientation at shaped progress `t`.
    #[must_use]
    pub fn orientation(&self, t: f32) -> Quat {
        match self.policy {
            RotationPolicy::FullOrientation => Quat::interpolate_linear(self.start, self.end, t),
            RotationPolicy::SingleAxis => {
                let x = f32::interpolate_linear(self.start_degrees.x, self.end_degrees.x, t);
                euler_degrees_to_quat(Vec3::new(x, self.start_degrees.y, self.start_degrees.z))
            }
        }
    }

    pub fn apply(&mut self, t: f32, light: Option<&mut dyn LightActuator>) -> Option<Quat> {
        if !self.enabled {
            return None;
        }
        let Some(light) = light else {
            self.watch.missing();
            return None;
        };
        self.watch.present();

        let orientation = self.orientation(t);
        light.set_local_orientation(orientation);
        Some(orientation)
    }
}

// ============================================================================
// Cloud offset
// ============================================================================

/// Additive offset on top of whatever the cloud layer had when the
/// timelapse started.
#[derive(Debug, Clone)]
pub struct OffsetChannel {
    pub enabled: bool,
    pub start: Vec3,
    pub end: Vec3,
    initial_offset: Option<Vec3>,
    watch: ActuatorWatch,
}

impl OffsetChannel {
    #[must_use]
    pub fn new(settings: &CloudSettings) -> Self {
        Self {
            enabled: settings.enabled,
            start: settings.offset_start,
            end: settings.offset_end,
            initial_offset: None,
            watch: ActuatorWatch::new(ChannelKind::Clouds),
        }
    }

    /// Baseline captured from the actuator, if any.
    #[must_use]
    pub fn initial_offset(&self) -> Option<Vec3> {
        self.initial_offset
    }

    pub fn capture(&mut self, clouds: Option<&mut dyn CloudActuator>) {
        if !self.enabled {
            return;
        }
        match clouds {
            Some(clouds) => {
                let offset = clouds.offset();
                log::info!("[Timelapse] Captured initial cloud offset {offset}");
                self.initial_offset = Some(offset);
            }
            None => self.watch.missing(),
        }
    }

    /// `initial_offset + lerp(start, end, t)`.
    #[must_use]
    pub fn offset(&self, t: f32) -> Vec3 {
        self.initial_offset.unwrap_or(Vec3::ZERO) + Vec3::interpolate_linear(self.start, self.end, t)
    }

    pub fn apply(&mut self, t: f32, clouds: Option<&mut dyn CloudActuator>) -> Option<Vec3> {
        if !self.enabled {
            return None;
        }
        let Some(clouds) = clouds else {
            self.watch.missing();
            return None;
        };
        self.watch.present();

        // Actuator appeared after start: its current offset becomes the baseline.
        if self.initial_offset.is_none() {
            self.initial_offset = Some(clouds.offset());
        }

        let offset = self.offset(t);
        clouds.set_offset(offset);
        Some(offset)
    }
}

// ============================================================================
// Water rate
// ============================================================================

/// Drives the water simulation speed from the shaped-progress derivative,
/// never dropping below the rate the surface had before the timelapse.
#[derive(Debug, Clone)]
pub struct WaterRateChannel {
    pub enabled: bool,
    pub multiplier: f32,
    baseline_rate: Option<f32>,
    watch: ActuatorWatch,
}

impl WaterRateChannel {
    #[must_use]
    pub fn new(settings: &WaterSettings) -> Self {
        Self {
            enabled: settings.enabled,
            multiplier: settings.time_multiplier,
            baseline_rate: None,
            watch: ActuatorWatch::new(ChannelKind::Water),
        }
    }

    /// `max(baseline, multiplier * derivative)`.
    #[must_use]
    pub fn rate_for(baseline_rate: f32, multiplier: f32, shaped_derivative: f32) -> f32 {
        baseline_rate.max(multiplier * shaped_derivative)
    }

    #[must_use]
    pub fn baseline_rate(&self) -> Option<f32> {
        self.baseline_rate
    }

    pub fn capture(&mut self, water: Option<&mut dyn WaterActuator>) {
        if !self.enabled {
            return;
        }
        match water {
            Some(water) => {
                let rate = water.rate();
                log::info!("[Timelapse] Captured baseline water rate {rate}");
                self.baseline_rate = Some(rate);
            }
            None => self.watch.missing(),
        }
    }

    pub fn apply(&mut self, shaped_derivative: f32, water: Option<&mut dyn WaterActuator>) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        let Some(water) = water else {
            self.watch.missing();
            return None;
        };
        self.watch.present();

        let baseline = *self.baseline_rate.get_or_insert_with(|| water.rate());
        let rate = Self::rate_for(baseline, self.multiplier, shaped_derivative);
        water.set_rate(rate);
        Some(rate)
    }

    /// Puts the captured baseline back on the actuator.
    pub fn restore(&mut self, water: Option<&mut dyn WaterActuator>) -> Option<f32> {
        if !self.enabled {
            return None;
        }
        let (Some(water), Some(baseline)) = (water, self.baseline_rate) else {
            return None;
        };
        water.set_rate(baseline);
        log::debug!("[Timelapse] Water rate restored to baseline {baseline}");
        Some(baseline)
    }
}

// ============================================================================
// ChannelDrivers
// ============================================================================

/// Values pushed to the actuators on one frame. `None` means the channel
/// was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelOutputs {
    pub rotation: Option<Quat>,
    pub offset: Option<Vec3>,
    pub water_rate: Option<f32>,
}

/// The three channels of a controller.
#[derive(Debug, Clone)]
pub struct ChannelDrivers {
    pub rotation: RotationChannel,
    pub offset: OffsetChannel,
    pub water: WaterRateChannel,
    /// Water is only driven when the cycle does not repeat.
    water_active: bool,
}

impl ChannelDrivers {
    #[must_use]
    pub fn new(sun: &SunSettings, clouds: &CloudSettings, water: &WaterSettings, repeating: bool) -> Self {
        if water.enabled && repeating {
            log::warn!("[Timelapse] Water is disabled when the cycle repeats.");
        }
        Self {
            rotation: RotationChannel::new(sun),
            offset: OffsetChannel::new(clouds),
            water: WaterRateChannel::new(water),
            water_active: water.enabled && !repeating,
        }
    }

    #[must_use]
    pub fn water_active(&self) -> bool {
        self.water_active
    }

    /// Reads the cloud offset and water rate baselines.
    pub fn capture_baselines(&mut self, targets: &mut dyn EnvironmentTargets) {
        self.offset.capture(targets.clouds());
        if self.water_active {
            self.water.capture(targets.water());
        }
    }

    pub fn apply(&mut self, sample: &ProgressSample, targets: &mut dyn EnvironmentTargets) -> ChannelOutputs {
        let rotation = self.rotation.apply(sample.shaped_t, targets.light());
        let offset = self.offset.apply(sample.shaped_t, targets.clouds());
        let water_rate = if self.water_active {
            self.water.apply(sample.shaped_derivative, targets.water())
        } else {
            None
        };

        ChannelOutputs {
            rotation,
            offset,
            water_rate,
        }
    }

    pub fn restore_water(&mut self, targets: &mut dyn EnvironmentTargets) -> Option<f32> {
        if self.water_active {
            self.water.restore(targets.water())
        } else {
            None
        }
    }
}
