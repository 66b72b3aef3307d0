//! In-memory environment components.
//!
//! Plain data stand-ins for the engine-side sun, cloud volume and water
//! surface. Hosts with their own component storage implement the traits in
//! [`actuators`](super::actuators) directly instead.

use glam::{EulerRot, Quat, Vec3};

use crate::scene::actuators::{CloudActuator, EnvironmentTargets, LightActuator, WaterActuator};

/// Directional light transform.
#[derive(Debug, Clone, PartialEq)]
pub struct SunLight {
    pub rotation: Quat,
}

impl SunLight {
    #[must_use]
    pub fn new() -> Self {
        Self {
            rotation: Quat::IDENTITY,
        }
    }

    /// Current orientation as `(x, y, z)` degrees, the same convention the
    /// sun channel is configured with.
    #[must_use]
    pub fn rotation_euler_degrees(&self) -> Vec3 {
        let (y, x, z) = self.rotation.to_euler(EulerRot::YXZ);
        Vec3::new(x.to_degrees(), y.to_degrees(), z.to_degrees())
    }
}

impl Default for SunLight {
    fn default() -> Self {
        Self::new()
    }
}

impl LightActuator for SunLight {
    fn set_local_orientation(&mut self, orientation: Quat) {
        self.rotation = orientation;
    }
}

/// Volumetric cloud layer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CloudVolume {
    pub shape_offset: Vec3,
}

impl CloudActuator for CloudVolume {
    fn offset(&self) -> Vec3 {
        self.shape_offset
    }

    fn set_offset(&mut self, offset: Vec3) {
        self.shape_offset = offset;
    }
}

/// Water surface simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterSurface {
    pub time_multiplier: f32,
}

impl Default for WaterSurface {
    fn default() -> Self {
        Self {
            time_multiplier: 1.0,
        }
    }
}

impl WaterActuator for WaterSurface {
    fn rate(&self) -> f32 {
        self.time_multiplier
    }

    fn set_rate(&mut self, rate: f32) {
        self.time_multiplier = rate;
    }
}

/// Optional set of environment components, any of which may be missing.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    pub sun: Option<SunLight>,
    pub clouds: Option<CloudVolume>,
    pub water: Option<WaterSurface>,
}

impl Environment {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An environment with every component present at its default state.
    #[must_use]
    pub fn complete() -> Self {
        Self {
            sun: Some(SunLight::new()),
            clouds: Some(CloudVolume::default()),
            water: Some(WaterSurface::default()),
        }
    }

    #[must_use]
    pub fn with_sun(mut self, sun: SunLight) -> Self {
        self.sun = Some(sun);
        self
    }

    #[must_use]
    pub fn with_clouds(mut self, clouds: CloudVolume) -> Self {
        self.clouds = Some(clouds);
        self
    }

    #[must_use]
    pub fn with_water(mut self, water: WaterSurface) -> Self {
        self.water = Some(water);
        self
    }
}

impl EnvironmentTargets for Environment {
    fn light(&mut self) -> Option<&mut dyn LightActuator> {
        self.sun.as_mut().map(|s| s as &mut dyn LightActuator)
    }

    fn clouds(&mut self) -> Option<&mut dyn CloudActuator> {
        self.clouds.as_mut().map(|c| c as &mut dyn CloudActuator)
    }

    fn water(&mut self) -> Option<&mut dyn WaterActuator> {
        self.water.as_mut().map(|w| w as &mut dyn WaterActuator)
    }
}
