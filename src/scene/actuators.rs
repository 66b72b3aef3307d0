//! Host-engine capabilities driven by the timelapse controller.
//!
//! The controller never owns or constructs these components. Each frame it
//! asks an [`EnvironmentTargets`] implementation for whichever actuators are
//! currently available; an absent actuator simply skips its channel.

use glam::{Quat, Vec3};

/// Orientation of the directional (sun) light.
pub trait LightActuator {
    fn set_local_orientation(&mut self, orientation: Quat);
}

/// Shape offset of a volumetric cloud layer.
pub trait CloudActuator {
    fn offset(&self) -> Vec3;
    fn set_offset(&mut self, offset: Vec3);
}

/// Simulation speed multiplier of a water surface.
pub trait WaterActuator {
    fn rate(&self) -> f32;
    fn set_rate(&mut self, rate: f32);
}

/// Resolves the actuators for the current frame.
///
/// Returning `None` is a valid answer: the matching channel degrades to a
/// no-op and the rest of the frame is unaffected.
pub trait EnvironmentTargets {
    fn light(&mut self) -> Option<&mut dyn LightActuator>;
    fn clouds(&mut self) -> Option<&mut dyn CloudActuator>;
    fn water(&mut self) -> Option<&mut dyn WaterActuator>;
}
