//! Environment scene components.
//!
//! - Actuators: capability traits for the light, cloud and water components
//! - Environment: in-memory components implementing those traits

pub mod actuators;
pub mod environment;

pub use actuators::{CloudActuator, EnvironmentTargets, LightActuator, WaterActuator};
pub use environment::{CloudVolume, Environment, SunLight, WaterSurface};
