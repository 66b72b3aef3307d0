#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod animation;
pub mod errors;
pub mod input;
pub mod scene;
pub mod settings;

pub use animation::{
    Curve, Keyframe, PhaseClock, PhaseStatus, PresetLibrary, RotationPolicy, TimelapseController,
    TimelapseFrame, TimingMode,
};
pub use errors::{Result, TimelapseError};
pub use input::{Input, InputSource, Key};
pub use scene::{CloudVolume, Environment, EnvironmentTargets, SunLight, WaterSurface};
pub use settings::TimelapseSettings;
