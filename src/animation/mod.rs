mod values;
pub mod curve;
pub mod presets;
pub mod clock;
pub mod progress;
pub mod channels;
pub mod controller;

pub use values::Interpolatable;
pub use curve::{Curve, Keyframe};
pub use presets::{PresetEntry, PresetLibrary};
pub use clock::{PhaseClock, PhaseEvent, PhaseState, PhaseStatus, TimingMode};
pub use progress::{ProgressEvaluator, ProgressSample};
pub use channels::{
    ChannelDrivers, ChannelOutputs, OffsetChannel, RotationChannel, RotationPolicy,
    WaterRateChannel, euler_degrees_to_quat,
};
pub use controller::{TimelapseController, TimelapseFrame};
