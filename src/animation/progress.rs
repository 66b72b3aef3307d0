use crate::animation::curve::Curve;

/// Progress published for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressSample {
    /// Linear progress `timer / cycle_duration`, clamped to `[0, 1]`.
    pub raw_t: f32,
    /// `raw_t` reshaped by the speed curve. Persist it as the next frame's
    /// `last_shaped_value`.
    pub shaped_t: f32,
    /// Rate of change of `shaped_t` per second over the last frame.
    pub shaped_derivative: f32,
}

/// Maps clock time to shaped progress and its derivative.
pub struct ProgressEvaluator;

impl ProgressEvaluator {
    #[must_use]
    pub fn raw_progress(timer: f32, cycle_duration: f32) -> f32 {
        if cycle_duration > 0.0 {
            (timer / cycle_duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// A zero or negative `delta_time` yields a zero derivative.
    #[must_use]
    pub fn evaluate(
        timer: f32,
        cycle_duration: f32,
        curve: &Curve,
        last_shaped_value: f32,
        delta_time: f32,
    ) -> ProgressSample {
        let raw_t = Self::raw_progress(timer, cycle_duration);
        let shaped_t = curve.evaluate(raw_t);

        let shaped_derivative = if delta_time > 0.0 {
            (shaped_t - last_shaped_value) / delta_time
        } else {
            0.0
        };

        ProgressSample {
            raw_t,
            shaped_t,
            shaped_derivative,
        }
    }
}
