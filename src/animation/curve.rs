use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::animation::values::Interpolatable;
use crate::errors::{Result, TimelapseError};

/// A single control point of a [`Curve`].
///
/// Tangents are slopes (value units per curve-time unit), matching the usual
/// authoring convention: `in_tangent` shapes the segment arriving at this key,
/// `out_tangent` the segment leaving it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub time: f32,
    pub value: f32,
    #[serde(default)]
    pub in_tangent: f32,
    #[serde(default)]
    pub out_tangent: f32,
}

impl Keyframe {
    #[must_use]
    pub const fn new(time: f32, value: f32, in_tangent: f32, out_tangent: f32) -> Self {
        Self {
            time,
            value,
            in_tangent,
            out_tangent,
        }
    }
}

/// An immutable piecewise cubic Hermite curve.
///
/// Keyframe times are strictly increasing. They are not restricted to the
/// unit interval: a curve keyed over `[0.2, 0.8]` or `[0, 2]` is valid, and
/// sampling outside the keyed range clamps to the boundary keyframe's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Keyframe>", into = "Vec<Keyframe>")]
pub struct Curve {
    keyframes: SmallVec<[Keyframe; 4]>,
}

impl Curve {
    /// Builds a curve from keyframes sorted by time.
    ///
    /// Rejects an empty list, non-finite components and times that do not
    /// strictly increase. Any finite time range is accepted.
    pub fn new(keyframes: impl IntoIterator<Item = Keyframe>) -> Result<Self> {
        let keyframes: SmallVec<[Keyframe; 4]> = keyframes.into_iter().collect();

        if keyframes.is_empty() {
            return Err(TimelapseError::InvalidCurve("curve has no keyframes".into()));
        }

        for (i, key) in keyframes.iter().enumerate() {
            if !(key.time.is_finite()
                && key.value.is_finite()
                && key.in_tangent.is_finite()
                && key.out_tangent.is_finite())
            {
                return Err(TimelapseError::InvalidCurve(format!(
                    "keyframe {i} has a non-finite component"
                )));
            }
        }

        if let Some(i) = keyframes.windows(2).position(|pair| pair[0].time >= pair[1].time) {
            return Err(TimelapseError::InvalidCurve(format!(
                "keyframe times must be strictly increasing (keyframe {} at {} follows {})",
                i + 1,
                keyframes[i + 1].time,
                keyframes[i].time
            )));
        }

        Ok(Self { keyframes })
    }

    /// Straight line between two points; both tangents equal the slope.
    pub fn linear(time_start: f32, value_start: f32, time_end: f32, value_end: f32) -> Result<Self> {
        let span = time_end - time_start;
        let slope = if span.abs() > f32::EPSILON {
            (value_end - value_start) / span
        } else {
            0.0
        };
        Self::new([
            Keyframe::new(time_start, value_start, slope, slope),
            Keyframe::new(time_end, value_end, slope, slope),
        ])
    }

    /// Flat-tangent S-curve between two points (smoothstep on the unit square).
    pub fn ease_in_out(
        time_start: f32,
        value_start: f32,
        time_end: f32,
        value_end: f32,
    ) -> Result<Self> {
        Self::new([
            Keyframe::new(time_start, value_start, 0.0, 0.0),
            Keyframe::new(time_end, value_end, 0.0, 0.0),
        ])
    }

    /// Construction path for the built-in preset table, whose keys are known
    /// to be sorted and finite.
    pub(crate) fn from_trusted(keyframes: [Keyframe; 2]) -> Self {
        debug_assert!(keyframes[0].time < keyframes[1].time);
        Self {
            keyframes: SmallVec::from_iter(keyframes),
        }
    }

    #[must_use]
    pub fn keyframes(&self) -> &[Keyframe] {
        &self.keyframes
    }

    /// Keyed time range `(first, last)`.
    #[must_use]
    pub fn time_range(&self) -> (f32, f32) {
        let first = self.keyframes[0].time;
        let last = self.keyframes[self.keyframes.len() - 1].time;
        (first, last)
    }

    /// Samples the curve at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f32) -> f32 {
        let len = self.keyframes.len();
        // Fast path: constant curve
        if len == 1 {
            return self.keyframes[0].value;
        }

        let (first, last) = self.time_range();
        let x = if x.is_nan() { first } else { x.clamp(first, last) };

        // partition_point finds the first key with time > x, i.e. the segment end
        let next_idx = self.keyframes.partition_point(|k| k.time <= x);
        let index = next_idx.saturating_sub(1);

        if index >= len - 1 {
            return self.keyframes[len - 1].value;
        }

        let k0 = &self.keyframes[index];
        let k1 = &self.keyframes[index + 1];
        let dt = k1.time - k0.time;
        let t = ((x - k0.time) / dt).clamp(0.0, 1.0);

        f32::interpolate_cubic(k0.value, k0.out_tangent, k1.in_tangent, k1.value, t, dt)
    }

    /// Renders the curve as a constructor call, one keyframe per line.
    #[must_use]
    pub fn to_keyframe_code(&self) -> String {
        let mut code = String::from("Curve::new([\n");
        let last = self.keyframes.len() - 1;
        for (i, k) in self.keyframes.iter().enumerate() {
            let _ = write!(
                code,
                "    Keyframe::new({:?}, {:?}, {:?}, {:?})",
                k.time, k.value, k.in_tangent, k.out_tangent
            );
            code.push_str(if i < last { ",\n" } else { "\n" });
        }
        code.push_str("])?;");
        code
    }
}

impl Default for Curve {
    fn default() -> Self {
        Self::from_trusted([
            Keyframe::new(0.0, 0.0, 1.0, 1.0),
            Keyframe::new(1.0, 1.0, 1.0, 1.0),
        ])
    }
}

impl TryFrom<Vec<Keyframe>> for Curve {
    type Error = TimelapseError;

    fn try_from(keyframes: Vec<Keyframe>) -> Result<Self> {
        Self::new(keyframes)
    }
}

impl From<Curve> for Vec<Keyframe> {
    fn from(curve: Curve) -> Self {
        curve.keyframes.into_vec()
    }
}
