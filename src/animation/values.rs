use glam::{Quat, Vec3, Vec4};

/// Values a channel can blend between its start and end configuration.
///
/// `interpolate_cubic` is a Hermite segment with tangents expressed per unit
/// of curve time: `t` is the normalized position inside the segment and `dt`
/// the segment duration, and tangents are scaled by `dt` before blending.
pub trait Interpolatable: Copy + Clone + Sized {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self;

    fn interpolate_cubic(
        v0: Self,
        out_tangent0: Self,
        in_tangent1: Self,
        v1: Self,
        t: f32,
        dt: f32,
    ) -> Self;
}

/// Hermite basis weights `[s0, s1, s2, s3]` for value0, tangent0, value1, tangent1.
#[inline]
fn hermite_basis(t: f32) -> [f32; 4] {
    let t2 = t * t;
    let t3 = t2 * t;

    let s2 = -2.0 * t3 + 3.0 * t2;
    let s3 = t3 - t2;
    let s0 = 1.0 - s2;
    let s1 = s3 - t2 + t;

    [s0, s1, s2, s3]
}

impl Interpolatable for f32 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start + (end - start) * t
    }

    fn interpolate_cubic(v0: Self, out_tangent0: Self, in_tangent1: Self, v1: Self, t: f32, dt: f32) -> Self {
        let [s0, s1, s2, s3] = hermite_basis(t);

        let m0 = out_tangent0 * dt;
        let m1 = in_tangent1 * dt;

        s0 * v0 + s1 * m0 + s2 * v1 + s3 * m1
    }
}

impl Interpolatable for Vec3 {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.lerp(end, t)
    }

    fn interpolate_cubic(v0: Self, out_tangent0: Self, in_tangent1: Self, v1: Self, t: f32, dt: f32) -> Self {
        let [s0, s1, s2, s3] = hermite_basis(t);

        let m0 = out_tangent0 * dt;
        let m1 = in_tangent1 * dt;

        v0 * s0 + m0 * s1 + v1 * s2 + m1 * s3
    }
}

impl Interpolatable for Quat {
    fn interpolate_linear(start: Self, end: Self, t: f32) -> Self {
        start.slerp(end, t)
    }

    fn interpolate_cubic(v0: Self, out_tangent0: Self, in_tangent1: Self, v1: Self, t: f32, dt: f32) -> Self {
        let [s0, s1, s2, s3] = hermite_basis(t);

        let m0 = Vec4::from(out_tangent0) * dt;
        let m1 = Vec4::from(in_tangent1) * dt;
        let blended = Vec4::from(v0) * s0 + m0 * s1 + Vec4::from(v1) * s2 + m1 * s3;

        Quat::from_vec4(blended).normalize()
    }
}
