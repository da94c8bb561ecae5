//! Color space and photometric conversions used by the parameter binder

use glam::Vec3;

/// Convert one sRGB channel to linear space
#[inline]
fn channel_to_linear(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert an sRGB color to linear space (per-channel EOTF)
#[inline]
pub fn srgb_to_linear(srgb: Vec3) -> Vec3 {
    Vec3::new(
        channel_to_linear(srgb.x),
        channel_to_linear(srgb.y),
        channel_to_linear(srgb.z),
    )
}

/// Luminance in cd/m^2 of an EV100 exposure value.
///
/// Uses the photometric calibration constant K = 12.5, which gives
/// `L = 2^EV100 * K / 100 = 2^(EV100 - 3)`.
#[inline]
pub fn ev100_to_luminance(ev100: f32) -> f32 {
    (ev100 - 3.0).exp2()
}

/// Absorption coefficient that produces the given linear transmittance
/// color after traveling `distance` through a medium (Beer-Lambert).
///
/// Inputs are clamped away from zero to keep the logarithm and the
/// division defined.
#[inline]
pub fn absorption_at_distance(transmittance: Vec3, distance: f32) -> Vec3 {
    let t = transmittance.clamp(Vec3::splat(1e-5), Vec3::ONE);
    -Vec3::new(t.x.ln(), t.y.ln(), t.z.ln()) / distance.max(1e-5)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-6;

    #[test]
    fn srgb_endpoints() {
        assert_eq!(srgb_to_linear(Vec3::ZERO), Vec3::ZERO);
        let white = srgb_to_linear(Vec3::ONE);
        assert!((white - Vec3::ONE).abs().max_element() < EPS);
    }

    #[test]
    fn srgb_midtone() {
        // sRGB 0.5 is roughly linear 0.2140
        let mid = srgb_to_linear(Vec3::splat(0.5)).x;
        assert!((mid - 0.2140).abs() < 1e-3);
    }

    #[test]
    fn luminance_at_calibration_point() {
        // EV100 = 3 is 1 cd/m^2 under K = 12.5
        assert!((ev100_to_luminance(3.0) - 1.0).abs() < EPS);
        assert!((ev100_to_luminance(4.0) - 2.0).abs() < EPS);
        assert!((ev100_to_luminance(0.0) - 0.125).abs() < EPS);
    }

    #[test]
    fn unit_transmittance_absorbs_nothing() {
        let a = absorption_at_distance(Vec3::ONE, 1.0);
        assert!(a.abs().max_element() < EPS);
    }

    #[test]
    fn absorption_scales_inversely_with_distance() {
        let near = absorption_at_distance(Vec3::splat(0.5), 1.0);
        let far = absorption_at_distance(Vec3::splat(0.5), 2.0);
        assert!((near - far * 2.0).abs().max_element() < EPS);
        // -ln(0.5) = ln(2)
        assert!((near.x - std::f32::consts::LN_2).abs() < EPS);
    }

    #[test]
    fn zero_distance_stays_finite() {
        let a = absorption_at_distance(Vec3::splat(0.5), 0.0);
        assert!(a.is_finite());
    }
}
