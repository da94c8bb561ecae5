//! Light components and per-light shadow options

use bevy_ecs::prelude::*;
use glam::Vec3;

/// Per-light record controlling shadow-map bias, offset, and sampling.
///
/// The sandbox overwrites the fields it owns every frame; the remaining
/// fields (`map_size`, `shadow_cascades`) are managed by the host and must
/// survive a read-modify-write round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowOptions {
    pub stable: bool,
    pub normal_bias: f32,
    pub constant_bias: f32,
    pub polygon_offset_constant: f32,
    pub polygon_offset_slope: f32,
    pub screen_space_contact_shadows: bool,
    pub step_count: u32,
    pub max_shadow_distance: f32,
    /// Shadow map resolution in texels, host-managed
    pub map_size: u32,
    /// Cascade count for directional shadows, host-managed
    pub shadow_cascades: u8,
}

impl Default for ShadowOptions {
    fn default() -> Self {
        Self {
            stable: false,
            normal_bias: 1.0,
            constant_bias: 0.001,
            polygon_offset_constant: 0.5,
            polygon_offset_slope: 2.0,
            screen_space_contact_shadows: false,
            step_count: 8,
            max_shadow_distance: 0.3,
            map_size: 1024,
            shadow_cascades: 1,
        }
    }
}

/// Accessors shared by all shadow-casting light components
pub trait Light {
    fn shadow_options(&self) -> &ShadowOptions;
    fn set_shadow_options(&mut self, options: ShadowOptions);
}

/// Directional light component (the sun)
#[derive(Component, Debug, Clone)]
pub struct DirectionalLight {
    pub color: Vec3,
    /// Illuminance in lux
    pub intensity: f32,
    pub direction: Vec3,
    /// Angular radius of the sun disc, in degrees
    pub sun_angular_radius: f32,
    pub sun_halo_size: f32,
    pub sun_halo_falloff: f32,
    pub shadow_options: ShadowOptions,
}

impl Default for DirectionalLight {
    fn default() -> Self {
        Self {
            color: Vec3::new(0.98, 0.92, 0.89),
            intensity: 110_000.0,
            direction: Vec3::new(0.6, -1.0, -0.8).normalize(),
            sun_angular_radius: 1.9,
            sun_halo_size: 10.0,
            sun_halo_falloff: 80.0,
            shadow_options: ShadowOptions::default(),
        }
    }
}

impl Light for DirectionalLight {
    fn shadow_options(&self) -> &ShadowOptions {
        &self.shadow_options
    }

    fn set_shadow_options(&mut self, options: ShadowOptions) {
        self.shadow_options = options;
    }
}

/// Spot light component, positioned relative to the mesh root
#[derive(Component, Debug, Clone)]
pub struct SpotLight {
    pub color: Vec3,
    /// Luminous power in lumens
    pub intensity: f32,
    pub position: Vec3,
    /// Inner cone angle in radians; light is at full intensity inside it
    pub inner_cone_angle: f32,
    /// Outer cone angle in radians; light falls to zero at it
    pub outer_cone_angle: f32,
    pub cast_shadows: bool,
    pub shadow_options: ShadowOptions,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 200_000.0,
            position: Vec3::new(0.0, 1.0, 0.0),
            inner_cone_angle: std::f32::consts::FRAC_PI_8,
            outer_cone_angle: std::f32::consts::FRAC_PI_4,
            cast_shadows: false,
            shadow_options: ShadowOptions::default(),
        }
    }
}

impl SpotLight {
    pub fn set_cone(&mut self, inner: f32, outer: f32) {
        self.inner_cone_angle = inner;
        self.outer_cone_angle = outer;
    }
}

impl Light for SpotLight {
    fn shadow_options(&self) -> &ShadowOptions {
        &self.shadow_options
    }

    fn set_shadow_options(&mut self, options: ShadowOptions) {
        self.shadow_options = options;
    }
}
