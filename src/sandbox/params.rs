//! The mutable record of every user-adjustable sandbox field

use glam::Vec3;

use super::variant::{BlendingMode, MaterialModel};

/// All user-adjustable sandbox state.
///
/// Created once at startup with the defaults below and owned by the host;
/// the UI layer mutates it between frames through the setter half of each
/// accessor pair, and the per-frame update reads it through the getter
/// half. Fields are private so widgets bind to a local copy rather than
/// aliasing storage directly.
///
/// All color fields are sRGB unless noted; conversions to linear happen in
/// the parameter binder. Numeric ranges are enforced by the input widgets,
/// not re-validated here.
#[derive(Debug, Clone)]
pub struct SandboxParameters {
    // Material
    material_model: MaterialModel,
    blending_mode: BlendingMode,
    base_color: Vec3,
    alpha: f32,
    roughness: f32,
    metallic: f32,
    reflectance: f32,
    clear_coat: f32,
    clear_coat_roughness: f32,
    anisotropy: f32,
    glossiness: f32,
    specular_color: Vec3,
    subsurface_color: Vec3,
    subsurface_power: f32,
    sheen_color: Vec3,
    thickness: f32,
    ior: f32,
    transmission: f32,
    transmittance_color: Vec3,
    distance: f32,
    ssr: bool,
    emissive_color: Vec3,
    emissive_ev: f32,
    emissive_exposure_weight: f32,
    specular_aa_variance: f32,
    specular_aa_threshold: f32,

    // Object
    cast_shadows: bool,

    // Directional light
    directional_light_enabled: bool,
    light_color: Vec3,
    light_intensity: f32,
    light_direction: Vec3,
    sun_angular_radius: f32,
    sun_halo_size: f32,
    sun_halo_falloff: f32,
    screen_space_contact_shadows: bool,
    step_count: u32,
    max_shadow_distance: f32,

    // Spot light
    spot_light_enabled: bool,
    spot_light_position: Vec3,
    spot_light_color: Vec3,
    spot_light_cast_shadows: bool,
    spot_light_intensity: f32,
    spot_light_cone_angle: f32,
    spot_light_cone_fade: f32,

    // Shadow map tuning
    stable_shadow_map: bool,
    normal_bias: f32,
    constant_bias: f32,
    polygon_offset_constant: f32,
    polygon_offset_slope: f32,
}

impl Default for SandboxParameters {
    fn default() -> Self {
        Self {
            material_model: MaterialModel::Lit,
            blending_mode: BlendingMode::Opaque,
            base_color: Vec3::splat(0.69),
            alpha: 1.0,
            roughness: 0.6,
            metallic: 0.0,
            reflectance: 0.5,
            clear_coat: 0.0,
            clear_coat_roughness: 0.0,
            anisotropy: 0.0,
            glossiness: 0.0,
            specular_color: Vec3::ZERO,
            subsurface_color: Vec3::ZERO,
            subsurface_power: 12.234,
            sheen_color: Vec3::new(0.83, 0.0, 0.0),
            thickness: 1.0,
            ior: 1.5,
            transmission: 1.0,
            transmittance_color: Vec3::ONE,
            distance: 1.0,
            ssr: false,
            emissive_color: Vec3::ZERO,
            emissive_ev: 0.0,
            emissive_exposure_weight: 1.0,
            specular_aa_variance: 0.0,
            specular_aa_threshold: 0.0,

            cast_shadows: true,

            directional_light_enabled: true,
            light_color: Vec3::new(0.98, 0.92, 0.89),
            light_intensity: 110_000.0,
            light_direction: Vec3::new(0.6, -1.0, -0.8).normalize(),
            sun_angular_radius: 1.9,
            sun_halo_size: 10.0,
            sun_halo_falloff: 80.0,
            screen_space_contact_shadows: false,
            step_count: 8,
            max_shadow_distance: 0.3,

            spot_light_enabled: false,
            spot_light_position: Vec3::new(0.0, 1.0, 0.0),
            spot_light_color: Vec3::ONE,
            spot_light_cast_shadows: false,
            spot_light_intensity: 200_000.0,
            spot_light_cone_angle: std::f32::consts::FRAC_PI_4,
            spot_light_cone_fade: 0.5,

            stable_shadow_map: false,
            normal_bias: 1.0,
            constant_bias: 0.001,
            polygon_offset_constant: 0.5,
            polygon_offset_slope: 2.0,
        }
    }
}

impl SandboxParameters {
    pub fn new() -> Self {
        Self::default()
    }

    // Material

    pub fn material_model(&self) -> MaterialModel {
        self.material_model
    }
    pub fn set_material_model(&mut self, model: MaterialModel) {
        self.material_model = model;
    }

    pub fn blending_mode(&self) -> BlendingMode {
        self.blending_mode
    }
    pub fn set_blending_mode(&mut self, blending: BlendingMode) {
        self.blending_mode = blending;
    }

    pub fn base_color(&self) -> Vec3 {
        self.base_color
    }
    pub fn set_base_color(&mut self, color: Vec3) {
        self.base_color = color;
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }
    pub fn set_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    pub fn roughness(&self) -> f32 {
        self.roughness
    }
    pub fn set_roughness(&mut self, roughness: f32) {
        self.roughness = roughness;
    }

    pub fn metallic(&self) -> f32 {
        self.metallic
    }
    pub fn set_metallic(&mut self, metallic: f32) {
        self.metallic = metallic;
    }

    pub fn reflectance(&self) -> f32 {
        self.reflectance
    }
    pub fn set_reflectance(&mut self, reflectance: f32) {
        self.reflectance = reflectance;
    }

    pub fn clear_coat(&self) -> f32 {
        self.clear_coat
    }
    pub fn set_clear_coat(&mut self, clear_coat: f32) {
        self.clear_coat = clear_coat;
    }

    pub fn clear_coat_roughness(&self) -> f32 {
        self.clear_coat_roughness
    }
    pub fn set_clear_coat_roughness(&mut self, roughness: f32) {
        self.clear_coat_roughness = roughness;
    }

    pub fn anisotropy(&self) -> f32 {
        self.anisotropy
    }
    pub fn set_anisotropy(&mut self, anisotropy: f32) {
        self.anisotropy = anisotropy;
    }

    pub fn glossiness(&self) -> f32 {
        self.glossiness
    }
    pub fn set_glossiness(&mut self, glossiness: f32) {
        self.glossiness = glossiness;
    }

    pub fn specular_color(&self) -> Vec3 {
        self.specular_color
    }
    pub fn set_specular_color(&mut self, color: Vec3) {
        self.specular_color = color;
    }

    pub fn subsurface_color(&self) -> Vec3 {
        self.subsurface_color
    }
    pub fn set_subsurface_color(&mut self, color: Vec3) {
        self.subsurface_color = color;
    }

    pub fn subsurface_power(&self) -> f32 {
        self.subsurface_power
    }
    pub fn set_subsurface_power(&mut self, power: f32) {
        self.subsurface_power = power;
    }

    pub fn sheen_color(&self) -> Vec3 {
        self.sheen_color
    }
    pub fn set_sheen_color(&mut self, color: Vec3) {
        self.sheen_color = color;
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }
    pub fn set_thickness(&mut self, thickness: f32) {
        self.thickness = thickness;
    }

    pub fn ior(&self) -> f32 {
        self.ior
    }
    pub fn set_ior(&mut self, ior: f32) {
        self.ior = ior;
    }

    pub fn transmission(&self) -> f32 {
        self.transmission
    }
    pub fn set_transmission(&mut self, transmission: f32) {
        self.transmission = transmission;
    }

    pub fn transmittance_color(&self) -> Vec3 {
        self.transmittance_color
    }
    pub fn set_transmittance_color(&mut self, color: Vec3) {
        self.transmittance_color = color;
    }

    /// Absorption distance for refractive blending, in world units
    pub fn distance(&self) -> f32 {
        self.distance
    }
    pub fn set_distance(&mut self, distance: f32) {
        self.distance = distance;
    }

    pub fn screen_space_refraction(&self) -> bool {
        self.ssr
    }
    pub fn set_screen_space_refraction(&mut self, ssr: bool) {
        self.ssr = ssr;
    }

    pub fn emissive_color(&self) -> Vec3 {
        self.emissive_color
    }
    pub fn set_emissive_color(&mut self, color: Vec3) {
        self.emissive_color = color;
    }

    /// Emissive intensity as an EV100 exposure value
    pub fn emissive_ev(&self) -> f32 {
        self.emissive_ev
    }
    pub fn set_emissive_ev(&mut self, ev: f32) {
        self.emissive_ev = ev;
    }

    pub fn emissive_exposure_weight(&self) -> f32 {
        self.emissive_exposure_weight
    }
    pub fn set_emissive_exposure_weight(&mut self, weight: f32) {
        self.emissive_exposure_weight = weight;
    }

    pub fn specular_aa_variance(&self) -> f32 {
        self.specular_aa_variance
    }
    pub fn set_specular_aa_variance(&mut self, variance: f32) {
        self.specular_aa_variance = variance;
    }

    pub fn specular_aa_threshold(&self) -> f32 {
        self.specular_aa_threshold
    }
    pub fn set_specular_aa_threshold(&mut self, threshold: f32) {
        self.specular_aa_threshold = threshold;
    }

    // Object

    pub fn cast_shadows(&self) -> bool {
        self.cast_shadows
    }
    pub fn set_cast_shadows(&mut self, cast: bool) {
        self.cast_shadows = cast;
    }

    // Directional light

    pub fn directional_light_enabled(&self) -> bool {
        self.directional_light_enabled
    }
    pub fn set_directional_light_enabled(&mut self, enabled: bool) {
        self.directional_light_enabled = enabled;
    }

    pub fn light_color(&self) -> Vec3 {
        self.light_color
    }
    pub fn set_light_color(&mut self, color: Vec3) {
        self.light_color = color;
    }

    /// Sun illuminance in lux
    pub fn light_intensity(&self) -> f32 {
        self.light_intensity
    }
    pub fn set_light_intensity(&mut self, intensity: f32) {
        self.light_intensity = intensity;
    }

    pub fn light_direction(&self) -> Vec3 {
        self.light_direction
    }
    pub fn set_light_direction(&mut self, direction: Vec3) {
        self.light_direction = direction;
    }

    pub fn sun_angular_radius(&self) -> f32 {
        self.sun_angular_radius
    }
    pub fn set_sun_angular_radius(&mut self, radius: f32) {
        self.sun_angular_radius = radius;
    }

    pub fn sun_halo_size(&self) -> f32 {
        self.sun_halo_size
    }
    pub fn set_sun_halo_size(&mut self, size: f32) {
        self.sun_halo_size = size;
    }

    pub fn sun_halo_falloff(&self) -> f32 {
        self.sun_halo_falloff
    }
    pub fn set_sun_halo_falloff(&mut self, falloff: f32) {
        self.sun_halo_falloff = falloff;
    }

    pub fn screen_space_contact_shadows(&self) -> bool {
        self.screen_space_contact_shadows
    }
    pub fn set_screen_space_contact_shadows(&mut self, enabled: bool) {
        self.screen_space_contact_shadows = enabled;
    }

    pub fn step_count(&self) -> u32 {
        self.step_count
    }
    pub fn set_step_count(&mut self, count: u32) {
        self.step_count = count;
    }

    pub fn max_shadow_distance(&self) -> f32 {
        self.max_shadow_distance
    }
    pub fn set_max_shadow_distance(&mut self, distance: f32) {
        self.max_shadow_distance = distance;
    }

    // Spot light

    pub fn spot_light_enabled(&self) -> bool {
        self.spot_light_enabled
    }
    pub fn set_spot_light_enabled(&mut self, enabled: bool) {
        self.spot_light_enabled = enabled;
    }

    pub fn spot_light_position(&self) -> Vec3 {
        self.spot_light_position
    }
    pub fn set_spot_light_position(&mut self, position: Vec3) {
        self.spot_light_position = position;
    }

    pub fn spot_light_color(&self) -> Vec3 {
        self.spot_light_color
    }
    pub fn set_spot_light_color(&mut self, color: Vec3) {
        self.spot_light_color = color;
    }

    pub fn spot_light_cast_shadows(&self) -> bool {
        self.spot_light_cast_shadows
    }
    pub fn set_spot_light_cast_shadows(&mut self, cast: bool) {
        self.spot_light_cast_shadows = cast;
    }

    /// Spot luminous power in lumens
    pub fn spot_light_intensity(&self) -> f32 {
        self.spot_light_intensity
    }
    pub fn set_spot_light_intensity(&mut self, intensity: f32) {
        self.spot_light_intensity = intensity;
    }

    /// Outer cone angle in radians
    pub fn spot_light_cone_angle(&self) -> f32 {
        self.spot_light_cone_angle
    }
    pub fn set_spot_light_cone_angle(&mut self, angle: f32) {
        self.spot_light_cone_angle = angle;
    }

    /// Inner cone angle as a fraction of the outer angle
    pub fn spot_light_cone_fade(&self) -> f32 {
        self.spot_light_cone_fade
    }
    pub fn set_spot_light_cone_fade(&mut self, fade: f32) {
        self.spot_light_cone_fade = fade;
    }

    // Shadow map tuning

    pub fn stable_shadow_map(&self) -> bool {
        self.stable_shadow_map
    }
    pub fn set_stable_shadow_map(&mut self, stable: bool) {
        self.stable_shadow_map = stable;
    }

    pub fn normal_bias(&self) -> f32 {
        self.normal_bias
    }
    pub fn set_normal_bias(&mut self, bias: f32) {
        self.normal_bias = bias;
    }

    pub fn constant_bias(&self) -> f32 {
        self.constant_bias
    }
    pub fn set_constant_bias(&mut self, bias: f32) {
        self.constant_bias = bias;
    }

    pub fn polygon_offset_constant(&self) -> f32 {
        self.polygon_offset_constant
    }
    pub fn set_polygon_offset_constant(&mut self, offset: f32) {
        self.polygon_offset_constant = offset;
    }

    pub fn polygon_offset_slope(&self) -> f32 {
        self.polygon_offset_slope
    }
    pub fn set_polygon_offset_slope(&mut self, offset: f32) {
        self.polygon_offset_slope = offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_lit_opaque() {
        let params = SandboxParameters::default();
        assert_eq!(params.material_model(), MaterialModel::Lit);
        assert_eq!(params.blending_mode(), BlendingMode::Opaque);
        assert!(!params.screen_space_refraction());
        assert!(params.directional_light_enabled());
        assert!(!params.spot_light_enabled());
    }

    #[test]
    fn setters_round_trip() {
        let mut params = SandboxParameters::default();
        params.set_roughness(0.25);
        params.set_material_model(MaterialModel::Cloth);
        params.set_sheen_color(Vec3::new(0.1, 0.2, 0.3));
        assert_eq!(params.roughness(), 0.25);
        assert_eq!(params.material_model(), MaterialModel::Cloth);
        assert_eq!(params.sheen_color(), Vec3::new(0.1, 0.2, 0.3));
    }
}
