//! Pushes shadow-related parameter fields into a light's shadow options

use crate::scene::Light;

use super::params::SandboxParameters;

/// Copy the shadow fields owned by the parameter store into the light.
///
/// Read-modify-write: the light's current options are read first so
/// host-managed fields (map size, cascade count) survive; the record is
/// never rebuilt from scratch.
pub fn apply_shadow_options(light: &mut impl Light, params: &SandboxParameters) {
    let mut options = light.shadow_options().clone();
    options.stable = params.stable_shadow_map();
    options.normal_bias = params.normal_bias();
    options.constant_bias = params.constant_bias();
    options.polygon_offset_constant = params.polygon_offset_constant();
    options.polygon_offset_slope = params.polygon_offset_slope();
    options.screen_space_contact_shadows = params.screen_space_contact_shadows();
    options.step_count = params.step_count();
    options.max_shadow_distance = params.max_shadow_distance();
    light.set_shadow_options(options);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::DirectionalLight;

    #[test]
    fn copies_store_owned_fields() {
        let mut light = DirectionalLight::default();
        let mut params = SandboxParameters::default();
        params.set_stable_shadow_map(true);
        params.set_normal_bias(2.5);
        params.set_step_count(32);
        params.set_screen_space_contact_shadows(true);

        apply_shadow_options(&mut light, &params);

        let options = light.shadow_options();
        assert!(options.stable);
        assert_eq!(options.normal_bias, 2.5);
        assert_eq!(options.step_count, 32);
        assert!(options.screen_space_contact_shadows);
    }

    #[test]
    fn preserves_host_managed_fields() {
        let mut light = DirectionalLight::default();
        light.shadow_options.map_size = 4096;
        light.shadow_options.shadow_cascades = 4;

        apply_shadow_options(&mut light, &SandboxParameters::default());

        assert_eq!(light.shadow_options().map_size, 4096);
        assert_eq!(light.shadow_options().shadow_cascades, 4);
    }

    #[test]
    fn reapplication_is_stable() {
        let mut light = DirectionalLight::default();
        let params = SandboxParameters::default();

        apply_shadow_options(&mut light, &params);
        let first = light.shadow_options().clone();
        apply_shadow_options(&mut light, &params);
        assert_eq!(*light.shadow_options(), first);
    }
}
