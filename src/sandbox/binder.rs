//! Writes the per-variant parameter schema into the resolved material instance

use glam::Vec4;

use crate::color::{absorption_at_distance, ev100_to_luminance, srgb_to_linear};
use crate::resources::MaterialSuite;

use super::params::SandboxParameters;
use super::variant::{BlendingMode, MaterialModel, MaterialVariant};

/// Write every parameter the resolved variant's schema requires.
///
/// The full schema is rewritten every frame whether or not anything changed;
/// redundant writes are cheaper than stale-parameter bugs and no
/// change-detection state is needed. Which branch runs is keyed off the
/// user-selected model and blending mode, exactly as the variant resolution
/// was. `reflectance` and the refraction trio (`absorption`, `ior`,
/// `transmission`) are mutually exclusive through the blending branch alone.
pub fn apply_parameters(
    variant: MaterialVariant,
    params: &SandboxParameters,
    suite: &mut MaterialSuite,
) {
    let model = params.material_model();
    let blending = params.blending_mode();
    let refractive = blending.has_refraction();

    let instance = suite.get_mut(variant);

    instance.set_srgb_parameter("baseColor", params.base_color());

    if model != MaterialModel::Cloth {
        // Exposure weight rides in the alpha channel; RGB is pre-scaled by
        // the luminance of the requested EV100.
        let emissive = srgb_to_linear(params.emissive_color())
            * ev100_to_luminance(params.emissive_ev());
        instance.set_parameter(
            "emissive",
            Vec4::from((emissive, params.emissive_exposure_weight())),
        );
    }

    if model == MaterialModel::Lit {
        instance.set_parameter("roughness", params.roughness());
        instance.set_parameter("metallic", params.metallic());
        if !refractive {
            instance.set_parameter("reflectance", params.reflectance());
        }
        instance.set_parameter("clearCoat", params.clear_coat());
        instance.set_parameter("clearCoatRoughness", params.clear_coat_roughness());
        instance.set_parameter("anisotropy", params.anisotropy());

        if blending != BlendingMode::Opaque {
            instance.set_parameter("alpha", params.alpha());
        }

        if refractive {
            let transmittance = srgb_to_linear(params.transmittance_color());
            instance.set_parameter(
                "absorption",
                absorption_at_distance(transmittance, params.distance()),
            );
            instance.set_parameter("ior", params.ior());
            instance.set_parameter("transmission", params.transmission());
            instance.set_parameter("thickness", params.thickness());
        }
    }

    if model == MaterialModel::SpecularGlossiness {
        instance.set_parameter("glossiness", params.glossiness());
        instance.set_parameter("specularColor", params.specular_color());
        instance.set_parameter("reflectance", params.reflectance());
        instance.set_parameter("clearCoat", params.clear_coat());
        instance.set_parameter("clearCoatRoughness", params.clear_coat_roughness());
        instance.set_parameter("anisotropy", params.anisotropy());
    }

    if model == MaterialModel::Subsurface {
        instance.set_parameter("roughness", params.roughness());
        instance.set_parameter("metallic", params.metallic());
        instance.set_parameter("reflectance", params.reflectance());
        instance.set_parameter("thickness", params.thickness());
        instance.set_parameter("subsurfacePower", params.subsurface_power());
        instance.set_srgb_parameter("subsurfaceColor", params.subsurface_color());
    }

    if model == MaterialModel::Cloth {
        instance.set_parameter("roughness", params.roughness());
        instance.set_srgb_parameter("sheenColor", params.sheen_color());
        instance.set_srgb_parameter("subsurfaceColor", params.subsurface_color());
    }

    if model != MaterialModel::Unlit {
        instance.set_specular_anti_aliasing_variance(params.specular_aa_variance());
        instance.set_specular_anti_aliasing_threshold(params.specular_aa_threshold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ParameterValue;
    use crate::sandbox::resolve_variant;
    use glam::Vec3;

    fn bind(params: &SandboxParameters) -> (MaterialVariant, MaterialSuite) {
        let variant = resolve_variant(
            params.material_model(),
            params.blending_mode(),
            params.screen_space_refraction(),
        );
        let mut suite = MaterialSuite::new();
        apply_parameters(variant, params, &mut suite);
        (variant, suite)
    }

    #[test]
    fn lit_opaque_schema() {
        let params = SandboxParameters::default();
        let (variant, suite) = bind(&params);
        assert_eq!(variant, MaterialVariant::Lit);

        let instance = suite.get(variant);
        assert_eq!(
            instance.parameter_names(),
            vec![
                "anisotropy",
                "baseColor",
                "clearCoat",
                "clearCoatRoughness",
                "emissive",
                "metallic",
                "reflectance",
                "roughness",
            ]
        );
        // Opaque never writes alpha or the refraction trio
        assert!(!instance.has_parameter("alpha"));
        assert!(!instance.has_parameter("absorption"));
        assert!(!instance.has_parameter("ior"));
        assert!(!instance.has_parameter("transmission"));
    }

    #[test]
    fn refraction_excludes_reflectance() {
        let mut params = SandboxParameters::default();
        params.set_blending_mode(BlendingMode::SolidRefraction);
        let (variant, suite) = bind(&params);
        assert_eq!(variant, MaterialVariant::SolidRefraction);

        let instance = suite.get(variant);
        assert!(!instance.has_parameter("reflectance"));
        assert!(instance.has_parameter("absorption"));
        assert!(instance.has_parameter("ior"));
        assert!(instance.has_parameter("transmission"));
        assert!(instance.has_parameter("thickness"));
        assert!(instance.has_parameter("alpha"));
    }

    #[test]
    fn cloth_schema_is_exact() {
        let mut params = SandboxParameters::default();
        params.set_material_model(MaterialModel::Cloth);
        let (variant, suite) = bind(&params);
        assert_eq!(variant, MaterialVariant::Cloth);

        let instance = suite.get(variant);
        assert_eq!(
            instance.parameter_names(),
            vec!["baseColor", "roughness", "sheenColor", "subsurfaceColor"]
        );
        assert!(!instance.has_parameter("metallic"));
        assert!(!instance.has_parameter("reflectance"));
        assert!(!instance.has_parameter("emissive"));
    }

    #[test]
    fn unlit_gets_base_color_and_emissive_but_no_aa() {
        let mut params = SandboxParameters::default();
        params.set_material_model(MaterialModel::Unlit);
        params.set_specular_aa_variance(0.5);
        let (variant, suite) = bind(&params);
        assert_eq!(variant, MaterialVariant::Unlit);

        let instance = suite.get(variant);
        assert_eq!(instance.parameter_names(), vec!["baseColor", "emissive"]);
        assert_eq!(instance.specular_anti_aliasing_variance(), 0.0);
    }

    #[test]
    fn emissive_packs_weight_and_luminance() {
        let mut params = SandboxParameters::default();
        params.set_emissive_color(Vec3::ONE);
        params.set_emissive_ev(3.0);
        params.set_emissive_exposure_weight(0.25);
        let (variant, suite) = bind(&params);

        match suite.get(variant).parameter("emissive") {
            Some(ParameterValue::Float4(v)) => {
                // EV100 = 3 is luminance 1, so linear white stays white
                assert!((v.truncate() - Vec3::ONE).abs().max_element() < 1e-5);
                assert_eq!(v.w, 0.25);
            }
            other => panic!("expected Float4, got {other:?}"),
        }
    }

    #[test]
    fn reapplication_is_idempotent() {
        let mut params = SandboxParameters::default();
        params.set_blending_mode(BlendingMode::ThinRefraction);
        params.set_screen_space_refraction(true);

        let variant = resolve_variant(
            params.material_model(),
            params.blending_mode(),
            params.screen_space_refraction(),
        );
        let mut suite = MaterialSuite::new();
        apply_parameters(variant, &params, &mut suite);
        let first: Vec<_> = suite
            .get(variant)
            .parameter_names()
            .iter()
            .map(|&n| (n, suite.get(variant).parameter(n).unwrap()))
            .collect();

        apply_parameters(variant, &params, &mut suite);
        let second: Vec<_> = suite
            .get(variant)
            .parameter_names()
            .iter()
            .map(|&n| (n, suite.get(variant).parameter(n).unwrap()))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn switching_models_leaves_other_instances_untouched() {
        let mut params = SandboxParameters::default();
        let (lit, mut suite) = bind(&params);
        params.set_material_model(MaterialModel::Subsurface);
        let variant = resolve_variant(
            params.material_model(),
            params.blending_mode(),
            params.screen_space_refraction(),
        );
        apply_parameters(variant, &params, &mut suite);

        assert!(suite.get(lit).has_parameter("metallic"));
        assert!(suite.get(variant).has_parameter("subsurfacePower"));
    }
}
