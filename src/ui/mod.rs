//! egui parameter panel
//!
//! The UI layer owns all mutation of [`SandboxParameters`]: every widget
//! reads the current value through a getter, edits a local copy, and writes
//! it back through the setter. The host owns the egui context and calls
//! [`parameters_window`] once per frame, before the sandbox update runs.

use egui::{CollapsingHeader, ComboBox, DragValue, Slider};
use glam::Vec3;

use crate::sandbox::{BlendingMode, MaterialModel, SandboxParameters};

/// Show the full parameters window
pub fn parameters_window(ctx: &egui::Context, params: &mut SandboxParameters) {
    egui::Window::new("Parameters").show(ctx, |ui| {
        material_section(ui, params);
        shading_aa_section(ui, params);
        object_section(ui, params);
        directional_light_section(ui, params);
        spot_light_section(ui, params);
        shadow_debug_section(ui, params);
    });
}

fn color_edit(ui: &mut egui::Ui, label: &str, color: Vec3) -> Vec3 {
    let mut rgb = color.to_array();
    ui.horizontal(|ui| {
        ui.color_edit_button_rgb(&mut rgb);
        ui.label(label);
    });
    Vec3::from(rgb)
}

fn slider(ui: &mut egui::Ui, label: &str, value: f32, range: std::ops::RangeInclusive<f32>) -> f32 {
    let mut v = value;
    ui.add(Slider::new(&mut v, range).text(label));
    v
}

fn material_section(ui: &mut egui::Ui, params: &mut SandboxParameters) {
    CollapsingHeader::new("Material")
        .default_open(true)
        .show(ui, |ui| {
            let mut model = params.material_model();
            ComboBox::from_label("Model")
                .selected_text(model.label())
                .show_ui(ui, |ui| {
                    for candidate in MaterialModel::ALL {
                        ui.selectable_value(&mut model, candidate, candidate.label());
                    }
                });
            params.set_material_model(model);

            if model == MaterialModel::Lit {
                let mut blending = params.blending_mode();
                ComboBox::from_label("Blending")
                    .selected_text(blending.label())
                    .show_ui(ui, |ui| {
                        for candidate in BlendingMode::ALL {
                            ui.selectable_value(&mut blending, candidate, candidate.label());
                        }
                    });
                params.set_blending_mode(blending);
            }

            params.set_base_color(color_edit(ui, "Base color", params.base_color()));

            let blending = params.blending_mode();
            let refractive = blending.has_refraction();

            if model != MaterialModel::Unlit {
                if blending == BlendingMode::Transparent || blending == BlendingMode::Fade {
                    params.set_alpha(slider(ui, "Alpha", params.alpha(), 0.0..=1.0));
                }

                if model != MaterialModel::SpecularGlossiness {
                    params.set_roughness(slider(ui, "Roughness", params.roughness(), 0.0..=1.0));
                } else {
                    params.set_glossiness(slider(ui, "Glossiness", params.glossiness(), 0.0..=1.0));
                    params.set_specular_color(color_edit(
                        ui,
                        "Specular color",
                        params.specular_color(),
                    ));
                }

                if model != MaterialModel::Cloth && model != MaterialModel::SpecularGlossiness {
                    if !refractive {
                        params.set_metallic(slider(ui, "Metallic", params.metallic(), 0.0..=1.0));
                        params.set_reflectance(slider(
                            ui,
                            "Reflectance",
                            params.reflectance(),
                            0.0..=1.0,
                        ));
                    }
                }

                if model != MaterialModel::Cloth && model != MaterialModel::Subsurface {
                    params.set_clear_coat(slider(ui, "Clear coat", params.clear_coat(), 0.0..=1.0));
                    params.set_clear_coat_roughness(slider(
                        ui,
                        "Clear coat roughness",
                        params.clear_coat_roughness(),
                        0.0..=1.0,
                    ));
                    params.set_anisotropy(slider(
                        ui,
                        "Anisotropy",
                        params.anisotropy(),
                        -1.0..=1.0,
                    ));
                }

                if model == MaterialModel::Subsurface {
                    params.set_thickness(slider(ui, "Thickness", params.thickness(), 0.0..=1.0));
                    params.set_subsurface_power(slider(
                        ui,
                        "Subsurface power",
                        params.subsurface_power(),
                        1.0..=24.0,
                    ));
                    params.set_subsurface_color(color_edit(
                        ui,
                        "Subsurface color",
                        params.subsurface_color(),
                    ));
                }

                if model == MaterialModel::Cloth {
                    params.set_sheen_color(color_edit(ui, "Sheen color", params.sheen_color()));
                    params.set_subsurface_color(color_edit(
                        ui,
                        "Subsurface color",
                        params.subsurface_color(),
                    ));
                }

                if refractive {
                    params.set_ior(slider(ui, "IOR", params.ior(), 1.0..=3.0));
                    params.set_transmission(slider(
                        ui,
                        "Transmission",
                        params.transmission(),
                        0.0..=1.0,
                    ));
                    params.set_thickness(slider(ui, "Thickness", params.thickness(), 0.0..=1.0));
                    params.set_transmittance_color(color_edit(
                        ui,
                        "Transmittance",
                        params.transmittance_color(),
                    ));
                    params.set_distance(slider(ui, "Distance", params.distance(), 0.0..=4.0));

                    let mut ssr = params.screen_space_refraction();
                    ui.checkbox(&mut ssr, "Screen space refraction");
                    params.set_screen_space_refraction(ssr);
                }
            }

            params.set_emissive_color(color_edit(ui, "Emissive color", params.emissive_color()));
            params.set_emissive_ev(slider(ui, "Emissive EV", params.emissive_ev(), -24.0..=24.0));
            params.set_emissive_exposure_weight(slider(
                ui,
                "Exposure weight",
                params.emissive_exposure_weight(),
                0.0..=1.0,
            ));
        });
}

fn shading_aa_section(ui: &mut egui::Ui, params: &mut SandboxParameters) {
    CollapsingHeader::new("Shading AA").show(ui, |ui| {
        params.set_specular_aa_variance(slider(
            ui,
            "Variance",
            params.specular_aa_variance(),
            0.0..=1.0,
        ));
        params.set_specular_aa_threshold(slider(
            ui,
            "Threshold",
            params.specular_aa_threshold(),
            0.0..=1.0,
        ));
    });
}

fn object_section(ui: &mut egui::Ui, params: &mut SandboxParameters) {
    CollapsingHeader::new("Object").show(ui, |ui| {
        let mut cast = params.cast_shadows();
        ui.checkbox(&mut cast, "Cast shadows");
        params.set_cast_shadows(cast);
    });
}

fn directional_light_section(ui: &mut egui::Ui, params: &mut SandboxParameters) {
    CollapsingHeader::new("Directional Light").show(ui, |ui| {
        let mut enabled = params.directional_light_enabled();
        ui.checkbox(&mut enabled, "Enabled");
        params.set_directional_light_enabled(enabled);

        params.set_light_color(color_edit(ui, "Color", params.light_color()));
        params.set_light_intensity(slider(
            ui,
            "Lux",
            params.light_intensity(),
            0.0..=150_000.0,
        ));
        params.set_sun_angular_radius(slider(
            ui,
            "Sun size",
            params.sun_angular_radius(),
            0.1..=10.0,
        ));
        params.set_sun_halo_size(slider(ui, "Halo size", params.sun_halo_size(), 1.01..=40.0));
        params.set_sun_halo_falloff(slider(
            ui,
            "Halo falloff",
            params.sun_halo_falloff(),
            0.0..=2048.0,
        ));

        let mut direction = params.light_direction();
        ui.horizontal(|ui| {
            ui.add(DragValue::new(&mut direction.x).speed(0.01).prefix("x: "));
            ui.add(DragValue::new(&mut direction.y).speed(0.01).prefix("y: "));
            ui.add(DragValue::new(&mut direction.z).speed(0.01).prefix("z: "));
            ui.label("Direction");
        });
        if direction.length_squared() > 0.0 {
            params.set_light_direction(direction.normalize());
        }

        CollapsingHeader::new("Contact Shadows").show(ui, |ui| {
            let mut enabled = params.screen_space_contact_shadows();
            ui.checkbox(&mut enabled, "Enabled");
            params.set_screen_space_contact_shadows(enabled);

            let mut steps = params.step_count();
            ui.add(Slider::new(&mut steps, 0..=255).text("Steps"));
            params.set_step_count(steps);

            params.set_max_shadow_distance(slider(
                ui,
                "Distance",
                params.max_shadow_distance(),
                0.0..=10.0,
            ));
        });
    });
}

fn spot_light_section(ui: &mut egui::Ui, params: &mut SandboxParameters) {
    CollapsingHeader::new("Spot Light").show(ui, |ui| {
        let mut enabled = params.spot_light_enabled();
        ui.checkbox(&mut enabled, "Enabled");
        params.set_spot_light_enabled(enabled);

        let mut position = params.spot_light_position();
        ui.horizontal(|ui| {
            for (axis, v) in [
                ("x: ", &mut position.x),
                ("y: ", &mut position.y),
                ("z: ", &mut position.z),
            ] {
                ui.add(DragValue::new(v).speed(0.05).range(-5.0..=5.0).prefix(axis));
            }
            ui.label("Position");
        });
        params.set_spot_light_position(position);

        params.set_spot_light_color(color_edit(ui, "Color", params.spot_light_color()));

        let mut cast = params.spot_light_cast_shadows();
        ui.checkbox(&mut cast, "Cast shadows");
        params.set_spot_light_cast_shadows(cast);

        params.set_spot_light_intensity(slider(
            ui,
            "Lumens",
            params.spot_light_intensity(),
            0.0..=1_000_000.0,
        ));

        let degrees = slider(
            ui,
            "Cone angle",
            params.spot_light_cone_angle().to_degrees(),
            0.0..=90.0,
        );
        params.set_spot_light_cone_angle(degrees.to_radians());

        params.set_spot_light_cone_fade(slider(
            ui,
            "Cone fade",
            params.spot_light_cone_fade(),
            0.0..=1.0,
        ));
    });
}

fn shadow_debug_section(ui: &mut egui::Ui, params: &mut SandboxParameters) {
    CollapsingHeader::new("Shadow Debug").show(ui, |ui| {
        let mut stable = params.stable_shadow_map();
        ui.checkbox(&mut stable, "Stable shadow map");
        params.set_stable_shadow_map(stable);

        params.set_normal_bias(slider(ui, "Normal bias", params.normal_bias(), 0.0..=4.0));
        params.set_constant_bias(slider(
            ui,
            "Constant bias",
            params.constant_bias(),
            0.0..=1.0,
        ));
        params.set_polygon_offset_slope(slider(
            ui,
            "Polygon offset scale",
            params.polygon_offset_slope(),
            0.0..=10.0,
        ));
        params.set_polygon_offset_constant(slider(
            ui,
            "Polygon offset constant",
            params.polygon_offset_constant(),
            0.0..=10.0,
        ));
    });
}
