//! The sandbox core: parameter store, variant resolution, parameter
//! binding, and per-frame light reconciliation

mod binder;
mod membership;
mod params;
mod shadow;
mod variant;

pub use binder::apply_parameters;
pub use membership::LightMembership;
pub use params::SandboxParameters;
pub use shadow::apply_shadow_options;
pub use variant::{resolve_variant, BlendingMode, MaterialModel, MaterialVariant};

use bevy_ecs::entity::Entity;
use bevy_ecs::world::World;
use thiserror::Error;

use crate::resources::MaterialSuite;
use crate::scene::{DirectionalLight, Scene, SpotLight};

/// Errors surfaced at the host boundary.
///
/// The core itself is total; the only fallible step is dereferencing the
/// host-owned light entities during the frame update.
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("light entity {0:?} is missing its {1} component")]
    MissingLightComponent(Entity, &'static str),
}

/// Per-frame driver tying the core components together.
///
/// Owns only the membership bookkeeping for the two lights; the entities
/// themselves live in the host's [`World`] and the material instances in
/// the host's [`MaterialSuite`], both for the process lifetime.
pub struct Sandbox {
    sun: LightMembership,
    spot: LightMembership,
}

impl Sandbox {
    /// Spawn the two light entities into the host world, both detached
    pub fn new(world: &mut World) -> Self {
        let sun = world.spawn(DirectionalLight::default()).id();
        let spot = world.spawn(SpotLight::default()).id();
        log::info!("sandbox: spawned lights sun={sun:?} spot={spot:?}");
        Self {
            sun: LightMembership::detached(sun),
            spot: LightMembership::detached(spot),
        }
    }

    pub fn sun_entity(&self) -> Entity {
        self.sun.entity()
    }

    pub fn spot_entity(&self) -> Entity {
        self.spot.entity()
    }

    /// One-time setup: attach lights that start enabled.
    ///
    /// Runs through the same reconciliation path as every later toggle, so
    /// the initial attach is an ordinary detached→attached transition.
    pub fn setup(&mut self, params: &SandboxParameters, scene: &mut Scene) {
        self.sun.reconcile(params.directional_light_enabled(), scene);
        self.spot.reconcile(params.spot_light_enabled(), scene);
    }

    /// Run one frame of the core, after the UI layer has finished mutating
    /// `params`.
    ///
    /// Resolves the active variant, rebinds its full parameter schema,
    /// reconciles light membership, and pushes light and shadow settings.
    /// Returns the resolved variant so the host can assign its instance to
    /// the renderables.
    pub fn update(
        &mut self,
        params: &SandboxParameters,
        suite: &mut MaterialSuite,
        scene: &mut Scene,
        world: &mut World,
    ) -> Result<MaterialVariant, SandboxError> {
        let variant = resolve_variant(
            params.material_model(),
            params.blending_mode(),
            params.screen_space_refraction(),
        );
        apply_parameters(variant, params, suite);

        self.sun.reconcile(params.directional_light_enabled(), scene);
        self.spot.reconcile(params.spot_light_enabled(), scene);

        let mut sun = world
            .get_mut::<DirectionalLight>(self.sun.entity())
            .ok_or(SandboxError::MissingLightComponent(
                self.sun.entity(),
                "DirectionalLight",
            ))?;
        sun.color = params.light_color();
        sun.intensity = params.light_intensity();
        sun.direction = params.light_direction();
        sun.sun_angular_radius = params.sun_angular_radius();
        sun.sun_halo_size = params.sun_halo_size();
        sun.sun_halo_falloff = params.sun_halo_falloff();
        apply_shadow_options(&mut *sun, params);

        let mut spot = world
            .get_mut::<SpotLight>(self.spot.entity())
            .ok_or(SandboxError::MissingLightComponent(
                self.spot.entity(),
                "SpotLight",
            ))?;
        spot.color = params.spot_light_color();
        spot.intensity = params.spot_light_intensity();
        spot.position = params.spot_light_position();
        spot.cast_shadows = params.spot_light_cast_shadows();
        spot.set_cone(
            params.spot_light_cone_angle() * params.spot_light_cone_fade(),
            params.spot_light_cone_angle(),
        );

        Ok(variant)
    }
}
