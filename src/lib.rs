//! Material Sandbox - interactive exploration of physically based material models
//!
//! The crate implements the decision core of a material sandbox:
//! - **Variant resolution**: maps the user-selected material model, blending
//!   mode, and screen-space refraction flag to one of eleven preallocated
//!   shader variants
//! - **Parameter binding**: rewrites the resolved variant's full parameter
//!   schema every frame, with sRGB→linear and photometric conversions
//! - **Light membership**: reconciles enable toggles for the directional and
//!   spot lights against scene attachment, one add/remove per transition
//! - **Shadow options**: read-modify-write push of shadow tuning fields into
//!   the lights
//!
//! The host owns the window, renderer, meshes, the ECS [`World`] the light
//! entities live in, and the egui context; each frame it runs the
//! [`ui::parameters_window`] panel and then [`sandbox::Sandbox::update`],
//! in that order, on one thread.

pub mod color;
pub mod resources;
pub mod sandbox;
pub mod scene;
pub mod ui;

// Re-export Bevy ECS prelude for users
pub use bevy_ecs::prelude::*;

pub use resources::{MaterialInstance, MaterialSuite, ParameterValue};
pub use sandbox::{
    apply_parameters, apply_shadow_options, resolve_variant, BlendingMode, LightMembership,
    MaterialModel, MaterialVariant, Sandbox, SandboxError, SandboxParameters,
};
pub use scene::{DirectionalLight, Light, Scene, ShadowOptions, SpotLight};
