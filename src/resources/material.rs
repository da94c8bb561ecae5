//! Material instances: named shader parameter tables addressed by variant

use std::collections::HashMap;

use glam::{Vec3, Vec4};

use crate::color::srgb_to_linear;
use crate::sandbox::MaterialVariant;

/// A value stored in a material instance's parameter table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterValue {
    Float(f32),
    Float3(Vec3),
    Float4(Vec4),
}

impl From<f32> for ParameterValue {
    fn from(v: f32) -> Self {
        ParameterValue::Float(v)
    }
}

impl From<Vec3> for ParameterValue {
    fn from(v: Vec3) -> Self {
        ParameterValue::Float3(v)
    }
}

impl From<Vec4> for ParameterValue {
    fn from(v: Vec4) -> Self {
        ParameterValue::Float4(v)
    }
}

/// One preallocated shader instance for a single material variant.
///
/// The parameter table maps the literal shader parameter names
/// (`"baseColor"`, `"roughness"`, ...) to their last written values. The
/// specular anti-aliasing scalars live outside the table and have dedicated
/// setters, mirroring how the renderer consumes them.
#[derive(Debug, Clone)]
pub struct MaterialInstance {
    variant: MaterialVariant,
    parameters: HashMap<&'static str, ParameterValue>,
    specular_aa_variance: f32,
    specular_aa_threshold: f32,
}

impl MaterialInstance {
    fn new(variant: MaterialVariant) -> Self {
        Self {
            variant,
            parameters: HashMap::new(),
            specular_aa_variance: 0.0,
            specular_aa_threshold: 0.0,
        }
    }

    pub fn variant(&self) -> MaterialVariant {
        self.variant
    }

    /// Write a named parameter, overwriting any previous value
    pub fn set_parameter(&mut self, name: &'static str, value: impl Into<ParameterValue>) {
        self.parameters.insert(name, value.into());
    }

    /// Write a color parameter given in sRGB, converting to linear
    pub fn set_srgb_parameter(&mut self, name: &'static str, srgb: Vec3) {
        self.set_parameter(name, srgb_to_linear(srgb));
    }

    /// Read back a parameter, if it has ever been written
    pub fn parameter(&self, name: &str) -> Option<ParameterValue> {
        self.parameters.get(name).copied()
    }

    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters.contains_key(name)
    }

    /// Names of all parameters written so far, sorted for stable comparison
    pub fn parameter_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.parameters.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn set_specular_anti_aliasing_variance(&mut self, variance: f32) {
        self.specular_aa_variance = variance;
    }

    pub fn set_specular_anti_aliasing_threshold(&mut self, threshold: f32) {
        self.specular_aa_threshold = threshold;
    }

    pub fn specular_anti_aliasing_variance(&self) -> f32 {
        self.specular_aa_variance
    }

    pub fn specular_anti_aliasing_threshold(&self) -> f32 {
        self.specular_aa_threshold
    }
}

/// The full set of preallocated material instances, one per variant.
///
/// Created once at startup and owned by the hosting application; the core
/// addresses instances by resolved variant and never creates or destroys
/// them.
pub struct MaterialSuite {
    instances: Vec<MaterialInstance>,
}

impl MaterialSuite {
    pub fn new() -> Self {
        let instances = MaterialVariant::ALL
            .iter()
            .map(|&variant| MaterialInstance::new(variant))
            .collect();
        Self { instances }
    }

    pub fn get(&self, variant: MaterialVariant) -> &MaterialInstance {
        &self.instances[variant.index()]
    }

    pub fn get_mut(&mut self, variant: MaterialVariant) -> &mut MaterialInstance {
        &mut self.instances[variant.index()]
    }
}

impl Default for MaterialSuite {
    fn default() -> Self {
        Self::new()
    }
}
