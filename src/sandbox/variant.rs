//! Material model, blending mode, and resolved variant types

/// High-level shading algorithm family, selected directly by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaterialModel {
    Unlit,
    #[default]
    Lit,
    Subsurface,
    Cloth,
    SpecularGlossiness,
}

impl MaterialModel {
    pub const ALL: [MaterialModel; 5] = [
        MaterialModel::Unlit,
        MaterialModel::Lit,
        MaterialModel::Subsurface,
        MaterialModel::Cloth,
        MaterialModel::SpecularGlossiness,
    ];

    /// Display name for UI combo boxes
    pub fn label(self) -> &'static str {
        match self {
            MaterialModel::Unlit => "Unlit",
            MaterialModel::Lit => "Lit",
            MaterialModel::Subsurface => "Subsurface",
            MaterialModel::Cloth => "Cloth",
            MaterialModel::SpecularGlossiness => "Specular glossiness",
        }
    }
}

/// How a surface composites with what's behind it.
/// Only meaningful when the model is [`MaterialModel::Lit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlendingMode {
    #[default]
    Opaque,
    Transparent,
    Fade,
    ThinRefraction,
    SolidRefraction,
}

impl BlendingMode {
    pub const ALL: [BlendingMode; 5] = [
        BlendingMode::Opaque,
        BlendingMode::Transparent,
        BlendingMode::Fade,
        BlendingMode::ThinRefraction,
        BlendingMode::SolidRefraction,
    ];

    /// Display name for UI combo boxes
    pub fn label(self) -> &'static str {
        match self {
            BlendingMode::Opaque => "Opaque",
            BlendingMode::Transparent => "Transparent",
            BlendingMode::Fade => "Fade",
            BlendingMode::ThinRefraction => "Thin refraction",
            BlendingMode::SolidRefraction => "Solid refraction",
        }
    }

    /// Whether this mode transmits light through the surface
    pub fn has_refraction(self) -> bool {
        matches!(
            self,
            BlendingMode::ThinRefraction | BlendingMode::SolidRefraction
        )
    }
}

/// A concrete shader configuration.
///
/// Resolved from model + blending + flags, never selected directly. Each variant
/// owns one preallocated material instance in the
/// [`MaterialSuite`](crate::resources::MaterialSuite).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialVariant {
    Unlit,
    Lit,
    Transparent,
    Fade,
    ThinRefraction,
    SolidRefraction,
    ThinSsRefraction,
    SolidSsRefraction,
    Subsurface,
    Cloth,
    SpecularGlossiness,
}

impl MaterialVariant {
    pub const COUNT: usize = 11;

    pub const ALL: [MaterialVariant; Self::COUNT] = [
        MaterialVariant::Unlit,
        MaterialVariant::Lit,
        MaterialVariant::Transparent,
        MaterialVariant::Fade,
        MaterialVariant::ThinRefraction,
        MaterialVariant::SolidRefraction,
        MaterialVariant::ThinSsRefraction,
        MaterialVariant::SolidSsRefraction,
        MaterialVariant::Subsurface,
        MaterialVariant::Cloth,
        MaterialVariant::SpecularGlossiness,
    ];

    /// Stable index into per-variant storage
    pub fn index(self) -> usize {
        match self {
            MaterialVariant::Unlit => 0,
            MaterialVariant::Lit => 1,
            MaterialVariant::Transparent => 2,
            MaterialVariant::Fade => 3,
            MaterialVariant::ThinRefraction => 4,
            MaterialVariant::SolidRefraction => 5,
            MaterialVariant::ThinSsRefraction => 6,
            MaterialVariant::SolidSsRefraction => 7,
            MaterialVariant::Subsurface => 8,
            MaterialVariant::Cloth => 9,
            MaterialVariant::SpecularGlossiness => 10,
        }
    }
}

/// Map user-facing material settings to the shader variant that renders them.
///
/// Total over all inputs: every combination resolves to exactly one variant.
/// Non-lit models map 1:1 and ignore blending and the screen-space refraction
/// flag; the lit model forks per blending mode, with the two refraction modes
/// forking again into screen-space sub-variants when `ssr` is set.
pub fn resolve_variant(model: MaterialModel, blending: BlendingMode, ssr: bool) -> MaterialVariant {
    match model {
        MaterialModel::Unlit => MaterialVariant::Unlit,
        MaterialModel::Subsurface => MaterialVariant::Subsurface,
        MaterialModel::Cloth => MaterialVariant::Cloth,
        MaterialModel::SpecularGlossiness => MaterialVariant::SpecularGlossiness,
        MaterialModel::Lit => match (blending, ssr) {
            (BlendingMode::Opaque, _) => MaterialVariant::Lit,
            (BlendingMode::Transparent, _) => MaterialVariant::Transparent,
            (BlendingMode::Fade, _) => MaterialVariant::Fade,
            (BlendingMode::ThinRefraction, false) => MaterialVariant::ThinRefraction,
            (BlendingMode::ThinRefraction, true) => MaterialVariant::ThinSsRefraction,
            (BlendingMode::SolidRefraction, false) => MaterialVariant::SolidRefraction,
            (BlendingMode::SolidRefraction, true) => MaterialVariant::SolidSsRefraction,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_is_total() {
        for model in MaterialModel::ALL {
            for blending in BlendingMode::ALL {
                for ssr in [false, true] {
                    let variant = resolve_variant(model, blending, ssr);
                    assert!(MaterialVariant::ALL.contains(&variant));
                }
            }
        }
    }

    #[test]
    fn non_lit_models_ignore_blending_and_ssr() {
        for blending in BlendingMode::ALL {
            for ssr in [false, true] {
                assert_eq!(
                    resolve_variant(MaterialModel::Subsurface, blending, ssr),
                    MaterialVariant::Subsurface
                );
                assert_eq!(
                    resolve_variant(MaterialModel::Unlit, blending, ssr),
                    MaterialVariant::Unlit
                );
                assert_eq!(
                    resolve_variant(MaterialModel::Cloth, blending, ssr),
                    MaterialVariant::Cloth
                );
                assert_eq!(
                    resolve_variant(MaterialModel::SpecularGlossiness, blending, ssr),
                    MaterialVariant::SpecularGlossiness
                );
            }
        }
    }

    #[test]
    fn lit_blending_table() {
        use BlendingMode::*;
        use MaterialModel::Lit;
        assert_eq!(resolve_variant(Lit, Opaque, false), MaterialVariant::Lit);
        assert_eq!(resolve_variant(Lit, Opaque, true), MaterialVariant::Lit);
        assert_eq!(
            resolve_variant(Lit, Transparent, false),
            MaterialVariant::Transparent
        );
        assert_eq!(resolve_variant(Lit, Fade, true), MaterialVariant::Fade);
    }

    #[test]
    fn refraction_forks_on_ssr() {
        use BlendingMode::*;
        use MaterialModel::Lit;
        assert_eq!(
            resolve_variant(Lit, ThinRefraction, true),
            MaterialVariant::ThinSsRefraction
        );
        assert_eq!(
            resolve_variant(Lit, ThinRefraction, false),
            MaterialVariant::ThinRefraction
        );
        assert_eq!(
            resolve_variant(Lit, SolidRefraction, true),
            MaterialVariant::SolidSsRefraction
        );
        assert_eq!(
            resolve_variant(Lit, SolidRefraction, false),
            MaterialVariant::SolidRefraction
        );
    }

    #[test]
    fn variant_indices_are_dense_and_unique() {
        let mut seen = [false; MaterialVariant::COUNT];
        for variant in MaterialVariant::ALL {
            let i = variant.index();
            assert!(!seen[i]);
            seen[i] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
