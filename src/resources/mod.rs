//! Externally-owned render resources referenced by the sandbox core

mod material;

pub use material::*;
