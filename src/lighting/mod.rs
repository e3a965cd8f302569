//! Host-side Phong lighting: lights, the light set and materials.
//!
//! Everything here is plain data. The renderer uploads
//! [`LightManager::shader_data`] and [`Material::uniform`] as uniform
//! blocks; no GPU calls happen in this module.

mod light;
mod manager;
mod material;

pub use light::{Attenuation, Light, LightKind, LightShaderData};
pub use manager::{LightManager, MAX_LIGHTS};
pub use material::{Material, MaterialHandle, MaterialUniform};
