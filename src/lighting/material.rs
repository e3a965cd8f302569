use std::sync::Arc;

use glam::Vec3;

/// Shared handle to a material. Scene objects using the same surface
/// clone the handle.
pub type MaterialHandle = Arc<Material>;

/// Phong surface description.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Lookup name.
    pub name: String,
    /// Diffuse reflectance.
    pub diffuse: Vec3,
    /// Specular reflectance.
    pub specular: Vec3,
    /// Ambient reflectance.
    pub ambient: Vec3,
    /// Self-illumination, unaffected by lights.
    pub emissive: Vec3,
    /// Specular exponent.
    pub shininess: f32,
    /// Multiplier on the specular term.
    pub specular_strength: f32,
    /// 1 is opaque.
    pub opacity: f32,
    /// Index of refraction.
    pub refractive_index: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self::named("DefaultMaterial")
    }
}

impl Material {
    /// Default white plastic under a new name.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diffuse: Vec3::ONE,
            specular: Vec3::splat(0.5),
            ambient: Vec3::splat(0.1),
            emissive: Vec3::ZERO,
            shininess: 32.0,
            specular_strength: 1.0,
            opacity: 1.0,
            refractive_index: 1.0,
        }
    }

    /// Set the three reflectance colors at once.
    pub fn set_colors(&mut self, diffuse: Vec3, specular: Vec3, ambient: Vec3) {
        self.diffuse = diffuse;
        self.specular = specular;
        self.ambient = ambient;
    }

    /// Set the scalar highlight and opacity terms.
    pub fn set_properties(
        &mut self,
        shininess: f32,
        specular_strength: f32,
        opacity: f32,
    ) {
        self.shininess = shininess;
        self.specular_strength = specular_strength;
        self.opacity = opacity;
    }

    /// Whether the surface needs blending (opacity below 1).
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0
    }

    /// Wrap into a shared handle.
    #[must_use]
    pub fn into_handle(self) -> MaterialHandle {
        Arc::new(self)
    }

    /// GPU-ready record.
    #[must_use]
    pub fn uniform(&self) -> MaterialUniform {
        MaterialUniform {
            diffuse: self.diffuse.to_array(),
            opacity: self.opacity,
            specular: self.specular.to_array(),
            shininess: self.shininess,
            ambient: self.ambient.to_array(),
            specular_strength: self.specular_strength,
            emissive: self.emissive.to_array(),
            refractive_index: self.refractive_index,
        }
    }
}

/// Material uniform block, four vec3 + float rows (64 bytes, std140
/// compatible without padding).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct MaterialUniform {
    /// Diffuse reflectance.
    pub diffuse: [f32; 3],
    /// Opacity.
    pub opacity: f32,
    /// Specular reflectance.
    pub specular: [f32; 3],
    /// Specular exponent.
    pub shininess: f32,
    /// Ambient reflectance.
    pub ambient: [f32; 3],
    /// Specular multiplier.
    pub specular_strength: f32,
    /// Emissive color.
    pub emissive: [f32; 3],
    /// Index of refraction.
    pub refractive_index: f32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let material = Material::default();
        assert_eq!(material.name, "DefaultMaterial");
        assert_eq!(material.diffuse, Vec3::ONE);
        assert_eq!(material.specular, Vec3::splat(0.5));
        assert_eq!(material.ambient, Vec3::splat(0.1));
        assert_eq!(material.emissive, Vec3::ZERO);
        assert_eq!(material.shininess, 32.0);
        assert_eq!(material.opacity, 1.0);
        assert!(!material.is_transparent());
        assert_eq!(Material::named("Brass").name, "Brass");
    }

    #[test]
    fn colors_and_properties() {
        let mut material = Material::named("Test");
        material.set_colors(
            Vec3::new(1.0, 0.5, 0.2),
            Vec3::ONE,
            Vec3::splat(0.1),
        );
        assert_eq!(material.diffuse, Vec3::new(1.0, 0.5, 0.2));
        assert_eq!(material.specular, Vec3::ONE);

        material.set_properties(64.0, 0.8, 0.5);
        assert_eq!(material.shininess, 64.0);
        assert_eq!(material.specular_strength, 0.8);
        assert!(material.is_transparent());

        let copy = material.clone();
        assert_eq!(copy, material);
    }

    #[test]
    fn uniform_is_64_bytes_in_row_order() {
        let mut material = Material::named("Glass");
        material.set_properties(16.0, 0.5, 0.25);
        material.refractive_index = 1.5;
        let uniform = material.uniform();
        let floats: &[f32] =
            bytemuck::cast_slice(std::slice::from_ref(&uniform));
        assert_eq!(floats.len(), 16);
        assert_eq!(floats[3], 0.25);
        assert_eq!(floats[7], 16.0);
        assert_eq!(floats[11], 0.5);
        assert_eq!(floats[15], 1.5);
    }
}
