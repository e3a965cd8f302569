use glam::{Mat4, Vec3};

use crate::lighting::MaterialHandle;
use crate::mesh::{BoundingBox, MeshHandle};

/// One placed mesh instance.
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub(super) id: u32,
    /// Human-readable label.
    pub name: String,
    /// Shared geometry.
    pub mesh: MeshHandle,
    /// World-space offset applied after scaling.
    pub translation: Vec3,
    /// Componentwise scale about the mesh origin.
    pub scale: Vec3,
    /// Hidden objects are skipped by culling queries.
    pub visible: bool,
    /// Surface to shade with; `None` uses the renderer's default.
    pub material: Option<MaterialHandle>,
}

impl SceneObject {
    /// Scene-assigned identifier.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Model matrix (scale, then translate).
    #[must_use]
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation) * Mat4::from_scale(self.scale)
    }

    /// Mesh bounds moved into world space.
    #[must_use]
    pub fn world_bounds(&self) -> BoundingBox {
        self.mesh
            .bounding_box()
            .transformed(self.translation, self.scale)
    }
}
