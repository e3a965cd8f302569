//! Scene: shared procedural meshes placed in the world.
//!
//! A [`MeshLibrary`] turns [`PrimitiveShape`] descriptions into shared
//! [`MeshHandle`](crate::mesh::MeshHandle)s; a [`Scene`] places them as
//! [`SceneObject`]s and answers frustum-culling queries for a renderer.

mod library;
mod object;
mod shape;

use glam::Vec3;
pub use library::MeshLibrary;
pub use object::SceneObject;
pub use shape::PrimitiveShape;

use crate::camera::Frustum;
use crate::lighting::MaterialHandle;
use crate::mesh::{BoundingBox, MeshHandle};

/// Flat list of placed objects.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    /// Objects in insertion order.
    objects: Vec<SceneObject>,
    next_object_id: u32,
    /// Monotonically increasing generation; bumped on any mutation.
    generation: u64,
    /// Generation that was last consumed by the renderer.
    rendered_generation: u64,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // -- Mutation helpers --

    fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Whether scene data changed since last `mark_rendered()`.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.generation != self.rendered_generation
    }

    /// Mark current generation as rendered (call after uploading).
    pub fn mark_rendered(&mut self) {
        self.rendered_generation = self.generation;
    }

    // -- Object management --

    /// Place `mesh` at `translation` with unit scale. Returns the new ID.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        mesh: MeshHandle,
        translation: Vec3,
    ) -> u32 {
        self.add_scaled(name, mesh, translation, Vec3::ONE)
    }

    /// Place `mesh` with an explicit scale. Returns the new ID.
    pub fn add_scaled(
        &mut self,
        name: impl Into<String>,
        mesh: MeshHandle,
        translation: Vec3,
        scale: Vec3,
    ) -> u32 {
        let id = self.next_object_id;
        self.next_object_id += 1;
        self.objects.push(SceneObject {
            id,
            name: name.into(),
            mesh,
            translation,
            scale,
            visible: true,
            material: None,
        });
        self.invalidate();
        id
    }

    /// Remove an object by ID. Returns the removed object, if any.
    pub fn remove(&mut self, id: u32) -> Option<SceneObject> {
        let idx = self.objects.iter().position(|o| o.id == id)?;
        let object = self.objects.remove(idx);
        self.invalidate();
        Some(object)
    }

    /// Read access to an object.
    #[must_use]
    pub fn object(&self, id: u32) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == id)
    }

    /// Write access. Invalidates the cache only when `id` exists.
    pub fn object_mut(&mut self, id: u32) -> Option<&mut SceneObject> {
        let index = self.objects.iter().position(|o| o.id == id)?;
        self.invalidate();
        self.objects.get_mut(index)
    }

    /// All objects in insertion order.
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Number of objects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the scene holds no objects.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Toggle visibility.
    pub fn set_visible(&mut self, id: u32, visible: bool) {
        if let Some(o) = self.objects.iter_mut().find(|o| o.id == id) {
            if o.visible != visible {
                o.visible = visible;
                self.invalidate();
            }
        }
    }

    /// Assign (or clear) an object's material.
    pub fn set_material(
        &mut self,
        id: u32,
        material: Option<MaterialHandle>,
    ) {
        if let Some(o) = self.objects.iter_mut().find(|o| o.id == id) {
            o.material = material;
            self.invalidate();
        }
    }

    /// Remove all objects.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.invalidate();
    }

    // -- Queries --

    /// Visible objects whose world bounds intersect `frustum`.
    #[must_use]
    pub fn visible_objects(&self, frustum: &Frustum) -> Vec<&SceneObject> {
        self.objects
            .iter()
            .filter(|o| {
                o.visible && frustum.intersects_bounding_box(&o.world_bounds())
            })
            .collect()
    }

    /// Union of every object's world bounds.
    #[must_use]
    pub fn bounds(&self) -> BoundingBox {
        self.objects
            .iter()
            .fold(BoundingBox::INVALID, |acc, o| acc.union(&o.world_bounds()))
    }

    /// Vertices and triangles across all objects.
    #[must_use]
    pub fn stats(&self) -> (usize, usize) {
        self.objects.iter().fold((0, 0), |(v, t), o| {
            (v + o.mesh.vertex_count(), t + o.mesh.triangle_count())
        })
    }
}
