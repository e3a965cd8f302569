use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;
use super::normals::{compute_normals, NormalMode};
use super::vertex::Vertex;

/// Shared handle to an immutable mesh. Scene objects reusing the same
/// geometry clone the handle instead of the vertex data.
pub type MeshHandle = Arc<Mesh>;

/// How the index (or vertex) stream is assembled into primitives.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum PrimitiveType {
    /// Independent triangles (index triples).
    #[default]
    Triangles,
    /// Triangle strip.
    TriangleStrip,
    /// Triangle fan.
    TriangleFan,
    /// Independent line segments (index pairs).
    Lines,
    /// Connected line strip.
    LineStrip,
    /// Point list.
    Points,
}

/// Host-side vertex/index data plus its derived bounding box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    /// Interleaved vertices.
    pub vertices: Vec<Vertex>,
    /// Indices into `vertices`; empty for non-indexed meshes.
    pub indices: Vec<u32>,
    /// Primitive assembly mode.
    pub primitive: PrimitiveType,
    bounding_box: BoundingBox,
}

impl Mesh {
    /// Indexed triangle mesh. The bounding box is computed immediately.
    #[must_use]
    pub fn new(vertices: Vec<Vertex>, indices: Vec<u32>) -> Self {
        Self::with_primitive(vertices, indices, PrimitiveType::Triangles)
    }

    /// Indexed mesh with an explicit primitive type.
    #[must_use]
    pub fn with_primitive(
        vertices: Vec<Vertex>,
        indices: Vec<u32>,
        primitive: PrimitiveType,
    ) -> Self {
        let bounding_box = BoundingBox::from_vertices(&vertices);
        Self {
            vertices,
            indices,
            primitive,
            bounding_box,
        }
    }

    /// Non-indexed triangle mesh (every consecutive triple is a triangle).
    #[must_use]
    pub fn from_vertices(vertices: Vec<Vertex>) -> Self {
        Self::new(vertices, Vec::new())
    }

    /// Wrap into a shared handle.
    #[must_use]
    pub fn into_handle(self) -> MeshHandle {
        Arc::new(self)
    }

    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of indices.
    #[must_use]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Whether the mesh draws through an index buffer.
    #[must_use]
    pub fn has_indices(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Number of complete triangles for a [`PrimitiveType::Triangles`]
    /// mesh (0 for other primitive types).
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        if self.primitive != PrimitiveType::Triangles {
            return 0;
        }
        if self.has_indices() {
            self.indices.len() / 3
        } else {
            self.vertices.len() / 3
        }
    }

    /// Whether every index references an existing vertex.
    #[must_use]
    pub fn indices_in_bounds(&self) -> bool {
        let n = self.vertices.len();
        self.indices.iter().all(|&i| (i as usize) < n)
    }

    /// Last computed bounding box.
    #[must_use]
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bounding_box
    }

    /// Recompute the bounding box from the current vertex positions.
    pub fn calculate_bounding_box(&mut self) {
        self.bounding_box = BoundingBox::from_vertices(&self.vertices);
    }

    /// Recompute vertex normals with the requested shading model.
    ///
    /// [`NormalMode::Flat`] on an indexed triangle mesh first
    /// [unwelds](Self::unweld) it, so every triangle gets its own three
    /// vertices and its own face normal.
    pub fn calculate_normals(&mut self, mode: NormalMode) {
        if mode == NormalMode::Flat {
            self.unweld();
        }
        compute_normals(&mut self.vertices, &self.indices, mode);
    }

    /// Give every triangle of an indexed triangle mesh its own copy of its
    /// three vertices. Indices become `0..3 * triangles`.
    ///
    /// Triangles referencing missing vertices and a trailing partial
    /// triangle are dropped. Non-indexed meshes and other primitive types
    /// are left untouched.
    pub fn unweld(&mut self) {
        if !self.has_indices() || self.primitive != PrimitiveType::Triangles {
            return;
        }
        let n = self.vertices.len();
        let vertices: Vec<Vertex> = self
            .indices
            .chunks_exact(3)
            .filter(|tri| tri.iter().all(|&i| (i as usize) < n))
            .flatten()
            .map(|&i| self.vertices[i as usize])
            .collect();
        self.indices = (0..vertices.len() as u32).collect();
        self.vertices = vertices;
        self.calculate_bounding_box();
    }

    /// Raw vertex bytes for buffer upload.
    #[must_use]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload.
    #[must_use]
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
