use rustc_hash::FxHashMap;

use super::shape::{PrimitiveShape, ShapeKey};
use crate::mesh::ops::normal_visualization;
use crate::mesh::{Mesh, MeshHandle, NormalMode};
use crate::options::GeometryOptions;

/// Cache of generated meshes keyed by shape parameters.
///
/// Every request for an equal shape returns a clone of the same
/// [`MeshHandle`], so scene objects built from one shape share a single
/// vertex buffer.
#[derive(Debug, Clone)]
pub struct MeshLibrary {
    meshes: FxHashMap<ShapeKey, MeshHandle>,
    normal_mode: NormalMode,
    /// Length of the debug lines built by [`normal_lines`](Self::normal_lines).
    normal_length: f32,
}

impl MeshLibrary {
    /// Empty library keeping the generators' analytic normals.
    #[must_use]
    pub fn new() -> Self {
        Self::from_options(&GeometryOptions::default())
    }

    /// Empty library honouring the geometry section's normal mode.
    #[must_use]
    pub fn from_options(geometry: &GeometryOptions) -> Self {
        Self {
            meshes: FxHashMap::default(),
            normal_mode: geometry.normal_mode,
            normal_length: geometry.normal_length,
        }
    }

    /// Shared mesh for `shape`, generating it on first request.
    ///
    /// With [`NormalMode::Flat`] the generated mesh is unwelded and its
    /// normals recomputed per face before it is shared.
    pub fn get_or_generate(&mut self, shape: &PrimitiveShape) -> MeshHandle {
        let normal_mode = self.normal_mode;
        self.meshes
            .entry(shape.key())
            .or_insert_with(|| {
                log::debug!(
                    "generating {} mesh: {shape:?}",
                    shape.kind_name()
                );
                let mut mesh = shape.generate();
                if normal_mode == NormalMode::Flat {
                    mesh.calculate_normals(NormalMode::Flat);
                }
                mesh.into_handle()
            })
            .clone()
    }

    /// Already-generated mesh for `shape`, if any.
    #[must_use]
    pub fn get(&self, shape: &PrimitiveShape) -> Option<MeshHandle> {
        self.meshes.get(&shape.key()).cloned()
    }

    /// Number of distinct meshes held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Whether nothing has been generated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    /// Drop every cached mesh. Handles already given out stay valid.
    pub fn clear(&mut self) {
        self.meshes.clear();
    }

    /// Debug line mesh showing the normals of `shape`'s shared mesh, each
    /// line as long as the configured normal length.
    pub fn normal_lines(&mut self, shape: &PrimitiveShape) -> Mesh {
        normal_visualization(&self.get_or_generate(shape), self.normal_length)
    }
}

impl Default for MeshLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;

    #[test]
    fn equal_shapes_share_one_mesh() {
        let mut library = MeshLibrary::new();
        let shape = PrimitiveShape::Cube { size: 1.0 };
        let a = library.get_or_generate(&shape);
        let b = library.get_or_generate(&PrimitiveShape::Cube { size: 1.0 });
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(library.len(), 1);

        let c = library.get_or_generate(&PrimitiveShape::Cube { size: 2.0 });
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(library.len(), 2);
    }

    #[test]
    fn get_does_not_generate() {
        let mut library = MeshLibrary::new();
        let shape = PrimitiveShape::Sphere {
            radius: 1.0,
            segments: 8,
        };
        assert!(library.get(&shape).is_none());
        assert!(library.is_empty());
        let handle = library.get_or_generate(&shape);
        assert!(library.get(&shape).is_some_and(|h| Arc::ptr_eq(&h, &handle)));
    }

    #[test]
    fn normal_lines_use_configured_length() {
        let geometry = GeometryOptions {
            normal_length: 0.25,
            ..GeometryOptions::default()
        };
        let mut library = MeshLibrary::from_options(&geometry);
        let shape = PrimitiveShape::Cube { size: 1.0 };
        let lines = library.normal_lines(&shape);
        assert_eq!(lines.primitive, crate::mesh::PrimitiveType::Lines);
        assert_eq!(lines.vertex_count(), 2 * 24);
        for pair in lines.vertices.chunks_exact(2) {
            let length = (pair[1].pos() - pair[0].pos()).length();
            assert!((length - 0.25).abs() < 1e-5);
        }
        assert_eq!(library.len(), 1);
    }

    #[test]
    fn handles_outlive_clear() {
        let mut library = MeshLibrary::new();
        let handle =
            library.get_or_generate(&PrimitiveShape::Cube { size: 1.0 });
        library.clear();
        assert!(library.is_empty());
        assert_eq!(handle.vertex_count(), 24);
    }

    #[test]
    fn flat_mode_gives_every_triangle_its_face_normal() {
        let geometry = GeometryOptions {
            normal_mode: NormalMode::Flat,
            ..GeometryOptions::default()
        };
        let mut library = MeshLibrary::from_options(&geometry);
        let shape = PrimitiveShape::Sphere {
            radius: 1.0,
            segments: 8,
        };
        let flat = library.get_or_generate(&shape);
        assert_eq!(flat.vertex_count(), flat.index_count());
        assert_eq!(flat.triangle_count(), shape.generate().triangle_count());

        let mut checked = 0;
        for tri in flat.indices.chunks_exact(3) {
            let [a, b, c] =
                [tri[0], tri[1], tri[2]].map(|i| flat.vertices[i as usize]);
            let face = (b.pos() - a.pos()).cross(c.pos() - a.pos());
            if face.length() < 1e-6 {
                continue;
            }
            let face = face.normalize();
            for v in [a, b, c] {
                assert!(v.norm().dot(face) >= 0.999);
            }
            checked += 1;
        }
        assert!(checked > 0);
    }
}
