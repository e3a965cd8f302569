//! Post-hoc vertex normal recomputation for imported or edited meshes.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::vertex::Vertex;

/// Shading model used when recomputing normals.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum NormalMode {
    /// Each triangle writes its own face normal to its three vertices.
    /// On a raw slice, vertices shared between triangles end up with the
    /// normal of the last triangle that touched them;
    /// [`Mesh::calculate_normals`](super::Mesh::calculate_normals) unwelds
    /// first so every face keeps its own normal.
    Flat,
    /// Face normals (area-weighted, un-normalized) are accumulated into
    /// every referencing vertex, then normalized.
    #[default]
    Smooth,
}

/// Un-normalized face normal of a triangle (length = 2 × area).
#[inline]
fn face_normal(a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
    (b - a).cross(c - a)
}

/// Recompute normals in place.
///
/// With an index buffer the indices are read as triangle triples; without
/// one, consecutive vertex triples are the triangles. Trailing partial
/// triangles and triangles with out-of-range indices are skipped.
/// Degenerate triangles contribute a zero normal rather than NaN.
pub fn compute_normals(
    vertices: &mut [Vertex],
    indices: &[u32],
    mode: NormalMode,
) {
    if indices.is_empty() {
        let sequential: Vec<u32> = (0..vertices.len() as u32).collect();
        compute_indexed(vertices, &sequential, mode);
    } else {
        compute_indexed(vertices, indices, mode);
    }
}

fn compute_indexed(
    vertices: &mut [Vertex],
    indices: &[u32],
    mode: NormalMode,
) {
    let n = vertices.len();
    match mode {
        NormalMode::Flat => {
            for tri in indices.chunks_exact(3) {
                let (a, b, c) =
                    (tri[0] as usize, tri[1] as usize, tri[2] as usize);
                if a >= n || b >= n || c >= n {
                    continue;
                }
                let normal = face_normal(
                    vertices[a].pos(),
                    vertices[b].pos(),
                    vertices[c].pos(),
                )
                .normalize_or_zero()
                .to_array();
                vertices[a].normal = normal;
                vertices[b].normal = normal;
                vertices[c].normal = normal;
            }
        }
        NormalMode::Smooth => {
            let mut accumulated = vec![Vec3::ZERO; n];
            for tri in indices.chunks_exact(3) {
                let (a, b, c) =
                    (tri[0] as usize, tri[1] as usize, tri[2] as usize);
                if a >= n || b >= n || c >= n {
                    continue;
                }
                let normal = face_normal(
                    vertices[a].pos(),
                    vertices[b].pos(),
                    vertices[c].pos(),
                );
                accumulated[a] += normal;
                accumulated[b] += normal;
                accumulated[c] += normal;
            }
            for (vertex, normal) in vertices.iter_mut().zip(accumulated) {
                vertex.normal = normal.normalize_or_zero().to_array();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPS
    }

    /// Two triangles folded 90° along the X axis: one in the XY plane
    /// facing +Z, one in the XZ plane facing +Y.
    fn folded_quad() -> (Vec<Vertex>, Vec<u32>) {
        let verts = vec![
            Vertex::at(Vec3::ZERO),
            Vertex::at(Vec3::X),
            Vertex::at(Vec3::Y),
            Vertex::at(Vec3::new(0.0, 0.0, -1.0)),
        ];
        (verts, vec![0, 1, 2, 0, 1, 3])
    }

    #[test]
    fn smooth_averages_shared_vertices() {
        let (mut verts, indices) = folded_quad();
        compute_normals(&mut verts, &indices, NormalMode::Smooth);
        let expected = Vec3::new(0.0, 1.0, 1.0).normalize();
        assert!(approx(verts[0].norm(), expected));
        assert!(approx(verts[1].norm(), expected));
        assert!(approx(verts[2].norm(), Vec3::Z));
        assert!(approx(verts[3].norm(), Vec3::Y));
    }

    #[test]
    fn flat_writes_face_normals() {
        let (mut verts, indices) = folded_quad();
        compute_normals(&mut verts, &indices, NormalMode::Flat);
        assert!(approx(verts[2].norm(), Vec3::Z));
        assert!(approx(verts[3].norm(), Vec3::Y));
        // Shared vertices carry the last triangle's normal
        assert!(approx(verts[0].norm(), Vec3::Y));
    }

    #[test]
    fn unindexed_triples_are_independent_triangles() {
        let mut verts = vec![
            Vertex::at(Vec3::ZERO),
            Vertex::at(Vec3::X),
            Vertex::at(Vec3::Y),
            Vertex::at(Vec3::ZERO),
            Vertex::at(Vec3::X),
            Vertex::at(Vec3::new(0.0, 0.0, -1.0)),
        ];
        compute_normals(&mut verts, &[], NormalMode::Flat);
        for v in &verts[..3] {
            assert!(approx(v.norm(), Vec3::Z));
        }
        for v in &verts[3..] {
            assert!(approx(v.norm(), Vec3::Y));
        }
    }

    #[test]
    fn degenerate_triangle_gives_zero_not_nan() {
        let mut verts = vec![Vertex::at(Vec3::ONE); 3];
        compute_normals(&mut verts, &[0, 1, 2], NormalMode::Smooth);
        assert_eq!(verts[0].norm(), Vec3::ZERO);
        compute_normals(&mut verts, &[0, 1, 2], NormalMode::Flat);
        assert!(verts.iter().all(|v| v.norm().is_finite()));
    }

    #[test]
    fn out_of_range_triangles_are_skipped() {
        let (mut verts, _) = folded_quad();
        compute_normals(&mut verts, &[0, 1, 9, 0, 1, 2], NormalMode::Smooth);
        assert!(approx(verts[2].norm(), Vec3::Z));
        assert_eq!(verts[3].norm(), Vec3::ZERO);
    }
}
