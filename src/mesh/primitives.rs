//! Procedural unit primitives.
//!
//! Every generator is a pure function returning a fresh indexed triangle
//! [`Mesh`] with per-vertex normals, UVs and a computed bounding box.
//! Parameters are not validated: zero segment counts produce an empty
//! mesh and negative sizes produce mirrored or zero-area geometry.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

use glam::{Vec2, Vec3};

use super::core::Mesh;
use super::vertex::Vertex;

/// Two triangles per cell of a `rows × cols` latitude/longitude grid laid
/// out row-major with `cols + 1` vertices per row, starting at `base`.
/// Rows run from the +Y pole downwards.
fn push_grid_indices(indices: &mut Vec<u32>, base: u32, rows: u32, cols: u32) {
    let stride = cols + 1;
    for r in 0..rows {
        for c in 0..cols {
            let upper = base + r * stride + c;
            let lower = upper + stride;
            indices.extend_from_slice(&[
                lower,
                upper,
                upper + 1,
                lower + 1,
                lower,
                upper + 1,
            ]);
        }
    }
}

/// Axis-aligned cube centred on the origin.
///
/// 24 vertices (4 per face, unshared so each face keeps a flat normal)
/// and 36 indices, counter-clockwise when viewed from outside.
#[must_use]
pub fn cube(size: f32) -> Mesh {
    let h = size * 0.5;
    // (outward normal, right, up) with right × up == normal
    let faces = [
        (Vec3::Z, Vec3::X, Vec3::Y),
        (-Vec3::Z, -Vec3::X, Vec3::Y),
        (-Vec3::X, Vec3::Z, Vec3::Y),
        (Vec3::X, -Vec3::Z, Vec3::Y),
        (-Vec3::Y, Vec3::X, Vec3::Z),
        (Vec3::Y, Vec3::X, -Vec3::Z),
    ];
    let uvs = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];

    let mut vertices = Vec::with_capacity(24);
    let mut indices = Vec::with_capacity(36);
    for (normal, right, up) in faces {
        let base = vertices.len() as u32;
        let origin = (normal - right - up) * h;
        let corners = [
            origin,
            origin + right * size,
            origin + (right + up) * size,
            origin + up * size,
        ];
        for (corner, uv) in corners.into_iter().zip(uvs) {
            vertices.push(Vertex::new(corner, normal, uv));
        }
        indices.extend_from_slice(&[
            base,
            base + 1,
            base + 2,
            base + 2,
            base + 3,
            base,
        ]);
    }
    Mesh::new(vertices, indices)
}

/// UV sphere centred on the origin.
///
/// `segments` is used for both latitude rings and longitude steps, giving
/// `(segments + 1)²` vertices. The seam column and the pole rows are
/// duplicated, so the pole triangles are zero-area.
#[must_use]
pub fn sphere(radius: f32, segments: u32) -> Mesh {
    if segments == 0 {
        return Mesh::default();
    }
    let n = (segments + 1) as usize;
    let mut vertices = Vec::with_capacity(n * n);
    for y in 0..=segments {
        let v = y as f32 / segments as f32;
        let phi = v * PI;
        for x in 0..=segments {
            let u = x as f32 / segments as f32;
            let theta = u * TAU;
            let dir = Vec3::new(
                theta.cos() * phi.sin(),
                phi.cos(),
                theta.sin() * phi.sin(),
            );
            vertices.push(Vertex::new(dir * radius, dir, Vec2::new(u, v)));
        }
    }

    let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
    push_grid_indices(&mut indices, 0, segments, segments);
    Mesh::new(vertices, indices)
}

/// Flat grid in the XZ plane centred on the origin, facing +Y.
#[must_use]
pub fn plane(
    width: f32,
    height: f32,
    width_segments: u32,
    height_segments: u32,
) -> Mesh {
    if width_segments == 0 || height_segments == 0 {
        return Mesh::default();
    }
    let (half_w, half_h) = (width * 0.5, height * 0.5);
    let mut vertices = Vec::with_capacity(
        ((width_segments + 1) * (height_segments + 1)) as usize,
    );
    for z in 0..=height_segments {
        let v = z as f32 / height_segments as f32;
        for x in 0..=width_segments {
            let u = x as f32 / width_segments as f32;
            vertices.push(Vertex::new(
                Vec3::new(u * width - half_w, 0.0, v * height - half_h),
                Vec3::Y,
                Vec2::new(u, v),
            ));
        }
    }

    let stride = width_segments + 1;
    let mut indices =
        Vec::with_capacity((width_segments * height_segments * 6) as usize);
    for z in 0..height_segments {
        for x in 0..width_segments {
            let a = z * stride + x;
            let b = a + stride;
            indices.extend_from_slice(&[a, b, a + 1, a + 1, b, b + 1]);
        }
    }
    Mesh::new(vertices, indices)
}

/// Append a fan cap (own centre vertex, flat ±Y normal) at height `y`.
fn push_cap(
    vertices: &mut Vec<Vertex>,
    indices: &mut Vec<u32>,
    radius: f32,
    y: f32,
    segments: u32,
    facing_up: bool,
) {
    let normal = if facing_up { Vec3::Y } else { -Vec3::Y };
    let center = vertices.len() as u32;
    vertices.push(Vertex::new(
        Vec3::new(0.0, y, 0.0),
        normal,
        Vec2::splat(0.5),
    ));
    for i in 0..=segments {
        let theta = i as f32 / segments as f32 * TAU;
        let (sin, cos) = theta.sin_cos();
        vertices.push(Vertex::new(
            Vec3::new(radius * cos, y, radius * sin),
            normal,
            Vec2::new(0.5 + cos * 0.5, 0.5 + sin * 0.5),
        ));
    }
    for i in 0..segments {
        let (a, b) = (center + 1 + i, center + 2 + i);
        if facing_up {
            indices.extend_from_slice(&[center, b, a]);
        } else {
            indices.extend_from_slice(&[center, a, b]);
        }
    }
}

/// Capped cylinder along Y, centred on the origin.
///
/// The side wall stores a bottom/top vertex pair per angular step with
/// outward radial normals; each cap is a separate fan with its own centre.
#[must_use]
pub fn cylinder(radius: f32, height: f32, segments: u32) -> Mesh {
    if segments == 0 {
        return Mesh::default();
    }
    let half = height * 0.5;
    let mut vertices = Vec::with_capacity((4 * segments + 6) as usize);
    let mut indices = Vec::with_capacity((12 * segments) as usize);

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = Vec3::new(cos, 0.0, sin);
        let rim = Vec3::new(radius * cos, 0.0, radius * sin);
        vertices.push(Vertex::new(
            rim - Vec3::Y * half,
            normal,
            Vec2::new(u, 0.0),
        ));
        vertices.push(Vertex::new(
            rim + Vec3::Y * half,
            normal,
            Vec2::new(u, 1.0),
        ));
    }
    for i in 0..segments {
        let bottom = 2 * i;
        let top = bottom + 1;
        indices.extend_from_slice(&[
            bottom,
            top,
            bottom + 2,
            top,
            top + 2,
            bottom + 2,
        ]);
    }

    push_cap(&mut vertices, &mut indices, radius, -half, segments, false);
    push_cap(&mut vertices, &mut indices, radius, half, segments, true);
    Mesh::new(vertices, indices)
}

/// Cone along Y with its base at `-height / 2` and apex at `+height / 2`.
///
/// Each angular step emits a base vertex and a duplicated apex vertex that
/// share the slope normal, so the apex shades faceted rather than as a
/// single smooth point. The base is closed by a fan cap.
#[must_use]
pub fn cone(radius: f32, height: f32, segments: u32) -> Mesh {
    if segments == 0 {
        return Mesh::default();
    }
    let half = height * 0.5;
    let apex = Vec3::new(0.0, half, 0.0);
    let mut vertices = Vec::with_capacity((3 * segments + 4) as usize);
    let mut indices = Vec::with_capacity((6 * segments) as usize);

    for i in 0..=segments {
        let u = i as f32 / segments as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        let normal = Vec3::new(height * cos, radius, height * sin)
            .normalize_or_zero();
        vertices.push(Vertex::new(
            Vec3::new(radius * cos, -half, radius * sin),
            normal,
            Vec2::new(u, 0.0),
        ));
        vertices.push(Vertex::new(apex, normal, Vec2::new(u, 1.0)));
    }
    for i in 0..segments {
        let base = 2 * i;
        indices.extend_from_slice(&[base, base + 1, base + 2]);
    }

    push_cap(&mut vertices, &mut indices, radius, -half, segments, false);
    Mesh::new(vertices, indices)
}

/// Torus lying in the XZ plane, centred on the origin.
///
/// `outer_radius` and `inner_radius` are the extents of the hole and the
/// rim; the tube radius is half their difference. `rings` steps around the
/// main axis and `sides` around the tube cross-section.
#[must_use]
pub fn torus(
    outer_radius: f32,
    inner_radius: f32,
    sides: u32,
    rings: u32,
) -> Mesh {
    if sides == 0 || rings == 0 {
        return Mesh::default();
    }
    let tube_radius = (outer_radius - inner_radius) * 0.5;
    let ring_radius = inner_radius + tube_radius;

    let mut vertices =
        Vec::with_capacity(((rings + 1) * (sides + 1)) as usize);
    for i in 0..=rings {
        let u = i as f32 / rings as f32;
        let (sin_theta, cos_theta) = (u * TAU).sin_cos();
        let center =
            Vec3::new(ring_radius * cos_theta, 0.0, ring_radius * sin_theta);
        for j in 0..=sides {
            let v = j as f32 / sides as f32;
            let (sin_phi, cos_phi) = (v * TAU).sin_cos();
            let normal =
                Vec3::new(cos_phi * cos_theta, sin_phi, cos_phi * sin_theta);
            vertices.push(Vertex::new(
                center + normal * tube_radius,
                normal,
                Vec2::new(u, v),
            ));
        }
    }

    let stride = sides + 1;
    let mut indices = Vec::with_capacity((rings * sides * 6) as usize);
    for i in 0..rings {
        for j in 0..sides {
            let a = i * stride + j;
            let b = a + stride;
            indices.extend_from_slice(&[a, a + 1, b, a + 1, b + 1, b]);
        }
    }
    Mesh::new(vertices, indices)
}

/// Capsule along Y: upper hemisphere, cylindrical band of length `height`,
/// lower hemisphere. Total extent along Y is `height + 2 * radius`.
///
/// Both hemispheres use `max(segments / 2, 1)` latitude rings and
/// `segments` longitude steps, so the two equator rings line up vertex for
/// vertex and the band between them is the cylindrical section.
#[must_use]
pub fn capsule(radius: f32, height: f32, segments: u32) -> Mesh {
    if segments == 0 {
        return Mesh::default();
    }
    let half = height * 0.5;
    let hemi_rings = (segments / 2).max(1);
    let total = height + 2.0 * radius;

    // (polar angle, vertical offset) per latitude ring, top pole first
    let mut latitudes = Vec::with_capacity(2 * (hemi_rings + 1) as usize);
    for k in 0..=hemi_rings {
        latitudes.push((FRAC_PI_2 * k as f32 / hemi_rings as f32, half));
    }
    for k in 0..=hemi_rings {
        let phi = FRAC_PI_2 + FRAC_PI_2 * k as f32 / hemi_rings as f32;
        latitudes.push((phi, -half));
    }

    let mut vertices =
        Vec::with_capacity(latitudes.len() * (segments + 1) as usize);
    for &(phi, offset) in &latitudes {
        let (sin_phi, cos_phi) = phi.sin_cos();
        for x in 0..=segments {
            let u = x as f32 / segments as f32;
            let (sin_theta, cos_theta) = (u * TAU).sin_cos();
            let normal =
                Vec3::new(cos_theta * sin_phi, cos_phi, sin_theta * sin_phi);
            let position = normal * radius + Vec3::new(0.0, offset, 0.0);
            let v = if total == 0.0 {
                0.0
            } else {
                (half + radius - position.y) / total
            };
            vertices.push(Vertex::new(position, normal, Vec2::new(u, v)));
        }
    }

    let rows = latitudes.len() as u32 - 1;
    let mut indices = Vec::with_capacity((rows * segments * 6) as usize);
    push_grid_indices(&mut indices, 0, rows, segments);
    Mesh::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::normals::{compute_normals, NormalMode};

    const EPS: f32 = 1e-4;

    fn assert_unit_normals(mesh: &Mesh) {
        for v in &mesh.vertices {
            assert!(
                (v.norm().length() - 1.0).abs() < EPS,
                "normal {:?} is not unit length",
                v.norm()
            );
        }
    }

    fn assert_triangles_face_along_normals(mesh: &Mesh) {
        for tri in mesh.indices.chunks_exact(3) {
            let [a, b, c] = [
                mesh.vertices[tri[0] as usize],
                mesh.vertices[tri[1] as usize],
                mesh.vertices[tri[2] as usize],
            ];
            let face = (b.pos() - a.pos()).cross(c.pos() - a.pos());
            if face.length() < 1e-6 {
                continue;
            }
            let avg = a.norm() + b.norm() + c.norm();
            assert!(face.dot(avg) > 0.0, "triangle {tri:?} winds inward");
        }
    }

    #[test]
    fn cube_counts_independent_of_size() {
        for size in [0.5, 1.0, 7.0] {
            let mesh = cube(size);
            assert_eq!(mesh.vertex_count(), 24);
            assert_eq!(mesh.index_count(), 36);
            let extent = mesh.bounding_box().size();
            assert!((extent - Vec3::splat(size)).length() < EPS);
        }
    }

    #[test]
    fn cube_normals_are_axis_aligned_and_outward() {
        let mesh = cube(2.0);
        for v in &mesh.vertices {
            let n = v.norm();
            assert_eq!(n.abs().max_element(), 1.0);
            assert!((v.pos().dot(n) - 1.0).abs() < EPS);
        }
        assert_triangles_face_along_normals(&mesh);
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let mesh = sphere(2.5, 16);
        assert_eq!(mesh.vertex_count(), 17 * 17);
        assert_eq!(mesh.index_count(), 16 * 16 * 6);
        for v in &mesh.vertices {
            assert!((v.pos().length() - 2.5).abs() < EPS);
        }
        assert_unit_normals(&mesh);
        assert!(mesh.indices_in_bounds());
        assert_triangles_face_along_normals(&mesh);
    }

    #[test]
    fn sphere_zero_segments_is_empty() {
        let mesh = sphere(1.0, 0);
        assert_eq!(mesh.vertex_count(), 0);
        assert!(!mesh.bounding_box().is_valid);
    }

    #[test]
    fn plane_spans_unit_uvs_and_faces_up() {
        let mesh = plane(4.0, 2.0, 4, 2);
        assert_eq!(mesh.vertex_count(), 5 * 3);
        assert_eq!(mesh.index_count(), 4 * 2 * 6);
        let bbox = mesh.bounding_box();
        assert_eq!(bbox.min, Vec3::new(-2.0, 0.0, -1.0));
        assert_eq!(bbox.max, Vec3::new(2.0, 0.0, 1.0));
        assert_eq!(mesh.vertices[0].uv(), Vec2::ZERO);
        assert_eq!(mesh.vertices.last().map(Vertex::uv), Some(Vec2::ONE));
        assert_triangles_face_along_normals(&mesh);
    }

    #[test]
    fn cylinder_has_wall_and_two_caps() {
        let segments = 12;
        let mesh = cylinder(1.0, 2.0, segments);
        assert_eq!(mesh.vertex_count(), (2 * 13 + 2 * 14) as usize);
        assert_eq!(mesh.index_count(), (12 * segments) as usize);
        let bbox = mesh.bounding_box();
        assert!((bbox.min.y + 1.0).abs() < EPS);
        assert!((bbox.max.y - 1.0).abs() < EPS);
        assert_unit_normals(&mesh);
        assert_triangles_face_along_normals(&mesh);
    }

    #[test]
    fn cone_apex_vertices_carry_slope_normals() {
        let mesh = cone(1.0, 2.0, 8);
        assert_eq!(mesh.vertex_count(), 2 * 9 + 10);
        assert_eq!(mesh.index_count(), 8 * 3 + 8 * 3);
        for pair in mesh.vertices[..18].chunks_exact(2) {
            assert_eq!(pair[1].pos(), Vec3::new(0.0, 1.0, 0.0));
            assert_eq!(pair[0].norm(), pair[1].norm());
            assert!(pair[1].norm().y > 0.0);
        }
        assert_unit_normals(&mesh);
        assert_triangles_face_along_normals(&mesh);
    }

    #[test]
    fn torus_extent_matches_radii() {
        let mesh = torus(2.0, 1.0, 16, 32);
        assert_eq!(mesh.vertex_count(), 17 * 33);
        let bbox = mesh.bounding_box();
        assert!((bbox.max.x - 2.0).abs() < EPS);
        assert!((bbox.max.y - 0.5).abs() < EPS);
        // Every vertex sits tube_radius away from the ring circle
        for v in &mesh.vertices {
            let p = v.pos();
            let ring = Vec3::new(p.x, 0.0, p.z).normalize_or_zero() * 1.5;
            assert!(((p - ring).length() - 0.5).abs() < EPS);
        }
        assert_unit_normals(&mesh);
        assert_triangles_face_along_normals(&mesh);
    }

    #[test]
    fn capsule_extent_and_band_alignment() {
        let mesh = capsule(0.5, 2.0, 16);
        let bbox = mesh.bounding_box();
        assert!((bbox.max.y - 1.5).abs() < EPS);
        assert!((bbox.min.y + 1.5).abs() < EPS);
        // 2 hemispheres × (8 + 1) rings × 17 columns
        assert_eq!(mesh.vertex_count(), 2 * 9 * 17);
        assert!(mesh.indices_in_bounds());
        assert_unit_normals(&mesh);
        assert_triangles_face_along_normals(&mesh);
    }

    #[test]
    fn generated_normals_agree_with_smooth_recompute() {
        let mut mesh = sphere(1.0, 24);
        let original: Vec<Vec3> =
            mesh.vertices.iter().map(Vertex::norm).collect();
        compute_normals(&mut mesh.vertices, &mesh.indices, NormalMode::Smooth);
        // Skip the degenerate pole rows and the duplicated seam
        for (i, v) in mesh.vertices.iter().enumerate() {
            let (row, col) = (i / 25, i % 25);
            if row == 0 || row == 24 || col == 0 || col == 24 {
                continue;
            }
            assert!(v.norm().dot(original[i]) > 0.99);
        }
    }
}
