//! Whole-mesh transformations: merging, debug line meshes, vertex
//! welding and midpoint subdivision.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::bounds::BoundingBox;
use super::core::{Mesh, MeshHandle, PrimitiveType};
use super::vertex::Vertex;
pub use super::normals::{compute_normals, NormalMode};

/// Edge list of a box wireframe over [`BoundingBox::corners`].
const BOX_EDGES: [u32; 24] = [
    0, 1, 1, 2, 2, 3, 3, 0, // near face
    4, 5, 5, 6, 6, 7, 7, 4, // far face
    0, 4, 1, 5, 2, 6, 3, 7, // connecting edges
];

/// Concatenate meshes into one, offsetting each mesh's indices by the
/// number of vertices already emitted.
///
/// The result takes the primitive type of the first input. If any input is
/// indexed, non-indexed inputs get sequential indices so none of their
/// geometry is lost; if none are, the result is non-indexed too.
#[must_use]
pub fn merge_meshes(meshes: &[&Mesh]) -> Mesh {
    let Some(first) = meshes.first() else {
        return Mesh::default();
    };
    let any_indexed = meshes.iter().any(|m| m.has_indices());
    let total_vertices = meshes.iter().map(|m| m.vertex_count()).sum();

    let mut vertices: Vec<Vertex> = Vec::with_capacity(total_vertices);
    let mut indices: Vec<u32> = Vec::new();
    for mesh in meshes {
        let offset = vertices.len() as u32;
        vertices.extend_from_slice(&mesh.vertices);
        if !any_indexed {
            continue;
        }
        if mesh.has_indices() {
            indices.extend(mesh.indices.iter().map(|&i| i + offset));
        } else {
            indices.extend(offset..offset + mesh.vertex_count() as u32);
        }
    }
    Mesh::with_primitive(vertices, indices, first.primitive)
}

/// [`merge_meshes`] over shared handles.
#[must_use]
pub fn merge_handles(handles: &[MeshHandle]) -> Mesh {
    let refs: Vec<&Mesh> = handles.iter().map(AsRef::as_ref).collect();
    merge_meshes(&refs)
}

/// Line-list mesh tracing the 12 edges of a bounding box.
///
/// `None` for an invalid box.
#[must_use]
pub fn bounding_box_wireframe(bbox: &BoundingBox) -> Option<Mesh> {
    if !bbox.is_valid {
        return None;
    }
    let vertices = bbox.corners().into_iter().map(Vertex::at).collect();
    Some(Mesh::with_primitive(
        vertices,
        BOX_EDGES.to_vec(),
        PrimitiveType::Lines,
    ))
}

/// Line-list mesh with one segment per vertex, from the vertex position
/// along its normal for `length` units.
#[must_use]
pub fn normal_visualization(mesh: &Mesh, length: f32) -> Mesh {
    let mut vertices = Vec::with_capacity(mesh.vertex_count() * 2);
    for v in &mesh.vertices {
        let tip = v.pos() + v.norm() * length;
        vertices.push(Vertex::new(v.pos(), v.norm(), v.uv()));
        vertices.push(Vertex::new(tip, v.norm(), v.uv()));
    }
    let indices = (0..vertices.len() as u32).collect();
    Mesh::with_primitive(vertices, indices, PrimitiveType::Lines)
}

fn vertex_key(v: &Vertex) -> [u32; 8] {
    let [px, py, pz] = v.position;
    let [nx, ny, nz] = v.normal;
    let [u, w] = v.tex_coords;
    [px, py, pz, nx, ny, nz, u, w].map(f32::to_bits)
}

/// Weld bit-identical vertices, returning the unique vertices (in first-
/// seen order) and an index buffer reproducing the input sequence.
#[must_use]
pub fn index_vertices(vertices: &[Vertex]) -> (Vec<Vertex>, Vec<u32>) {
    let mut seen: FxHashMap<[u32; 8], u32> = FxHashMap::default();
    let mut unique = Vec::new();
    let mut indices = Vec::with_capacity(vertices.len());
    for v in vertices {
        let index = *seen.entry(vertex_key(v)).or_insert_with(|| {
            unique.push(*v);
            unique.len() as u32 - 1
        });
        indices.push(index);
    }
    (unique, indices)
}

fn midpoint(a: &Vertex, b: &Vertex) -> Vertex {
    Vertex::new(
        (a.pos() + b.pos()) * 0.5,
        (a.norm() + b.norm()).normalize_or_zero(),
        (a.uv() + b.uv()) * 0.5,
    )
}

fn split_edge(
    midpoints: &mut FxHashMap<(u32, u32), u32>,
    vertices: &mut Vec<Vertex>,
    a: u32,
    b: u32,
) -> u32 {
    let key = if a < b { (a, b) } else { (b, a) };
    *midpoints.entry(key).or_insert_with(|| {
        let mid = midpoint(&vertices[a as usize], &vertices[b as usize]);
        vertices.push(mid);
        vertices.len() as u32 - 1
    })
}

fn subdivide_once(vertices: &mut Vec<Vertex>, indices: &[u32]) -> Vec<u32> {
    let mut midpoints = FxHashMap::default();
    let mut out = Vec::with_capacity(indices.len() * 4);
    for tri in indices.chunks_exact(3) {
        let (a, b, c) = (tri[0], tri[1], tri[2]);
        let ab = split_edge(&mut midpoints, vertices, a, b);
        let bc = split_edge(&mut midpoints, vertices, b, c);
        let ca = split_edge(&mut midpoints, vertices, c, a);
        out.extend_from_slice(&[a, ab, ca, ab, b, bc, ca, bc, c, ab, bc, ca]);
    }
    out
}

/// Split every triangle into four, `levels` times.
///
/// Edge midpoints are shared between neighbouring triangles so the result
/// stays watertight. Midpoint normals are the re-normalized average of the
/// endpoint normals and UVs are averaged. Non-indexed input is welded with
/// [`index_vertices`] first. Meshes that are not triangle lists, or whose
/// indices reference missing vertices, are returned unchanged.
#[must_use]
pub fn subdivide(mesh: &Mesh, levels: u32) -> Mesh {
    if levels == 0
        || mesh.primitive != PrimitiveType::Triangles
        || !mesh.indices_in_bounds()
    {
        return mesh.clone();
    }
    let (mut vertices, mut indices) = if mesh.has_indices() {
        (mesh.vertices.clone(), mesh.indices.clone())
    } else {
        index_vertices(&mesh.vertices)
    };
    for _ in 0..levels {
        indices = subdivide_once(&mut vertices, &indices);
    }
    Mesh::new(vertices, indices)
}

/// Translate every vertex position.
pub fn translate(mesh: &mut Mesh, offset: Vec3) {
    for v in &mut mesh.vertices {
        v.position = (v.pos() + offset).to_array();
    }
    mesh.calculate_bounding_box();
}
