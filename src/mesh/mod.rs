//! Host-side mesh data and procedural geometry.
//!
//! A [`Mesh`] owns interleaved [`Vertex`] data, an optional `u32` index
//! buffer and its [`BoundingBox`]. Meshes are immutable once shared through
//! a [`MeshHandle`]; generators in [`primitives`] and transformations in
//! [`ops`] always return fresh meshes.

mod bounds;
mod core;
mod normals;
/// Merging, debug line meshes, welding and subdivision.
pub mod ops;
/// Parametric shape generators.
pub mod primitives;
mod vertex;

pub use bounds::BoundingBox;
pub use self::core::{Mesh, MeshHandle, PrimitiveType};
pub use normals::{compute_normals, NormalMode};
pub use vertex::Vertex;
