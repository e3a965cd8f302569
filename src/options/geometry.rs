use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::mesh::NormalMode;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Geometry", inline)]
#[serde(default)]
/// Tessellation detail for procedural primitives.
pub struct GeometryOptions {
    /// Latitude/longitude segments for spheres.
    #[schemars(title = "Sphere Segments", range(min = 3, max = 128))]
    pub sphere_segments: u32,
    /// Angular segments for cylinders, cones and capsules.
    #[schemars(title = "Radial Segments", range(min = 3, max = 128))]
    pub radial_segments: u32,
    /// Segments around the torus tube.
    #[schemars(title = "Torus Sides", range(min = 3, max = 64))]
    pub torus_sides: u32,
    /// Segments around the torus main ring.
    #[schemars(title = "Torus Rings", range(min = 3, max = 128))]
    pub torus_rings: u32,
    /// Grid subdivisions per side for planes.
    #[schemars(title = "Plane Segments", range(min = 1, max = 256))]
    pub plane_segments: u32,
    /// Shading model when normals are recomputed.
    #[schemars(skip)]
    pub normal_mode: NormalMode,
    /// Length of debug normal lines.
    #[schemars(title = "Normal Length", range(min = 0.01, max = 1.0), extend("step" = 0.01))]
    pub normal_length: f32,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            sphere_segments: 32,
            radial_segments: 32,
            torus_sides: 16,
            torus_rings: 32,
            plane_segments: 10,
            normal_mode: NormalMode::Smooth,
            normal_length: 0.1,
        }
    }
}
