use crate::mesh::{primitives, Mesh};
use crate::options::GeometryOptions;

/// Parameters of one procedural primitive.
///
/// Two shapes with bit-identical parameters generate identical meshes, so
/// a shape doubles as the cache key in [`MeshLibrary`](super::MeshLibrary).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimitiveShape {
    /// Axis-aligned cube with the given edge length.
    Cube {
        /// Edge length.
        size: f32,
    },
    /// UV sphere.
    Sphere {
        /// Sphere radius.
        radius: f32,
        /// Latitude and longitude segment count.
        segments: u32,
    },
    /// Grid in the XZ plane.
    Plane {
        /// Extent along X.
        width: f32,
        /// Extent along Z.
        height: f32,
        /// Columns.
        width_segments: u32,
        /// Rows.
        height_segments: u32,
    },
    /// Capped cylinder along Y.
    Cylinder {
        /// Radius of the wall and caps.
        radius: f32,
        /// Total height.
        height: f32,
        /// Angular segment count.
        segments: u32,
    },
    /// Cone with its base below the origin.
    Cone {
        /// Base radius.
        radius: f32,
        /// Base to apex.
        height: f32,
        /// Angular segment count.
        segments: u32,
    },
    /// Torus in the XZ plane.
    Torus {
        /// Rim radius.
        outer_radius: f32,
        /// Hole radius.
        inner_radius: f32,
        /// Segments around the tube.
        sides: u32,
        /// Segments around the main ring.
        rings: u32,
    },
    /// Cylinder with hemispherical ends.
    Capsule {
        /// Radius of the band and hemispheres.
        radius: f32,
        /// Length of the cylindrical band.
        height: f32,
        /// Angular segment count.
        segments: u32,
    },
}

/// Hashable identity of a [`PrimitiveShape`]: variant tag plus raw
/// parameter bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ShapeKey {
    kind: u8,
    params: [u32; 4],
}

impl PrimitiveShape {
    /// Sphere tessellated per `geometry`.
    #[must_use]
    pub fn sphere(radius: f32, geometry: &GeometryOptions) -> Self {
        Self::Sphere {
            radius,
            segments: geometry.sphere_segments,
        }
    }

    /// Square plane tessellated per `geometry`.
    #[must_use]
    pub fn plane(size: f32, geometry: &GeometryOptions) -> Self {
        Self::Plane {
            width: size,
            height: size,
            width_segments: geometry.plane_segments,
            height_segments: geometry.plane_segments,
        }
    }

    /// Cylinder tessellated per `geometry`.
    #[must_use]
    pub fn cylinder(
        radius: f32,
        height: f32,
        geometry: &GeometryOptions,
    ) -> Self {
        Self::Cylinder {
            radius,
            height,
            segments: geometry.radial_segments,
        }
    }

    /// Cone tessellated per `geometry`.
    #[must_use]
    pub fn cone(radius: f32, height: f32, geometry: &GeometryOptions) -> Self {
        Self::Cone {
            radius,
            height,
            segments: geometry.radial_segments,
        }
    }

    /// Torus tessellated per `geometry`.
    #[must_use]
    pub fn torus(
        outer_radius: f32,
        inner_radius: f32,
        geometry: &GeometryOptions,
    ) -> Self {
        Self::Torus {
            outer_radius,
            inner_radius,
            sides: geometry.torus_sides,
            rings: geometry.torus_rings,
        }
    }

    /// Capsule tessellated per `geometry`.
    #[must_use]
    pub fn capsule(
        radius: f32,
        height: f32,
        geometry: &GeometryOptions,
    ) -> Self {
        Self::Capsule {
            radius,
            height,
            segments: geometry.radial_segments,
        }
    }

    /// Short lowercase name of the shape kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Cube { .. } => "cube",
            Self::Sphere { .. } => "sphere",
            Self::Plane { .. } => "plane",
            Self::Cylinder { .. } => "cylinder",
            Self::Cone { .. } => "cone",
            Self::Torus { .. } => "torus",
            Self::Capsule { .. } => "capsule",
        }
    }

    /// Run the matching generator.
    #[must_use]
    pub fn generate(&self) -> Mesh {
        match *self {
            Self::Cube { size } => primitives::cube(size),
            Self::Sphere { radius, segments } => {
                primitives::sphere(radius, segments)
            }
            Self::Plane {
                width,
                height,
                width_segments,
                height_segments,
            } => primitives::plane(
                width,
                height,
                width_segments,
                height_segments,
            ),
            Self::Cylinder {
                radius,
                height,
                segments,
            } => primitives::cylinder(radius, height, segments),
            Self::Cone {
                radius,
                height,
                segments,
            } => primitives::cone(radius, height, segments),
            Self::Torus {
                outer_radius,
                inner_radius,
                sides,
                rings,
            } => primitives::torus(outer_radius, inner_radius, sides, rings),
            Self::Capsule {
                radius,
                height,
                segments,
            } => primitives::capsule(radius, height, segments),
        }
    }

    pub(crate) fn key(&self) -> ShapeKey {
        let (kind, params) = match *self {
            Self::Cube { size } => (0, [size.to_bits(), 0, 0, 0]),
            Self::Sphere { radius, segments } => {
                (1, [radius.to_bits(), segments, 0, 0])
            }
            Self::Plane {
                width,
                height,
                width_segments,
                height_segments,
            } => (
                2,
                [
                    width.to_bits(),
                    height.to_bits(),
                    width_segments,
                    height_segments,
                ],
            ),
            Self::Cylinder {
                radius,
                height,
                segments,
            } => (3, [radius.to_bits(), height.to_bits(), segments, 0]),
            Self::Cone {
                radius,
                height,
                segments,
            } => (4, [radius.to_bits(), height.to_bits(), segments, 0]),
            Self::Torus {
                outer_radius,
                inner_radius,
                sides,
                rings,
            } => (
                5,
                [outer_radius.to_bits(), inner_radius.to_bits(), sides, rings],
            ),
            Self::Capsule {
                radius,
                height,
                segments,
            } => (6, [radius.to_bits(), height.to_bits(), segments, 0]),
        };
        ShapeKey { kind, params }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_separate_kinds_with_equal_parameters() {
        let cyl = PrimitiveShape::Cylinder {
            radius: 1.0,
            height: 2.0,
            segments: 8,
        };
        let cone = PrimitiveShape::Cone {
            radius: 1.0,
            height: 2.0,
            segments: 8,
        };
        assert_ne!(cyl.key(), cone.key());
        assert_eq!(cyl.key(), cyl.key());
    }

    #[test]
    fn geometry_options_drive_tessellation() {
        let geometry = GeometryOptions {
            sphere_segments: 6,
            ..GeometryOptions::default()
        };
        let mesh = PrimitiveShape::sphere(1.0, &geometry).generate();
        assert_eq!(mesh.vertex_count(), 7 * 7);
    }

    #[test]
    fn generate_matches_direct_call() {
        let shape = PrimitiveShape::Torus {
            outer_radius: 2.0,
            inner_radius: 1.0,
            sides: 8,
            rings: 12,
        };
        assert_eq!(shape.generate(), primitives::torus(2.0, 1.0, 8, 12));
        assert_eq!(shape.kind_name(), "torus");
    }
}
