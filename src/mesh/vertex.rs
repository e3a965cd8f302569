use glam::{Vec2, Vec3};

#[repr(C)]
#[derive(
    Debug, Copy, Clone, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable,
)]
/// Interleaved vertex: position, normal, texture coordinates (32 bytes).
pub struct Vertex {
    /// Object-space position.
    pub position: [f32; 3],
    /// Unit normal (zero when unknown).
    pub normal: [f32; 3],
    /// Texture coordinates.
    pub tex_coords: [f32; 2],
}

impl Vertex {
    /// Byte stride of one vertex in an interleaved buffer.
    pub const STRIDE: usize = 32;

    /// Build a vertex from glam vectors.
    #[must_use]
    pub fn new(position: Vec3, normal: Vec3, tex_coords: Vec2) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            tex_coords: tex_coords.to_array(),
        }
    }

    /// Position-only vertex with zero normal and UV.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            ..Self::default()
        }
    }

    /// Position as a [`Vec3`].
    #[inline]
    #[must_use]
    pub fn pos(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    /// Normal as a [`Vec3`].
    #[inline]
    #[must_use]
    pub fn norm(&self) -> Vec3 {
        Vec3::from_array(self.normal)
    }

    /// Texture coordinates as a [`Vec2`].
    #[inline]
    #[must_use]
    pub fn uv(&self) -> Vec2 {
        Vec2::from_array(self.tex_coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_tightly_packed() {
        let one = Vertex::default();
        assert_eq!(bytemuck::bytes_of(&one).len(), Vertex::STRIDE);
        let verts = [Vertex::default(); 3];
        let bytes: &[u8] = bytemuck::cast_slice(&verts);
        assert_eq!(bytes.len(), 96);
    }

    #[test]
    fn accessors_round_trip_glam_types() {
        let v = Vertex::new(
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::Y,
            Vec2::new(0.25, 0.75),
        );
        assert_eq!(v.pos(), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.norm(), Vec3::Y);
        assert_eq!(v.uv(), Vec2::new(0.25, 0.75));
        assert_eq!(Vertex::at(Vec3::ONE).norm(), Vec3::ZERO);
    }
}
