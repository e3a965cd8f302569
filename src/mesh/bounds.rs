use glam::Vec3;

use super::vertex::Vertex;

/// Axis-aligned bounding box over a vertex set.
///
/// `is_valid` stays `false` until computed from a non-empty vertex set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Componentwise minimum corner.
    pub min: Vec3,
    /// Componentwise maximum corner.
    pub max: Vec3,
    /// Whether `min`/`max` describe real geometry.
    pub is_valid: bool,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self::INVALID
    }
}

impl BoundingBox {
    /// Empty box with `is_valid == false`.
    pub const INVALID: Self = Self {
        min: Vec3::ZERO,
        max: Vec3::ZERO,
        is_valid: false,
    };

    /// Valid box spanning the two corners.
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self {
            min,
            max,
            is_valid: true,
        }
    }

    /// Componentwise min/max over the vertex positions.
    #[must_use]
    pub fn from_vertices(vertices: &[Vertex]) -> Self {
        Self::from_points(vertices.iter().map(Vertex::pos))
    }

    /// Componentwise min/max over arbitrary points.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::INVALID;
        };
        let (min, max) =
            iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)));
        Self::new(min, max)
    }

    /// Midpoint of the box.
    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Edge lengths along each axis.
    #[must_use]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Half of [`size`](Self::size).
    #[must_use]
    pub fn half_extents(&self) -> Vec3 {
        self.size() * 0.5
    }

    /// Radius of the sphere enclosing the box, centred at
    /// [`center`](Self::center).
    #[must_use]
    pub fn bounding_radius(&self) -> f32 {
        self.half_extents().length()
    }

    /// The eight corner points, ordered as in a line-list wireframe.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
        ]
    }

    /// Smallest box containing both. An invalid side is ignored.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        match (self.is_valid, other.is_valid) {
            (false, _) => *other,
            (_, false) => *self,
            _ => Self::new(self.min.min(other.min), self.max.max(other.max)),
        }
    }

    /// Box scaled componentwise about the origin, then translated.
    #[must_use]
    pub fn transformed(&self, translation: Vec3, scale: Vec3) -> Self {
        if !self.is_valid {
            return *self;
        }
        Self::from_points(
            self.corners().into_iter().map(|c| c * scale + translation),
        )
    }
}
