use glam::Vec3;

/// Distance falloff `1 / (constant + linear·d + quadratic·d²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    /// Constant term.
    pub constant: f32,
    /// Linear term.
    pub linear: f32,
    /// Quadratic term.
    pub quadratic: f32,
}

impl Attenuation {
    /// No falloff at any distance.
    pub const NONE: Self = Self {
        constant: 1.0,
        linear: 0.0,
        quadratic: 0.0,
    };

    /// Attenuation terms.
    #[must_use]
    pub const fn new(constant: f32, linear: f32, quadratic: f32) -> Self {
        Self {
            constant,
            linear,
            quadratic,
        }
    }

    /// Brightness multiplier at `distance`. A non-positive denominator
    /// yields 0 rather than an infinite or negative factor.
    #[must_use]
    pub fn factor(&self, distance: f32) -> f32 {
        let d = distance.abs();
        let denom = self.constant + self.linear * d + self.quadratic * d * d;
        if denom > 0.0 {
            denom.recip()
        } else {
            0.0
        }
    }
}

impl Default for Attenuation {
    /// Roughly a 50-unit range.
    fn default() -> Self {
        Self::new(1.0, 0.09, 0.032)
    }
}

/// Where a light sits and how its contribution falls off.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightKind {
    /// Parallel rays along a unit `direction` (the sun).
    Directional {
        /// Direction the light travels, normalised.
        direction: Vec3,
    },
    /// Omnidirectional emitter with distance attenuation.
    Point {
        /// World-space position.
        position: Vec3,
        /// Falloff with distance.
        attenuation: Attenuation,
    },
}

impl LightKind {
    /// Value of [`LightShaderData::light_type`].
    #[must_use]
    pub const fn type_code(&self) -> i32 {
        match self {
            Self::Directional { .. } => 0,
            Self::Point { .. } => 1,
        }
    }
}

/// A named Phong light.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    name: String,
    kind: LightKind,
    color: Vec3,
    intensity: f32,
    enabled: bool,
}

impl Light {
    /// Direction used for directional lights given a zero vector.
    pub const DEFAULT_DIRECTION: Vec3 = Vec3::NEG_Y;

    fn with_kind(name: impl Into<String>, kind: LightKind) -> Self {
        Self {
            name: name.into(),
            kind,
            color: Vec3::ONE,
            intensity: 1.0,
            enabled: true,
        }
    }

    /// White directional light travelling along `direction`.
    #[must_use]
    pub fn directional(name: impl Into<String>, direction: Vec3) -> Self {
        Self::with_kind(
            name,
            LightKind::Directional {
                direction: direction.normalize_or(Self::DEFAULT_DIRECTION),
            },
        )
    }

    /// White point light at `position` with the default attenuation.
    #[must_use]
    pub fn point(name: impl Into<String>, position: Vec3) -> Self {
        Self::with_kind(
            name,
            LightKind::Point {
                position,
                attenuation: Attenuation::default(),
            },
        )
    }

    /// Builder-style color.
    #[must_use]
    pub const fn with_color(mut self, color: Vec3) -> Self {
        self.color = color;
        self
    }

    /// Builder-style intensity.
    #[must_use]
    pub const fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = intensity;
        self
    }

    // -- Getters --

    /// Lookup name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Directional or point, with its geometry.
    #[must_use]
    pub const fn kind(&self) -> &LightKind {
        &self.kind
    }

    /// Linear RGB color.
    #[must_use]
    pub const fn color(&self) -> Vec3 {
        self.color
    }

    /// Scalar multiplier on `color`.
    #[must_use]
    pub const fn intensity(&self) -> f32 {
        self.intensity
    }

    /// Disabled lights stay in the manager but contribute nothing.
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether this is a directional light.
    #[must_use]
    pub const fn is_directional(&self) -> bool {
        matches!(self.kind, LightKind::Directional { .. })
    }

    /// Whether this is a point light.
    #[must_use]
    pub const fn is_point(&self) -> bool {
        matches!(self.kind, LightKind::Point { .. })
    }

    /// Brightness multiplier at `distance` from the light. Always 1 for
    /// directional lights.
    #[must_use]
    pub fn attenuation_at(&self, distance: f32) -> f32 {
        match self.kind {
            LightKind::Directional { .. } => 1.0,
            LightKind::Point { attenuation, .. } => attenuation.factor(distance),
        }
    }

    // -- Setters --

    /// Set the color.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Set the intensity.
    pub fn set_intensity(&mut self, intensity: f32) {
        self.intensity = intensity;
    }

    /// Enable or disable.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Rename.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Point a directional light along `direction` (normalised; a zero
    /// vector keeps the current direction). No effect on point lights.
    pub fn set_direction(&mut self, direction: Vec3) {
        if let LightKind::Directional { direction: current } = &mut self.kind {
            *current = direction.normalize_or(*current);
        }
    }

    /// Move a point light. No effect on directional lights.
    pub fn set_position(&mut self, position: Vec3) {
        if let LightKind::Point { position: current, .. } = &mut self.kind {
            *current = position;
        }
    }

    /// Replace a point light's falloff. No effect on directional lights.
    pub fn set_attenuation(&mut self, attenuation: Attenuation) {
        if let LightKind::Point {
            attenuation: current,
            ..
        } = &mut self.kind
        {
            *current = attenuation;
        }
    }

    /// GPU-ready record for this light.
    #[must_use]
    pub fn shader_data(&self) -> LightShaderData {
        let (position, direction, attenuation) = match self.kind {
            LightKind::Directional { direction } => {
                (Vec3::ZERO, direction, Attenuation::NONE)
            }
            LightKind::Point {
                position,
                attenuation,
            } => (position, Vec3::ZERO, attenuation),
        };
        LightShaderData {
            position: position.to_array(),
            _pad0: 0.0,
            direction: direction.to_array(),
            _pad1: 0.0,
            color: self.color.to_array(),
            intensity: self.intensity,
            constant: attenuation.constant,
            linear: attenuation.linear,
            quadratic: attenuation.quadratic,
            light_type: self.kind.type_code(),
            enabled: i32::from(self.enabled),
            _pad2: [0; 3],
        }
    }
}

/// One entry of the light uniform array.
/// NOTE: Must match the GLSL std140 struct layout exactly (80 bytes)
///
/// Layout:
///   position: vec3     (offset 0,  align 16)
///   _pad0: float       (offset 12)
///   direction: vec3    (offset 16, align 16)
///   _pad1: float       (offset 28)
///   color: vec3        (offset 32, align 16)
///   intensity: float   (offset 44)
///   constant: float    (offset 48)
///   linear: float      (offset 52)
///   quadratic: float   (offset 56)
///   type: int          (offset 60)
///   enabled: int       (offset 64)
///   _pad2: int[3]      (offset 68, pads the array stride to 80)
///   Total: 80 bytes
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightShaderData {
    /// Point light position (zero for directional lights).
    pub position: [f32; 3],
    _pad0: f32,
    /// Directional light direction (zero for point lights).
    pub direction: [f32; 3],
    _pad1: f32,
    /// Linear RGB color.
    pub color: [f32; 3],
    /// Color multiplier.
    pub intensity: f32,
    /// Constant attenuation term.
    pub constant: f32,
    /// Linear attenuation term.
    pub linear: f32,
    /// Quadratic attenuation term.
    pub quadratic: f32,
    /// 0 = directional, 1 = point.
    pub light_type: i32,
    /// 1 when the light contributes, 0 for disabled or empty slots.
    pub enabled: i32,
    _pad2: [i32; 3],
}

impl LightShaderData {
    /// Size of one array element in bytes.
    pub const SIZE: usize = 80;
}

impl Default for LightShaderData {
    /// Empty, disabled slot.
    fn default() -> Self {
        bytemuck::Zeroable::zeroed()
    }
}
