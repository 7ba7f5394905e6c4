/// Fixed-function style surface material.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Material {
    /// Ambient reflectance, RGBA.
    pub ambient: [f32; 4],
    /// Diffuse reflectance, RGBA.
    pub diffuse: [f32; 4],
    /// Specular reflectance, RGBA.
    pub specular: [f32; 4],
    /// Specular exponent.
    pub shininess: f32,
}

impl Material {
    /// Opaque white, the default shading of every object.
    pub const WHITE: Self = Self {
        ambient: [1.0; 4],
        diffuse: [1.0; 4],
        specular: [1.0; 4],
        shininess: 100.0,
    };

    /// Copy with the alpha of all three components replaced.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.ambient[3] = alpha;
        self.diffuse[3] = alpha;
        self.specular[3] = alpha;
        self
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How an object is colored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shading {
    /// Flat RGBA color, unlit.
    Rgba([f32; 4]),
    /// Lit material.
    Material(Material),
}

impl Default for Shading {
    fn default() -> Self {
        Self::Material(Material::WHITE)
    }
}

impl Shading {
    /// Alpha of the color, or of the diffuse term.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        match self {
            Self::Rgba(c) => c[3],
            Self::Material(m) => m.diffuse[3],
        }
    }
}
