use crate::geometry::Vec3;

/// Background response for rays that leave the scene.
#[derive(Debug, Clone, PartialEq)]
pub enum MissShader {
    /// Uniform background color
    Constant {
        color: Vec3,
    },
    /// Procedural sky lit by a sun
    Atmosphere {
        // unit length once loaded
        sun_direction: Vec3,
        sun_intensity: f32,
    },
}
