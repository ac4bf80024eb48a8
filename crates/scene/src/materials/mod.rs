use crate::geometry::Vec3;

/// Shading parameter sets a document can declare. Materials are anonymous
/// here; the owning scene keeps the declared names in a parallel array
/// addressed by the same `MaterialIndex`.
#[derive(Debug, Clone, PartialEq)]
pub enum Material {
    // surface radiates; also the emission source for area-light flagged geometry
    Emissive {
        color: Vec3,
    },

    // ideal diffuse reflector
    Lambertian {
        albedo: Vec3,
    },

    // mirror-like; roughness 0 is a perfect mirror
    Reflective {
        albedo: Vec3,
        roughness: f32,
    },

    // transmissive dielectric, refractive_index is the real IOR
    Refractive {
        albedo: Vec3,
        refractive_index: f32,
    },

    // classic Phong lobe pair
    Phong {
        diffuse: Vec3,
        specular: Vec3,
        shininess: f32,
    },

    // Trowbridge-Reitz microfacet
    Ggx {
        albedo: Vec3,
        roughness: f32,
    },
}

impl Material {
    /// Emitted radiance, if this material emits at all.
    pub fn emission(&self) -> Option<Vec3> {
        match *self {
            Material::Emissive { color } => Some(color),
            _ => None,
        }
    }
}
