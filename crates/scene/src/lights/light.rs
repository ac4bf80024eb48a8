use crate::geometry::Vec3;
use crate::scene::PrimitiveIndex;

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Point {
        color: Vec3,
        position: Vec3,
    },
    Directional {
        color: Vec3,
        // unit length once loaded
        direction: Vec3,
    },
}

/// A primitive flagged as an emitting surface. Kept in a registry separate
/// from the declared lights; `color` is the emission of the primitive's
/// material (zero when that material does not emit).
#[derive(Debug, Clone, PartialEq)]
pub struct AreaLight {
    pub primitive: PrimitiveIndex,
    pub color: Vec3,
}
