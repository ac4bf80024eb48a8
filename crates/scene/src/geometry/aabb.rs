use super::vec3::Vec3;

/// Axis-aligned bounding box
/// Defined by 2 points
#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct AABB {
    pub minimum: Vec3,
    pub maximum: Vec3
}

impl AABB {
    pub fn new(minimum: Vec3, maximum: Vec3) -> AABB {
        AABB { minimum, maximum }
    }

    /// Box enclosing all of space. Planes and other unbounded shapes bound to this.
    pub fn infinite() -> AABB {
        AABB {
            minimum: Vec3::splat(f32::NEG_INFINITY),
            maximum: Vec3::splat(f32::INFINITY),
        }
    }

    /// Box enclosing nothing (minimum above maximum), the identity for unions.
    pub fn empty() -> AABB {
        AABB {
            minimum: Vec3::splat(f32::INFINITY),
            maximum: Vec3::splat(f32::NEG_INFINITY),
        }
    }

    /// Smallest box containing every point in the iterator.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>) -> AABB {
        let mut aabb = AABB::empty();
        for point in points {
            aabb.add_point(point);
        }
        aabb
    }

    /// Returns a box which surrounds both a and b
    pub fn surrounding_box(a: AABB, b: AABB) -> AABB {
        AABB {
            minimum: Vec3::elementwise_min(a.minimum, b.minimum),
            maximum: Vec3::elementwise_max(a.maximum, b.maximum),
        }
    }

    pub fn add_point(&mut self, point: Vec3) {
        self.minimum = Vec3::elementwise_min(self.minimum, point);
        self.maximum = Vec3::elementwise_max(self.maximum, point);
    }

    pub fn add_aabb(&mut self, other: AABB) {
        self.minimum = Vec3::elementwise_min(self.minimum, other.minimum);
        self.maximum = Vec3::elementwise_max(self.maximum, other.maximum);
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        self.minimum.0 <= point.0 && point.0 <= self.maximum.0
            && self.minimum.1 <= point.1 && point.1 <= self.maximum.1
            && self.minimum.2 <= point.2 && point.2 <= self.maximum.2
    }

    pub fn contains_aabb(&self, other: AABB) -> bool {
        self.contains_point(other.minimum) && self.contains_point(other.maximum)
    }

    pub fn overlaps(&self, other: AABB) -> bool {
        self.minimum.0 <= other.maximum.0 && other.minimum.0 <= self.maximum.0
            && self.minimum.1 <= other.maximum.1 && other.minimum.1 <= self.maximum.1
            && self.minimum.2 <= other.maximum.2 && other.minimum.2 <= self.maximum.2
    }

    pub fn center(&self) -> Vec3 {
        (self.minimum + self.maximum) * 0.5
    }

    pub fn is_finite(&self) -> bool {
        self.minimum.is_finite() && self.maximum.is_finite()
    }
}
