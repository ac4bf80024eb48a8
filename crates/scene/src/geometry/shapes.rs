use super::{aabb::AABB, vec3::Vec3};

/// Geometric primitives a scene document can place. Direction-like fields
/// (plane/disc normals, cylinder axes) are unit length once loaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Points p with dot(normal, p) + distance = 0
    Plane {
        normal: Vec3,
        distance: f32,
    },
    Sphere {
        center: Vec3,
        radius: f32,
    },
    Triangle {
        vertices: [Vec3; 3],
    },
    /// Spans corner, corner + edge1, corner + edge2, corner + edge1 + edge2
    Parallelogram {
        corner: Vec3,
        edge1: Vec3,
        edge2: Vec3,
    },
    Disc {
        center: Vec3,
        normal: Vec3,
        radius: f32,
    },
    /// Extends height / 2 along +-axis from center
    Cylinder {
        center: Vec3,
        axis: Vec3,
        radius: f32,
        height: f32,
    },
    Box {
        minimum: Vec3,
        maximum: Vec3,
    },
}

impl Shape {
    /// Tightest axis-aligned bound of the shape. Planes are unbounded and
    /// return [`AABB::infinite`].
    pub fn bounding_box(&self) -> AABB {
        match *self {
            Shape::Plane { .. } => AABB::infinite(),
            Shape::Sphere { center, radius } => AABB::new(
                center - Vec3::splat(radius),
                center + Vec3::splat(radius),
            ),
            Shape::Triangle { vertices } => AABB::from_points(vertices),
            Shape::Parallelogram { corner, edge1, edge2 } => AABB::from_points([
                corner,
                corner + edge1,
                corner + edge2,
                corner + edge1 + edge2,
            ]),
            Shape::Disc { center, normal, radius } => {
                let extent = radius * circle_extents(normal);
                AABB::new(center - extent, center + extent)
            }
            Shape::Cylinder { center, axis, radius, height } => {
                let half_axis = axis * (height / 2.0);
                let cap_extent = radius * circle_extents(axis);
                let extent = Vec3(
                    half_axis.0.abs() + cap_extent.0,
                    half_axis.1.abs() + cap_extent.1,
                    half_axis.2.abs() + cap_extent.2,
                );
                AABB::new(center - extent, center + extent)
            }
            Shape::Box { minimum, maximum } => AABB::new(minimum, maximum),
        }
    }
}

// per-axis half extent of a unit circle with the given unit normal,
// sqrt(1 - n_i^2) clamped against rounding below zero
fn circle_extents(normal: Vec3) -> Vec3 {
    Vec3(
        f32::max(0.0, 1.0 - normal.0 * normal.0).sqrt(),
        f32::max(0.0, 1.0 - normal.1 * normal.1).sqrt(),
        f32::max(0.0, 1.0 - normal.2 * normal.2).sqrt(),
    )
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.0, b.0, epsilon = 1e-5);
        assert_relative_eq!(a.1, b.1, epsilon = 1e-5);
        assert_relative_eq!(a.2, b.2, epsilon = 1e-5);
    }

    #[test]
    fn sphere_bounds() {
        let aabb = Shape::Sphere { center: Vec3(1.0, 2.0, 3.0), radius: 0.5 }.bounding_box();
        assert_eq!(aabb.minimum, Vec3(0.5, 1.5, 2.5));
        assert_eq!(aabb.maximum, Vec3(1.5, 2.5, 3.5));
    }

    #[test]
    fn plane_bounds_are_infinite() {
        let aabb = Shape::Plane { normal: Vec3(0.0, 1.0, 0.0), distance: 4.0 }.bounding_box();
        assert!(!aabb.is_finite());
        assert!(aabb.contains_point(Vec3(1e20, -1e20, 0.0)));
    }

    #[test]
    fn parallelogram_bounds_cover_far_corner() {
        let aabb = Shape::Parallelogram {
            corner: Vec3(-5.0, 19.95, -5.0),
            edge1: Vec3(10.0, 0.0, 0.0),
            edge2: Vec3(0.0, 0.0, 10.0),
        }
        .bounding_box();
        assert_eq!(aabb.minimum, Vec3(-5.0, 19.95, -5.0));
        assert_eq!(aabb.maximum, Vec3(5.0, 19.95, 5.0));
    }

    #[test]
    fn axis_aligned_disc_is_flat() {
        let aabb = Shape::Disc {
            center: Vec3(0.0, 0.0, 1.0),
            normal: Vec3(0.0, 0.0, 1.0),
            radius: 3.0,
        }
        .bounding_box();
        assert_vec3_eq(aabb.minimum, Vec3(-3.0, -3.0, 1.0));
        assert_vec3_eq(aabb.maximum, Vec3(3.0, 3.0, 1.0));
    }

    #[test]
    fn tilted_cylinder_bounds() {
        let inv_sqrt2 = 1.0 / 2.0_f32.sqrt();
        let aabb = Shape::Cylinder {
            center: Vec3::zero(),
            axis: Vec3(inv_sqrt2, inv_sqrt2, 0.0),
            radius: 1.0,
            height: 2.0,
        }
        .bounding_box();

        // half axis contributes 1/sqrt(2) per covered axis, cap circles another 1/sqrt(2)
        let expected = 2.0 * inv_sqrt2;
        assert_vec3_eq(aabb.minimum, Vec3(-expected, -expected, -1.0));
        assert_vec3_eq(aabb.maximum, Vec3(expected, expected, 1.0));
    }
}
