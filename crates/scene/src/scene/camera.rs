use crate::geometry::Vec3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    Perspective {
        // vertical field of view, degrees as authored
        fov: f32,
    },
    Orthographic {
        // vertical world-space extent of the view volume
        ortho_size: f32,
    },
}

/// Viewpoint block of a scene document. Position, target, and up vector are
/// stored exactly as authored; the renderer derives its own basis from them.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,

    pub projection: Projection,
    pub screen_width: u32,
    pub screen_height: u32,
    pub subpixel_count: u32,
}

impl Camera {
    pub fn view_direction(&self) -> Vec3 {
        Vec3::normalized(self.look_at - self.position)
    }

    /// True when no orthonormal camera basis exists: the target coincides
    /// with the position, the up vector vanishes, or up is parallel to the
    /// view direction.
    pub fn has_degenerate_basis(&self) -> bool {
        let view = self.look_at - self.position;
        if view.near_zero() || self.up.near_zero() {
            return true;
        }

        Vec3::cross(Vec3::normalized(view), Vec3::normalized(self.up)).near_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perspective_with_up(up: Vec3) -> Camera {
        Camera {
            position: Vec3::zero(),
            look_at: Vec3(0.0, 0.0, 1.0),
            up,
            projection: Projection::Perspective { fov: 45.0 },
            screen_width: 640,
            screen_height: 480,
            subpixel_count: 1,
        }
    }

    #[test]
    fn upright_basis_is_fine() {
        assert!(!perspective_with_up(Vec3(0.0, 1.0, 0.0)).has_degenerate_basis());
        // up need not be orthogonal to the view, only non-parallel
        assert!(!perspective_with_up(Vec3(0.0, 1.0, 1.0)).has_degenerate_basis());
    }

    #[test]
    fn parallel_up_is_degenerate() {
        assert!(perspective_with_up(Vec3(0.0, 0.0, 1.0)).has_degenerate_basis());
        assert!(perspective_with_up(Vec3(0.0, 0.0, -2.0)).has_degenerate_basis());
        assert!(perspective_with_up(Vec3::zero()).has_degenerate_basis());
    }
}
