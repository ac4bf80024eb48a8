use super::{Matrix4x4, Vec3};

/// One authored transformation step. A `transformed` node keeps its step
/// list in document order next to the composed matrices so the document
/// can be reproduced exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformOp {
    Scale(Vec3),
    Rotate { axis: Vec3, degrees: f32 },
    Translate(Vec3),
}

impl TransformOp {
    pub fn to_transform(&self) -> Transform {
        match *self {
            TransformOp::Scale(scale) => Transform::scale(scale),
            TransformOp::Rotate { axis, degrees } => Transform::rotate(degrees.to_radians(), axis),
            TransformOp::Translate(direction) => Transform::translate(direction),
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    forward: Matrix4x4,
    inverse: Matrix4x4
}

impl Transform {
    pub fn identity() -> Self {
        Transform { forward: Matrix4x4::identity(), inverse: Matrix4x4::identity() }
    }

    pub fn translate(direction: Vec3) -> Self {
        Transform {
            forward: Matrix4x4::create(1.0, 0.0, 0.0, direction.0,
                                       0.0, 1.0, 0.0, direction.1,
                                       0.0, 0.0, 1.0, direction.2,
                                       0.0, 0.0, 0.0, 1.0),
            inverse: Matrix4x4::create(1.0, 0.0, 0.0, -direction.0,
                                       0.0, 1.0, 0.0, -direction.1,
                                       0.0, 0.0, 1.0, -direction.2,
                                       0.0, 0.0, 0.0, 1.0),
        }
    }

    pub fn scale(scale: Vec3) -> Self {
        Transform {
            forward: Matrix4x4::create(scale.0, 0.0, 0.0, 0.0,
                                       0.0, scale.1, 0.0, 0.0,
                                       0.0, 0.0, scale.2, 0.0,
                                       0.0, 0.0, 0.0, 1.0),
            inverse: Matrix4x4::create(1.0 / scale.0, 0.0, 0.0, 0.0,
                                       0.0, 1.0 / scale.1, 0.0, 0.0,
                                       0.0, 0.0, 1.0 / scale.2, 0.0,
                                       0.0, 0.0, 0.0, 1.0),
        }
    }

    // theta in radians, axis must be unit length (rotation inverse is its transpose)
    pub fn rotate(theta: f32, axis: Vec3) -> Self {
        let forward = Matrix4x4::rotation(theta, axis);
        Transform {
            inverse: forward.transposed(),
            forward,
        }
    }

    /// Composes the steps of `ops` in slice order: the first op is applied
    /// to a point first.
    pub fn from_ops(ops: &[TransformOp]) -> Self {
        let mut transform = Transform::identity();
        for op in ops {
            transform = transform.compose(op.to_transform());
        }
        transform
    }

    pub fn compose(&self, other: Transform) -> Self {
        // OTHER matmul SELF for forward direction
        // SELF.INVERSE matmul OTHER for inverse
        Transform {
            forward: Matrix4x4::matmul(other.forward, self.forward),
            inverse: Matrix4x4::matmul(self.inverse, other.inverse)
        }
    }

    pub fn apply_point(&self, point: Vec3) -> Vec3 {
        self.forward.apply_point(point)
    }

    pub fn apply_vector(&self, v: Vec3) -> Vec3 {
        self.forward.apply_vector(v)
    }

    pub fn invert(&self) -> Transform {
        Transform { forward: self.inverse, inverse: self.forward }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.0, b.0, epsilon = 1e-4);
        assert_relative_eq!(a.1, b.1, epsilon = 1e-4);
        assert_relative_eq!(a.2, b.2, epsilon = 1e-4);
    }

    #[test]
    fn ops_compose_in_listed_order() {
        let scale_then_translate = Transform::from_ops(&[
            TransformOp::Scale(Vec3(2.0, 2.0, 2.0)),
            TransformOp::Translate(Vec3(1.0, 0.0, 0.0)),
        ]);
        let translate_then_scale = Transform::from_ops(&[
            TransformOp::Translate(Vec3(1.0, 0.0, 0.0)),
            TransformOp::Scale(Vec3(2.0, 2.0, 2.0)),
        ]);

        let p = Vec3(1.0, 1.0, 1.0);
        assert_vec3_eq(scale_then_translate.apply_point(p), Vec3(3.0, 2.0, 2.0));
        assert_vec3_eq(translate_then_scale.apply_point(p), Vec3(4.0, 2.0, 2.0));
    }

    #[test]
    fn rotation_about_y() {
        let quarter_turn = Transform::rotate(90.0_f32.to_radians(), Vec3(0.0, 1.0, 0.0));
        assert_vec3_eq(quarter_turn.apply_point(Vec3(1.0, 0.0, 0.0)), Vec3(0.0, 0.0, -1.0));
        assert_vec3_eq(quarter_turn.apply_vector(Vec3(0.0, 0.0, -1.0)), Vec3(-1.0, 0.0, 0.0));
    }

    #[test]
    fn inverse_undoes_forward() {
        let transform = Transform::from_ops(&[
            TransformOp::Scale(Vec3(2.0, 3.0, 4.0)),
            TransformOp::Rotate { axis: Vec3(0.0, 0.0, 1.0), degrees: 30.0 },
            TransformOp::Translate(Vec3(-1.0, 5.0, 0.5)),
        ]);

        let p = Vec3(0.25, -2.0, 7.0);
        assert_vec3_eq(transform.invert().apply_point(transform.apply_point(p)), p);
    }
}
