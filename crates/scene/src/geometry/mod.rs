mod aabb;
mod matrix4x4;
mod shapes;
mod transform;
mod vec3;

pub use aabb::AABB;
pub use matrix4x4::Matrix4x4;
pub use shapes::Shape;
pub use transform::Transform;
pub use transform::TransformOp;
pub use vec3::Vec3;
