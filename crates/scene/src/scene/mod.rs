mod scene;
mod camera;
mod miss_shader;
mod primitive;
mod yaml;

pub use scene::Scene;
pub use scene::SceneBuilder;
pub use primitive::{
    Primitive, BasicPrimitive, TransformPrimitive, AggregatePrimitive, BoundedPrimitive,
    PrimitiveIndex, MaterialIndex, AreaLightIndex
};
pub use camera::Camera;
pub use camera::Projection;
pub use miss_shader::MissShader;
pub use yaml::{
    scene_from_yaml_file, scene_from_yaml_str, scene_to_yaml_file, scene_to_yaml_string,
    LoadError, ParseError, ReferenceError, SchemaError, DumpError
};
