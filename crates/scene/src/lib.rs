pub mod geometry;
pub mod lights;
pub mod materials;
pub mod scene;
pub mod settings;

pub use scene::Scene;
pub use scene::scene_from_yaml_file;
pub use scene::scene_from_yaml_str;
