mod light;

pub use light::AreaLight;
pub use light::Light;
