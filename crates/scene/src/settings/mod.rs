/// Global render parameters from the document's `config` block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderSettings {
    /// Progressive sample iterations the renderer should run, at least 1.
    pub iterations: u32,
    /// Output colors are clamped into [min, max]; min <= max holds after load.
    pub color_clamp_min: f32,
    pub color_clamp_max: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        RenderSettings {
            iterations: 1,
            color_clamp_min: 0.0,
            color_clamp_max: f32::INFINITY,
        }
    }
}
