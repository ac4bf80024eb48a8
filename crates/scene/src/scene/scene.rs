use crate::{
    geometry::{Vec3, AABB},
    lights::{AreaLight, Light},
    materials::Material,
    scene::primitive::{AreaLightIndex, MaterialIndex, Primitive, PrimitiveIndex},
    settings::RenderSettings,
};

use super::{camera::Camera, miss_shader::MissShader};

/// A fully resolved scene document. Everything is constructed once by the
/// loader and read-only afterwards; geometry lives in the `primitives` arena
/// with `root_primitive` as the entry point, and material references have
/// been resolved from names to indices.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub settings: RenderSettings,
    pub camera: Camera,
    pub miss_shader: MissShader,

    pub materials: Vec<Material>,
    /// Declared material names, parallel to `materials`.
    pub material_names: Vec<String>,

    pub lights: Vec<Light>,
    pub area_lights: Vec<AreaLight>,

    pub primitives: Vec<Primitive>,
    pub root_primitive: PrimitiveIndex,
}

impl Scene {
    pub fn root(&self) -> &Primitive {
        &self.primitives[self.root_primitive as usize]
    }

    pub fn primitive(&self, index: PrimitiveIndex) -> &Primitive {
        &self.primitives[index as usize]
    }

    pub fn material_name(&self, index: MaterialIndex) -> &str {
        &self.material_names[index as usize]
    }

    pub fn find_material(&self, name: &str) -> Option<MaterialIndex> {
        self.material_names
            .iter()
            .position(|n| n == name)
            .map(|i| i as MaterialIndex)
    }

    /// Axis-aligned bound of the subtree rooted at `index`.
    pub fn primitive_bounds(&self, index: PrimitiveIndex) -> AABB {
        primitive_bounds(&self.primitives, index)
    }

    /// Axis-aligned bound of the whole scene.
    pub fn bounds(&self) -> AABB {
        self.primitive_bounds(self.root_primitive)
    }
}

/// Bound of the subtree rooted at `index`, walking an arena that may still
/// be under construction (children are always allocated before parents, so
/// every reachable index is already valid).
pub(crate) fn primitive_bounds(primitives: &[Primitive], index: PrimitiveIndex) -> AABB {
    match &primitives[index as usize] {
        Primitive::Basic(basic) => basic.shape.bounding_box(),
        Primitive::Transform(node) => {
            let child = primitive_bounds(primitives, node.primitive);
            if !child.is_finite() {
                // transforming infinite corners would produce NaNs; an
                // unbounded child stays unbounded under any affine map
                return AABB::infinite();
            }

            let (lo, hi) = (child.minimum, child.maximum);
            AABB::from_points(
                [
                    Vec3(lo.0, lo.1, lo.2),
                    Vec3(hi.0, lo.1, lo.2),
                    Vec3(lo.0, hi.1, lo.2),
                    Vec3(hi.0, hi.1, lo.2),
                    Vec3(lo.0, lo.1, hi.2),
                    Vec3(hi.0, lo.1, hi.2),
                    Vec3(lo.0, hi.1, hi.2),
                    Vec3(hi.0, hi.1, hi.2),
                ]
                .map(|corner| node.transform.apply_point(corner)),
            )
        }
        Primitive::Aggregate(aggregate) => {
            let mut bound = AABB::empty();
            for &child in &aggregate.children {
                bound.add_aabb(primitive_bounds(primitives, child));
            }
            bound
        }
        Primitive::Bounded(bounded) => bounded.bound,
    }
}

/// Incrementally assembles the arenas of a [`Scene`]. The loader drives it
/// block by block and finishes with [`SceneBuilder::build`]; name resolution
/// and validation stay with the loader.
#[derive(Debug, Default)]
pub struct SceneBuilder {
    materials: Vec<Material>,
    material_names: Vec<String>,
    lights: Vec<Light>,
    area_lights: Vec<AreaLight>,
    primitives: Vec<Primitive>,
}

impl SceneBuilder {
    pub fn new() -> SceneBuilder {
        SceneBuilder::default()
    }

    pub fn add_material(&mut self, name: &str, material: Material) -> MaterialIndex {
        let index = self.materials.len() as MaterialIndex;
        self.materials.push(material);
        self.material_names.push(name.to_owned());
        index
    }

    pub fn material(&self, index: MaterialIndex) -> &Material {
        &self.materials[index as usize]
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    pub fn add_area_light(&mut self, area_light: AreaLight) -> AreaLightIndex {
        let index = self.area_lights.len() as AreaLightIndex;
        self.area_lights.push(area_light);
        index
    }

    /// Index the next [`SceneBuilder::add_primitive`] call will assign.
    /// Area lights need it before their primitive is pushed.
    pub fn next_primitive_index(&self) -> PrimitiveIndex {
        self.primitives.len() as PrimitiveIndex
    }

    pub fn add_primitive(&mut self, primitive: Primitive) -> PrimitiveIndex {
        let index = self.primitives.len() as PrimitiveIndex;
        self.primitives.push(primitive);
        index
    }

    pub fn primitive_bounds(&self, index: PrimitiveIndex) -> AABB {
        primitive_bounds(&self.primitives, index)
    }

    pub fn build(
        self,
        settings: RenderSettings,
        camera: Camera,
        miss_shader: MissShader,
        root_primitive: PrimitiveIndex,
    ) -> Scene {
        Scene {
            settings,
            camera,
            miss_shader,
            materials: self.materials,
            material_names: self.material_names,
            lights: self.lights,
            area_lights: self.area_lights,
            primitives: self.primitives,
            root_primitive,
        }
    }
}
