//! YAML Scene Description Loader
//!
//! Parses scene documents into a resolved [`Scene`] and serializes a
//! [`Scene`] back into a document. One YAML file describes one scene.
//!
//! # Supported Blocks
//!
//! ## Scene-wide
//! - `config` - `iterations` and `colorClamp: [min, max]`
//! - `camera` - `perspective` (with `fov`) or `orthographic` (with `orthoSize`)
//! - `missShader` - `constant` (with `color`) or `atmosphere` (with
//!   `sunDirection`/`sunIntensity`)
//!
//! ## Materials
//! - `emissive`, `lambertian`, `reflective`, `refractive`, `phong`, `ggx` -
//!   each named; geometry refers to materials by that name
//! - color-valued parameters accept a scalar (replicated to RGB) or `[r, g, b]`
//!
//! ## Lights
//! - `point` - with `color` and `position`
//! - `directional` - with `color` and `direction` (normalized on load)
//!
//! ## Geometry
//! - shapes: `plane`, `sphere`, `triangle`, `parallelogram`, `disc`,
//!   `cylinder`, `box` - each takes `material` and an optional `areaLight` flag
//! - `collection` - ordered grouping of child nodes
//! - `transformed` - wraps one child with an ordered `transformations` list
//!   (`scale`, `rotate` with degrees, `translate`)
//! - `boundingGeometry` - wraps one child with an `aabb`; the bound is
//!   computed from the child when omitted
//!
//! ## Other
//! - `#` comments are inert; commented-out blocks contribute nothing
//!
//! # Failure Modes
//! All failures surface synchronously from the load call: [`ParseError`] for
//! malformed structure and invalid values, [`SchemaError`] for unknown
//! variant tags, [`ReferenceError`] for material-name table violations.

use std::{
    collections::{HashMap, HashSet},
    fs,
    path::Path,
};

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use thiserror::Error;
use tracing::warn;

use crate::{
    geometry::{Shape, Transform, TransformOp, Vec3, AABB},
    lights::{AreaLight, Light},
    materials::Material,
    scene::{
        camera::{Camera, Projection},
        miss_shader::MissShader,
        primitive::{
            AggregatePrimitive, BasicPrimitive, BoundedPrimitive, MaterialIndex, Primitive,
            PrimitiveIndex, TransformPrimitive,
        },
        scene::{Scene, SceneBuilder},
    },
    settings::RenderSettings,
};

/// Malformed document structure or an invalid parameter value.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed document: {0}")]
    Document(String),
    #[error("iterations must be at least 1, got {0}")]
    BadIterations(u32),
    #[error("colorClamp minimum {min} exceeds maximum {max}")]
    ColorClampOrder { min: f32, max: f32 },
    #[error("screenSize must be nonzero, got [{width}, {height}]")]
    BadScreenSize { width: u32, height: u32 },
    #[error("subpixelCount must be at least 1")]
    BadSubpixelCount,
    #[error("camera up vector is parallel to the view direction")]
    DegenerateCamera,
    #[error("{0} must be a non-zero vector")]
    DegenerateVector(&'static str),
    #[error("scale must have no zero component")]
    ZeroScale,
    #[error("{context} must be positive, got {value}")]
    NonPositive { context: &'static str, value: f32 },
    #[error("box minimum exceeds maximum")]
    BoxExtents,
}

/// A variant tag the schema does not define.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("unknown camera type `{0}`")]
    UnknownCamera(String),
    #[error("unknown miss shader type `{0}`")]
    UnknownMissShader(String),
    #[error("unknown material type `{0}`")]
    UnknownMaterial(String),
    #[error("unknown light type `{0}`")]
    UnknownLight(String),
    #[error("unknown geometry type `{0}`")]
    UnknownGeometry(String),
    #[error("unknown transformation `{0}`")]
    UnknownTransformation(String),
}

/// A violation of the material name table.
#[derive(Debug, Error)]
pub enum ReferenceError {
    #[error("material `{0}` is declared more than once")]
    DuplicateMaterial(String),
    #[error("material `{0}` is not declared in the materials table")]
    UndeclaredMaterial(String),
}

/// Anything a load can fail with.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Reference(#[from] ReferenceError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Anything a dump can fail with.
#[derive(Debug, Error)]
pub enum DumpError {
    #[error("serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// document layer

fn is_false(v: &bool) -> bool {
    !*v
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct SceneDoc {
    config: ConfigParams,
    camera: Value,
    miss_shader: Value,
    #[serde(default)]
    materials: Vec<Value>,
    #[serde(default)]
    lights: Vec<Value>,
    geometry: Value,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ConfigParams {
    iterations: u32,
    color_clamp: [f32; 2],
}

/// A color-like value: either one scalar replicated across RGB or an
/// explicit triple. Dumps always write the triple form.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum ScalarOrTriple {
    Scalar(f32),
    Triple([f32; 3]),
}

impl From<ScalarOrTriple> for Vec3 {
    fn from(value: ScalarOrTriple) -> Vec3 {
        match value {
            ScalarOrTriple::Scalar(v) => Vec3::splat(v),
            ScalarOrTriple::Triple(v) => v.into(),
        }
    }
}

fn triple(v: Vec3) -> ScalarOrTriple {
    ScalarOrTriple::Triple(v.into())
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct PerspectiveParams {
    position: [f32; 3],
    look_at: [f32; 3],
    up: [f32; 3],
    fov: f32,
    screen_size: [u32; 2],
    subpixel_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct OrthographicParams {
    position: [f32; 3],
    look_at: [f32; 3],
    up: [f32; 3],
    ortho_size: f32,
    screen_size: [u32; 2],
    subpixel_count: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ConstantParams {
    color: ScalarOrTriple,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct AtmosphereParams {
    sun_direction: [f32; 3],
    sun_intensity: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct EmissiveParams {
    name: String,
    color: ScalarOrTriple,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct LambertianParams {
    name: String,
    albedo: ScalarOrTriple,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ReflectiveParams {
    name: String,
    albedo: ScalarOrTriple,
    roughness: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RefractiveParams {
    name: String,
    albedo: ScalarOrTriple,
    refractive_index: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct PhongParams {
    name: String,
    diffuse: ScalarOrTriple,
    specular: ScalarOrTriple,
    shininess: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct GgxParams {
    name: String,
    albedo: ScalarOrTriple,
    roughness: f32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct PointParams {
    color: ScalarOrTriple,
    position: [f32; 3],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct DirectionalParams {
    color: ScalarOrTriple,
    direction: [f32; 3],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct PlaneParams {
    material: String,
    normal: [f32; 3],
    distance: f32,
    #[serde(default, skip_serializing_if = "is_false")]
    area_light: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct SphereParams {
    material: String,
    center: [f32; 3],
    radius: f32,
    #[serde(default, skip_serializing_if = "is_false")]
    area_light: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct TriangleParams {
    material: String,
    vertices: [[f32; 3]; 3],
    #[serde(default, skip_serializing_if = "is_false")]
    area_light: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct ParallelogramParams {
    material: String,
    corner: [f32; 3],
    edge1: [f32; 3],
    edge2: [f32; 3],
    #[serde(default, skip_serializing_if = "is_false")]
    area_light: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct DiscParams {
    material: String,
    center: [f32; 3],
    normal: [f32; 3],
    radius: f32,
    #[serde(default, skip_serializing_if = "is_false")]
    area_light: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct CylinderParams {
    material: String,
    center: [f32; 3],
    axis: [f32; 3],
    radius: f32,
    height: f32,
    #[serde(default, skip_serializing_if = "is_false")]
    area_light: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct BoxParams {
    material: String,
    minimum: [f32; 3],
    maximum: [f32; 3],
    #[serde(default, skip_serializing_if = "is_false")]
    area_light: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct CollectionParams {
    children: Vec<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct TransformedParams {
    transformations: Vec<Value>,
    child: Value,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct BoundingGeometryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    aabb: Option<AabbParams>,
    child: Value,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct AabbParams {
    minimum: [f32; 3],
    maximum: [f32; 3],
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
struct RotateParams {
    axis: [f32; 3],
    degrees: f32,
}

// ---------------------------------------------------------------------------
// loading

/// Reads and resolves one scene document from disk.
pub fn scene_from_yaml_file(filepath: &Path) -> Result<Scene, LoadError> {
    let source = fs::read_to_string(filepath)?;
    scene_from_yaml_str(&source)
}

/// Resolves one scene document from its source text.
pub fn scene_from_yaml_str(source: &str) -> Result<Scene, LoadError> {
    let doc: SceneDoc =
        serde_yaml::from_str(source).map_err(|err| ParseError::Document(err.to_string()))?;

    let settings = settings_from_doc(&doc.config)?;
    let camera = camera_from_doc(doc.camera)?;
    let miss_shader = miss_shader_from_doc(doc.miss_shader)?;

    let mut builder = SceneBuilder::new();
    let mut state = LoaderState::default();

    for material_value in doc.materials {
        parse_material(material_value, &mut state, &mut builder)?;
    }
    for light_value in doc.lights {
        parse_light(light_value, &mut builder)?;
    }
    let root_primitive = parse_geometry(doc.geometry, &mut state, &mut builder)?;

    state.warn_unreferenced();

    Ok(builder.build(settings, camera, miss_shader, root_primitive))
}

/// Name resolution state carried across the passes of one load.
#[derive(Debug, Default)]
struct LoaderState {
    named_materials: HashMap<String, MaterialIndex>,
    declaration_order: Vec<String>,
    referenced: HashSet<MaterialIndex>,
}

impl LoaderState {
    fn declare(&mut self, name: &str, index: MaterialIndex) -> Result<(), ReferenceError> {
        if self.named_materials.insert(name.to_owned(), index).is_some() {
            return Err(ReferenceError::DuplicateMaterial(name.to_owned()));
        }
        self.declaration_order.push(name.to_owned());
        Ok(())
    }

    fn resolve(&mut self, name: &str) -> Result<MaterialIndex, ReferenceError> {
        match self.named_materials.get(name) {
            Some(&index) => {
                self.referenced.insert(index);
                Ok(index)
            }
            None => Err(ReferenceError::UndeclaredMaterial(name.to_owned())),
        }
    }

    fn warn_unreferenced(&self) {
        for name in &self.declaration_order {
            let index = self.named_materials[name];
            if !self.referenced.contains(&index) {
                warn!("material '{}' is declared but never referenced", name);
            }
        }
    }
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, ParseError> {
    serde_yaml::from_value(value).map_err(|err| ParseError::Document(err.to_string()))
}

/// Splits a single-key variant map into its tag and payload.
fn variant_tag(value: Value, context: &'static str) -> Result<(String, Value), ParseError> {
    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(ParseError::Document(format!(
                "{} must be a single-key map",
                context
            )))
        }
    };
    if mapping.len() != 1 {
        return Err(ParseError::Document(format!(
            "{} must have exactly one variant key, found {}",
            context,
            mapping.len()
        )));
    }

    match mapping.into_iter().next() {
        Some((Value::String(tag), payload)) => Ok((tag, payload)),
        Some(_) => Err(ParseError::Document(format!(
            "{} variant key must be a string",
            context
        ))),
        None => Err(ParseError::Document(format!(
            "{} is missing its variant key",
            context
        ))),
    }
}

fn positive(value: f32, context: &'static str) -> Result<f32, ParseError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ParseError::NonPositive { context, value })
    }
}

// directions within this tolerance of unit length are stored as authored;
// renormalizing them would drift the low bits and a reloaded dump would no
// longer compare equal
const UNIT_LENGTH_TOLERANCE: f32 = 1e-6;

fn unit_vector(value: [f32; 3], context: &'static str) -> Result<Vec3, ParseError> {
    let v = Vec3::from(value);
    if v.near_zero() {
        return Err(ParseError::DegenerateVector(context));
    }
    if (v.square_magnitude() - 1.0).abs() <= UNIT_LENGTH_TOLERANCE {
        return Ok(v);
    }
    Ok(Vec3::normalized(v))
}

fn settings_from_doc(config: &ConfigParams) -> Result<RenderSettings, ParseError> {
    if config.iterations < 1 {
        return Err(ParseError::BadIterations(config.iterations));
    }
    let [min, max] = config.color_clamp;
    if min > max {
        return Err(ParseError::ColorClampOrder { min, max });
    }

    Ok(RenderSettings {
        iterations: config.iterations,
        color_clamp_min: min,
        color_clamp_max: max,
    })
}

fn camera_from_doc(value: Value) -> Result<Camera, LoadError> {
    let (tag, payload) = variant_tag(value, "camera")?;
    match tag.as_str() {
        "perspective" => {
            let params: PerspectiveParams = decode(payload)?;
            positive(params.fov, "camera fov")?;
            build_camera(
                params.position,
                params.look_at,
                params.up,
                Projection::Perspective { fov: params.fov },
                params.screen_size,
                params.subpixel_count,
            )
        }
        "orthographic" => {
            let params: OrthographicParams = decode(payload)?;
            positive(params.ortho_size, "camera orthoSize")?;
            build_camera(
                params.position,
                params.look_at,
                params.up,
                Projection::Orthographic {
                    ortho_size: params.ortho_size,
                },
                params.screen_size,
                params.subpixel_count,
            )
        }
        other => Err(SchemaError::UnknownCamera(other.to_owned()).into()),
    }
}

fn build_camera(
    position: [f32; 3],
    look_at: [f32; 3],
    up: [f32; 3],
    projection: Projection,
    screen_size: [u32; 2],
    subpixel_count: u32,
) -> Result<Camera, LoadError> {
    let [width, height] = screen_size;
    if width == 0 || height == 0 {
        return Err(ParseError::BadScreenSize { width, height }.into());
    }
    if subpixel_count == 0 {
        return Err(ParseError::BadSubpixelCount.into());
    }

    let camera = Camera {
        position: position.into(),
        look_at: look_at.into(),
        up: up.into(),
        projection,
        screen_width: width,
        screen_height: height,
        subpixel_count,
    };
    if camera.has_degenerate_basis() {
        return Err(ParseError::DegenerateCamera.into());
    }

    Ok(camera)
}

fn miss_shader_from_doc(value: Value) -> Result<MissShader, LoadError> {
    let (tag, payload) = variant_tag(value, "missShader")?;
    match tag.as_str() {
        "constant" => {
            let params: ConstantParams = decode(payload)?;
            Ok(MissShader::Constant {
                color: params.color.into(),
            })
        }
        "atmosphere" => {
            let params: AtmosphereParams = decode(payload)?;
            Ok(MissShader::Atmosphere {
                sun_direction: unit_vector(params.sun_direction, "atmosphere sunDirection")?,
                sun_intensity: params.sun_intensity,
            })
        }
        other => Err(SchemaError::UnknownMissShader(other.to_owned()).into()),
    }
}

fn parse_material(
    value: Value,
    state: &mut LoaderState,
    builder: &mut SceneBuilder,
) -> Result<(), LoadError> {
    let (tag, payload) = variant_tag(value, "material")?;
    let (name, material) = match tag.as_str() {
        "emissive" => {
            let params: EmissiveParams = decode(payload)?;
            (
                params.name,
                Material::Emissive {
                    color: params.color.into(),
                },
            )
        }
        "lambertian" => {
            let params: LambertianParams = decode(payload)?;
            (
                params.name,
                Material::Lambertian {
                    albedo: params.albedo.into(),
                },
            )
        }
        "reflective" => {
            let params: ReflectiveParams = decode(payload)?;
            (
                params.name,
                Material::Reflective {
                    albedo: params.albedo.into(),
                    roughness: params.roughness,
                },
            )
        }
        "refractive" => {
            let params: RefractiveParams = decode(payload)?;
            positive(params.refractive_index, "refractiveIndex")?;
            (
                params.name,
                Material::Refractive {
                    albedo: params.albedo.into(),
                    refractive_index: params.refractive_index,
                },
            )
        }
        "phong" => {
            let params: PhongParams = decode(payload)?;
            (
                params.name,
                Material::Phong {
                    diffuse: params.diffuse.into(),
                    specular: params.specular.into(),
                    shininess: params.shininess,
                },
            )
        }
        "ggx" => {
            let params: GgxParams = decode(payload)?;
            (
                params.name,
                Material::Ggx {
                    albedo: params.albedo.into(),
                    roughness: params.roughness,
                },
            )
        }
        other => return Err(SchemaError::UnknownMaterial(other.to_owned()).into()),
    };

    let index = builder.add_material(&name, material);
    state.declare(&name, index)?;

    Ok(())
}

fn parse_light(value: Value, builder: &mut SceneBuilder) -> Result<(), LoadError> {
    let (tag, payload) = variant_tag(value, "light")?;
    match tag.as_str() {
        "point" => {
            let params: PointParams = decode(payload)?;
            builder.add_light(Light::Point {
                color: params.color.into(),
                position: params.position.into(),
            });
        }
        "directional" => {
            let params: DirectionalParams = decode(payload)?;
            builder.add_light(Light::Directional {
                color: params.color.into(),
                direction: unit_vector(params.direction, "directional light direction")?,
            });
        }
        other => return Err(SchemaError::UnknownLight(other.to_owned()).into()),
    }

    Ok(())
}

fn parse_geometry(
    value: Value,
    state: &mut LoaderState,
    builder: &mut SceneBuilder,
) -> Result<PrimitiveIndex, LoadError> {
    let (tag, payload) = variant_tag(value, "geometry node")?;
    match tag.as_str() {
        "collection" => {
            let params: CollectionParams = decode(payload)?;
            let mut children = Vec::with_capacity(params.children.len());
            for child in params.children {
                children.push(parse_geometry(child, state, builder)?);
            }
            Ok(builder.add_primitive(Primitive::Aggregate(AggregatePrimitive { children })))
        }
        "transformed" => {
            let params: TransformedParams = decode(payload)?;
            let mut operations = Vec::with_capacity(params.transformations.len());
            for op_value in params.transformations {
                operations.push(parse_transform_op(op_value)?);
            }
            let child = parse_geometry(params.child, state, builder)?;
            let transform = Transform::from_ops(&operations);
            Ok(builder.add_primitive(Primitive::Transform(TransformPrimitive {
                primitive: child,
                operations,
                transform,
            })))
        }
        "boundingGeometry" => {
            let params: BoundingGeometryParams = decode(payload)?;
            let child = parse_geometry(params.child, state, builder)?;
            let (bound, explicit_bound) = match params.aabb {
                Some(aabb) => (aabb_from_doc(aabb)?, true),
                None => (builder.primitive_bounds(child), false),
            };
            Ok(builder.add_primitive(Primitive::Bounded(BoundedPrimitive {
                primitive: child,
                bound,
                explicit_bound,
            })))
        }
        _ => parse_shape_node(&tag, payload, state, builder),
    }
}

fn parse_shape_node(
    tag: &str,
    payload: Value,
    state: &mut LoaderState,
    builder: &mut SceneBuilder,
) -> Result<PrimitiveIndex, LoadError> {
    let (material_name, area_light_flag, shape) = match tag {
        "plane" => {
            let params: PlaneParams = decode(payload)?;
            let normal = Vec3::from(params.normal);
            if normal.near_zero() {
                return Err(ParseError::DegenerateVector("plane normal").into());
            }
            // rescale the offset together with the normal so the plane is unchanged
            let (normal, distance) =
                if (normal.square_magnitude() - 1.0).abs() <= UNIT_LENGTH_TOLERANCE {
                    (normal, params.distance)
                } else {
                    let length = normal.length();
                    (normal / length, params.distance / length)
                };
            (
                params.material,
                params.area_light,
                Shape::Plane { normal, distance },
            )
        }
        "sphere" => {
            let params: SphereParams = decode(payload)?;
            (
                params.material,
                params.area_light,
                Shape::Sphere {
                    center: params.center.into(),
                    radius: positive(params.radius, "sphere radius")?,
                },
            )
        }
        "triangle" => {
            let params: TriangleParams = decode(payload)?;
            (
                params.material,
                params.area_light,
                Shape::Triangle {
                    vertices: params.vertices.map(Vec3::from),
                },
            )
        }
        "parallelogram" => {
            let params: ParallelogramParams = decode(payload)?;
            (
                params.material,
                params.area_light,
                Shape::Parallelogram {
                    corner: params.corner.into(),
                    edge1: params.edge1.into(),
                    edge2: params.edge2.into(),
                },
            )
        }
        "disc" => {
            let params: DiscParams = decode(payload)?;
            (
                params.material,
                params.area_light,
                Shape::Disc {
                    center: params.center.into(),
                    normal: unit_vector(params.normal, "disc normal")?,
                    radius: positive(params.radius, "disc radius")?,
                },
            )
        }
        "cylinder" => {
            let params: CylinderParams = decode(payload)?;
            (
                params.material,
                params.area_light,
                Shape::Cylinder {
                    center: params.center.into(),
                    axis: unit_vector(params.axis, "cylinder axis")?,
                    radius: positive(params.radius, "cylinder radius")?,
                    height: positive(params.height, "cylinder height")?,
                },
            )
        }
        "box" => {
            let params: BoxParams = decode(payload)?;
            let minimum = Vec3::from(params.minimum);
            let maximum = Vec3::from(params.maximum);
            if minimum.0 > maximum.0 || minimum.1 > maximum.1 || minimum.2 > maximum.2 {
                return Err(ParseError::BoxExtents.into());
            }
            (
                params.material,
                params.area_light,
                Shape::Box { minimum, maximum },
            )
        }
        other => return Err(SchemaError::UnknownGeometry(other.to_owned()).into()),
    };

    let material = state.resolve(&material_name)?;
    let primitive_index = builder.next_primitive_index();
    let area_light = if area_light_flag {
        let color = match builder.material(material).emission() {
            Some(color) => color,
            None => {
                warn!(
                    "area light uses non-emissive material '{}', emitting black",
                    material_name
                );
                Vec3::zero()
            }
        };
        Some(builder.add_area_light(AreaLight {
            primitive: primitive_index,
            color,
        }))
    } else {
        None
    };

    Ok(builder.add_primitive(Primitive::Basic(BasicPrimitive {
        shape,
        material,
        area_light,
    })))
}

fn parse_transform_op(value: Value) -> Result<TransformOp, LoadError> {
    let (tag, payload) = variant_tag(value, "transformation")?;
    match tag.as_str() {
        "scale" => {
            let scale: ScalarOrTriple = decode(payload)?;
            let scale = Vec3::from(scale);
            if scale.0 == 0.0 || scale.1 == 0.0 || scale.2 == 0.0 {
                return Err(ParseError::ZeroScale.into());
            }
            Ok(TransformOp::Scale(scale))
        }
        "rotate" => {
            let params: RotateParams = decode(payload)?;
            Ok(TransformOp::Rotate {
                axis: unit_vector(params.axis, "rotation axis")?,
                degrees: params.degrees,
            })
        }
        "translate" => {
            let translation: [f32; 3] = decode(payload)?;
            Ok(TransformOp::Translate(translation.into()))
        }
        other => Err(SchemaError::UnknownTransformation(other.to_owned()).into()),
    }
}

fn aabb_from_doc(params: AabbParams) -> Result<AABB, ParseError> {
    let minimum = Vec3::from(params.minimum);
    let maximum = Vec3::from(params.maximum);
    if minimum.0 > maximum.0 || minimum.1 > maximum.1 || minimum.2 > maximum.2 {
        return Err(ParseError::BoxExtents);
    }
    Ok(AABB::new(minimum, maximum))
}

// ---------------------------------------------------------------------------
// dumping

/// Serializes a resolved scene back into document form. Loading the result
/// yields a scene equal to the input.
pub fn scene_to_yaml_string(scene: &Scene) -> Result<String, DumpError> {
    let doc = doc_from_scene(scene)?;
    Ok(serde_yaml::to_string(&doc)?)
}

/// Serializes a resolved scene into a document on disk.
pub fn scene_to_yaml_file(scene: &Scene, filepath: &Path) -> Result<(), DumpError> {
    let text = scene_to_yaml_string(scene)?;
    fs::write(filepath, text)?;
    Ok(())
}

fn tagged(tag: &str, params: impl Serialize) -> Result<Value, serde_yaml::Error> {
    let mut mapping = serde_yaml::Mapping::new();
    mapping.insert(Value::String(tag.to_owned()), serde_yaml::to_value(params)?);
    Ok(Value::Mapping(mapping))
}

fn doc_from_scene(scene: &Scene) -> Result<SceneDoc, serde_yaml::Error> {
    let materials = scene
        .materials
        .iter()
        .zip(&scene.material_names)
        .map(|(material, name)| material_doc(material, name))
        .collect::<Result<_, _>>()?;
    let lights = scene
        .lights
        .iter()
        .map(light_doc)
        .collect::<Result<_, _>>()?;

    Ok(SceneDoc {
        config: ConfigParams {
            iterations: scene.settings.iterations,
            color_clamp: [
                scene.settings.color_clamp_min,
                scene.settings.color_clamp_max,
            ],
        },
        camera: camera_doc(&scene.camera)?,
        miss_shader: miss_shader_doc(&scene.miss_shader)?,
        materials,
        lights,
        geometry: geometry_doc(scene, scene.root_primitive)?,
    })
}

fn camera_doc(camera: &Camera) -> Result<Value, serde_yaml::Error> {
    match camera.projection {
        Projection::Perspective { fov } => tagged(
            "perspective",
            PerspectiveParams {
                position: camera.position.into(),
                look_at: camera.look_at.into(),
                up: camera.up.into(),
                fov,
                screen_size: [camera.screen_width, camera.screen_height],
                subpixel_count: camera.subpixel_count,
            },
        ),
        Projection::Orthographic { ortho_size } => tagged(
            "orthographic",
            OrthographicParams {
                position: camera.position.into(),
                look_at: camera.look_at.into(),
                up: camera.up.into(),
                ortho_size,
                screen_size: [camera.screen_width, camera.screen_height],
                subpixel_count: camera.subpixel_count,
            },
        ),
    }
}

fn miss_shader_doc(miss_shader: &MissShader) -> Result<Value, serde_yaml::Error> {
    match *miss_shader {
        MissShader::Constant { color } => tagged(
            "constant",
            ConstantParams {
                color: triple(color),
            },
        ),
        MissShader::Atmosphere {
            sun_direction,
            sun_intensity,
        } => tagged(
            "atmosphere",
            AtmosphereParams {
                sun_direction: sun_direction.into(),
                sun_intensity,
            },
        ),
    }
}

fn material_doc(material: &Material, name: &str) -> Result<Value, serde_yaml::Error> {
    let name = name.to_owned();
    match *material {
        Material::Emissive { color } => tagged(
            "emissive",
            EmissiveParams {
                name,
                color: triple(color),
            },
        ),
        Material::Lambertian { albedo } => tagged(
            "lambertian",
            LambertianParams {
                name,
                albedo: triple(albedo),
            },
        ),
        Material::Reflective { albedo, roughness } => tagged(
            "reflective",
            ReflectiveParams {
                name,
                albedo: triple(albedo),
                roughness,
            },
        ),
        Material::Refractive {
            albedo,
            refractive_index,
        } => tagged(
            "refractive",
            RefractiveParams {
                name,
                albedo: triple(albedo),
                refractive_index,
            },
        ),
        Material::Phong {
            diffuse,
            specular,
            shininess,
        } => tagged(
            "phong",
            PhongParams {
                name,
                diffuse: triple(diffuse),
                specular: triple(specular),
                shininess,
            },
        ),
        Material::Ggx { albedo, roughness } => tagged(
            "ggx",
            GgxParams {
                name,
                albedo: triple(albedo),
                roughness,
            },
        ),
    }
}

fn light_doc(light: &Light) -> Result<Value, serde_yaml::Error> {
    match *light {
        Light::Point { color, position } => tagged(
            "point",
            PointParams {
                color: triple(color),
                position: position.into(),
            },
        ),
        Light::Directional { color, direction } => tagged(
            "directional",
            DirectionalParams {
                color: triple(color),
                direction: direction.into(),
            },
        ),
    }
}

fn geometry_doc(scene: &Scene, index: PrimitiveIndex) -> Result<Value, serde_yaml::Error> {
    match scene.primitive(index) {
        Primitive::Basic(basic) => {
            let material = scene.material_name(basic.material).to_owned();
            let area_light = basic.area_light.is_some();
            match basic.shape {
                Shape::Plane { normal, distance } => tagged(
                    "plane",
                    PlaneParams {
                        material,
                        normal: normal.into(),
                        distance,
                        area_light,
                    },
                ),
                Shape::Sphere { center, radius } => tagged(
                    "sphere",
                    SphereParams {
                        material,
                        center: center.into(),
                        radius,
                        area_light,
                    },
                ),
                Shape::Triangle { vertices } => tagged(
                    "triangle",
                    TriangleParams {
                        material,
                        vertices: vertices.map(Into::into),
                        area_light,
                    },
                ),
                Shape::Parallelogram {
                    corner,
                    edge1,
                    edge2,
                } => tagged(
                    "parallelogram",
                    ParallelogramParams {
                        material,
                        corner: corner.into(),
                        edge1: edge1.into(),
                        edge2: edge2.into(),
                        area_light,
                    },
                ),
                Shape::Disc {
                    center,
                    normal,
                    radius,
                } => tagged(
                    "disc",
                    DiscParams {
                        material,
                        center: center.into(),
                        normal: normal.into(),
                        radius,
                        area_light,
                    },
                ),
                Shape::Cylinder {
                    center,
                    axis,
                    radius,
                    height,
                } => tagged(
                    "cylinder",
                    CylinderParams {
                        material,
                        center: center.into(),
                        axis: axis.into(),
                        radius,
                        height,
                        area_light,
                    },
                ),
                Shape::Box { minimum, maximum } => tagged(
                    "box",
                    BoxParams {
                        material,
                        minimum: minimum.into(),
                        maximum: maximum.into(),
                        area_light,
                    },
                ),
            }
        }
        Primitive::Transform(node) => {
            let transformations = node
                .operations
                .iter()
                .map(transform_op_doc)
                .collect::<Result<_, _>>()?;
            tagged(
                "transformed",
                TransformedParams {
                    transformations,
                    child: geometry_doc(scene, node.primitive)?,
                },
            )
        }
        Primitive::Aggregate(aggregate) => {
            let children = aggregate
                .children
                .iter()
                .map(|&child| geometry_doc(scene, child))
                .collect::<Result<_, _>>()?;
            tagged("collection", CollectionParams { children })
        }
        Primitive::Bounded(bounded) => tagged(
            "boundingGeometry",
            BoundingGeometryParams {
                aabb: bounded.explicit_bound.then(|| AabbParams {
                    minimum: bounded.bound.minimum.into(),
                    maximum: bounded.bound.maximum.into(),
                }),
                child: geometry_doc(scene, bounded.primitive)?,
            },
        ),
    }
}

fn transform_op_doc(op: &TransformOp) -> Result<Value, serde_yaml::Error> {
    match *op {
        TransformOp::Scale(scale) => tagged("scale", triple(scale)),
        TransformOp::Rotate { axis, degrees } => tagged(
            "rotate",
            RotateParams {
                axis: axis.into(),
                degrees,
            },
        ),
        TransformOp::Translate(translation) => {
            tagged("translate", <[f32; 3]>::from(translation))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_SCENE: &str = include_str!("../../../../scenes/test.yaml");
    const SPHERES_SCENE: &str = include_str!("../../../../scenes/spheres.yaml");
    const ORTHOGRAPHIC_SCENE: &str = include_str!("../../../../scenes/orthographic.yaml");

    const GRAY_SPHERE: &str = r#"  sphere:
    material: gray
    center: [0.0, 0.0, 5.0]
    radius: 1.0"#;

    fn doc_with_materials(materials: &str, geometry: &str) -> String {
        format!(
            r#"config:
  iterations: 1
  colorClamp: [0.0, 1.0]
camera:
  perspective:
    position: [0.0, 0.0, 0.0]
    lookAt: [0.0, 0.0, 1.0]
    up: [0.0, 1.0, 0.0]
    fov: 60.0
    screenSize: [64, 64]
    subpixelCount: 1
missShader:
  constant:
    color: 0.0
materials:
{materials}
lights: []
geometry:
{geometry}
"#
        )
    }

    fn minimal_doc(geometry: &str) -> String {
        doc_with_materials(
            r#"  - lambertian:
      name: gray
      albedo: 0.5"#,
            geometry,
        )
    }

    #[test]
    fn golden_document_loads() {
        let scene = scene_from_yaml_str(TEST_SCENE).unwrap();

        assert_eq!(scene.settings.iterations, 4);
        assert_eq!(scene.settings.color_clamp_min, 0.0);
        assert_eq!(scene.settings.color_clamp_max, 1.0);

        assert_eq!(scene.camera.position, Vec3::zero());
        assert_eq!(scene.camera.projection, Projection::Perspective { fov: 45.0 });
        assert_eq!(scene.camera.screen_width, 1920);
        assert_eq!(scene.camera.screen_height, 1080);

        assert_eq!(scene.materials.len(), 8);

        assert_eq!(scene.lights.len(), 1);
        assert_eq!(
            scene.lights[0],
            Light::Point {
                color: Vec3(1.0, 1.0, 1.0),
                position: Vec3(0.0, 19.9, 0.0),
            }
        );

        let root = match scene.root() {
            Primitive::Aggregate(AggregatePrimitive { children }) => children,
            other => panic!("root should be a collection, got {:?}", other),
        };
        assert_eq!(root.len(), 6);

        let mut planes = 0;
        let mut parallelograms = 0;
        for &child in root {
            match scene.primitive(child) {
                Primitive::Basic(basic) => match basic.shape {
                    Shape::Plane { .. } => planes += 1,
                    Shape::Parallelogram { .. } => parallelograms += 1,
                    ref other => panic!("unexpected shape {:?}", other),
                },
                other => panic!("unexpected child {:?}", other),
            }
        }
        assert_eq!(planes, 5);
        assert_eq!(parallelograms, 1);
    }

    #[test]
    fn commented_blocks_contribute_nothing() {
        let scene = scene_from_yaml_str(TEST_SCENE).unwrap();

        // the document carries a commented-out atmosphere shader and a
        // commented-out ggx material; neither may show up after load
        assert!(matches!(scene.miss_shader, MissShader::Constant { .. }));
        assert!(scene.find_material("brushedMetal").is_none());
        assert!(!scene
            .materials
            .iter()
            .any(|m| matches!(m, Material::Ggx { .. })));
    }

    #[test]
    fn golden_document_area_light() {
        let scene = scene_from_yaml_str(TEST_SCENE).unwrap();

        assert_eq!(scene.area_lights.len(), 1);
        let area_light = &scene.area_lights[0];
        assert_eq!(area_light.color, Vec3(12.0, 12.0, 12.0));

        let flagged = match scene.primitive(area_light.primitive) {
            Primitive::Basic(basic) => basic,
            other => panic!("area light must point at a basic primitive, got {:?}", other),
        };
        assert!(matches!(flagged.shape, Shape::Parallelogram { .. }));
        assert_eq!(flagged.area_light, Some(0));
    }

    #[test]
    fn orthographic_camera_loads() {
        let scene = scene_from_yaml_str(ORTHOGRAPHIC_SCENE).unwrap();
        assert_eq!(
            scene.camera.projection,
            Projection::Orthographic { ortho_size: 12.0 }
        );
    }

    #[test]
    fn load_dump_load_is_identity() {
        for source in [TEST_SCENE, SPHERES_SCENE, ORTHOGRAPHIC_SCENE] {
            let first = scene_from_yaml_str(source).unwrap();
            let dumped = scene_to_yaml_string(&first).unwrap();
            let second = scene_from_yaml_str(&dumped).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn scalar_colors_replicate() {
        let scene = scene_from_yaml_str(&minimal_doc(GRAY_SPHERE)).unwrap();

        assert_eq!(
            scene.materials[0],
            Material::Lambertian {
                albedo: Vec3(0.5, 0.5, 0.5)
            }
        );
        assert!(matches!(scene.miss_shader, MissShader::Constant { color } if color == Vec3::zero()));
    }

    #[test]
    fn duplicate_material_is_a_reference_error() {
        let source = doc_with_materials(
            r#"  - lambertian:
      name: gray
      albedo: 0.5
  - emissive:
      name: gray
      color: 1.0"#,
            GRAY_SPHERE,
        );
        let err = scene_from_yaml_str(&source).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Reference(ReferenceError::DuplicateMaterial(name)) if name == "gray"
        ));
    }

    #[test]
    fn undeclared_material_is_a_reference_error() {
        let source = minimal_doc(GRAY_SPHERE).replace("material: gray", "material: bronze");
        let err = scene_from_yaml_str(&source).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Reference(ReferenceError::UndeclaredMaterial(name)) if name == "bronze"
        ));
    }

    #[test]
    fn unreferenced_materials_load_with_a_warning_only() {
        let source = doc_with_materials(
            r#"  - lambertian:
      name: gray
      albedo: 0.5
  - emissive:
      name: glow
      color: [4.0, 4.0, 4.0]"#,
            GRAY_SPHERE,
        );
        let scene = scene_from_yaml_str(&source).unwrap();
        assert_eq!(scene.materials.len(), 2);
    }

    #[test]
    fn color_clamp_must_be_ordered() {
        let source =
            minimal_doc(GRAY_SPHERE).replace("colorClamp: [0.0, 1.0]", "colorClamp: [2.0, 1.0]");
        let err = scene_from_yaml_str(&source).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Parse(ParseError::ColorClampOrder { .. })
        ));
    }

    #[test]
    fn iterations_must_be_at_least_one() {
        let source = minimal_doc(GRAY_SPHERE).replace("iterations: 1", "iterations: 0");
        let err = scene_from_yaml_str(&source).unwrap_err();
        assert!(matches!(err, LoadError::Parse(ParseError::BadIterations(0))));
    }

    #[test]
    fn unknown_tags_are_schema_errors() {
        let bad_geometry = minimal_doc("  torus:\n    material: gray");
        assert!(matches!(
            scene_from_yaml_str(&bad_geometry).unwrap_err(),
            LoadError::Schema(SchemaError::UnknownGeometry(tag)) if tag == "torus"
        ));

        let bad_material = minimal_doc(GRAY_SPHERE).replace("- lambertian:", "- velvet:");
        assert!(matches!(
            scene_from_yaml_str(&bad_material).unwrap_err(),
            LoadError::Schema(SchemaError::UnknownMaterial(tag)) if tag == "velvet"
        ));

        let bad_camera = minimal_doc(GRAY_SPHERE).replace("  perspective:", "  fisheye:");
        assert!(matches!(
            scene_from_yaml_str(&bad_camera).unwrap_err(),
            LoadError::Schema(SchemaError::UnknownCamera(tag)) if tag == "fisheye"
        ));

        let bad_miss = minimal_doc(GRAY_SPHERE).replace("  constant:", "  gradient:");
        assert!(matches!(
            scene_from_yaml_str(&bad_miss).unwrap_err(),
            LoadError::Schema(SchemaError::UnknownMissShader(tag)) if tag == "gradient"
        ));

        let bad_light = minimal_doc(GRAY_SPHERE).replace(
            "lights: []",
            "lights:\n  - spotlight:\n      color: 1.0\n      position: [0.0, 0.0, 0.0]",
        );
        assert!(matches!(
            scene_from_yaml_str(&bad_light).unwrap_err(),
            LoadError::Schema(SchemaError::UnknownLight(tag)) if tag == "spotlight"
        ));

        let bad_op = minimal_doc(
            r#"  transformed:
    transformations:
      - shear: [1.0, 0.0, 0.0]
    child:
      sphere:
        material: gray
        center: [0.0, 0.0, 0.0]
        radius: 1.0"#,
        );
        assert!(matches!(
            scene_from_yaml_str(&bad_op).unwrap_err(),
            LoadError::Schema(SchemaError::UnknownTransformation(tag)) if tag == "shear"
        ));
    }

    #[test]
    fn unknown_fields_are_parse_errors() {
        let source = minimal_doc(
            r#"  sphere:
    material: gray
    center: [0.0, 0.0, 5.0]
    radius: 1.0
    glossy: true"#,
        );
        assert!(matches!(
            scene_from_yaml_str(&source).unwrap_err(),
            LoadError::Parse(ParseError::Document(_))
        ));
    }

    #[test]
    fn directional_lights_are_normalized() {
        let source = minimal_doc(GRAY_SPHERE).replace(
            "lights: []",
            "lights:\n  - directional:\n      color: 1.0\n      direction: [0.0, -2.0, 0.0]",
        );
        let scene = scene_from_yaml_str(&source).unwrap();
        assert_eq!(
            scene.lights[0],
            Light::Directional {
                color: Vec3(1.0, 1.0, 1.0),
                direction: Vec3(0.0, -1.0, 0.0),
            }
        );
    }

    #[test]
    fn zero_direction_is_a_parse_error() {
        let source = minimal_doc(GRAY_SPHERE).replace(
            "lights: []",
            "lights:\n  - directional:\n      color: 1.0\n      direction: [0.0, 0.0, 0.0]",
        );
        assert!(matches!(
            scene_from_yaml_str(&source).unwrap_err(),
            LoadError::Parse(ParseError::DegenerateVector(_))
        ));
    }

    #[test]
    fn parallel_camera_up_is_rejected() {
        let source =
            minimal_doc(GRAY_SPHERE).replace("up: [0.0, 1.0, 0.0]", "up: [0.0, 0.0, 3.0]");
        assert!(matches!(
            scene_from_yaml_str(&source).unwrap_err(),
            LoadError::Parse(ParseError::DegenerateCamera)
        ));
    }

    #[test]
    fn plane_normals_are_rescaled() {
        let source = minimal_doc(
            r#"  plane:
    material: gray
    normal: [0.0, 2.0, 0.0]
    distance: 4.0"#,
        );
        let scene = scene_from_yaml_str(&source).unwrap();
        let shape = match scene.root() {
            Primitive::Basic(basic) => &basic.shape,
            other => panic!("expected plane, got {:?}", other),
        };
        assert_eq!(
            *shape,
            Shape::Plane {
                normal: Vec3(0.0, 1.0, 0.0),
                distance: 2.0,
            }
        );
    }

    #[test]
    fn omitted_bound_is_computed_and_stays_omitted() {
        let source = minimal_doc(
            r#"  boundingGeometry:
    child:
      sphere:
        material: gray
        center: [1.0, 0.0, 0.0]
        radius: 2.0"#,
        );
        let scene = scene_from_yaml_str(&source).unwrap();

        let bounded = match scene.root() {
            Primitive::Bounded(bounded) => bounded,
            other => panic!("expected bounded root, got {:?}", other),
        };
        assert!(!bounded.explicit_bound);
        assert_eq!(
            bounded.bound,
            AABB::new(Vec3(-1.0, -2.0, -2.0), Vec3(3.0, 2.0, 2.0))
        );

        let dumped = scene_to_yaml_string(&scene).unwrap();
        assert!(!dumped.contains("aabb"));
    }

    #[test]
    fn explicit_bound_survives_round_trip() {
        let source = minimal_doc(
            r#"  boundingGeometry:
    aabb:
      minimum: [-9.0, -9.0, -9.0]
      maximum: [9.0, 9.0, 9.0]
    child:
      sphere:
        material: gray
        center: [0.0, 0.0, 0.0]
        radius: 1.0"#,
        );
        let scene = scene_from_yaml_str(&source).unwrap();
        let dumped = scene_to_yaml_string(&scene).unwrap();
        let reloaded = scene_from_yaml_str(&dumped).unwrap();

        let bounded = match reloaded.root() {
            Primitive::Bounded(bounded) => bounded,
            other => panic!("expected bounded root, got {:?}", other),
        };
        assert!(bounded.explicit_bound);
        assert_eq!(
            bounded.bound,
            AABB::new(Vec3(-9.0, -9.0, -9.0), Vec3(9.0, 9.0, 9.0))
        );
    }

    #[test]
    fn area_light_flag_on_non_emissive_material_emits_black() {
        let source = minimal_doc(
            r#"  sphere:
    material: gray
    center: [0.0, 0.0, 5.0]
    radius: 1.0
    areaLight: true"#,
        );
        let scene = scene_from_yaml_str(&source).unwrap();

        assert_eq!(scene.area_lights.len(), 1);
        assert_eq!(scene.area_lights[0].color, Vec3::zero());

        // the flag itself still round-trips
        let reloaded = scene_from_yaml_str(&scene_to_yaml_string(&scene).unwrap()).unwrap();
        assert_eq!(scene, reloaded);
    }

    #[test]
    fn transform_lists_keep_document_order() {
        let source = minimal_doc(
            r#"  transformed:
    transformations:
      - scale: 2.0
      - rotate:
          axis: [0.0, 1.0, 0.0]
          degrees: 90.0
      - translate: [5.0, 0.0, 0.0]
    child:
      sphere:
        material: gray
        center: [0.0, 0.0, 0.0]
        radius: 1.0"#,
        );
        let scene = scene_from_yaml_str(&source).unwrap();

        let node = match scene.root() {
            Primitive::Transform(node) => node,
            other => panic!("expected transform root, got {:?}", other),
        };
        assert_eq!(
            node.operations,
            vec![
                TransformOp::Scale(Vec3(2.0, 2.0, 2.0)),
                TransformOp::Rotate {
                    axis: Vec3(0.0, 1.0, 0.0),
                    degrees: 90.0
                },
                TransformOp::Translate(Vec3(5.0, 0.0, 0.0)),
            ]
        );

        // sphere of radius 1 scaled to 2 and pushed +5 in x
        let bound = scene.primitive_bounds(scene.root_primitive);
        assert!((bound.minimum.0 - 3.0).abs() < 1e-4);
        assert!((bound.maximum.0 - 7.0).abs() < 1e-4);
    }

    #[test]
    fn zero_scale_component_is_rejected() {
        let source = minimal_doc(
            r#"  transformed:
    transformations:
      - scale: [1.0, 0.0, 1.0]
    child:
      sphere:
        material: gray
        center: [0.0, 0.0, 0.0]
        radius: 1.0"#,
        );
        assert!(matches!(
            scene_from_yaml_str(&source).unwrap_err(),
            LoadError::Parse(ParseError::ZeroScale)
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = scene_from_yaml_file(Path::new("scenes/does-not-exist.yaml")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
