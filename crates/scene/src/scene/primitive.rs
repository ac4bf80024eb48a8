//! Primitives are the nodes of the geometry tree, stored in a flat arena
//! (`Scene::primitives`) and addressed by index. Four kinds of node:
//! 1. BasicPrimitive
//!     - Contains a shape, a material index, and an optional area light index
//! 2. TransformPrimitive
//!     - Contains the index of another primitive plus the authored
//!     transformation steps and their composition
//! 3. AggregatePrimitive
//!     - Contains a group of indices to other primitives (the document's
//!     `collection`), a pure grouping with no transform of its own
//! 4. BoundedPrimitive
//!     - Contains the index of another primitive plus an axis-aligned bound,
//!     either authored in the document or computed from the child; consumers
//!     use it as an acceleration-structure hint
//!
//! The loader pushes children before their parents, so the arena order is a
//! post-order walk of the document tree and the root is always the last
//! element. That makes arena indices reproducible: re-loading a dumped scene
//! yields index-identical primitives.

use crate::geometry::{AABB, Shape, Transform, TransformOp};

/// Index into the owning Scene's arrays
pub type MaterialIndex = u32;
pub type PrimitiveIndex = u32;
pub type AreaLightIndex = u32;

/// The main enum for all scene primitives
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Basic(BasicPrimitive),
    Transform(TransformPrimitive),
    Aggregate(AggregatePrimitive),
    Bounded(BoundedPrimitive),
}

/// A primitive with a shape, material, and optional area light
#[derive(Debug, Clone, PartialEq)]
pub struct BasicPrimitive {
    pub shape: Shape,
    pub material: MaterialIndex,
    pub area_light: Option<AreaLightIndex>,
}

/// A primitive that applies a transform to another primitive
#[derive(Debug, Clone, PartialEq)]
pub struct TransformPrimitive {
    pub primitive: PrimitiveIndex,
    /// Authored steps in document order; `transform` is their composition.
    pub operations: Vec<TransformOp>,
    pub transform: Transform,
}

/// A primitive that groups other primitives
#[derive(Debug, Clone, PartialEq)]
pub struct AggregatePrimitive {
    pub children: Vec<PrimitiveIndex>,
}

/// A primitive that wraps another primitive in an axis-aligned bound
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedPrimitive {
    pub primitive: PrimitiveIndex,
    pub bound: AABB,
    /// False when the bound was computed from the child rather than authored;
    /// computed bounds are omitted again on dump.
    pub explicit_bound: bool,
}
