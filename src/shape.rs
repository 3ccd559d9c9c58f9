//! Boundary to the solid-modelling engine.
//!
//! The numeric core never builds geometry itself: it hands placement
//! transforms to a [`ShapeEngine`] and asks it to instance, hull or combine
//! shapes. [`CsgTree`] is a reference engine that records the requested
//! operations as a tree, which is enough to inspect what a sweep produced.

use serde::{Deserialize, Serialize};

use crate::geom::{BBox, CenterFlags, Point3, Transform, Vec3, center};

/// Primitive solids. All are modelled at the origin: cuboids and cylinders
/// grow from the origin along +X/+Y/+Z, spheres are centered on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    Cuboid { size: Vec3 },
    Cylinder { height: f64, r1: f64, r2: f64 },
    Sphere { radius: f64 },
    Polyhedron { points: Vec<Point3>, faces: Vec<Vec<usize>> },
}

/// Stateless geometry constructor consumed by the sweep builders.
///
/// Calls must be idempotent: the same inputs always describe the same shape.
pub trait ShapeEngine: Sync {
    type Shape: Clone + Send + Sync;

    fn primitive(&self, primitive: &Primitive) -> Self::Shape;
    fn transform(&self, transform: &Transform, shape: &Self::Shape) -> Self::Shape;
    fn hull(&self, shapes: &[Self::Shape]) -> Self::Shape;
    fn union(&self, shapes: &[Self::Shape]) -> Self::Shape;
    fn difference(&self, shapes: &[Self::Shape]) -> Self::Shape;
    fn intersection(&self, shapes: &[Self::Shape]) -> Self::Shape;
}

/// Box of extent `size` (components may be negative) centered per `flags`.
pub fn cuboid<E: ShapeEngine>(engine: &E, size: Vec3, flags: CenterFlags) -> E::Shape {
    let shape = engine.primitive(&Primitive::Cuboid { size: size.abs() });
    engine.transform(&center(size, flags), &shape)
}

/// Cylinder of `height` with bottom radius `r1` and top radius `r2`,
/// optionally centered along Z.
pub fn cylinder<E: ShapeEngine>(
    engine: &E,
    height: f64,
    r1: f64,
    r2: f64,
    centered: bool,
) -> E::Shape {
    let shape = engine.primitive(&Primitive::Cylinder { height, r1, r2 });
    if centered {
        let flags = CenterFlags { x: false, y: false, z: true };
        engine.transform(&center(Vec3::new(0.0, 0.0, height), flags), &shape)
    } else {
        shape
    }
}

pub fn sphere<E: ShapeEngine>(engine: &E, radius: f64) -> E::Shape {
    engine.primitive(&Primitive::Sphere { radius })
}

#[derive(Debug, Clone, PartialEq)]
pub enum CsgNode {
    Primitive(Primitive),
    Transform(Transform, Box<CsgNode>),
    Hull(Vec<CsgNode>),
    Union(Vec<CsgNode>),
    Difference(Vec<CsgNode>),
    Intersection(Vec<CsgNode>),
}

impl CsgNode {
    /// Points whose convex hull contains the node.
    ///
    /// Curved primitives report the corners of their bounding box. Differences
    /// and intersections report their first operand, an upper bound.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point3> {
        match self {
            Self::Primitive(primitive) => primitive_vertices(primitive),
            Self::Transform(transform, child) => child
                .vertices()
                .into_iter()
                .map(|p| transform.apply_point(p))
                .collect(),
            Self::Hull(children) | Self::Union(children) => {
                children.iter().flat_map(Self::vertices).collect()
            }
            Self::Difference(children) | Self::Intersection(children) => {
                children.first().map(Self::vertices).unwrap_or_default()
            }
        }
    }

    #[must_use]
    pub fn bounds(&self) -> Option<BBox> {
        BBox::from_points(&self.vertices())
    }

    /// Number of hull nodes anywhere in the tree.
    #[must_use]
    pub fn hull_count(&self) -> usize {
        match self {
            Self::Primitive(_) => 0,
            Self::Transform(_, child) => child.hull_count(),
            Self::Hull(children) => 1 + children.iter().map(Self::hull_count).sum::<usize>(),
            Self::Union(children) | Self::Difference(children) | Self::Intersection(children) => {
                children.iter().map(Self::hull_count).sum()
            }
        }
    }
}

fn primitive_vertices(primitive: &Primitive) -> Vec<Point3> {
    let corners = |min: Point3, max: Point3| {
        let mut out = Vec::with_capacity(8);
        for z in [min.z, max.z] {
            for y in [min.y, max.y] {
                for x in [min.x, max.x] {
                    out.push(Point3::new(x, y, z));
                }
            }
        }
        out
    };
    match primitive {
        Primitive::Cuboid { size } => corners(Point3::ORIGIN, Point3::new(size.x, size.y, size.z)),
        Primitive::Cylinder { height, r1, r2 } => {
            let r = r1.max(*r2);
            corners(Point3::new(-r, -r, 0.0), Point3::new(r, r, *height))
        }
        Primitive::Sphere { radius } => {
            corners(Point3::new(-radius, -radius, -radius), Point3::new(*radius, *radius, *radius))
        }
        Primitive::Polyhedron { points, .. } => points.clone(),
    }
}

/// Reference engine that records operations as a [`CsgNode`] tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsgTree;

impl ShapeEngine for CsgTree {
    type Shape = CsgNode;

    fn primitive(&self, primitive: &Primitive) -> CsgNode {
        CsgNode::Primitive(primitive.clone())
    }

    fn transform(&self, transform: &Transform, shape: &CsgNode) -> CsgNode {
        CsgNode::Transform(*transform, Box::new(shape.clone()))
    }

    fn hull(&self, shapes: &[CsgNode]) -> CsgNode {
        CsgNode::Hull(shapes.to_vec())
    }

    fn union(&self, shapes: &[CsgNode]) -> CsgNode {
        CsgNode::Union(shapes.to_vec())
    }

    fn difference(&self, shapes: &[CsgNode]) -> CsgNode {
        CsgNode::Difference(shapes.to_vec())
    }

    fn intersection(&self, shapes: &[CsgNode]) -> CsgNode {
        CsgNode::Intersection(shapes.to_vec())
    }
}
