//! Homogeneous transform builders.
//!
//! Angles are in degrees. Every builder returns a [`Transform`] whose bottom
//! row is `[0, 0, 0, 1]`; frames compose them as `translation · align ·
//! rotation_z · scaling`.

use serde::{Deserialize, Serialize};

use super::algebra::{self, Mat3};
use super::{Point3, Tolerance, Transform, Vec3};

/// Scale argument: one factor for every axis, a planar XY pair, or explicit
/// per-axis factors.
///
/// Loads from `2.0`, `[2.0, 3.0]`, `[2.0, 3.0, 4.0]` or an `{x, y, z}`
/// object; the per-axis form is written back as the object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScaleSpec {
    Uniform(f64),
    Planar(f64, f64),
    Axes(Vec3),
}

impl ScaleSpec {
    /// Per-axis factors. A planar scale leaves Z untouched.
    #[must_use]
    pub const fn to_vec3(self) -> Vec3 {
        match self {
            Self::Uniform(s) => Vec3::splat(s),
            Self::Planar(x, y) => Vec3::new(x, y, 1.0),
            Self::Axes(v) => v,
        }
    }
}

impl From<f64> for ScaleSpec {
    fn from(s: f64) -> Self {
        Self::Uniform(s)
    }
}

impl From<Vec3> for ScaleSpec {
    fn from(v: Vec3) -> Self {
        Self::Axes(v)
    }
}

/// Per-axis centering flags for [`center`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CenterFlags {
    pub x: bool,
    pub y: bool,
    pub z: bool,
}

impl CenterFlags {
    pub const NONE: Self = Self { x: false, y: false, z: false };
    pub const ALL: Self = Self { x: true, y: true, z: true };
    pub const XY: Self = Self { x: true, y: true, z: false };
}

#[must_use]
pub const fn translation(offset: Vec3) -> Transform {
    Transform::translate(offset)
}

#[must_use]
pub fn rotation_x(degrees: f64) -> Transform {
    Transform::rotate_x(degrees.to_radians())
}

#[must_use]
pub fn rotation_y(degrees: f64) -> Transform {
    Transform::rotate_y(degrees.to_radians())
}

#[must_use]
pub fn rotation_z(degrees: f64) -> Transform {
    Transform::rotate_z(degrees.to_radians())
}

#[must_use]
pub fn scaling(spec: impl Into<ScaleSpec>) -> Transform {
    let s = spec.into().to_vec3();
    Transform::scale(s.x, s.y, s.z)
}

/// Rotation mapping direction `from` onto direction `to`.
///
/// Uses Rodrigues' formula `R = I + [c] + [c]^2 (1 - to·from) / (c·c)` with
/// `c = from × to`. Parallel or zero-length inputs give the identity; opposed
/// inputs give a half turn about an axis perpendicular to `from`.
#[must_use]
pub fn align(to: Vec3, from: Vec3) -> Transform {
    align_with_tolerance(to, from, Tolerance::OVERLAP)
}

/// Shorthand for `align(to, +Z)`, the template's forward axis.
#[must_use]
pub fn align_z(to: Vec3) -> Transform {
    align(to, Vec3::Z)
}

#[must_use]
pub fn align_with_tolerance(to: Vec3, from: Vec3, tol: Tolerance) -> Transform {
    let (Ok(to), Ok(from)) = (
        algebra::normalize_with_tolerance(to, tol),
        algebra::normalize_with_tolerance(from, tol),
    ) else {
        log::trace!("align: zero-length direction, falling back to identity");
        return Transform::identity();
    };

    let c = algebra::cross(from, to);
    let cos = algebra::dot(to, from);
    if algebra::norm(c) < tol.eps {
        if cos > 0.0 {
            return Transform::identity();
        }
        return half_turn(perpendicular(from));
    }

    let k = algebra::skew(c);
    let rotation = Mat3::IDENTITY + k + (k * k).scaled((1.0 - cos) / algebra::dot(c, c));
    rotation.to_transform()
}

/// Unit vector perpendicular to `v`, built from the world axis least aligned
/// with it.
fn perpendicular(v: Vec3) -> Vec3 {
    let a = v.abs();
    let axis = if a.x <= a.y && a.x <= a.z {
        Vec3::X
    } else if a.y <= a.z {
        Vec3::Y
    } else {
        Vec3::Z
    };
    let p = v.cross(axis);
    p / p.length()
}

/// 180 degree rotation about unit axis `n`: `R = 2 n nᵀ - I`.
fn half_turn(n: Vec3) -> Transform {
    let outer = |a: f64, b: f64| 2.0 * a * b;
    Transform::from_parts(
        [
            [outer(n.x, n.x) - 1.0, outer(n.x, n.y), outer(n.x, n.z)],
            [outer(n.y, n.x), outer(n.y, n.y) - 1.0, outer(n.y, n.z)],
            [outer(n.z, n.x), outer(n.z, n.y), outer(n.z, n.z) - 1.0],
        ],
        Vec3::ZERO,
    )
}

/// Translation that moves a corner-anchored box of extent `size` into the
/// requested centering.
///
/// The box itself is built from `|size|`. A negative extent means the box
/// grows towards -axis, so an uncentered axis is shifted by that extent;
/// a centered axis ignores the sign.
#[must_use]
pub fn center(size: Vec3, flags: CenterFlags) -> Transform {
    let axis = |extent: f64, centered: bool| {
        if centered {
            -extent.abs() / 2.0
        } else {
            extent.min(0.0)
        }
    };
    translation(Vec3::new(
        axis(size.x, flags.x),
        axis(size.y, flags.y),
        axis(size.z, flags.z),
    ))
}

/// Apply one transform to a point set.
#[must_use]
pub fn apply_one(transform: &Transform, points: &[Point3]) -> Vec<Point3> {
    points.iter().map(|&p| transform.apply_point(p)).collect()
}

/// Apply each transform to the point set, one copy per transform.
#[must_use]
pub fn apply_many(transforms: &[Transform], points: &[Point3]) -> Vec<Vec<Point3>> {
    transforms.iter().map(|t| apply_one(t, points)).collect()
}
