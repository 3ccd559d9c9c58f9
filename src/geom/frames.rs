//! Frame sequencing: turning a path into an ordered list of placement
//! transforms.
//!
//! Every frame is `translation(point) · align(direction, +Z) · rotation_z(twist)
//! · scaling(scale)`, so a template modelled around the origin and extruded
//! along +Z follows the path. The orientation policy only decides which
//! direction each frame points along:
//!
//! - **Simple**: always +Z, only the position changes.
//! - **Direct**: the outgoing edge; the last point reuses the last edge.
//! - **Middle**: incoming + outgoing edge (averaged tangent); end points use
//!   their single adjacent edge.
//! - **Duplicated**: two frames per edge, one at each end, both along that
//!   edge, for hard corners.
//!
//! [`revolve_frames`] builds the rotational family (revolve, helix, mirror).

use serde::{Deserialize, Serialize};

use super::curve::{self, CurveError, DEFAULT_SUBDIVISIONS};
use super::index::{IndexError, index_range};
use super::schedule::{Schedule, ScheduleError, deserialize_scale};
use super::transform::{align_with_tolerance, rotation_z, translation};
use super::{Point3, Tolerance, Transform, Vec3, par};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameError {
    #[error("path must contain at least two points for frame sequencing (got {count})")]
    PathTooShort { count: usize },
    #[error("path point {index} is not finite")]
    NonFinitePoint { index: usize },
    #[error("revolve requires at least one step")]
    InvalidStepCount,
    #[error("revolve step count is too large")]
    StepCountOutOfRange,
    #[error("revolve parameters must be finite")]
    NonFiniteRevolve,
    #[error(transparent)]
    Schedule(#[from] ScheduleError),
    #[error(transparent)]
    Curve(#[from] CurveError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Which direction each frame points along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrientationPolicy {
    Simple,
    #[default]
    Direct,
    Middle,
    Duplicated,
}

/// Options for [`path_frames`]. Absent fields fall back to the defaults in
/// [`FrameOptions::resolve`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameOptions {
    pub policy: OrientationPolicy,
    /// Per-axis scale; defaults to 1.
    #[serde(deserialize_with = "deserialize_scale")]
    pub scale: Option<Schedule<Vec3>>,
    /// Twist about the local forward axis in degrees; defaults to 0.
    pub twist: Option<Schedule<f64>>,
    /// Degeneracy epsilon for direction alignment; defaults to
    /// [`Tolerance::OVERLAP`].
    pub tolerance: Option<Tolerance>,
}

/// [`FrameOptions`] with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedFrameOptions {
    pub policy: OrientationPolicy,
    pub scale: Schedule<Vec3>,
    pub twist: Schedule<f64>,
    pub tolerance: Tolerance,
}

impl FrameOptions {
    #[must_use]
    pub fn new(policy: OrientationPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: impl Into<Schedule<Vec3>>) -> Self {
        self.scale = Some(scale.into());
        self
    }

    #[must_use]
    pub fn with_twist(mut self, twist: impl Into<Schedule<f64>>) -> Self {
        self.twist = Some(twist.into());
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    pub fn resolve(&self) -> Result<ResolvedFrameOptions, FrameError> {
        let scale = self.scale.clone().unwrap_or(Schedule::Constant(Vec3::ONE));
        let twist = self.twist.clone().unwrap_or(Schedule::Constant(0.0));
        scale.validate()?;
        twist.validate()?;
        Ok(ResolvedFrameOptions {
            policy: self.policy,
            scale,
            twist,
            tolerance: self.tolerance.unwrap_or(Tolerance::OVERLAP),
        })
    }
}

/// A single placement: `translation · align(direction, +Z) · rotation_z(twist)
/// · scale`.
#[must_use]
pub fn placement(
    position: Point3,
    direction: Vec3,
    twist_degrees: f64,
    scale: Vec3,
    tol: Tolerance,
) -> Transform {
    translation(position.to_vec3())
        * align_with_tolerance(direction, Vec3::Z, tol)
        * rotation_z(twist_degrees)
        * Transform::scale(scale.x, scale.y, scale.z)
}

/// One or more frames per path point, oriented per `options.policy`.
pub fn path_frames<P>(path: &[P], options: &FrameOptions) -> Result<Vec<Transform>, FrameError>
where
    P: Copy + Into<Point3>,
{
    let points: Vec<Point3> = path.iter().map(|&p| p.into()).collect();
    let options = options.resolve()?;
    let frames = frames_for_points(&points, &options)?;
    log::debug!(
        "path_frames: {} frame(s) from {} point(s), {:?} policy",
        frames.len(),
        points.len(),
        options.policy
    );
    Ok(frames)
}

pub fn simple_frames<P: Copy + Into<Point3>>(path: &[P]) -> Result<Vec<Transform>, FrameError> {
    path_frames(path, &FrameOptions::new(OrientationPolicy::Simple))
}

pub fn direct_frames<P: Copy + Into<Point3>>(path: &[P]) -> Result<Vec<Transform>, FrameError> {
    path_frames(path, &FrameOptions::new(OrientationPolicy::Direct))
}

pub fn middle_frames<P: Copy + Into<Point3>>(path: &[P]) -> Result<Vec<Transform>, FrameError> {
    path_frames(path, &FrameOptions::new(OrientationPolicy::Middle))
}

pub fn duplicated_frames<P: Copy + Into<Point3>>(path: &[P]) -> Result<Vec<Transform>, FrameError> {
    path_frames(path, &FrameOptions::new(OrientationPolicy::Duplicated))
}

/// Frames along the path after resampling every edge into `segments` steps.
pub fn cut_frames<P>(
    path: &[P],
    segments: usize,
    options: &FrameOptions,
) -> Result<Vec<Transform>, FrameError>
where
    P: Copy + Into<Point3>,
{
    let points = to_points(path)?;
    let resampled = curve::linear_cut(&points, segments)?;
    path_frames(&resampled, options)
}

/// Frames along a smooth cubic chain through the path points.
///
/// `weight` controls how far the synthesized control points bulge; `0`
/// follows the polyline.
pub fn bezier_frames<P>(
    path: &[P],
    weight: f64,
    segments: usize,
    options: &FrameOptions,
) -> Result<Vec<Transform>, FrameError>
where
    P: Copy + Into<Point3>,
{
    let points = to_points(path)?;
    let smooth = curve::smooth_path(&points, weight, segments)?;
    path_frames(&smooth, options)
}

fn to_points<P: Copy + Into<Point3>>(path: &[P]) -> Result<Vec<Point3>, FrameError> {
    if path.len() < 2 {
        return Err(FrameError::PathTooShort { count: path.len() });
    }
    Ok(path.iter().map(|&p| p.into()).collect())
}

fn frames_for_points(
    points: &[Point3],
    options: &ResolvedFrameOptions,
) -> Result<Vec<Transform>, FrameError> {
    let n = points.len();
    if n < 2 {
        return Err(FrameError::PathTooShort { count: n });
    }
    if let Some(index) = points.iter().position(|p| !p.to_vec3().is_finite()) {
        return Err(FrameError::NonFinitePoint { index });
    }

    let edge = |i: usize| points[i + 1] - points[i];
    let frame = |point: usize, direction: Vec3| -> Result<Transform, FrameError> {
        let scale = options.scale.at_point(point, n)?;
        let twist = options.twist.at_point(point, n)?;
        Ok(placement(points[point], direction, twist, scale, options.tolerance))
    };

    match options.policy {
        OrientationPolicy::Simple => par::build_indexed(n, |i| frame(i, Vec3::Z)),
        OrientationPolicy::Direct => par::build_indexed(n, |i| frame(i, edge(i.min(n - 2)))),
        OrientationPolicy::Middle => par::build_indexed(n, |i| {
            let direction = if i == 0 {
                edge(0)
            } else if i == n - 1 {
                edge(n - 2)
            } else {
                edge(i - 1) + edge(i)
            };
            frame(i, direction)
        }),
        OrientationPolicy::Duplicated => {
            // Point indices 0, 1, 1, 2, 2, ..., n-1: both ends of every edge.
            let sources = index_range(n, 1, -1, -2)?;
            par::build_indexed(sources.len(), |k| frame(sources[k], edge(k / 2)))
        }
    }
}

/// Options for [`revolve_frames`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevolveOptions {
    /// Total sweep about +Z in degrees.
    pub angle: f64,
    /// Number of angular steps; `steps + 1` frames are produced.
    pub steps: usize,
    /// Offset along X before rotating.
    pub radius: f64,
    /// Total rise along Z over the sweep (helices).
    pub height: f64,
    /// Orientation applied to the template before it is offset and rotated.
    pub base: Transform,
    #[serde(deserialize_with = "deserialize_scale")]
    pub scale: Option<Schedule<Vec3>>,
    /// Twist about the template's own Z axis in degrees.
    pub twist: Option<Schedule<f64>>,
}

impl Default for RevolveOptions {
    fn default() -> Self {
        Self {
            angle: 360.0,
            steps: DEFAULT_SUBDIVISIONS,
            radius: 0.0,
            height: 0.0,
            base: Transform::identity(),
            scale: None,
            twist: None,
        }
    }
}

/// `steps + 1` frames evenly spaced over `angle` degrees about +Z.
///
/// Frame `i` is `rotation_z(i·angle/steps) · translation(radius, 0,
/// i·height/steps) · base · rotation_z(twist_i) · scale_i`.
#[allow(clippy::cast_precision_loss)]
pub fn revolve_frames(options: &RevolveOptions) -> Result<Vec<Transform>, FrameError> {
    let steps = options.steps;
    if steps == 0 {
        return Err(FrameError::InvalidStepCount);
    }
    let count = steps.checked_add(1).ok_or(FrameError::StepCountOutOfRange)?;
    if !(options.angle.is_finite() && options.radius.is_finite() && options.height.is_finite()) {
        return Err(FrameError::NonFiniteRevolve);
    }
    let scale = options.scale.clone().unwrap_or(Schedule::Constant(Vec3::ONE));
    let twist = options.twist.clone().unwrap_or(Schedule::Constant(0.0));
    scale.validate()?;
    twist.validate()?;

    let frames = par::build_indexed(count, |i| -> Result<Transform, FrameError> {
        let f = i as f64 / steps as f64;
        let s = scale.at(i, steps)?;
        Ok(rotation_z(options.angle * f)
            * translation(Vec3::new(options.radius, 0.0, options.height * f))
            * options.base
            * rotation_z(twist.at(i, steps)?)
            * Transform::scale(s.x, s.y, s.z))
    })?;
    log::debug!(
        "revolve_frames: {} frame(s) over {} degree(s), radius {}, height {}",
        frames.len(),
        options.angle,
        options.radius,
        options.height
    );
    Ok(frames)
}

/// The template placed at `base` and at its half-turn mirror about +Z.
pub fn symmetric_frames(base: Transform) -> Result<Vec<Transform>, FrameError> {
    revolve_frames(&RevolveOptions {
        angle: 180.0,
        steps: 1,
        base,
        ..RevolveOptions::default()
    })
}

/// Helix about +Z: `turns` revolutions at `radius`, rising `pitch` per turn.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn helix_frames(
    radius: f64,
    pitch: f64,
    turns: f64,
    steps_per_turn: usize,
    base: Transform,
) -> Result<Vec<Transform>, FrameError> {
    if !(turns.is_finite() && turns > 0.0) {
        return Err(FrameError::NonFiniteRevolve);
    }
    let steps = (turns * steps_per_turn as f64).ceil();
    if steps >= usize::MAX as f64 {
        return Err(FrameError::StepCountOutOfRange);
    }
    let steps = steps as usize;
    revolve_frames(&RevolveOptions {
        angle: 360.0 * turns,
        steps,
        radius,
        height: pitch * turns,
        base,
        ..RevolveOptions::default()
    })
}
