//! Corner rounding for open paths.
//!
//! A corner is cut by stepping `radius` away from it along both adjacent
//! edges. The two cut points are then either joined directly (chamfer) or
//! blended through the original corner with a quadratic Bezier (fillet).
//!
//! # Limitations
//! - Radii are not clamped against edge lengths. A radius larger than the
//!   shorter adjacent edge, or two cuts overlapping on a shared edge, gives a
//!   self-intersecting path.
//! - End points are never rounded.

use serde::{Deserialize, Serialize};

use super::PathPoint;
use super::curve::{DEFAULT_SUBDIVISIONS, bezier_quadratic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CornerError {
    #[error("radius must be finite and non-negative: {radius}")]
    InvalidRadius { radius: f64 },
    #[error("segment count must be >= 1, got {segments}")]
    InvalidSegmentCount { segments: usize },
    #[error("path must have at least 2 points, got {count}")]
    InvalidPath { count: usize },
    #[error("expected 1 or {expected} corner radii, got {count}")]
    RadiusCountMismatch { expected: usize, count: usize },
}

/// Distance of the cut points from the corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CornerRadius {
    Uniform(f64),
    Split { before: f64, after: f64 },
}

impl CornerRadius {
    pub const NONE: Self = Self::Uniform(0.0);

    #[must_use]
    pub const fn before(self) -> f64 {
        match self {
            Self::Uniform(r) | Self::Split { before: r, .. } => r,
        }
    }

    #[must_use]
    pub const fn after(self) -> f64 {
        match self {
            Self::Uniform(r) | Self::Split { after: r, .. } => r,
        }
    }

    #[must_use]
    pub fn is_zero(self) -> bool {
        self.before() == 0.0 && self.after() == 0.0
    }

    fn validate(self) -> Result<Self, CornerError> {
        for radius in [self.before(), self.after()] {
            if !radius.is_finite() || radius < 0.0 {
                return Err(CornerError::InvalidRadius { radius });
            }
        }
        Ok(self)
    }
}

impl From<f64> for CornerRadius {
    fn from(r: f64) -> Self {
        Self::Uniform(r)
    }
}

/// How the two cut points of a corner are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CornerStyle {
    Chamfer,
    Fillet { segments: usize },
}

impl Default for CornerStyle {
    fn default() -> Self {
        Self::Fillet {
            segments: DEFAULT_SUBDIVISIONS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CornerDiagnostics {
    pub input_point_count: usize,
    pub output_point_count: usize,
    pub corner_count: usize,
    pub rounded_corner_count: usize,
    pub skipped_corner_count: usize,
    pub warnings: Vec<String>,
}

/// The two cut points around `corner`, or `None` when the radius is zero or an
/// adjacent edge has no length.
pub fn corner_cuts<P: PathPoint>(
    prev: P,
    corner: P,
    next: P,
    radius: CornerRadius,
) -> Result<Option<(P, P)>, CornerError> {
    let radius = radius.validate()?;
    if radius.is_zero() {
        return Ok(None);
    }
    let in_len = corner.distance(prev);
    let out_len = corner.distance(next);
    if in_len <= 0.0 || out_len <= 0.0 {
        return Ok(None);
    }
    let before = corner.lerp(prev, radius.before() / in_len);
    let after = corner.lerp(next, radius.after() / out_len);
    Ok(Some((before, after)))
}

/// Straight cut: the corner is replaced by its two cut points.
#[must_use]
pub fn straight_chamfer<P: PathPoint>(before: P, after: P) -> Vec<P> {
    vec![before, after]
}

/// Quadratic Bezier from `before` to `after` with the original corner as the
/// control point. Returns `segments + 1` points.
#[allow(clippy::cast_precision_loss)]
pub fn bezier_fillet<P: PathPoint>(
    before: P,
    corner: P,
    after: P,
    segments: usize,
) -> Result<Vec<P>, CornerError> {
    if segments == 0 {
        return Err(CornerError::InvalidSegmentCount { segments });
    }
    Ok((0..=segments)
        .map(|i| bezier_quadratic(before, corner, after, i as f64 / segments as f64))
        .collect())
}

/// Round a single corner. A zero radius leaves the corner untouched.
pub fn round_corner<P: PathPoint>(
    prev: P,
    corner: P,
    next: P,
    radius: CornerRadius,
    style: CornerStyle,
) -> Result<Vec<P>, CornerError> {
    match corner_cuts(prev, corner, next, radius)? {
        None => Ok(vec![corner]),
        Some((before, after)) => match style {
            CornerStyle::Chamfer => Ok(straight_chamfer(before, after)),
            CornerStyle::Fillet { segments } => bezier_fillet(before, corner, after, segments),
        },
    }
}

/// Chamfer every interior corner of `path`.
pub fn chamfer_path<P: PathPoint>(
    path: &[P],
    radii: &[CornerRadius],
) -> Result<(Vec<P>, CornerDiagnostics), CornerError> {
    round_corners(path, radii, CornerStyle::Chamfer)
}

/// Fillet every interior corner of `path` with `segments` steps per corner.
pub fn fillet_path<P: PathPoint>(
    path: &[P],
    radii: &[CornerRadius],
    segments: usize,
) -> Result<(Vec<P>, CornerDiagnostics), CornerError> {
    round_corners(path, radii, CornerStyle::Fillet { segments })
}

/// Round the interior corners of `path`.
///
/// `radii` holds either one radius for every corner or one entry per path
/// point; entries for the two end points are ignored.
pub fn round_corners<P: PathPoint>(
    path: &[P],
    radii: &[CornerRadius],
    style: CornerStyle,
) -> Result<(Vec<P>, CornerDiagnostics), CornerError> {
    if path.len() < 2 {
        return Err(CornerError::InvalidPath { count: path.len() });
    }
    if radii.len() != 1 && radii.len() != path.len() {
        return Err(CornerError::RadiusCountMismatch {
            expected: path.len(),
            count: radii.len(),
        });
    }
    if let CornerStyle::Fillet { segments: 0 } = style {
        return Err(CornerError::InvalidSegmentCount { segments: 0 });
    }

    let mut diagnostics = CornerDiagnostics {
        input_point_count: path.len(),
        ..Default::default()
    };

    let mut out = Vec::with_capacity(path.len());
    out.push(path[0]);
    for (i, window) in path.windows(3).enumerate() {
        let index = i + 1;
        diagnostics.corner_count += 1;
        let radius = radii.get(index).copied().unwrap_or(radii[0]);

        let rounded = round_corner(window[0], window[1], window[2], radius, style)?;
        if rounded.len() == 1 {
            if !radius.is_zero() {
                diagnostics
                    .warnings
                    .push(format!("corner {index} has a zero-length edge; left untouched"));
            }
            diagnostics.skipped_corner_count += 1;
        } else {
            diagnostics.rounded_corner_count += 1;
        }
        out.extend(rounded);
    }
    out.push(path[path.len() - 1]);

    diagnostics.output_point_count = out.len();
    Ok((out, diagnostics))
}
