//! Path resampling and Bezier evaluation.
//!
//! All routines are generic over [`PathPoint`], so the same code resamples
//! scalar sequences, planar outlines and 3D rails. Sampled sequences share
//! endpoints between neighbouring edges/curves: a path with `k` pieces sampled
//! at `n` segments each yields `n * k + 1` points.

use super::PathPoint;
use super::index::{IndexError, IndexRange};

/// Subdivision count used when the caller does not pick one.
pub const DEFAULT_SUBDIVISIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    #[error("path must contain at least {min} points, got {count}")]
    NotEnoughPoints { min: usize, count: usize },
    #[error("segment count must be >= 1, got {segments}")]
    InvalidSegmentCount { segments: usize },
    #[error("control weight must be finite")]
    NonFiniteWeight,
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Quadratic Bezier `(1-t)^2 p0 + 2t(1-t) p1 + t^2 p2`.
#[must_use]
pub fn bezier_quadratic<P: PathPoint>(p0: P, p1: P, p2: P, t: f64) -> P {
    let u = 1.0 - t;
    p0.blend(u * u, p1, 2.0 * u * t).blend(1.0, p2, t * t)
}

/// Cubic Bezier through the degree-3 Bernstein basis.
#[must_use]
pub fn bezier_cubic<P: PathPoint>(p0: P, p1: P, p2: P, p3: P, t: f64) -> P {
    let u = 1.0 - t;
    let (u2, t2) = (u * u, t * t);
    p0.blend(u2 * u, p1, 3.0 * u2 * t)
        .blend(1.0, p2, 3.0 * u * t2)
        .blend(1.0, p3, t2 * t)
}

/// Resample every edge of `path` into `segments` evenly spaced steps.
///
/// `linear_cut(&[0.0, 1.0, 5.0], 2)` gives `[0.0, 0.5, 1.0, 3.0, 5.0]`.
pub fn linear_cut<P: PathPoint>(path: &[P], segments: usize) -> Result<Vec<P>, CurveError> {
    check_segments(segments)?;
    let Some((&last, _)) = path.split_last() else {
        return Err(CurveError::NotEnoughPoints { min: 1, count: 0 });
    };

    let mut out = Vec::with_capacity(segments * (path.len() - 1) + 1);
    for edge in path.windows(2) {
        out.extend(sample_piece(segments, |t| edge[0].lerp(edge[1], t)));
    }
    out.push(last);
    Ok(out)
}

/// Evaluate `path` as a chain of quadratic Bezier pieces
/// `(start, control, end)` that share their end points.
pub fn bezier_quadratic_chain<P: PathPoint>(
    path: &[P],
    segments: usize,
) -> Result<Vec<P>, CurveError> {
    bezier_chain(path, segments, 2, |g, t| bezier_quadratic(g[0], g[1], g[2], t))
}

/// Evaluate `path` as a chain of cubic Bezier pieces
/// `(start, control, control, end)` that share their end points.
pub fn bezier_cubic_chain<P: PathPoint>(
    path: &[P],
    segments: usize,
) -> Result<Vec<P>, CurveError> {
    bezier_chain(path, segments, 3, |g, t| bezier_cubic(g[0], g[1], g[2], g[3], t))
}

fn bezier_chain<P, F>(
    path: &[P],
    segments: usize,
    degree: usize,
    eval: F,
) -> Result<Vec<P>, CurveError>
where
    P: PathPoint,
    F: Fn(&[P], f64) -> P,
{
    check_segments(segments)?;
    if path.len() < degree + 1 {
        return Err(CurveError::NotEnoughPoints {
            min: degree + 1,
            count: path.len(),
        });
    }

    // Group starts: every `degree`-th point that still has a full group after it.
    let d = isize::try_from(degree).unwrap_or(isize::MAX);
    let starts = IndexRange::from_stride(0, -d, d)?.indices(path.len());

    let used = starts.last().map_or(0, |&s| s + degree);
    if used + 1 < path.len() {
        log::warn!(
            "bezier chain: ignoring {} trailing point(s) that do not form a degree-{degree} piece",
            path.len() - used - 1
        );
    }

    let mut out = Vec::with_capacity(segments * starts.len() + 1);
    for &start in &starts {
        let group = &path[start..=start + degree];
        out.extend(sample_piece(segments, |t| eval(group, t)));
    }
    out.push(path[used]);
    Ok(out)
}

/// Control points for a G1-continuous cubic chain through `path`.
///
/// Each interior point gets a pair of controls offset along the local chord
/// `(next - previous) / 2 * weight`; the end points act as their own
/// controls. The result has `3 * (len - 1) + 1` points and feeds
/// [`bezier_cubic_chain`] directly.
pub fn synthesize_control_points<P: PathPoint>(
    path: &[P],
    weight: f64,
) -> Result<Vec<P>, CurveError> {
    if !weight.is_finite() {
        return Err(CurveError::NonFiniteWeight);
    }
    if path.len() < 2 {
        return Err(CurveError::NotEnoughPoints {
            min: 2,
            count: path.len(),
        });
    }

    let last = path.len() - 1;
    let half = weight / 2.0;
    // (before, after) controls per point.
    let controls = |i: usize| -> (P, P) {
        if i == 0 || i == last {
            return (path[i], path[i]);
        }
        let (prev, here, next) = (path[i - 1], path[i], path[i + 1]);
        let after = here.blend(1.0, next, half).blend(1.0, prev, -half);
        let before = here.blend(1.0, next, -half).blend(1.0, prev, half);
        (before, after)
    };

    let mut out = Vec::with_capacity(3 * last + 1);
    for i in 0..last {
        out.push(path[i]);
        out.push(controls(i).1);
        out.push(controls(i + 1).0);
    }
    out.push(path[last]);
    Ok(out)
}

/// Smooth cubic interpolation through every point of `path`.
pub fn smooth_path<P: PathPoint>(
    path: &[P],
    weight: f64,
    segments: usize,
) -> Result<Vec<P>, CurveError> {
    let controls = synthesize_control_points(path, weight)?;
    bezier_cubic_chain(&controls, segments)
}

fn check_segments(segments: usize) -> Result<(), CurveError> {
    if segments == 0 {
        return Err(CurveError::InvalidSegmentCount { segments });
    }
    Ok(())
}

/// Samples `t = i / segments` for `i in 0..segments`; the closing point is left
/// to the caller so consecutive pieces do not repeat it.
#[allow(clippy::cast_precision_loss)]
fn sample_piece<P, F>(segments: usize, eval: F) -> impl Iterator<Item = P>
where
    F: Fn(f64) -> P,
{
    (0..segments).map(move |i| eval(i as f64 / segments as f64))
}
