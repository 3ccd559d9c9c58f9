//! Turning frame lists into geometry.
//!
//! - **`duplicate`**: one instance of the template per frame (discrete copies).
//! - **`sweep`**: a continuous solid made of convex hulls of the template placed
//!   at consecutive frames. With `chamfer = false` only the pairs `(0, 1)`,
//!   `(2, 3)`, ... are hulled, which suits frame lists built with the
//!   duplicated orientation policy: every edge becomes its own segment and
//!   corners are not blended.

use std::convert::Infallible;
use std::num::NonZeroUsize;

use super::index::{IndexRange, Step};
use super::{Transform, par};
use crate::shape::ShapeEngine;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SweepError {
    #[error("frame list is empty")]
    EmptyFrames,
    #[error("sweep requires at least 2 frames, got {count}")]
    NotEnoughFrames { count: usize },
}

/// Index pairs hulled by [`sweep`] for `count` frames.
pub fn sweep_pairs(count: usize, chamfer: bool) -> Result<Vec<(usize, usize)>, SweepError> {
    if count < 2 {
        return Err(SweepError::NotEnoughFrames { count });
    }
    let stride = if chamfer { NonZeroUsize::MIN } else { NonZeroUsize::MIN.saturating_add(1) };
    let starts = IndexRange::new(0, -1, Step::Stride(stride)).indices(count);
    Ok(starts.into_iter().map(|i| (i, i + 1)).collect())
}

/// The template placed at every frame, in frame order.
pub fn place_all<E: ShapeEngine>(
    engine: &E,
    frames: &[Transform],
    template: &E::Shape,
) -> Vec<E::Shape> {
    let Ok(placed) = par::build_indexed::<_, Infallible, _>(frames.len(), |i| {
        Ok(engine.transform(&frames[i], template))
    });
    placed
}

/// Union of one template instance per frame.
pub fn duplicate<E: ShapeEngine>(
    engine: &E,
    frames: &[Transform],
    template: &E::Shape,
) -> Result<E::Shape, SweepError> {
    if frames.is_empty() {
        return Err(SweepError::EmptyFrames);
    }
    let placed = place_all(engine, frames, template);
    log::debug!("duplicate: {} instance(s)", placed.len());
    Ok(engine.union(&placed))
}

/// Union of hulls of the template at consecutive frame pairs.
pub fn sweep<E: ShapeEngine>(
    engine: &E,
    frames: &[Transform],
    template: &E::Shape,
    chamfer: bool,
) -> Result<E::Shape, SweepError> {
    let pairs = sweep_pairs(frames.len(), chamfer)?;
    let Ok(hulls) = par::build_indexed::<_, Infallible, _>(pairs.len(), |k| {
        let (a, b) = pairs[k];
        let ends = [
            engine.transform(&frames[a], template),
            engine.transform(&frames[b], template),
        ];
        Ok(engine.hull(&ends))
    });
    log::debug!(
        "sweep: {} hull segment(s) from {} frame(s), chamfer {chamfer}",
        hulls.len(),
        frames.len()
    );
    Ok(engine.union(&hulls))
}
