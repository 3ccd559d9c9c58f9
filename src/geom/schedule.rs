//! Per-frame scale and twist schedules.

use serde::{Deserialize, Deserializer, Serialize};

use super::transform::ScaleSpec;
use super::{PathPoint, Vec3};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("schedule sequence must not be empty")]
    Empty,
}

/// A value that is either fixed for every frame or listed per position and
/// linearly interpolated in between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Schedule<T> {
    Constant(T),
    Sequence(Vec<T>),
}

impl<T: PathPoint> Schedule<T> {
    /// Value at step `index` of `steps` (the last step being `steps`).
    ///
    /// The position `(len - 1) * index / steps` is interpolated between its
    /// floor and the following entry; positions past the end clamp to the
    /// last entry.
    #[allow(clippy::cast_precision_loss)]
    pub fn at(&self, index: usize, steps: usize) -> Result<T, ScheduleError> {
        let values = match self {
            Self::Constant(value) => return Ok(*value),
            Self::Sequence(values) => values,
        };
        let Some((&last, _)) = values.split_last() else {
            return Err(ScheduleError::Empty);
        };
        if values.len() == 1 || steps == 0 {
            return Ok(values[0]);
        }

        let pos = (values.len() - 1) as f64 * index as f64 / steps as f64;
        if !pos.is_finite() || pos <= 0.0 {
            return Ok(values[0]);
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let lower = pos.floor() as usize;
        if lower + 1 >= values.len() {
            return Ok(last);
        }
        let frac = pos - pos.floor();
        Ok(values[lower].lerp(values[lower + 1], frac))
    }

    /// Value for point `index` of a path with `count` points.
    pub fn at_point(&self, index: usize, count: usize) -> Result<T, ScheduleError> {
        self.at(index, count.saturating_sub(1))
    }

    /// Fails if the schedule can never produce a value.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            Self::Sequence(values) if values.is_empty() => Err(ScheduleError::Empty),
            _ => Ok(()),
        }
    }
}

impl From<f64> for Schedule<f64> {
    fn from(value: f64) -> Self {
        Self::Constant(value)
    }
}

impl From<Vec<f64>> for Schedule<f64> {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values)
    }
}

impl From<f64> for Schedule<Vec3> {
    fn from(value: f64) -> Self {
        Self::Constant(Vec3::splat(value))
    }
}

impl From<ScaleSpec> for Schedule<Vec3> {
    fn from(spec: ScaleSpec) -> Self {
        Self::Constant(spec.to_vec3())
    }
}

impl From<Vec<f64>> for Schedule<Vec3> {
    fn from(values: Vec<f64>) -> Self {
        Self::Sequence(values.into_iter().map(Vec3::splat).collect())
    }
}

impl From<Vec<ScaleSpec>> for Schedule<Vec3> {
    fn from(values: Vec<ScaleSpec>) -> Self {
        Self::Sequence(values.into_iter().map(ScaleSpec::to_vec3).collect())
    }
}

/// Scale schedule as written in configuration documents.
///
/// A top-level array is always a per-position sequence, so `[1.0, 2.0]` grows
/// uniformly from 1 to 2; a constant planar scale is written `[[1.0, 2.0]]`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ScaleDocument {
    Sequence(Vec<ScaleSpec>),
    Constant(ScaleSpec),
}

/// `deserialize_with` target for optional scale schedules: accepts a number,
/// a 2/3-vector, or a list of either.
pub(crate) fn deserialize_scale<'de, D>(
    deserializer: D,
) -> Result<Option<Schedule<Vec3>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ScaleDocument>::deserialize(deserializer)?.map(|document| match document {
        ScaleDocument::Constant(spec) => Schedule::from(spec),
        ScaleDocument::Sequence(specs) => Schedule::from(specs),
    }))
}
