//! Vector algebra helpers used by the transform builders.
//!
//! The free functions mirror the methods on [`Vec3`] but add the
//! epsilon-checked normalization the frame builders rely on, and the 3x3
//! matrix type needed for Rodrigues' rotation formula.

use std::ops::{Add, Mul};

use super::{PathPoint, Tolerance, Transform, Vec3};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    #[error("cannot normalize a vector of length {length} (below epsilon {eps})")]
    Degenerate { length: f64, eps: f64 },
}

#[must_use]
pub fn dot(a: Vec3, b: Vec3) -> f64 {
    a.dot(b)
}

#[must_use]
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    a.cross(b)
}

#[must_use]
pub fn norm(v: Vec3) -> f64 {
    v.length()
}

/// Unit vector along `v`, failing when `norm(v) < Tolerance::OVERLAP`.
pub fn normalize(v: Vec3) -> Result<Vec3, VectorError> {
    normalize_with_tolerance(v, Tolerance::OVERLAP)
}

pub fn normalize_with_tolerance(v: Vec3, tol: Tolerance) -> Result<Vec3, VectorError> {
    let length = norm(v);
    if !length.is_finite() || length < tol.eps {
        return Err(VectorError::Degenerate {
            length,
            eps: tol.eps,
        });
    }
    Ok(v / length)
}

/// `a + t * (b - a)` for any path value.
#[must_use]
pub fn lerp<P: PathPoint>(t: f64, a: P, b: P) -> P {
    a.lerp(b, t)
}

/// Cross-product matrix of `v`: `skew(v) * x == cross(v, x)`.
#[must_use]
pub fn skew(v: Vec3) -> Mat3 {
    Mat3::from_rows([
        [0.0, -v.z, v.y],
        [v.z, 0.0, -v.x],
        [-v.y, v.x, 0.0],
    ])
}

/// Row-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    rows: [[f64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[must_use]
    pub const fn from_rows(rows: [[f64; 3]; 3]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn rows(&self) -> [[f64; 3]; 3] {
        self.rows
    }

    #[must_use]
    pub fn scaled(self, s: f64) -> Self {
        Self::from_rows(self.rows.map(|row| row.map(|v| v * s)))
    }

    #[must_use]
    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }

    /// 4x4 form with zero homogeneous row and column.
    #[must_use]
    pub fn to_augmented(&self) -> [[f64; 4]; 4] {
        let r = &self.rows;
        [
            [r[0][0], r[0][1], r[0][2], 0.0],
            [r[1][0], r[1][1], r[1][2], 0.0],
            [r[2][0], r[2][1], r[2][2], 0.0],
            [0.0, 0.0, 0.0, 0.0],
        ]
    }

    /// Affine transform with this linear block and no translation.
    #[must_use]
    pub fn to_transform(&self) -> Transform {
        Transform::from_parts(self.rows, Vec3::ZERO)
    }
}

impl Add for Mat3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let mut rows = self.rows;
        for (row, other) in rows.iter_mut().zip(rhs.rows) {
            for (cell, v) in row.iter_mut().zip(other) {
                *cell += v;
            }
        }
        Self { rows }
    }
}

impl Mul for Mat3 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * rhs.rows[k][j]).sum();
            }
        }
        Self { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_yields_unit_length() {
        for v in [
            Vec3::new(3.0, 4.0, 0.0),
            Vec3::new(-0.2, 0.05, 7.5),
            Vec3::new(1e6, -1e6, 1.0),
        ] {
            let n = normalize(v).expect("non-degenerate");
            assert!((norm(n) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn normalize_rejects_short_vectors() {
        let err = normalize(Vec3::new(0.001, 0.0, 0.0)).unwrap_err();
        assert!(matches!(err, VectorError::Degenerate { .. }));
        assert!(normalize_with_tolerance(Vec3::new(0.001, 0.0, 0.0), Tolerance::DEFAULT).is_ok());
    }

    #[test]
    fn skew_matches_cross_product() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let x = Vec3::new(-4.0, 0.5, 2.0);
        assert_eq!(skew(v).mul_vec(x), cross(v, x));
    }

    #[test]
    fn skew_augmented_has_zero_homogeneous_row() {
        assert_eq!(
            skew(Vec3::new(1.0, 2.0, 3.0)).to_augmented(),
            [
                [0.0, -3.0, 2.0, 0.0],
                [3.0, 0.0, -1.0, 0.0],
                [-2.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 0.0, 0.0],
            ]
        );
    }

    #[test]
    fn lerp_works_on_scalars_and_vectors() {
        assert_eq!(lerp(0.5, 0.0, 8.0), 4.0);
        assert_eq!(
            lerp(0.25, Vec3::ZERO, Vec3::new(4.0, 8.0, -4.0)),
            Vec3::new(1.0, 2.0, -1.0)
        );
    }
}
