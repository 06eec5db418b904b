use crate::{QuantVecError, Result};
use serde::{Deserialize, Serialize};

/// Default tolerance for orthogonality checks.
pub const ORTHOGONALITY_TOLERANCE: f64 = 1e-10;

/// A fixed-length ordered sequence of real numbers with value semantics.
/// Every transformation returns a new `Vector`; no operation mutates the
/// receiver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub components: Vec<f64>,
}

impl Vector {
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    pub fn from_slice(components: &[f64]) -> Self {
        Self {
            components: components.to_vec(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub(crate) fn check_nonempty(&self) -> Result<()> {
        if self.components.is_empty() {
            return Err(QuantVecError::EmptyVector);
        }
        Ok(())
    }

    pub(crate) fn check_same_dimension(&self, other: &Vector) -> Result<()> {
        self.check_nonempty()?;
        other.check_nonempty()?;
        if self.dimension() != other.dimension() {
            return Err(QuantVecError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(())
    }

    /// Element-wise sum. Both operands must have the same dimension.
    pub fn add(&self, other: &Vector) -> Result<Vector> {
        self.check_same_dimension(other)?;
        let components = self
            .components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Vector::new(components))
    }

    /// Element-wise scaling by a real scalar.
    pub fn scale(&self, scalar: f64) -> Vector {
        let components = self.components.iter().map(|x| scalar * x).collect();
        Vector::new(components)
    }

    /// Subtraction, defined as addition of the negated operand.
    pub fn sub(&self, other: &Vector) -> Result<Vector> {
        self.add(&other.scale(-1.0))
    }

    /// Dot product (inner product). Both operands must have the same
    /// dimension.
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.check_same_dimension(other)?;
        Ok(self
            .components
            .iter()
            .zip(other.components.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    /// The p-norm of the vector.
    ///
    /// - `p == 1.0`: Manhattan norm (sum of absolute values)
    /// - `p == 2.0`: Euclidean norm (square root of the self-dot)
    /// - `p == f64::INFINITY`: max norm (largest absolute value)
    /// - otherwise: `(sum of |x|^p)^(1/p)`
    pub fn norm(&self, p: f64) -> Result<f64> {
        self.check_nonempty()?;
        let norm = if p == f64::INFINITY {
            self.components
                .iter()
                .map(|x| x.abs())
                .fold(0.0, f64::max)
        } else if p == 1.0 {
            self.components.iter().map(|x| x.abs()).sum()
        } else if p == 2.0 {
            self.components.iter().map(|x| x * x).sum::<f64>().sqrt()
        } else {
            self.components
                .iter()
                .map(|x| x.abs().powf(p))
                .sum::<f64>()
                .powf(1.0 / p)
        };
        Ok(norm)
    }

    /// Euclidean length, shorthand for `norm(2.0)`.
    pub fn magnitude(&self) -> Result<f64> {
        self.norm(2.0)
    }

    /// Angle between two vectors as `(radians, degrees)`.
    ///
    /// Fails with a domain error when either vector has zero length, since
    /// the angle is undefined. The cosine is clamped to [-1, 1] so that
    /// floating-point rounding never pushes `acos` out of its domain.
    pub fn angle_with(&self, other: &Vector) -> Result<(f64, f64)> {
        let dot = self.dot(other)?;
        let norm_self = self.magnitude()?;
        let norm_other = other.magnitude()?;
        if norm_self == 0.0 || norm_other == 0.0 {
            return Err(QuantVecError::Domain(
                "angle is undefined for a zero vector".to_string(),
            ));
        }
        let cosine = (dot / (norm_self * norm_other)).clamp(-1.0, 1.0);
        let radians = cosine.acos();
        let degrees = radians.to_degrees();
        Ok((radians, degrees))
    }

    /// True iff the dot product is zero within `tolerance`.
    pub fn is_orthogonal(&self, other: &Vector, tolerance: f64) -> Result<bool> {
        Ok(self.dot(other)?.abs() <= tolerance)
    }

    /// Orthogonal projection of this vector onto `onto`:
    /// `onto * (self . onto / onto . onto)`.
    ///
    /// Fails with a domain error when `onto` is the zero vector.
    pub fn projection_onto(&self, onto: &Vector) -> Result<Vector> {
        let denominator = onto.dot(onto)?;
        if denominator == 0.0 {
            return Err(QuantVecError::Domain(
                "cannot project onto the zero vector".to_string(),
            ));
        }
        let numerator = self.dot(onto)?;
        Ok(onto.scale(numerator / denominator))
    }

    /// Euclidean distance to another vector; symmetric by construction.
    pub fn distance(&self, other: &Vector) -> Result<f64> {
        self.sub(other)?.norm(2.0)
    }
}
