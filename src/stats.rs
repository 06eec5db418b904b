use crate::{vector::Vector, QuantVecError, Result};

/// Statistical layer, built compositionally on the geometric primitives in
/// `vector`. The compositions are deliberate: `std` is the RMS of the
/// de-meaned vector and `correlation_with` is the cosine between two
/// de-meaned vectors, so an error in any primitive would surface in every
/// derived quantity.
impl Vector {
    /// Arithmetic mean of the components.
    pub fn mean(&self) -> Result<f64> {
        self.check_nonempty()?;
        Ok(self.components.iter().sum::<f64>() / self.dimension() as f64)
    }

    /// A new vector with the mean subtracted from every element; the result
    /// has mean zero up to floating-point rounding.
    pub fn de_mean(&self) -> Result<Vector> {
        let mean = self.mean()?;
        let components = self.components.iter().map(|x| x - mean).collect();
        Ok(Vector::new(components))
    }

    /// Root-mean-square magnitude: `norm(2) / sqrt(n)`.
    pub fn rms(&self) -> Result<f64> {
        Ok(self.norm(2.0)? / (self.dimension() as f64).sqrt())
    }

    /// Population standard deviation, defined as the RMS of the de-meaned
    /// vector. For return series this is the volatility.
    pub fn std(&self) -> Result<f64> {
        self.de_mean()?.rms()
    }

    /// Zero-mean, unit-std transform (population z-scores).
    ///
    /// Fails with a domain error when the standard deviation is zero, i.e.
    /// for a constant vector.
    pub fn standardize(&self) -> Result<Vector> {
        let std = self.std()?;
        if std == 0.0 {
            return Err(QuantVecError::Domain(
                "cannot standardize a constant vector (zero standard deviation)".to_string(),
            ));
        }
        Ok(self.de_mean()?.scale(1.0 / std))
    }

    /// Pearson correlation coefficient with another series: the cosine of
    /// the angle between the two de-meaned vectors, in [-1, 1].
    ///
    /// When either series has zero variance the correlation is
    /// mathematically undefined; this returns the 0.0 sentinel instead of
    /// failing, so constant series rank as uncorrelated with everything.
    pub fn correlation_with(&self, other: &Vector) -> Result<f64> {
        self.check_same_dimension(other)?;

        let de_meaned_self = self.de_mean()?;
        let de_meaned_other = other.de_mean()?;

        let numerator = de_meaned_self.dot(&de_meaned_other)?;
        let denominator = de_meaned_self.magnitude()? * de_meaned_other.magnitude()?;

        if denominator == 0.0 {
            return Ok(0.0);
        }
        Ok(numerator / denominator)
    }
}
