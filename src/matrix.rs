use crate::{vector::Vector, QuantVecError, Result};
use serde::{Deserialize, Serialize};

/// A square, symmetric table of pairwise correlations between labeled
/// return series. Recomputed on demand; it holds no references back to the
/// vectors it was built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub assets: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

/// One off-diagonal entry of the matrix, as produced by the selection
/// filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PairCorrelation {
    pub asset_a: String,
    pub asset_b: String,
    pub correlation: f64,
}

impl CorrelationMatrix {
    /// Build the correlation matrix for an ordered collection of
    /// `(label, series)` pairs. All series must be non-empty and of equal
    /// length.
    ///
    /// The diagonal is set to exactly 1.0 rather than computed, so
    /// self-correlation never carries floating-point noise. Each unordered
    /// pair is computed once and mirrored, which makes the table symmetric
    /// by construction.
    pub fn compute(series: &[(String, Vector)]) -> Result<Self> {
        for (_, vector) in series {
            vector.check_nonempty()?;
        }
        if let Some((_, first)) = series.first() {
            for (_, vector) in &series[1..] {
                if vector.dimension() != first.dimension() {
                    return Err(QuantVecError::DimensionMismatch {
                        left: first.dimension(),
                        right: vector.dimension(),
                    });
                }
            }
        }

        let n = series.len();
        let mut values = vec![vec![0.0; n]; n];
        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let correlation = series[i].1.correlation_with(&series[j].1)?;
                values[i][j] = correlation;
                values[j][i] = correlation;
            }
        }

        Ok(Self {
            assets: series.iter().map(|(name, _)| name.clone()).collect(),
            values,
        })
    }

    /// Number of assets (the matrix is `size x size`).
    pub fn size(&self) -> usize {
        self.assets.len()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.values.get(i)?.get(j).copied()
    }

    pub fn get_by_label(&self, a: &str, b: &str) -> Option<f64> {
        let i = self.assets.iter().position(|name| name == a)?;
        let j = self.assets.iter().position(|name| name == b)?;
        self.get(i, j)
    }

    /// All off-diagonal entries of the upper triangle, each unordered pair
    /// once, in row-major order.
    pub fn pairs(&self) -> Vec<PairCorrelation> {
        let mut pairs = Vec::new();
        for i in 0..self.size() {
            for j in (i + 1)..self.size() {
                pairs.push(PairCorrelation {
                    asset_a: self.assets[i].clone(),
                    asset_b: self.assets[j].clone(),
                    correlation: self.values[i][j],
                });
            }
        }
        pairs
    }
}
