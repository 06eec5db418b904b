use crate::{
    matrix::{CorrelationMatrix, PairCorrelation},
    vector::Vector,
    Result,
};
use serde::{Deserialize, Serialize};

/// Maximum absolute correlation for a pair to count as diversified.
pub const DIVERSIFICATION_THRESHOLD: f64 = 0.5;
/// Minimum correlation for a pair to count as a pairs-trading candidate.
pub const PAIRS_TRADING_THRESHOLD: f64 = 0.85;

/// Summary statistics for one asset's return series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetStats {
    pub asset: String,
    pub mean_return: f64,
    pub volatility: f64,
    pub sharpe_approx: f64,
    pub max_return: f64,
    pub min_return: f64,
}

/// Correlation analysis over a portfolio of named return series.
///
/// A thin consumer of the `Vector` operations: it loops over the assets,
/// builds the correlation matrix, and applies threshold filters. All
/// numeric behavior lives in the core; the analyzer never prints.
pub struct PortfolioAnalyzer {
    returns: Vec<(String, Vector)>,
}

impl PortfolioAnalyzer {
    /// Create an analyzer over an ordered collection of
    /// `(asset name, return series)` pairs. Order is preserved in every
    /// output.
    pub fn new(returns: Vec<(String, Vector)>) -> Self {
        Self { returns }
    }

    pub fn assets(&self) -> Vec<&str> {
        self.returns.iter().map(|(name, _)| name.as_str()).collect()
    }

    pub fn asset_count(&self) -> usize {
        self.returns.len()
    }

    pub fn correlation_matrix(&self) -> Result<CorrelationMatrix> {
        CorrelationMatrix::compute(&self.returns)
    }

    /// Pairs with absolute correlation below `threshold`, sorted ascending
    /// by absolute correlation (lowest first, best diversification).
    pub fn diversification_pairs(&self, threshold: f64) -> Result<Vec<PairCorrelation>> {
        let matrix = self.correlation_matrix()?;
        let mut pairs: Vec<PairCorrelation> = matrix
            .pairs()
            .into_iter()
            .filter(|pair| pair.correlation.abs() < threshold)
            .collect();

        pairs.sort_by(|a, b| {
            a.correlation
                .abs()
                .partial_cmp(&b.correlation.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(pairs)
    }

    /// Pairs with signed correlation at or above `threshold`, sorted
    /// descending (highest first).
    pub fn pairs_trading_candidates(&self, threshold: f64) -> Result<Vec<PairCorrelation>> {
        let matrix = self.correlation_matrix()?;
        let mut pairs: Vec<PairCorrelation> = matrix
            .pairs()
            .into_iter()
            .filter(|pair| pair.correlation >= threshold)
            .collect();

        pairs.sort_by(|a, b| {
            b.correlation
                .partial_cmp(&a.correlation)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(pairs)
    }

    /// Per-asset summary statistics, in insertion order. The approximate
    /// Sharpe ratio falls back to 0.0 for a constant series, where
    /// volatility is zero.
    pub fn asset_statistics(&self) -> Result<Vec<AssetStats>> {
        let mut stats = Vec::with_capacity(self.returns.len());
        for (asset, returns) in &self.returns {
            let mean_return = returns.mean()?;
            let volatility = returns.std()?;
            let sharpe_approx = if volatility > 0.0 {
                mean_return / volatility
            } else {
                0.0
            };
            let max_return = returns.components.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let min_return = returns.components.iter().copied().fold(f64::INFINITY, f64::min);

            stats.push(AssetStats {
                asset: asset.clone(),
                mean_return,
                volatility,
                sharpe_approx,
                max_return,
                min_return,
            });
        }
        Ok(stats)
    }
}
