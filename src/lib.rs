pub mod analyzer;
pub mod matrix;
pub mod persistence;
pub mod stats;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuantVecError {
    #[error("Dimension Mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Empty Vector: operation requires at least one component")]
    EmptyVector,
    #[error("Domain Error: {0}")]
    Domain(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, QuantVecError>;

// Re-export main types for convenience
pub use analyzer::{
    AssetStats, PortfolioAnalyzer, DIVERSIFICATION_THRESHOLD, PAIRS_TRADING_THRESHOLD,
};
pub use matrix::{CorrelationMatrix, PairCorrelation};
pub use persistence::ReturnsStore;
pub use utils::{generate_random_returns, to_returns};
pub use vector::{Vector, ORTHOGONALITY_TOLERANCE};
