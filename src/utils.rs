use crate::{vector::Vector, QuantVecError, Result};

/// Convert a price series into simple percent-change returns.
///
/// The result has one fewer element than the input. Requires at least two
/// prices; a zero price makes the percent change undefined and fails with
/// a domain error.
pub fn to_returns(prices: &Vector) -> Result<Vector> {
    prices.check_nonempty()?;
    if prices.dimension() < 2 {
        return Err(QuantVecError::Domain(
            "returns require at least two prices".to_string(),
        ));
    }

    let mut returns = Vec::with_capacity(prices.dimension() - 1);
    for window in prices.components.windows(2) {
        if window[0] == 0.0 {
            return Err(QuantVecError::Domain(
                "percent change is undefined for a zero price".to_string(),
            ));
        }
        returns.push((window[1] - window[0]) / window[0]);
    }
    Ok(Vector::new(returns))
}

/// Generate random return series for demos and benchmarks, with each
/// element drawn uniformly from (-0.05, 0.05).
pub fn generate_random_returns(len: usize, num: usize) -> Vec<Vector> {
    use rand::Rng;
    let mut rng = rand::thread_rng();

    (0..num)
        .map(|_| Vector::new((0..len).map(|_| rng.gen_range(-0.05..0.05)).collect()))
        .collect()
}
