use quantvec::{QuantVecError, Vector};

const TOLERANCE: f64 = 1e-10;

#[test]
fn test_mean() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    assert_eq!(v.mean().unwrap(), 3.0);
}

#[test]
fn test_mean_of_empty_vector_fails() {
    let empty = Vector::new(vec![]);
    assert!(matches!(
        empty.mean().unwrap_err(),
        QuantVecError::EmptyVector
    ));
    assert!(matches!(
        empty.std().unwrap_err(),
        QuantVecError::EmptyVector
    ));
}

#[test]
fn test_de_mean() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);

    let de_meaned = v.de_mean().unwrap();
    assert_eq!(de_meaned.components, vec![-2.0, -1.0, 0.0, 1.0, 2.0]);
    assert!(de_meaned.mean().unwrap().abs() < TOLERANCE);
}

#[test]
fn test_de_mean_centers_arbitrary_series() {
    let v = Vector::from_slice(&[0.013, -0.007, 0.021, -0.015, 0.004, 0.009]);
    assert!(v.de_mean().unwrap().mean().unwrap().abs() < TOLERANCE);
}

#[test]
fn test_rms() {
    let v = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0]);

    let expected = ((1.0 + 4.0 + 9.0 + 16.0) / 4.0_f64).sqrt();
    assert!((v.rms().unwrap() - expected).abs() < TOLERANCE);
}

#[test]
fn test_std() {
    let v = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0]);

    // mean 5, de-meaned [-3, -1, 1, 3], population std sqrt(20/4)
    assert!((v.std().unwrap() - 5.0_f64.sqrt()).abs() < TOLERANCE);
}

#[test]
fn test_std_is_rms_of_de_meaned() {
    // std is defined through the composition, so the two must agree
    // exactly, not just approximately.
    let v = Vector::from_slice(&[0.01, -0.02, 0.015, -0.01, 0.02, 0.007]);
    assert_eq!(v.std().unwrap(), v.de_mean().unwrap().rms().unwrap());
}

#[test]
fn test_standardize() {
    let v = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0]);

    let standardized = v.standardize().unwrap();
    assert!(standardized.mean().unwrap().abs() < TOLERANCE);
    assert!((standardized.std().unwrap() - 1.0).abs() < TOLERANCE);
}

#[test]
fn test_standardize_constant_vector_fails() {
    let constant = Vector::from_slice(&[3.0, 3.0, 3.0]);

    let err = constant.standardize().unwrap_err();
    assert!(matches!(err, QuantVecError::Domain(_)));
}

#[test]
fn test_correlation_perfect_positive() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let b = Vector::from_slice(&[2.0, 4.0, 6.0, 8.0, 10.0]);

    assert!((a.correlation_with(&b).unwrap() - 1.0).abs() < TOLERANCE);
}

#[test]
fn test_correlation_perfect_negative() {
    let a = Vector::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]);
    let b = Vector::from_slice(&[5.0, 4.0, 3.0, 2.0, 1.0]);

    assert!((a.correlation_with(&b).unwrap() + 1.0).abs() < TOLERANCE);
}

#[test]
fn test_correlation_is_symmetric() {
    let a = Vector::from_slice(&[0.01, -0.02, 0.03, -0.01, 0.02]);
    let b = Vector::from_slice(&[0.02, -0.03, 0.04, -0.01, 0.01]);

    let forward = a.correlation_with(&b).unwrap();
    let backward = b.correlation_with(&a).unwrap();
    assert!((forward - backward).abs() < TOLERANCE);
}

#[test]
fn test_correlation_stays_in_range() {
    let a = Vector::from_slice(&[0.013, -0.007, 0.021, -0.015, 0.004, 0.009, -0.011]);
    let b = Vector::from_slice(&[-0.002, 0.018, -0.009, 0.006, -0.014, 0.01, 0.003]);

    let correlation = a.correlation_with(&b).unwrap();
    assert!(correlation >= -1.0 - 1e-9);
    assert!(correlation <= 1.0 + 1e-9);
}

#[test]
fn test_correlation_zero_variance_sentinel() {
    // A constant series has undefined correlation; the policy is to return
    // the 0.0 sentinel rather than fail.
    let constant = Vector::from_slice(&[1.0, 1.0, 1.0]);
    let b = Vector::from_slice(&[0.01, -0.02, 0.03]);

    assert_eq!(constant.correlation_with(&b).unwrap(), 0.0);
    assert_eq!(b.correlation_with(&constant).unwrap(), 0.0);
    assert_eq!(constant.correlation_with(&constant).unwrap(), 0.0);
}

#[test]
fn test_correlation_dimension_mismatch() {
    let a = Vector::from_slice(&[1.0, 2.0]);
    let b = Vector::from_slice(&[1.0, 2.0, 3.0]);

    assert!(matches!(
        a.correlation_with(&b).unwrap_err(),
        QuantVecError::DimensionMismatch { .. }
    ));
}

#[test]
fn test_zero_correlation_means_orthogonal_de_meaned() {
    // Correlation near zero is equivalent to near-orthogonal de-meaned
    // vectors.
    let a = Vector::from_slice(&[1.0, -1.0, 1.0, -1.0]);
    let b = Vector::from_slice(&[1.0, 1.0, -1.0, -1.0]);

    let correlation = a.correlation_with(&b).unwrap();
    assert!(correlation.abs() < TOLERANCE);

    let orthogonal = a
        .de_mean()
        .unwrap()
        .is_orthogonal(&b.de_mean().unwrap(), TOLERANCE)
        .unwrap();
    assert!(orthogonal);
}
