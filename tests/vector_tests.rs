// tests/vector_tests.rs

use gram_schmidt::{GsError, VectorN};

const EPS: f64 = 1e-12;

#[test]
fn test_construction_and_access() {
    let v = VectorN::new(vec![1.0, 2.0, 3.0]);
    assert_eq!(v.dimension(), 3);
    assert_eq!(v[1], 2.0);
    assert_eq!(v.as_slice(), &[1.0, 2.0, 3.0]);
    assert_eq!(VectorN::from(vec![1.0, 2.0, 3.0]), v);
    assert!(VectorN::zeros(4).is_zero());
    assert!(!v.is_zero());
}

#[test]
fn test_scale_and_subtract_return_new_vectors() {
    let v = VectorN::from([3.0, -1.0]);
    let s = v.scale(2.0);
    let d = s.subtract(&v).unwrap();
    assert_eq!(s, VectorN::from([6.0, -2.0]));
    assert_eq!(d, v);
    assert_eq!(v, VectorN::from([3.0, -1.0]));
}

#[test]
fn test_project_onto_axis() {
    let v = VectorN::from([3.0, 4.0, 0.0]);
    let axis = VectorN::from([0.0, 2.0, 0.0]);
    let p = v.project_onto(&axis).unwrap();
    assert!((p[0]).abs() < EPS && (p[1] - 4.0).abs() < EPS && (p[2]).abs() < EPS);

    // Remainder is orthogonal to the axis
    let r = v.subtract(&p).unwrap();
    assert!(r.dot(&axis).unwrap().abs() < EPS);
}

#[test]
fn test_normalize() {
    let u = VectorN::from([3.0, 0.0, 4.0]).normalize().unwrap();
    assert!((u[0] - 0.6).abs() < EPS);
    assert!((u[2] - 0.8).abs() < EPS);
    assert!((u.norm() - 1.0).abs() < EPS);
}

#[test]
fn test_normalize_zero_message() {
    let err = VectorN::zeros(3).normalize().unwrap_err();
    assert_eq!(err, GsError::Arithmetic("Cannot normalize zero vector".into()));
}

#[test]
fn test_approx_eq() {
    let a = VectorN::from([1.0, 2.0]);
    assert!(a.approx_eq(&VectorN::from([1.0 + 1e-13, 2.0]), EPS));
    assert!(!a.approx_eq(&VectorN::from([1.1, 2.0]), EPS));
    assert!(!a.approx_eq(&VectorN::from([1.0, 2.0, 0.0]), EPS));
}

#[test]
fn test_display() {
    assert_eq!(VectorN::from([1.0, 0.0]).to_string(), "(1.0000, 0.0000)");
    assert_eq!(VectorN::from([0.70710678, -0.70710678]).to_string(), "(0.7071, -0.7071)");
    assert_eq!(format!("{:.2}", VectorN::from([1.0 / 3.0])), "(0.33)");
}
