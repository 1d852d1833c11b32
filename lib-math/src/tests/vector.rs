use crate::*;

#[test]
fn test_magnitude_unit_axes() {
    assert!(libm::fabsf(Vector::new(1.0, 0.0, 0.0).magnitude() - 1.0) < 1e-6);
    assert!(libm::fabsf(Vector::new(0.0, 1.0, 0.0).magnitude() - 1.0) < 1e-6);
    assert!(libm::fabsf(Vector::new(0.0, 0.0, 1.0).magnitude() - 1.0) < 1e-6);
}

#[test]
fn test_magnitude_pythagorean_triple() {
    let v = Vector { x: 3.0, y: 4.0, z: 0.0 };
    assert!(libm::fabsf(v.magnitude() - 5.0) < 1e-6);
}

#[test]
fn test_magnitude_zero_vector() {
    assert_eq!(Vector::zero().magnitude(), 0.0);
}

#[test]
fn test_magnitude_negative_components() {
    let v = Vector { x: -2.0, y: -3.0, z: -6.0 };
    assert!(libm::fabsf(v.magnitude() - 7.0) < 1e-6);
}

#[test]
fn test_scalar_division() {
    let v = Vector::new(256.0, -512.0, 128.0) / 256.0;
    let expected = Vector::new(1.0, -2.0, 0.5);
    assert!(v.approx_eq(&expected, 1e-6));
}

#[test]
fn test_approx_eq_respects_tolerance() {
    let a = Vector::new(1.0, 1.0, 1.0);
    let b = Vector::new(1.005, 0.995, 1.0);
    assert!(a.approx_eq(&b, 0.01));
    assert!(!a.approx_eq(&b, 0.001));
}
