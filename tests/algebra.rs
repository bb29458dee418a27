//! End-to-end checks combining vectors, points, matrices and rays.

use approx::assert_abs_diff_eq;
use linray::*;

#[test]
fn large_vector_addition() {
    let a: Vector<f32, 10> = Vector::from_fn(|i| i as f32);
    let b: Vector<f32, 10> = Vector::from_fn(|i| i as f32 + 1.0);
    let expected: Vector<f32, 10> = Vector::from_fn(|i| 2.0 * i as f32 + 1.0);
    assert_eq!(a + b, expected);
}

#[test]
fn vector_algebra_properties() {
    let a = vec3(1.5f32, -2.0, 3.25);
    let b = vec3(0.5f32, 4.0, -1.25);

    assert_eq!((a + b) - b, a);
    assert_eq!((a * b) / b, a);
    assert_eq!(2.5 * a, a * 2.5);
}

#[test]
fn length_and_normalization() {
    let v = vec3(3.0f32, 4.0, 0.0);
    assert_eq!(v.length(), 5.0);
    assert_eq!(v.normalize(), vec3(0.6, 0.8, 0.0));
}

#[test]
fn point_distance() {
    let a = point3(1.0f32, 2.0, 3.0);
    let b = point3(1.0f32, 1.0, 3.0);
    assert_eq!(a.distance(b), 1.0);
    assert_eq!(a.distance(a), 0.0);
}

#[test]
fn matrix_product() {
    let a = Mat3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    let b = Mat3f::from_rows([[10.0, 11.0, 12.0], [13.0, 14.0, 15.0], [16.0, 17.0, 18.0]]);
    let expected = Mat3f::from_rows([
        [84.0, 90.0, 96.0],
        [201.0, 216.0, 231.0],
        [318.0, 342.0, 366.0],
    ]);
    assert_eq!(a * b, expected);
}

#[test]
fn matrix_vector_product() {
    let m = Mat3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
    assert_eq!(m * vec3(1.0, 2.0, 3.0), vec3(14.0, 32.0, 50.0));
}

#[test]
fn rotations() {
    let v = vec3(1.0f32, 0.0, 0.0);

    // A zero rotation about every axis leaves any vector unchanged.
    assert_eq!(v.rotate(0.0, 0.0, 0.0), v);
    assert_eq!(Mat3f::rotation(0.0, 0.0, 0.0), Mat3f::IDENTITY);

    // A quarter turn of roll takes x to y, half a turn of pitch negates x.
    assert_eq!(v.rotate(0.0, 0.0, to_radians(90.0)), vec3(0.0, 1.0, 0.0));
    assert_eq!(v.rotate(0.0, to_radians(180.0), 0.0), vec3(-1.0, 0.0, 0.0));
}

#[test]
fn point_along_ray() {
    let ray = Ray::new(point3(1.0f32, 2.0, 3.0), vec3(1.0, 1.0, 1.0));
    assert_abs_diff_eq!(ray.direction().length(), 1.0, epsilon = 1e-6);

    let p = ray.at(2.0);
    assert_eq!(p, point3(2.154_701, 3.154_701, 4.154_701));
}

#[test]
fn ray_sphere_round_trip() {
    // Shoot a ray at a sphere, bounce off it, and check the reflected
    // direction.
    let sphere = Sphere::new(point3(0.0f32, 0.0, 10.0), 5.0);
    let ray = Ray::new(Point3f::ORIGIN, Vec3f::Z);

    let t = sphere.intersection_dist(&ray);
    assert_eq!(t, 5.0);

    let hit = ray.at(t);
    assert_eq!(hit, point3(0.0, 0.0, 5.0));

    let normal = sphere.normal_at(hit);
    assert_eq!(normal, -Vec3f::Z);

    // A head-on hit reflects straight back.
    assert_eq!(ray.direction().reflect(normal), -Vec3f::Z);
}

#[test]
fn const_scalar_kernel() {
    const ROOT: f32 = scalar::f32::sqrt(25.0);
    const SINE: f64 = scalar::f64::sin(0.0);
    const POWER: f32 = scalar::f32::pow(2.0, 10.0);
    const FACT: f64 = scalar::f64::factorial(5.0);

    assert_abs_diff_eq!(ROOT, 5.0, epsilon = 1e-4);
    assert_eq!(SINE, 0.0);
    assert_eq!(POWER, 1024.0);
    assert_eq!(FACT, 120.0);
}
