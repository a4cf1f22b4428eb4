use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, PI};

use approx::abs_diff_eq;
use orrery_maths::{Deg, Mat4, Quat, Vec3, Vec4};

const EPSILON: f32 = 1e-5;

fn assert_mat4_eq(ours: Mat4, reference: Mat4) {
    for (i, (a, b)) in ours.0.iter().zip(reference.0.iter()).enumerate() {
        assert!(
            abs_diff_eq!(*a, *b, epsilon = EPSILON),
            "element {i}: ours ({a}) != reference ({b})\nours: {ours:#?}\nreference: {reference:#?}"
        );
    }
}

fn assert_vec3_eq(ours: Vec3, reference: Vec3) {
    assert!(
        abs_diff_eq!(ours.x, reference.x, epsilon = EPSILON)
            && abs_diff_eq!(ours.y, reference.y, epsilon = EPSILON)
            && abs_diff_eq!(ours.z, reference.z, epsilon = EPSILON),
        "ours ({ours:?}) != reference ({reference:?})"
    );
}

/// A spread of unit quaternions built from a handful of axes and angles.
fn rotations() -> Vec<Quat> {
    let axes = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, 1.0, 0.0).normalize(),
        Vec3::new(-1.0, 2.0, 3.0).normalize(),
        Vec3::new(0.3, -0.8, 0.1).normalize(),
    ];
    let angles = [0.0, 0.1, FRAC_PI_4, FRAC_PI_3, FRAC_PI_2, 2.0, PI, -1.3, 5.0];

    let mut rotations = Vec::new();
    for axis in axes {
        for angle in angles {
            rotations.push(Quat::from_axis_angle(angle, axis.x, axis.y, axis.z));
        }
    }
    rotations
}

/// Rotation matrices about the principal axes, written out directly.
fn principal_rotation(axis: usize, angle: f32) -> Mat4 {
    let (s, c) = angle.sin_cos();
    match axis {
        0 => Mat4::from_rows_array([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
        1 => Mat4::from_rows_array([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
        2 => Mat4::from_rows_array([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
        _ => unreachable!(),
    }
}

#[test]
fn identity_matrix_is_exact() {
    assert_eq!(Quat::IDENTITY.to_rotation_matrix(), Mat4::IDENTITY);
    assert_eq!(
        Quat::from_axis_angle(0.0, 1.0, 0.0, 0.0).to_rotation_matrix(),
        Mat4::IDENTITY
    );
}

#[test]
fn half_turn_about_z() {
    let q = Quat::from_axis_angle(PI, 0.0, 0.0, 1.0);
    assert_mat4_eq(
        q.to_rotation_matrix(),
        Mat4::from_rows_array([
            [-1.0, 0.0, 0.0, 0.0],
            [0.0, -1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]),
    );
}

#[test]
fn matches_principal_rotations() {
    let axes = [Vec3::X, Vec3::Y, Vec3::Z];
    for (i, axis) in axes.into_iter().enumerate() {
        for angle in [0.0, 0.25, FRAC_PI_2, 2.5, PI, -FRAC_PI_3] {
            let q = Quat::from_axis_angle(angle, axis.x, axis.y, axis.z);
            assert_mat4_eq(q.to_rotation_matrix(), principal_rotation(i, angle));
        }
    }
}

#[test]
fn degrees_match_radians() {
    let q = Quat::from_axis_rotation(Vec3::Y, Deg::new(60.0));
    assert_mat4_eq(q.to_rotation_matrix(), principal_rotation(1, FRAC_PI_3));
}

#[test]
fn compose_matches_matrix_product() {
    let rotations = rotations();
    for &a in &rotations {
        for &b in &rotations {
            let ours = (a * b).to_rotation_matrix();
            let reference = a.to_rotation_matrix() * b.to_rotation_matrix();
            assert_mat4_eq(ours, reference);
        }
    }
}

#[test]
fn compose_applies_right_hand_side_first() {
    let x = Quat::from_axis_angle(FRAC_PI_2, 1.0, 0.0, 0.0);
    let z = Quat::from_axis_angle(FRAC_PI_2, 0.0, 0.0, 1.0);

    // Z first: X -> Y, then X: Y -> Z.
    assert_vec3_eq((x * z) * Vec3::X, Vec3::Z);
    // X first: X -> X, then Z: X -> Y.
    assert_vec3_eq((z * x) * Vec3::X, Vec3::Y);
}

#[test]
fn compose_with_identity() {
    for q in rotations() {
        assert_eq!(Quat::IDENTITY * q, q);
        assert_eq!(q * Quat::IDENTITY, q);
    }
}

#[test]
fn compose_is_not_commutative() {
    let x = Quat::from_axis_angle(FRAC_PI_2, 1.0, 0.0, 0.0);
    let y = Quat::from_axis_angle(FRAC_PI_2, 0.0, 1.0, 0.0);
    assert_ne!(x * y, y * x);

    let xy = (x * y).to_rotation_matrix();
    let yx = (y * x).to_rotation_matrix();
    assert!(
        xy.0.iter()
            .zip(yx.0.iter())
            .any(|(a, b)| (a - b).abs() > 0.5)
    );
}

#[test]
fn transform_matches_matrix() {
    let points = [
        Vec3::X,
        Vec3::Y,
        Vec3::Z,
        Vec3::new(1.0, -2.0, 0.5),
        Vec3::new(-3.0, 0.25, 4.0),
    ];
    for q in rotations() {
        let m = q.to_rotation_matrix();
        for p in points {
            assert_vec3_eq(q * p, m * p);
            let v = m * Vec4::new(p.x, p.y, p.z, 0.0);
            assert_vec3_eq(q * p, Vec3::new(v.x, v.y, v.z));
        }
    }
}

#[test]
fn rotation_preserves_length() {
    let p = Vec3::new(-3.0, 0.25, 4.0);
    for q in rotations() {
        assert!(abs_diff_eq!(
            (q * p).magnitude(),
            p.magnitude(),
            epsilon = EPSILON
        ));
    }
}

#[test]
fn normalize_restores_unit_length() {
    for q in rotations() {
        let scaled = Quat::new(q.w * 3.5, q.x * 3.5, q.y * 3.5, q.z * 3.5);
        let normalized = scaled.normalize();
        assert!(abs_diff_eq!(normalized.magnitude(), 1.0, epsilon = EPSILON));
        assert_mat4_eq(normalized.to_rotation_matrix(), q.to_rotation_matrix());
    }

    let mut drift = Quat::IDENTITY;
    let step = Quat::from_axis_angle(0.1, 0.0, 0.6, 0.8);
    for _ in 0..1000 {
        drift = drift * step;
    }
    assert!(abs_diff_eq!(drift.normalize().magnitude(), 1.0, epsilon = EPSILON));
}

#[test]
fn normalize_zero_is_exact_identity() {
    assert_eq!(Quat::new(0.0, 0.0, 0.0, 0.0).normalize(), Quat::new(1.0, 0.0, 0.0, 0.0));
}

#[test]
fn non_unit_quaternion_scales() {
    let q = Quat::new(2.0, 0.0, 0.0, 0.0);
    let m = q.to_rotation_matrix();
    assert_eq!(m, Mat4::IDENTITY);

    // A non-unit quaternion with an imaginary part no longer gives a pure rotation.
    let q = Quat::from_axis_angle(FRAC_PI_2, 0.0, 0.0, 2.0);
    let v = q.to_rotation_matrix() * Vec3::X;
    assert!(v.magnitude() > 1.5);
}

#[test]
fn matrix_is_flat_sixteen_floats() {
    let q = Quat::from_axis_angle(1.0, 0.0, 1.0, 0.0);
    let m = q.to_rotation_matrix();
    let flat: [f32; 16] = m.into();
    assert_eq!(bytemuck::cast_slice::<f32, u8>(&flat).len(), 64);
    assert_eq!(&flat[12..], &[0.0, 0.0, 0.0, 1.0]);
    assert_eq!(flat[3], 0.0);
    assert_eq!(flat[7], 0.0);
    assert_eq!(flat[11], 0.0);
}
