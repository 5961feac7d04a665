use cubix_geom::{Uv, Vec3};

fn approx_eq(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

#[test]
fn from_cell_uses_min_corner() {
    let v = Vec3::from_cell(4, 250, 15);
    assert_eq!(v, Vec3::new(4.0, 250.0, 15.0));
    assert_eq!(Vec3::from_cell(0, 0, 0), Vec3::ZERO);
}

#[test]
fn vec3_add_sub_mul() {
    let a = Vec3::new(1.0, 2.0, 3.0);
    let b = Vec3::new(-4.0, 5.0, -6.0);
    assert_eq!(a + b, Vec3::new(-3.0, 7.0, -3.0));
    assert_eq!((a + b) - a, b);
    let m = a * 2.0;
    assert!(approx_eq(m.x, 2.0, 1e-6) && approx_eq(m.y, 4.0, 1e-6) && approx_eq(m.z, 6.0, 1e-6));
}

#[test]
fn arrays_preserve_component_order() {
    assert_eq!(Vec3::new(1.0, 2.0, 3.0).to_array(), [1.0, 2.0, 3.0]);
    assert_eq!(Uv::new(0.25, 0.5).to_array(), [0.25, 0.5]);
}

#[test]
fn cross_follows_right_hand_rule() {
    let x = Vec3::new(1.0, 0.0, 0.0);
    let y = Vec3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(y), Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(x), Vec3::new(0.0, 0.0, -1.0));
    assert_eq!(x.dot(y), 0.0);
    assert_eq!(Vec3::new(1.0, 2.0, 3.0).dot(Vec3::new(4.0, 5.0, 6.0)), 32.0);
}
