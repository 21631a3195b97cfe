use super::*;

#[test]
fn cardinal_directions_map_to_quarter_units() {
    // +x right, +y down; 12 o'clock is straight up.
    assert_eq!(unit_from_vector(FaceVector::new(0.0, -1.0)), 0);
    assert_eq!(unit_from_vector(FaceVector::new(1.0, 0.0)), 15);
    assert_eq!(unit_from_vector(FaceVector::new(0.0, 1.0)), 30);
    assert_eq!(unit_from_vector(FaceVector::new(-1.0, 0.0)), 45);
}

#[test]
fn slightly_left_of_twelve_wraps_to_fifty_nine() {
    assert_eq!(unit_from_vector(FaceVector::new(-0.05, -1.0)), 59);
}

#[test]
fn units_change_on_six_degree_boundaries() {
    let vec_at = |deg: f64| {
        let rad = deg.to_radians();
        FaceVector::new(rad.sin(), -rad.cos())
    };
    assert_eq!(unit_from_vector(vec_at(89.9)), 14);
    assert_eq!(unit_from_vector(vec_at(90.1)), 15);
    assert_eq!(unit_from_vector(vec_at(359.9)), 59);
}

#[test]
fn magnitude_does_not_affect_the_unit() {
    assert_eq!(unit_from_vector(FaceVector::new(0.1, 0.0)), 15);
    assert_eq!(unit_from_vector(FaceVector::new(10.0, 0.0)), 15);
}

#[test]
fn unit_angle_wraps_at_sixty() {
    assert_eq!(unit_angle_deg(0), 0.0);
    assert_eq!(unit_angle_deg(15), 90.0);
    assert_eq!(unit_angle_deg(60), 0.0);
}

#[test]
fn angle_distance_wraps_around_the_dial() {
    assert!((angle_distance_deg(359.0, 1.0) - 2.0).abs() < 1e-9);
    assert!((angle_distance_deg(0.0, 180.0) - 180.0).abs() < 1e-9);
    assert!((angle_distance_deg(90.0, 90.0)).abs() < 1e-9);
}
