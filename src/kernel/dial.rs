//! Angle math for the clock dial.
//!
//! The drag interpreter maps a pointer vector from the face center to a
//! 0..=59 unit: `atan2` gives the angle with 0° at 3 o'clock, +90° rotates
//! 12 o'clock to 0°, and each unit spans 6°.

use crate::kernel::action::FaceVector;

/// Convert a face-relative pointer vector into a minute/second unit.
pub fn unit_from_vector(vector: FaceVector) -> u32 {
    let deg = vector.dy.atan2(vector.dx).to_degrees() + 90.0;
    // rem_euclid keeps negative angles positive, but for a tiny negative
    // input the result can round to exactly 360.0, so wrap the unit too.
    let deg = deg.rem_euclid(360.0);
    ((deg / 6.0).floor() as u32) % 60
}

/// The dial angle of a unit, in degrees clockwise from 12 o'clock.
pub fn unit_angle_deg(unit: u32) -> f64 {
    f64::from(unit % 60) * 6.0
}

/// Angle of a pointer vector in degrees clockwise from 12 o'clock.
pub fn vector_angle_deg(vector: FaceVector) -> f64 {
    (vector.dy.atan2(vector.dx).to_degrees() + 90.0).rem_euclid(360.0)
}

/// Smallest absolute angular distance between two dial angles.
pub fn angle_distance_deg(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);
    d.min(360.0 - d)
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/dial.rs"]
mod tests;
