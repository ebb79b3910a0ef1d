use nalgebra::{Rotation3, Unit, Vector3};
use std::f64::consts::PI;

/// Returns the unit vector along `v`, or `None` when `v` has (numerically) zero length.
pub fn try_normalize(v: &Vector3<f64>) -> Option<Unit<Vector3<f64>>> {
    Unit::try_new(*v, f64::EPSILON)
}

/// Minimal rotation taking the direction of `from` onto the direction of `to`.
///
/// Unlike [`Rotation3::rotation_between`], antiparallel inputs are handled too: the
/// result is then a half turn about an axis perpendicular to `from`.
pub fn rotation_to_align(from: &Vector3<f64>, to: &Vector3<f64>) -> Rotation3<f64> {
    Rotation3::rotation_between(from, to).unwrap_or_else(|| {
        let helper = if from.x.abs() < 0.9 {
            Vector3::x()
        } else {
            Vector3::y()
        };
        let axis = Unit::new_normalize(from.cross(&helper));
        Rotation3::from_axis_angle(&axis, PI)
    })
}

pub fn rotation_from_axis_angle(axis: &Vector3<f64>, angle_degrees: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Unit::new_normalize(*axis), angle_degrees.to_radians())
}
