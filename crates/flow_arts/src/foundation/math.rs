//! Math utilities and types
//!
//! Thin aliases over nalgebra plus the handful of helpers entity scripts
//! need: the engine's axis conventions, Euler-degree rotations and a
//! look-rotation for orienting emitters.

pub use nalgebra::{Quaternion, Unit, Vector3};

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// Quaternion type for rotations
pub type Quat = Unit<Quaternion<f32>>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// World axis conventions (Y-up, right-handed, -Z is front)
pub mod axes {
    use super::Vec3;

    /// Direction an unrotated entity faces
    pub fn front() -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0)
    }

    /// World up
    pub fn up() -> Vec3 {
        Vec3::new(0.0, 1.0, 0.0)
    }

    /// World right
    pub fn right() -> Vec3 {
        Vec3::new(1.0, 0.0, 0.0)
    }
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Below this horizontal length a direction is treated as vertical.
const VERTICAL_EPSILON: f32 = 1e-5;

/// Front vector of an orientation
pub fn front_of(rotation: &Quat) -> Vec3 {
    rotation * axes::front()
}

/// Build a rotation from pitch (X), yaw (Y) and roll (Z) in degrees.
///
/// Applied roll-yaw-pitch from the left, i.e. `Rz * Ry * Rx`, so pitch acts
/// first on a vector.
pub fn from_pitch_yaw_roll_degrees(pitch: f32, yaw: f32, roll: f32) -> Quat {
    let pitch = Quat::from_axis_angle(&Vec3::x_axis(), utils::deg_to_rad(pitch));
    let yaw = Quat::from_axis_angle(&Vec3::y_axis(), utils::deg_to_rad(yaw));
    let roll = Quat::from_axis_angle(&Vec3::z_axis(), utils::deg_to_rad(roll));
    roll * yaw * pitch
}

/// Orientation whose front axis points along `direction`.
///
/// Built as yaw about world up followed by pitch about the yawed right axis,
/// so the result never rolls. For a vertical direction the yaw is pinned to
/// zero. A zero-length direction yields the identity.
pub fn orientation_of(direction: Vec3) -> Quat {
    let Some(direction) = direction.try_normalize(f32::EPSILON) else {
        return Quat::identity();
    };

    let horizontal = direction.x.hypot(direction.z);
    let yaw = if horizontal < VERTICAL_EPSILON {
        0.0
    } else {
        (-direction.x).atan2(-direction.z)
    };
    let pitch = direction.y.clamp(-1.0, 1.0).asin();

    Quat::from_axis_angle(&Vec3::y_axis(), yaw) * Quat::from_axis_angle(&Vec3::x_axis(), pitch)
}
