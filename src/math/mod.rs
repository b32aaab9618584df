//! # Vector and Transform Algebra
//!
//! Thin layer over [`cgmath`] providing the rigid-transform type used
//! throughout the crate, plus the axis-alignment helper shared by every
//! endpoint-based shape constructor.
//!
//! Vectors are plain [`cgmath::Vector3<f64>`] values; the usual operators,
//! `cross`, `magnitude` and `magnitude2` come from cgmath's `InnerSpace`
//! and `ElementWise` traits.

use cgmath::{InnerSpace, Matrix3, Matrix4, Rad, SquareMatrix, Vector3, Zero};
use std::f64::consts::PI;
use std::ops::Mul;

/// Homogeneous 4x4 rigid transform: a rotation block plus a translation
/// column.
///
/// Composition `a * b` applies `b` first, so `(a * b).transform_point(v)`
/// equals `a.transform_point(b.transform_point(v))`. Transforms are plain
/// `Copy` values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform(pub Matrix4<f64>);

impl Transform {
    /// The identity transform.
    pub fn identity() -> Self {
        Transform(Matrix4::identity())
    }

    /// Builds a transform from intrinsic roll-pitch-yaw angles and a
    /// translation.
    ///
    /// The rotation block is `Rz(yaw) * Ry(pitch) * Rx(roll)` with
    /// `rpy = (roll, pitch, yaw)`.
    pub fn from_euler(rpy: Vector3<f64>, translation: Vector3<f64>) -> Self {
        let rotation = Matrix3::from_angle_z(Rad(rpy.z))
            * Matrix3::from_angle_y(Rad(rpy.y))
            * Matrix3::from_angle_x(Rad(rpy.x));
        Self::from_parts(rotation, translation)
    }

    /// Builds a transform from an axis-angle rotation and a translation.
    ///
    /// The axis does not need to be normalized. A zero angle or a
    /// degenerate axis yields the identity rotation block exactly, so no
    /// normalization division by zero can occur.
    pub fn from_axis_angle(axis: Vector3<f64>, angle: f64, translation: Vector3<f64>) -> Self {
        let rotation = if angle == 0.0 || axis.magnitude2() == 0.0 {
            Matrix3::identity()
        } else {
            Matrix3::from_axis_angle(axis.normalize(), Rad(angle))
        };
        Self::from_parts(rotation, translation)
    }

    /// Pure rotation from intrinsic roll-pitch-yaw angles.
    pub fn rotation(rpy: Vector3<f64>) -> Self {
        Self::from_euler(rpy, Vector3::zero())
    }

    /// Pure translation.
    pub fn translation(translation: Vector3<f64>) -> Self {
        Self::from_parts(Matrix3::identity(), translation)
    }

    fn from_parts(rotation: Matrix3<f64>, translation: Vector3<f64>) -> Self {
        let mut matrix = Matrix4::from(rotation);
        matrix.w = translation.extend(1.0);
        Transform(matrix)
    }

    /// The 3x3 rotation block.
    pub fn rotation_block(&self) -> Matrix3<f64> {
        Matrix3::from_cols(
            self.0.x.truncate(),
            self.0.y.truncate(),
            self.0.z.truncate(),
        )
    }

    /// The translation column.
    pub fn translation_part(&self) -> Vector3<f64> {
        self.0.w.truncate()
    }

    /// Applies rotation and translation to a point.
    pub fn transform_point(&self, point: Vector3<f64>) -> Vector3<f64> {
        (self.0 * point.extend(1.0)).truncate()
    }

    /// Applies only the rotation block, for directions such as normals.
    pub fn transform_direction(&self, direction: Vector3<f64>) -> Vector3<f64> {
        self.rotation_block() * direction
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Transform {
    type Output = Transform;

    fn mul(self, rhs: Transform) -> Transform {
        Transform(self.0 * rhs.0)
    }
}

/// Computes the transform that aligns a Z-axis-centered shape of length
/// `|end - start|` so it runs from `start` to `end`.
///
/// Returns the length together with
/// `from_axis_angle(Z × dir, acos(dir.z), start) * translation(0, 0, len/2)`.
/// When the direction is parallel to Z the rotation axis vanishes and the
/// rotation degenerates to the identity (or a half turn about X when
/// pointing down).
///
/// `start` and `end` must not coincide; the direction is undefined for a
/// zero-length span.
pub fn align(start: Vector3<f64>, end: Vector3<f64>) -> (f64, Transform) {
    let span = end - start;
    let len = span.magnitude();
    let dir = span / len;

    let angle = dir.z.clamp(-1.0, 1.0).acos();
    // Z × dir; vanishes when dir is (anti)parallel to the canonical axis.
    let axis = Vector3::new(-dir.y, dir.x, 0.0);

    let rotation = if axis.magnitude2() <= f64::EPSILON {
        if dir.z >= 0.0 {
            Transform::translation(start)
        } else {
            Transform::from_axis_angle(Vector3::unit_x(), PI, start)
        }
    } else {
        Transform::from_axis_angle(axis, angle, start)
    };

    (len, rotation * Transform::translation(Vector3::new(0.0, 0.0, len / 2.0)))
}
