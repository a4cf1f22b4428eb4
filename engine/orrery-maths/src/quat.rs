use crate::{Mat4, Rad, Vec3};

/// A quaternion `w + xi + yj + zk`.
///
/// Represents a rotation only while it has unit magnitude. Non-unit values are
/// valid as intermediate results, e.g. straight out of [`Quat::new`] or a long
/// chain of products, and must be passed through [`Quat::normalize`] before they
/// are used as a rotation.
#[derive(Clone, Copy, PartialEq, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Quat {
    pub w: f32,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    pub const ZERO: Self = Self {
        w: 0.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const IDENTITY: Self = Self {
        w: 1.0,
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new quaternion from its components.
    ///
    /// The components are stored as given, without normalization.
    #[inline(always)]
    #[must_use]
    pub const fn new(w: f32, x: f32, y: f32, z: f32) -> Self {
        Self { w, x, y, z }
    }

    /// Returns a quaternion representing a rotation of `angle` radians around the
    /// axis `(ax, ay, az)`.
    ///
    /// The axis must have unit length. It is not normalized here, and a non-unit
    /// axis produces a non-unit quaternion.
    #[must_use]
    pub fn from_axis_angle(angle: f32, ax: f32, ay: f32, az: f32) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self {
            w: c,
            x: ax * s,
            y: ay * s,
            z: az * s,
        }
    }

    /// Returns a quaternion representing a `rotation` around the given unit
    /// length `axis`.
    #[must_use]
    pub fn from_axis_rotation(axis: Vec3, rotation: impl Into<Rad>) -> Self {
        Self::from_axis_angle(rotation.into().as_f32(), axis.x, axis.y, axis.z)
    }

    /// Returns the Hamilton product `a * b`.
    ///
    /// Used as a rotation, the result applies `b` first and then `a`. The product of
    /// two unit quaternions drifts away from unit length as rounding error builds
    /// up, and is not renormalized.
    #[must_use]
    #[inline]
    pub fn compose(a: Self, b: Self) -> Self {
        Self {
            w: a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            x: a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            y: a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            z: a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        }
    }

    #[inline]
    #[must_use]
    pub fn dot(a: Self, b: Self) -> f32 {
        a.w * b.w + a.x * b.x + a.y * b.y + a.z * b.z
    }

    /// Returns the euclidean norm of the quaternion.
    #[inline]
    #[must_use]
    pub fn magnitude(self) -> f32 {
        self.magnitude_sq().sqrt()
    }

    /// Returns the squared euclidean norm of the quaternion.
    /// Avoids an expensive `sqrt` operation.
    #[inline]
    #[must_use]
    pub fn magnitude_sq(self) -> f32 {
        Self::dot(self, self)
    }

    /// Returns `self` scaled to unit magnitude.
    ///
    /// A quaternion with a magnitude of exactly `0.0` returns [`Quat::IDENTITY`]
    /// rather than `NaN`. The comparison has no tolerance, so very small but
    /// non-zero quaternions are still divided through.
    #[must_use]
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude == 0.0 {
            log::trace!("normalizing zero magnitude quaternion, falling back to identity");
            return Self::IDENTITY;
        }
        Self {
            w: self.w / magnitude,
            x: self.x / magnitude,
            y: self.y / magnitude,
            z: self.z / magnitude,
        }
    }

    /// Writes the 4x4 homogeneous rotation matrix for `self` into `matrix`, one
    /// row after another.
    ///
    /// `self` must have unit length. A non-unit quaternion is not normalized and
    /// yields a matrix that scales as well as rotates.
    pub fn write_rotation_matrix(&self, matrix: &mut [f32; 16]) {
        let Self { w, x, y, z } = *self;

        matrix[0] = 1.0 - 2.0 * y * y - 2.0 * z * z;
        matrix[1] = 2.0 * x * y - 2.0 * z * w;
        matrix[2] = 2.0 * x * z + 2.0 * y * w;
        matrix[3] = 0.0;

        matrix[4] = 2.0 * x * y + 2.0 * z * w;
        matrix[5] = 1.0 - 2.0 * x * x - 2.0 * z * z;
        matrix[6] = 2.0 * y * z - 2.0 * x * w;
        matrix[7] = 0.0;

        matrix[8] = 2.0 * x * z - 2.0 * y * w;
        matrix[9] = 2.0 * y * z + 2.0 * x * w;
        matrix[10] = 1.0 - 2.0 * x * x - 2.0 * y * y;
        matrix[11] = 0.0;

        matrix[12] = 0.0;
        matrix[13] = 0.0;
        matrix[14] = 0.0;
        matrix[15] = 1.0;
    }

    /// Returns the 4x4 homogeneous rotation matrix for `self`.
    ///
    /// See [`Quat::write_rotation_matrix`] for the unit length requirement.
    #[must_use]
    pub fn to_rotation_matrix(&self) -> Mat4 {
        let mut matrix = Mat4::ZERO;
        self.write_rotation_matrix(&mut matrix.0);
        matrix
    }

    /// Rotates `rhs` by `self`, which must have unit length.
    #[must_use]
    pub fn transform_vec3(self, rhs: Vec3) -> Vec3 {
        let w = self.w;
        let v = Vec3::new(self.x, self.y, self.z);
        rhs * (w * w - Vec3::dot(v, v))
            + v * Vec3::dot(rhs, v) * 2.0
            + Vec3::cross(v, rhs) * w * 2.0
    }
}

impl From<[f32; 4]> for Quat {
    /// Components are read in `w, x, y, z` order.
    #[inline(always)]
    fn from(x: [f32; 4]) -> Quat {
        bytemuck::cast(x)
    }
}

impl From<Quat> for [f32; 4] {
    #[inline(always)]
    fn from(x: Quat) -> [f32; 4] {
        bytemuck::cast(x)
    }
}

impl From<Quat> for Mat4 {
    #[inline(always)]
    fn from(q: Quat) -> Mat4 {
        q.to_rotation_matrix()
    }
}

impl std::ops::Mul for Quat {
    type Output = Quat;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        Quat::compose(self, rhs)
    }
}

impl std::ops::MulAssign for Quat {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl std::ops::Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.transform_vec3(rhs)
    }
}
