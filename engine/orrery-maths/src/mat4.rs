use crate::{Vec3, Vec4};

/// 4x4 matrix of `f32`, stored row by row.
///
/// Acts on column vectors, so in `a * b` the transform `b` is applied first.
#[derive(Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4(pub [f32; 16]);

impl std::fmt::Debug for Mat4 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Mat4 [")?;
        if f.alternate() {
            writeln!(f)?;
            for row in self.as_rows_array() {
                f.write_str("\t")?;
                for value in row {
                    f.write_fmt(format_args!("{value}, "))?;
                }
                f.write_str("\n")?;
            }
        } else {
            for value in &self.0[..15] {
                f.write_fmt(format_args!("{value}, "))?;
            }
            f.write_fmt(format_args!("{}", self.0[15]))?;
        }
        f.write_str("]")
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mat4 {
    pub const ZERO: Mat4 = Mat4::from_rows_array([
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
        [0.0, 0.0, 0.0, 0.0],
    ]);

    pub const IDENTITY: Mat4 = Mat4::from_rows_array([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    #[inline(always)]
    pub fn as_rows_array(&self) -> &[[f32; 4]; 4] {
        bytemuck::cast_ref(&self.0)
    }

    #[inline(always)]
    pub fn as_rows_array_mut(&mut self) -> &mut [[f32; 4]; 4] {
        bytemuck::cast_mut(&mut self.0)
    }

    #[inline(always)]
    pub const fn from_rows_array(rows: [[f32; 4]; 4]) -> Self {
        // SAFETY: `[[f32; 4]; 4]` and `[f32; 16]` have identical size and layout.
        unsafe { std::mem::transmute(rows) }
    }

    /// Returns the 16 elements in storage order.
    #[inline(always)]
    pub const fn as_array(&self) -> &[f32; 16] {
        &self.0
    }

    #[must_use]
    pub fn from_scale(scale: Vec3) -> Mat4 {
        Mat4::from_rows_array([
            [scale.x, 0.0, 0.0, 0.0],
            [0.0, scale.y, 0.0, 0.0],
            [0.0, 0.0, scale.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    #[must_use]
    #[inline]
    pub fn transpose(self) -> Mat4 {
        let m = &self.0;
        Mat4::from_rows_array([
            [m[0x0], m[0x4], m[0x8], m[0xc]],
            [m[0x1], m[0x5], m[0x9], m[0xd]],
            [m[0x2], m[0x6], m[0xa], m[0xe]],
            [m[0x3], m[0x7], m[0xb], m[0xf]],
        ])
    }

    /// Transforms the point `vec`, treating it as having an implicit `w` of `1.0`.
    #[must_use]
    #[inline]
    pub fn mul_vec3(&self, vec: Vec3) -> Vec3 {
        let vec = Vec4::new(vec.x, vec.y, vec.z, 1.0);
        let vec = self.mul_vec4(vec);
        Vec3::new(vec.x, vec.y, vec.z)
    }

    #[must_use]
    #[inline]
    pub fn mul_vec4(&self, vec: Vec4) -> Vec4 {
        let rows = self.as_rows_array();
        Vec4::new(
            Vec4::dot(Vec4::from(rows[0]), vec),
            Vec4::dot(Vec4::from(rows[1]), vec),
            Vec4::dot(Vec4::from(rows[2]), vec),
            Vec4::dot(Vec4::from(rows[3]), vec),
        )
    }

    #[must_use]
    #[inline]
    pub fn mul_mat4(&self, rhs: &Mat4) -> Mat4 {
        let mut result = Mat4::ZERO;
        {
            let result = result.as_rows_array_mut();
            let lhs = self.as_rows_array();
            let rhs = rhs.as_rows_array();
            for i in 0..4 {
                for j in 0..4 {
                    result[i][j] = lhs[i][0] * rhs[0][j]
                        + lhs[i][1] * rhs[1][j]
                        + lhs[i][2] * rhs[2][j]
                        + lhs[i][3] * rhs[3][j];
                }
            }
        }
        result
    }
}

impl From<Mat4> for [f32; 16] {
    #[inline(always)]
    fn from(x: Mat4) -> [f32; 16] {
        x.0
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    #[inline(always)]
    fn mul(self, rhs: Self) -> Self::Output {
        self.mul_mat4(&rhs)
    }
}

impl std::ops::MulAssign for Mat4 {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl std::ops::Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline(always)]
    fn mul(self, rhs: Vec4) -> Self::Output {
        self.mul_vec4(rhs)
    }
}

impl std::ops::Mul<Vec3> for Mat4 {
    type Output = Vec3;

    #[inline(always)]
    fn mul(self, rhs: Vec3) -> Self::Output {
        self.mul_vec3(rhs)
    }
}
