mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use mat4::Mat4;
pub use quat::Quat;
pub use vec2::{vec2, Vec2};
pub use vec3::{vec3, Vec3};
pub use vec4::{vec4, Vec4};

/// Unit type for an angle expressed in radians.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Rad(f32);

impl Rad {
    #[inline(always)]
    pub const fn new(x: f32) -> Self {
        Self(x)
    }

    #[inline(always)]
    pub const fn as_f32(self) -> f32 {
        self.0
    }
}

/// Unit type for an angle expressed in degrees.
#[derive(Clone, Copy, PartialEq, PartialOrd, Debug, Default)]
pub struct Deg(f32);

impl Deg {
    #[inline(always)]
    pub const fn new(x: f32) -> Self {
        Self(x)
    }

    #[inline(always)]
    pub const fn as_f32(self) -> f32 {
        self.0
    }
}

impl From<Rad> for Deg {
    #[inline(always)]
    fn from(x: Rad) -> Self {
        Self(x.0.to_degrees())
    }
}

impl From<Deg> for Rad {
    #[inline(always)]
    fn from(x: Deg) -> Self {
        Self(x.0.to_radians())
    }
}

#[macro_export]
macro_rules! impl_shared {
    ($name:ty, $t:ty, $n:expr) => {
        impl $name {
            #[doc = concat!("[`", stringify!($name), "`] with all elements initialized to `0.0`.")]
            pub const ZERO: $name = Self::splat(0.0);
            #[doc = concat!("[`", stringify!($name), "`] with all elements initialized to `1.0`.")]
            pub const ONE: $name = Self::splat(1.0);

            #[doc = concat!("Constructs a new [`", stringify!($name), "`] where each element is initialized with the given `value`.")]
            #[inline(always)]
            #[must_use]
            pub const fn splat(value: $t) -> $name {
                // we have to transmute here because we can't make `into()` const.
                // SAFETY: $name is repr(C) struct with $n elements of type $t, so the transmute is always valid.
                unsafe { std::mem::transmute([value; $n]) }
            }

            /// Returns the elements of `self` as a slice, in declaration order.
            #[inline(always)]
            #[must_use]
            pub fn as_slice(&self) -> &[$t] {
                bytemuck::cast_slice(std::slice::from_ref(self))
            }
        }

        impl From<[$t; $n]> for $name {
            #[inline(always)]
            fn from(x: [$t; $n]) -> $name {
                bytemuck::cast(x)
            }
        }

        impl From<$name> for [$t; $n] {
            #[inline(always)]
            fn from(x: $name) -> [$t; $n] {
                bytemuck::cast(x)
            }
        }
    };
}

#[macro_export]
macro_rules! impl_vector {
    ($name:ty, $t:ty, $n:expr) => {
        impl $name {
            /// Calculates the magnitude (euclidean length) of the vector `self`.
            #[inline(always)]
            #[must_use]
            pub fn magnitude(self) -> $t {
                self.magnitude_sq().sqrt()
            }

            /// Calculates the squared magnitude of the vector `self`.
            /// Avoids an expensive `sqrt` operation.
            #[inline(always)]
            #[must_use]
            pub fn magnitude_sq(self) -> $t {
                Self::dot(self, self)
            }

            /// Calculates the euclidean distance between `a` and `b`.
            #[inline(always)]
            #[must_use]
            pub fn distance(a: $name, b: $name) -> $t {
                (b - a).magnitude()
            }

            /// Returns a vector with the same direction as `self` but with unit (1.0) length.
            ///
            /// The zero vector has no direction, so it is returned unchanged rather than
            /// producing `NaN`. Only an exact `0.0` magnitude takes that path.
            #[inline(always)]
            #[must_use]
            pub fn normalize(self) -> $name {
                let magnitude = self.magnitude();
                if magnitude == 0.0 {
                    return Self::ZERO;
                }
                self / magnitude
            }
        }

        impl std::ops::Neg for $name {
            type Output = $name;
            #[inline(always)]
            fn neg(self) -> Self::Output {
                self.map(
                    #[inline(always)]
                    |x| -x,
                )
            }
        }

        impl std::ops::Add for $name {
            type Output = $name;
            #[inline(always)]
            fn add(self, rhs: $name) -> Self::Output {
                self.map2(
                    rhs,
                    #[inline(always)]
                    |a, b| a + b,
                )
            }
        }

        impl std::ops::Sub for $name {
            type Output = $name;
            #[inline(always)]
            fn sub(self, rhs: $name) -> Self::Output {
                self.map2(
                    rhs,
                    #[inline(always)]
                    |a, b| a - b,
                )
            }
        }

        impl std::ops::Mul<$t> for $name {
            type Output = $name;
            #[inline(always)]
            fn mul(self, rhs: $t) -> Self::Output {
                self.map(
                    #[inline(always)]
                    |x| x * rhs,
                )
            }
        }

        impl std::ops::Mul<$name> for $t {
            type Output = $name;
            #[inline(always)]
            fn mul(self, rhs: $name) -> Self::Output {
                rhs.map(
                    #[inline(always)]
                    |x| self * x,
                )
            }
        }

        impl std::ops::Div<$t> for $name {
            type Output = $name;
            #[inline(always)]
            fn div(self, rhs: $t) -> Self::Output {
                self.map(
                    #[inline(always)]
                    |x| x / rhs,
                )
            }
        }

        impl std::ops::AddAssign for $name {
            #[inline(always)]
            fn add_assign(&mut self, rhs: $name) {
                *self = *self + rhs;
            }
        }

        impl std::ops::SubAssign for $name {
            #[inline(always)]
            fn sub_assign(&mut self, rhs: $name) {
                *self = *self - rhs;
            }
        }

        impl std::ops::MulAssign<$t> for $name {
            #[inline(always)]
            fn mul_assign(&mut self, rhs: $t) {
                *self = *self * rhs;
            }
        }

        impl std::ops::DivAssign<$t> for $name {
            #[inline(always)]
            fn div_assign(&mut self, rhs: $t) {
                *self = *self / rhs;
            }
        }
    };
}
