use crate::{impl_shared, impl_vector};

#[derive(Clone, Copy, PartialEq, PartialOrd, Default, Debug, bytemuck::Pod, bytemuck::Zeroable)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

pub const fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2 { x, y }
}

impl_shared!(Vec2, f32, 2);
impl_vector!(Vec2, f32, 2);

impl Vec2 {
    pub const X: Vec2 = Vec2::new(1.0, 0.0);
    pub const Y: Vec2 = Vec2::new(0.0, 1.0);

    /// Constructs a new [`Vec2`] with the given `x` and `y` components.
    #[inline(always)]
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns a [`Vec2`] with the function `f` applied to each component in order.
    #[inline(always)]
    #[must_use]
    pub fn map<F>(self, mut f: F) -> Vec2
    where
        F: FnMut(f32) -> f32,
    {
        Vec2 {
            x: f(self.x),
            y: f(self.y),
        }
    }

    /// Returns a new [`Vec2`] with the function `f` applied to each pair of
    /// components from `self` and `rhs` in order.
    #[inline(always)]
    #[must_use]
    pub fn map2<F>(self, rhs: Vec2, mut f: F) -> Vec2
    where
        F: FnMut(f32, f32) -> f32,
    {
        Vec2 {
            x: f(self.x, rhs.x),
            y: f(self.y, rhs.y),
        }
    }

    /// Returns the dot product of `a` and `b`.
    #[inline(always)]
    #[must_use]
    pub fn dot(a: Self, b: Self) -> f32 {
        a.x * b.x + a.y * b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basics() {
        assert_eq!(Vec2::new(1.0, 2.0) + Vec2::new(3.0, 4.0), vec2(4.0, 6.0));
        assert_eq!(Vec2::new(3.0, 4.0) - Vec2::new(1.0, 2.0), Vec2::splat(2.0));
        assert_eq!(Vec2::new(1.0, -2.0) * 2.0, vec2(2.0, -4.0));
        assert_eq!(2.0 * Vec2::new(1.0, -2.0), vec2(2.0, -4.0));
        assert_eq!(-Vec2::X, vec2(-1.0, 0.0));

        assert_eq!(Vec2::new(3.0, 4.0).magnitude_sq(), 25.0);
        assert_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Vec2::distance(Vec2::ZERO, vec2(0.0, -2.0)), 2.0);
    }

    #[test]
    fn normalize() {
        assert_eq!(Vec2::new(0.0, 5.0).normalize(), Vec2::Y);
        assert_eq!(Vec2::new(3.0, 4.0).normalize(), vec2(0.6, 0.8));
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn assign_ops() {
        let mut v = Vec2::ONE;
        v += Vec2::X;
        assert_eq!(v, vec2(2.0, 1.0));
        v -= Vec2::Y;
        assert_eq!(v, vec2(2.0, 0.0));
        v *= 3.0;
        assert_eq!(v, vec2(6.0, 0.0));
        v /= 2.0;
        assert_eq!(v, vec2(3.0, 0.0));
    }

    #[test]
    fn arrays() {
        assert_eq!(<[f32; 2]>::from(vec2(1.0, 2.0)), [1.0, 2.0]);
        assert_eq!(Vec2::from([1.0, 2.0]), vec2(1.0, 2.0));
        assert_eq!(vec2(1.0, 2.0).as_slice(), &[1.0, 2.0]);
    }
}
