use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Numeric type a [`Point2`] can be built from.
///
/// Scan conversion always happens in `f64`; integer points round-trip through
/// [`Scalar::from_f64`] with round-to-nearest.
pub trait Scalar:
    Copy
    + Debug
    + Default
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    fn to_f64(self) -> f64;
    fn from_f64(v: f64) -> Self;

    /// `true` when the value is zero within the type's tolerance.
    fn equal_zero(self) -> bool;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }
            #[inline]
            fn from_f64(v: f64) -> Self {
                v.round() as $t
            }
            #[inline]
            fn equal_zero(self) -> bool {
                self == 0
            }
        }
    )*};
}

impl_scalar_int!(i32, i64);

impl Scalar for f32 {
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v as f32
    }
    #[inline]
    fn equal_zero(self) -> bool {
        self.abs() < 1e-5
    }
}

impl Scalar for f64 {
    #[inline]
    fn to_f64(self) -> f64 {
        self
    }
    #[inline]
    fn from_f64(v: f64) -> Self {
        v
    }
    #[inline]
    fn equal_zero(self) -> bool {
        self.abs() < 1e-13
    }
}

/// A point in pixel space. Row 0 is the topmost scanline.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

pub type Point2I = Point2<i32>;
pub type Point2F = Point2<f32>;
pub type Point2FD = Point2<f64>;

impl<T: Scalar> Point2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Widen to `f64`, the precision every rasterizer routine works in.
    #[inline]
    pub fn to_f64(self) -> Point2<f64> {
        Point2::new(self.x.to_f64(), self.y.to_f64())
    }

    /// Convert between scalar types (float → int rounds to nearest).
    #[inline]
    pub fn cast<U: Scalar>(self) -> Point2<U> {
        Point2::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }

    /// Both coordinates are finite; integers always are.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.to_f64().is_finite() && self.y.to_f64().is_finite()
    }
}

impl<T: Scalar> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: Scalar> Add for Point2<T> {
    type Output = Self;
    fn add(self, o: Self) -> Self {
        Self::new(self.x + o.x, self.y + o.y)
    }
}

impl<T: Scalar> Sub for Point2<T> {
    type Output = Self;
    fn sub(self, o: Self) -> Self {
        Self::new(self.x - o.x, self.y - o.y)
    }
}

/// Pixel index of the first pixel whose centre-line lies at or after `v`.
///
/// Every span and row endpoint goes through this: a span `[a, b)` covers
/// pixels `ceil_to_i32(a) ..= ceil_to_i32(b) - 1`, so two spans meeting at a
/// shared edge never overlap and never leave a gap.
#[inline]
pub fn ceil_to_i32(v: f64) -> i32 {
    v.ceil() as i32
}
