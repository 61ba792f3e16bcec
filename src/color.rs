//! RGBA colour with clamped arithmetic.
//!
//! The frame-buffer stores one `u32` per pixel in **0xAARRGGBB** order (what
//! `minifb` expects). Packing is always done with explicit shifts, never by
//! reinterpreting memory.

use std::ops::{Add, Mul, Sub};

/// 8-bit-per-channel colour. Every constructor and operation that can
/// produce an out-of-range channel clamps to `0..=255`; nothing wraps.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[inline]
fn clamp_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.round().clamp(0.0, 255.0) as u8
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    /// Opaque colour.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque colour from wide integers, clamped per channel.
    pub fn from_rgb_clamped(r: i32, g: i32, b: i32) -> Self {
        Self::new(
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
        )
    }

    /// Opaque colour from float channels in `0.0..=255.0`, rounded and clamped.
    pub fn from_rgb_f32(r: f32, g: f32, b: f32) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /*──────────────────────── packed accessors ──────────────────────*/

    /// 0xAARRGGBB – native frame-buffer format.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_argb(p: u32) -> Self {
        Self {
            a: (p >> 24) as u8,
            r: (p >> 16) as u8,
            g: (p >> 8) as u8,
            b: p as u8,
        }
    }

    /// 0xAABBGGRR – R,G,B,A byte order in little-endian memory.
    #[inline]
    pub const fn to_abgr(self) -> u32 {
        ((self.a as u32) << 24) | ((self.b as u32) << 16) | ((self.g as u32) << 8) | self.r as u32
    }

    #[inline]
    pub const fn from_abgr(p: u32) -> Self {
        Self {
            a: (p >> 24) as u8,
            b: (p >> 16) as u8,
            g: (p >> 8) as u8,
            r: p as u8,
        }
    }

    /*──────────────────────── clamped arithmetic ────────────────────*/

    /// Multiply RGB by `k`; alpha is kept.
    pub fn scale(self, k: f32) -> Self {
        Self {
            r: clamp_channel(self.r as f32 * k),
            g: clamp_channel(self.g as f32 * k),
            b: clamp_channel(self.b as f32 * k),
            a: self.a,
        }
    }

    /// Linear blend: `t = 0` → `self`, `t = 1` → `other`. `t` is clamped.
    pub fn blend(self, other: Color, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        ColorF::from(self).lerp(ColorF::from(other), t).to_color()
    }

    pub fn saturating_add(self, other: Color) -> Self {
        Self {
            r: self.r.saturating_add(other.r),
            g: self.g.saturating_add(other.g),
            b: self.b.saturating_add(other.b),
            a: self.a.saturating_add(other.a),
        }
    }
}

/// Unclamped float colour used while interpolating.
///
/// Increments may be negative, so intermediate values live here and only hit
/// `u8` through [`ColorF::to_color`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorF {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorF {
    pub const ZERO: ColorF = ColorF { r: 0.0, g: 0.0, b: 0.0, a: 0.0 };

    #[inline]
    pub fn lerp(self, other: ColorF, t: f32) -> ColorF {
        self + (other - self) * t
    }

    /// Clamp back into a displayable colour.
    #[inline]
    pub fn to_color(self) -> Color {
        Color::with_alpha(
            clamp_channel(self.r),
            clamp_channel(self.g),
            clamp_channel(self.b),
            clamp_channel(self.a),
        )
    }
}

impl From<Color> for ColorF {
    fn from(c: Color) -> Self {
        ColorF {
            r: c.r as f32,
            g: c.g as f32,
            b: c.b as f32,
            a: c.a as f32,
        }
    }
}

impl Add for ColorF {
    type Output = ColorF;
    #[inline]
    fn add(self, o: ColorF) -> ColorF {
        ColorF {
            r: self.r + o.r,
            g: self.g + o.g,
            b: self.b + o.b,
            a: self.a + o.a,
        }
    }
}

impl Sub for ColorF {
    type Output = ColorF;
    #[inline]
    fn sub(self, o: ColorF) -> ColorF {
        ColorF {
            r: self.r - o.r,
            g: self.g - o.g,
            b: self.b - o.b,
            a: self.a - o.a,
        }
    }
}

impl Mul<f32> for ColorF {
    type Output = ColorF;
    #[inline]
    fn mul(self, k: f32) -> ColorF {
        ColorF {
            r: self.r * k,
            g: self.g * k,
            b: self.b * k,
            a: self.a * k,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_and_packed_round_trip() {
        let c = Color::new(255, 0, 0);
        let c2 = Color::new(0, 255, 0);
        assert_eq!(c, c);
        assert_ne!(c, c2);
        assert_eq!(Color::from_argb(c.to_argb()), c);
        assert_eq!(Color::from_abgr(c2.to_abgr()), c2);
    }

    #[test]
    fn packing_uses_documented_byte_order() {
        let c = Color::with_alpha(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_argb(), 0x4411_2233);
        assert_eq!(c.to_abgr(), 0x4433_2211);
    }

    #[test]
    fn constructors_clamp_instead_of_wrapping() {
        assert_eq!(Color::from_rgb_clamped(300, -20, 128), Color::new(255, 0, 128));
        assert_eq!(Color::from_rgb_f32(255.7, -0.4, 12.4), Color::new(255, 0, 12));
        assert_eq!(Color::from_rgb_f32(f32::NAN, 1.0, 2.0), Color::new(0, 1, 2));
    }

    #[test]
    fn scale_clamps() {
        let c = Color::new(200, 100, 10);
        assert_eq!(c.scale(2.0), Color::new(255, 200, 20));
        assert_eq!(c.scale(-1.0), Color::with_alpha(0, 0, 0, 255));
        assert_eq!(c.scale(0.5), Color::new(100, 50, 5));
    }

    #[test]
    fn blend_endpoints_and_midpoint() {
        let a = Color::new(0, 0, 0);
        let b = Color::new(200, 100, 50);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
        assert_eq!(a.blend(b, 0.5), Color::new(100, 50, 25));
        assert_eq!(a.blend(b, 7.0), b, "t outside 0..1 must clamp");
    }

    #[test]
    fn saturating_add_never_wraps() {
        let c = Color::new(250, 10, 0).saturating_add(Color::with_alpha(10, 10, 10, 0));
        assert_eq!(c, Color::new(255, 20, 10));
    }

    #[test]
    fn colorf_to_color_clamps_each_channel() {
        let f = ColorF { r: -5.0, g: 300.0, b: 127.6, a: 255.0 };
        assert_eq!(f.to_color(), Color::new(0, 255, 128));
    }
}
