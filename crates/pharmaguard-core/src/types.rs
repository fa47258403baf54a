//! Spatial and common types

use crate::error::{HeroError, Result};
use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A 2D vector in surface units (CSS pixels on the host canvas)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing at `angle` radians from +X
    pub fn from_angle(angle: f64) -> Self {
        Self {
            x: angle.cos(),
            y: angle.sin(),
        }
    }

    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn distance(&self, other: &Self) -> f64 {
        (*other - *self).length()
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl Add for Vec2 {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Vec2 {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

/// Width and height of the drawable surface
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn diagonal(&self) -> f64 {
        (self.width * self.width + self.height * self.height).sqrt()
    }
}

/// A sampling window `[min, max)` used by configuration
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
}

impl ValueRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Map a unit sample `t` in [0, 1) onto the window
    pub fn at(&self, t: f64) -> f64 {
        self.min + t * (self.max - self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HeroError::InvalidColor(format!(
                "'{}' is not a #rrggbb color",
                hex
            )));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| HeroError::InvalidColor(format!("'{}': {}", hex, e)))?;
        Ok(Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(4.0, 6.0);

        assert_eq!(a + b, Vec2::new(5.0, 8.0));
        assert_eq!(b - a, Vec2::new(3.0, 4.0));
        assert_eq!(a * 2.0, Vec2::new(2.0, 4.0));
        assert!((a.distance(&b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_angle_is_unit() {
        for i in 0..16 {
            let v = Vec2::from_angle(i as f64 * 0.4);
            assert!((v.length() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_viewport_geometry() {
        let size = ViewportSize::new(800.0, 600.0);
        assert_eq!(size.center(), Vec2::new(400.0, 300.0));
        assert!((size.diagonal() - 1000.0).abs() < 1e-9);
        assert_eq!(ViewportSize::default().diagonal(), 0.0);
    }

    #[test]
    fn test_value_range() {
        let r = ValueRange::new(3000.0, 5000.0);
        assert_eq!(r.at(0.0), 3000.0);
        assert_eq!(r.at(0.5), 4000.0);
        assert!(r.contains(5000.0));
        assert!(!r.contains(2999.0));
    }

    #[test]
    fn test_rgb_from_hex() {
        let c = Rgb::from_hex("#00d4ff").unwrap();
        assert_eq!(c, Rgb::new(0x00, 0xd4, 0xff));
        assert_eq!(c.to_hex(), "#00d4ff");
        assert_eq!(Rgb::from_hex("00b8d4").unwrap(), Rgb::new(0x00, 0xb8, 0xd4));
    }

    #[test]
    fn test_rgb_rejects_garbage() {
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
        assert!(Rgb::from_hex("").is_err());
    }
}
