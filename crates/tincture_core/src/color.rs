//! Color types and utilities
//!
//! [`Color`] is the one concrete color representation used across Tincture:
//! straight (non-premultiplied) RGBA with every channel in `0.0..=1.0`,
//! alpha included. Everything that produces a color for a renderer produces
//! this type; string forms (`#rrggbb`, `#rrggbbaa`, `rgba(...)`) exist only at
//! the edges.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ColorError;
use crate::parse::parse_color;

/// Luminance below which a background counts as dark for text selection
pub const LUMINANCE_THRESHOLD: f32 = 0.5;

/// RGBA color with f32 components (0.0 to 1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::rgb(1.0, 0.0, 1.0);
    pub const GRAY: Color = Color::rgb(128.0 / 255.0, 128.0 / 255.0, 128.0 / 255.0);
    pub const ORANGE: Color = Color::rgb(1.0, 165.0 / 255.0, 0.0);
    pub const PURPLE: Color = Color::rgb(128.0 / 255.0, 0.0, 128.0 / 255.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create from u8 components (0-255)
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Create from hex value (0xRRGGBB or 0xRRGGBBAA)
    pub fn from_hex(hex: u32) -> Self {
        if hex > 0xFFFFFF {
            Self::from_rgba8(
                ((hex >> 24) & 0xFF) as u8,
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
            )
        } else {
            Self::from_rgba8(
                ((hex >> 16) & 0xFF) as u8,
                ((hex >> 8) & 0xFF) as u8,
                (hex & 0xFF) as u8,
                255,
            )
        }
    }

    /// Create from HSL (hue in degrees, saturation and lightness in 0..1)
    pub fn from_hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        let (r, g, b) = hsl_to_rgb(h, s.clamp(0.0, 1.0), l.clamp(0.0, 1.0));
        Self { r, g, b, a }
    }

    /// Parse a CSS color literal (`#rgb`, `#rrggbb`, `rgb()`, `rgba()`, named)
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        parse_color(input)
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self {
            a: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Convert to HSL: (hue degrees, saturation, lightness)
    pub fn to_hsl(&self) -> (f32, f32, f32) {
        rgb_to_hsl(self.r, self.g, self.b)
    }

    /// Raise HSL lightness by `amount` of the remaining distance to white
    ///
    /// `lighten(0.0)` is the identity, `lighten(1.0)` is white.
    pub fn lighten(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        let amount = amount.clamp(0.0, 1.0);
        Self::from_hsla(h, s, l + (1.0 - l) * amount, self.a)
    }

    /// Scale HSL lightness down by `amount`
    ///
    /// `darken(0.7)` keeps 30% of the original lightness.
    pub fn darken(self, amount: f32) -> Self {
        let (h, s, l) = self.to_hsl();
        let amount = amount.clamp(0.0, 1.0);
        Self::from_hsla(h, s, l * (1.0 - amount), self.a)
    }

    /// Linear interpolation between two colors (all four channels)
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    /// Composite `overlay` over `self` using the overlay's alpha
    pub fn overlay(self, overlay: Color) -> Self {
        let t = overlay.a;
        Self {
            r: self.r + (overlay.r - self.r) * t,
            g: self.g + (overlay.g - self.g) * t,
            b: self.b + (overlay.b - self.b) * t,
            a: self.a,
        }
    }

    /// WCAG relative luminance (0.0 = black, 1.0 = white), alpha ignored
    ///
    /// See <https://www.w3.org/TR/WCAG20/#relativeluminancedef>
    pub fn relative_luminance(&self) -> f32 {
        fn channel(c: f32) -> f32 {
            let c = c.clamp(0.0, 1.0);
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * channel(self.r) + 0.7152 * channel(self.g) + 0.0722 * channel(self.b)
    }

    /// WCAG contrast ratio between two colors (1.0 ..= 21.0)
    pub fn contrast_ratio(&self, other: &Color) -> f32 {
        let l1 = self.relative_luminance();
        let l2 = other.relative_luminance();
        let (lighter, darker) = if l1 >= l2 { (l1, l2) } else { (l2, l1) };
        (lighter + 0.05) / (darker + 0.05)
    }

    /// YIQ brightness test (same cut-off CSS color libraries use for `isDark`)
    pub fn is_dark(&self) -> bool {
        let [r, g, b, _] = self.to_rgba8();
        let yiq = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
        yiq < 128
    }

    /// Convert to u8 array [r, g, b, a]
    pub fn to_rgba8(&self) -> [u8; 4] {
        [
            channel_to_u8(self.r),
            channel_to_u8(self.g),
            channel_to_u8(self.b),
            channel_to_u8(self.a),
        ]
    }

    /// `#rrggbb` (alpha dropped)
    pub fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// `#rrggbbaa`
    pub fn to_hex8(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        format!("#{:02x}{:02x}{:02x}{:02x}", r, g, b, a)
    }

    /// `rgba(r,g,b,a)` with 0-255 channels and 0-1 alpha
    pub fn to_rgba_string(&self) -> String {
        let [r, g, b, _] = self.to_rgba8();
        format!("rgba({},{},{},{})", r, g, b, round_alpha(self.a))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a < 1.0 {
            f.write_str(&self.to_hex8())
        } else {
            f.write_str(&self.to_hex())
        }
    }
}

impl std::str::FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_color(&raw).map_err(serde::de::Error::custom)
    }
}

fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn round_alpha(a: f32) -> f32 {
    (a.clamp(0.0, 1.0) * 1000.0).round() / 1000.0
}

fn rgb_to_hsl(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if (max - min).abs() < f32::EPSILON {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    (h * 60.0, s, l)
}

fn hsl_to_rgb(h: f32, s: f32, l: f32) -> (f32, f32, f32) {
    if s <= 0.0 {
        return (l, l, l);
    }

    fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
        if t < 0.0 {
            t += 1.0;
        }
        if t > 1.0 {
            t -= 1.0;
        }
        if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 0.5 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        }
    }

    let h = h.rem_euclid(360.0) / 360.0;
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;

    (
        hue_to_rgb(p, q, h + 1.0 / 3.0),
        hue_to_rgb(p, q, h),
        hue_to_rgb(p, q, h - 1.0 / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.01
    }

    #[test]
    fn test_from_hex_rgb_and_rgba() {
        let c = Color::from_hex(0x3366FF);
        assert_eq!(c.to_rgba8(), [0x33, 0x66, 0xFF, 0xFF]);

        let c = Color::from_hex(0x3366FF80);
        assert_eq!(c.to_rgba8(), [0x33, 0x66, 0xFF, 0x80]);
    }

    #[test]
    fn test_luminance_extremes() {
        assert!(Color::BLACK.relative_luminance() < 0.001);
        assert!(Color::WHITE.relative_luminance() > 0.999);
    }

    #[test]
    fn test_luminance_of_blue_is_below_threshold() {
        let lum = Color::from_hex(0x3366FF).relative_luminance();
        assert!(lum < LUMINANCE_THRESHOLD, "lum = {lum}");
    }

    #[test]
    fn test_contrast_ratio_black_white() {
        let ratio = Color::BLACK.contrast_ratio(&Color::WHITE);
        assert!((ratio - 21.0).abs() < 0.1);
        assert!((Color::GRAY.contrast_ratio(&Color::GRAY) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_hsl_roundtrip_keeps_channels() {
        let c = Color::from_hex(0xD20F39);
        let (h, s, l) = c.to_hsl();
        let back = Color::from_hsla(h, s, l, 1.0);
        assert_eq!(back.to_rgba8(), c.to_rgba8());
    }

    #[test]
    fn test_lighten_and_darken_bounds() {
        let c = Color::from_hex(0x3366FF);
        assert_eq!(c.lighten(0.0).to_rgba8(), c.to_rgba8());
        assert_eq!(c.lighten(1.0).to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(c.darken(1.0).to_rgba8(), [0, 0, 0, 255]);

        let (_, _, l) = c.to_hsl();
        let (_, _, dl) = c.darken(0.7).to_hsl();
        assert!(approx(dl, l * 0.3));
    }

    #[test]
    fn test_darken_keeps_alpha() {
        let c = Color::from_hex(0x3366FF).with_alpha(0.4);
        assert!(approx(c.darken(0.5).a, 0.4));
        assert!(approx(c.lighten(0.5).a, 0.4));
    }

    #[test]
    fn test_is_dark() {
        assert!(Color::BLACK.is_dark());
        assert!(Color::from_hex(0x1E1E2E).is_dark());
        assert!(!Color::WHITE.is_dark());
        assert!(!Color::YELLOW.is_dark());
    }

    #[test]
    fn test_formatting() {
        let c = Color::from_hex(0x3366FF);
        assert_eq!(c.to_hex(), "#3366ff");
        assert_eq!(c.to_hex8(), "#3366ffff");
        assert_eq!(c.with_alpha(0.15).to_rgba_string(), "rgba(51,102,255,0.15)");
        assert_eq!(c.to_string(), "#3366ff");
        assert_eq!(Color::TRANSPARENT.to_string(), "#00000000");
    }

    #[test]
    fn test_overlay_blends_toward_overlay() {
        let base = Color::BLACK;
        let out = base.overlay(Color::WHITE.with_alpha(0.5));
        assert!(approx(out.r, 0.5));
        assert!(approx(out.a, 1.0));
    }

    #[test]
    fn test_serde_uses_css_strings() {
        let c = Color::from_hex(0x3366FF);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#3366ff\"");
        let back: Color = serde_json::from_str("\"rgb(51, 102, 255)\"").unwrap();
        assert_eq!(back.to_rgba8(), c.to_rgba8());
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
