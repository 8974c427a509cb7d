//! Shadow and elevation tokens

use tincture_core::Color;

/// Highest elevation with a distinct overlay step; larger values clamp
pub const MAX_ELEVATION: u8 = 5;

/// White overlay alpha applied to solid surfaces, indexed by elevation
pub const ELEVATION_OVERLAY: [f32; MAX_ELEVATION as usize + 1] = [0.0, 0.05, 0.07, 0.08, 0.09, 0.11];

/// A box shadow definition
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, spread: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Drop shadow for an elevated surface
    ///
    /// `0 (2+e)px (8+2e)px rgba(0,0,0,0.1+0.05e)`
    pub fn elevation(elevation: u8) -> Self {
        let e = elevation as f32;
        Self::new(
            0.0,
            2.0 + e,
            8.0 + e * 2.0,
            0.0,
            Color::BLACK.with_alpha(0.1 + e * 0.05),
        )
    }

    /// CSS `box-shadow` value
    pub fn to_css(&self) -> String {
        let mut out = format!("{}px {}px {}px", self.offset_x, self.offset_y, self.blur);
        if self.spread != 0.0 {
            out.push_str(&format!(" {}px", self.spread));
        }
        out.push(' ');
        out.push_str(&self.color.to_rgba_string());
        out
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::none()
    }
}

/// Overlay alpha for an elevation, clamped to the table
pub fn elevation_overlay(elevation: u8) -> f32 {
    ELEVATION_OVERLAY[elevation.min(MAX_ELEVATION) as usize]
}

/// Lift a solid surface color by blending a white overlay over it
pub fn dynamic_elevation(surface: Color, elevation: u8) -> Color {
    surface.overlay(Color::WHITE.with_alpha(elevation_overlay(elevation)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elevation_shadow_formula() {
        let s = Shadow::elevation(2);
        assert_eq!(s.offset_y, 4.0);
        assert_eq!(s.blur, 12.0);
        assert!((s.color.a - 0.2).abs() < 1e-6);

        let flat = Shadow::elevation(0);
        assert_eq!(flat.offset_y, 2.0);
        assert_eq!(flat.blur, 8.0);
        assert!((flat.color.a - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_overlay_clamps() {
        assert_eq!(elevation_overlay(0), 0.0);
        assert_eq!(elevation_overlay(200), ELEVATION_OVERLAY[MAX_ELEVATION as usize]);
    }

    #[test]
    fn test_dynamic_elevation_lightens_monotonically() {
        let surface = Color::from_hex(0x1A1D23);
        assert_eq!(dynamic_elevation(surface, 0), surface);

        let lum: Vec<f32> = (0..=MAX_ELEVATION)
            .map(|e| dynamic_elevation(surface, e).relative_luminance())
            .collect();
        assert!(lum.windows(2).all(|w| w[0] <= w[1]), "{lum:?}");
    }
}
