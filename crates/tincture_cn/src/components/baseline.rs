//! App-level baselines: the root background and default text styling

use tincture_core::{Color, Fill, GradientKind};
use tincture_theme::{Theme, TypographyLevel};

/// Interpolated stops inserted between each pair of gradient stops
pub const INTERMEDIATE_STOPS: usize = 3;

/// Root background, ready for a native gradient view
#[derive(Clone, Debug, PartialEq)]
pub enum BaselineBackground {
    Flat(Color),
    Gradient {
        colors: Vec<Color>,
        /// Stop offsets in 0..=1, one per color
        locations: Vec<f32>,
        /// Degrees
        angle: f32,
    },
    RadialGradient {
        colors: Vec<Color>,
        locations: Vec<f32>,
        /// Center in 0..=1 of the view bounds
        center: (f32, f32),
    },
}

/// Root background for a theme
///
/// Gradient backgrounds are densified with [`INTERMEDIATE_STOPS`] so native
/// renderers don't band.
pub fn resolve_native_baseline(theme: &Theme) -> BaselineBackground {
    match &theme.colors.background {
        Fill::Solid(color) => BaselineBackground::Flat(*color),
        Fill::Gradient(gradient) => {
            let dense = gradient.with_intermediate_stops(INTERMEDIATE_STOPS);
            match dense.kind {
                GradientKind::Linear { angle_deg } => BaselineBackground::Gradient {
                    colors: dense.colors(),
                    locations: dense.offsets(),
                    angle: angle_deg,
                },
                GradientKind::Radial { center_x, center_y } => {
                    BaselineBackground::RadialGradient {
                        colors: dense.colors(),
                        locations: dense.offsets(),
                        center: (center_x, center_y),
                    }
                }
            }
        }
    }
}

/// Status bar content style
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusBarStyle {
    /// Light glyphs, for dark themes
    LightContent,
    /// Dark glyphs, for light themes
    DarkContent,
}

/// Default text styling applied to every text and input
#[derive(Clone, Debug, PartialEq)]
pub struct TextBaseline {
    pub status_bar: StatusBarStyle,
    /// Status bar fill where the platform supports one
    pub status_bar_background: Color,
    pub font_family: String,
    pub color: Color,
    pub font_size: f32,
    /// Pixels
    pub line_height: f32,
    pub placeholder_color: Color,
    pub allow_font_scaling: bool,
}

pub fn resolve_text_baseline(theme: &Theme) -> TextBaseline {
    let body = theme.typography.level(TypographyLevel::BodyMd);

    TextBaseline {
        status_bar: if theme.is_dark() {
            StatusBarStyle::LightContent
        } else {
            StatusBarStyle::DarkContent
        },
        status_bar_background: theme.colors.background.representative_color(),
        font_family: theme.typography.font_family.clone(),
        color: theme.typography.colors.primary,
        font_size: body.font_size,
        line_height: body.line_height_px(),
        placeholder_color: theme.typography.colors.secondary,
        allow_font_scaling: true,
    }
}
