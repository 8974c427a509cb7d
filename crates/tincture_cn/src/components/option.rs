//! Option rows inside a Select popup

use tincture_core::Color;
use tincture_theme::{Theme, ThemeColor};

use super::interaction_opacity;
use super::select::Select;
use crate::color::{contrast_text, resolve_color, ColorRef};
use crate::group::{inherit, FamilyDefaults, GroupContext};
use crate::size::{resolve_size, BaseSizeMap, Size, SizeInput};
use crate::variant::{Variant, VariantStyles};

/// Lightening of a selected `solid` row
pub const SOLID_SELECTED_LIGHTEN: f32 = 0.18;
/// Lightening of the selected highlight on non-solid rows
pub const SELECTED_LIGHTEN: f32 = 0.15;
/// Alpha of the selected highlight on non-solid rows
pub const SELECTED_ALPHA: f32 = 0.7;
/// Lightening of an unselected `soft` row
pub const SOFT_LIGHTEN: f32 = 0.08;
/// Lightening of text on non-solid rows
pub const TEXT_LIGHTEN: f32 = 0.8;

const PRESSED_OPACITY: f32 = 0.7;
const GAP: f32 = 8.0;
const BULLET_SIZE: f32 = 8.0;
const BULLET_IDLE_OPACITY: f32 = 0.2;

const DEFAULTS: FamilyDefaults = FamilyDefaults {
    color: ColorRef::Theme(ThemeColor::Neutral),
    variant: Variant::Outlined,
    size: SizeInput::Token(Size::Md),
};

/// Row background and text for one variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OptionColors {
    pub background: Color,
    pub text: Color,
}

/// Variant table for option rows
///
/// Selection changes only the background; text color is the same either way.
pub fn resolve_option_styles(
    theme: &Theme,
    color: &ColorRef,
    selected: bool,
) -> VariantStyles<OptionColors> {
    let resolved = resolve_color(color, theme);
    let highlight = resolved
        .lighten(SELECTED_LIGHTEN)
        .with_alpha(SELECTED_ALPHA);
    let text = resolved.lighten(TEXT_LIGHTEN);
    let pick = |on: Color, off: Color| if selected { on } else { off };

    VariantStyles {
        solid: OptionColors {
            background: pick(resolved.lighten(SOLID_SELECTED_LIGHTEN), resolved),
            text: contrast_text(resolved, theme),
        },
        outlined: OptionColors {
            background: pick(highlight, Color::TRANSPARENT),
            text,
        },
        plain: OptionColors {
            background: pick(highlight, Color::TRANSPARENT),
            text,
        },
        soft: OptionColors {
            background: pick(highlight, resolved.lighten(SOFT_LIGHTEN)),
            text,
        },
    }
}

/// An option row
#[derive(Clone, Debug, PartialEq)]
pub struct OptionItem {
    value: String,
    label: Option<String>,
    props: GroupContext,
    pressed: bool,
}

impl OptionItem {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: None,
            props: GroupContext::default(),
            pressed: false,
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.props = self.props.color(color);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.props = self.props.variant(variant);
        self
    }

    pub fn size(mut self, size: impl Into<SizeInput>) -> Self {
        self.props = self.props.size(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props = self.props.disabled(disabled);
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Text shown for the option; falls back to its value
    pub fn display_label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.value)
    }

    fn is_disabled(&self, select: Option<&Select>) -> bool {
        let parent = select.and_then(|s| s.context().disabled);
        inherit(self.props.disabled, parent, false)
    }

    /// Forward a press to the select; returns whether it was handled
    pub fn press(&self, select: &mut Select) -> bool {
        if self.is_disabled(Some(&*select)) {
            return false;
        }
        select.select(&self.value)
    }

    pub fn resolve(&self, theme: &Theme, select: Option<&Select>) -> OptionStyle {
        let parent = select.map(Select::context).unwrap_or_default();
        let color = inherit(self.props.color, parent.color, DEFAULTS.color);
        let variant = inherit(self.props.variant, parent.variant, DEFAULTS.variant);
        let size = resolve_size(
            theme,
            inherit(self.props.size, parent.size, DEFAULTS.size),
            &BaseSizeMap::OPTION,
        );
        let disabled = self.is_disabled(select);
        let selected = select.is_some_and(|s| s.is_selected(&self.value));
        let colors = *resolve_option_styles(theme, &color, selected).get(variant);

        OptionStyle {
            colors,
            label: self.display_label().to_string(),
            padding_horizontal: size * 0.25,
            padding_vertical: size * 0.15,
            font_size: size * 0.32,
            gap: GAP,
            opacity: interaction_opacity(disabled, self.pressed, PRESSED_OPACITY),
            bullet_size: BULLET_SIZE,
            bullet_opacity: if selected { 1.0 } else { BULLET_IDLE_OPACITY },
            selected,
            interactive: !disabled,
        }
    }
}

/// Resolved option row style
#[derive(Clone, Debug, PartialEq)]
pub struct OptionStyle {
    pub colors: OptionColors,
    pub label: String,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub font_size: f32,
    /// Space between bullet and label
    pub gap: f32,
    pub opacity: f32,
    pub bullet_size: f32,
    pub bullet_opacity: f32,
    pub selected: bool,
    pub interactive: bool,
}
