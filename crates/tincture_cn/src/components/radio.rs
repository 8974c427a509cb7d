//! Radio and RadioGroup styles
//!
//! Radios share the checkbox variant table; the control is a circle and the
//! checked glyph is a filled dot.

use tincture_theme::{Theme, ThemeColor};

use super::checkbox::{resolve_checkbox_styles, LabelStyle, ICON_SCALE, PRESSED_OPACITY};
use super::interaction_opacity;
use crate::color::ColorRef;
use crate::group::{
    effective_props, resolve_group_layout, FamilyDefaults, GroupContext, GroupLayout,
    Orientation, RadioGroupValue,
};
use crate::size::{resolve_size, BaseSizeMap, Size, SizeInput};
use crate::variant::{ResolvedStyle, Variant};

/// Corner radius large enough to round any built-in size into a circle
const BORDER_RADIUS: f32 = 50.0;
/// Dot diameter as a fraction of the icon area
const DOT_SCALE: f32 = 0.6;

const DEFAULTS: FamilyDefaults = FamilyDefaults {
    color: ColorRef::Theme(ThemeColor::Primary),
    variant: Variant::Solid,
    size: SizeInput::Token(Size::Md),
};

/// Group container for radios; at most one value is selected
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RadioGroup {
    context: GroupContext,
    orientation: Orientation,
    spacing: Option<SizeInput>,
    value: RadioGroupValue,
}

impl RadioGroup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.context = self.context.color(color);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.context = self.context.variant(variant);
        self
    }

    pub fn size(mut self, size: impl Into<SizeInput>) -> Self {
        self.context = self.context.size(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.context = self.context.disabled(disabled);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn spacing(mut self, spacing: impl Into<SizeInput>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = RadioGroupValue::new(Some(value.into()));
        self
    }

    pub fn context(&self) -> &GroupContext {
        &self.context
    }

    pub fn selected(&self) -> Option<&str> {
        self.value.selected()
    }

    /// Select `value`; returns false if it was already selected
    pub fn select(&mut self, value: &str) -> bool {
        self.value.select(value)
    }

    pub fn layout(&self, theme: &Theme) -> GroupLayout {
        resolve_group_layout(
            theme,
            self.orientation,
            self.spacing.unwrap_or(SizeInput::Px(0.0)),
            self.context.disabled.unwrap_or(false),
        )
    }
}

/// Radio props
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Radio {
    props: GroupContext,
    checked: bool,
    value: Option<String>,
    label: Option<String>,
    rtl: bool,
    pressed: bool,
}

impl Radio {
    pub fn new() -> Self {
        Self::default()
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

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    pub fn is_checked(&self, group: Option<&RadioGroup>) -> bool {
        match (group, self.value.as_deref()) {
            (Some(group), Some(value)) => group.selected() == Some(value),
            _ => self.checked,
        }
    }

    /// Handle a press and return whether the radio is now checked
    ///
    /// Pressing never unchecks a radio. Returns `None` when disabled.
    pub fn press(&mut self, group: Option<&mut RadioGroup>) -> Option<bool> {
        let group_disabled = group
            .as_ref()
            .and_then(|g| g.context.disabled)
            .unwrap_or(false);
        if group_disabled || self.props.disabled.unwrap_or(false) {
            return None;
        }

        match (group, self.value.as_deref()) {
            (Some(group), Some(value)) => {
                group.select(value);
            }
            _ => self.checked = true,
        }
        Some(true)
    }

    pub fn resolve(&self, theme: &Theme, group: Option<&RadioGroup>) -> RadioStyle {
        let eff = effective_props(&self.props, group.map(RadioGroup::context), DEFAULTS);
        let checked = self.is_checked(group);
        let colors = *resolve_checkbox_styles(theme, &eff.color, checked).get(eff.variant);
        let control_size = resolve_size(theme, eff.size, &BaseSizeMap::RADIO);
        let icon_size = control_size * ICON_SCALE;

        RadioStyle {
            colors,
            control_size,
            border_radius: BORDER_RADIUS,
            dot_size: checked.then_some(icon_size * DOT_SCALE),
            icon_size,
            checked,
            opacity: interaction_opacity(eff.disabled, self.pressed, PRESSED_OPACITY),
            interactive: !eff.disabled,
            label: self
                .label
                .as_deref()
                .map(|text| LabelStyle::new(text, colors.text, eff.disabled, self.rtl)),
        }
    }
}

/// Resolved radio style
#[derive(Clone, Debug, PartialEq)]
pub struct RadioStyle {
    /// Control background and border; `text` colors the dot
    pub colors: ResolvedStyle,
    pub control_size: f32,
    pub border_radius: f32,
    pub icon_size: f32,
    /// Diameter of the checked dot; `None` when unchecked
    pub dot_size: Option<f32>,
    pub checked: bool,
    pub opacity: f32,
    pub interactive: bool,
    pub label: Option<LabelStyle>,
}
