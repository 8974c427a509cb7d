//! Checkbox and CheckboxGroup styles
//!
//! A checkbox inside a [`CheckboxGroup`] inherits the group's color, variant
//! and size unless it sets its own, and reads its checked state from the
//! group's value when it has a `value` of its own.
//!
//! # Example
//!
//! ```rust
//! use tincture_cn::prelude::*;
//! use tincture_theme::presets::base_dark;
//!
//! let theme = base_dark();
//! let mut group = CheckboxGroup::new()
//!     .color(ThemeColor::Danger)
//!     .variant(Variant::Soft)
//!     .value(["email"]);
//!
//! let email = Checkbox::new().value("email").label("Email");
//! let style = email.resolve(&theme, Some(&group));
//! assert!(style.checked);
//! assert_eq!(style.colors.background, theme.colors.danger.with_alpha(0.3));
//!
//! let mut sms = Checkbox::new().value("sms");
//! assert_eq!(sms.press(Some(&mut group)), Some(true));
//! assert_eq!(group.values(), ["email", "sms"]);
//! ```

use tincture_core::Color;
use tincture_theme::{Theme, ThemeColor};

use super::interaction_opacity;
use crate::color::{contrast_text, resolve_color, ColorRef};
use crate::group::{
    effective_props, resolve_group_layout, CheckboxGroupValue, Effective, FamilyDefaults,
    GroupContext, GroupLayout, Orientation,
};
use crate::size::{resolve_size, BaseSizeMap, Size, SizeInput};
use crate::variant::{Border, ResolvedStyle, Variant, VariantStyles};
use crate::DISABLED_OPACITY;

/// Soft background alpha of an unchecked control
pub const SOFT_ALPHA_UNCHECKED: f32 = 0.1;
/// Soft background alpha of a checked control
pub const SOFT_ALPHA_CHECKED: f32 = 0.3;
/// Outlined background alpha of a checked control
pub const OUTLINED_ALPHA_CHECKED: f32 = 0.1;

/// Opacity while the control is held down
pub(crate) const PRESSED_OPACITY: f32 = 0.8;
/// Space between the control and its label
pub(crate) const LABEL_SPACING: f32 = 8.0;
/// Icon edge as a fraction of the control edge
pub(crate) const ICON_SCALE: f32 = 0.5;

const BORDER_RADIUS: f32 = 4.0;

const DEFAULTS: FamilyDefaults = FamilyDefaults {
    color: ColorRef::Theme(ThemeColor::Neutral),
    variant: Variant::Solid,
    size: SizeInput::Token(Size::Md),
};

/// Variant table for checkbox-like controls
///
/// `text` is the icon and label color: the contrast color on `solid`, the
/// resolved color everywhere else.
pub fn resolve_checkbox_styles(
    theme: &Theme,
    color: &ColorRef,
    checked: bool,
) -> VariantStyles<ResolvedStyle> {
    let resolved = resolve_color(color, theme);
    let outlined_bg = if checked {
        resolved.with_alpha(OUTLINED_ALPHA_CHECKED)
    } else {
        Color::TRANSPARENT
    };
    let soft_alpha = if checked {
        SOFT_ALPHA_CHECKED
    } else {
        SOFT_ALPHA_UNCHECKED
    };

    VariantStyles {
        solid: ResolvedStyle::new(resolved, contrast_text(resolved, theme))
            .with_border(Border::hairline(resolved)),
        outlined: ResolvedStyle::new(outlined_bg, resolved).with_border(Border::hairline(resolved)),
        plain: ResolvedStyle::transparent(resolved),
        soft: ResolvedStyle::new(resolved.with_alpha(soft_alpha), resolved),
    }
}

/// Glyph drawn inside the box
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckboxIcon {
    None,
    Check,
    Indeterminate,
}

impl CheckboxIcon {
    /// `indeterminate` wins over `checked`
    pub fn for_state(checked: bool, indeterminate: bool) -> Self {
        if indeterminate {
            CheckboxIcon::Indeterminate
        } else if checked {
            CheckboxIcon::Check
        } else {
            CheckboxIcon::None
        }
    }
}

/// Label placement and color
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    pub text: String,
    pub color: Color,
    pub opacity: f32,
    /// Label sits before the control (right-to-left)
    pub leading: bool,
    /// Margin on the side facing the control
    pub spacing: f32,
}

impl LabelStyle {
    pub(crate) fn new(text: &str, color: Color, disabled: bool, rtl: bool) -> Self {
        Self {
            text: text.to_string(),
            color,
            opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
            leading: rtl,
            spacing: LABEL_SPACING,
        }
    }
}

/// Group container shared by checkboxes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CheckboxGroup {
    context: GroupContext,
    orientation: Orientation,
    spacing: Option<SizeInput>,
    value: CheckboxGroupValue,
}

impl CheckboxGroup {
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

    /// Gap between children; no gap when unset or zero
    pub fn spacing(mut self, spacing: impl Into<SizeInput>) -> Self {
        self.spacing = Some(spacing.into());
        self
    }

    /// Initially checked values
    pub fn value<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.value = CheckboxGroupValue::new(values);
        self
    }

    pub fn context(&self) -> &GroupContext {
        &self.context
    }

    pub fn values(&self) -> &[String] {
        self.value.values()
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.value.is_checked(value)
    }

    /// Flip `value` and return its new checked state
    pub fn toggle(&mut self, value: &str) -> bool {
        self.value.toggle(value)
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

/// Checkbox props
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Checkbox {
    props: GroupContext,
    checked: bool,
    indeterminate: bool,
    value: Option<String>,
    label: Option<String>,
    rtl: bool,
    pressed: bool,
}

impl Checkbox {
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

    /// Checked state when not driven by a group
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    /// Value reported to, and looked up in, the enclosing group
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Place the label before the box
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = pressed;
        self
    }

    fn effective(&self, group: Option<&CheckboxGroup>) -> Effective {
        effective_props(&self.props, group.map(CheckboxGroup::context), DEFAULTS)
    }

    /// Whether the box is checked, given its group
    pub fn is_checked(&self, group: Option<&CheckboxGroup>) -> bool {
        match (group, self.value.as_deref()) {
            (Some(group), Some(value)) => group.is_checked(value),
            _ => self.checked,
        }
    }

    /// Handle a press and return the new checked state
    ///
    /// Returns `None` when disabled. Inside a group the group's value is
    /// updated; otherwise the local checked state flips.
    pub fn press(&mut self, group: Option<&mut CheckboxGroup>) -> Option<bool> {
        let group_disabled = group
            .as_ref()
            .and_then(|g| g.context.disabled)
            .unwrap_or(false);
        if group_disabled || self.props.disabled.unwrap_or(false) {
            return None;
        }

        match (group, self.value.as_deref()) {
            (Some(group), Some(value)) => Some(group.toggle(value)),
            _ => {
                self.checked = !self.checked;
                Some(self.checked)
            }
        }
    }

    pub fn resolve(&self, theme: &Theme, group: Option<&CheckboxGroup>) -> CheckboxStyle {
        let eff = self.effective(group);
        let checked = self.is_checked(group);
        let colors = *resolve_checkbox_styles(theme, &eff.color, checked).get(eff.variant);
        let box_size = resolve_size(theme, eff.size, &BaseSizeMap::CHECKBOX);

        CheckboxStyle {
            colors,
            box_size,
            border_radius: BORDER_RADIUS,
            icon: CheckboxIcon::for_state(checked, self.indeterminate),
            icon_size: box_size * ICON_SCALE,
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

/// Resolved checkbox style
#[derive(Clone, Debug, PartialEq)]
pub struct CheckboxStyle {
    /// Box background and border; `text` colors the icon
    pub colors: ResolvedStyle,
    pub box_size: f32,
    pub border_radius: f32,
    pub icon: CheckboxIcon,
    pub icon_size: f32,
    pub checked: bool,
    pub opacity: f32,
    pub interactive: bool,
    pub label: Option<LabelStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_theme::presets::{base_dark, base_light};

    #[test]
    fn test_soft_alpha_tracks_checked() {
        let theme = base_light();
        let danger = theme.colors.danger;
        let color = ThemeColor::Danger.into();

        let unchecked = resolve_checkbox_styles(&theme, &color, false);
        let checked = resolve_checkbox_styles(&theme, &color, true);
        assert!((unchecked.soft.background.a - 0.1).abs() < 1e-6);
        assert!((checked.soft.background.a - 0.3).abs() < 1e-6);
        assert_eq!(checked.soft.text, danger);
        assert_eq!(checked.soft.border, None);
    }

    #[test]
    fn test_outlined_fills_when_checked() {
        let theme = base_light();
        let color = ThemeColor::Primary.into();
        let unchecked = resolve_checkbox_styles(&theme, &color, false);
        let checked = resolve_checkbox_styles(&theme, &color, true);

        assert_eq!(unchecked.outlined.background, Color::TRANSPARENT);
        assert_eq!(
            checked.outlined.background,
            theme.colors.primary.with_alpha(0.1)
        );
        assert_eq!(checked.outlined.border_width(), 1.0);
    }

    #[test]
    fn test_solid_uses_contrast_icon() {
        let theme = base_dark();
        let styles = resolve_checkbox_styles(&theme, &ThemeColor::Primary.into(), true);
        assert_eq!(styles.solid.background, theme.colors.primary);
        assert_eq!(styles.solid.text, theme.colors.common.white);
        assert_eq!(styles.solid.border, Some(Border::hairline(theme.colors.primary)));
    }

    #[test]
    fn test_icon_priority() {
        assert_eq!(CheckboxIcon::for_state(true, true), CheckboxIcon::Indeterminate);
        assert_eq!(CheckboxIcon::for_state(true, false), CheckboxIcon::Check);
        assert_eq!(CheckboxIcon::for_state(false, false), CheckboxIcon::None);
    }

    #[test]
    fn test_standalone_defaults() {
        let theme = base_dark();
        let style = Checkbox::new().label("Agree").resolve(&theme, None);

        assert_eq!(style.colors.background, theme.colors.neutral);
        assert_eq!(style.box_size, 16.0);
        assert_eq!(style.icon_size, 8.0);
        assert_eq!(style.border_radius, 4.0);
        assert_eq!(style.icon, CheckboxIcon::None);
        let label = style.label.unwrap();
        assert!(!label.leading);
        assert_eq!(label.spacing, 8.0);
        assert_eq!(label.opacity, 1.0);
    }

    #[test]
    fn test_disabled_and_pressed() {
        let theme = base_dark();
        let pressed = Checkbox::new().pressed(true).resolve(&theme, None);
        assert_eq!(pressed.opacity, 0.8);

        let disabled = Checkbox::new()
            .disabled(true)
            .pressed(true)
            .label("Off")
            .rtl(true)
            .resolve(&theme, None);
        assert_eq!(disabled.opacity, 0.5);
        assert!(!disabled.interactive);
        let label = disabled.label.unwrap();
        assert_eq!(label.opacity, 0.5);
        assert!(label.leading);
    }

    #[test]
    fn test_group_drives_checked_state() {
        let theme = base_dark();
        let mut group = CheckboxGroup::new().size(Size::Lg).value(["a"]);

        let a = Checkbox::new().value("a").checked(false);
        let style = a.resolve(&theme, Some(&group));
        assert!(style.checked);
        assert_eq!(style.icon, CheckboxIcon::Check);
        assert_eq!(style.box_size, 20.0);

        let mut b = Checkbox::new().value("b");
        assert_eq!(b.press(Some(&mut group)), Some(true));
        assert_eq!(b.press(Some(&mut group)), Some(false));
        assert_eq!(group.values(), ["a"]);
    }

    #[test]
    fn test_press_without_group() {
        let mut cb = Checkbox::new();
        assert_eq!(cb.press(None), Some(true));
        assert!(cb.is_checked(None));

        let mut disabled = Checkbox::new().disabled(true);
        assert_eq!(disabled.press(None), None);

        let mut group = CheckboxGroup::new().disabled(true);
        let mut child = Checkbox::new().value("x");
        assert_eq!(child.press(Some(&mut group)), None);
        assert!(group.values().is_empty());
    }

    #[test]
    fn test_group_layout() {
        let theme = base_dark();
        let group = CheckboxGroup::new();
        assert_eq!(group.layout(&theme).gap, None);
        assert_eq!(group.layout(&theme).orientation, Orientation::Vertical);

        let spaced = CheckboxGroup::new()
            .spacing(Size::Md)
            .orientation(Orientation::Horizontal)
            .disabled(true);
        let layout = spaced.layout(&theme);
        assert_eq!(layout.gap, Some(8.0));
        assert_eq!(layout.opacity, 0.5);
    }
}
