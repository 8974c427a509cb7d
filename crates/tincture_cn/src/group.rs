//! Group configuration passed down to child controls
//!
//! CheckboxGroup, RadioGroup and Select hand their `color`, `variant`,
//! `size` and `disabled` settings to every child explicitly. A child picks
//! its own prop first, then the group's, then its family default.

use serde::{Deserialize, Serialize};
use tincture_theme::Theme;

use crate::color::ColorRef;
use crate::size::{resolve_size, BaseSizeMap, SizeInput};
use crate::variant::Variant;
use crate::DISABLED_OPACITY;

/// `prop ?? group ?? default`
pub fn inherit<T>(prop: Option<T>, group: Option<T>, default: T) -> T {
    prop.or(group).unwrap_or(default)
}

/// Settings a group shares with its children
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GroupContext {
    pub color: Option<ColorRef>,
    pub variant: Option<Variant>,
    pub size: Option<SizeInput>,
    pub disabled: Option<bool>,
}

impl GroupContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn size(mut self, size: impl Into<SizeInput>) -> Self {
        self.size = Some(size.into());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }
}

/// Family defaults applied after prop and group
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FamilyDefaults {
    pub color: ColorRef,
    pub variant: Variant,
    pub size: SizeInput,
}

/// A child's props after inheritance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Effective {
    pub color: ColorRef,
    pub variant: Variant,
    pub size: SizeInput,
    pub disabled: bool,
}

/// Fold a child's own props over the group's and the family defaults
pub fn effective_props(
    props: &GroupContext,
    group: Option<&GroupContext>,
    defaults: FamilyDefaults,
) -> Effective {
    let group = group.copied().unwrap_or_default();
    Effective {
        color: inherit(props.color, group.color, defaults.color),
        variant: inherit(props.variant, group.variant, defaults.variant),
        size: inherit(props.size, group.size, defaults.size),
        // A disabled group disables every child, whatever the child says
        disabled: props.disabled.unwrap_or(false) || group.disabled.unwrap_or(false),
    }
}

/// Direction children are laid out in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

/// Container layout for a checkbox or radio group
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupLayout {
    pub orientation: Orientation,
    /// `None` when the resolved spacing is zero
    pub gap: Option<f32>,
    pub opacity: f32,
}

/// Resolve group container layout
pub fn resolve_group_layout(
    theme: &Theme,
    orientation: Orientation,
    spacing: SizeInput,
    disabled: bool,
) -> GroupLayout {
    let gap = resolve_size(theme, spacing, &BaseSizeMap::GROUP_SPACING);
    GroupLayout {
        orientation,
        gap: (gap > 0.0).then_some(gap),
        opacity: if disabled { DISABLED_OPACITY } else { 1.0 },
    }
}

/// Selected values of a checkbox group, in insertion order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckboxGroupValue {
    values: Vec<String>,
}

impl CheckboxGroupValue {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Self::default();
        for value in values {
            out.set(value.into(), true);
        }
        out
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Add or remove `value`; duplicates are never stored
    pub fn set(&mut self, value: impl Into<String>, checked: bool) {
        let value = value.into();
        if checked {
            if !self.is_checked(&value) {
                self.values.push(value);
            }
        } else {
            self.values.retain(|v| *v != value);
        }
    }

    /// Flip `value` and return its new checked state
    pub fn toggle(&mut self, value: &str) -> bool {
        let checked = !self.is_checked(value);
        self.set(value, checked);
        checked
    }
}

/// Selected value of a radio group
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RadioGroupValue {
    selected: Option<String>,
}

impl RadioGroupValue {
    pub fn new(selected: Option<String>) -> Self {
        Self { selected }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.selected.as_deref() == Some(value)
    }

    /// Select `value`; returns false if it was already selected
    pub fn select(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.is_checked(&value) {
            return false;
        }
        self.selected = Some(value);
        true
    }
}
