//! Select trigger, popup surface and selection state
//!
//! # Example
//!
//! ```rust
//! use tincture_cn::prelude::*;
//! use tincture_theme::presets::base_dark;
//!
//! let theme = base_dark();
//! let mut select = Select::new().multiple(true).variant(Variant::Outlined);
//! assert!(select.open());
//!
//! select.select("red");
//! select.select("blue");
//! select.select("red");
//! assert_eq!(select.value_ref(), &SelectValue::Multiple(vec!["blue".to_string()]));
//! assert!(select.is_open());
//!
//! let style = select.resolve(&theme);
//! assert_eq!(style.placeholder, None);
//! ```

use tincture_core::{Color, Fill};
use tincture_theme::{Theme, ThemeColor};
use tracing::debug;

use super::option::OptionItem;
use crate::color::{contrast_text, resolve_color, ColorRef};
use crate::group::GroupContext;
use crate::size::{resolve_size, BaseSizeMap, SizeInput};
use crate::variant::{Border, ResolvedStyle, Variant, VariantStyles};
use crate::DISABLED_OPACITY;

/// Lightening of trigger text on non-solid triggers
pub const TRIGGER_TEXT_LIGHTEN: f32 = 0.75;
/// Lightening of item text on outlined and soft popups
pub const ITEM_TEXT_LIGHTEN: f32 = 0.2;
/// Darkening of soft trigger and popup backgrounds
pub const SOFT_DARKEN: f32 = 0.5;

/// Popup height assumed when choosing a placement
pub const ESTIMATED_POPUP_HEIGHT: f32 = 200.0;
/// Popup height cap; the list scrolls past it
pub const POPUP_MAX_HEIGHT: f32 = 240.0;
/// Space between trigger and popup
pub const POPUP_OFFSET: f32 = 6.0;

const BORDER_RADIUS: f32 = 6.0;
const PLACEHOLDER_OPACITY: f32 = 0.5;
const DEFAULT_PLACEHOLDER: &str = "Select an option";

/// Variant table for the trigger
pub fn resolve_select_trigger_styles(
    theme: &Theme,
    color: &ColorRef,
) -> VariantStyles<ResolvedStyle> {
    let resolved = resolve_color(color, theme);
    let text = resolved.lighten(TRIGGER_TEXT_LIGHTEN);

    VariantStyles {
        solid: ResolvedStyle::new(resolved, contrast_text(resolved, theme)),
        outlined: ResolvedStyle::transparent(text).with_border(Border::hairline(resolved)),
        plain: ResolvedStyle::transparent(text),
        soft: ResolvedStyle::new(resolved.darken(SOFT_DARKEN), text),
    }
}

/// Popup surface for one variant
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceStyle {
    /// May be a gradient when the theme surface is one
    pub background: Fill,
    pub border: Option<Border>,
    pub item_text: Color,
}

/// Variant table for the popup surface
pub fn resolve_select_content_styles(
    theme: &Theme,
    color: &ColorRef,
) -> VariantStyles<SurfaceStyle> {
    let resolved = resolve_color(color, theme);
    let surface = theme.colors.surface.clone();

    VariantStyles {
        solid: SurfaceStyle {
            background: Fill::Solid(resolved),
            border: None,
            item_text: contrast_text(resolved, theme),
        },
        outlined: SurfaceStyle {
            background: surface.clone(),
            border: Some(Border::hairline(resolved)),
            item_text: resolved.lighten(ITEM_TEXT_LIGHTEN),
        },
        plain: SurfaceStyle {
            background: surface,
            border: None,
            item_text: resolved,
        },
        soft: SurfaceStyle {
            background: Fill::Solid(resolved.darken(SOFT_DARKEN)),
            border: None,
            item_text: resolved.lighten(ITEM_TEXT_LIGHTEN),
        },
    }
}

/// Where the popup opens relative to the trigger
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Placement {
    Top,
    #[default]
    Bottom,
}

/// Trigger frame in window coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Placement {
    /// Open upward only when there is no room below and room above
    pub fn for_anchor(anchor: Rect, window_height: f32) -> Self {
        let space_below = window_height - (anchor.y + anchor.height);
        if space_below < ESTIMATED_POPUP_HEIGHT && anchor.y > ESTIMATED_POPUP_HEIGHT {
            Placement::Top
        } else {
            Placement::Bottom
        }
    }
}

/// Absolute popup frame
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PopupPosition {
    pub placement: Placement,
    pub left: f32,
    pub width: f32,
    /// Distance from the window top (`Bottom`) or bottom (`Top`)
    pub offset: f32,
}

impl PopupPosition {
    pub fn for_anchor(anchor: Rect, window_height: f32) -> Self {
        let placement = Placement::for_anchor(anchor, window_height);
        let offset = match placement {
            Placement::Bottom => anchor.y + anchor.height + POPUP_OFFSET,
            Placement::Top => window_height - anchor.y + POPUP_OFFSET,
        };
        Self {
            placement,
            left: anchor.x,
            width: anchor.width,
            offset,
        }
    }
}

/// Current selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectValue {
    Single(Option<String>),
    Multiple(Vec<String>),
}

impl SelectValue {
    pub fn has_value(&self) -> bool {
        match self {
            SelectValue::Single(value) => value.as_deref().is_some_and(|v| !v.is_empty()),
            SelectValue::Multiple(values) => !values.is_empty(),
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        match self {
            SelectValue::Single(selected) => selected.as_deref() == Some(value),
            SelectValue::Multiple(values) => values.iter().any(|v| v == value),
        }
    }
}

/// Select props and popup state
#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    color: ColorRef,
    variant: Variant,
    size: SizeInput,
    disabled: bool,
    placeholder: String,
    value: SelectValue,
    open: bool,
}

impl Default for Select {
    fn default() -> Self {
        Self::new()
    }
}

impl Select {
    pub fn new() -> Self {
        Self {
            color: ThemeColor::Primary.into(),
            variant: Variant::Solid,
            size: SizeInput::default(),
            disabled: false,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            value: SelectValue::Single(None),
            open: false,
        }
    }

    pub fn color(mut self, color: impl Into<ColorRef>) -> Self {
        self.color = color.into();
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: impl Into<SizeInput>) -> Self {
        self.size = size.into();
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Switch between single and multiple selection, clearing the value
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.value = if multiple {
            SelectValue::Multiple(Vec::new())
        } else {
            SelectValue::Single(None)
        };
        self
    }

    /// Initial value; in multiple mode it becomes the only selected value
    pub fn value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.value = match self.value {
            SelectValue::Single(_) => SelectValue::Single(Some(value)),
            SelectValue::Multiple(_) => SelectValue::Multiple(vec![value]),
        };
        self
    }

    pub fn values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for value in values.into_iter().map(Into::into) {
            if !out.contains(&value) {
                out.push(value);
            }
        }
        self.value = SelectValue::Multiple(out);
        self
    }

    /// Settings handed to option rows
    pub fn context(&self) -> GroupContext {
        GroupContext {
            color: Some(self.color),
            variant: Some(self.variant),
            size: Some(self.size),
            disabled: Some(self.disabled),
        }
    }

    pub fn value_ref(&self) -> &SelectValue {
        &self.value
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self.value, SelectValue::Multiple(_))
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.value.contains(value)
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the popup; refused while disabled
    pub fn open(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.open = true;
        true
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply an option press
    ///
    /// Multiple mode toggles `value` and keeps the popup open. Single mode
    /// selects it and closes the popup. Returns false while disabled.
    pub fn select(&mut self, value: &str) -> bool {
        if self.disabled {
            return false;
        }
        match &mut self.value {
            SelectValue::Multiple(values) => {
                if let Some(pos) = values.iter().position(|v| v == value) {
                    values.remove(pos);
                } else {
                    values.push(value.to_string());
                }
            }
            SelectValue::Single(selected) => {
                *selected = Some(value.to_string());
                self.open = false;
            }
        }
        debug!(value, open = self.open, "select value changed");
        true
    }

    /// Labels of the selected options, in option order
    pub fn display_labels<'a>(&self, options: &'a [OptionItem]) -> Vec<&'a str> {
        options
            .iter()
            .filter(|option| self.is_selected(option.value()))
            .map(OptionItem::display_label)
            .collect()
    }

    pub fn resolve(&self, theme: &Theme) -> SelectStyle {
        let size = resolve_size(theme, self.size, &BaseSizeMap::SELECT);
        let has_value = self.value.has_value();

        SelectStyle {
            trigger: *resolve_select_trigger_styles(theme, &self.color).get(self.variant),
            popup: resolve_select_content_styles(theme, &self.color)
                .get(self.variant)
                .clone(),
            min_height: size,
            padding_horizontal: size * 0.25,
            padding_vertical: size * 0.12,
            border_radius: BORDER_RADIUS,
            font_size: size * 0.32,
            popup_min_width: size * 3.0,
            popup_gap: size * 0.15,
            popup_max_height: POPUP_MAX_HEIGHT,
            opacity: if self.disabled { DISABLED_OPACITY } else { 1.0 },
            text_opacity: if has_value { 1.0 } else { PLACEHOLDER_OPACITY },
            placeholder: (!has_value).then(|| self.placeholder.clone()),
        }
    }
}

/// Resolved select style
#[derive(Clone, Debug, PartialEq)]
pub struct SelectStyle {
    pub trigger: ResolvedStyle,
    pub popup: SurfaceStyle,
    pub min_height: f32,
    pub padding_horizontal: f32,
    pub padding_vertical: f32,
    pub border_radius: f32,
    pub font_size: f32,
    pub popup_min_width: f32,
    pub popup_gap: f32,
    pub popup_max_height: f32,
    pub opacity: f32,
    pub text_opacity: f32,
    /// Shown when nothing is selected
    pub placeholder: Option<String>,
}
