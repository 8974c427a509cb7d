//! Size tokens and per-family base size tables

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tincture_theme::Theme;

use crate::error::SizeError;

/// Symbolic size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    pub const ALL: [Size; 3] = [Size::Sm, Size::Md, Size::Lg];

    pub fn name(self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }
}

/// A size prop: a token or an explicit pixel value
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SizeInput {
    Token(Size),
    Px(f32),
}

impl SizeInput {
    /// Parse `sm`, `md`, `lg`, `16` or `16px`
    pub fn parse(input: &str) -> Result<Self, SizeError> {
        let input = input.trim();
        if let Some(size) = Size::ALL.into_iter().find(|s| s.name() == input) {
            return Ok(SizeInput::Token(size));
        }

        let number = input.strip_suffix("px").unwrap_or(input).trim();
        match number.parse::<f32>() {
            Ok(px) if px.is_finite() && px >= 0.0 => Ok(SizeInput::Px(px)),
            _ => Err(SizeError::InvalidSize(input.to_string())),
        }
    }
}

impl Default for SizeInput {
    fn default() -> Self {
        SizeInput::Token(Size::Md)
    }
}

impl From<Size> for SizeInput {
    fn from(size: Size) -> Self {
        SizeInput::Token(size)
    }
}

impl From<f32> for SizeInput {
    fn from(px: f32) -> Self {
        SizeInput::Px(px)
    }
}

impl FromStr for SizeInput {
    type Err = SizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SizeInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeInput::Token(size) => f.write_str(size.name()),
            SizeInput::Px(px) => write!(f, "{px}px"),
        }
    }
}

impl Serialize for SizeInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SizeInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SizeInput::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Pixel baselines for `sm`, `md` and `lg`, strictly increasing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BaseSizeMap {
    sm: f32,
    md: f32,
    lg: f32,
}

impl BaseSizeMap {
    /// Button font size
    pub const BUTTON: BaseSizeMap = BaseSizeMap::table(12.0, 14.0, 16.0);
    /// IconButton font size
    pub const ICON_BUTTON: BaseSizeMap = BaseSizeMap::table(16.0, 20.0, 24.0);
    /// Checkbox box edge
    pub const CHECKBOX: BaseSizeMap = BaseSizeMap::table(12.0, 16.0, 20.0);
    /// Radio circle diameter
    pub const RADIO: BaseSizeMap = BaseSizeMap::table(12.0, 16.0, 20.0);
    /// Select trigger height
    pub const SELECT: BaseSizeMap = BaseSizeMap::table(32.0, 40.0, 48.0);
    /// Option row height basis
    pub const OPTION: BaseSizeMap = BaseSizeMap::table(32.0, 40.0, 48.0);
    /// InputRoot font size
    pub const INPUT_ROOT: BaseSizeMap = BaseSizeMap::table(12.0, 14.0, 16.0);
    /// Gap between group children
    pub const GROUP_SPACING: BaseSizeMap = BaseSizeMap::table(4.0, 8.0, 12.0);

    /// Every built-in table, for invariant checks
    pub const BUILT_IN: [(&'static str, BaseSizeMap); 8] = [
        ("button", Self::BUTTON),
        ("icon_button", Self::ICON_BUTTON),
        ("checkbox", Self::CHECKBOX),
        ("radio", Self::RADIO),
        ("select", Self::SELECT),
        ("option", Self::OPTION),
        ("input_root", Self::INPUT_ROOT),
        ("group_spacing", Self::GROUP_SPACING),
    ];

    // Built-in tables only; ordering is covered by tests
    const fn table(sm: f32, md: f32, lg: f32) -> Self {
        Self { sm, md, lg }
    }

    /// Build a table, rejecting anything not strictly `sm < md < lg`
    pub fn new(sm: f32, md: f32, lg: f32) -> Result<Self, SizeError> {
        let finite = sm.is_finite() && md.is_finite() && lg.is_finite();
        if !(finite && sm >= 0.0 && sm < md && md < lg) {
            return Err(SizeError::NonMonotonic { sm, md, lg });
        }
        Ok(Self { sm, md, lg })
    }

    pub fn get(&self, size: Size) -> f32 {
        match size {
            Size::Sm => self.sm,
            Size::Md => self.md,
            Size::Lg => self.lg,
        }
    }
}

/// Concrete pixel size for a size prop
///
/// Tokens look up the table; pixel values pass through. Both are multiplied
/// by the theme's global scale.
pub fn resolve_size(theme: &Theme, input: SizeInput, map: &BaseSizeMap) -> f32 {
    let base = match input {
        SizeInput::Token(size) => map.get(size),
        SizeInput::Px(px) => px,
    };
    base * theme.scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use tincture_theme::presets::base_dark;

    #[test]
    fn test_parse_inputs() {
        assert_eq!(SizeInput::parse("sm"), Ok(SizeInput::Token(Size::Sm)));
        assert_eq!(SizeInput::parse("16"), Ok(SizeInput::Px(16.0)));
        assert_eq!(SizeInput::parse(" 18.5px "), Ok(SizeInput::Px(18.5)));
        assert!(SizeInput::parse("huge").is_err());
        assert!(SizeInput::parse("-4px").is_err());
        assert!(SizeInput::parse("px").is_err());
        assert!(SizeInput::parse("NaN").is_err());
    }

    #[test]
    fn test_new_rejects_non_monotonic() {
        assert!(BaseSizeMap::new(1.0, 2.0, 3.0).is_ok());
        assert_eq!(
            BaseSizeMap::new(4.0, 4.0, 8.0),
            Err(SizeError::NonMonotonic {
                sm: 4.0,
                md: 4.0,
                lg: 8.0
            })
        );
        assert!(BaseSizeMap::new(8.0, 4.0, 12.0).is_err());
        assert!(BaseSizeMap::new(1.0, 2.0, f32::NAN).is_err());
    }

    #[test]
    fn test_built_in_tables_are_ordered() {
        let theme = base_dark();
        for (name, map) in BaseSizeMap::BUILT_IN {
            assert!(
                BaseSizeMap::new(map.sm, map.md, map.lg).is_ok(),
                "table {name} is not ordered"
            );
            let sm = resolve_size(&theme, Size::Sm.into(), &map);
            let md = resolve_size(&theme, Size::Md.into(), &map);
            let lg = resolve_size(&theme, Size::Lg.into(), &map);
            assert!(sm < md && md < lg, "table {name}: {sm} {md} {lg}");
        }
    }

    #[test]
    fn test_scale_applies_to_tokens_and_pixels() {
        let theme = base_dark().with_scale(1.5).unwrap();
        assert_eq!(resolve_size(&theme, Size::Md.into(), &BaseSizeMap::BUTTON), 21.0);
        assert_eq!(resolve_size(&theme, SizeInput::Px(10.0), &BaseSizeMap::BUTTON), 15.0);
    }

    #[test]
    fn test_display_round_trips() {
        for input in [SizeInput::Token(Size::Lg), SizeInput::Px(22.0)] {
            assert_eq!(input.to_string().parse::<SizeInput>(), Ok(input));
        }
    }
}
