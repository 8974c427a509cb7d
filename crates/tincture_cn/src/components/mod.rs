//! Component style resolvers
//!
//! One module per component family. Each exposes a builder-style props
//! struct with a `resolve` method and a free `resolve_*_styles` function that
//! builds the family's variant table.

pub mod baseline;
pub mod button;
pub mod checkbox;
pub mod decorator;
pub mod divider;
pub mod icon_button;
pub mod input_root;
pub mod option;
pub mod paper;
pub mod radio;
pub mod select;
pub mod typography;

pub use baseline::{
    resolve_native_baseline, resolve_text_baseline, BaselineBackground, StatusBarStyle,
    TextBaseline,
};
pub use button::{resolve_button_styles, Button, ButtonStyle};
pub use checkbox::{
    resolve_checkbox_styles, Checkbox, CheckboxGroup, CheckboxIcon, CheckboxStyle, LabelStyle,
};
pub use decorator::{DecoratorPosition, DecoratorStyle, DecoratorWrapper};
pub use divider::{
    resolve_divider_line, Divider, DividerInset, DividerLine, DividerStyle, DividerText, LineEdges,
};
pub use icon_button::{IconButton, IconButtonStyle};
pub use input_root::{resolve_input_styles, InputRoot, InputRootStyle, InputWidth};
pub use option::{resolve_option_styles, OptionColors, OptionItem, OptionStyle};
pub use paper::{resolve_paper_styles, Paper, PaperStyle, PaperStyles};
pub use radio::{Radio, RadioGroup, RadioStyle};
pub use select::{
    resolve_select_content_styles, resolve_select_trigger_styles, Placement, PopupPosition,
    Rect, Select, SelectStyle, SelectValue, SurfaceStyle,
};
pub use typography::{resolve_typography_styles, Typography, TypographyStyle, TypographyStyles};

use crate::DISABLED_OPACITY;

/// Opacity of a pressable control
///
/// Disabled wins over pressed.
pub(crate) fn interaction_opacity(disabled: bool, pressed: bool, pressed_opacity: f32) -> f32 {
    if disabled {
        DISABLED_OPACITY
    } else if pressed {
        pressed_opacity
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interaction_opacity() {
        assert_eq!(interaction_opacity(false, false, 0.8), 1.0);
        assert_eq!(interaction_opacity(false, true, 0.8), 0.8);
        assert_eq!(interaction_opacity(true, true, 0.8), 0.5);
    }
}
