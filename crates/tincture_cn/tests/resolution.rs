use tincture_cn::components::{
    resolve_button_styles, resolve_checkbox_styles, resolve_option_styles, resolve_paper_styles,
    Button, Checkbox, CheckboxGroup, Select,
};
use tincture_cn::{
    contrast_text, resolve_color, resolve_size, BaseSizeMap, ColorRef, Size, SizeInput, Variant,
};
use tincture_core::{extract_stops, Color};
use tincture_theme::{ColorScheme, Theme, ThemeColor, ThemePreset};

fn all_themes() -> Vec<Theme> {
    let mut themes = Vec::new();
    for preset in ThemePreset::all() {
        let bundle = preset.bundle();
        for scheme in [ColorScheme::Light, ColorScheme::Dark] {
            themes.push((*bundle.for_scheme(scheme)).clone());
        }
    }
    themes
}

fn sample_colors() -> Vec<Color> {
    let steps = [0x00, 0x33, 0x66, 0x99, 0xcc, 0xff];
    let mut colors = Vec::new();
    for r in steps {
        for g in steps {
            for b in steps {
                colors.push(Color::from_rgba8(r, g, b, 255));
            }
        }
    }
    colors
}

#[test]
fn tokens_resolve_into_the_theme_palette() {
    for theme in all_themes() {
        for token in ThemeColor::ALL {
            let resolved = resolve_color(&ColorRef::Theme(token), &theme);
            assert_eq!(resolved, theme.color(token), "theme={} token={token}", theme.id);
        }
    }
}

#[test]
fn contrast_text_stands_apart_from_its_background() {
    for theme in all_themes() {
        for color in sample_colors() {
            let text = contrast_text(color, &theme);
            let delta = (color.relative_luminance() - text.relative_luminance()).abs();
            assert!(
                delta >= 0.4,
                "theme={} color={:?} text={:?} delta={delta}",
                theme.id,
                color,
                text
            );
        }
    }
}

#[test]
fn mid_blue_gets_white_text() {
    let blue = Color::parse("#3366FF").unwrap();
    assert!(blue.relative_luminance() < 0.5);

    for theme in all_themes() {
        assert_eq!(
            contrast_text(blue, &theme),
            theme.colors.common.white,
            "theme={}",
            theme.id
        );
    }
}

#[test]
fn resolvers_are_pure() {
    for theme in all_themes() {
        let color = ColorRef::Theme(ThemeColor::Success);
        assert_eq!(
            resolve_button_styles(&theme, &color),
            resolve_button_styles(&theme, &color),
            "theme={}",
            theme.id
        );
        assert_eq!(
            resolve_checkbox_styles(&theme, &color, true),
            resolve_checkbox_styles(&theme, &color, true),
            "theme={}",
            theme.id
        );
        assert_eq!(
            resolve_option_styles(&theme, &color, true),
            resolve_option_styles(&theme, &color, true),
            "theme={}",
            theme.id
        );
        assert_eq!(
            resolve_paper_styles(&theme, &color, 2, false),
            resolve_paper_styles(&theme, &color, 2, false),
            "theme={}",
            theme.id
        );

        let button = Button::new().variant(Variant::Outlined).size(Size::Lg);
        assert_eq!(button.resolve(&theme), button.resolve(&theme), "theme={}", theme.id);
    }
}

#[test]
fn built_in_size_maps_grow_with_the_token() {
    for base in all_themes() {
        for scale in [0.5, 1.0, 1.5, 2.0] {
            let theme = base.clone().with_scale(scale).unwrap();
            for (name, map) in BaseSizeMap::BUILT_IN {
                let sm = resolve_size(&theme, SizeInput::Token(Size::Sm), &map);
                let md = resolve_size(&theme, SizeInput::Token(Size::Md), &map);
                let lg = resolve_size(&theme, SizeInput::Token(Size::Lg), &map);
                assert!(
                    sm < md && md < lg,
                    "theme={} scale={scale} map={name} sm={sm} md={md} lg={lg}",
                    theme.id
                );
            }
        }
    }
}

#[test]
fn theme_scale_multiplies_sizes() {
    let theme = Theme::default().with_scale(1.5).unwrap();
    assert_eq!(
        resolve_size(&theme, SizeInput::Token(Size::Md), &BaseSizeMap::BUTTON),
        21.0
    );
    assert_eq!(
        resolve_size(&theme, SizeInput::Px(10.0), &BaseSizeMap::BUTTON),
        15.0
    );
}

#[test]
fn degenerate_scales_never_reach_the_size_resolver() {
    for scale in [0.0, -2.0, f32::NAN] {
        assert!(Theme::default().with_scale(scale).is_err(), "scale={scale}");
    }
}

#[test]
fn soft_checkbox_deepens_when_checked() {
    for theme in all_themes() {
        let danger = ColorRef::Theme(ThemeColor::Danger);
        let unchecked = resolve_checkbox_styles(&theme, &danger, false);
        let checked = resolve_checkbox_styles(&theme, &danger, true);

        assert_eq!(unchecked.soft.background, theme.colors.danger.with_alpha(0.1));
        assert_eq!(checked.soft.background, theme.colors.danger.with_alpha(0.3));
        assert_eq!(checked.soft.text, theme.colors.danger, "theme={}", theme.id);
    }
}

#[test]
fn group_props_flow_into_children() {
    for theme in all_themes() {
        let group = CheckboxGroup::new()
            .color(ThemeColor::Warning)
            .variant(Variant::Soft)
            .value(["a"]);

        let child = Checkbox::new().value("a").resolve(&theme, Some(&group));
        assert!(child.checked);
        assert_eq!(
            child.colors.background,
            theme.colors.warning.with_alpha(0.3),
            "theme={}",
            theme.id
        );

        let own = Checkbox::new()
            .value("a")
            .color(ThemeColor::Primary)
            .resolve(&theme, Some(&group));
        assert_eq!(own.colors.text, theme.colors.primary, "theme={}", theme.id);
    }
}

#[test]
fn single_select_closes_after_a_pick() {
    let mut select = Select::new();
    assert!(select.open());
    select.select("apple");
    assert!(!select.is_open());
    assert!(select.is_selected("apple"));

    let mut disabled = Select::new().disabled(true);
    assert!(!disabled.open());
}

#[test]
fn gradient_parsing_is_total() {
    assert!(extract_stops("linear-gradient(garbage)").is_none());
    assert!(extract_stops("not a gradient").is_none());

    let spec = extract_stops("linear-gradient(#000000, #ffffff)").unwrap();
    assert_eq!(spec.offsets(), vec![0.0, 1.0]);
    assert_eq!(spec.colors(), vec![Color::BLACK, Color::WHITE]);
}
