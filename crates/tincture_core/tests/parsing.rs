use tincture_core::{
    extract_stops, parse_color, parse_gradient, Color, ColorError, Fill, GradientKind,
    GradientParseError,
};

fn assert_offsets(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "offsets={actual:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-5, "offsets={actual:?} expected={expected:?}");
    }
}

#[test]
fn literal_forms_agree() {
    let forms = [
        "#3366ff",
        "#36F",
        "#3366FFFF",
        "rgb(51, 102, 255)",
        "rgba(51,102,255,1)",
    ];
    for form in forms {
        let color = parse_color(form).unwrap();
        assert_eq!(color.to_rgba8(), [0x33, 0x66, 0xff, 0xff], "form={form}");
    }
}

#[test]
fn alpha_is_kept_in_zero_to_one() {
    let color = parse_color("rgba(0, 0, 0, 0.5)").unwrap();
    assert!((color.a - 0.5).abs() < 1e-6);
    assert_eq!(color.to_hex(), "#000000");
    assert_eq!(color.to_string(), color.to_hex8());
}

#[test]
fn rejects_garbage_and_gradients() {
    assert_eq!(
        parse_color("not-a-color"),
        Err(ColorError::InvalidColor("not-a-color".to_string()))
    );
    assert!(matches!(
        parse_color("linear-gradient(red, blue)"),
        Err(ColorError::NotSolid(_))
    ));
}

#[test]
fn stops_keep_declaration_order() {
    let spec = extract_stops("linear-gradient(to right, #ff0000, #00ff00, #0000ff)").unwrap();
    assert_eq!(spec.kind, GradientKind::Linear { angle_deg: 90.0 });
    assert_eq!(
        spec.colors(),
        vec![
            Color::from_hex(0xff0000),
            Color::from_hex(0x00ff00),
            Color::from_hex(0x0000ff)
        ]
    );
    assert_offsets(&spec.offsets(), &[0.0, 0.5, 1.0]);
}

#[test]
fn explicit_positions_are_normalized() {
    let spec = extract_stops("linear-gradient(45deg, #000 10%, #fff 90%)").unwrap();
    assert_eq!(spec.angle(), Some(45.0));
    assert_offsets(&spec.offsets(), &[0.1, 0.9]);
}

#[test]
fn malformed_gradients_are_reported_not_raised() {
    let cases = [
        "linear-gradient(garbage)",
        "linear-gradient(#000, #fff",
        "linear-gradient(to nowhere, #000, #fff)",
        "linear-gradient(#000, notacolor)",
        "conic-gradient(#000, #fff)",
    ];
    for case in cases {
        assert!(extract_stops(case).is_none(), "case={case}");
        assert!(parse_gradient(case).is_err(), "case={case}");
    }

    assert_eq!(
        parse_gradient("linear-gradient(#000, #fff"),
        Err(GradientParseError::Unbalanced)
    );
}

#[test]
fn fill_parses_both_forms() {
    assert_eq!(Fill::parse("#fff"), Ok(Fill::Solid(Color::WHITE)));

    let fill = Fill::parse("linear-gradient(#000, #fff)").unwrap();
    assert!(fill.is_gradient());
    assert_eq!(fill.representative_color(), Color::BLACK);
    assert!(Fill::parse("linear-gradient(oops)").is_err());
}

#[test]
fn densified_gradient_keeps_its_ends() {
    let spec = extract_stops("linear-gradient(#000, #fff)").unwrap();
    let dense = spec.with_intermediate_stops(3);

    assert_eq!(dense.colors().len(), 5);
    assert_eq!(dense.colors().first(), Some(&Color::BLACK));
    assert_eq!(dense.colors().last(), Some(&Color::WHITE));
    assert_offsets(&dense.offsets(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
}

#[test]
fn non_finite_channels_are_invalid() {
    for input in ["rgb(nan, 0, 0)", "rgb(0, inf, 0)", "rgba(0, 0, 0, nan)"] {
        assert!(
            matches!(parse_color(input), Err(ColorError::InvalidColor(_))),
            "input={input}"
        );
    }
}

#[test]
fn extended_names_resolve() {
    for (name, rgba) in [
        ("rebeccapurple", [0x66, 0x33, 0x99, 0xff]),
        ("lightgray", [0xd3, 0xd3, 0xd3, 0xff]),
        ("LightGrey", [0xd3, 0xd3, 0xd3, 0xff]),
        ("papayawhip", [0xff, 0xef, 0xd5, 0xff]),
    ] {
        assert_eq!(parse_color(name).unwrap().to_rgba8(), rgba, "name={name}");
    }
}
