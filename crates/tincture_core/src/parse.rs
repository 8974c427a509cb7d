//! CSS color literal parsing
//!
//! Supported forms:
//! - hex: `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`
//! - functional: `rgb(r, g, b)`, `rgba(r, g, b, a)`; channels are 0-255 or
//!   percentages, alpha is 0-1 or a percentage
//! - named colors (all 148 CSS keywords) and `transparent`
//!
//! Parsers are nom combinators generic over the error type. Callers outside
//! this module go through [`parse_color`], which requires the whole input to
//! be consumed.

use nom::{
    branch::alt,
    bytes::complete::{tag_no_case, take_while_m_n},
    character::complete::{char, multispace0},
    combinator::{all_consuming, opt, value},
    error::ParseError as NomParseError,
    number::complete::float,
    sequence::{delimited, preceded},
    IResult,
};

use crate::color::Color;
use crate::error::ColorError;
use crate::gradient::is_gradient_expression;

/// Parse a CSS color literal into a [`Color`]
///
/// Gradient expressions are rejected with [`ColorError::NotSolid`]; anything
/// else that does not parse is [`ColorError::InvalidColor`].
pub fn parse_color(input: &str) -> Result<Color, ColorError> {
    let input = input.trim();

    if is_gradient_expression(input) {
        return Err(ColorError::NotSolid(input.to_string()));
    }

    if let Ok((_, color)) = all_consuming(parse_hex_color::<nom::error::Error<&str>>)(input) {
        return Ok(color);
    }

    if let Ok((_, color)) = all_consuming(parse_rgb_function::<nom::error::Error<&str>>)(input) {
        return Ok(color);
    }

    named_color(input).ok_or_else(|| ColorError::InvalidColor(input.to_string()))
}

/// Returns true when `input` parses as a solid color literal
pub fn is_color_literal(input: &str) -> bool {
    parse_color(input).is_ok()
}

fn ws<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    value((), multispace0)(input)
}

fn comma<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, (), E> {
    value((), delimited(ws, char(','), ws))(input)
}

/// Parse hex color: #RGB, #RGBA, #RRGGBB or #RRGGBBAA
fn parse_hex_color<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, Color, E> {
    let (rest, _) = char('#')(input)?;
    let (rest, hex) = take_while_m_n(3, 8, |c: char| c.is_ascii_hexdigit())(rest)?;

    let digit = |i: usize| -> u8 {
        // take_while_m_n only yields ASCII hex digits
        hex.as_bytes()
            .get(i)
            .and_then(|b| (*b as char).to_digit(16))
            .unwrap_or(0) as u8
    };
    let short = |i: usize| digit(i) * 17;
    let long = |i: usize| digit(i) * 16 + digit(i + 1);

    let color = match hex.len() {
        3 => Color::from_rgba8(short(0), short(1), short(2), 255),
        4 => Color::from_rgba8(short(0), short(1), short(2), short(3)),
        6 => Color::from_rgba8(long(0), long(2), long(4), 255),
        8 => Color::from_rgba8(long(0), long(2), long(4), long(6)),
        _ => {
            return Err(nom::Err::Error(E::from_error_kind(
                input,
                nom::error::ErrorKind::LengthValue,
            )));
        }
    };

    Ok((rest, color))
}

/// A finite number; nom's `float` also accepts `nan` and `inf`
fn finite<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f32, E> {
    let (rest, v) = float(input)?;
    if !v.is_finite() {
        return Err(nom::Err::Error(E::from_error_kind(
            input,
            nom::error::ErrorKind::Float,
        )));
    }
    Ok((rest, v))
}

/// A color channel: 0-255 or a percentage
fn channel<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f32, E> {
    let (input, v) = finite(input)?;
    let (input, pct) = opt(char('%'))(input)?;
    let v = if pct.is_some() { v / 100.0 } else { v / 255.0 };
    Ok((input, v.clamp(0.0, 1.0)))
}

/// An alpha value: 0-1 or a percentage
fn alpha<'a, E: NomParseError<&'a str>>(input: &'a str) -> IResult<&'a str, f32, E> {
    let (input, v) = finite(input)?;
    let (input, pct) = opt(char('%'))(input)?;
    let v = if pct.is_some() { v / 100.0 } else { v };
    Ok((input, v.clamp(0.0, 1.0)))
}

/// Parse rgb(r, g, b[, a]) or rgba(r, g, b[, a])
fn parse_rgb_function<'a, E: NomParseError<&'a str>>(
    input: &'a str,
) -> IResult<&'a str, Color, E> {
    let (input, _) = alt((tag_no_case("rgba"), tag_no_case("rgb")))(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char('(')(input)?;
    let (input, _) = ws(input)?;
    let (input, r) = channel(input)?;
    let (input, _) = comma(input)?;
    let (input, g) = channel(input)?;
    let (input, _) = comma(input)?;
    let (input, b) = channel(input)?;
    let (input, a) = opt(preceded(comma, alpha))(input)?;
    let (input, _) = ws(input)?;
    let (input, _) = char(')')(input)?;

    Ok((input, Color::rgba(r, g, b, a.unwrap_or(1.0))))
}

/// CSS named colors as `0xRRGGBB`, sorted by name for binary search
static NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xF0F8FF),
    ("antiquewhite", 0xFAEBD7),
    ("aqua", 0x00FFFF),
    ("aquamarine", 0x7FFFD4),
    ("azure", 0xF0FFFF),
    ("beige", 0xF5F5DC),
    ("bisque", 0xFFE4C4),
    ("black", 0x000000),
    ("blanchedalmond", 0xFFEBCD),
    ("blue", 0x0000FF),
    ("blueviolet", 0x8A2BE2),
    ("brown", 0xA52A2A),
    ("burlywood", 0xDEB887),
    ("cadetblue", 0x5F9EA0),
    ("chartreuse", 0x7FFF00),
    ("chocolate", 0xD2691E),
    ("coral", 0xFF7F50),
    ("cornflowerblue", 0x6495ED),
    ("cornsilk", 0xFFF8DC),
    ("crimson", 0xDC143C),
    ("cyan", 0x00FFFF),
    ("darkblue", 0x00008B),
    ("darkcyan", 0x008B8B),
    ("darkgoldenrod", 0xB8860B),
    ("darkgray", 0xA9A9A9),
    ("darkgreen", 0x006400),
    ("darkgrey", 0xA9A9A9),
    ("darkkhaki", 0xBDB76B),
    ("darkmagenta", 0x8B008B),
    ("darkolivegreen", 0x556B2F),
    ("darkorange", 0xFF8C00),
    ("darkorchid", 0x9932CC),
    ("darkred", 0x8B0000),
    ("darksalmon", 0xE9967A),
    ("darkseagreen", 0x8FBC8F),
    ("darkslateblue", 0x483D8B),
    ("darkslategray", 0x2F4F4F),
    ("darkslategrey", 0x2F4F4F),
    ("darkturquoise", 0x00CED1),
    ("darkviolet", 0x9400D3),
    ("deeppink", 0xFF1493),
    ("deepskyblue", 0x00BFFF),
    ("dimgray", 0x696969),
    ("dimgrey", 0x696969),
    ("dodgerblue", 0x1E90FF),
    ("firebrick", 0xB22222),
    ("floralwhite", 0xFFFAF0),
    ("forestgreen", 0x228B22),
    ("fuchsia", 0xFF00FF),
    ("gainsboro", 0xDCDCDC),
    ("ghostwhite", 0xF8F8FF),
    ("gold", 0xFFD700),
    ("goldenrod", 0xDAA520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xADFF2F),
    ("grey", 0x808080),
    ("honeydew", 0xF0FFF0),
    ("hotpink", 0xFF69B4),
    ("indianred", 0xCD5C5C),
    ("indigo", 0x4B0082),
    ("ivory", 0xFFFFF0),
    ("khaki", 0xF0E68C),
    ("lavender", 0xE6E6FA),
    ("lavenderblush", 0xFFF0F5),
    ("lawngreen", 0x7CFC00),
    ("lemonchiffon", 0xFFFACD),
    ("lightblue", 0xADD8E6),
    ("lightcoral", 0xF08080),
    ("lightcyan", 0xE0FFFF),
    ("lightgoldenrodyellow", 0xFAFAD2),
    ("lightgray", 0xD3D3D3),
    ("lightgreen", 0x90EE90),
    ("lightgrey", 0xD3D3D3),
    ("lightpink", 0xFFB6C1),
    ("lightsalmon", 0xFFA07A),
    ("lightseagreen", 0x20B2AA),
    ("lightskyblue", 0x87CEFA),
    ("lightslategray", 0x778899),
    ("lightslategrey", 0x778899),
    ("lightsteelblue", 0xB0C4DE),
    ("lightyellow", 0xFFFFE0),
    ("lime", 0x00FF00),
    ("limegreen", 0x32CD32),
    ("linen", 0xFAF0E6),
    ("magenta", 0xFF00FF),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66CDAA),
    ("mediumblue", 0x0000CD),
    ("mediumorchid", 0xBA55D3),
    ("mediumpurple", 0x9370DB),
    ("mediumseagreen", 0x3CB371),
    ("mediumslateblue", 0x7B68EE),
    ("mediumspringgreen", 0x00FA9A),
    ("mediumturquoise", 0x48D1CC),
    ("mediumvioletred", 0xC71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xF5FFFA),
    ("mistyrose", 0xFFE4E1),
    ("moccasin", 0xFFE4B5),
    ("navajowhite", 0xFFDEAD),
    ("navy", 0x000080),
    ("oldlace", 0xFDF5E6),
    ("olive", 0x808000),
    ("olivedrab", 0x6B8E23),
    ("orange", 0xFFA500),
    ("orangered", 0xFF4500),
    ("orchid", 0xDA70D6),
    ("palegoldenrod", 0xEEE8AA),
    ("palegreen", 0x98FB98),
    ("paleturquoise", 0xAFEEEE),
    ("palevioletred", 0xDB7093),
    ("papayawhip", 0xFFEFD5),
    ("peachpuff", 0xFFDAB9),
    ("peru", 0xCD853F),
    ("pink", 0xFFC0CB),
    ("plum", 0xDDA0DD),
    ("powderblue", 0xB0E0E6),
    ("purple", 0x800080),
    ("rebeccapurple", 0x663399),
    ("red", 0xFF0000),
    ("rosybrown", 0xBC8F8F),
    ("royalblue", 0x4169E1),
    ("saddlebrown", 0x8B4513),
    ("salmon", 0xFA8072),
    ("sandybrown", 0xF4A460),
    ("seagreen", 0x2E8B57),
    ("seashell", 0xFFF5EE),
    ("sienna", 0xA0522D),
    ("silver", 0xC0C0C0),
    ("skyblue", 0x87CEEB),
    ("slateblue", 0x6A5ACD),
    ("slategray", 0x708090),
    ("slategrey", 0x708090),
    ("snow", 0xFFFAFA),
    ("springgreen", 0x00FF7F),
    ("steelblue", 0x4682B4),
    ("tan", 0xD2B48C),
    ("teal", 0x008080),
    ("thistle", 0xD8BFD8),
    ("tomato", 0xFF6347),
    ("turquoise", 0x40E0D0),
    ("violet", 0xEE82EE),
    ("wheat", 0xF5DEB3),
    ("white", 0xFFFFFF),
    ("whitesmoke", 0xF5F5F5),
    ("yellow", 0xFFFF00),
    ("yellowgreen", 0x9ACD32),
];

/// Look up a CSS named color (case-insensitive)
///
/// Covers the full CSS Color Module Level 4 keyword set plus `transparent`.
pub fn named_color(name: &str) -> Option<Color> {
    let name = name.trim().to_ascii_lowercase();
    if name == "transparent" {
        return Some(Color::TRANSPARENT);
    }
    NAMED_COLORS
        .binary_search_by(|(key, _)| (*key).cmp(name.as_str()))
        .ok()
        .map(|i| Color::from_hex(NAMED_COLORS[i].1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        assert_eq!(parse_color("#fff").unwrap().to_rgba8(), [255, 255, 255, 255]);
        assert_eq!(parse_color("#f008").unwrap().to_rgba8(), [255, 0, 0, 136]);
        assert_eq!(
            parse_color("#3366FF").unwrap().to_rgba8(),
            [0x33, 0x66, 0xFF, 255]
        );
        assert_eq!(
            parse_color("#3366ff80").unwrap().to_rgba8(),
            [0x33, 0x66, 0xFF, 0x80]
        );
    }

    #[test]
    fn test_parse_hex_rejects_bad_lengths() {
        assert!(parse_color("#12345").is_err());
        assert!(parse_color("#1234567").is_err());
        assert!(parse_color("#123456789").is_err());
        assert!(parse_color("#ggg").is_err());
    }

    #[test]
    fn test_parse_rgb_and_rgba() {
        let c = parse_color("rgb(51, 102, 255)").unwrap();
        assert_eq!(c.to_rgba8(), [51, 102, 255, 255]);

        let c = parse_color("rgba(255,128,0,0.5)").unwrap();
        assert_eq!(c.to_rgba8(), [255, 128, 0, 128]);

        let c = parse_color("RGB( 100%, 0%, 50% )").unwrap();
        assert_eq!(c.to_rgba8(), [255, 0, 128, 255]);

        let c = parse_color("rgba(0, 0, 0, 40%)").unwrap();
        assert!((c.a - 0.4).abs() < 0.001);
    }

    #[test]
    fn test_parse_rgb_rejects_trailing_garbage() {
        assert!(parse_color("rgb(1, 2, 3) x").is_err());
        assert!(parse_color("rgb(1, 2)").is_err());
    }

    #[test]
    fn test_parse_named() {
        assert_eq!(parse_color("Red").unwrap(), Color::RED);
        assert_eq!(parse_color("transparent").unwrap(), Color::TRANSPARENT);
        assert_eq!(parse_color("grey").unwrap(), Color::GRAY);
    }

    #[test]
    fn test_parse_extended_named() {
        assert_eq!(parse_color("rebeccapurple").unwrap().to_rgba8(), [0x66, 0x33, 0x99, 255]);
        assert_eq!(parse_color("LightGray").unwrap(), parse_color("lightgrey").unwrap());
        assert_eq!(parse_color("lightgray").unwrap().to_rgba8(), [0xD3, 0xD3, 0xD3, 255]);
        assert_eq!(
            parse_color("cornflowerblue").unwrap().to_rgba8(),
            [0x64, 0x95, 0xED, 255]
        );
        assert_eq!(named_color("green"), Some(Color::GREEN));
        assert_eq!(named_color("lime"), Some(Color::rgb(0.0, 1.0, 0.0)));
        assert_eq!(named_color("notacolor"), None);
    }

    #[test]
    fn test_named_table_is_sorted_and_complete() {
        assert_eq!(NAMED_COLORS.len(), 148);
        assert!(NAMED_COLORS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(NAMED_COLORS.iter().all(|(_, rgb)| *rgb <= 0xFFFFFF));
    }

    #[test]
    fn test_parse_rejects_non_finite_numbers() {
        for input in [
            "rgb(nan, 0, 0)",
            "rgb(inf, 0, 0)",
            "rgb(0, -inf, 0)",
            "rgb(0, 0, infinity)",
            "rgba(0, 0, 0, nan)",
            "rgba(0, 0, 0, inf)",
            "rgba(0, 0, 0, NaN%)",
        ] {
            assert_eq!(
                parse_color(input),
                Err(ColorError::InvalidColor(input.to_string())),
                "input={input}"
            );
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            parse_color("notacolor"),
            Err(ColorError::InvalidColor("notacolor".to_string()))
        );
        assert!(matches!(
            parse_color("linear-gradient(red, blue)"),
            Err(ColorError::NotSolid(_))
        ));
        assert!(!is_color_literal(""));
    }
}
