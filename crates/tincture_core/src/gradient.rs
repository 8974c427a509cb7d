//! Gradient expressions and fills
//!
//! Theme `background`/`surface` slots hold either a flat color or a CSS
//! gradient expression. [`extract_stops`] turns the latter into a
//! [`GradientSpec`] and never fails loudly: malformed input is logged at
//! DEBUG level and yields `None`, so the caller renders a flat fill instead.
//!
//! Supported syntax:
//! - `linear-gradient(135deg, #667eea 0%, #764ba2 100%)`
//! - `linear-gradient(to right, red, blue)`
//! - `linear-gradient(to bottom right, #fff, #000)`
//! - `radial-gradient(circle at center, red, blue)`
//!
//! Stop positions must be percentages (`#fff 40%`). Lengths such as `20px`
//! or `1em` need the element's size, which is unknown here, so a stop with
//! a non-percentage position is an invalid stop and the whole gradient is
//! rejected. Stops may also omit the position and are then spread evenly.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use smallvec::{smallvec, SmallVec};
use tracing::debug;

use crate::color::Color;
use crate::error::{ColorError, GradientParseError};
use crate::parse::parse_color;

/// Default direction for linear gradients (`to bottom`)
pub const DEFAULT_LINEAR_ANGLE: f32 = 180.0;

/// A gradient stop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub color: Color,
    pub offset: f32, // 0.0 to 1.0
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self { color, offset }
    }
}

/// Gradient geometry
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradientKind {
    /// CSS angle, clockwise from "to top"
    Linear { angle_deg: f32 },
    /// Center in object bounding box space (0..1)
    Radial { center_x: f32, center_y: f32 },
}

/// Parsed gradient: geometry plus ordered stops (always at least two)
#[derive(Clone, Debug, PartialEq)]
pub struct GradientSpec {
    pub kind: GradientKind,
    pub stops: SmallVec<[GradientStop; 4]>,
}

impl GradientSpec {
    pub fn new(kind: GradientKind, stops: impl IntoIterator<Item = GradientStop>) -> Self {
        Self {
            kind,
            stops: stops.into_iter().collect(),
        }
    }

    /// Create a simple linear gradient between two colors
    pub fn linear_simple(angle_deg: f32, from: Color, to: Color) -> Self {
        Self {
            kind: GradientKind::Linear { angle_deg },
            stops: smallvec![GradientStop::new(0.0, from), GradientStop::new(1.0, to)],
        }
    }

    /// Angle in degrees for linear gradients
    pub fn angle(&self) -> Option<f32> {
        match self.kind {
            GradientKind::Linear { angle_deg } => Some(angle_deg),
            GradientKind::Radial { .. } => None,
        }
    }

    /// Stop colors in declaration order
    pub fn colors(&self) -> Vec<Color> {
        self.stops.iter().map(|s| s.color).collect()
    }

    /// Stop offsets in declaration order
    pub fn offsets(&self) -> Vec<f32> {
        self.stops.iter().map(|s| s.offset).collect()
    }

    /// First stop color, used where a single representative color is needed
    pub fn first_color(&self) -> Color {
        self.stops.first().map(|s| s.color).unwrap_or_default()
    }

    /// Copy with every stop set to `alpha`
    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self {
            kind: self.kind,
            stops: self
                .stops
                .iter()
                .map(|s| GradientStop::new(s.offset, s.color.with_alpha(alpha)))
                .collect(),
        }
    }

    /// Insert `count` evenly spaced interpolated stops between each pair
    ///
    /// Native gradient renderers interpolate in sRGB with visible banding on
    /// long spans; extra stops keep the ramp smooth.
    pub fn with_intermediate_stops(&self, count: usize) -> Self {
        if count == 0 {
            return self.clone();
        }

        let mut stops: SmallVec<[GradientStop; 4]> = SmallVec::new();
        for pair in self.stops.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            stops.push(from);
            for i in 1..=count {
                let t = i as f32 / (count + 1) as f32;
                stops.push(GradientStop::new(
                    from.offset + (to.offset - from.offset) * t,
                    Color::lerp(&from.color, &to.color, t),
                ));
            }
        }
        if let Some(last) = self.stops.last() {
            stops.push(*last);
        }

        Self {
            kind: self.kind,
            stops,
        }
    }

    /// CSS form of the gradient
    pub fn to_css(&self) -> String {
        let stops = self
            .stops
            .iter()
            .map(|s| format!("{} {}%", s.color, round_pct(s.offset)))
            .collect::<Vec<_>>()
            .join(", ");
        match self.kind {
            GradientKind::Linear { angle_deg } => {
                format!("linear-gradient({}deg, {})", angle_deg, stops)
            }
            GradientKind::Radial { center_x, center_y } => format!(
                "radial-gradient(circle at {}% {}%, {})",
                round_pct(center_x),
                round_pct(center_y),
                stops
            ),
        }
    }
}

impl fmt::Display for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn round_pct(v: f32) -> f32 {
    (v * 10000.0).round() / 100.0
}

/// A background: flat color or gradient
#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    Solid(Color),
    Gradient(GradientSpec),
}

impl Fill {
    /// Parse a color literal or gradient expression
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let input = input.trim();
        if is_gradient_expression(input) {
            return parse_gradient(input)
                .map(Fill::Gradient)
                .map_err(|_| ColorError::InvalidColor(input.to_string()));
        }
        parse_color(input).map(Fill::Solid)
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Fill::Gradient(_))
    }

    pub fn as_solid(&self) -> Option<Color> {
        match self {
            Fill::Solid(c) => Some(*c),
            Fill::Gradient(_) => None,
        }
    }

    pub fn as_gradient(&self) -> Option<&GradientSpec> {
        match self {
            Fill::Solid(_) => None,
            Fill::Gradient(g) => Some(g),
        }
    }

    /// The solid color, or the first stop of a gradient
    pub fn representative_color(&self) -> Color {
        match self {
            Fill::Solid(c) => *c,
            Fill::Gradient(g) => g.first_color(),
        }
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Fill::Solid(color)
    }
}

impl From<GradientSpec> for Fill {
    fn from(gradient: GradientSpec) -> Self {
        Fill::Gradient(gradient)
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Solid(c) => c.fmt(f),
            Fill::Gradient(g) => g.fmt(f),
        }
    }
}

impl Serialize for Fill {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Fill {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Fill::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Whether `input` looks like a CSS gradient function call
pub fn is_gradient_expression(input: &str) -> bool {
    let lower = input.trim_start().to_ascii_lowercase();
    lower.contains("-gradient(")
        && (lower.starts_with("linear-")
            || lower.starts_with("radial-")
            || lower.starts_with("conic-")
            || lower.starts_with("repeating-"))
}

/// Extract a gradient from a color-or-gradient expression
///
/// Returns `None` for plain colors and for malformed gradients; the latter
/// are logged.
pub fn extract_stops(input: &str) -> Option<GradientSpec> {
    if !is_gradient_expression(input) {
        return None;
    }
    match parse_gradient(input) {
        Ok(spec) => Some(spec),
        Err(err) => {
            debug!(input, error = %err, "rejected gradient expression");
            None
        }
    }
}

/// Parse a gradient expression, reporting why it was rejected
pub fn parse_gradient(input: &str) -> Result<GradientSpec, GradientParseError> {
    let trimmed = input.trim();
    let lower = trimmed.to_ascii_lowercase();

    if let Some(inner) = function_body(trimmed, &lower, "linear-gradient(")? {
        return parse_linear_gradient(inner);
    }
    if let Some(inner) = function_body(trimmed, &lower, "radial-gradient(")? {
        return parse_radial_gradient(inner);
    }

    if is_gradient_expression(trimmed) {
        let name = lower.split('(').next().unwrap_or_default().to_string();
        return Err(GradientParseError::Unsupported(name));
    }
    Err(GradientParseError::NotAGradient)
}

/// Strip `prefix(` ... `)` and return the body
fn function_body<'a>(
    input: &'a str,
    lower: &str,
    prefix: &str,
) -> Result<Option<&'a str>, GradientParseError> {
    if !lower.starts_with(prefix) {
        return Ok(None);
    }
    let inner = input[prefix.len()..]
        .strip_suffix(')')
        .ok_or(GradientParseError::Unbalanced)?;
    Ok(Some(inner.trim()))
}

fn parse_linear_gradient(inner: &str) -> Result<GradientSpec, GradientParseError> {
    let parts = split_gradient_parts(inner)?;
    let first = parts
        .first()
        .ok_or(GradientParseError::TooFewStops(0))?;

    let (angle_deg, color_start_idx) = parse_gradient_direction(first)?;
    let stops = parse_color_stops(&parts[color_start_idx..])?;

    Ok(GradientSpec {
        kind: GradientKind::Linear { angle_deg },
        stops,
    })
}

fn parse_radial_gradient(inner: &str) -> Result<GradientSpec, GradientParseError> {
    let parts = split_gradient_parts(inner)?;
    let first = parts
        .first()
        .ok_or(GradientParseError::TooFewStops(0))?
        .to_ascii_lowercase();

    let mut center = (0.5, 0.5);
    let mut color_start_idx = 0;

    if first.starts_with("circle") || first.starts_with("ellipse") || first.starts_with("at ") {
        if let Some(at_pos) = first.find("at ") {
            let pos_str = &first[at_pos + 3..];
            center = parse_position(pos_str)
                .ok_or_else(|| GradientParseError::InvalidDirection(first.clone()))?;
        }
        color_start_idx = 1;
    }

    let stops = parse_color_stops(&parts[color_start_idx..])?;

    Ok(GradientSpec {
        kind: GradientKind::Radial {
            center_x: center.0,
            center_y: center.1,
        },
        stops,
    })
}

/// Split gradient arguments by commas, respecting parentheses for rgb()/rgba()
fn split_gradient_parts(input: &str) -> Result<Vec<String>, GradientParseError> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut paren_depth: i32 = 0;

    for c in input.chars() {
        match c {
            '(' => {
                paren_depth += 1;
                current.push(c);
            }
            ')' => {
                paren_depth -= 1;
                if paren_depth < 0 {
                    return Err(GradientParseError::Unbalanced);
                }
                current.push(c);
            }
            ',' if paren_depth == 0 => {
                parts.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }

    if paren_depth != 0 {
        return Err(GradientParseError::Unbalanced);
    }

    parts.push(current.trim().to_string());
    if parts.iter().any(|p| p.is_empty()) {
        // `red,,blue` or a trailing comma
        return Err(GradientParseError::InvalidStop(input.to_string()));
    }

    Ok(parts)
}

/// Parse gradient direction (angle or "to <direction>")
/// Returns (angle_in_degrees, color_start_index)
fn parse_gradient_direction(first_part: &str) -> Result<(f32, usize), GradientParseError> {
    let part = first_part.trim().to_ascii_lowercase();

    if let Some(angle) = parse_angle_value(&part).filter(|a| a.is_finite()) {
        return Ok((angle, 1));
    }

    if let Some(direction) = part.strip_prefix("to ") {
        let words: Vec<&str> = direction.split_whitespace().collect();
        let angle = match words.as_slice() {
            ["top"] => 0.0,
            ["right"] => 90.0,
            ["bottom"] => 180.0,
            ["left"] => 270.0,
            ["top", "right"] | ["right", "top"] => 45.0,
            ["bottom", "right"] | ["right", "bottom"] => 135.0,
            ["bottom", "left"] | ["left", "bottom"] => 225.0,
            ["top", "left"] | ["left", "top"] => 315.0,
            _ => return Err(GradientParseError::InvalidDirection(part)),
        };
        return Ok((angle, 1));
    }

    // Not a direction - default to "to bottom" and treat first part as a color stop
    Ok((DEFAULT_LINEAR_ANGLE, 0))
}

/// Parse angle value (e.g., "45deg", "0.5turn", "100grad", "1.57rad")
fn parse_angle_value(input: &str) -> Option<f32> {
    let input = input.trim();

    if let Some(deg_str) = input.strip_suffix("deg") {
        return deg_str.trim().parse::<f32>().ok();
    }
    if let Some(turn_str) = input.strip_suffix("turn") {
        return turn_str.trim().parse::<f32>().ok().map(|t| t * 360.0);
    }
    if let Some(grad_str) = input.strip_suffix("grad") {
        return grad_str.trim().parse::<f32>().ok().map(|g| g * 0.9);
    }
    if let Some(rad_str) = input.strip_suffix("rad") {
        return rad_str
            .trim()
            .parse::<f32>()
            .ok()
            .map(|r| r.to_degrees());
    }

    None
}

/// Parse color stops from gradient parts, filling in missing positions
fn parse_color_stops(
    parts: &[String],
) -> Result<SmallVec<[GradientStop; 4]>, GradientParseError> {
    if parts.len() < 2 {
        return Err(GradientParseError::TooFewStops(parts.len()));
    }

    let mut colors = Vec::with_capacity(parts.len());
    let mut positions = Vec::with_capacity(parts.len());
    for part in parts {
        let (color_str, position) = split_color_and_position(part);
        let color =
            parse_color(color_str).map_err(|_| GradientParseError::InvalidStop(part.clone()))?;
        colors.push(color);
        positions.push(position);
    }

    let offsets = distribute_stop_positions(&positions);
    Ok(colors
        .into_iter()
        .zip(offsets)
        .map(|(color, offset)| GradientStop::new(offset, color))
        .collect())
}

/// Split "#667eea 50%" into ("#667eea", Some(0.5))
///
/// Only finite percentages count as positions. Any other trailing token is
/// left on the color, where it fails color parsing.
fn split_color_and_position(part: &str) -> (&str, Option<f32>) {
    let part = part.trim();

    // The position is the last whitespace-separated token outside parentheses
    if let Some(space_pos) = part.rfind(char::is_whitespace) {
        let tail = &part[space_pos + 1..];
        if !tail.contains(')') {
            if let Some(pct) = tail.strip_suffix('%') {
                if let Some(value) = pct.parse::<f32>().ok().filter(|v| v.is_finite()) {
                    return (part[..space_pos].trim(), Some(value / 100.0));
                }
            }
        }
    }

    (part, None)
}

/// Resolve explicit/implicit positions into monotonic offsets in [0, 1]
///
/// Missing first/last positions become 0 and 1, runs of missing positions are
/// spread evenly between their explicit neighbours, and a position smaller
/// than an earlier one is raised to it.
fn distribute_stop_positions(positions: &[Option<f32>]) -> Vec<f32> {
    let n = positions.len();
    let mut resolved: Vec<Option<f32>> = positions
        .iter()
        .map(|p| p.map(|v| v.clamp(0.0, 1.0)))
        .collect();

    if let Some(first) = resolved.first_mut() {
        first.get_or_insert(0.0);
    }
    if let Some(last) = resolved.last_mut() {
        last.get_or_insert(1.0);
    }

    let mut max_seen = 0.0f32;
    for slot in resolved.iter_mut().flatten() {
        max_seen = max_seen.max(*slot);
        *slot = max_seen;
    }

    let mut out = vec![0.0; n];
    let mut i = 0;
    while i < n {
        if let Some(v) = resolved[i] {
            out[i] = v;
            i += 1;
            continue;
        }
        // i > 0 here: the first slot is always explicit
        let start = i - 1;
        let mut end = i;
        while resolved[end].is_none() {
            end += 1;
        }
        let (from, to) = (out[start], resolved[end].unwrap_or(1.0));
        let span = (end - start) as f32;
        for (k, slot) in out.iter_mut().enumerate().take(end).skip(i) {
            *slot = from + (to - from) * (k - start) as f32 / span;
        }
        i = end;
    }

    out
}

/// Parse position keywords (for radial gradients)
fn parse_position(input: &str) -> Option<(f32, f32)> {
    let input = input.trim();

    match input {
        "center" => return Some((0.5, 0.5)),
        "top" => return Some((0.5, 0.0)),
        "bottom" => return Some((0.5, 1.0)),
        "left" => return Some((0.0, 0.5)),
        "right" => return Some((1.0, 0.5)),
        "top left" | "left top" => return Some((0.0, 0.0)),
        "top right" | "right top" => return Some((1.0, 0.0)),
        "bottom left" | "left bottom" => return Some((0.0, 1.0)),
        "bottom right" | "right bottom" => return Some((1.0, 1.0)),
        _ => {}
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() == 2 {
        let x = parse_position_value(parts[0])?;
        let y = parse_position_value(parts[1])?;
        return Some((x, y));
    }

    None
}

fn parse_position_value(input: &str) -> Option<f32> {
    if let Some(pct_str) = input.strip_suffix('%') {
        return pct_str.trim().parse::<f32>().ok().map(|p| p / 100.0);
    }
    match input {
        "left" | "top" => Some(0.0),
        "center" => Some(0.5),
        "right" | "bottom" => Some(1.0),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 0.001
    }

    #[test]
    fn test_plain_color_is_not_a_gradient() {
        assert!(extract_stops("#ff0000").is_none());
        assert!(extract_stops("primary").is_none());
        assert!(extract_stops("").is_none());
    }

    #[test]
    fn test_two_stop_linear_defaults() {
        let spec = extract_stops("linear-gradient(red, blue)").unwrap();
        assert_eq!(spec.colors(), vec![Color::RED, Color::BLUE]);
        assert_eq!(spec.offsets(), vec![0.0, 1.0]);
        assert_eq!(spec.angle(), Some(DEFAULT_LINEAR_ANGLE));
    }

    #[test]
    fn test_linear_gradient_angle() {
        let spec = extract_stops("linear-gradient(135deg, #667eea 0%, #764ba2 100%)").unwrap();
        assert_eq!(spec.angle(), Some(135.0));
        assert_eq!(spec.stops.len(), 2);
        assert_eq!(spec.stops[0].color.to_rgba8(), [0x66, 0x7e, 0xea, 255]);
    }

    #[test]
    fn test_linear_gradient_to_keywords() {
        let cases = [
            ("to right", 90.0),
            ("to bottom", 180.0),
            ("to bottom right", 135.0),
            ("to left top", 315.0),
        ];
        for (dir, expected) in cases {
            let spec = extract_stops(&format!("linear-gradient({dir}, red, blue)")).unwrap();
            assert_eq!(spec.angle(), Some(expected), "{dir}");
        }
    }

    #[test]
    fn test_angle_units() {
        let spec = extract_stops("linear-gradient(0.25turn, red, blue)").unwrap();
        assert!(approx(spec.angle().unwrap(), 90.0));
        let spec = extract_stops("linear-gradient(100grad, red, blue)").unwrap();
        assert!(approx(spec.angle().unwrap(), 90.0));
    }

    #[test]
    fn test_implied_positions_are_even() {
        let spec = extract_stops("linear-gradient(to bottom, red, yellow, green)").unwrap();
        assert_eq!(spec.offsets(), vec![0.0, 0.5, 1.0]);
    }

    #[test]
    fn test_implied_positions_between_explicit_ones() {
        let spec =
            extract_stops("linear-gradient(red 20%, yellow, lime, blue 80%)").unwrap();
        let offsets = spec.offsets();
        assert!(approx(offsets[0], 0.2));
        assert!(approx(offsets[1], 0.4));
        assert!(approx(offsets[2], 0.6));
        assert!(approx(offsets[3], 0.8));
    }

    #[test]
    fn test_positions_are_monotonic_and_clamped() {
        let spec = extract_stops("linear-gradient(red 60%, blue 20%, lime 150%)").unwrap();
        assert_eq!(spec.offsets(), vec![0.6, 0.6, 1.0]);
    }

    #[test]
    fn test_functional_colors_inside_stops() {
        let spec = extract_stops(
            "linear-gradient(90deg, rgba(255, 0, 0, 0.5) 25%, rgb(0, 0, 255) 75%)",
        )
        .unwrap();
        assert_eq!(spec.stops.len(), 2);
        assert!(approx(spec.stops[0].color.a, 0.5));
        assert_eq!(spec.offsets(), vec![0.25, 0.75]);
    }

    #[test]
    fn test_radial_gradient() {
        let spec = extract_stops("radial-gradient(circle at 25% 75%, red, blue)").unwrap();
        assert_eq!(
            spec.kind,
            GradientKind::Radial {
                center_x: 0.25,
                center_y: 0.75
            }
        );
        assert_eq!(spec.angle(), None);
    }

    #[test]
    fn test_malformed_gradients_yield_none() {
        for input in [
            "linear-gradient(garbage)",
            "linear-gradient(red)",
            "linear-gradient(45deg, red, notacolor)",
            "linear-gradient(to nowhere, red, blue)",
            "linear-gradient(red, blue",
            "linear-gradient(rgb(1,2,3, red, blue)",
            "linear-gradient(red,, blue)",
            "conic-gradient(red, blue)",
        ] {
            assert!(extract_stops(input).is_none(), "{input}");
        }
    }

    #[test]
    fn test_parse_gradient_reports_reason() {
        assert_eq!(
            parse_gradient("linear-gradient(red)"),
            Err(GradientParseError::TooFewStops(1))
        );
        assert_eq!(parse_gradient("red"), Err(GradientParseError::NotAGradient));
        assert!(matches!(
            parse_gradient("conic-gradient(red, blue)"),
            Err(GradientParseError::Unsupported(_))
        ));
    }

    #[test]
    fn test_intermediate_stops() {
        let spec = GradientSpec::linear_simple(90.0, Color::BLACK, Color::WHITE);
        let dense = spec.with_intermediate_stops(3);
        assert_eq!(dense.stops.len(), 5);
        assert_eq!(dense.offsets(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(approx(dense.stops[2].color.r, 0.5));
        assert_eq!(spec.with_intermediate_stops(0), spec);
    }

    #[test]
    fn test_fill_parse_and_display() {
        let fill = Fill::parse("linear-gradient(90deg, #000000 0%, #ffffff 100%)").unwrap();
        assert!(fill.is_gradient());
        assert_eq!(
            fill.to_string(),
            "linear-gradient(90deg, #000000 0%, #ffffff 100%)"
        );
        assert_eq!(Fill::parse(&fill.to_string()).unwrap(), fill);

        let solid = Fill::parse("#3366ff").unwrap();
        assert_eq!(solid.as_solid(), Some(Color::from_hex(0x3366FF)));
        assert!(Fill::parse("linear-gradient(garbage)").is_err());
    }

    #[test]
    fn test_gradient_with_alpha() {
        let spec = GradientSpec::linear_simple(90.0, Color::BLACK, Color::WHITE).with_alpha(0.2);
        assert!(spec.stops.iter().all(|s| approx(s.color.a, 0.2)));
    }

    #[test]
    fn test_only_percentage_positions_are_accepted() {
        for case in [
            "linear-gradient(#000 10px, #fff)",
            "linear-gradient(#000, #fff 2em)",
            "linear-gradient(#000 nan%, #fff)",
            "linear-gradient(#000 inf%, #fff)",
            "linear-gradient(nandeg, #000, #fff)",
        ] {
            assert!(extract_stops(case).is_none(), "case={case}");
            assert!(
                matches!(parse_gradient(case), Err(GradientParseError::InvalidStop(_))),
                "case={case}"
            );
        }

        let spec = extract_stops("linear-gradient(rgb(0, 0, 0) 25%, #fff)").unwrap();
        assert!(approx(spec.stops[0].offset, 0.25));
    }
}
