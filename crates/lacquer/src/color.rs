//! Color values and deterministic color transforms.
//!
//! Supports multiple color formats:
//!
//! - Named colors: `red`, `green`, `blue`, etc.
//! - RGB hex: `"#ff6b35"` or `"#fff"` (3 or 6 digit), `"#ff6b35cc"` with alpha
//! - Functional notation: `rgb(38, 41, 48)` and `rgba(38, 41, 48, 128)`
//! - RGB tuple: `[255, 107, 53]` (theme files)
//!
//! # Example
//!
//! ```rust
//! use lacquer::Color;
//!
//! let hex = Color::parse("#ff6b35").unwrap();
//! assert_eq!(hex, Color::rgb(255, 107, 53));
//!
//! let functional = Color::parse("rgb(38, 41, 48)").unwrap();
//! assert_eq!(functional.to_string(), "rgb(38,41,48)");
//!
//! // Transforms are pure: same input, same output, channels stay in range.
//! assert_eq!(Color::rgb(100, 100, 100).darken(20.0), Color::rgb(80, 80, 80));
//! assert_eq!(Color::rgb(100, 100, 100).lighten(100.0), Color::rgb(255, 255, 255));
//! ```

use std::fmt;
use std::str::FromStr;

/// An RGB or RGBA color with channels in `0..=255`.
///
/// The alpha channel is optional: colors without one render as `rgb(r,g,b)`,
/// colors with one as `rgba(r,g,b,a)`. This distinction is preserved through
/// transforms so that themes control which form ends up in rendered styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Optional alpha channel.
    pub a: Option<u8>,
}

impl Color {
    /// Creates an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: None }
    }

    /// Creates an RGBA color with an explicit alpha channel.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a: Some(a) }
    }

    /// Parses a color from a string value.
    ///
    /// Supports:
    /// - Named colors: `red`, `green`, `blue`, etc.
    /// - Hex codes: `#ff6b35`, `#fff`, `#ff6b35cc`
    /// - Functional notation: `rgb(38, 41, 48)`, `rgba(38, 41, 48, 128)`
    pub fn parse(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if s.starts_with("rgba(") && s.ends_with(')') {
            return Self::parse_functional(&s[5..s.len() - 1], true);
        }

        if s.starts_with("rgb(") && s.ends_with(')') {
            return Self::parse_functional(&s[4..s.len() - 1], false);
        }

        Self::parse_named(s)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Result<Self, String> {
        let channel = |range: &str| {
            u8::from_str_radix(range, 16).map_err(|_| format!("Invalid hex color: #{}", hex))
        };
        match hex.len() {
            // 3-digit hex: #rgb -> #rrggbb
            3 => Ok(Self::rgb(
                channel(&hex[0..1])? * 17,
                channel(&hex[1..2])? * 17,
                channel(&hex[2..3])? * 17,
            )),
            // 6-digit hex: #rrggbb
            6 => Ok(Self::rgb(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            // 8-digit hex: #rrggbbaa
            8 => Ok(Self::rgba(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
                channel(&hex[6..8])?,
            )),
            _ => Err(format!(
                "Invalid hex color: #{} (must be 3, 6 or 8 digits)",
                hex
            )),
        }
    }

    /// Parses the inside of `rgb(...)` / `rgba(...)` notation.
    fn parse_functional(inner: &str, with_alpha: bool) -> Result<Self, String> {
        let expected = if with_alpha { 4 } else { 3 };
        let parts: Vec<&str> = inner.split(',').map(|p| p.trim()).collect();
        if parts.len() != expected {
            return Err(format!(
                "rgb{}() requires exactly {} components, got {}",
                if with_alpha { "a" } else { "" },
                expected,
                parts.len()
            ));
        }

        let mut channels = [0u8; 4];
        for (i, part) in parts.iter().enumerate() {
            let n = part
                .parse::<u64>()
                .map_err(|_| format!("Invalid color component '{}': expected a number", part))?;
            if n > 255 {
                return Err(format!("Color component {} out of range (0-255)", n));
            }
            channels[i] = n as u8;
        }

        if with_alpha {
            Ok(Self::rgba(channels[0], channels[1], channels[2], channels[3]))
        } else {
            Ok(Self::rgb(channels[0], channels[1], channels[2]))
        }
    }

    /// Parses a named color.
    fn parse_named(name: &str) -> Result<Self, String> {
        let color = match name.to_lowercase().as_str() {
            "black" => Self::rgb(0, 0, 0),
            "white" => Self::rgb(255, 255, 255),
            "red" => Self::rgb(255, 0, 0),
            "green" => Self::rgb(0, 128, 0),
            "blue" => Self::rgb(0, 0, 255),
            "yellow" => Self::rgb(255, 255, 0),
            "magenta" => Self::rgb(255, 0, 255),
            "cyan" => Self::rgb(0, 255, 255),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            _ => return Err(format!("Unknown color name: {}", name)),
        };
        Ok(color)
    }

    /// Parses a color definition from a YAML value.
    ///
    /// Supports:
    /// - Strings: named colors, hex codes, functional notation
    /// - Sequences: `[r, g, b]` or `[r, g, b, a]` tuples
    pub fn parse_value(value: &serde_yaml::Value) -> Result<Self, String> {
        match value {
            serde_yaml::Value::String(s) => Self::parse(s),
            serde_yaml::Value::Sequence(seq) => {
                let components: Result<Vec<u64>, String> = seq
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        v.as_u64()
                            .ok_or_else(|| format!("Color component {} is not a number", i))
                    })
                    .collect();
                Self::from_components(&components?)
            }
            _ => Err(format!("Invalid color value: {:?}", value)),
        }
    }

    /// Parses a color definition from a JSON value.
    ///
    /// Same formats as [`parse_value`](Self::parse_value), for themes loaded
    /// from JSON manifests.
    pub fn parse_json_value(value: &serde_json::Value) -> Result<Self, String> {
        match value {
            serde_json::Value::String(s) => Self::parse(s),
            serde_json::Value::Array(seq) => {
                let components: Result<Vec<u64>, String> = seq
                    .iter()
                    .enumerate()
                    .map(|(i, v)| {
                        v.as_u64()
                            .ok_or_else(|| format!("Color component {} is not a number", i))
                    })
                    .collect();
                Self::from_components(&components?)
            }
            _ => Err(format!("Invalid color value: {}", value)),
        }
    }

    /// Builds a color from a 3- or 4-element component tuple.
    fn from_components(components: &[u64]) -> Result<Self, String> {
        if components.len() != 3 && components.len() != 4 {
            return Err(format!(
                "Color tuple must have 3 or 4 values, got {}",
                components.len()
            ));
        }
        for &n in components {
            if n > 255 {
                return Err(format!("Color component {} out of range (0-255)", n));
            }
        }
        let mut color = Self::rgb(components[0] as u8, components[1] as u8, components[2] as u8);
        if let Some(&a) = components.get(3) {
            color.a = Some(a as u8);
        }
        Ok(color)
    }

    /// Reduces the lightness of this color by `percent`.
    ///
    /// Each channel is scaled by `1 - percent/100`, rounded, and clamped to
    /// the valid range. `darken(c, 0)` is `c` unchanged; `darken(c, 100)` is
    /// black. The alpha channel is preserved.
    ///
    /// Defined for `percent` in `0..=100`; results are clamped to `0..=255`
    /// for any finite input, so repeated application always stays in range.
    pub fn darken(self, percent: f64) -> Self {
        let ratio = 1.0 - percent / 100.0;
        Self {
            r: scale_channel(self.r as f64 * ratio),
            g: scale_channel(self.g as f64 * ratio),
            b: scale_channel(self.b as f64 * ratio),
            a: self.a,
        }
    }

    /// Increases the lightness of this color by `percent`.
    ///
    /// Each channel moves toward 255 by `percent` of its remaining headroom,
    /// rounded and clamped. `lighten(c, 0)` is `c` unchanged; `lighten(c, 100)`
    /// is white. The alpha channel is preserved.
    pub fn lighten(self, percent: f64) -> Self {
        let ratio = percent / 100.0;
        let lift = |c: u8| scale_channel(c as f64 + (255.0 - c as f64) * ratio);
        Self {
            r: lift(self.r),
            g: lift(self.g),
            b: lift(self.b),
            a: self.a,
        }
    }

    /// Returns this color with the alpha channel set to `alpha`.
    pub fn with_opacity(self, alpha: u8) -> Self {
        Self {
            a: Some(alpha),
            ..self
        }
    }
}

/// Rounds a channel value and clamps it to the valid range.
fn scale_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.a {
            Some(a) => write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, a),
            None => write!(f, "rgb({},{},{})", self.r, self.g, self.b),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // =========================================================================
    // Parsing tests
    // =========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("black").unwrap(), Color::rgb(0, 0, 0));
        assert_eq!(Color::parse("white").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse("red").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("cyan").unwrap(), Color::rgb(0, 255, 255));
    }

    #[test]
    fn test_parse_named_case_insensitive() {
        assert_eq!(Color::parse("RED").unwrap(), Color::rgb(255, 0, 0));
        assert_eq!(Color::parse("Red").unwrap(), Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_parse_gray_aliases() {
        assert_eq!(Color::parse("gray").unwrap(), Color::parse("grey").unwrap());
    }

    #[test]
    fn test_parse_unknown_name() {
        assert!(Color::parse("chartreuse").is_err());
        assert!(Color::parse("").is_err());
    }

    #[test]
    fn test_parse_hex_6_digit() {
        assert_eq!(Color::parse("#ff6b35").unwrap(), Color::rgb(255, 107, 53));
        assert_eq!(Color::parse("#000000").unwrap(), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_parse_hex_3_digit() {
        assert_eq!(Color::parse("#fff").unwrap(), Color::rgb(255, 255, 255));
        assert_eq!(Color::parse("#f80").unwrap(), Color::rgb(255, 136, 0));
    }

    #[test]
    fn test_parse_hex_8_digit_with_alpha() {
        assert_eq!(
            Color::parse("#ff6b35cc").unwrap(),
            Color::rgba(255, 107, 53, 204)
        );
    }

    #[test]
    fn test_parse_hex_case_insensitive() {
        assert_eq!(Color::parse("#FF6B35").unwrap(), Color::rgb(255, 107, 53));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert!(Color::parse("#ff").is_err());
        assert!(Color::parse("#ffff").is_err());
        assert!(Color::parse("#gggggg").is_err());
    }

    #[test]
    fn test_parse_functional_rgb() {
        assert_eq!(
            Color::parse("rgb(38, 41, 48)").unwrap(),
            Color::rgb(38, 41, 48)
        );
        assert_eq!(Color::parse("rgb(0,0,0)").unwrap(), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_parse_functional_rgba() {
        assert_eq!(
            Color::parse("rgba(38, 41, 48, 128)").unwrap(),
            Color::rgba(38, 41, 48, 128)
        );
    }

    #[test]
    fn test_parse_functional_wrong_arity() {
        assert!(Color::parse("rgb(38, 41)").is_err());
        assert!(Color::parse("rgb(38, 41, 48, 128)").is_err());
        assert!(Color::parse("rgba(38, 41, 48)").is_err());
    }

    #[test]
    fn test_parse_functional_out_of_range() {
        assert!(Color::parse("rgb(256, 0, 0)").is_err());
        assert!(Color::parse("rgba(0, 0, 0, 300)").is_err());
    }

    #[test]
    fn test_parse_functional_rejects_negative() {
        assert!(Color::parse("rgb(-1, 0, 0)").is_err());
    }

    // =========================================================================
    // YAML / JSON value tests
    // =========================================================================

    #[test]
    fn test_parse_value_string() {
        let val = serde_yaml::Value::String("#ff6b35".into());
        assert_eq!(Color::parse_value(&val).unwrap(), Color::rgb(255, 107, 53));
    }

    #[test]
    fn test_parse_value_sequence() {
        let val: serde_yaml::Value = serde_yaml::from_str("[255, 107, 53]").unwrap();
        assert_eq!(Color::parse_value(&val).unwrap(), Color::rgb(255, 107, 53));
    }

    #[test]
    fn test_parse_value_sequence_with_alpha() {
        let val: serde_yaml::Value = serde_yaml::from_str("[255, 107, 53, 128]").unwrap();
        assert_eq!(
            Color::parse_value(&val).unwrap(),
            Color::rgba(255, 107, 53, 128)
        );
    }

    #[test]
    fn test_parse_value_sequence_wrong_length() {
        let val: serde_yaml::Value = serde_yaml::from_str("[255, 107]").unwrap();
        assert!(Color::parse_value(&val).is_err());
    }

    #[test]
    fn test_parse_value_sequence_out_of_range() {
        let val: serde_yaml::Value = serde_yaml::from_str("[256, 0, 0]").unwrap();
        assert!(Color::parse_value(&val).is_err());
    }

    #[test]
    fn test_parse_value_rejects_mapping() {
        let val: serde_yaml::Value = serde_yaml::from_str("{r: 1}").unwrap();
        assert!(Color::parse_value(&val).is_err());
    }

    #[test]
    fn test_parse_json_value_string() {
        let val = serde_json::json!("rgb(38, 41, 48)");
        assert_eq!(Color::parse_json_value(&val).unwrap(), Color::rgb(38, 41, 48));
    }

    #[test]
    fn test_parse_json_value_array() {
        let val = serde_json::json!([38, 41, 48]);
        assert_eq!(Color::parse_json_value(&val).unwrap(), Color::rgb(38, 41, 48));
    }

    #[test]
    fn test_parse_json_value_rejects_object() {
        let val = serde_json::json!({"r": 38});
        assert!(Color::parse_json_value(&val).is_err());
    }

    // =========================================================================
    // Display tests
    // =========================================================================

    #[test]
    fn test_display_rgb() {
        assert_eq!(Color::rgb(0, 0, 0).to_string(), "rgb(0,0,0)");
        assert_eq!(Color::rgb(38, 41, 48).to_string(), "rgb(38,41,48)");
    }

    #[test]
    fn test_display_rgba() {
        assert_eq!(Color::rgba(38, 41, 48, 128).to_string(), "rgba(38,41,48,128)");
    }

    #[test]
    fn test_display_parse_roundtrip() {
        let color = Color::rgba(12, 200, 3, 77);
        assert_eq!(Color::parse(&color.to_string()).unwrap(), color);
    }

    // =========================================================================
    // Transform tests
    // =========================================================================

    #[test]
    fn test_darken_zero_percent_is_identity() {
        let c = Color::rgb(100, 150, 200);
        assert_eq!(c.darken(0.0), c);
    }

    #[test]
    fn test_darken_full_percent_is_black() {
        assert_eq!(Color::rgb(100, 150, 200).darken(100.0), Color::rgb(0, 0, 0));
        assert_eq!(Color::rgb(255, 255, 255).darken(100.0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_darken_scales_channels() {
        assert_eq!(
            Color::rgb(100, 100, 100).darken(20.0),
            Color::rgb(80, 80, 80)
        );
        assert_eq!(Color::rgb(200, 100, 50).darken(50.0), Color::rgb(100, 50, 25));
    }

    #[test]
    fn test_darken_preserves_alpha() {
        assert_eq!(
            Color::rgba(100, 100, 100, 128).darken(20.0),
            Color::rgba(80, 80, 80, 128)
        );
    }

    #[test]
    fn test_lighten_zero_percent_is_identity() {
        let c = Color::rgb(100, 150, 200);
        assert_eq!(c.lighten(0.0), c);
    }

    #[test]
    fn test_lighten_full_percent_is_white() {
        assert_eq!(
            Color::rgb(100, 150, 200).lighten(100.0),
            Color::rgb(255, 255, 255)
        );
        assert_eq!(Color::rgb(0, 0, 0).lighten(100.0), Color::rgb(255, 255, 255));
    }

    #[test]
    fn test_lighten_moves_toward_white() {
        // 100 + (255 - 100) * 0.2 = 131
        assert_eq!(
            Color::rgb(100, 100, 100).lighten(20.0),
            Color::rgb(131, 131, 131)
        );
    }

    #[test]
    fn test_lighten_preserves_alpha() {
        assert_eq!(
            Color::rgba(0, 0, 0, 10).lighten(100.0),
            Color::rgba(255, 255, 255, 10)
        );
    }

    #[test]
    fn test_darken_lighten_not_exact_inverse() {
        // Clamping and rounding are lossy at the boundaries.
        let c = Color::rgb(1, 1, 1);
        let roundtrip = c.lighten(80.0).darken(80.0);
        assert_ne!(roundtrip, c);
    }

    #[test]
    fn test_with_opacity() {
        assert_eq!(
            Color::rgb(10, 20, 30).with_opacity(128),
            Color::rgba(10, 20, 30, 128)
        );
        // Replaces an existing alpha channel.
        assert_eq!(
            Color::rgba(10, 20, 30, 1).with_opacity(200),
            Color::rgba(10, 20, 30, 200)
        );
    }

    // =========================================================================
    // Transform properties
    // =========================================================================

    proptest! {
        #[test]
        fn prop_darken_never_brightens(r: u8, g: u8, b: u8, p in 0.0f64..=100.0) {
            let c = Color::rgb(r, g, b);
            let d = c.darken(p);
            // round() can add at most half a unit
            prop_assert!(d.r <= r.saturating_add(1));
            prop_assert!(d.g <= g.saturating_add(1));
            prop_assert!(d.b <= b.saturating_add(1));
        }

        #[test]
        fn prop_lighten_never_darkens(r: u8, g: u8, b: u8, p in 0.0f64..=100.0) {
            let c = Color::rgb(r, g, b);
            let l = c.lighten(p);
            prop_assert!(l.r >= r.saturating_sub(1));
            prop_assert!(l.g >= g.saturating_sub(1));
            prop_assert!(l.b >= b.saturating_sub(1));
        }

        #[test]
        fn prop_transforms_deterministic(r: u8, g: u8, b: u8, p in 0.0f64..=100.0) {
            let c = Color::rgb(r, g, b);
            prop_assert_eq!(c.darken(p), c.darken(p));
            prop_assert_eq!(c.lighten(p), c.lighten(p));
        }

        #[test]
        fn prop_repeated_application_stays_in_range(r: u8, g: u8, b: u8, p in 0.0f64..=100.0) {
            // Channels are u8, so the interesting property is that chained
            // transforms keep producing well-formed values instead of
            // saturating into something surprising.
            let c = Color::rgb(r, g, b).lighten(p).darken(p).lighten(p);
            prop_assert!(c.a.is_none());
        }
    }
}
