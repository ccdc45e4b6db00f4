//! Template resolution against a theme.
//!
//! [`resolve`] is the core operation of the crate: scan a style template for
//! `{{ ... }}` placeholders, evaluate each placeholder expression against the
//! theme's role environment, and splice the resulting literal back into the
//! text. Everything outside a placeholder — including the host styling
//! language's selectors, attribute conditions, and single-brace rule blocks —
//! passes through untouched.
//!
//! Resolution is a pure function of its inputs: no shared state, no side
//! effects, byte-identical output for identical inputs. It can run from any
//! number of threads without coordination.
//!
//! # Example
//!
//! ```rust
//! use lacquer::{resolve, Color, Theme};
//!
//! let theme = Theme::new("dark")
//!     .add("foreground", Color::rgb(0, 0, 0))
//!     .add("highlight", Color::rgb(255, 255, 255));
//!
//! let style = resolve(
//!     "image: url(\"theme_{{ id }}:/icon.svg\"); color: {{ foreground }};",
//!     &theme,
//! ).unwrap();
//!
//! assert_eq!(style, "image: url(\"theme_dark:/icon.svg\"); color: rgb(0,0,0);");
//! ```
//!
//! # The `id` binding
//!
//! `{{ id }}` resolves to the theme's identifier so templates can reference
//! per-theme resources (`theme_{{ id }}:/zoom.svg`). A theme that defines a
//! color role named `id` shadows the binding.
//!
//! # Transform functions
//!
//! | Function | Arguments | Result |
//! |----------|-----------|--------|
//! | `darken` | color, percent 0-100 | color scaled toward black |
//! | `lighten` | color, percent 0-100 | color scaled toward white |
//! | `opacity` | color, alpha 0-255 | color with alpha channel replaced |
//!
//! # Validation policy
//!
//! Resolution is lazy: errors surface when a template is resolved. Callers
//! that want fatal-at-load behavior run [`validate_template`] at startup,
//! which collects every failure in a template instead of stopping at the
//! first.

use std::fmt;

use crate::color::Color;
use crate::error::{ResolveError, ResolveErrors};
use crate::theme::Theme;

use super::expr::{self, Expr};

/// A value produced while evaluating a placeholder expression.
#[derive(Debug, Clone, PartialEq)]
enum Value {
    Color(Color),
    Text(String),
    Number(f64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Color(c) => write!(f, "{}", c),
            Value::Text(s) => write!(f, "{}", s),
            Value::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// Renders a style template against a theme.
///
/// Scans `template` for `{{ ... }}` placeholders and replaces each with its
/// resolved literal value. Aborts on the first failure; a failed resolution
/// produces no partial output.
///
/// # Errors
///
/// - [`ResolveError::UnknownRole`] when a placeholder references a role the
///   theme does not define
/// - [`ResolveError::UnknownFunction`] when a placeholder invokes an
///   unsupported transform
/// - [`ResolveError::MalformedPlaceholder`] when placeholder syntax cannot
///   be parsed or its arguments do not fit the transform
pub fn resolve(template: &str, theme: &Theme) -> Result<String, ResolveError> {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        output.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let end = match after.find("}}") {
            Some(end) => end,
            None => {
                return Err(ResolveError::MalformedPlaceholder {
                    placeholder: after.trim().to_string(),
                    message: "unclosed placeholder".to_string(),
                })
            }
        };
        let body = &after[..end];
        let value = eval_placeholder(body, theme)?;
        output.push_str(&value.to_string());
        rest = &after[end + 2..];
    }

    output.push_str(rest);
    Ok(output)
}

/// Checks every placeholder in a template against a theme.
///
/// Unlike [`resolve`], this keeps scanning after a failure and returns all
/// errors in template order, so a startup check reports every problem at
/// once. A template that validates cleanly is guaranteed to resolve against
/// the same theme.
pub fn validate_template(template: &str, theme: &Theme) -> Result<(), ResolveErrors> {
    let mut errors = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let after = &rest[start + 2..];
        let end = match after.find("}}") {
            Some(end) => end,
            None => {
                errors.push(ResolveError::MalformedPlaceholder {
                    placeholder: after.trim().to_string(),
                    message: "unclosed placeholder".to_string(),
                });
                break;
            }
        };
        if let Err(err) = eval_placeholder(&after[..end], theme) {
            errors.push(err);
        }
        rest = &after[end + 2..];
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ResolveErrors::new(errors))
    }
}

/// Parses and evaluates a single placeholder body.
fn eval_placeholder(body: &str, theme: &Theme) -> Result<Value, ResolveError> {
    let expr = expr::parse(body).map_err(|message| ResolveError::MalformedPlaceholder {
        placeholder: body.trim().to_string(),
        message,
    })?;
    eval(&expr, theme, body.trim())
}

/// Evaluates an expression tree against the theme environment.
fn eval(expr: &Expr, theme: &Theme, placeholder: &str) -> Result<Value, ResolveError> {
    match expr {
        Expr::Number(n) => Ok(Value::Number(*n)),
        Expr::Role(name) => lookup_role(name, theme),
        Expr::Call { name, args } => {
            let values = args
                .iter()
                .map(|arg| eval(arg, theme, placeholder))
                .collect::<Result<Vec<_>, _>>()?;
            apply_function(name, &values, placeholder)
        }
    }
}

/// Resolves a bare role reference.
///
/// Role lookups take precedence over the built-in `id` binding.
fn lookup_role(name: &str, theme: &Theme) -> Result<Value, ResolveError> {
    if let Some(color) = theme.color(name) {
        return Ok(Value::Color(*color));
    }
    if name == "id" {
        return Ok(Value::Text(theme.id().to_string()));
    }
    Err(ResolveError::UnknownRole {
        role: name.to_string(),
        theme: theme.id().to_string(),
    })
}

/// Dispatches a transform call over evaluated argument values.
fn apply_function(
    name: &str,
    args: &[Value],
    placeholder: &str,
) -> Result<Value, ResolveError> {
    match name {
        "darken" => {
            let (color, percent) = color_percent_args(name, args, placeholder)?;
            Ok(Value::Color(color.darken(percent)))
        }
        "lighten" => {
            let (color, percent) = color_percent_args(name, args, placeholder)?;
            Ok(Value::Color(color.lighten(percent)))
        }
        "opacity" => {
            let (color, alpha) = color_alpha_args(name, args, placeholder)?;
            Ok(Value::Color(color.with_opacity(alpha)))
        }
        _ => Err(ResolveError::UnknownFunction {
            function: name.to_string(),
        }),
    }
}

/// Extracts the `(color, percent)` argument pair shared by darken/lighten.
fn color_percent_args(
    name: &str,
    args: &[Value],
    placeholder: &str,
) -> Result<(Color, f64), ResolveError> {
    let (color, number) = color_number_args(name, args, placeholder)?;
    if !(0.0..=100.0).contains(&number) {
        return Err(malformed(
            placeholder,
            format!("percent {} out of range (0-100)", number),
        ));
    }
    Ok((color, number))
}

/// Extracts the `(color, alpha)` argument pair for opacity.
fn color_alpha_args(
    name: &str,
    args: &[Value],
    placeholder: &str,
) -> Result<(Color, u8), ResolveError> {
    let (color, number) = color_number_args(name, args, placeholder)?;
    if number.fract() != 0.0 || !(0.0..=255.0).contains(&number) {
        return Err(malformed(
            placeholder,
            format!("alpha {} must be an integer in 0-255", number),
        ));
    }
    Ok((color, number as u8))
}

/// Checks arity and types for the two-argument transform shape.
fn color_number_args(
    name: &str,
    args: &[Value],
    placeholder: &str,
) -> Result<(Color, f64), ResolveError> {
    if args.len() != 2 {
        return Err(malformed(
            placeholder,
            format!("{} expects 2 arguments, got {}", name, args.len()),
        ));
    }
    let color = match &args[0] {
        Value::Color(c) => *c,
        other => {
            return Err(malformed(
                placeholder,
                format!("{} expects a color as its first argument, got '{}'", name, other),
            ))
        }
    };
    let number = match &args[1] {
        Value::Number(n) => *n,
        other => {
            return Err(malformed(
                placeholder,
                format!("{} expects a number as its second argument, got '{}'", name, other),
            ))
        }
    };
    Ok((color, number))
}

fn malformed(placeholder: &str, message: String) -> ResolveError {
    ResolveError::MalformedPlaceholder {
        placeholder: placeholder.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_theme() -> Theme {
        Theme::new("dark")
            .add("foreground", Color::rgb(0, 0, 0))
            .add("highlight", Color::rgb(255, 255, 255))
            .add("primary", Color::rgb(100, 100, 100))
    }

    // =========================================================================
    // Substitution tests
    // =========================================================================

    #[test]
    fn test_resolve_bare_role() {
        let output = resolve("color: {{ foreground }};", &test_theme()).unwrap();
        assert_eq!(output, "color: rgb(0,0,0);");
    }

    #[test]
    fn test_resolve_identifier_in_resource_path() {
        let output = resolve(
            "image: url(\"theme_{{ id }}:/icon.svg\"); color: {{ foreground }};",
            &test_theme(),
        )
        .unwrap();
        assert_eq!(
            output,
            "image: url(\"theme_dark:/icon.svg\"); color: rgb(0,0,0);"
        );
    }

    #[test]
    fn test_resolve_darken() {
        let output = resolve("background-color: {{ darken(primary, 20) }}", &test_theme()).unwrap();
        assert_eq!(output, "background-color: rgb(80,80,80)");
    }

    #[test]
    fn test_resolve_lighten() {
        let output = resolve("{{ lighten(foreground, 100) }}", &test_theme()).unwrap();
        assert_eq!(output, "rgb(255,255,255)");
    }

    #[test]
    fn test_resolve_opacity_renders_rgba() {
        let output = resolve("{{ opacity(primary, 128) }}", &test_theme()).unwrap();
        assert_eq!(output, "rgba(100,100,100,128)");
    }

    #[test]
    fn test_resolve_nested_call() {
        // 100 -> lighten 10% -> 116 (rounded) -> darken 50% -> 58
        let output = resolve("{{ darken(lighten(primary, 10), 50) }}", &test_theme()).unwrap();
        assert_eq!(output, "rgb(58,58,58)");
    }

    #[test]
    fn test_resolve_whitespace_insensitive() {
        let theme = test_theme();
        assert_eq!(
            resolve("{{foreground}}", &theme).unwrap(),
            resolve("{{   foreground   }}", &theme).unwrap()
        );
    }

    #[test]
    fn test_resolve_multiple_placeholders() {
        let output = resolve(
            "a: {{ foreground }}; b: {{ highlight }}; c: {{ darken(primary, 0) }};",
            &test_theme(),
        )
        .unwrap();
        assert_eq!(output, "a: rgb(0,0,0); b: rgb(255,255,255); c: rgb(100,100,100);");
    }

    #[test]
    fn test_resolve_plain_text_untouched() {
        let input = "QPushButton { border: none; }";
        assert_eq!(resolve(input, &test_theme()).unwrap(), input);
    }

    #[test]
    fn test_resolve_single_braces_are_literal() {
        // Rule blocks of the host styling language use single braces.
        let output = resolve(
            "QPushButton:checked { color: {{ highlight }}; }",
            &test_theme(),
        )
        .unwrap();
        assert_eq!(output, "QPushButton:checked { color: rgb(255,255,255); }");
    }

    #[test]
    fn test_resolve_attribute_selectors_are_opaque() {
        let output = resolve(
            "QtPlayButton[playing=\"true\"] { image: url(\"theme_{{ id }}:/pause.svg\"); }",
            &test_theme(),
        )
        .unwrap();
        assert_eq!(
            output,
            "QtPlayButton[playing=\"true\"] { image: url(\"theme_dark:/pause.svg\"); }"
        );
    }

    #[test]
    fn test_resolve_leaves_no_markers() {
        let output = resolve(
            "{{ foreground }} {{ darken(highlight, 10) }} tail",
            &test_theme(),
        )
        .unwrap();
        assert!(!output.contains("{{"));
        assert!(!output.contains("}}"));
    }

    #[test]
    fn test_resolve_is_referentially_transparent() {
        let theme = test_theme();
        let template = "color: {{ lighten(primary, 33) }}; border: {{ foreground }};";
        assert_eq!(
            resolve(template, &theme).unwrap(),
            resolve(template, &theme).unwrap()
        );
    }

    #[test]
    fn test_resolve_empty_template() {
        assert_eq!(resolve("", &test_theme()).unwrap(), "");
    }

    #[test]
    fn test_resolve_role_shadows_id_binding() {
        let theme = Theme::new("dark").add("id", Color::rgb(1, 2, 3));
        assert_eq!(resolve("{{ id }}", &theme).unwrap(), "rgb(1,2,3)");
    }

    // =========================================================================
    // Error tests
    // =========================================================================

    #[test]
    fn test_resolve_unknown_role() {
        let err = resolve("color: {{ accent }};", &test_theme()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownRole {
                role: "accent".to_string(),
                theme: "dark".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_unknown_role_in_argument() {
        let err = resolve("{{ darken(accent, 20) }}", &test_theme()).unwrap_err();
        assert!(matches!(err, ResolveError::UnknownRole { .. }));
    }

    #[test]
    fn test_resolve_unknown_function() {
        let err = resolve("{{ saturate(primary, 20) }}", &test_theme()).unwrap_err();
        assert_eq!(
            err,
            ResolveError::UnknownFunction {
                function: "saturate".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_unclosed_placeholder() {
        let err = resolve("color: {{ foreground", &test_theme()).unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPlaceholder { .. }));
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_resolve_empty_placeholder() {
        let err = resolve("{{ }}", &test_theme()).unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPlaceholder { .. }));
    }

    #[test]
    fn test_resolve_bad_syntax() {
        let err = resolve("{{ darken(foreground 20) }}", &test_theme()).unwrap_err();
        assert!(matches!(err, ResolveError::MalformedPlaceholder { .. }));
    }

    #[test]
    fn test_resolve_wrong_arity() {
        let err = resolve("{{ darken(foreground) }}", &test_theme()).unwrap_err();
        assert!(err.to_string().contains("2 arguments"));
    }

    #[test]
    fn test_resolve_percent_out_of_range() {
        let err = resolve("{{ darken(foreground, 120) }}", &test_theme()).unwrap_err();
        assert!(err.to_string().contains("out of range"));

        let err = resolve("{{ lighten(foreground, -5) }}", &test_theme()).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_resolve_alpha_must_be_integer() {
        let err = resolve("{{ opacity(foreground, 0.5) }}", &test_theme()).unwrap_err();
        assert!(err.to_string().contains("0-255"));

        let err = resolve("{{ opacity(foreground, 300) }}", &test_theme()).unwrap_err();
        assert!(err.to_string().contains("0-255"));
    }

    #[test]
    fn test_resolve_number_where_color_expected() {
        let err = resolve("{{ darken(20, foreground) }}", &test_theme()).unwrap_err();
        assert!(err.to_string().contains("first argument"));
    }

    #[test]
    fn test_resolve_failure_produces_no_partial_output() {
        // The Result is Err; there is no partial string to observe.
        let result = resolve("a: {{ foreground }}; b: {{ missing }};", &test_theme());
        assert!(result.is_err());
    }

    // =========================================================================
    // Validation tests
    // =========================================================================

    #[test]
    fn test_validate_clean_template() {
        let template = "color: {{ foreground }}; bg: {{ darken(primary, 10) }};";
        assert!(validate_template(template, &test_theme()).is_ok());
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let template = "{{ missing }} {{ saturate(primary, 1) }} {{ foreground }} {{ bad( }}";
        let errors = validate_template(template, &test_theme()).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(matches!(errors.errors[0], ResolveError::UnknownRole { .. }));
        assert!(matches!(
            errors.errors[1],
            ResolveError::UnknownFunction { .. }
        ));
        assert!(matches!(
            errors.errors[2],
            ResolveError::MalformedPlaceholder { .. }
        ));
    }

    #[test]
    fn test_validate_clean_implies_resolve_succeeds() {
        let template = "{{ lighten(highlight, 5) }} url(theme_{{ id }}:/x.svg)";
        let theme = test_theme();
        assert!(validate_template(template, &theme).is_ok());
        assert!(resolve(template, &theme).is_ok());
    }
}
