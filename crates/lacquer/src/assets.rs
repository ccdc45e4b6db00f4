//! Built-in style templates.
//!
//! A small set of stock fragments covering the base widget surface and
//! buttons/icons, embedded at compile time. Load them into a renderer with
//! [`Renderer::with_builtin`](crate::Renderer::with_builtin), or register a
//! subset by hand from [`builtin_templates`].
//!
//! Fragment names carry numeric prefixes so that
//! [`Renderer::stylesheet`](crate::Renderer::stylesheet) composes them in a
//! stable order.

/// Base widget rules: backgrounds, text, scrollbars, menus.
pub const BASE_TEMPLATE: &str = include_str!("../styles/00_base.qss");

/// Button and icon rules, including per-theme icon resource paths.
pub const BUTTONS_TEMPLATE: &str = include_str!("../styles/01_buttons.qss");

/// Returns the built-in templates as `(name, content)` pairs.
///
/// Every placeholder in these fragments references roles defined by both
/// built-in themes, so they resolve against either out of the box.
pub fn builtin_templates() -> Vec<(&'static str, &'static str)> {
    vec![("00_base", BASE_TEMPLATE), ("01_buttons", BUTTONS_TEMPLATE)]
}
