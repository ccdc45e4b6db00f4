//! Process-wide theme registry.
//!
//! The registry holds every theme available for selection, seeded with the
//! built-in `dark` and `light` themes. Applications register additional
//! themes at startup (or when a plugin contributes one) and look them up by
//! identifier when the user switches.
//!
//! The registry is the only shared mutable state in the crate. It is guarded
//! by a read/write lock: lookups take a read lock, registration takes the
//! write lock. Resolution itself never touches it — callers pass a `Theme`
//! snapshot into [`resolve`](crate::resolve), so a re-registration cannot
//! alter a render in flight.
//!
//! # Example
//!
//! ```rust
//! use lacquer::{available_themes, get_theme, register_theme, Color, Theme};
//!
//! let dark = get_theme("dark").unwrap();
//! assert!(dark.contains("background"));
//!
//! register_theme(Theme::new("dusk").add("background", Color::rgb(20, 20, 28)));
//! assert!(available_themes().contains(&"dusk".to_string()));
//! ```

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;

use crate::color::Color;

use super::theme::Theme;

static THEMES: Lazy<RwLock<HashMap<String, Theme>>> =
    Lazy::new(|| RwLock::new(builtin_themes()));

/// The built-in dark theme.
pub fn dark_theme() -> Theme {
    Theme::new("dark")
        .add("background", Color::rgb(38, 41, 48))
        .add("foreground", Color::rgb(65, 72, 81))
        .add("primary", Color::rgb(90, 98, 108))
        .add("secondary", Color::rgb(134, 142, 147))
        .add("highlight", Color::rgb(106, 115, 128))
        .add("text", Color::rgb(240, 241, 242))
        .add("icon", Color::rgb(209, 210, 213))
        .add("warning", Color::rgb(227, 182, 23))
        .add("error", Color::rgb(153, 18, 31))
        .add("current", Color::rgb(0, 122, 204))
        .add("canvas", Color::rgb(0, 0, 0))
        .add("console", Color::rgb(0, 0, 0))
}

/// The built-in light theme.
pub fn light_theme() -> Theme {
    Theme::new("light")
        .add("background", Color::rgb(239, 235, 233))
        .add("foreground", Color::rgb(214, 208, 206))
        .add("primary", Color::rgb(188, 184, 181))
        .add("secondary", Color::rgb(150, 146, 144))
        .add("highlight", Color::rgb(163, 158, 156))
        .add("text", Color::rgb(59, 58, 57))
        .add("icon", Color::rgb(107, 105, 103))
        .add("warning", Color::rgb(227, 182, 23))
        .add("error", Color::rgb(255, 18, 31))
        .add("current", Color::rgb(253, 240, 148))
        .add("canvas", Color::rgb(255, 255, 255))
        .add("console", Color::rgb(255, 255, 255))
}

fn builtin_themes() -> HashMap<String, Theme> {
    let mut themes = HashMap::new();
    for theme in [dark_theme(), light_theme()] {
        themes.insert(theme.id().to_string(), theme);
    }
    themes
}

/// Returns a snapshot of the theme registered under `id`.
pub fn get_theme(id: &str) -> Option<Theme> {
    THEMES.read().unwrap().get(id).cloned()
}

/// Registers a theme under its identifier.
///
/// Registering an id that already exists replaces the previous theme, so a
/// reloaded theme file can simply be re-registered.
pub fn register_theme(theme: Theme) {
    THEMES
        .write()
        .unwrap()
        .insert(theme.id().to_string(), theme);
}

/// Removes a theme from the registry, returning it if it was present.
pub fn unregister_theme(id: &str) -> Option<Theme> {
    THEMES.write().unwrap().remove(id)
}

/// Returns the identifiers of all registered themes, sorted.
pub fn available_themes() -> Vec<String> {
    let mut ids: Vec<String> = THEMES.read().unwrap().keys().cloned().collect();
    ids.sort_unstable();
    ids
}
