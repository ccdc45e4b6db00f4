//! Themes: named color-role mappings selectable by the user.
//!
//! A theme binds semantic color roles (`background`, `highlight`, `error`,
//! ...) to concrete colors, plus an identifier that templates splice into
//! per-theme resource paths. Templates reference roles instead of literal
//! colors, so switching themes re-renders the same templates into a
//! different appearance with no template changes.
//!
//! ## Lifecycle
//!
//! Themes are constructed at startup or when the user switches; rendered
//! style strings are ephemeral and recomputed against the new theme. The
//! global [`registry`] holds the available themes (seeded with built-in
//! `dark` and `light`) and is the crate's only shared mutable state.
//!
//! ## Construction
//!
//! Programmatic (for compile-time themes):
//! ```rust
//! use lacquer::{Color, Theme};
//!
//! let theme = Theme::new("dusk")
//!     .add("background", Color::rgb(38, 41, 48))
//!     .add("text", Color::rgb(240, 241, 242));
//! ```
//!
//! YAML or JSON (for user- and plugin-supplied themes):
//! ```rust
//! let theme = lacquer::Theme::from_yaml(r##"
//! id: dusk
//! colors:
//!   background: "#262930"
//!   text: [240, 241, 242]
//! "##).unwrap();
//! ```
//!
//! ## System mode
//!
//! [`detect_color_mode`] asks the OS for the preferred appearance so that a
//! "follow the system" setting can map to the matching built-in theme via
//! [`system_theme`]. Override detection in tests with [`set_mode_detector`].

mod adaptive;
mod error;
mod icons;
pub mod registry;
#[allow(clippy::module_inception)]
mod theme;

pub use adaptive::{detect_color_mode, set_mode_detector, system_theme, ColorMode};
pub use error::ThemeError;
pub use icons::{icon_path, IconSet};
pub use registry::{
    available_themes, dark_theme, get_theme, light_theme, register_theme, unregister_theme,
};
pub use theme::Theme;
