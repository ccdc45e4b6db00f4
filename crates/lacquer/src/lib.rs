//! # Lacquer - Theme-Driven Style Templating
//!
//! `lacquer` renders style templates against named themes. Templates are
//! static text in the host styling language (Qt stylesheets, CSS-like
//! dialects) with embedded `{{ ... }}` placeholders; a theme maps semantic
//! color roles to concrete colors. Resolution substitutes every placeholder
//! with its resolved literal, producing finished style text for the GUI
//! layer to apply to widgets.
//!
//! ## Core Concepts
//!
//! - [`Theme`]: named mapping from color roles to [`Color`] values, plus an
//!   identifier for per-theme resources
//! - [`resolve`]: render one template against one theme (pure, synchronous)
//! - Transform functions: `darken`, `lighten`, `opacity` — deterministic
//!   color adjustments applied inside placeholders
//! - [`Renderer`]: pre-registered templates with per-theme output caching
//! - [`validate_template`]: check templates against a theme at startup
//!
//! ## Quick Start
//!
//! ```rust
//! use lacquer::{resolve, Color, Theme};
//!
//! let theme = Theme::new("dark")
//!     .add("background", Color::rgb(38, 41, 48))
//!     .add("foreground", Color::rgb(65, 72, 81))
//!     .add("highlight", Color::rgb(106, 115, 128));
//!
//! let template = r#"
//! QPushButton {
//!   background-color: {{ background }};
//!   border: 1px solid {{ darken(foreground, 20) }};
//! }
//! QPushButton:checked {
//!   background-color: {{ highlight }};
//!   image: url("theme_{{ id }}:/check.svg");
//! }
//! "#;
//!
//! let style = resolve(template, &theme).unwrap();
//! assert!(style.contains("background-color: rgb(38,41,48);"));
//! assert!(style.contains("border: 1px solid rgb(52,58,65);"));
//! assert!(style.contains("theme_dark:/check.svg"));
//! ```
//!
//! ## Built-in Themes
//!
//! The global registry ships `dark` and `light` themes and accepts
//! user/plugin registrations:
//!
//! ```rust
//! use lacquer::{get_theme, resolve};
//!
//! let theme = get_theme("dark").unwrap();
//! let style = resolve("color: {{ text }};", &theme).unwrap();
//! assert_eq!(style, "color: rgb(240,241,242);");
//! ```
//!
//! ## Theme Files
//!
//! Themes load from YAML or JSON (the format theme contributions ship in):
//!
//! ```rust
//! use lacquer::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! id: dusk
//! colors:
//!   background: "#262930"
//!   text: [240, 241, 242]
//!   highlight: "rgb(106, 115, 128)"
//! "##).unwrap();
//! assert_eq!(theme.id(), "dusk");
//! ```
//!
//! ## Concurrency
//!
//! [`resolve`] is a pure function of its inputs — no shared state, no side
//! effects — and may be called from any number of threads without
//! coordination. The theme registry and the [`Renderer`] output cache are
//! the only shared mutable state; both are lock-guarded internally.

// Internal modules
pub mod assets;
pub mod color;
mod error;
pub mod prelude;
pub mod template;
pub mod theme;

// Error types
pub use error::{ResolveError, ResolveErrors};

// Color exports
pub use color::Color;

// Template module exports
pub use template::{resolve, validate_template, Renderer, RendererError, TEMPLATE_EXTENSIONS};

// Theme module exports
pub use theme::{
    available_themes, dark_theme, detect_color_mode, get_theme, icon_path, light_theme,
    register_theme, set_mode_detector, system_theme, unregister_theme, ColorMode, IconSet, Theme,
    ThemeError,
};

// Asset exports
pub use assets::builtin_templates;
