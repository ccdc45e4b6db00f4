//! Convenience prelude for the common surface.
//!
//! ```rust
//! use lacquer::prelude::*;
//!
//! let theme = Theme::new("dusk").add("background", Color::rgb(38, 41, 48));
//! let style = resolve("QWidget { background-color: {{ background }}; }", &theme).unwrap();
//! assert_eq!(style, "QWidget { background-color: rgb(38,41,48); }");
//! ```

pub use crate::color::Color;
pub use crate::error::{ResolveError, ResolveErrors};
pub use crate::template::{resolve, validate_template, Renderer, RendererError};
pub use crate::theme::{
    available_themes, detect_color_mode, get_theme, register_theme, system_theme, ColorMode,
    Theme, ThemeError,
};
