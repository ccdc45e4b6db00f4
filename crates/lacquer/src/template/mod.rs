//! Template resolution: placeholder parsing, evaluation, and rendering.
//!
//! Style templates are static text in the host styling language with two
//! kinds of embedded placeholder:
//!
//! - Role references: `{{ foreground }}`
//! - Transform calls: `{{ darken(foreground, 20) }}`
//!
//! Resolution substitutes each placeholder with a concrete literal from the
//! active theme and hands the finished text to the GUI layer. Structural
//! selectors of the host language (`:checked`, `[mode="pan"]`, rule-block
//! braces) are opaque text to this module — the consuming framework's style
//! engine dispatches on them at render time; this module only substitutes
//! tokens inside rule bodies.
//!
//! ## Entry points
//!
//! | Function / type | Use when |
//! |-----------------|----------|
//! | [`resolve`] | One template, one theme, right now |
//! | [`validate_template`] | Startup check that reports every problem at once |
//! | [`Renderer`] | Repeated rendering with per-theme output caching |

mod expr;
mod renderer;
mod resolver;

pub use renderer::{Renderer, RendererError, TEMPLATE_EXTENSIONS};
pub use resolver::{resolve, validate_template};
