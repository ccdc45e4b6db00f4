//! Pre-registered template rendering with per-theme caching.
//!
//! [`Renderer`] holds a set of named style templates and the active theme,
//! and hands out rendered style text. Rendered output is cached per template
//! name; swapping the theme with [`Renderer::set_theme`] invalidates the
//! cache, so stale colors can never leak across a theme switch.
//!
//! Templates can be registered inline or loaded from a directory of style
//! fragment files. [`Renderer::stylesheet`] renders every registered
//! template and concatenates them in name order — fragment files named with
//! numeric prefixes (`00_base.qss`, `01_buttons.qss`) therefore compose in a
//! predictable order.
//!
//! # Example
//!
//! ```rust
//! use lacquer::{Color, Renderer, Theme};
//!
//! let theme = Theme::new("dark").add("background", Color::rgb(38, 41, 48));
//!
//! let mut renderer = Renderer::new(theme);
//! renderer.add_template("base", "QWidget { background-color: {{ background }}; }");
//!
//! let style = renderer.render("base").unwrap();
//! assert_eq!(style, "QWidget { background-color: rgb(38,41,48); }");
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::path::Path;
use std::sync::RwLock;

use crate::error::ResolveError;
use crate::theme::Theme;

use super::resolver::resolve;

/// Recognized style template file extensions.
pub const TEMPLATE_EXTENSIONS: &[&str] = &["qss", "css", "txt"];

/// Error type for renderer operations.
///
/// Wraps resolution failures and adds the renderer's own failure modes
/// (missing template names, template directory I/O).
#[derive(Debug)]
pub enum RendererError {
    /// No template registered under the requested name.
    TemplateNotFound(String),
    /// A template failed to resolve against the active theme.
    Resolve(ResolveError),
    /// I/O error while loading a template directory.
    Io(std::io::Error),
}

impl fmt::Display for RendererError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RendererError::TemplateNotFound(name) => write!(f, "template not found: {}", name),
            RendererError::Resolve(err) => write!(f, "{}", err),
            RendererError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for RendererError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RendererError::Resolve(err) => Some(err),
            RendererError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ResolveError> for RendererError {
    fn from(err: ResolveError) -> Self {
        RendererError::Resolve(err)
    }
}

impl From<std::io::Error> for RendererError {
    fn from(err: std::io::Error) -> Self {
        RendererError::Io(err)
    }
}

/// A renderer with pre-registered templates and a cached active theme.
///
/// Use this when an application renders the same templates repeatedly and
/// re-renders them on theme switch. Rendering through the cache is still
/// referentially transparent: the cache only ever stores what [`resolve`]
/// would return for the active theme.
pub struct Renderer {
    templates: BTreeMap<String, String>,
    theme: Theme,
    cache: RwLock<HashMap<String, String>>,
}

impl Renderer {
    /// Creates a renderer with no templates and the given active theme.
    pub fn new(theme: Theme) -> Self {
        Self {
            templates: BTreeMap::new(),
            theme,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a renderer pre-loaded with the built-in style templates.
    pub fn with_builtin(theme: Theme) -> Self {
        let mut renderer = Self::new(theme);
        for (name, content) in crate::assets::builtin_templates() {
            renderer.add_template(name, content);
        }
        renderer
    }

    /// Returns the active theme.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the active theme and invalidates all cached output.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.cache.write().unwrap().clear();
    }

    /// Registers a template under a name.
    ///
    /// Registering a name that already exists replaces the previous template
    /// and drops its cached output.
    pub fn add_template(&mut self, name: impl Into<String>, source: impl Into<String>) {
        let name = name.into();
        self.cache.write().unwrap().remove(&name);
        self.templates.insert(name, source.into());
    }

    /// Loads every recognized template file under a directory.
    ///
    /// Walks the directory recursively; files with an extension in
    /// [`TEMPLATE_EXTENSIONS`] are registered under their relative path
    /// without the extension (`widgets/buttons.qss` becomes
    /// `widgets/buttons`). Later registrations replace earlier ones.
    pub fn add_template_dir<P: AsRef<Path>>(&mut self, dir: P) -> Result<(), RendererError> {
        let dir = dir.as_ref();
        let mut files = Vec::new();
        collect_template_files(dir, dir, &mut files)?;
        for (name, path) in files {
            let content = std::fs::read_to_string(&path)?;
            self.add_template(name, content);
        }
        Ok(())
    }

    /// Returns true if a template is registered under the given name.
    pub fn has_template(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    /// Returns the registered template names, in order.
    pub fn template_names(&self) -> Vec<&str> {
        self.templates.keys().map(String::as_str).collect()
    }

    /// Renders a registered template against the active theme.
    ///
    /// Output is cached; repeated calls for the same name return the cached
    /// string until the theme changes or the template is replaced.
    pub fn render(&self, name: &str) -> Result<String, RendererError> {
        if let Some(cached) = self.cache.read().unwrap().get(name) {
            return Ok(cached.clone());
        }

        let template = self
            .templates
            .get(name)
            .ok_or_else(|| RendererError::TemplateNotFound(name.to_string()))?;
        let output = resolve(template, &self.theme)?;

        self.cache
            .write()
            .unwrap()
            .insert(name.to_string(), output.clone());
        Ok(output)
    }

    /// Renders every registered template and concatenates them in name order.
    pub fn stylesheet(&self) -> Result<String, RendererError> {
        let mut sections = Vec::with_capacity(self.templates.len());
        for name in self.templates.keys() {
            sections.push(self.render(name)?);
        }
        Ok(sections.join("\n"))
    }
}

/// Recursively collects recognized template files under `dir`.
///
/// Names are relative to `base`, extension stripped, with `/` separators.
fn collect_template_files(
    base: &Path,
    dir: &Path,
    out: &mut Vec<(String, std::path::PathBuf)>,
) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            collect_template_files(base, &path, out)?;
            continue;
        }
        let recognized = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| TEMPLATE_EXTENSIONS.contains(&e));
        if !recognized {
            continue;
        }
        let relative = path.strip_prefix(base).unwrap_or(&path).with_extension("");
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        out.push((name, path));
    }
    Ok(())
}
