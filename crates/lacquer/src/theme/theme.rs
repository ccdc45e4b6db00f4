//! Theme struct: an identifier plus a role → color mapping.
//!
//! Themes are the environment templates resolve against. They can be built
//! programmatically or loaded from YAML/JSON files, and every role a template
//! references must be present in the theme used to resolve it.
//!
//! # Construction Methods
//!
//! ## Programmatic (Builder API)
//!
//! ```rust
//! use lacquer::{Color, Theme};
//!
//! let theme = Theme::new("dusk")
//!     .add("background", Color::rgb(38, 41, 48))
//!     .add("foreground", Color::rgb(65, 72, 81))
//!     .add("highlight", Color::rgb(106, 115, 128));
//! ```
//!
//! ## From YAML
//!
//! ```rust
//! use lacquer::Theme;
//!
//! let theme = Theme::from_yaml(r##"
//! id: dusk
//! colors:
//!   background: "rgb(38, 41, 48)"
//!   foreground: "#414851"
//!   highlight: [106, 115, 128]
//! "##).unwrap();
//! assert_eq!(theme.id(), "dusk");
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::Color;

use super::error::ThemeError;

/// A named set of color roles used when resolving templates.
///
/// The identifier is an opaque string; templates can splice it into resource
/// paths via `{{ id }}` so each theme ships its own icon set.
///
/// # Example
///
/// ```rust
/// use lacquer::{Color, Theme};
///
/// let theme = Theme::new("dusk")
///     .add("background", Color::rgb(38, 41, 48))
///     .add("error", Color::rgb(153, 18, 31));
///
/// assert_eq!(theme.id(), "dusk");
/// assert_eq!(theme.color("error"), Some(&Color::rgb(153, 18, 31)));
/// assert!(theme.color("accent").is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Theme identifier, substituted into `theme_{{ id }}` resource paths.
    id: String,
    /// Role → color mapping.
    colors: HashMap<String, Color>,
    /// Source file path (for refresh support).
    source_path: Option<PathBuf>,
}

/// Raw theme file structure, before color parsing.
#[derive(Deserialize)]
struct ThemeFile {
    id: Option<String>,
    #[serde(default)]
    colors: HashMap<String, serde_yaml::Value>,
}

/// Raw JSON theme structure, before color parsing.
#[derive(Deserialize)]
struct ThemeFileJson {
    id: Option<String>,
    #[serde(default)]
    colors: HashMap<String, serde_json::Value>,
}

impl Theme {
    /// Creates an empty theme with the given identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            colors: HashMap::new(),
            source_path: None,
        }
    }

    /// Adds a color role, returning an updated theme for chaining.
    pub fn add(mut self, role: impl Into<String>, color: Color) -> Self {
        self.colors.insert(role.into(), color);
        self
    }

    /// Inserts a color role by mutable reference.
    pub fn insert(&mut self, role: impl Into<String>, color: Color) {
        self.colors.insert(role.into(), color);
    }

    /// Returns the theme identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Looks up the color bound to a role.
    pub fn color(&self, role: &str) -> Option<&Color> {
        self.colors.get(role)
    }

    /// Returns true if the theme defines the given role.
    pub fn contains(&self, role: &str) -> bool {
        self.colors.contains_key(role)
    }

    /// Iterates over the defined role names.
    pub fn roles(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// Returns the source file path, if this theme was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Returns true if no roles are defined.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Returns the number of defined roles.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Merges another theme into this one.
    ///
    /// Roles from `other` take precedence over roles in `self`; the
    /// identifier (and source path) of `self` are kept. This allows layering
    /// user overrides on top of a base theme.
    ///
    /// # Example
    ///
    /// ```rust
    /// use lacquer::{Color, Theme};
    ///
    /// let base = Theme::new("dark").add("text", Color::rgb(240, 241, 242));
    /// let user = Theme::new("user").add("text", Color::rgb(255, 255, 255));
    ///
    /// let merged = base.merge(user);
    /// assert_eq!(merged.id(), "dark");
    /// assert_eq!(merged.color("text"), Some(&Color::rgb(255, 255, 255)));
    /// ```
    pub fn merge(mut self, other: Theme) -> Self {
        self.colors.extend(other.colors);
        self
    }

    /// Creates a theme from YAML content.
    ///
    /// The format is an `id` string plus a `colors` mapping of role name to
    /// color value. Color values may be hex strings, `rgb()`/`rgba()`
    /// notation, named colors, or `[r, g, b]` sequences.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if parsing fails, a color value is invalid,
    /// or the definition has no `id`.
    pub fn from_yaml(yaml: &str) -> Result<Self, ThemeError> {
        let (id, colors) = parse_yaml(yaml)?;
        let id = id.ok_or(ThemeError::MissingId { path: None })?;
        Ok(Self {
            id,
            colors,
            source_path: None,
        })
    }

    /// Creates a theme from JSON content.
    ///
    /// Same structure as [`from_yaml`](Self::from_yaml); this is the format
    /// used by plugin manifests that contribute themes.
    pub fn from_json(json: &str) -> Result<Self, ThemeError> {
        let (id, colors) = parse_json(json)?;
        let id = id.ok_or(ThemeError::MissingId { path: None })?;
        Ok(Self {
            id,
            colors,
            source_path: None,
        })
    }

    /// Loads a theme from a YAML or JSON file.
    ///
    /// The format is chosen by extension (`.json` is JSON, anything else is
    /// YAML). If the definition omits `id`, the identifier is derived from
    /// the file stem. The source path is stored for
    /// [`refresh`](Theme::refresh) support.
    ///
    /// # Errors
    ///
    /// Returns a [`ThemeError`] if the file cannot be read or parsed.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use lacquer::Theme;
    ///
    /// let theme = Theme::from_file("./themes/dusk.yaml")?;
    /// assert_eq!(theme.id(), "dusk");
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ThemeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ThemeError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let mut theme = Self::parse_content(path, &content)?;
        theme.source_path = Some(path.to_path_buf());
        Ok(theme)
    }

    /// Reloads the theme from its source file.
    ///
    /// Useful for hot-reloading while editing a theme. Returns an error if
    /// the theme was not loaded from a file.
    pub fn refresh(&mut self) -> Result<(), ThemeError> {
        let path = self.source_path.clone().ok_or_else(|| ThemeError::Load {
            message: "Cannot refresh: theme has no source file".to_string(),
        })?;

        let content = std::fs::read_to_string(&path).map_err(|e| ThemeError::Load {
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;

        let reloaded = Self::parse_content(&path, &content)?;
        self.id = reloaded.id;
        self.colors = reloaded.colors;
        Ok(())
    }

    /// Parses file content, dispatching on extension and defaulting the id
    /// to the file stem.
    fn parse_content(path: &Path, content: &str) -> Result<Self, ThemeError> {
        let is_json = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("json"));

        let (id, colors) = if is_json {
            parse_json(content)
        } else {
            parse_yaml(content)
        }
        .map_err(|err| locate(err, path))?;

        let id = id
            .or_else(|| {
                path.file_stem()
                    .and_then(|s| s.to_str())
                    .map(|s| s.to_string())
            })
            .ok_or_else(|| ThemeError::MissingId {
                path: Some(path.to_path_buf()),
            })?;

        Ok(Self {
            id,
            colors,
            source_path: None,
        })
    }
}

/// Parses a YAML theme definition into its id and color map.
fn parse_yaml(yaml: &str) -> Result<(Option<String>, HashMap<String, Color>), ThemeError> {
    let file: ThemeFile = serde_yaml::from_str(yaml).map_err(|e| ThemeError::Parse {
        path: None,
        message: e.to_string(),
    })?;
    let mut colors = HashMap::new();
    for (role, value) in &file.colors {
        let color = Color::parse_value(value).map_err(|_| ThemeError::InvalidColor {
            role: role.clone(),
            value: value_display(value),
            path: None,
        })?;
        colors.insert(role.clone(), color);
    }
    Ok((file.id, colors))
}

/// Parses a JSON theme definition into its id and color map.
fn parse_json(json: &str) -> Result<(Option<String>, HashMap<String, Color>), ThemeError> {
    let file: ThemeFileJson = serde_json::from_str(json).map_err(|e| ThemeError::Parse {
        path: None,
        message: e.to_string(),
    })?;
    let mut colors = HashMap::new();
    for (role, value) in &file.colors {
        let color = Color::parse_json_value(value).map_err(|_| ThemeError::InvalidColor {
            role: role.clone(),
            value: value.to_string(),
            path: None,
        })?;
        colors.insert(role.clone(), color);
    }
    Ok((file.id, colors))
}

/// Attaches a file path to an error that was produced without one.
fn locate(err: ThemeError, path: &Path) -> ThemeError {
    let p = Some(path.to_path_buf());
    match err {
        ThemeError::Parse { message, .. } => ThemeError::Parse { path: p, message },
        ThemeError::InvalidColor { role, value, .. } => ThemeError::InvalidColor {
            role,
            value,
            path: p,
        },
        ThemeError::MissingId { .. } => ThemeError::MissingId { path: p },
        other => other,
    }
}

/// Formats a YAML value for error messages.
fn value_display(value: &serde_yaml::Value) -> String {
    serde_yaml::to_string(value)
        .map(|s| s.trim_end().to_string())
        .unwrap_or_else(|_| format!("{:?}", value))
}
