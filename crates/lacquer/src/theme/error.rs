//! Theme loading error types.

use std::fmt;
use std::path::PathBuf;

/// Error type for theme parsing and loading failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// YAML/JSON parse error.
    Parse {
        /// Optional source file path.
        path: Option<PathBuf>,
        /// Error message from the underlying parser.
        message: String,
    },

    /// A color value could not be parsed.
    InvalidColor {
        /// Role name where the error occurred.
        role: String,
        /// The invalid color value, as written.
        value: String,
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// The theme definition carries no identifier and none can be derived.
    MissingId {
        /// Optional source file path.
        path: Option<PathBuf>,
    },

    /// File loading error.
    Load {
        /// Error message from the file loader.
        message: String,
    },
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeError::Parse { path, message } => {
                if let Some(p) = path {
                    write!(f, "Failed to parse theme {}: {}", p.display(), message)
                } else {
                    write!(f, "Failed to parse theme: {}", message)
                }
            }
            ThemeError::InvalidColor { role, value, path } => {
                let location = path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                write!(f, "Invalid color '{}' for role '{}'{}", value, role, location)
            }
            ThemeError::MissingId { path } => {
                let location = path
                    .as_ref()
                    .map(|p| format!(" in {}", p.display()))
                    .unwrap_or_default();
                write!(f, "Theme definition has no id{}", location)
            }
            ThemeError::Load { message } => {
                write!(f, "Failed to load theme: {}", message)
            }
        }
    }
}

impl std::error::Error for ThemeError {}
