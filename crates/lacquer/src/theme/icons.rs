//! Per-theme icon resource paths.
//!
//! Each theme ships its own icon set under a `theme_<id>` resource prefix,
//! so the same template can point at differently colored icons per theme.
//! Templates usually splice the prefix directly (`theme_{{ id }}:/zoom.svg`);
//! this module is for code that needs the same paths outside a template.
//!
//! # Example
//!
//! ```rust
//! use lacquer::{icon_path, IconSet};
//!
//! assert_eq!(icon_path("dark", "zoom"), "theme_dark:/zoom.svg");
//!
//! let icons = IconSet::new().add("zoom").add("play");
//! let resolved = icons.resolve("light");
//! assert_eq!(resolved.get("play").unwrap(), "theme_light:/play.svg");
//! ```

use std::collections::{BTreeSet, HashMap};

/// Builds the resource path for one icon in a theme's icon set.
pub fn icon_path(theme_id: &str, name: &str) -> String {
    format!("theme_{}:/{}.svg", theme_id, name)
}

/// A collection of icon names resolvable to per-theme resource paths.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    names: BTreeSet<String>,
}

impl IconSet {
    /// Creates an empty icon set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an icon name, returning `self` for chaining.
    pub fn add(mut self, name: impl Into<String>) -> Self {
        self.names.insert(name.into());
        self
    }

    /// Inserts an icon name by mutable reference.
    pub fn insert(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    /// Resolves all icons for the given theme into a flat name → path map.
    pub fn resolve(&self, theme_id: &str) -> HashMap<String, String> {
        self.names
            .iter()
            .map(|name| (name.clone(), icon_path(theme_id, name)))
            .collect()
    }

    /// Returns true if no icons are defined.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns the number of defined icons.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Merges another icon set into this one.
    pub fn merge(mut self, other: IconSet) -> Self {
        self.names.extend(other.names);
        self
    }
}
