//! System color mode detection.
//!
//! Applications that follow the OS appearance pick their startup theme from
//! the user's preferred color scheme. [`detect_color_mode`] queries the OS;
//! override it for testing with [`set_mode_detector`]:
//!
//! ```rust
//! use lacquer::{set_mode_detector, ColorMode};
//!
//! // Force dark mode for testing
//! set_mode_detector(|| ColorMode::Dark);
//! ```

use std::sync::Mutex;

use once_cell::sync::Lazy;

use super::registry;
use super::theme::Theme;

/// The system color mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Light appearance.
    Light,
    /// Dark appearance.
    Dark,
}

impl ColorMode {
    /// The identifier of the built-in theme matching this mode.
    pub fn theme_id(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

type ModeDetector = fn() -> ColorMode;

static MODE_DETECTOR: Lazy<Mutex<ModeDetector>> =
    Lazy::new(|| Mutex::new(default_mode_detector));

/// Overrides the detector used to determine the system color mode.
///
/// This is useful for testing or when an application wants to pin the mode
/// regardless of the OS setting.
pub fn set_mode_detector(detector: ModeDetector) {
    let mut guard = MODE_DETECTOR.lock().unwrap();
    *guard = detector;
}

/// Detects the current system color mode.
///
/// Uses the configured detector (default: ask the OS). When the OS reports
/// no preference, or detection fails, dark mode is assumed.
pub fn detect_color_mode() -> ColorMode {
    let detector = MODE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn default_mode_detector() -> ColorMode {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => ColorMode::Light,
        _ => ColorMode::Dark,
    }
}

/// Returns the registry theme matching the detected system color mode.
///
/// This implements the "system" theme setting: instead of naming a theme,
/// the user asks for whichever built-in matches the OS appearance. Falls
/// back to the built-in dark theme if the matching registry entry was
/// unregistered.
pub fn system_theme() -> Theme {
    let mode = detect_color_mode();
    registry::get_theme(mode.theme_id()).unwrap_or_else(registry::dark_theme)
}
