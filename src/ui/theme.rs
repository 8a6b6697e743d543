//! Color themes and the dark/light theme service.
//!
//! Two built-in palettes ship with the plugin: `catppuccin-mocha` for dark mode
//! and `catppuccin-latte` for light mode. [`ThemeService`] holds both, knows
//! which one is active, and remembers the choice under [`THEME_KEY`] in the
//! key-value store so it survives restarts.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! header_fg = "#cdd6f4"
//! selection_fg = "#1e1e2e"
//! selection_bg = "#f5c2e7"
//! text_normal = "#cdd6f4"
//! text_dim = "#6c7086"
//! border = "#45475a"
//! search_bar_border = "#f5c2e7"
//! match_highlight_fg = "#1e1e2e"
//! match_highlight_bg = "#f9e2af"
//! empty_state_fg = "#89b4fa"
//! modal_border = "#89b4fa"
//! invalid_fg = "#f38ba8"
//! sort_indicator_fg = "#f9e2af"
//! toast_fg = "#1e1e2e"
//! toast_success_bg = "#a6e3a1"
//! toast_primary_bg = "#89b4fa"
//! toast_danger_bg = "#f38ba8"
//! ```

use crate::domain::{Result, TravelAuthorityError};
use crate::storage::SharedStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Key under which the theme preference is stored.
pub const THEME_KEY: &str = "theme";

/// Named color palette.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub selection_fg: String,
    pub selection_bg: String,

    pub text_normal: String,
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    /// Border of the form, sidebar and dialog overlays.
    pub modal_border: String,
    /// Labels of fields that failed validation.
    pub invalid_fg: String,
    pub sort_indicator_fg: String,

    pub toast_fg: String,
    pub toast_success_bg: String,
    pub toast_primary_bg: String,
    pub toast_danger_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// # Errors
    ///
    /// Returns [`TravelAuthorityError::Theme`] for an unknown name or a palette
    /// that fails to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use travel_authority::ui::theme::Theme;
    ///
    /// let theme = Theme::from_name("catppuccin-latte").unwrap();
    /// assert_eq!(theme.name, "catppuccin-latte");
    /// assert!(Theme::from_name("solarized").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Self> {
        let toml_str = match name {
            "catppuccin-mocha" => include_str!("../../themes/catppuccin-mocha.toml"),
            "catppuccin-latte" => include_str!("../../themes/catppuccin-latte.toml"),
            _ => return Err(TravelAuthorityError::Theme(format!("unknown theme: {name}"))),
        };

        toml::from_str(toml_str)
            .map_err(|e| TravelAuthorityError::Theme(format!("failed to parse theme {name}: {e}")))
    }

    /// Converts `#rrggbb` to RGB, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .unwrap_or(255)
        };

        if hex.len() == 6 {
            (channel(0..2), channel(2..4), channel(4..6))
        } else {
            (255, 255, 255)
        }
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

/// Display mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// Token written to the key-value store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    const fn palette(self) -> &'static str {
        match self {
            Self::Dark => "catppuccin-mocha",
            Self::Light => "catppuccin-latte",
        }
    }
}

impl FromStr for ThemeMode {
    type Err = TravelAuthorityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            other => Err(TravelAuthorityError::Theme(format!("unknown theme mode: {other}"))),
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Active theme plus its persisted preference.
pub struct ThemeService {
    mode: ThemeMode,
    dark: Theme,
    light: Theme,
    store: Option<SharedStore>,
}

impl ThemeService {
    /// Builds the service, reading the stored preference from `store`.
    ///
    /// `fallback` applies when nothing (or something unreadable) is stored.
    ///
    /// # Errors
    ///
    /// Fails only if a built-in palette does not parse.
    pub fn load(store: Option<SharedStore>, fallback: ThemeMode) -> Result<Self> {
        let stored = store.as_ref().and_then(|store| match store.borrow().get(THEME_KEY) {
            Ok(Some(token)) => token
                .parse::<ThemeMode>()
                .map_err(|e| tracing::warn!(error = %e, "ignoring stored theme preference"))
                .ok(),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "failed to read theme preference");
                None
            }
        });

        let mode = stored.unwrap_or(fallback);
        tracing::debug!(mode = %mode, from_store = stored.is_some(), "theme mode resolved");

        Ok(Self {
            mode,
            dark: Theme::from_name(ThemeMode::Dark.palette())?,
            light: Theme::from_name(ThemeMode::Light.palette())?,
            store,
        })
    }

    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Palette for the current mode.
    #[must_use]
    pub const fn active(&self) -> &Theme {
        match self.mode {
            ThemeMode::Dark => &self.dark,
            ThemeMode::Light => &self.light,
        }
    }

    /// Switches dark ↔ light and stores the new preference.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        tracing::debug!(mode = %self.mode, "theme toggled");

        if let Some(store) = &self.store {
            if let Err(e) = store.borrow_mut().set(THEME_KEY, self.mode.as_str()) {
                tracing::warn!(error = %e, "failed to persist theme preference");
            }
        }
        self.mode
    }
}

impl fmt::Debug for ThemeService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeService")
            .field("mode", &self.mode)
            .field("persisted", &self.store.is_some())
            .finish_non_exhaustive()
    }
}
