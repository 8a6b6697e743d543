//! Travel Authority: a Zellij plugin dashboard for travel authority records.
//!
//! The plugin provides:
//! - A demo login screen gating the dashboard
//! - A sortable, searchable table of travel records
//! - A single create/edit form with required-field validation
//! - Toast notifications and a persisted dark/light theme
//! - A sidebar with informational dialogs

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling by screen and input mode          │
//! │  - Form, login, toasts, sidebar                     │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Table Layer   │   │ Storage Layer │
//! │ (ui/)         │   │ (table/)      │   │ (storage/)    │
//! │ - Rendering   │   │ - Row render  │   │ - KV adapter  │
//! │ - Theming     │   │ - Search/sort │   │ - Record store│
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                              │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) · Infrastructure · Observability  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use travel_authority::app::{handle_event, Event};
//! use travel_authority::storage::{shared, MemoryStore};
//! use travel_authority::{initialize_with_store, Config};
//!
//! let config = Config { require_login: false, ..Default::default() };
//! let mut state = initialize_with_store(shared(MemoryStore::default()), &config)?;
//!
//! let (should_render, _actions) = handle_event(&mut state, &Event::NewRecord)?;
//! assert!(should_render);
//! assert!(state.form.is_open());
//! # Ok::<(), travel_authority::TravelAuthorityError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod table;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, InputMode, Screen};
pub use domain::{RecordFields, RecordId, Result, TravelAuthorityError, TravelRecord};
pub use ui::{Theme, ThemeMode};

use std::collections::BTreeMap;
use std::path::PathBuf;

use app::Credentials;
use storage::{shared, JsonFileStore, RecordStore, SharedStore};
use ui::ThemeService;

/// Plugin configuration parsed from the Zellij layout.
///
/// ```kdl
/// plugin location="file:travel-authority.wasm" {
///     data_dir "~/.local/share/zellij/travel-authority"
///     theme "light"
///     demo_username "admin"
///     demo_password "admin"
///     require_login "true"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding `store.json` and the trace export.
    pub data_dir: PathBuf,

    /// Mode used until the user toggles and a preference is stored.
    pub theme: ThemeMode,

    pub demo_username: String,
    pub demo_password: String,

    /// When false the plugin opens straight on the dashboard.
    pub require_login: bool,

    /// `EnvFilter` directive for exported spans. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let credentials = Credentials::default();
        Self {
            data_dir: infrastructure::get_data_dir(),
            theme: ThemeMode::Dark,
            demo_username: credentials.username,
            demo_password: credentials.password,
            require_login: true,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Unknown keys are ignored; unparsable values keep their default and
    /// are logged.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use travel_authority::{Config, ThemeMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("theme".to_string(), "light".to_string());
    /// map.insert("require_login".to_string(), "false".to_string());
    /// map.insert("data_dir".to_string(), "~/ta".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.theme, ThemeMode::Light);
    /// assert!(!config.require_login);
    /// assert_eq!(config.data_dir.to_str(), Some("/host/ta"));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let data_dir = config
            .get("data_dir")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or(defaults.data_dir, |s| PathBuf::from(infrastructure::expand_tilde(s)));

        let theme = config.get("theme").map_or(defaults.theme, |s| {
            s.parse::<ThemeMode>().unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid theme option, using default");
                defaults.theme
            })
        });

        let require_login = config.get("require_login").map_or(defaults.require_login, |s| {
            parse_flag("require_login", s).unwrap_or_else(|e| {
                tracing::debug!(error = %e, "invalid require_login option, using default");
                defaults.require_login
            })
        });

        Self {
            data_dir,
            theme,
            demo_username: config.get("demo_username").cloned().unwrap_or(defaults.demo_username),
            demo_password: config.get("demo_password").cloned().unwrap_or(defaults.demo_password),
            require_login,
            trace_level: config.get("trace_level").cloned(),
        }
    }

    fn credentials(&self) -> Credentials {
        Credentials {
            username: self.demo_username.clone(),
            password: self.demo_password.clone(),
        }
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        other => Err(TravelAuthorityError::Config(format!("{key}: expected true/false, got {other:?}"))),
    }
}

/// Builds the initial state backed by `<data_dir>/store.json`.
///
/// If the store file cannot be opened the plugin keeps working on a
/// transient record store; nothing is persisted for that session.
///
/// # Errors
///
/// Returns an error if a built-in theme palette fails to parse.
pub fn initialize(config: &Config) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize", data_dir = %config.data_dir.display()).entered();

    match JsonFileStore::open(infrastructure::store_file(&config.data_dir)) {
        Ok(store) => initialize_with_store(shared(store), config),
        Err(e) => {
            tracing::warn!(error = %e, "store unavailable, records will not persist");
            let theme = ThemeService::load(None, config.theme)?;
            Ok(finish(AppState::new(RecordStore::transient(), theme), config))
        }
    }
}

/// Builds the initial state on an explicit key-value backend.
///
/// Records and the theme preference both live in `backend`.
///
/// # Errors
///
/// Returns an error if a built-in theme palette fails to parse.
pub fn initialize_with_store(backend: SharedStore, config: &Config) -> Result<AppState> {
    let theme = ThemeService::load(Some(backend.clone()), config.theme)?;
    let records = RecordStore::persistent(backend);
    Ok(finish(AppState::new(records, theme), config))
}

fn finish(state: AppState, config: &Config) -> AppState {
    let state = state.with_credentials(config.credentials());
    if config.require_login {
        state
    } else {
        state.skip_login()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStore, MemoryStore};

    #[test]
    fn defaults_match_demo_setup() {
        let config = Config::from_zellij(&BTreeMap::new());
        assert_eq!(config.demo_username, "admin");
        assert_eq!(config.demo_password, "admin");
        assert!(config.require_login);
        assert_eq!(config.theme, ThemeMode::Dark);
    }

    #[test]
    fn bad_values_fall_back() {
        let map = BTreeMap::from([
            ("theme".to_string(), "sepia".to_string()),
            ("require_login".to_string(), "maybe".to_string()),
        ]);
        let config = Config::from_zellij(&map);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.require_login);
        assert!(matches!(parse_flag("k", "maybe"), Err(TravelAuthorityError::Config(_))));
    }

    #[test]
    fn stored_theme_wins_over_config() {
        let backend = shared(MemoryStore::with_entries([("theme", "light")]));
        let state = initialize_with_store(backend, &Config::default()).unwrap();
        assert_eq!(state.theme.mode(), ThemeMode::Light);
        assert_eq!(state.screen, Screen::Login);
    }

    #[test]
    fn login_can_be_skipped() {
        let config = Config {
            require_login: false,
            ..Default::default()
        };
        let backend = shared(MemoryStore::default());
        let state = initialize_with_store(backend.clone(), &config).unwrap();
        assert_eq!(state.screen, Screen::Dashboard);
        assert!(backend.borrow().get("theme").unwrap().is_none());
    }

    #[test]
    fn initialize_uses_store_file_in_data_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let state = initialize(&config).unwrap();
        assert!(state.store.is_durable());
        assert!(state.store.is_empty());
    }
}
