//! Terminal UI: view models, ANSI components and theming.
//!
//! ```text
//! AppState → compute_viewmodel → UIViewModel → render → ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: display-ready state for one frame
//! - [`renderer`]: top-level rendering entry point
//! - [`components`]: header, table, search bar, overlays and toasts
//! - [`helpers`]: cursor positioning, truncation and match highlighting
//! - [`theme`]: palettes and the persisted dark/light preference
//!
//! # Example
//!
//! ```rust
//! use travel_authority::app::AppState;
//! use travel_authority::storage::RecordStore;
//! use travel_authority::ui::{render, ThemeMode, ThemeService};
//!
//! let theme = ThemeService::load(None, ThemeMode::Dark)?;
//! let state = AppState::new(RecordStore::transient(), theme);
//! render(&state, 24, 80);
//! # Ok::<(), travel_authority::TravelAuthorityError>(())
//! ```

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::{Theme, ThemeMode, ThemeService};
pub use viewmodel::{Body, DashboardView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, SearchBarInfo, UIViewModel};
