//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin runtime (`main.rs`) and the
//! storage/table layers. Data flows one way:
//!
//! ```text
//! User Input → Event → handle_event → Store / Form / Table mutations → Actions
//!                                            ↓
//!                                  compute_viewmodel → render
//! ```
//!
//! # Modules
//!
//! - [`actions`]: side effects returned to the plugin runtime
//! - [`form`]: shared create/edit form and record validation
//! - [`handler`]: event dispatch by screen and input mode
//! - [`login`]: demo login form
//! - [`modes`]: screen and input mode types
//! - [`notify`]: toast notification service
//! - [`sidebar`]: sidebar entries and informational dialogs
//! - [`state`]: central state container and view model computation

pub mod actions;
pub mod form;
pub mod handler;
pub mod login;
pub mod modes;
pub mod notify;
pub mod sidebar;
pub mod state;

pub use actions::Action;
pub use form::{FormField, FormMediator, FormMode, SubmitOutcome, ValidationErrors};
pub use handler::{handle_event, Event};
pub use login::{Credentials, LoginForm, LoginOutcome};
pub use modes::{InputMode, Screen};
pub use notify::{Notifier, Toast, ToastVariant};
pub use sidebar::{InfoDialog, SidebarItem};
pub use state::{AppState, Clock};
