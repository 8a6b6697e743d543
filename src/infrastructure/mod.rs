//! Infrastructure for the Zellij plugin sandbox.
//!
//! Inside the sandbox the host filesystem is mounted under `/host`; the helpers
//! here resolve configured paths against that mount.

pub mod paths;

pub use paths::{expand_tilde, get_data_dir, store_file, trace_file};
