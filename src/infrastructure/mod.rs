//! Infrastructure layer for filesystem and environment interactions.
//!
//! Utilities for working with the Zellij plugin sandbox, where the host
//! filesystem is mounted under `/host`.

pub mod paths;

pub use paths::{data_dir, display_path, resolve_config_path, HOST_ROOT};
