//! Host paths as seen from inside the Zellij plugin sandbox.
//!
//! The host filesystem is mounted under `/host`, rooted at the directory
//! Zellij was started from (normally the home directory). Paths from the
//! plugin configuration are written as the user sees them on the host and
//! must be mapped into the sandbox before they can be opened; paths shown in
//! the UI go the other way.

use std::path::{Path, PathBuf};

/// Sandbox mount point of the host filesystem.
pub const HOST_ROOT: &str = "/host";

/// Directory holding the trace file, `~/.local/share/zellij/bookcase` on the
/// host.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::data_dir;
///
/// assert_eq!(data_dir().to_str(), Some("/host/.local/share/zellij/bookcase"));
/// ```
#[must_use]
pub fn data_dir() -> PathBuf {
    Path::new(HOST_ROOT).join(".local/share/zellij/bookcase")
}

/// Maps a configured path into the sandbox.
///
/// `~` and `~/...` resolve under [`HOST_ROOT`], as do relative paths (the
/// plugin's working directory is the host root). Absolute paths are taken
/// as already being sandbox paths.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::resolve_config_path;
/// use std::path::PathBuf;
///
/// assert_eq!(resolve_config_path("~/books/sf.json"), PathBuf::from("/host/books/sf.json"));
/// assert_eq!(resolve_config_path("books/sf.json"), PathBuf::from("/host/books/sf.json"));
/// assert_eq!(resolve_config_path("/host/sf.json"), PathBuf::from("/host/sf.json"));
/// ```
#[must_use]
pub fn resolve_config_path(raw: &str) -> PathBuf {
    let host = Path::new(HOST_ROOT);

    match raw.strip_prefix('~') {
        Some("") => host.to_path_buf(),
        Some(rest) if rest.starts_with('/') => host.join(rest.trim_start_matches('/')),
        _ if Path::new(raw).is_absolute() => PathBuf::from(raw),
        _ => host.join(raw),
    }
}

/// Renders a sandbox path the way the user would write it on the host.
///
/// Paths under [`HOST_ROOT`] are shown relative to `~`; anything else is
/// shown unchanged.
///
/// # Examples
///
/// ```
/// use bookcase::infrastructure::display_path;
/// use std::path::Path;
///
/// assert_eq!(display_path(Path::new("/host/books/sf.json")), "~/books/sf.json");
/// assert_eq!(display_path(Path::new("/tmp/sf.json")), "/tmp/sf.json");
/// ```
#[must_use]
pub fn display_path(path: &Path) -> String {
    match path.strip_prefix(HOST_ROOT) {
        Ok(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Ok(rest) => format!("~/{}", rest.display()),
        Err(_) => path.display().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_then_display_round_trips_home_paths() {
        for raw in ["~/catalogs/sf.json", "~"] {
            assert_eq!(display_path(&resolve_config_path(raw)), raw);
        }
    }

    #[test]
    fn tilde_without_slash_is_a_relative_name() {
        assert_eq!(resolve_config_path("~books.json"), PathBuf::from("/host/~books.json"));
    }

    #[test]
    fn host_prefix_must_be_a_whole_component() {
        assert_eq!(display_path(Path::new("/hosted/sf.json")), "/hosted/sf.json");
    }
}
