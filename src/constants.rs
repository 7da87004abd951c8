//! Application-wide constants.
//!
//! Fixed names shared across modules so the env var, directory layout and
//! log format are defined in one place.

/// Environment variable supplying the workspace root (platform path-list
/// syntax; the first non-empty entry wins).
pub const GOPATH_ENV: &str = "GOPATH";

/// Subdirectory of the workspace root that holds mirrored checkouts.
pub const SRC_DIR: &str = "src";

/// Git directory name used to detect repositories.
pub const GIT_DIR: &str = ".git";

/// Marker prefixed to every log line.
pub const LOG_PREFIX: &str = ">>>";

/// Timestamp format for log lines (local wall clock, seconds resolution).
pub const TIME_FORMAT: &str = "%H:%M:%S";
