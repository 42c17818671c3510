// SPDX-License-Identifier: MPL-2.0
//! Centralized resolution of startup overrides.
//!
//! Two values can be overridden outside of `settings.toml`: the directory the
//! config file lives in, and the GraphQL endpoint.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI arguments** (`--config-dir`, `--endpoint`) - set via [`init_cli_overrides`]
//! 3. **Environment variables** (`PEOPLE_LENS_CONFIG_DIR`, `PEOPLE_LENS_ENDPOINT`)
//! 4. **Default** - platform config dir via `dirs`, or the endpoint from config
//!
//! CLI overrides should be initialized once at startup:
//! ```ignore
//! paths::init_cli_overrides(flags.config_dir, flags.endpoint);
//! ```

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "PeopleLens";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "PEOPLE_LENS_CONFIG_DIR";

/// Environment variable to override the GraphQL endpoint.
pub const ENV_ENDPOINT: &str = "PEOPLE_LENS_ENDPOINT";

static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();
static CLI_ENDPOINT: OnceLock<Option<String>> = OnceLock::new();

/// Records the `--config-dir` and `--endpoint` CLI arguments.
///
/// Only the first call has an effect; later calls are logged and ignored.
pub fn init_cli_overrides(config_dir: Option<String>, endpoint: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err()
        || CLI_ENDPOINT.set(endpoint).is_err()
    {
        tracing::warn!("CLI overrides already initialized, ignoring");
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Returns the application config directory path.
///
/// - Linux: `~/.config/PeopleLens/`
/// - macOS: `~/Library/Application Support/PeopleLens/`
/// - Windows: `C:\Users\<User>\AppData\Roaming\PeopleLens\`
///
/// Returns `None` if the config directory cannot be determined (rare edge case).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = CLI_CONFIG_DIR.get().and_then(Clone::clone) {
        return Some(path);
    }

    if let Some(env_path) = non_empty_env(ENV_CONFIG_DIR) {
        return Some(PathBuf::from(env_path));
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

/// Returns the endpoint to connect to: CLI, then environment, then `configured`.
pub fn resolve_endpoint(configured: &str) -> String {
    CLI_ENDPOINT
        .get()
        .and_then(Clone::clone)
        .or_else(|| non_empty_env(ENV_ENDPOINT))
        .unwrap_or_else(|| configured.to_string())
}
