// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::people;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    People(people::Message),
    Notification(notifications::NotificationMessage),
    Tick(Instant), // Periodic tick for notification auto-dismiss
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional GraphQL endpoint override.
    /// Takes precedence over `PEOPLE_LENS_ENDPOINT` and `settings.toml`.
    pub endpoint: Option<String>,
    /// Optional bearer token override. Takes precedence over `settings.toml`.
    pub token: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `PEOPLE_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
