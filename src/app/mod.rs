// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires the people gallery to the photo server and the
//! notification toasts, and translates gallery effects into remote tasks.
//! Startup policy (config loading, endpoint resolution, window size) lives
//! here so it is easy to audit user-facing behavior.

pub mod config;
pub mod effects;
pub mod logging;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::port::{RemoteDataPort, RemoteError};
use crate::infrastructure::{GraphQlClient, GraphQlSettings};
use crate::ui::notifications;
use crate::ui::people;
use crate::ui::theming::ThemeMode;
use effects::SharedPort;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    gallery: people::State,
    notifications: notifications::Manager,
    port: SharedPort,
    theme_mode: ThemeMode,
    endpoint: String,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("endpoint", &self.endpoint)
            .field("groups", &self.gallery.groups().len())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 420;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Connection settings from config, with CLI and environment overrides
/// applied.
pub fn graphql_settings(config: &config::Config, flags: &Flags) -> GraphQlSettings {
    let endpoint = match &flags.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => paths::resolve_endpoint(&config.server.endpoint),
    };
    let token = flags
        .token
        .clone()
        .or_else(|| config.server.token.clone());

    GraphQlSettings {
        endpoint,
        token,
        timeout: config.server.timeout(),
    }
}

impl App {
    /// Loads the config, connects the GraphQL client and requests the first
    /// page of people.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let settings = graphql_settings(&config, &flags);

        let port: SharedPort = match GraphQlClient::new(&settings) {
            Ok(client) => {
                tracing::info!(endpoint = %client.endpoint(), "connected to photo server");
                Ok(Arc::new(client) as Arc<dyn RemoteDataPort>)
            }
            Err(error) => {
                tracing::error!(endpoint = %settings.endpoint, %error, "invalid server settings");
                Err(error)
            }
        };

        let mut app = Self::with_port(&config, port, settings.endpoint);
        if let Some(warning) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(warning));
        }

        let task = app.start();
        (app, task)
    }

    /// Builds the application around an existing port.
    pub fn with_port(config: &config::Config, port: SharedPort, endpoint: String) -> Self {
        Self {
            gallery: people::State::new(people::Settings::from(&config.gallery)),
            notifications: notifications::Manager::new(),
            port,
            theme_mode: config.general.theme_mode,
            endpoint,
        }
    }

    /// Issues the initial page request.
    pub fn start(&mut self) -> Task<Message> {
        let effect = self.gallery.init();
        update::run_effect(&mut self.update_context(), effect)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            gallery: &mut self.gallery,
            notifications: &mut self.notifications,
            port: &self.port,
        }
    }

    fn title(&self) -> String {
        let count = self.gallery.groups().len();
        if count == 0 {
            "PeopleLens".to_string()
        } else {
            format!("PeopleLens - {count} people")
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.notifications.has_notifications()),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::People(message) => {
                update::handle_people_message(&mut self.update_context(), message)
            }
            Message::Notification(message) => {
                update::handle_notification_message(&mut self.notifications, &message)
            }
            Message::Tick(_) => {
                self.notifications.tick();
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            gallery: &self.gallery,
            notifications: &self.notifications,
        })
    }

    #[must_use]
    pub fn gallery(&self) -> &people::State {
        &self.gallery
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    /// Endpoint the app talks to, for diagnostics.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Whether the remote client was built successfully.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.port.is_ok()
    }
}

/// Error used when no client exists at all, e.g. in tests.
pub fn disconnected() -> SharedPort {
    Err(RemoteError::Transport("no photo server configured".to_string()))
}
