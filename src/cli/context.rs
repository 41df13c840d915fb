//! Shared setup for commands: config, remote client, session store.

use anyhow::{Context as _, Result};

use snooze_cli::api::ApiClient;
use snooze_cli::app::{AppState, Controller};
use snooze_cli::config::{self, Config};
use snooze_cli::session::SessionStore;
use snooze_cli::view::{text, PageView};

use super::OutputFormat;

/// Options that apply to every command.
pub struct Context {
    api_url: Option<String>,
}

impl Context {
    pub fn new(api_url: Option<String>) -> Self {
        Self { api_url }
    }

    /// Server URL: command line first, then config, then the default.
    pub fn api_url(&self, config: &Config) -> String {
        self.api_url
            .as_deref()
            .unwrap_or_else(|| config.api_url())
            .to_string()
    }

    pub fn session_store(&self, config: &Config) -> Result<SessionStore> {
        let path = config::session_path()?;
        Ok(if config.use_keyring {
            SessionStore::keyring_or_file(path)
        } else {
            SessionStore::file(path)
        })
    }

    /// A controller that has not loaded anything yet.
    pub fn controller(&self) -> Result<Controller<ApiClient>> {
        let config = Config::load().context("Failed to load configuration")?;
        let api = ApiClient::with_url(&self.api_url(&config));
        tracing::debug!(api_url = api.base_url(), "using story server");
        Ok(Controller::new(api, self.session_store(&config)?))
    }

    /// A controller after the initial page load.
    pub fn start(&self) -> Result<Controller<ApiClient>> {
        let mut controller = self.controller()?;
        let url = controller.api().base_url().to_string();
        controller
            .start()
            .with_context(|| format!("Failed to load stories from {url}"))?;
        Ok(controller)
    }
}

/// Prints the active panel of `state`.
pub fn print_view(state: &AppState, format: OutputFormat) -> Result<()> {
    let page = PageView::from_state(state);
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(page.current_list())?;
            println!("{json}");
        }
        OutputFormat::Text => println!("{}", text::render_page(&page)),
    }
    Ok(())
}
