//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.eventlens.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `EVENTLENS_BASE_URL`, `EVENTLENS_KEYWORD`,
//!    and so on
//! 4. **Command-line arguments** – `--base-url`/`-b`, `--keyword`/`-q`, etc.
//!
//! # Configuration File
//!
//! Place `.eventlens.toml` in the current directory, home directory, or
//! XDG config directory with:
//!
//! ```toml
//! base_url = "http://127.0.0.1:8000"
//! department = "Cardiology"
//! page_size = 10
//! log_file = "eventlens.log"
//! ```

use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::api::error::ListingError;
use crate::api::gateway::{GatewaySettings, parse_base_url};
use crate::api::pagination::PageSize;
use crate::tui::state::FilterState;

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Print a single event and exit.
    EventDetail,
    /// Print one page of the listing and exit.
    Listing,
    /// Interactive TUI for browsing the listing.
    Tui,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `EVENTLENS_BASE_URL` or `--base-url`: Backend origin
/// - `EVENTLENS_KEYWORD` or `--keyword`: Initial title keyword
/// - `EVENTLENS_DEPARTMENT` or `--department`: Initial department
/// - `EVENTLENS_PAGE_SIZE` or `--page-size`: Initial page size
/// - `EVENTLENS_LOG_FILE` or `--log-file`: Destination for tracing output
///
/// # Example
///
/// ```no_run
/// use eventlens::EventLensConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = EventLensConfig::load().expect("failed to load configuration");
/// let filters = config.initial_filter_state().expect("valid filters");
/// assert_eq!(filters.page(), 1);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "EVENTLENS",
    discovery(
        dotfile_name = ".eventlens.toml",
        config_file_name = "eventlens.toml",
        app_name = "eventlens"
    )
)]
pub struct EventLensConfig {
    /// Origin of the events backend, optionally with a path prefix.
    ///
    /// Can be provided via:
    /// - CLI: `--base-url <URL>` or `-b <URL>`
    /// - Environment: `EVENTLENS_BASE_URL`
    /// - Config file: `base_url = "..."`
    #[ortho_config(cli_short = 'b')]
    pub base_url: String,

    /// Initial title keyword.
    #[ortho_config(cli_short = 'q')]
    pub keyword: Option<String>,

    /// Initial department filter.
    #[ortho_config(cli_short = 'd')]
    pub department: Option<String>,

    /// Initial lower date bound (`YYYY-MM-DD`).
    #[ortho_config()]
    pub from: Option<String>,

    /// Initial upper date bound (`YYYY-MM-DD`).
    #[ortho_config()]
    pub to: Option<String>,

    /// Starts with the CME-only filter enabled.
    ///
    /// Can be provided via:
    /// - CLI: `--cme`
    /// - Config file: `cme = true`
    ///
    /// Note: `EVENTLENS_CME` is not supported because `ortho_config` does not
    /// load boolean values from the environment.
    #[ortho_config()]
    pub cme: bool,

    /// Starts with the virtual-only filter enabled.
    #[ortho_config()]
    pub virtual_only: bool,

    /// Initial page size; one of 1, 5, 10, or 20.
    #[ortho_config(cli_short = 's')]
    pub page_size: u32,

    /// HTTP request timeout in seconds.
    #[ortho_config()]
    pub timeout_seconds: u64,

    /// File that receives tracing output.
    ///
    /// Logging is disabled when unset; the TUI owns the terminal so nothing
    /// is ever written to stdout or stderr by the subscriber.
    ///
    /// Can be provided via:
    /// - CLI: `--log-file <PATH>` or `-L <PATH>`
    /// - Environment: `EVENTLENS_LOG_FILE`
    #[ortho_config(cli_short = 'L')]
    pub log_file: Option<String>,

    /// Prints one page of the listing to stdout and exits.
    ///
    /// Can be provided via:
    /// - CLI: `--list` / `-l`
    /// - Config file: `list = true`
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Prints the event with this identifier and exits.
    #[ortho_config()]
    pub event_id: Option<u64>,
}

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

impl Default for EventLensConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            keyword: None,
            department: None,
            from: None,
            to: None,
            cme: false,
            virtual_only: false,
            page_size: PageSize::default().get(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            log_file: None,
            list: false,
            event_id: None,
        }
    }
}

impl EventLensConfig {
    /// Checks that the configured values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] when the base URL is blank or
    /// not an HTTP(S) URL, or when the page size is not one of the offered
    /// choices.
    pub fn validate(&self) -> Result<(), ListingError> {
        parse_base_url(&self.base_url).map_err(|error| ListingError::Configuration {
            message: format!("base_url: {error}"),
        })?;
        self.page_size()?;
        Ok(())
    }

    /// Returns the configured page size as a [`PageSize`] choice.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] for values other than 1, 5,
    /// 10, or 20.
    pub fn page_size(&self) -> Result<PageSize, ListingError> {
        PageSize::try_from(self.page_size).map_err(|_| ListingError::Configuration {
            message: format!(
                "page_size must be one of 1, 5, 10 or 20 (got {})",
                self.page_size
            ),
        })
    }

    /// Builds the filter state the listing starts from.
    ///
    /// # Errors
    ///
    /// Returns [`ListingError::Configuration`] when the page size is invalid.
    pub fn initial_filter_state(&self) -> Result<FilterState, ListingError> {
        let mut state = FilterState::new();
        state.set_page_size(self.page_size()?);
        if let Some(keyword) = &self.keyword {
            state.set_keyword(keyword.as_str());
        }
        if let Some(department) = &self.department {
            state.set_department(department.as_str());
        }
        if let Some(from) = &self.from {
            state.set_date_from(from.as_str());
        }
        if let Some(to) = &self.to {
            state.set_date_to(to.as_str());
        }
        state.set_cme_only(self.cme);
        state.set_virtual_only(self.virtual_only);
        Ok(state)
    }

    /// Returns the HTTP settings for the events gateway.
    #[must_use]
    pub fn gateway_settings(&self) -> GatewaySettings {
        GatewaySettings::new(self.base_url.as_str())
            .with_timeout(Duration::from_secs(self.timeout_seconds.max(1)))
    }

    /// Determines the operation mode based on provided configuration.
    ///
    /// Returns `EventDetail` if an event id is set, `Listing` if `--list` was
    /// given, or `Tui` otherwise.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.event_id.is_some() {
            OperationMode::EventDetail
        } else if self.list {
            OperationMode::Listing
        } else {
            OperationMode::Tui
        }
    }
}

#[cfg(test)]
mod tests;
