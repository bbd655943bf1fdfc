use crate::api::client::UserClient;
use crate::cli::main_types::{Commands, ConfigCommands};
use crate::core::paginator::Paginator;
use crate::display::console::ConsoleReporter;
use crate::error::AppError;
use crate::map_display_error;
use crate::storage::config::{Config, ConfigOverrides, Settings};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};

/// How a command ended when it did not return an error.
///
/// `Failed` means the failure was already reported to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failed,
}

pub struct Dispatcher {
    config: Config,
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
}

impl Dispatcher {
    pub fn new(config: Config, config_path: Option<PathBuf>, overrides: ConfigOverrides) -> Self {
        Self {
            config,
            config_path,
            overrides,
        }
    }

    /// Validate configuration once, before any request is made
    pub fn settings(&self) -> Result<Settings, AppError> {
        Ok(self.config.resolve(&self.overrides)?)
    }

    pub async fn dispatch(&self, command: Commands) -> Result<RunStatus, AppError> {
        self.dispatch_to(command, io::stdout(), io::stderr()).await
    }

    pub async fn dispatch_to<W: Write, E: Write>(
        &self,
        command: Commands,
        out: W,
        err: E,
    ) -> Result<RunStatus, AppError> {
        match command {
            Commands::Fetch => self.handle_fetch(out, err).await,
            Commands::Page { number } => self.handle_page(number, out, err).await,
            Commands::Config { command } => self.handle_config_command(command, out, err),
        }
    }

    async fn handle_fetch<W: Write, E: Write>(
        &self,
        out: W,
        err: E,
    ) -> Result<RunStatus, AppError> {
        let settings = self.settings()?;
        info!("Resolved settings: {:?}", settings);

        let client = UserClient::with_timeout(&settings.base_url, settings.timeout)?;
        let paginator = Paginator::new(client).with_max_pages(settings.max_pages);
        let mut reporter = ConsoleReporter::new(out, err, settings.debug);
        reporter.print_run_settings(&settings.base_url, settings.debug)?;

        let summary = paginator.run(&mut reporter).await?;
        if summary.termination.is_failure() {
            Ok(RunStatus::Failed)
        } else {
            Ok(RunStatus::Success)
        }
    }

    async fn handle_page<W: Write, E: Write>(
        &self,
        number: u32,
        out: W,
        err: E,
    ) -> Result<RunStatus, AppError> {
        let settings = self.settings()?;
        let client = UserClient::with_timeout(&settings.base_url, settings.timeout)?;
        let mut reporter = ConsoleReporter::new(out, err, settings.debug);

        let users = client.fetch_page(number).await?;
        if users.is_empty() {
            reporter.print_empty_page(number)?;
        } else {
            reporter.print_page(number, &users)?;
        }
        Ok(RunStatus::Success)
    }

    fn handle_config_command<W: Write, E: Write>(
        &self,
        command: ConfigCommands,
        mut out: W,
        err: E,
    ) -> Result<RunStatus, AppError> {
        match command {
            ConfigCommands::Show => {
                debug!("Attempting config show command");
                let settings = self.settings()?;
                let mut reporter = ConsoleReporter::new(out, err, settings.debug);
                reporter.print_settings(&settings.describe())?;
                Ok(RunStatus::Success)
            }
            ConfigCommands::Init { force } => {
                debug!("Attempting config init command");
                let path = Config::init(
                    self.config_path.clone(),
                    self.overrides.base_url.clone(),
                    force,
                )?;
                map_display_error!(
                    writeln!(out, "Wrote configuration to {}", path.display()),
                    "write stdout"
                )?;
                Ok(RunStatus::Success)
            }
        }
    }
}
