use std::{path::PathBuf, sync::Arc};

use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

use super::{ActionSelector, Cli, CliError, CommandResult, formatting};
use crate::{
    config::{Config, OutputFormat},
    services::nas::{
        Action, Context, Dispatcher, ModemDevice, NasError, ReplayDevice, Report,
    },
};

/// Runs the single NAS action requested on the command line.
///
/// Command-line values take precedence over the configuration file.
pub struct CliService {
    selector: ActionSelector,
    device: Option<PathBuf>,
    format: OutputFormat,
    color: bool,
}

impl CliService {
    /// Creates the service from parsed arguments and loaded configuration.
    pub fn new(cli: &Cli, config: &Config) -> Self {
        Self {
            selector: ActionSelector::new(cli.actions.clone()),
            device: cli.device.clone().or_else(|| config.device.path.clone()),
            format: cli.output.unwrap_or(config.output.format),
            color: config.output.color && !cli.no_color,
        }
    }

    /// The action selector for this invocation.
    pub fn selector(&self) -> &ActionSelector {
        &self.selector
    }

    /// Whether diagnostics may be coloured.
    pub fn color(&self) -> bool {
        self.color
    }

    /// Opens the configured device and runs the selected action on it.
    ///
    /// The action selection is validated before the device is opened.
    ///
    /// # Errors
    /// Returns `CliError` if the selection is invalid, no device is
    /// configured, the device cannot be opened, or the operation fails.
    pub async fn run(&self, cancellation: CancellationToken) -> CommandResult {
        self.selected()?;

        let path = self.device.as_deref().ok_or(CliError::NoDevice)?;
        let device = ReplayDevice::load(path)?;

        self.execute(Arc::new(device), cancellation).await
    }

    /// Runs the selected action on `device` and renders its report.
    ///
    /// Exactly one client is allocated and it is released before this
    /// returns, whatever the outcome.
    ///
    /// # Errors
    /// Returns `CliError::TooManyActions` or `CliError::NoAction` before
    /// touching the device, and `CliError::Nas` if the operation fails.
    #[instrument(skip_all)]
    pub async fn execute(
        &self,
        device: Arc<dyn ModemDevice>,
        cancellation: CancellationToken,
    ) -> CommandResult {
        let action = self.selected()?;

        let client = device
            .allocate_nas_client()
            .await
            .map_err(NasError::from)?;
        debug!(cid = client.cid(), %action, "NAS client ready");

        let context = Context::new(device, client, cancellation);
        let completion = Dispatcher::new(context).run(action).await;

        let response = completion.result?;
        let report = Report::decode(action, &response)?;

        formatting::render(self.format, &completion.device_path, action, &report)
    }

    fn selected(&self) -> Result<Action, CliError> {
        self.selector.select()?.ok_or(CliError::NoAction)
    }
}
