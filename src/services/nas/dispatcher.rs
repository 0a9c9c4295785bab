use tokio::time;
use tracing::{debug, info, instrument, warn};

use super::{
    action::Action,
    client::NasClient,
    context::Context,
    error::{NasError, TransportError},
    messages::{Request, Response},
};

/// Outcome of a dispatched operation.
#[derive(Debug)]
pub struct Completion {
    /// Action that was run.
    pub action: Action,
    /// Path of the device the request went to.
    pub device_path: String,
    /// The response, or why none was received.
    pub result: Result<Response, NasError>,
}

/// Runs exactly one NAS request against a context.
///
/// The dispatcher is consumed by [`Dispatcher::run`], so at most one request
/// is ever outstanding and its outcome is delivered once.
pub struct Dispatcher {
    context: Context,
}

impl Dispatcher {
    /// Takes exclusive ownership of the context for one operation.
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    /// Submits the request for `action` and waits for its single outcome.
    ///
    /// The wait ends on the reply, on the action's timeout, or on
    /// cancellation of the context's token, whichever comes first. The
    /// context is released before returning on every path.
    #[instrument(skip(self), fields(device = %self.context.device_path()))]
    pub async fn run(mut self, action: Action) -> Completion {
        let result = self.submit(action).await;

        match &result {
            Ok(_) => info!(%action, "NAS operation completed"),
            Err(e) => warn!(%action, error = %e, "NAS operation failed"),
        }

        self.context.release();

        Completion {
            action,
            device_path: self.context.device_path().to_string(),
            result,
        }
    }

    async fn submit(&self, action: Action) -> Result<Response, NasError> {
        let client = self.context.client()?;

        let Some(request) = Request::for_action(action) else {
            // Complete on the next scheduler turn, as every other action does.
            tokio::task::yield_now().await;
            return Ok(Response::Noop);
        };

        let timeout = action.timeout();
        let cancellation = self.context.cancellation();
        debug!("Asynchronously {}...", action.progress());

        tokio::select! {
            biased;

            _ = cancellation.cancelled() => {
                Err(TransportError::Cancelled { action }.into())
            }

            reply = time::timeout(timeout, send(client, request)) => {
                match reply {
                    Ok(response) => response.map_err(NasError::from),
                    Err(_) => Err(TransportError::Timeout { action, timeout }.into()),
                }
            }
        }
    }
}

async fn send(client: &dyn NasClient, request: Request) -> Result<Response, TransportError> {
    let response = match request {
        Request::GetSignalStrength(input) => {
            Response::SignalStrength(client.get_signal_strength(input).await?)
        }
        Request::GetSignalInfo => Response::SignalInfo(client.get_signal_info().await?),
        Request::GetServingSystem => Response::ServingSystem(client.get_serving_system().await?),
        Request::GetTechnologyPreference => {
            Response::TechnologyPreference(client.get_technology_preference().await?)
        }
        Request::GetSystemSelectionPreference => {
            Response::SystemSelectionPreference(client.get_system_selection_preference().await?)
        }
        Request::NetworkScan => Response::NetworkScan(client.network_scan().await?),
        Request::Reset => Response::Reset(client.reset().await?),
    };

    Ok(response)
}
