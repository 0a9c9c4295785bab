use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::{
    client::{ModemDevice, NasClient},
    error::NasError,
};

/// Lifecycle state of a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextState {
    /// Holding the channel, the client and the cancellation token.
    Active,
    /// Handles have been let go; no operation may start.
    Released,
}

/// Resources held for the duration of one NAS operation.
///
/// The context owns the channel and client handles exclusively. It is
/// released once, either explicitly on the operation's terminal path or
/// when dropped; releasing again does nothing.
pub struct Context {
    device: Option<Arc<dyn ModemDevice>>,
    client: Option<Box<dyn NasClient>>,
    cancellation: CancellationToken,
    device_path: String,
    state: ContextState,
}

impl Context {
    /// Takes ownership of the handles for one operation.
    pub fn new(
        device: Arc<dyn ModemDevice>,
        client: Box<dyn NasClient>,
        cancellation: CancellationToken,
    ) -> Self {
        let device_path = device.path_display();

        Self {
            device: Some(device),
            client: Some(client),
            cancellation,
            device_path,
            state: ContextState::Active,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ContextState {
        self.state
    }

    /// Device path for confirmation and error lines.
    ///
    /// Kept after release so terminal output can still name the channel.
    pub fn device_path(&self) -> &str {
        &self.device_path
    }

    /// The channel handle, while active.
    pub fn device(&self) -> Option<&dyn ModemDevice> {
        self.device.as_deref()
    }

    /// Token that cancels the in-flight request.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// The NAS client, if the context is still active.
    ///
    /// # Errors
    /// Returns `NasError::ContextReleased` once the context has been released.
    pub fn client(&self) -> Result<&dyn NasClient, NasError> {
        match (&self.state, &self.client) {
            (ContextState::Active, Some(client)) => Ok(client.as_ref()),
            _ => Err(NasError::ContextReleased),
        }
    }

    /// Releases the client and channel handles.
    ///
    /// Returns `true` if this call performed the release, `false` if the
    /// context was already released.
    pub fn release(&mut self) -> bool {
        if self.state == ContextState::Released {
            return false;
        }

        if let Some(client) = self.client.take() {
            debug!(cid = client.cid(), "Releasing NAS client");
            client.release();
        }
        self.device = None;
        self.state = ContextState::Released;

        true
    }
}

impl Drop for Context {
    fn drop(&mut self) {
        self.release();
    }
}
