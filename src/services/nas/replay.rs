//! A modem device that answers from a recorded JSON document.
//!
//! ```json
//! {
//!   "path": "/dev/cdc-wdm0",
//!   "delay_ms": 20,
//!   "get_signal_info": { "response": { "result": { "status": "success" },
//!                                      "gsm_signal_strength": -70 } },
//!   "network_scan": "hang",
//!   "get_serving_system": { "submission_error": "queue full" },
//!   "reset": { "transport_error": "device unplugged" }
//! }
//! ```
//!
//! An operation without an entry completes without a response record.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use super::{
    client::{ModemDevice, NasClient},
    error::TransportError,
    messages::{
        GetServingSystemOutput, GetSignalInfoOutput, GetSignalStrengthOutput,
        GetSystemSelectionPreferenceOutput, GetTechnologyPreferenceOutput, NetworkScanOutput,
        ResetOutput, SignalStrengthInput,
    },
};

/// Errors loading a replay document.
#[derive(thiserror::Error, Debug)]
pub enum ReplayError {
    /// The document could not be read.
    #[error("Failed to read replay file '{path}': {source}")]
    Io {
        /// File that was read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The document is not a valid replay script.
    #[error("Failed to parse replay file '{path}': {source}")]
    Parse {
        /// File that was parsed
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

/// Recorded outcome of one operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply<T> {
    /// The modem answers with this record.
    Response(T),
    /// The modem never answers.
    Hang,
    /// The channel fails with this message.
    TransportError(String),
    /// The request is rejected before it reaches the modem.
    SubmissionError(String),
}

/// Replies recorded for each NAS operation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReplayScript {
    /// Device path shown in confirmation lines.
    pub path: Option<String>,
    /// Latency added before every reply.
    pub delay_ms: u64,
    /// Fails client allocation with this message.
    pub allocation_error: Option<String>,
    /// Signal strength reply.
    pub get_signal_strength: Option<Reply<GetSignalStrengthOutput>>,
    /// Signal info reply.
    pub get_signal_info: Option<Reply<GetSignalInfoOutput>>,
    /// Serving system reply.
    pub get_serving_system: Option<Reply<GetServingSystemOutput>>,
    /// Technology preference reply.
    pub get_technology_preference: Option<Reply<GetTechnologyPreferenceOutput>>,
    /// System selection preference reply.
    pub get_system_selection_preference: Option<Reply<GetSystemSelectionPreferenceOutput>>,
    /// Network scan reply.
    pub network_scan: Option<Reply<NetworkScanOutput>>,
    /// Reset reply.
    pub reset: Option<Reply<ResetOutput>>,
}

#[derive(Debug, Default)]
struct Counters {
    allocations: AtomicUsize,
    requests: AtomicUsize,
    releases: AtomicUsize,
}

/// Shared counters of what a replay device was asked to do.
#[derive(Debug, Clone, Default)]
pub struct ReplayStats {
    counters: Arc<Counters>,
}

impl ReplayStats {
    /// Clients allocated.
    pub fn allocations(&self) -> usize {
        self.counters.allocations.load(Ordering::SeqCst)
    }

    /// Requests submitted.
    pub fn requests(&self) -> usize {
        self.counters.requests.load(Ordering::SeqCst)
    }

    /// Clients released.
    pub fn releases(&self) -> usize {
        self.counters.releases.load(Ordering::SeqCst)
    }
}

/// Modem device backed by a [`ReplayScript`].
#[derive(Debug, Clone)]
pub struct ReplayDevice {
    script: Arc<ReplayScript>,
    path: String,
    stats: ReplayStats,
}

impl ReplayDevice {
    /// Device serving `script`, shown as `path` unless the script names one.
    pub fn new(script: ReplayScript, path: impl Into<String>) -> Self {
        let path = script.path.clone().unwrap_or_else(|| path.into());

        Self {
            script: Arc::new(script),
            path,
            stats: ReplayStats::default(),
        }
    }

    /// Loads a replay document from disk.
    ///
    /// # Errors
    /// Returns `ReplayError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let content = fs::read_to_string(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let script: ReplayScript =
            serde_json::from_str(&content).map_err(|source| ReplayError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(path = %path.display(), "Loaded replay script");
        Ok(Self::new(script, path.display().to_string()))
    }

    /// Counters shared with every client of this device.
    pub fn stats(&self) -> ReplayStats {
        self.stats.clone()
    }
}

#[async_trait]
impl ModemDevice for ReplayDevice {
    fn path_display(&self) -> String {
        self.path.clone()
    }

    async fn allocate_nas_client(&self) -> Result<Box<dyn NasClient>, TransportError> {
        if let Some(message) = &self.script.allocation_error {
            return Err(TransportError::ClientAllocation(message.clone()));
        }

        let count = self.stats.counters.allocations.fetch_add(1, Ordering::SeqCst) + 1;
        let cid = u8::try_from(count).unwrap_or(u8::MAX);
        debug!(cid, "Allocated NAS client");

        Ok(Box::new(ReplayClient {
            script: Arc::clone(&self.script),
            stats: self.stats.clone(),
            cid,
        }))
    }
}

struct ReplayClient {
    script: Arc<ReplayScript>,
    stats: ReplayStats,
    cid: u8,
}

impl ReplayClient {
    async fn answer<T>(&self, reply: Option<&Reply<T>>) -> Result<T, TransportError>
    where
        T: Clone + Send + Sync,
    {
        self.stats.counters.requests.fetch_add(1, Ordering::SeqCst);

        if self.script.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.script.delay_ms)).await;
        }

        match reply {
            Some(Reply::Response(output)) => Ok(output.clone()),
            Some(Reply::Hang) => futures::future::pending().await,
            Some(Reply::TransportError(message)) => {
                Err(TransportError::ChannelClosed(message.clone()))
            }
            Some(Reply::SubmissionError(message)) => {
                Err(TransportError::Submission(message.clone()))
            }
            None => Err(TransportError::NoResponse),
        }
    }
}

#[async_trait]
impl NasClient for ReplayClient {
    fn cid(&self) -> u8 {
        self.cid
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    async fn get_signal_strength(
        &self,
        input: SignalStrengthInput,
    ) -> Result<GetSignalStrengthOutput, TransportError> {
        debug!(mask = ?input.request_mask, "Replaying signal strength");
        self.answer(self.script.get_signal_strength.as_ref()).await
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    async fn get_signal_info(&self) -> Result<GetSignalInfoOutput, TransportError> {
        self.answer(self.script.get_signal_info.as_ref()).await
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    async fn get_serving_system(&self) -> Result<GetServingSystemOutput, TransportError> {
        self.answer(self.script.get_serving_system.as_ref()).await
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    async fn get_technology_preference(
        &self,
    ) -> Result<GetTechnologyPreferenceOutput, TransportError> {
        self.answer(self.script.get_technology_preference.as_ref())
            .await
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    async fn get_system_selection_preference(
        &self,
    ) -> Result<GetSystemSelectionPreferenceOutput, TransportError> {
        self.answer(self.script.get_system_selection_preference.as_ref())
            .await
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    async fn network_scan(&self) -> Result<NetworkScanOutput, TransportError> {
        self.answer(self.script.network_scan.as_ref()).await
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    async fn reset(&self) -> Result<ResetOutput, TransportError> {
        self.answer(self.script.reset.as_ref()).await
    }

    #[instrument(skip(self), fields(cid = self.cid))]
    fn release(&self) {
        self.stats.counters.releases.fetch_add(1, Ordering::SeqCst);
        debug!("Released NAS client");
    }
}
