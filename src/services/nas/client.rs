use async_trait::async_trait;

use super::{
    error::TransportError,
    messages::{
        GetServingSystemOutput, GetSignalInfoOutput, GetSignalStrengthOutput,
        GetSystemSelectionPreferenceOutput, GetTechnologyPreferenceOutput, NetworkScanOutput,
        ResetOutput, SignalStrengthInput,
    },
};

/// A modem control channel.
///
/// Discovering and opening the device happens before the NAS handler runs;
/// the handler only needs a printable path and a way to get a NAS client.
#[async_trait]
pub trait ModemDevice: Send + Sync {
    /// Device path as shown in confirmation lines.
    fn path_display(&self) -> String;

    /// Allocates a NAS client on this channel.
    ///
    /// # Errors
    /// Returns `TransportError` if the channel cannot provide a client.
    async fn allocate_nas_client(&self) -> Result<Box<dyn NasClient>, TransportError>;
}

/// A NAS client allocated on a modem channel.
///
/// Each method submits one request and resolves to the raw response record.
/// Timeouts and cancellation are applied by the caller.
#[async_trait]
pub trait NasClient: Send + Sync {
    /// Client ID assigned by the modem.
    fn cid(&self) -> u8;

    /// Queries signal strength.
    ///
    /// # Errors
    /// Returns `TransportError` if the request or reply is lost.
    async fn get_signal_strength(
        &self,
        input: SignalStrengthInput,
    ) -> Result<GetSignalStrengthOutput, TransportError>;

    /// Queries per-technology signal info.
    ///
    /// # Errors
    /// Returns `TransportError` if the request or reply is lost.
    async fn get_signal_info(&self) -> Result<GetSignalInfoOutput, TransportError>;

    /// Queries the serving system.
    ///
    /// # Errors
    /// Returns `TransportError` if the request or reply is lost.
    async fn get_serving_system(&self) -> Result<GetServingSystemOutput, TransportError>;

    /// Queries the technology preference.
    ///
    /// # Errors
    /// Returns `TransportError` if the request or reply is lost.
    async fn get_technology_preference(
        &self,
    ) -> Result<GetTechnologyPreferenceOutput, TransportError>;

    /// Queries the system selection preference.
    ///
    /// # Errors
    /// Returns `TransportError` if the request or reply is lost.
    async fn get_system_selection_preference(
        &self,
    ) -> Result<GetSystemSelectionPreferenceOutput, TransportError>;

    /// Scans for networks.
    ///
    /// # Errors
    /// Returns `TransportError` if the request or reply is lost.
    async fn network_scan(&self) -> Result<NetworkScanOutput, TransportError>;

    /// Resets the NAS service state.
    ///
    /// # Errors
    /// Returns `TransportError` if the request or reply is lost.
    async fn reset(&self) -> Result<ResetOutput, TransportError>;

    /// Releases the client ID back to the modem.
    fn release(&self);
}
