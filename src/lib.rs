//! nasctl - query the network access service of a cellular modem.
//!
//! Each invocation runs exactly one NAS action against a modem device:
//!
//! - Parse the mutually exclusive `--nas-*` flags into a single action
//! - Allocate a NAS client and dispatch the request with a deadline
//! - Decode the sparse response into a report with physical units
//! - Render the report as text or JSON and release the client
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use nasctl::services::nas::{
//!     Action, Context, Dispatcher, ModemDevice, ReplayDevice, Report,
//! };
//! use tokio_util::sync::CancellationToken;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let device: Arc<dyn ModemDevice> =
//!     Arc::new(ReplayDevice::load("modem.json".as_ref())?);
//! let client = device.allocate_nas_client().await?;
//!
//! let context = Context::new(device, client, CancellationToken::new());
//! let completion = Dispatcher::new(context).run(Action::GetSignalInfo).await;
//! let report = Report::decode(Action::GetSignalInfo, &completion.result?)?;
//! println!("{report:?}");
//! # Ok(())
//! # }
//! ```

/// Configuration schema and loading.
pub mod config;

/// Command-line interface for NAS queries.
pub mod cli;

/// Modem services.
pub mod services;

/// Diagnostic logging setup.
pub mod tracing_config;
