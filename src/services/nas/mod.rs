/// Closed set of NAS actions and their timeouts
pub mod action;
/// Transport traits implemented by modem backends
pub mod client;
/// Resources held for one operation
pub mod context;
/// Response to report decoding
pub mod decode;
/// Single-shot request dispatch
pub mod dispatcher;
/// NAS error types
pub mod error;
/// Raw request and response records
pub mod messages;
/// JSON-backed modem device
pub mod replay;
/// NAS enumerations and bitmasks
pub mod types;
/// Raw value unit conversions
pub mod units;


pub use action::Action;
pub use client::{ModemDevice, NasClient};
pub use context::{Context, ContextState};
pub use decode::Report;
pub use dispatcher::{Completion, Dispatcher};
pub use error::{NasError, TransportError};
pub use messages::{Request, Response};
pub use replay::{ReplayDevice, ReplayError, ReplayScript, ReplayStats};
