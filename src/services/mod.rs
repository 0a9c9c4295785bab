/// Network access service (NAS) operations
pub mod nas;

pub use nas::{Action, Context, Dispatcher, ModemDevice, NasClient, NasError, Report};
