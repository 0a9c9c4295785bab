//! NAS enumeration and bitmask types.

#[macro_use]
mod macros;
pub mod flags;
pub mod states;

use std::fmt;

pub use flags::*;
pub use states::*;

/// A closed NAS enumeration with a raw wire representation.
///
/// Implemented by every type declared through `nas_enum!`.
pub trait NasEnum: Sized + Copy {
    /// Integer type the value travels as.
    type Raw: Copy + fmt::Display;

    /// Maps a raw value onto a known variant, `None` when out of domain.
    fn from_raw(raw: Self::Raw) -> Option<Self>;

    /// Canonical lowercase nickname.
    fn as_str(&self) -> &'static str;
}

/// Resolves a raw enumerated value to its display name.
///
/// Values outside the known domain are not errors: they are logged and
/// rendered as `unknown (<raw>)` so the rest of the report still decodes.
pub fn enum_name<E: NasEnum>(raw: E::Raw, field: &str) -> String {
    match E::from_raw(raw) {
        Some(value) => value.as_str().to_string(),
        None => {
            tracing::warn!("Invalid {field} value '{raw}'");
            format!("unknown ({raw})")
        }
    }
}
