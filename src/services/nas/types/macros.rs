/// Declares a closed NAS enumeration decoded from its raw wire value.
///
/// Each variant carries its wire discriminant and the canonical lowercase
/// nickname used in reports. The generated type implements [`NasEnum`], so
/// decoders can turn a raw value into a display name without a hand-written
/// match per field.
///
/// # Example
/// ```ignore
/// nas_enum! {
///     /// Attach state.
///     pub enum AttachState: u8 {
///         Unknown = 0 => "unknown",
///         Attached = 1 => "attached",
///     }
/// }
/// ```
///
/// [`NasEnum`]: crate::services::nas::types::NasEnum
macro_rules! nas_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ty {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident = $value:literal => $nick:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr($repr)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                $variant = $value,
            )+
        }

        impl $crate::services::nas::types::NasEnum for $name {
            type Raw = $repr;

            fn from_raw(raw: $repr) -> Option<Self> {
                match raw {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $nick,)+
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::services::nas::types::NasEnum::as_str(self))
            }
        }
    };
}

/// Declares a NAS bitmask together with its ordered bit-name table.
///
/// Expands to a [`bitflags`] type plus a `NAMES` table listing every known
/// bit in canonical order. `describe` walks that table, so set bits are
/// always reported in the same order and bits missing from the table are
/// dropped. The `empty` string is what an all-clear mask describes as.
macro_rules! nas_flags {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $repr:ty, empty = $empty:literal {
            $(
                $(#[$($flag_meta:tt)*])*
                const $flag:ident = $value:expr => $nick:literal;
            )+
        }
    ) => {
        ::bitflags::bitflags! {
            $(#[$meta])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $name: $repr {
                $(
                    $(#[$($flag_meta)*])*
                    const $flag = $value;
                )+
            }
        }

        impl $name {
            /// Known bits in canonical display order.
            pub const NAMES: &'static [(Self, &'static str)] = &[$((Self::$flag, $nick),)+];

            /// Builds the mask from a raw wire value, discarding unknown bits.
            pub fn from_raw(raw: $repr) -> Self {
                Self::from_bits_truncate(raw)
            }

            /// Joins the names of all set bits, in table order.
            pub fn describe(self) -> String {
                let names: Vec<&str> = Self::NAMES
                    .iter()
                    .filter(|(flag, _)| self.contains(*flag))
                    .map(|(_, nick)| *nick)
                    .collect();

                if names.is_empty() {
                    $empty.to_string()
                } else {
                    names.join(", ")
                }
            }
        }
    };
}
