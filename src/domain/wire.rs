//! Closed string enumerations as they appear on the wire.
//!
//! Every enumerated JSON field (alignments, font styles, separator styles,
//! orientations) is a closed set with a default. Unrecognized strings are not
//! errors: callers substitute [`Default::default`] and keep parsing.

/// A closed set of string values with a default.
pub trait WireEnum: Sized + Copy + Default + 'static {
    /// Looks up the variant for an exact wire string.
    fn from_wire(value: &str) -> Option<Self>;

    /// The canonical wire string of this variant.
    fn as_wire(self) -> &'static str;
}

/// Generates a [`WireEnum`] with its `Default`, `Display`, and `Serialize` impls.
///
/// Each variant lists one or more accepted wire strings; the first one is
/// canonical and is used for serialization.
macro_rules! wire_enum {
    (@first $first:literal $(| $rest:literal)*) => {
        $first
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $($wire:literal)|+
            ),+ $(,)?
        }
        default = $default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                $variant,
            )+
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl $crate::domain::wire::WireEnum for $name {
            fn from_wire(value: &str) -> Option<Self> {
                match value {
                    $( $($wire)|+ => Some(Self::$variant), )+
                    _ => None,
                }
            }

            fn as_wire(self) -> &'static str {
                match self {
                    $( Self::$variant => wire_enum!(@first $($wire)|+), )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str($crate::domain::wire::WireEnum::as_wire(*self))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::domain::wire::WireEnum::as_wire(*self))
            }
        }
    };
}

pub(crate) use wire_enum;
