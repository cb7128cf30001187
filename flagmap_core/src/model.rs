use thiserror::Error;

/// A flag value that cannot be strictly converted.
///
/// Only produced by [`ArgumentTable::try_get`](crate::ArgumentTable::try_get); the permissive lookups never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidValue {
    /// The value does not parse (via `std::str::FromStr`) into the requested type.
    #[error("cannot convert '{value}' for '{name}' to {type_name}.")]
    Conversion {
        /// The canonical flag name.
        name: String,
        /// The raw value held by the flag.
        value: String,
        /// The requested type.
        type_name: &'static str,
    },
}
