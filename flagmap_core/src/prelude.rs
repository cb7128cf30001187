//! Traits which, typically, may be imported without concern: `use flagmap::prelude::*`.

/// Behaviour to interpret the raw value of a flag that is present in the table.
///
/// Interpretation never fails; each type decides what a malformed value degrades to.
/// Absent flags never reach this trait, they resolve to the caller's default instead.
// Needs to be imported in order to implement a custom `FromArg`.
pub trait FromArg: Sized {
    /// Interpret the value of a present flag.
    fn from_arg(value: &str) -> Self;
}
