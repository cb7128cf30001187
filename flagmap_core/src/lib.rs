//! Core module for `flagmap`.
//! See [documentation root](https://docs.rs/flagmap/latest/flagmap/index.html) for full details.
#![deny(missing_docs)]
mod interpret;
mod model;
#[allow(missing_docs)]
pub mod prelude;
mod table;
mod tokens;

pub use model::*;
pub use table::ArgumentTable;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;

#[cfg(test)]
pub(crate) mod test {
    macro_rules! assert_contains {
        ($base:expr, $sub:expr) => {
            assert!(
                $base.contains($sub),
                "'{b}' does not contain '{s}'",
                b = $base,
                s = $sub,
            );
        };
    }

    pub(crate) use assert_contains;
}
