//! `flagmap` is a permissive command line flag table for Rust.
//!
//! Where most command line parsers are configured up front with the parameters they accept, `flagmap` is not.
//! It reads every `-flag` and `-flag=value` token into a table, and leaves the program to ask for what it needs, when it needs it.
//! Specifically, `flagmap` prioritizes the following concerns:
//! * *Never fail*:
//! Malformed input is never an error.
//! Every lookup resolves to a value: the caller's default, an empty string, or zero.
//! * *Familiar flag syntax*:
//! `-flag` and `--flag` are the same flag, and `-noflag` turns a boolean flag off.
//! * *Read time interpretation*:
//! The table only holds strings.
//! Whether a value is a boolean, integer, or string is decided by the lookup.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/getargs.rs")]
//! ```
//!
//! ```console
//! $ getargs -verbose --threads=4 -nolisten
//! flags: -listen=0 -nolisten -threads=4 -verbose
//! verbose: true
//! listen: false
//! threads: 4
//! datadir: ~/.flagmap
//!
//! $ getargs -threads=many
//! flags: -threads=many
//! verbose: false
//! listen: true
//! threads: 0
//! datadir: ~/.flagmap
//! ```
//!
//! # Cli Semantics
//! `flagmap` parses the Cli tokens according to the following set of rules.
//!
//! * Tokens that do not begin with `-` are positional, and are skipped.
//! * Arguments that are not valid unicode are read lossily (see [`ArgumentTable::parse_os`]); they never cause a failure.
//! * `--NAME` is equivalent to `-NAME`.
//! All flags are stored and looked up by their single dash name.
//! * The value of a flag follows the first `=` character.
//! For example, `-key=123=456` gives `-key` the value `123=456`.
//! A flag without `=` (ex: `-key`) has the empty value.
//! * Flag names are case-sensitive.
//! * A flag given multiple times takes its last value.
//! All of the values remain available via [`ArgumentTable::values`].
//! * `-noNAME` negates `-NAME`: it reads as `-NAME=0`.
//! Likewise, `-noNAME=0` reads as `-NAME=1`.
//! The negation only applies when `-NAME` itself is not given; an explicit `-NAME` always wins, regardless of order.
//! The dashed form `--no-NAME` (canonically `-no-NAME`) negates `-NAME` in the same way.
//!
//! ### Lookups
//! ```console
//! Lookup      | Absent    | Present                     | Present, malformed
//! ------------------------------------------------------------------------------
//! get_bool    | default   | true, unless value is 0     | true (ex: -key=yes)
//! get_str     | default   | value (empty if bare)       | n/a
//! get_int     | default   | leading base-10 integer     | 0 (ex: -key=NaN)
//! try_get<T>  | Ok(None)  | Ok(Some(T))                 | Err(InvalidValue)
//! ```
//!
//! Notice the asymmetry for `get_int`: a present flag without an integer (ex: `-key`) resolves to `0`, never to the default.
//!
//! Custom lookups may be defined by implementing [`FromArg`](./prelude/trait.FromArg.html), and then using [`ArgumentTable::get`].
//!
//! # Features
//! * `unit_test`: For features that help with unit testing.
//! * `tracing_debug`: Emit `tracing` debug events describing parse decisions.
pub use flagmap_core::*;
