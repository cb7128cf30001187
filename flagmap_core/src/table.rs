use std::collections::{BTreeMap, HashMap};
use std::env;
use std::ffi::OsStr;
use std::fmt;
use std::str::FromStr;

use crate::model::InvalidValue;
use crate::prelude::FromArg;
use crate::tokens::{negated_base, FlagToken};

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// The parsed flags of a command line.
/// Built via `ArgumentTable::parse`, `ArgumentTable::parse_tokens`, or `ArgumentTable::from_env`.
///
/// Each canonical flag name maps to its last seen value (empty for bare flags).
/// Values are kept as raw strings; lookups interpret them at read time.
///
/// ### Example
/// ```
/// # use flagmap_core as flagmap;
/// use flagmap::ArgumentTable;
///
/// let table = ArgumentTable::parse_tokens(&["-verbose", "--threads=4", "-nolisten"]);
///
/// assert!(table.get_bool("-verbose", false));
/// assert_eq!(table.get_int("-threads", 1), 4);
/// assert!(!table.get_bool("-listen", true));
/// assert_eq!(table.get_str("-datadir", "~/.data"), "~/.data");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentTable {
    values: BTreeMap<String, String>,
    history: HashMap<String, Vec<String>>,
}

impl ArgumentTable {
    /// Parse the process arguments (via `std::env::args_os`), discarding the program name.
    /// Arguments that are not valid unicode are read lossily; see `ArgumentTable::parse_os`.
    pub fn from_env() -> Self {
        Self::parse_os(env::args_os().skip(1))
    }

    /// Parse platform strings into a fresh table.
    /// The tokens must not include the program name.
    ///
    /// Invalid unicode is replaced with `U+FFFD`, rather than failing the parse.
    ///
    /// ### Example
    /// ```
    /// # use flagmap_core as flagmap;
    /// use std::ffi::OsString;
    /// use flagmap::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse_os(vec![OsString::from("-datadir=/tmp")]);
    ///
    /// assert_eq!(table.get_str("-datadir", ""), "/tmp");
    /// ```
    pub fn parse_os<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        Self::parse(
            tokens
                .into_iter()
                .map(|token| token.as_ref().to_string_lossy().into_owned()),
        )
    }

    /// Parse the input tokens into a fresh table.
    /// The tokens must not include the program name.
    ///
    /// ### Example
    /// ```
    /// # use flagmap_core as flagmap;
    /// use flagmap::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse_tokens(&["-sbp=11", "positional", "-bar"]);
    ///
    /// assert_eq!(table.len(), 2);
    /// assert_eq!(table.get_str("-sbp", ""), "11");
    /// ```
    pub fn parse_tokens(tokens: &[&str]) -> Self {
        Self::parse(tokens.iter().copied())
    }

    /// Parse the input tokens into a fresh table.
    /// The tokens must not include the program name.
    ///
    /// Parsing happens in two phases:
    /// 1. Each flag token is recorded under its canonical name, overwriting any earlier value.
    /// Positional tokens are skipped.
    /// 2. Each negated flag (ex: `-nofoo`) is resolved onto its base flag (ex: `-foo`), unless the base flag was given explicitly.
    ///
    /// Parsing never fails.
    pub fn parse<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::default();

        for token in tokens {
            let token = token.as_ref();

            match FlagToken::read(token) {
                Some(flag) => table.record(flag),
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Skipping non-flag token '{token}'.");
                    }
                }
            }
        }

        table.resolve_negations();
        table
    }

    /// Build a table directly from canonical `(name, value)` pairs.
    /// The pairs are recorded as-is: no normalization and no negation resolution take place.
    ///
    /// *Available using 'unit_test' crate feature only.*
    #[cfg(feature = "unit_test")]
    pub fn from_pairs<I, N, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::default();

        for (name, value) in pairs {
            table.record(FlagToken {
                name: name.into(),
                value: value.into(),
            });
        }

        table
    }

    fn record(&mut self, flag: FlagToken) {
        let FlagToken { name, value } = flag;
        self.history
            .entry(name.clone())
            .or_default()
            .push(value.clone());
        self.values.insert(name, value);
    }

    fn resolve_negations(&mut self) {
        // Only literal flags negate; a resolved negation never negates further.
        let negations: Vec<(String, String, bool)> = self
            .values
            .iter()
            .filter_map(|(name, value)| {
                negated_base(name).map(|base| (name.clone(), base, bool::from_arg(value)))
            })
            .collect();

        for (_name, base, negated) in negations {
            if self.history.contains_key(&base) {
                #[cfg(feature = "tracing_debug")]
                {
                    debug!("Flag '{base}' was given explicitly; discarding '{_name}'.");
                }

                continue;
            }

            let value = if negated { "0" } else { "1" };

            #[cfg(feature = "tracing_debug")]
            {
                debug!("Interpreting '{_name}' as '{base}={value}'.");
            }

            self.values.insert(base, value.to_string());
        }
    }
}

impl ArgumentTable {
    /// Look up a flag, interpreting its value as `T`.
    /// Returns `default` only when the flag is absent.
    ///
    /// ### Example
    /// ```
    /// # use flagmap_core as flagmap;
    /// use flagmap::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse_tokens(&["-port=8333", "-name"]);
    ///
    /// assert_eq!(table.get("-port", 0i32), 8333);
    /// assert_eq!(table.get("-name", String::from("satoshi")), "");
    /// assert_eq!(table.get("-missing", 7i64), 7);
    /// ```
    pub fn get<T: FromArg>(&self, name: &str, default: T) -> T {
        match self.values.get(name) {
            Some(value) => T::from_arg(value),
            None => default,
        }
    }

    /// Look up a boolean flag.
    ///
    /// A present flag is true, unless its value is `0` (ex: `-foo=0`) or it was negated (ex: `-nofoo`).
    /// An explicit positive flag always wins over its negation, regardless of order.
    ///
    /// ### Example
    /// ```
    /// # use flagmap_core as flagmap;
    /// use flagmap::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse_tokens(&["-nosbp", "-sbp"]);
    /// assert!(table.get_bool("-sbp", false));
    ///
    /// let table = ArgumentTable::parse_tokens(&["-nosbp=0"]);
    /// assert!(table.get_bool("-sbp", false));
    /// ```
    pub fn get_bool(&self, name: &str, default: bool) -> bool {
        self.get(name, default)
    }

    /// Look up the literal value of a flag.
    /// A bare flag (ex: `-foo`) or trailing separator (ex: `-foo=`) yields the empty string, not `default`.
    pub fn get_str<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.values.get(name).map_or(default, String::as_str)
    }

    /// Look up an integer flag.
    ///
    /// A present flag reads its leading base-10 integer.
    /// If there is none (ex: `-foo`, `-foo=NaN`), the result is `0`, not `default`.
    ///
    /// ### Example
    /// ```
    /// # use flagmap_core as flagmap;
    /// use flagmap::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse_tokens(&["-sbp=NaN"]);
    ///
    /// assert_eq!(table.get_int("-sbp", 11), 0);
    /// assert_eq!(table.get_int("-bar", 11), 11);
    /// ```
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.get(name, default)
    }

    /// Strictly look up a flag, converting its whole value via `std::str::FromStr`.
    ///
    /// Returns `Ok(None)` when the flag is absent.
    ///
    /// ### Example
    /// ```
    /// # use flagmap_core as flagmap;
    /// use flagmap::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse_tokens(&["-port=8333", "-rate=fast"]);
    ///
    /// assert_eq!(table.try_get::<u16>("-port"), Ok(Some(8333)));
    /// assert_eq!(table.try_get::<u16>("-missing"), Ok(None));
    /// assert!(table.try_get::<f64>("-rate").is_err());
    /// ```
    pub fn try_get<T: FromStr>(&self, name: &str) -> Result<Option<T>, InvalidValue> {
        match self.values.get(name) {
            Some(value) => match T::from_str(value) {
                Ok(converted) => Ok(Some(converted)),
                Err(_) => Err(InvalidValue::Conversion {
                    name: name.to_string(),
                    value: value.clone(),
                    type_name: std::any::type_name::<T>(),
                }),
            },
            None => Ok(None),
        }
    }

    /// Whether the flag is present, either literally or via a resolved negation.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Every value given literally for the flag, in order of appearance.
    /// Resolved negations are not included.
    ///
    /// ### Example
    /// ```
    /// # use flagmap_core as flagmap;
    /// use flagmap::ArgumentTable;
    ///
    /// let table = ArgumentTable::parse_tokens(&["-connect=a", "--connect=b", "-noconnect"]);
    ///
    /// assert_eq!(table.values("-connect"), ["a", "b"]);
    /// assert_eq!(table.get_str("-connect", ""), "b");
    /// assert!(table.values("-missing").is_empty());
    /// ```
    pub fn values(&self, name: &str) -> &[String] {
        match self.history.get(name) {
            Some(values) => values.as_slice(),
            None => &[],
        }
    }

    /// The number of flags in the table.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table has no flags.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate the `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl fmt::Display for ArgumentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }

            if value.is_empty() {
                write!(f, "{name}")?;
            } else {
                write!(f, "{name}={value}")?;
            }
        }

        Ok(())
    }
}
