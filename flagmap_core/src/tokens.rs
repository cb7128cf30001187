#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A single Cli flag, normalized to one leading dash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FlagToken {
    pub name: String,
    pub value: String,
}

impl FlagToken {
    /// Read a raw Cli token as a flag.
    ///
    /// Returns `None` for positional tokens, and for flags whose name is empty (ex: `-`, `--`, `-=1`).
    pub(crate) fn read(token: &str) -> Option<Self> {
        // Find the flag, such as:
        //  -initial
        //  --initial
        //  -initial=..
        //  --initial=..
        let body = match token.strip_prefix("--") {
            Some(body) => body,
            None => token.strip_prefix('-')?,
        };

        // Only the first '=' separates; the rest belongs to the value.
        let (name, value) = body.split_once('=').unwrap_or((body, ""));

        if name.is_empty() {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("Token '{token}' has an empty flag name.");
            }

            return None;
        }

        Some(Self {
            name: format!("-{name}"),
            value: value.to_string(),
        })
    }
}

/// The base flag a canonical name negates, if any.
/// For example, `-nofoo` and `-no-foo` both negate `-foo`, while `-no` negates nothing.
pub(crate) fn negated_base(name: &str) -> Option<String> {
    let rest = name.strip_prefix("-no")?;
    // The base must stay canonical: a single leading dash.
    let rest = rest.strip_prefix('-').unwrap_or(rest);

    if rest.is_empty() || rest.starts_with('-') {
        return None;
    }

    Some(format!("-{rest}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("-sbp", "-sbp", "")]
    #[case("--sbp", "-sbp", "")]
    #[case("-sbp=", "-sbp", "")]
    #[case("--sbp=", "-sbp", "")]
    #[case("-sbp=11", "-sbp", "11")]
    #[case("--sbp=verbose", "-sbp", "verbose")]
    #[case("-sbp=a=b", "-sbp", "a=b")]
    #[case("-nosbp=0", "-nosbp", "0")]
    #[case("---sbp", "--sbp", "")]
    #[case("-Sbp", "-Sbp", "")]
    fn read_flag(#[case] token: &str, #[case] name: &str, #[case] value: &str) {
        assert_eq!(
            FlagToken::read(token),
            Some(FlagToken {
                name: name.to_string(),
                value: value.to_string(),
            })
        );
    }

    #[rstest]
    #[case("")]
    #[case("sbp")]
    #[case("sbp=1")]
    #[case("-")]
    #[case("--")]
    #[case("-=1")]
    #[case("--=")]
    fn read_not_flag(#[case] token: &str) {
        assert_eq!(FlagToken::read(token), None);
    }

    #[rstest]
    #[case("-nosbp", Some("-sbp"))]
    #[case("-notify", Some("-tify"))]
    #[case("-no-x", Some("-x"))]
    #[case("-no-", None)]
    #[case("-no--x", None)]
    #[case("-no", None)]
    #[case("-sbp", None)]
    #[case("-n", None)]
    #[case("-No", None)]
    fn negation(#[case] name: &str, #[case] expected: Option<&str>) {
        assert_eq!(negated_base(name), expected.map(str::to_string));
    }
}
