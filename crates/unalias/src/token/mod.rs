//! Request tokens.
//!
//! A token is a name, optionally prefixed with `-` to request exclusion.
//! Exclusion also propagates: every token reached while expanding an
//! excluded alias is itself an exclusion.

use std::fmt;

/// Prefix marking a token as an exclusion.
pub const EXCLUDE_PREFIX: char = '-';

/// Whether a token adds to or removes from the result.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Polarity {
    #[default]
    Include,
    Exclude,
}

impl Polarity {
    #[inline]
    pub const fn is_exclude(self) -> bool {
        matches!(self, Polarity::Exclude)
    }
}

/// A parsed token: bare name plus effective polarity.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Token<'a> {
    name: &'a str,
    polarity: Polarity,
    explicit: bool,
}

impl<'a> Token<'a> {
    /// Parse `raw` as seen inside an expansion running with `inherited` polarity.
    ///
    /// Under `Include`, one leading `-` is stripped and marks the token as an
    /// exclusion. Under `Exclude`, the raw text is the name as-is: a nested
    /// `-x` inside an excluded alias names the literal `-x`, there is no
    /// double negation.
    pub fn parse(raw: &'a str, inherited: Polarity) -> Self {
        match inherited {
            Polarity::Exclude => Token {
                name: raw,
                polarity: Polarity::Exclude,
                explicit: false,
            },
            Polarity::Include => match raw.strip_prefix(EXCLUDE_PREFIX) {
                Some(name) => Token {
                    name,
                    polarity: Polarity::Exclude,
                    explicit: true,
                },
                None => Token {
                    name: raw,
                    polarity: Polarity::Include,
                    explicit: false,
                },
            },
        }
    }

    #[inline]
    pub const fn name(self) -> &'a str {
        self.name
    }

    #[inline]
    pub const fn polarity(self) -> Polarity {
        self.polarity
    }

    /// True if the raw text itself carried the `-` prefix.
    #[inline]
    pub const fn is_explicit_exclusion(self) -> bool {
        self.explicit
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.polarity.is_exclude() {
            write!(f, "{EXCLUDE_PREFIX}{}", self.name)
        } else {
            f.write_str(self.name)
        }
    }
}
