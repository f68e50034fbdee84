//! Scheme prefix handling and segment splitting.

use std::borrow::Cow;
use std::fmt;

use crate::constants::{HTTP_PREFIX, HTTPS_PREFIX};

/// The scheme a queue URL was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Scheme {
    /// `http://`
    Http,
    /// `https://`
    Https,
}

impl Scheme {
    /// Splits a leading `http://` or `https://` off the input.
    ///
    /// Matching is exact and case-sensitive; anything else is left untouched
    /// and reported as `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqs_url::Scheme;
    ///
    /// assert_eq!(Scheme::strip("https://sqs.x/1/q"), (Some(Scheme::Https), "sqs.x/1/q"));
    /// assert_eq!(Scheme::strip("HTTPS://sqs.x"), (None, "HTTPS://sqs.x"));
    /// ```
    #[must_use]
    pub fn strip(input: &str) -> (Option<Self>, &str) {
        if let Some(rest) = input.strip_prefix(HTTPS_PREFIX) {
            (Some(Self::Https), rest)
        } else if let Some(rest) = input.strip_prefix(HTTP_PREFIX) {
            (Some(Self::Http), rest)
        } else {
            (None, input)
        }
    }

    /// Returns the literal prefix including `://`.
    #[must_use]
    pub const fn as_prefix(self) -> &'static str {
        match self {
            Self::Http => HTTP_PREFIX,
            Self::Https => HTTPS_PREFIX,
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http => write!(f, "http"),
            Self::Https => write!(f, "https"),
        }
    }
}

/// Removes every `http://` literal, then every `https://` literal.
///
/// Matching is exact and case-sensitive. The literals are cut out wherever
/// they occur, not only at the start, so the result borrows the input
/// unless something had to be removed past the leading position.
///
/// # Examples
///
/// ```
/// use sqs_url::strip_scheme;
///
/// assert_eq!(strip_scheme("https://sqs.x/1/q"), "sqs.x/1/q");
/// assert_eq!(strip_scheme("http://https://sqs.x/1/q"), "sqs.x/1/q");
/// assert_eq!(strip_scheme("sqs.x/1/http://q"), "sqs.x/1/q");
/// ```
#[must_use]
pub fn strip_scheme(input: &str) -> Cow<'_, str> {
    let mut stripped = Cow::Borrowed(input);
    for literal in [HTTP_PREFIX, HTTPS_PREFIX] {
        let leading_only = stripped
            .strip_prefix(literal)
            .is_some_and(|rest| !rest.contains(literal));

        stripped = match stripped {
            Cow::Borrowed(s) if leading_only => Cow::Borrowed(&s[literal.len()..]),
            Cow::Owned(s) if leading_only => Cow::Owned(s[literal.len()..].to_owned()),
            s if s.contains(literal) => Cow::Owned(s.replace(literal, "")),
            s => s,
        };
    }
    stripped
}

/// Splits a scheme-stripped URL on `/`.
///
/// Empty segments are kept, so `"a//b/"` yields `["a", "", "b", ""]`.
/// Whitespace is not trimmed.
pub fn split_segments(input: &str) -> impl Iterator<Item = &str> {
    input.split('/')
}
