//! Endpoint host, the first segment of a queue URL.

use std::fmt;

use crate::constants::{REGIONAL_ENDPOINT_LABELS, SQS_ENDPOINT_PREFIX};

/// The host segment of a queue URL, e.g. `sqs.us-east-1.amazonaws.com`.
///
/// Any string is accepted; the checks that matter for queue URLs are
/// exposed as predicates rather than enforced at construction.
///
/// # Examples
///
/// ```
/// use sqs_url::Endpoint;
///
/// let endpoint = Endpoint::new("sqs.eu-west-2.amazonaws.com");
/// assert!(endpoint.is_sqs());
/// assert_eq!(endpoint.region(), Some("eu-west-2"));
///
/// let legacy = Endpoint::new("eu-west-2.queue.amazonaws.com");
/// assert!(!legacy.is_sqs());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Endpoint(String);

impl Endpoint {
    /// Creates an endpoint from a host segment.
    #[must_use]
    pub fn new(host: &str) -> Self {
        Self(host.to_string())
    }

    /// Returns the endpoint as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the host starts with `sqs`, ignoring ASCII case.
    #[must_use]
    pub fn is_sqs(&self) -> bool {
        is_sqs_host(&self.0)
    }

    /// Returns the dot-separated labels of the host, empty labels included.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// Returns the region label of a four-label host.
    ///
    /// This is purely positional: the second label of
    /// `sqs.<region>.amazonaws.com`. Hosts with any other label count have
    /// no region.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        region_label(&self.0)
    }
}

pub(crate) fn is_sqs_host(host: &str) -> bool {
    host.get(..SQS_ENDPOINT_PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(SQS_ENDPOINT_PREFIX))
}

pub(crate) fn region_label(host: &str) -> Option<&str> {
    let mut labels = host.split('.');
    let region = labels.nth(1)?;
    // two labels already consumed
    if labels.count() + 2 == REGIONAL_ENDPOINT_LABELS {
        Some(region)
    } else {
        None
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Endpoint {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self)
    }
}
