//! Main queue URL type.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::account_id::AccountId;
use crate::constants::QUEUE_URL_SEGMENTS;
use crate::endpoint::{Endpoint, is_sqs_host, region_label};
use crate::error::{ParseError, ParseErrorKind};
use crate::queue_name::QueueName;
use crate::scheme::{Scheme, split_segments, strip_scheme};

/// Borrowed decomposition of a scheme-stripped URL.
///
/// `split` performs the shape check shared by every extractor and does not
/// look at the endpoint; `require_sqs` adds the endpoint prefix rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Parts<'a> {
    pub(crate) endpoint: &'a str,
    pub(crate) account_id: &'a str,
    pub(crate) queue_name: &'a str,
}

impl<'a> Parts<'a> {
    pub(crate) fn split(body: &'a str) -> Result<Self, ParseErrorKind> {
        let mut segments = body.splitn(QUEUE_URL_SEGMENTS + 1, '/');
        let (Some(endpoint), Some(account_id), Some(queue_name), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(ParseErrorKind::SegmentCount {
                expected: QUEUE_URL_SEGMENTS,
                actual: split_segments(body).count(),
            });
        };

        AccountId::validate(account_id).map_err(ParseErrorKind::InvalidAccountId)?;
        QueueName::validate(queue_name).map_err(ParseErrorKind::InvalidQueueName)?;

        Ok(Self {
            endpoint,
            account_id,
            queue_name,
        })
    }

    pub(crate) fn require_sqs(self) -> Result<Self, ParseErrorKind> {
        if is_sqs_host(self.endpoint) {
            Ok(self)
        } else {
            Err(ParseErrorKind::NotSqsEndpoint {
                endpoint: self.endpoint.to_string(),
            })
        }
    }

    pub(crate) fn region(&self) -> Option<&'a str> {
        region_label(self.endpoint)
    }
}

/// A parsed and validated SQS queue URL.
///
/// # Structure
///
/// ```text
/// [http:// | https://]<endpoint>/<account-id>/<queue-name>
/// ```
///
/// The endpoint must start with `sqs` (any case), the account id must be
/// twelve digits and the queue name must be a valid SQS queue name. Query
/// strings and fragments are not recognised and make the URL invalid.
///
/// # Examples
///
/// ```
/// use sqs_url::QueueUrl;
///
/// let url = QueueUrl::parse("https://sqs.us-east-1.amazonaws.com/123456789012/orders").unwrap();
/// assert_eq!(url.endpoint().as_str(), "sqs.us-east-1.amazonaws.com");
/// assert_eq!(url.account_id().as_str(), "123456789012");
/// assert_eq!(url.queue_name().as_str(), "orders");
/// assert_eq!(url.region(), Some("us-east-1"));
///
/// // Legacy global endpoint: valid, but carries no region
/// let url = QueueUrl::parse("https://sqs.amazonaws.com/123456789012/orders").unwrap();
/// assert_eq!(url.region(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueueUrl {
    scheme: Option<Scheme>,
    endpoint: Endpoint,
    account_id: AccountId,
    queue_name: QueueName,
    /// The URL exactly as parsed
    normalized: String,
}

impl QueueUrl {
    /// Parses a queue URL from a string.
    ///
    /// # Errors
    ///
    /// Every `http://` and `https://` literal is removed before splitting, as
    /// in [`strip_scheme`]; [`scheme`](Self::scheme) reports only a leading one.
    ///
    /// Returns `ParseError` if:
    /// - The URL does not have exactly three `/`-separated segments after the scheme
    /// - The account id is not twelve decimal digits
    /// - The queue name is empty, longer than 80 characters or has invalid characters
    /// - The endpoint does not start with `sqs`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Assembles a queue URL from its components.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the endpoint is not an `sqs` host or if the
    /// assembled URL would not split back into the same three segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use sqs_url::{AccountId, Endpoint, QueueName, QueueUrl, Scheme};
    ///
    /// let url = QueueUrl::new(
    ///     Some(Scheme::Https),
    ///     Endpoint::new("sqs.ap-south-1.amazonaws.com"),
    ///     AccountId::parse("123456789012").unwrap(),
    ///     QueueName::parse("jobs").unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(url.as_str(), "https://sqs.ap-south-1.amazonaws.com/123456789012/jobs");
    /// ```
    pub fn new(
        scheme: Option<Scheme>,
        endpoint: Endpoint,
        account_id: AccountId,
        queue_name: QueueName,
    ) -> Result<Self, ParseError> {
        let prefix = scheme.map_or("", Scheme::as_prefix);
        let normalized = format!("{prefix}{endpoint}/{account_id}/{queue_name}");

        let checked = Parts::split(&strip_scheme(&normalized))
            .and_then(Parts::require_sqs)
            .map(|_| ());
        if let Err(kind) = checked {
            return Err(ParseError {
                input: normalized,
                kind,
            });
        }

        Ok(Self {
            scheme,
            endpoint,
            account_id,
            queue_name,
            normalized,
        })
    }

    /// Returns the scheme the URL was written with, if any.
    #[must_use]
    pub const fn scheme(&self) -> Option<Scheme> {
        self.scheme
    }

    /// Returns the endpoint host.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Returns the account id.
    #[must_use]
    pub const fn account_id(&self) -> &AccountId {
        &self.account_id
    }

    /// Returns the queue name.
    #[must_use]
    pub const fn queue_name(&self) -> &QueueName {
        &self.queue_name
    }

    /// Returns the region of a four-label endpoint.
    #[must_use]
    pub fn region(&self) -> Option<&str> {
        self.endpoint.region()
    }

    /// Returns the URL string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let (scheme, _) = Scheme::strip(input);
        let body = strip_scheme(input);
        let parts = Parts::split(&body)?.require_sqs()?;

        Ok(Self {
            scheme,
            endpoint: Endpoint::new(parts.endpoint),
            account_id: AccountId(parts.account_id.to_string()),
            queue_name: QueueName(parts.queue_name.to_string()),
            normalized: input.to_string(),
        })
    }
}

impl fmt::Display for QueueUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized)
    }
}

impl FromStr for QueueUrl {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for QueueUrl {
    fn as_ref(&self) -> &str {
        &self.normalized
    }
}

impl TryFrom<&str> for QueueUrl {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl PartialOrd for QueueUrl {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueUrl {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueueUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.normalized)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueueUrl {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
