//! Best-effort extraction of queue attributes from raw URLs.
//!
//! These functions are meant for instrumentation code that sees an outbound
//! request URL and wants to tag it with the queue it targets. They never
//! fail loudly: anything that does not look like a queue URL yields `None`.
//!
//! Every `http://` and `https://` literal is removed before the URL is
//! split, wherever it occurs. Results borrow from the input unless such a
//! literal had to be cut from the middle of it.
//!
//! Queue name extraction checks only the shape `<host>/<account>/<name>`,
//! so it also works for legacy and custom endpoints. Account id and region
//! extraction additionally require the host to start with `sqs`.
//!
//! ```
//! use sqs_url::{get_account_id, get_queue_name, get_region};
//!
//! let url = Some("https://sqs.us-east-1.amazonaws.com/123456789012/q1");
//! assert_eq!(get_queue_name(url).as_deref(), Some("q1"));
//! assert_eq!(get_account_id(url).as_deref(), Some("123456789012"));
//! assert_eq!(get_region(url).as_deref(), Some("us-east-1"));
//!
//! let legacy = Some("https://queue.amazonaws.com/123456789012/q1");
//! assert_eq!(get_queue_name(legacy).as_deref(), Some("q1"));
//! assert_eq!(get_account_id(legacy), None);
//! ```

use std::borrow::Cow;

use tracing::trace;

use crate::error::ParseErrorKind;
use crate::queue_url::Parts;
use crate::scheme::strip_scheme;

/// Returns the queue name of a queue URL.
///
/// The endpoint host is not inspected.
#[must_use]
pub fn get_queue_name(url: Option<&str>) -> Option<Cow<'_, str>> {
    let input = url?;
    project(input, |body| Some(shaped(input, body)?.queue_name))
}

/// Returns the account id of an SQS queue URL.
#[must_use]
pub fn get_account_id(url: Option<&str>) -> Option<Cow<'_, str>> {
    let input = url?;
    project(input, |body| Some(validated(input, body)?.account_id))
}

/// Returns the region of an SQS queue URL on a four-label endpoint such as
/// `sqs.us-east-1.amazonaws.com`.
#[must_use]
pub fn get_region(url: Option<&str>) -> Option<Cow<'_, str>> {
    let input = url?;
    project(input, |body| regional(input, validated(input, body)?))
}

/// Returns true if the URL passes every check account id extraction applies.
#[must_use]
pub fn is_valid_queue_url(url: Option<&str>) -> bool {
    url.is_some_and(|input| validated(input, &strip_scheme(input)).is_some())
}

/// Every attribute that can be recovered from one URL.
///
/// The URL is stripped and split once for all three attributes.
///
/// # Examples
///
/// ```
/// use sqs_url::QueueAttributes;
///
/// let url = "https://sqs.eu-west-1.amazonaws.com/123456789012/jobs";
/// let attrs = QueueAttributes::from_url(Some(url));
/// assert_eq!(attrs.queue_name.as_deref(), Some("jobs"));
/// assert_eq!(attrs.region.as_deref(), Some("eu-west-1"));
///
/// assert!(QueueAttributes::from_url(None).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QueueAttributes<'a> {
    /// Queue name, see [`get_queue_name`]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub queue_name: Option<Cow<'a, str>>,
    /// Account id, see [`get_account_id`]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub account_id: Option<Cow<'a, str>>,
    /// Region, see [`get_region`]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub region: Option<Cow<'a, str>>,
}

impl<'a> QueueAttributes<'a> {
    /// Extracts all attributes from a URL.
    #[must_use]
    pub fn from_url(url: Option<&'a str>) -> Self {
        let Some(input) = url else {
            return Self::default();
        };
        match strip_scheme(input) {
            Cow::Borrowed(body) => Self::collect(input, body, Cow::Borrowed),
            Cow::Owned(body) => Self::collect(input, &body, |s| Cow::Owned(s.to_owned())),
        }
    }

    /// Returns true if nothing could be extracted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.queue_name.is_none() && self.account_id.is_none() && self.region.is_none()
    }

    fn collect<'b>(input: &str, body: &'b str, wrap: impl Fn(&'b str) -> Cow<'a, str>) -> Self {
        let Some(parts) = shaped(input, body) else {
            return Self::default();
        };
        let queue_name = Some(wrap(parts.queue_name));

        match require_sqs(input, parts) {
            Some(parts) => Self {
                queue_name,
                account_id: Some(wrap(parts.account_id)),
                region: regional(input, parts).map(&wrap),
            },
            None => Self {
                queue_name,
                ..Self::default()
            },
        }
    }
}

/// Runs `pick` on the scheme-stripped body and keeps the result borrowed
/// from `input` when stripping did not allocate.
fn project<'a>(input: &'a str, pick: impl FnOnce(&str) -> Option<&str>) -> Option<Cow<'a, str>> {
    match strip_scheme(input) {
        Cow::Borrowed(body) => pick(body).map(Cow::Borrowed),
        Cow::Owned(body) => pick(&body).map(|s| Cow::Owned(s.to_owned())),
    }
}

fn shaped<'b>(input: &str, body: &'b str) -> Option<Parts<'b>> {
    Parts::split(body).map_err(|kind| rejected(input, &kind)).ok()
}

fn require_sqs<'b>(input: &str, parts: Parts<'b>) -> Option<Parts<'b>> {
    parts.require_sqs().map_err(|kind| rejected(input, &kind)).ok()
}

fn validated<'b>(input: &str, body: &'b str) -> Option<Parts<'b>> {
    require_sqs(input, shaped(input, body)?)
}

fn regional<'b>(input: &str, parts: Parts<'b>) -> Option<&'b str> {
    let region = parts.region();
    if region.is_none() {
        trace!(url = input, endpoint = parts.endpoint, "endpoint has no region label");
    }
    region
}

fn rejected(input: &str, kind: &ParseErrorKind) {
    trace!(url = input, reason = %kind, "not a queue URL");
}

#[cfg(test)]
mod tests {
    use super::*;

    const REGIONAL: &str = "https://sqs.us-east-1.amazonaws.com/123456789012/q1";
    const REGIONAL_PREFIX: &str = "https://sqs.us-east-1.amazonaws.com/123456789012";

    #[test]
    fn none_input_yields_none() {
        assert_eq!(get_queue_name(None), None);
        assert_eq!(get_account_id(None), None);
        assert_eq!(get_region(None), None);
        assert!(!is_valid_queue_url(None));
    }

    #[test]
    fn regional_url() {
        assert_eq!(get_queue_name(Some(REGIONAL)).as_deref(), Some("q1"));
        assert_eq!(get_account_id(Some(REGIONAL)).as_deref(), Some("123456789012"));
        assert_eq!(get_region(Some(REGIONAL)).as_deref(), Some("us-east-1"));
        assert!(is_valid_queue_url(Some(REGIONAL)));
    }

    #[test]
    fn http_and_schemeless_urls() {
        let http = "http://sqs.us-west-2.amazonaws.com/123456789012/q1";
        assert_eq!(get_region(Some(http)).as_deref(), Some("us-west-2"));

        let bare = "sqs.us-west-2.amazonaws.com/123456789012/q1";
        assert_eq!(get_account_id(Some(bare)).as_deref(), Some("123456789012"));
    }

    #[test]
    fn non_sqs_host_yields_queue_name_only() {
        let url = Some("https://xyz/123456789012/q1");
        assert_eq!(get_queue_name(url).as_deref(), Some("q1"));
        assert_eq!(get_account_id(url), None);
        assert_eq!(get_region(url), None);
        assert!(!is_valid_queue_url(url));
    }

    #[test]
    fn empty_host_yields_queue_name_only() {
        let url = Some("https:///123456789012/q1");
        assert_eq!(get_queue_name(url).as_deref(), Some("q1"));
        assert_eq!(get_account_id(url), None);
    }

    #[test]
    fn uppercase_sqs_host_is_accepted() {
        let url = Some("https://SQS.us-east-1.amazonaws.com/123456789012/q1");
        assert_eq!(get_account_id(url).as_deref(), Some("123456789012"));
        assert_eq!(get_region(url).as_deref(), Some("us-east-1"));
    }

    #[test]
    fn global_endpoint_has_no_region() {
        let url = Some("https://sqs.amazonaws.com/123456789012/q1");
        assert_eq!(get_region(url), None);
        assert_eq!(get_account_id(url).as_deref(), Some("123456789012"));
        assert_eq!(get_queue_name(url).as_deref(), Some("q1"));
    }

    #[test]
    fn five_label_endpoint_has_no_region() {
        let url = Some("https://sqs.cn-north-1.amazonaws.com.cn/123456789012/q1");
        assert_eq!(get_region(url), None);
        assert_eq!(get_account_id(url).as_deref(), Some("123456789012"));
    }

    #[test]
    fn wrong_segment_count_yields_nothing() {
        for url in [
            "https://sqs.us-east-1.amazonaws.com/123456789012",
            "https://sqs.us-east-1.amazonaws.com/123456789012/q1/extra",
            "https://sqs.us-east-1.amazonaws.com/123456789012/q1/",
            "https://sqs.us-east-1.amazonaws.com//123456789012/q1",
            "",
        ] {
            assert!(QueueAttributes::from_url(Some(url)).is_empty(), "{url}");
        }
    }

    #[test]
    fn invalid_account_id_yields_nothing() {
        for account in ["12345678901", "1234567890123", "12345678901x"] {
            let url = format!("https://sqs.us-east-1.amazonaws.com/{account}/q1");
            assert!(QueueAttributes::from_url(Some(url.as_str())).is_empty(), "{url}");
        }
    }

    #[test]
    fn queue_name_length_boundary() {
        let ok = format!("{REGIONAL_PREFIX}/{}", "q".repeat(80));
        assert_eq!(get_queue_name(Some(ok.as_str())).as_deref().map(str::len), Some(80));

        let too_long = format!("{REGIONAL_PREFIX}/{}", "q".repeat(81));
        assert_eq!(get_queue_name(Some(too_long.as_str())), None);
    }

    #[test]
    fn query_string_is_not_supported() {
        let url = Some("https://sqs.us-east-1.amazonaws.com/123456789012/q1?Action=SendMessage");
        assert!(QueueAttributes::from_url(url).is_empty());
    }

    #[test]
    fn queue_name_is_returned_verbatim() {
        let url = Some("https://sqs.us-east-1.amazonaws.com/123456789012/My_Queue-01");
        assert_eq!(get_queue_name(url).as_deref(), Some("My_Queue-01"));
    }

    #[test]
    fn repeated_calls_agree() {
        let url = Some(REGIONAL);
        assert_eq!(QueueAttributes::from_url(url), QueueAttributes::from_url(url));
    }

    #[test]
    fn attributes_collect_everything() {
        let attrs = QueueAttributes::from_url(Some(REGIONAL));
        assert_eq!(
            attrs,
            QueueAttributes {
                queue_name: Some(Cow::Borrowed("q1")),
                account_id: Some(Cow::Borrowed("123456789012")),
                region: Some(Cow::Borrowed("us-east-1")),
            }
        );
        assert!(!attrs.is_empty());
    }

    #[test]
    fn attributes_on_non_sqs_host_keep_queue_name() {
        let attrs = QueueAttributes::from_url(Some("https://xyz/123456789012/q1"));
        assert_eq!(attrs.queue_name.as_deref(), Some("q1"));
        assert_eq!(attrs.account_id, None);
        assert_eq!(attrs.region, None);
    }

    #[test]
    fn stacked_schemes_are_all_removed() {
        let url = Some("http://https://sqs.us-east-1.amazonaws.com/123456789012/q1");
        assert_eq!(get_queue_name(url).as_deref(), Some("q1"));
        assert_eq!(get_account_id(url).as_deref(), Some("123456789012"));
        assert_eq!(get_region(url).as_deref(), Some("us-east-1"));
        assert!(is_valid_queue_url(url));
    }

    #[test]
    fn scheme_literal_inside_queue_segment_is_removed() {
        let url = Some("sqs.us-east-1.amazonaws.com/123456789012/http://q1");
        assert_eq!(get_queue_name(url).as_deref(), Some("q1"));
        assert_eq!(get_account_id(url).as_deref(), Some("123456789012"));
        assert_eq!(get_region(url).as_deref(), Some("us-east-1"));

        let attrs = QueueAttributes::from_url(url);
        assert_eq!(attrs.queue_name.as_deref(), Some("q1"));
        assert_eq!(attrs.region.as_deref(), Some("us-east-1"));
    }

    #[test]
    fn leading_scheme_result_borrows_input() {
        assert!(matches!(get_queue_name(Some(REGIONAL)), Some(Cow::Borrowed("q1"))));

        let embedded = Some("sqs.us-east-1.amazonaws.com/123456789012/http://q1");
        assert!(matches!(get_queue_name(embedded), Some(Cow::Owned(_))));
    }

    #[test]
    fn unicode_queue_names_follow_letter_and_digit_classes() {
        for name in ["q½", "qⅫ", "कि"] {
            let url = format!("{REGIONAL_PREFIX}/{name}");
            assert!(QueueAttributes::from_url(Some(url.as_str())).is_empty(), "{url}");
        }
        for name in ["naïve", "очередь", "q²", "q①", "क"] {
            let url = format!("{REGIONAL_PREFIX}/{name}");
            assert_eq!(get_queue_name(Some(url.as_str())).as_deref(), Some(name));
        }
    }
}
