//! Best-effort parser for SQS queue URLs.
//!
//! This crate recovers the queue name, account id and region from a URL
//! that is believed to address an SQS queue, using nothing but the URL
//! string. It is intended for instrumentation layers that intercept
//! outbound HTTP calls and want to attribute them to a queue without
//! calling any AWS service.
//!
//! # Overview
//!
//! Queue URLs have the structure:
//!
//! ```text
//! [http:// | https://]<endpoint>/<account-id>/<queue-name>
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use sqs_url::{get_account_id, get_queue_name, get_region};
//!
//! let url = Some("https://sqs.us-east-1.amazonaws.com/123456789012/orders");
//!
//! assert_eq!(get_queue_name(url).as_deref(), Some("orders"));
//! assert_eq!(get_account_id(url).as_deref(), Some("123456789012"));
//! assert_eq!(get_region(url).as_deref(), Some("us-east-1"));
//!
//! // Not a queue URL: nothing is extracted, nothing fails
//! assert_eq!(get_queue_name(Some("https://example.com/index.html")), None);
//! assert_eq!(get_queue_name(None), None);
//! ```
//!
//! # Typed API
//!
//! When an error explaining the rejection is wanted, parse into a
//! [`QueueUrl`]:
//!
//! ```rust
//! use sqs_url::{ParseErrorKind, QueueUrl};
//!
//! let url = QueueUrl::parse("https://sqs.eu-central-1.amazonaws.com/123456789012/jobs").unwrap();
//! assert_eq!(url.queue_name().as_str(), "jobs");
//!
//! let err = QueueUrl::parse("https://sqs.eu-central-1.amazonaws.com/1234/jobs").unwrap_err();
//! assert!(matches!(err.kind, ParseErrorKind::InvalidAccountId(_)));
//! ```
//!
//! # Validation Rules
//!
//! | Component | Rule |
//! |-----------|------|
//! | Scheme | every `http://` and `https://` literal is removed, wherever it occurs |
//! | Segments | exactly 3 after the scheme, empty segments count |
//! | Endpoint | starts with `sqs`, any case (not checked for queue name) |
//! | Account id | exactly 12 decimal digits (Unicode `Nd`) |
//! | Queue name | 1-80 Unicode letters, digits, `-` or `_` |
//! | Region | second label of a four-label endpoint |
//!
//! Queue name extraction deliberately skips the endpoint rule so that
//! legacy (`queue.amazonaws.com`) and custom endpoints still yield a name.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod account_id;
mod constants;
mod endpoint;
mod error;
mod extract;
#[cfg(kani)]
mod kani_impls;
pub mod prelude;
mod queue_name;
mod queue_url;
mod scheme;

pub use account_id::AccountId;
pub use constants::{
    ACCOUNT_ID_LENGTH, HTTP_PREFIX, HTTPS_PREFIX, MAX_QUEUE_NAME_LENGTH, QUEUE_URL_SEGMENTS,
    REGIONAL_ENDPOINT_LABELS, SQS_ENDPOINT_PREFIX,
};
pub use endpoint::Endpoint;
pub use error::{AccountIdError, ParseError, ParseErrorKind, QueueNameError};
pub use extract::{QueueAttributes, get_account_id, get_queue_name, get_region, is_valid_queue_url};
pub use queue_name::QueueName;
pub use queue_url::QueueUrl;
pub use scheme::{Scheme, split_segments, strip_scheme};
