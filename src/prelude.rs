//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use sqs_url::prelude::*;
//!
//! let url = QueueUrl::parse("https://sqs.us-east-1.amazonaws.com/123456789012/q1").unwrap();
//! assert_eq!(get_queue_name(Some(url.as_str())).as_deref(), Some("q1"));
//! ```

pub use crate::{
    // Extraction
    get_account_id, get_queue_name, get_region, is_valid_queue_url, QueueAttributes,
    // Core types
    AccountId, Endpoint, QueueName, QueueUrl, Scheme,
    // Errors
    AccountIdError, ParseError, ParseErrorKind, QueueNameError,
    // Constants
    ACCOUNT_ID_LENGTH, HTTP_PREFIX, HTTPS_PREFIX, MAX_QUEUE_NAME_LENGTH, QUEUE_URL_SEGMENTS,
    REGIONAL_ENDPOINT_LABELS, SQS_ENDPOINT_PREFIX,
};
