//! Constants for SQS queue URL validation.

/// Plain HTTP scheme prefix stripped before splitting.
pub const HTTP_PREFIX: &str = "http://";

/// HTTPS scheme prefix stripped before splitting.
pub const HTTPS_PREFIX: &str = "https://";

/// Number of `/`-separated segments in a queue URL (endpoint, account, name).
pub const QUEUE_URL_SEGMENTS: usize = 3;

/// Exact length of an AWS account id.
pub const ACCOUNT_ID_LENGTH: usize = 12;

/// Maximum queue name length in characters.
pub const MAX_QUEUE_NAME_LENGTH: usize = 80;

/// Case-insensitive prefix every SQS endpoint host starts with.
pub const SQS_ENDPOINT_PREFIX: &str = "sqs";

/// Label count of a regional endpoint such as `sqs.us-east-1.amazonaws.com`.
pub const REGIONAL_ENDPOINT_LABELS: usize = 4;
