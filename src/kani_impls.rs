//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{
    AccountId, Endpoint, QueueName, QueueUrl, Scheme, get_account_id, get_queue_name, get_region,
};

/// Valid queue name characters, restricted to ASCII for tractability
const QUEUE_NAME_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789-_";

/// Lowercase region characters
const REGION_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789-";

fn pick(chars: &[u8]) -> char {
    let idx: usize = kani::any();
    chars[idx % chars.len()] as char
}

impl kani::Arbitrary for AccountId {
    fn any() -> Self {
        let id: String = (0..12).map(|_| pick(b"0123456789")).collect();
        AccountId::parse(&id).expect("valid account id by construction")
    }
}

impl kani::Arbitrary for QueueName {
    fn any() -> Self {
        // 1-8 chars for tractability
        let len: usize = kani::any();
        let len = 1 + (len % 8);

        let name: String = (0..len).map(|_| pick(QUEUE_NAME_CHARS)).collect();
        QueueName::parse(&name).expect("valid queue name by construction")
    }
}

impl kani::Arbitrary for Endpoint {
    fn any() -> Self {
        let len: usize = kani::any();
        let len = 1 + (len % 6);

        let region: String = (0..len).map(|_| pick(REGION_CHARS)).collect();
        Endpoint::new(&format!("sqs.{region}.amazonaws.com"))
    }
}

impl kani::Arbitrary for QueueUrl {
    fn any() -> Self {
        let scheme = if kani::any() { Some(Scheme::Https) } else { None };
        QueueUrl::new(scheme, kani::any(), kani::any(), kani::any())
            .expect("valid queue URL by construction")
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: Display output parses back to the same URL
#[kani::proof]
#[kani::unwind(20)]
fn proof_parse_roundtrip() {
    let url: QueueUrl = kani::any();
    let reparsed = QueueUrl::parse(url.as_str()).expect("display form should parse");
    assert_eq!(reparsed, url);
}

/// Proof: Extraction functions agree with the typed accessors
#[kani::proof]
#[kani::unwind(20)]
fn proof_extraction_matches_accessors() {
    let url: QueueUrl = kani::any();
    let s = Some(url.as_str());

    assert_eq!(get_queue_name(s).as_deref(), Some(url.queue_name().as_str()));
    assert_eq!(get_account_id(s).as_deref(), Some(url.account_id().as_str()));
    assert_eq!(get_region(s).as_deref(), url.region());
}

/// Proof: Queue name extraction ignores the endpoint host
#[kani::proof]
#[kani::unwind(20)]
fn proof_queue_name_ignores_endpoint() {
    let account_id: AccountId = kani::any();
    let queue_name: QueueName = kani::any();
    let host = if kani::any() { "xyz" } else { "queue.amazonaws.com" };

    let url = format!("https://{host}/{account_id}/{queue_name}");
    assert_eq!(get_queue_name(Some(url.as_str())).as_deref(), Some(queue_name.as_str()));
    assert_eq!(get_account_id(Some(url.as_str())), None);
}

/// Proof: Absent input never yields a value
#[kani::proof]
fn proof_none_yields_none() {
    assert!(get_queue_name(None).is_none());
    assert!(get_account_id(None).is_none());
    assert!(get_region(None).is_none());
}
