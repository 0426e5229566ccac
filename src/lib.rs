//! doc-scan-checks - Typed models for identity-verification check results
//!
//! A document-scan session returns a list of checks (document authenticity,
//! face match, liveness, ...). This library maps the decoded JSON of those
//! checks into read-only typed values. Mapping is total: missing, `null` or
//! malformed fields become absent values instead of errors.
//!
//! ```
//! use doc_scan_checks::models::CheckResponse;
//! use serde_json::json;
//!
//! let raw = json!({ "id": "abc123", "state": "COMPLETED", "created": "not-a-date" });
//! let check = CheckResponse::from(&raw);
//! assert_eq!(check.id(), Some("abc123"));
//! assert_eq!(check.created(), None);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod date;
pub mod models;
pub mod output;
