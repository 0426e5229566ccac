//! doc-scan-checks - Inspect identity-verification check results
//!
//! Reads the JSON returned for a document-scan session (or a single check)
//! and prints a typed summary of each check.

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

mod cli;
mod commands;

/// Main entry point for the doc-scan-checks CLI
fn main() -> anyhow::Result<()> {
    cli::run()
}
