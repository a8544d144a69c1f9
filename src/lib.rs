//! gazette-digest - a daily digest of the Turkish Official Gazette
//!
//! Collects the day's issue index, drops routine noise (university
//! regulations, announcement-section notices, currency bulletins and
//! optionally appointments) and emails what remains, grouped by section.
//!
//! The filtering core in [`core`] is pure; I/O lives in [`adapters`] behind
//! the traits in [`core::ports`], and [`runner`] wires one run together.

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

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
pub mod runner;
