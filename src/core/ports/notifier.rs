//! Notifier port
//!
//! Defines the interface for delivering a digest.

use super::super::models::IssueInfo;
use super::super::services::Digest;

/// Delivery channel for a finished digest
///
/// The notifier owns rendering, subject lines and transport credentials.
pub trait Notifier {
    /// Deliver the digest for `issue`
    ///
    /// One best-effort attempt; failures are returned, not retried.
    fn send(&self, issue: &IssueInfo, digest: &Digest) -> anyhow::Result<()>;

    /// Where the digest is delivered, for logs and reports
    fn recipient(&self) -> &str;
}
