//! Collector port
//!
//! Defines the interface for obtaining one gazette issue.

use super::super::models::Gazette;

/// Source of a collected gazette issue
///
/// Implementations fetch and parse the issue index, resolve links to
/// absolute URLs and place every entry under a section before handing it
/// over.
pub trait GazetteSource {
    /// Collect the current issue
    fn fetch(&self) -> anyhow::Result<Gazette>;

    /// Short description of where entries come from, for logs and reports
    fn describe(&self) -> String;
}
