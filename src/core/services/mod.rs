//! Business logic services
//!
//! Pure logic that operates on domain models. These services have no I/O
//! dependencies - they operate on data passed in and return results.
//!
//! - [`filter`] - Decide keep/drop for each entry
//! - [`digest`] - Group survivors into a presentation-ready digest
//! - [`rules`] - The ordered suppression rule table
//! - [`text`] - Text folding used by the rules

pub mod digest;
pub mod filter;
pub mod rules;
pub mod text;

pub use digest::{CategoryCount, Digest, DigestItem, DigestSection, DropSummary, build};
pub use filter::{Decision, FilterError, FilterResult, classify, filter};
pub use rules::{Rule, rules};
