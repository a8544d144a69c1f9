//! Domain models for gazette-digest
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Entry`] - one listed gazette item
//! - [`Section`] - top-level division an entry is printed under
//! - [`DropCategory`] - why an entry was suppressed
//! - [`FilterConfig`] - which categories to suppress
//! - [`Gazette`] - a collected issue: metadata plus entries

mod category;
mod entry;
mod filter_config;
mod gazette;
mod section;

pub use category::DropCategory;
pub use entry::{DocType, Entry};
pub use filter_config::FilterConfig;
pub use gazette::{Gazette, IssueInfo, TURKISH_MONTHS};
pub use section::Section;
