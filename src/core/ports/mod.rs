//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the filter core and the
//! outside world: where entries come from and where digests go.
//!
//! Implementations live in the `adapters` module.

mod notifier;
mod source;

pub use notifier::Notifier;
pub use source::GazetteSource;
