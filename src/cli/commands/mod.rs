//! Command implementations

mod config;
mod rules;
mod run;

pub use config::config;
pub use rules::rules;
pub use run::run;
