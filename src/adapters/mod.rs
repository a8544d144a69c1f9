//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `resmigazete/` - live collector for the gazette site (feed, then web index)
//! - `file/` - saved feed or index page read from disk
//! - `email` - subject, HTML and plain-text rendering of a digest
//! - `sendgrid` - delivery through the SendGrid v3 API

pub mod email;
pub mod file;
pub mod resmigazete;
pub mod sendgrid;

pub use file::FileSource;
pub use resmigazete::ResmiGazeteClient;
pub use sendgrid::SendGridNotifier;
