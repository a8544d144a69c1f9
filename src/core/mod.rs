//! Core domain logic for gazette-digest
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Entry, Section, DropCategory, FilterConfig)
//! - `services/` - Filter engine and digest builder
//! - `ports/` - Trait definitions for the collector and the notifier

pub mod models;
pub mod ports;
pub mod services;
