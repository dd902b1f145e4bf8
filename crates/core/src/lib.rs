//! LearnHub Core - Shared types library.
//!
//! This crate provides common types used across all LearnHub components:
//! - `platform` - Identity, session, and enrollment core
//! - `cli` - Command-line front end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for emails, display names, course slugs,
//!   progress percentages, and session tokens

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
