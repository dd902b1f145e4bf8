//! LearnHub Platform - Identity, session, and enrollment core.
//!
//! This crate owns everything durable in LearnHub: the identity table, the
//! single-slot session, and per-identity carts and enrollment records, plus
//! the services that mutate them and the presentation-state controllers
//! (modal orchestrator, entry-point router) that decide which surface the
//! front end should show.
//!
//! # Architecture
//!
//! State is local-first: every record is a JSON document in a configurable
//! data directory, read and written through [`storage::Storage`]. There is
//! no server, no background task, and no cross-process coordination -
//! concurrent writers are last-writer-wins by design (single-user,
//! single-device assumption).
//!
//! All components hang off an explicit [`state::AppContext`] constructed
//! once at startup and threaded through; there are no ambient globals.
//!
//! # Modules
//!
//! - [`config`] - Environment-driven configuration
//! - [`error`] - Unified error type with user-facing messages
//! - [`state`] - Application context
//! - [`storage`] - Slot-based persistence (file-backed or in-memory)
//! - [`clock`] - Injectable time source
//! - [`models`] - Domain records (identity, session, enrollment)
//! - [`store`] - Durable stores over [`storage`]
//! - [`services`] - Auth and enrollment services, mail transport seam
//! - [`ui`] - Modal orchestration
//! - [`router`] - Entry-point routing decisions

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod clock;
pub mod config;
pub mod error;
pub mod models;
pub mod router;
pub mod services;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use error::{AppError, Result};
pub use state::AppContext;
