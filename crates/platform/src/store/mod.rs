//! Durable stores.
//!
//! Each store owns one family of storage slots and is the only writer of
//! its records:
//!
//! - [`IdentityStore`] - the identity table, keyed by case-folded email
//! - [`SessionStore`] - the single session slot, with lazy expiry
//! - [`EnrollmentStore`] - per-identity carts and enrollment records
//!
//! Services mutate state exclusively through these stores.

mod enrollment;
mod identity;
mod session;

pub use enrollment::{EnrollOutcome, EnrollmentStore};
pub use identity::{IdentityError, IdentityField, IdentityStore};
pub use session::SessionStore;
