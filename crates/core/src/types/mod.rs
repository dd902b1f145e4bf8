//! Shared newtype wrappers.
//!
//! Every type in this module validates on construction, so the rest of the
//! workspace can treat a held value as well-formed.

mod course;
mod display_name;
mod email;
mod token;

pub use course::{CourseId, CourseIdError, Progress};
pub use display_name::{DisplayName, DisplayNameError};
pub use email::{Email, EmailError};
pub use token::SessionToken;
