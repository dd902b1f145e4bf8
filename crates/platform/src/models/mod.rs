//! Domain models.
//!
//! These are the records the stores persist: validated domain objects, not
//! raw storage rows. Construction goes through the stores; nothing outside
//! [`crate::store`] mutates them in place.

mod enrollment;
mod identity;
mod session;

pub use enrollment::{Cart, EnrollmentRecord};
pub use identity::Identity;
pub use session::{Session, SessionUser};
