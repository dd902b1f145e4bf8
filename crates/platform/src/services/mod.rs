//! Services.
//!
//! Pure coordination logic over the stores. Services never touch a storage
//! slot directly and never render anything; every call returns a structured
//! result for the caller to present.

pub mod auth;
pub mod enrollment;
pub mod mail;

pub use auth::{AuthError, AuthService};
pub use enrollment::{EnrollmentError, EnrollmentService};
pub use mail::{LoggingMailTransport, MailTransport};
