//! The "start learning" entry point.
//!
//! # Usage
//!
//! ```bash
//! lh-cli start
//! ```

use learnhub_platform::AppContext;
use learnhub_platform::router::EntryDecision;
use learnhub_platform::ui::{LoggingSurface, ModalKind, ModalOrchestrator, ModalPayload};

use super::CliError;

/// Resolve where "start learning" leads for the current state: straight to
/// the dashboard, or to one of the auth modals.
#[allow(clippy::print_stdout)]
pub fn start(ctx: &AppContext) -> Result<(), CliError> {
    match ctx.router().on_start_learning()? {
        EntryDecision::GoToDashboard => println!("You're signed in - heading to your dashboard."),
        EntryDecision::ShowModal(kind) => {
            let mut orchestrator = ModalOrchestrator::new(Box::new(LoggingSurface));
            orchestrator.show(kind, ModalPayload::default());

            match kind {
                ModalKind::Registration => {
                    println!("No account yet. Create one with:");
                    println!("  lh-cli account register -n <name> -e <email> -s <secret>");
                }
                ModalKind::SignIn => {
                    println!("Please sign in:");
                    println!("  lh-cli account login -e <email> -s <secret>");
                }
                ModalKind::VerifyEmail => {
                    println!("Please verify your email:");
                    println!("  lh-cli account verify -e <email>");
                }
                ModalKind::PasswordRecovery => {
                    println!("Recover your account with:");
                    println!("  lh-cli account recover -e <email>");
                }
            }
        }
    }
    Ok(())
}
