//! Account and session commands.
//!
//! # Usage
//!
//! ```bash
//! lh-cli account register -n "Ada Lovelace" -e ada@example.com -s secret1
//! lh-cli account verify -e ada@example.com
//! lh-cli account login -e ada@example.com -s secret1
//! lh-cli account whoami
//! lh-cli account logout
//! ```

use secrecy::SecretString;

use learnhub_core::Email;
use learnhub_platform::AppContext;

use super::CliError;

/// Register a new account. The account stays unverified until
/// `account verify` is run for it.
#[allow(clippy::print_stdout)]
pub async fn register(
    ctx: &AppContext,
    name: &str,
    email: &str,
    secret: SecretString,
) -> Result<(), CliError> {
    let identity = ctx.auth().register(name, email, &secret).await?;
    println!("Registered {} <{}>.", identity.name, identity.email);
    println!("Check your inbox, then run: lh-cli account verify -e {}", identity.email);
    Ok(())
}

/// Mark an account's email as verified.
#[allow(clippy::print_stdout)]
pub fn verify(ctx: &AppContext, email: &str) -> Result<(), CliError> {
    let email = Email::parse(email)?;
    ctx.auth().verify(&email)?;
    println!("{email} is now verified. You can sign in.");
    Ok(())
}

/// Sign in, replacing any current session.
#[allow(clippy::print_stdout)]
pub async fn login(ctx: &AppContext, email: &str, secret: SecretString) -> Result<(), CliError> {
    let session = ctx.auth().login(email, &secret).await?;
    println!("Signed in as {} <{}>.", session.user.name, session.user.email);
    Ok(())
}

/// Clear the current session. A no-op when nobody is signed in.
#[allow(clippy::print_stdout)]
pub fn logout(ctx: &AppContext) -> Result<(), CliError> {
    ctx.auth().logout()?;
    println!("Signed out.");
    Ok(())
}

/// Request account recovery instructions.
///
/// Always reports success; whether an account exists for the address is
/// deliberately not observable here.
#[allow(clippy::print_stdout)]
pub fn recover(ctx: &AppContext, email: &str) -> Result<(), CliError> {
    ctx.auth().recover(email)?;
    println!("If an account exists for {email}, recovery instructions are on their way.");
    Ok(())
}

/// Show who is currently signed in.
#[allow(clippy::print_stdout)]
pub fn whoami(ctx: &AppContext) -> Result<(), CliError> {
    match ctx.sessions().current()? {
        Some(session) => {
            println!("{} <{}>", session.user.name, session.user.email);
        }
        None => println!("Not signed in."),
    }
    Ok(())
}
