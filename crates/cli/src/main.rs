//! LearnHub CLI - account, course, and entry-point commands.
//!
//! # Usage
//!
//! ```bash
//! # Create an account, verify it, sign in
//! lh-cli account register -n "Ada Lovelace" -e ada@example.com -s secret1
//! lh-cli account verify -e ada@example.com
//! lh-cli account login -e ada@example.com -s secret1
//!
//! # Build a cart and enroll
//! lh-cli courses cart-add digital-literacy
//! lh-cli courses enroll-all
//! lh-cli courses list
//!
//! # Where would "start learning" take me?
//! lh-cli start
//! ```
//!
//! # Commands
//!
//! - `account` - Register, verify, sign in/out, recover, whoami
//! - `courses` - Cart and enrollment management for the signed-in account
//! - `start` - Resolve the "start learning" entry point

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use secrecy::SecretString;

use learnhub_platform::AppContext;
use learnhub_platform::config::PlatformConfig;

mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "lh-cli")]
#[command(author, version, about = "LearnHub CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage your account and session
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },
    /// Manage your cart and enrollments
    Courses {
        #[command(subcommand)]
        action: CourseAction,
    },
    /// Resolve the "start learning" entry point
    Start,
}

#[derive(Subcommand)]
enum AccountAction {
    /// Register a new account (left unverified until `verify`)
    Register {
        /// Full display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,

        /// Credential secret (at least 6 characters)
        #[arg(short, long)]
        secret: String,
    },
    /// Mark an account's email as verified
    Verify {
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Sign in, replacing any current session
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Credential secret
        #[arg(short, long)]
        secret: String,
    },
    /// Clear the current session
    Logout,
    /// Request account recovery instructions
    Recover {
        /// Email address
        #[arg(short, long)]
        email: String,
    },
    /// Show who is currently signed in
    Whoami,
}

#[derive(Subcommand)]
enum CourseAction {
    /// Add a course to your cart
    CartAdd {
        /// Course identifier, e.g. `digital-literacy`
        course: String,
    },
    /// Remove a course from your cart
    CartRemove {
        /// Course identifier
        course: String,
    },
    /// Show your cart
    Cart,
    /// Enroll in a single course directly
    Enroll {
        /// Course identifier
        course: String,
    },
    /// Enroll in everything in your cart
    EnrollAll,
    /// Show your enrollments and progress
    List,
    /// Record progress in an enrolled course
    Progress {
        /// Course identifier
        course: String,

        /// Completion percentage (0-100)
        percent: u8,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        report(&e);
        std::process::exit(1);
    }
}

#[allow(clippy::print_stderr)]
fn report(error: &CliError) {
    eprintln!("{}", error.user_message());
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = PlatformConfig::from_env()?;
    let ctx = AppContext::new(config)?;

    match cli.command {
        Commands::Account { action } => match action {
            AccountAction::Register {
                name,
                email,
                secret,
            } => {
                commands::account::register(&ctx, &name, &email, SecretString::from(secret))
                    .await?;
            }
            AccountAction::Verify { email } => commands::account::verify(&ctx, &email)?,
            AccountAction::Login { email, secret } => {
                commands::account::login(&ctx, &email, SecretString::from(secret)).await?;
            }
            AccountAction::Logout => commands::account::logout(&ctx)?,
            AccountAction::Recover { email } => commands::account::recover(&ctx, &email)?,
            AccountAction::Whoami => commands::account::whoami(&ctx)?,
        },
        Commands::Courses { action } => match action {
            CourseAction::CartAdd { course } => commands::courses::cart_add(&ctx, &course)?,
            CourseAction::CartRemove { course } => {
                commands::courses::cart_remove(&ctx, &course)?;
            }
            CourseAction::Cart => commands::courses::cart(&ctx)?,
            CourseAction::Enroll { course } => commands::courses::enroll(&ctx, &course).await?,
            CourseAction::EnrollAll => commands::courses::enroll_all(&ctx).await?,
            CourseAction::List => commands::courses::list(&ctx)?,
            CourseAction::Progress { course, percent } => {
                commands::courses::progress(&ctx, &course, percent)?;
            }
        },
        Commands::Start => commands::start::start(&ctx)?,
    }
    Ok(())
}
