//! Cart and enrollment commands.
//!
//! All of these operate on the signed-in account and refuse when nobody is
//! signed in.
//!
//! # Usage
//!
//! ```bash
//! lh-cli courses cart-add digital-literacy
//! lh-cli courses cart
//! lh-cli courses enroll-all
//! lh-cli courses progress digital-literacy 40
//! lh-cli courses list
//! ```

use learnhub_core::{CourseId, Progress};
use learnhub_platform::AppContext;
use learnhub_platform::store::EnrollOutcome;

use super::CliError;

/// Add a course to the cart.
#[allow(clippy::print_stdout)]
pub fn cart_add(ctx: &AppContext, course: &str) -> Result<(), CliError> {
    let course = CourseId::parse(course)?;
    if ctx.enrollment().add_to_cart(course.clone())? {
        println!("Added {course} to your cart.");
    } else {
        println!("{course} is already in your cart or enrollments.");
    }
    Ok(())
}

/// Remove a course from the cart.
#[allow(clippy::print_stdout)]
pub fn cart_remove(ctx: &AppContext, course: &str) -> Result<(), CliError> {
    let course = CourseId::parse(course)?;
    if ctx.enrollment().remove_from_cart(&course)? {
        println!("Removed {course} from your cart.");
    } else {
        println!("{course} was not in your cart.");
    }
    Ok(())
}

/// Show the cart.
#[allow(clippy::print_stdout)]
pub fn cart(ctx: &AppContext) -> Result<(), CliError> {
    let cart = ctx.enrollment().cart()?;
    if cart.is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }
    for course in cart.courses() {
        println!("{course}");
    }
    Ok(())
}

/// Enroll in a single course directly.
#[allow(clippy::print_stdout)]
pub async fn enroll(ctx: &AppContext, course: &str) -> Result<(), CliError> {
    let course = CourseId::parse(course)?;
    match ctx.enrollment().enroll(course.clone()).await? {
        EnrollOutcome::NewlyEnrolled => println!("Enrolled in {course}."),
        EnrollOutcome::AlreadyEnrolled => println!("You are already enrolled in {course}."),
    }
    Ok(())
}

/// Enroll in everything in the cart.
#[allow(clippy::print_stdout)]
pub async fn enroll_all(ctx: &AppContext) -> Result<(), CliError> {
    let enrolled = ctx.enrollment().enroll_all().await?;
    match enrolled {
        0 => println!("Nothing new to enroll in; your cart is now empty."),
        1 => println!("Enrolled in 1 course."),
        n => println!("Enrolled in {n} courses."),
    }
    Ok(())
}

/// Show enrollments and progress.
#[allow(clippy::print_stdout)]
pub fn list(ctx: &AppContext) -> Result<(), CliError> {
    let record = ctx.enrollment().record()?;
    if record.courses.is_empty() {
        println!("No enrollments yet.");
        return Ok(());
    }
    for course in &record.courses {
        let progress = record.progress_for(course).unwrap_or(Progress::ZERO);
        println!("{course}  {progress}");
    }
    Ok(())
}

/// Record progress in an enrolled course.
#[allow(clippy::print_stdout)]
pub fn progress(ctx: &AppContext, course: &str, percent: u8) -> Result<(), CliError> {
    let course = CourseId::parse(course)?;
    let progress = Progress::new(percent);
    ctx.enrollment().set_progress(&course, progress)?;
    println!("{course} is now at {progress}.");
    Ok(())
}
