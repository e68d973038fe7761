//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Ask the context for the folder service, call it, print the result.
//!
//! Port errors are converted to [`CliError`](crate::CliError) so `main` can
//! pick the exit code.

pub mod account_folder;
pub mod get_file;
pub mod reports_folder;

#[cfg(test)]
pub(crate) mod testing;
