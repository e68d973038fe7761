//! Get-file command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_file;

/// Fetch `file_id` and print its metadata.
pub async fn execute(ctx: &CliContext, file_id: &str) -> Result<()> {
    let service = ctx.service().map_err(CliError::from)?;
    let file = service.file_by_id(file_id).await.map_err(CliError::from)?;
    display_file(&file);
    Ok(())
}
