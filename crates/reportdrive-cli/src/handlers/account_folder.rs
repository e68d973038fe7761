//! Account folder command handler.
//!
//! Resolves the manager's reports folder first, then the account folder
//! inside it. Both are created when missing.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_file;

/// Find or create the folder of `account` under the reports folder of `mcc`.
pub async fn execute(ctx: &CliContext, mcc: &str, account: &str) -> Result<()> {
    let service = ctx.service().map_err(CliError::from)?;
    let parent = service
        .reports_folder(mcc)
        .await
        .map_err(CliError::from)?;
    let folder = service
        .account_folder(&parent, account)
        .await
        .map_err(CliError::from)?;
    display_file(&folder);
    Ok(())
}
