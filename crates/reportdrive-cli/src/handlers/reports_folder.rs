//! Reports folder command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::display_file;

/// Find or create the reports folder of `mcc` and print it.
pub async fn execute(ctx: &CliContext, mcc: &str) -> Result<()> {
    let service = ctx.service().map_err(CliError::from)?;
    let folder = service
        .reports_folder(mcc)
        .await
        .map_err(CliError::from)?;
    display_file(&folder);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::testing::{context_with, fake};

    #[tokio::test]
    async fn test_creates_missing_reports_folder() {
        let drive = fake();
        let ctx = context_with(&drive);

        execute(&ctx, "123-456-7890").await.unwrap();

        let created = drive.created();
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "AW Reports - AdWords generated Reports: 123-456-7890");
        assert!(created[0].parent_id.is_none());
    }
}
