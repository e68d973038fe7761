//! Subcommands.

use clap::Subcommand;

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find or create the reports folder of a manager account
    ReportsFolder {
        /// Manager (MCC) account ID, e.g. 123-456-7890
        mcc: String,
    },

    /// Find or create an account folder inside its manager's reports folder
    AccountFolder {
        /// Manager (MCC) account ID
        mcc: String,
        /// Client account ID
        account: String,
    },

    /// Show metadata of a file
    GetFile {
        /// Drive file ID
        file_id: String,
    },
}
