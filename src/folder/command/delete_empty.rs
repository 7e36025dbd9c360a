use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    account::AccountConfig,
    backend::ImapBackend,
    folder::handlers,
    printer::Printer,
    ui::{
        arg::{confirm::ConfirmFlag, dry_run::DryRunFlag},
        prompt::InteractivePrompt,
    },
};

/// Delete all empty folders.
///
/// Folders reserved by Gmail, the inbox and folders containing other
/// folders are left untouched.
#[derive(Debug, Parser)]
pub struct FolderDeleteEmptyCommand {
    #[command(flatten)]
    pub confirm: ConfirmFlag,

    #[command(flatten)]
    pub dry_run: DryRunFlag,
}

impl FolderDeleteEmptyCommand {
    pub fn execute(self, printer: &mut impl Printer, account: &AccountConfig) -> Result<()> {
        info!("executing delete empty folders command");

        let mut backend = ImapBackend::connect(account)?;
        handlers::delete_empty(
            printer,
            &mut backend,
            &mut InteractivePrompt,
            self.confirm.enabled(),
            self.dry_run.dry_run,
        )
    }
}
