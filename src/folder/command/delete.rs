use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{
    account::AccountConfig,
    backend::ImapBackend,
    folder::{
        arg::{chunk_size::ChunkSizeFlag, name::FolderNameFlag},
        handlers::{self, DeleteOpts},
    },
    printer::Printer,
    ui::{
        arg::{confirm::ConfirmFlag, dry_run::DryRunFlag},
        prompt::InteractivePrompt,
    },
};

/// Delete all messages of a folder.
///
/// Messages are moved to the Gmail trash then flagged as deleted, by
/// chunks, and the folder is finally expunged. The folder itself is
/// kept.
#[derive(Debug, Parser)]
pub struct FolderDeleteCommand {
    #[command(flatten)]
    pub folder: FolderNameFlag,

    #[command(flatten)]
    pub chunk_size: ChunkSizeFlag,

    #[command(flatten)]
    pub confirm: ConfirmFlag,

    #[command(flatten)]
    pub dry_run: DryRunFlag,
}

impl FolderDeleteCommand {
    pub fn execute(self, printer: &mut impl Printer, account: &AccountConfig) -> Result<()> {
        info!("executing delete folder command");

        let opts = DeleteOpts {
            chunk_size: self.chunk_size.size,
            confirm: self.confirm.enabled(),
            dry_run: self.dry_run.dry_run,
        };

        let mut backend = ImapBackend::connect(account)?;
        handlers::delete_messages(
            printer,
            &mut backend,
            &mut InteractivePrompt,
            &self.folder.name,
            opts,
        )
    }
}
