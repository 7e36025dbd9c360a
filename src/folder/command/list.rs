use anyhow::Result;
use clap::Parser;
use log::info;

use crate::{account::AccountConfig, backend::ImapBackend, folder::handlers, printer::Printer};

/// List all folders.
#[derive(Debug, Parser)]
pub struct FolderListCommand {}

impl FolderListCommand {
    pub fn execute(self, printer: &mut impl Printer, account: &AccountConfig) -> Result<()> {
        info!("executing folder list command");

        let mut backend = ImapBackend::connect(account)?;
        handlers::list(printer, &mut backend)
    }
}
