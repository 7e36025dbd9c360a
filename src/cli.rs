use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::{
    account::{arg::credentials::CredentialsFlags, AccountConfig},
    folder::command::{FolderDeleteCommand, FolderDeleteEmptyCommand, FolderListCommand},
    output::{ColorFmt, OutputFmt},
    printer::Printer,
};

#[derive(Parser, Debug)]
#[command(name = "gmail-imap-tool", author, version, about, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: GmailCommand,

    #[command(flatten)]
    pub credentials: CredentialsFlags,

    /// Enable debug logging
    #[arg(long, global = true, overrides_with = "no_debug")]
    pub debug: bool,

    /// Disable debug logging (default)
    #[arg(long, global = true, overrides_with = "debug")]
    pub no_debug: bool,

    /// Override the default configuration file path
    ///
    /// The configuration file provides default values for the
    /// username, password and debug flags.
    #[arg(long, short, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Customize the output format
    #[arg(long, short, global = true)]
    #[arg(value_name = "FORMAT", value_enum, default_value_t = Default::default())]
    pub output: OutputFmt,

    /// Control when to use colors
    #[arg(long, short = 'C', global = true)]
    #[arg(value_name = "MODE", value_enum, default_value_t = Default::default())]
    pub color: ColorFmt,
}

impl Cli {
    /// Returns the debug flag given on the command line, if any.
    ///
    /// The last of `--debug` and `--no-debug` wins.
    pub fn debug(&self) -> Option<bool> {
        match (self.debug, self.no_debug) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum GmailCommand {
    /// Delete all messages of a folder
    #[command(alias = "purge")]
    DeleteFolder(FolderDeleteCommand),

    /// Delete all folders containing no message
    DeleteEmptyFolders(FolderDeleteEmptyCommand),

    /// Print the name of all folders
    #[command(alias = "list")]
    PrintFolders(FolderListCommand),
}

impl GmailCommand {
    pub fn execute(self, printer: &mut impl Printer, account: &AccountConfig) -> Result<()> {
        match self {
            Self::DeleteFolder(cmd) => cmd.execute(printer, account),
            Self::DeleteEmptyFolders(cmd) => cmd.execute(printer, account),
            Self::PrintFolders(cmd) => cmd.execute(printer, account),
        }
    }
}
