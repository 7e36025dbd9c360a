use clap::Parser;

/// The dry run flag parser.
#[derive(Debug, Default, Parser)]
pub struct DryRunFlag {
    /// Only report what would be deleted, without deleting anything
    #[arg(long)]
    pub dry_run: bool,
}
