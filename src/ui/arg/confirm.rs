use clap::Parser;

/// The confirmation flags parser.
#[derive(Debug, Default, Parser)]
pub struct ConfirmFlag {
    /// Ask before previewing and deleting (default)
    #[arg(long, overrides_with = "no_confirm")]
    pub confirm: bool,

    /// Do not ask anything, just do it
    #[arg(long, overrides_with = "confirm")]
    pub no_confirm: bool,
}

impl ConfirmFlag {
    /// Whether the user should be asked for confirmation.
    ///
    /// The last flag given wins, confirmation is enabled when none is
    /// given.
    pub fn enabled(&self) -> bool {
        !self.no_confirm
    }
}
