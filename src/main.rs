use anyhow::Result;
use clap::Parser;
use env_logger::{Builder, Env, DEFAULT_FILTER_ENV};
use log::{debug, trace};

use gmail_imap_tool::{
    account::AccountConfig, cli::Cli, config::TomlConfig, printer::StdoutPrinter,
    ui::prompt::InteractivePrompt,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TomlConfig::from_opt_path(cli.config.as_ref())?;
    let debug = cli.debug().or(config.debug).unwrap_or_default();
    let account =
        AccountConfig::from_sources(cli.credentials, debug, &config, &mut InteractivePrompt)?;

    Builder::from_env(Env::default().filter_or(DEFAULT_FILTER_ENV, account.log_filter())).init();
    debug!("output format: {}", cli.output);
    trace!("{account:#?}");

    let mut printer = StdoutPrinter::new(cli.output, cli.color);
    cli.command.execute(&mut printer, &account)
}
