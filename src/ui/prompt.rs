use anyhow::{Context, Result};
use dialoguer::{Confirm, Input, Password};

use super::THEME;

/// Interactive capability used by commands to ask the user things.
///
/// Workflows only talk to this trait, so they can run against
/// scripted answers in tests.
pub trait Prompt {
    /// Asks a yes/no question. Defaults to no.
    fn confirm(&mut self, msg: &str) -> Result<bool>;
    fn input(&mut self, msg: &str) -> Result<String>;
    /// Asks for a secret without echoing it.
    fn secret(&mut self, msg: &str) -> Result<String>;
}

/// Terminal prompt backed by [`dialoguer`].
#[derive(Debug, Default)]
pub struct InteractivePrompt;

impl Prompt for InteractivePrompt {
    fn confirm(&mut self, msg: &str) -> Result<bool> {
        Confirm::with_theme(&*THEME)
            .with_prompt(msg)
            .default(false)
            .interact()
            .context("cannot get confirmation")
    }

    fn input(&mut self, msg: &str) -> Result<String> {
        Input::<String>::with_theme(&*THEME)
            .with_prompt(msg)
            .interact_text()
            .with_context(|| format!("cannot get {}", msg.to_lowercase()))
    }

    fn secret(&mut self, msg: &str) -> Result<String> {
        Password::with_theme(&*THEME)
            .with_prompt(msg)
            .interact()
            .with_context(|| format!("cannot get {}", msg.to_lowercase()))
    }
}
