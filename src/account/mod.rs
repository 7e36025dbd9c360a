pub mod arg;

use anyhow::Result;
use log::debug;
use std::fmt;

use crate::{config::TomlConfig, ui::prompt::Prompt};

use self::arg::credentials::CredentialsFlags;

/// Represents the resolved account configuration.
///
/// It is built once at startup, out of the command line flags, the
/// configuration file and interactive prompts (in this order of
/// precedence), then passed by reference to every command.
#[derive(Clone, Default, Eq, PartialEq)]
pub struct AccountConfig {
    pub username: String,
    pub password: String,
    pub debug: bool,
}

impl fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccountConfig")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("debug", &self.debug)
            .finish()
    }
}

impl AccountConfig {
    pub fn from_sources(
        flags: CredentialsFlags,
        debug: bool,
        config: &TomlConfig,
        prompt: &mut impl Prompt,
    ) -> Result<Self> {
        let username = match flags.username.or_else(|| config.username.clone()) {
            Some(username) => username,
            None => {
                debug!("no username given, prompting");
                prompt.input("Username")?
            }
        };

        let password = match flags.password.or_else(|| config.password.clone()) {
            Some(password) => password,
            None => {
                debug!("no password given, prompting");
                prompt.secret("Password")?
            }
        };

        Ok(Self {
            username,
            password,
            debug,
        })
    }

    /// Default logger filter for this account, used when `RUST_LOG` is
    /// not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "warn,gmail_imap_tool=debug"
        } else {
            "warn,gmail_imap_tool=info"
        }
    }
}
