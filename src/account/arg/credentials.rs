use clap::Parser;

/// The account credentials flags parser.
#[derive(Debug, Default, Parser)]
pub struct CredentialsFlags {
    /// Gmail username.
    ///
    /// Falls back to the `username` entry of the configuration file,
    /// then to an interactive prompt.
    #[arg(long, global = true, value_name = "USERNAME")]
    pub username: Option<String>,

    /// Gmail password (or app password).
    ///
    /// Falls back to the `password` entry of the configuration file,
    /// then to an interactive prompt that does not echo.
    #[arg(long, global = true, value_name = "PASSWORD")]
    pub password: Option<String>,
}
