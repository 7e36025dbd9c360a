//! Output module.
//!
//! This module contains the output formats and color modes exposed
//! as global flags.

use clap::ValueEnum;
use std::fmt;
use termcolor::ColorChoice;

/// Represents the available output formats.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum OutputFmt {
    #[default]
    Plain,
    Json,
}

impl fmt::Display for OutputFmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fmt = match *self {
            OutputFmt::Json => "JSON",
            OutputFmt::Plain => "Plain",
        };
        write!(f, "{}", fmt)
    }
}

/// Represents the available color modes.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, ValueEnum)]
pub enum ColorFmt {
    Never,
    Always,
    Ansi,
    #[default]
    Auto,
}

impl From<ColorFmt> for ColorChoice {
    fn from(fmt: ColorFmt) -> Self {
        match fmt {
            ColorFmt::Never => Self::Never,
            ColorFmt::Always => Self::Always,
            ColorFmt::Ansi => Self::AlwaysAnsi,
            ColorFmt::Auto => Self::Auto,
        }
    }
}
