use anyhow::{Context, Result};
use std::fmt::Debug;
use termcolor::StandardStream;

use crate::{
    output::{ColorFmt, OutputFmt},
    printer::{Print, WriteColor},
};

pub trait Printer {
    /// Prints the result of a command, as plain text or JSON.
    fn print<T: Debug + Print + serde::Serialize>(&mut self, data: T) -> Result<()>;
    /// Prints a progress line, only in plain mode.
    fn print_log<T: Debug + Print>(&mut self, data: T) -> Result<()>;
}

pub struct StdoutPrinter {
    pub writer: Box<dyn WriteColor>,
    pub fmt: OutputFmt,
}

impl StdoutPrinter {
    pub fn new(fmt: OutputFmt, color: ColorFmt) -> Self {
        let writer = Box::new(StandardStream::stdout(color.into()));
        Self { fmt, writer }
    }
}

impl Printer for StdoutPrinter {
    fn print<T: Debug + Print + serde::Serialize>(&mut self, data: T) -> Result<()> {
        match self.fmt {
            OutputFmt::Plain => data.print(self.writer.as_mut()),
            OutputFmt::Json => {
                serde_json::to_writer(self.writer.as_mut(), &data)
                    .context("cannot write json to writer")?;
                writeln!(self.writer)?;
                Ok(())
            }
        }
    }

    fn print_log<T: Debug + Print>(&mut self, data: T) -> Result<()> {
        match self.fmt {
            OutputFmt::Plain => data.print(self.writer.as_mut()),
            OutputFmt::Json => Ok(()),
        }
    }
}
