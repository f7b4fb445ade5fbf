//! Command line handling
//!
//! The command line is the whole configuration surface: exactly one
//! positional segment count. Whatever that one argument is, flags and `--`
//! included, it is handed to the segment parser.

use std::ffi::OsString;
use std::io::Write;

use anyhow::Context;
use clap::Parser;
use thiserror::Error;

/// Anything other than exactly one argument
#[derive(Debug, Error)]
#[error("need exactly one parameter: number of segments")]
pub struct UsageError;

#[derive(Parser, Debug)]
#[command(name = "geomgen", disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Number of segments per full turn, as a base-10 integer
    #[arg(value_name = "SEGMENTS", allow_hyphen_values = true)]
    pub segments: OsString,
}

impl Args {
    /// Build from the raw process arguments, program name first
    pub fn from_raw<I, T>(args: I) -> Result<Self, UsageError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut raw: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if raw.len() != 2 {
            log::debug!("expected one argument, got {}", raw.len().saturating_sub(1));
            return Err(UsageError);
        }

        // `--` ahead of the value keeps clap from reading it as a flag or escape
        raw.insert(1, OsString::from("--"));
        Self::try_parse_from(raw).map_err(|e| {
            log::debug!("rejected arguments: {:?}", e.kind());
            UsageError
        })
    }
}

/// Parse `args` (program name first) and write the shader to `out`
pub fn run<I, T, W>(args: I, out: &mut W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
    W: Write,
{
    let args = Args::from_raw(args)?;

    let src = geomgen_core::generate(&args.segments)?;
    writeln!(out, "{src}").context("failed to write shader")?;
    out.flush().context("failed to write shader")?;
    log::trace!("wrote {} bytes", src.len() + 1);
    Ok(())
}
