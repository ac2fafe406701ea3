#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::ffi::OsString;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::ArgMatches;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub fn build() -> Command {
    let about = format!(
        "Checks the HTTP status of {} and exits. Press CTRL+C to stop waiting.",
        Config::default(ConfigKey::TargetUrl)
    );

    return Command::new("status-term")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"));
}

/// Parses `args`. `--help` and `--version` print and exit successfully; any
/// other argument is returned as an error so it goes through the regular
/// failure path.
pub fn parse_from<I, T>(args: I) -> Result<ArgMatches>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match build().try_get_matches_from(args) {
        Ok(matches) => return Ok(matches),
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit();
        }
        Err(err) => return Err(err.into()),
    }
}

pub fn parse() -> Result<ArgMatches> {
    return parse_from(std::env::args_os());
}
