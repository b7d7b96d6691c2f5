//! Command-line shapes: `lg`, `lg +`, `lg -`. Everything else is a usage
//! error, decided before any USB access.

use std::ffi::OsString;

use clap::{App, AppSettings, Arg};
use log::debug;

use crate::brightness::Direction;

pub const USAGE: &str = "
  lg +     brighten the screen
  lg -     dim the screen
  lg       interactive mode for adjusting brightness
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invocation {
    Interactive,
    Once(Direction),
}

/// Arguments did not match an accepted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Usage {
    /// More than one argument was given.
    pub too_many: bool,
}

fn app() -> App<'static, 'static> {
    App::new("lg")
        .usage("lg [+|-]")
        .setting(AppSettings::DisableHelpFlags)
        .setting(AppSettings::DisableVersion)
        .arg(
            Arg::with_name("adjust")
                .value_name("+|-")
                .possible_values(&["+", "-"])
                .hide_possible_values(true),
        )
}

/// Classify `args`, including the program name in the first position.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, Usage>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let given = args.len().saturating_sub(1);
    let usage = Usage {
        too_many: given > 1,
    };

    let matches = app().get_matches_from_safe(args).map_err(|e| {
        debug!("invalid invocation: {}", e.message);
        usage
    })?;

    // `--` is swallowed by clap and leaves no value behind, so the value
    // count must account for every argument given.
    match (matches.value_of("adjust"), given) {
        (None, 0) => Ok(Invocation::Interactive),
        (Some("+"), 1) => Ok(Invocation::Once(Direction::Brighten)),
        (Some("-"), 1) => Ok(Invocation::Once(Direction::Dim)),
        _ => Err(usage),
    }
}
