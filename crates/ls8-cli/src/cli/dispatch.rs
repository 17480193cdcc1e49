//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but are populated from clap.
//! `from_matches()` pulls only the fields a command uses; hidden unified
//! flags are parsed and dropped here.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::dump::DumpArgs;
use crate::commands::run::RunArgs;
use crate::commands::trace::TraceArgs;

pub struct RunParams {
    pub program_path: PathBuf,
    pub fuel: Option<u32>,
    pub json: bool,
    pub compact: bool,
    // Note: color is parsed but not extracted (unified flag)
}

impl RunParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            fuel: m.get_one::<u32>("fuel").copied(),
            json: m.get_flag("json"),
            compact: m.get_flag("compact"),
        }
    }
}

impl From<RunParams> for RunArgs {
    fn from(p: RunParams) -> Self {
        // Pretty by default when stdout is a TTY, unless --compact is passed
        let pretty = !p.compact && std::io::IsTerminal::is_terminal(&std::io::stdout());

        Self {
            program_path: p.program_path,
            fuel: p.fuel,
            json: p.json,
            pretty,
        }
    }
}

pub struct TraceParams {
    pub program_path: PathBuf,
    pub fuel: Option<u32>,
    pub color: ColorChoice,
    // Note: json, compact are parsed but not extracted (unified flags)
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            fuel: m.get_one::<u32>("fuel").copied(),
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            program_path: p.program_path,
            fuel: p.fuel,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub program_path: PathBuf,
    pub color: ColorChoice,
    // Note: fuel, json, compact are parsed but not extracted (unified flags)
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            program_path: program_path(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            program_path: p.program_path,
            color: p.color.should_colorize(),
        }
    }
}

/// The program path is a required positional, so clap guarantees it.
fn program_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("program_path")
        .cloned()
        .unwrap_or_default()
}

/// Parse --color flag into ColorChoice.
fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
