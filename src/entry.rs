use std::ffi::OsString;
use std::path::Path;

use clap::error::ErrorKind;
use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use crate::args::VolleyArgs;
use crate::config::{DEFAULT_CONFIG_FILES, apply_config, load_config};
use crate::error::AppResult;
use crate::logger::init_logging;
use crate::run::{RunConfig, run as run_batch};

/// Parses the process arguments and executes one run.
///
/// # Errors
///
/// Returns an error for invalid configuration, unreadable or empty payload
/// files, and runtime setup failures.
pub fn run() -> AppResult<()> {
    let Some((mut args, matches)) = parse_args(std::env::args_os())? else {
        return Ok(());
    };

    let config = load_config(args.config.as_deref())?;
    if let Some(config) = config.as_ref() {
        apply_config(&mut args, &matches, config)?;
    }

    init_logging(args.verbose, args.no_color);
    if config.is_some() {
        debug!("Applied config file values");
    }

    let run_config = RunConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_batch(run_config))?;
    Ok(())
}

/// Returns `None` after printing usage when there is nothing to do.
pub(crate) fn parse_args<I>(raw_args: I) -> AppResult<Option<(VolleyArgs, ArgMatches)>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut cmd = VolleyArgs::command();
    let raw_args: Vec<OsString> = raw_args.into_iter().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = match cmd.try_get_matches_from(raw_args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => return Err(err.into()),
    };
    let args = VolleyArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}
