// ABOUTME: Command-line parsing for the query and storage calculators
// Maps option strings onto scenarios, defaulting absent options and coercing the rest

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;

use crate::app::config::{QueryDefaults, StorageDefaults};
use crate::app::output::OutputFormat;
use crate::calc::{QueryScenario, StorageScenario};
use crate::utils::{coerce_float, coerce_int, Result};

/// A parsed command line, ready to compute
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation<S> {
    pub scenario: S,
    pub format: OutputFormat,
    pub debug: bool,
}

pub fn query_command() -> Command {
    Command::new("query-cost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculates query cost per month for an accumulating dataset")
        .after_help(
            "Example: 100GB saved every month, queried 30 times per month, for 12 months:\n  \
             query-cost --time 12 --queries 30 --data 100 --cost 0.005",
        )
        .arg(value_arg("time", 't', "Timeframe in months"))
        .arg(value_arg("queries", 'q', "Number of queries per month"))
        .arg(value_arg("data", 'd', "Data in GB per month"))
        .arg(value_arg("cost", 'c', "Cost in USD per GB"))
        .arg(json_arg())
        .arg(debug_arg())
}

pub fn storage_command() -> Command {
    Command::new("storage-cost")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Calculates storage cost per month with short term and long term pricing")
        .after_help(
            "Example: 100GB saved every month for 12 months:\n  \
             storage-cost --time 12 --data 100 --cost 0.02 \\\n    \
             --alternative-cost 0.01 --cost-switch-period 3",
        )
        .arg(value_arg("time", 't', "Timeframe in months"))
        .arg(value_arg("data", 'd', "Data in GB per month"))
        .arg(value_arg("cost", 'c', "Storage cost in USD"))
        .arg(
            long_value_arg(
                "alternative-cost",
                "Alternative storage cost in USD. e.g. Long term storage pricing",
            )
            .visible_alias("ca"),
        )
        .arg(
            long_value_arg(
                "cost-switch-period",
                "Period in months after which data is priced with alternative storage pricing",
            )
            .visible_alias("cp"),
        )
        .arg(json_arg())
        .arg(debug_arg())
}

fn long_value_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name("N")
        .help(help)
        .allow_hyphen_values(true)
}

fn value_arg(name: &'static str, short: char, help: &'static str) -> Arg {
    long_value_arg(name, help).short(short)
}

fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .help("Print the full cost breakdown as JSON")
        .action(ArgAction::SetTrue)
}

fn debug_arg() -> Arg {
    Arg::new("debug")
        .long("debug")
        .help("Enable debug logging to stderr")
        .action(ArgAction::SetTrue)
}

/// Rewrites the two-letter short options `-ca` and `-cp` to their long forms.
///
/// Without this `-ca 0.5` would parse as `-c` with the value `a`. Arguments
/// after a `--` terminator are left untouched.
pub fn normalize_short_options<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;

    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if terminated {
                return arg;
            }

            let Some(text) = arg.to_str().map(str::to_owned) else {
                return arg;
            };

            if text == "--" {
                terminated = true;
                return arg;
            }

            for (short, long) in [
                ("-ca", "--alternative-cost"),
                ("-cp", "--cost-switch-period"),
            ] {
                if let Some(rest) = text.strip_prefix(short) {
                    return match rest.strip_prefix('=') {
                        Some(value) => format!("{long}={value}").into(),
                        None if rest.is_empty() => long.into(),
                        None => format!("{long}={rest}").into(),
                    };
                }
            }

            arg
        })
        .collect()
}

fn int_option(matches: &ArgMatches, name: &str, default: i64) -> i64 {
    matches
        .get_one::<String>(name)
        .map(|value| coerce_int(value))
        .unwrap_or(default)
}

fn float_option(matches: &ArgMatches, name: &str, default: f64) -> f64 {
    matches
        .get_one::<String>(name)
        .map(|value| coerce_float(value))
        .unwrap_or(default)
}

fn output_format(matches: &ArgMatches) -> OutputFormat {
    if matches.get_flag("json") {
        OutputFormat::Json
    } else {
        OutputFormat::Total
    }
}

pub fn query_scenario(matches: &ArgMatches, defaults: &QueryDefaults) -> QueryScenario {
    QueryScenario {
        timeframe: int_option(matches, "time", defaults.timeframe),
        queries: int_option(matches, "queries", defaults.queries) as f64,
        data_per_month: int_option(matches, "data", defaults.data_per_month) as f64,
        cost: float_option(matches, "cost", defaults.cost),
    }
}

pub fn storage_scenario(matches: &ArgMatches, defaults: &StorageDefaults) -> StorageScenario {
    StorageScenario {
        timeframe: int_option(matches, "time", defaults.timeframe),
        data_per_month: int_option(matches, "data", defaults.data_per_month) as f64,
        cost: float_option(matches, "cost", defaults.cost),
        alternative_cost: float_option(matches, "alternative-cost", defaults.alternative_cost),
        cost_switch_period: int_option(
            matches,
            "cost-switch-period",
            defaults.cost_switch_period,
        ),
    }
}

/// Parses a full argument vector, program name first.
pub fn parse_query_args<I, T>(
    args: I,
    defaults: &QueryDefaults,
) -> Result<Invocation<QueryScenario>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let matches = query_command().try_get_matches_from(args)?;

    Ok(Invocation {
        scenario: query_scenario(&matches, defaults),
        format: output_format(&matches),
        debug: matches.get_flag("debug"),
    })
}

/// Parses a full argument vector, program name first.
pub fn parse_storage_args<I, T>(
    args: I,
    defaults: &StorageDefaults,
) -> Result<Invocation<StorageScenario>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let matches = storage_command().try_get_matches_from(normalize_short_options(args))?;

    Ok(Invocation {
        scenario: storage_scenario(&matches, defaults),
        format: output_format(&matches),
        debug: matches.get_flag("debug"),
    })
}
