// Command line host: collects variables and prints expanded templates

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches};
use log::{debug, LevelFilter};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;

use crate::config;
use crate::template::{UriTemplate, VariableValue};

const DEFAULT_LOG_LEVEL: &str = "warn";

pub fn command() -> clap::Command {
    clap::Command::new("uritemplate")
        .about("Expand RFC 6570 URI templates")
        .arg(
            Arg::new("templates")
                .value_name("TEMPLATE")
                .help("URI template to expand")
                .required(true)
                .num_args(1..),
        )
        .arg(
            Arg::new("vars")
                .short('f')
                .long("vars")
                .value_name("FILE")
                .help("Path to a YAML or JSON file containing variables"),
        )
        .arg(
            Arg::new("set")
                .short('s')
                .long("set")
                .value_name("NAME=VALUE")
                .help("Bind a string variable, overriding the variables file")
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("log_level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level written to stderr")
                .value_parser(["off", "error", "warn", "info", "debug", "trace"])
                .default_value(DEFAULT_LOG_LEVEL),
        )
}

/// Collect variables from the file given with `--vars`, then apply `--set` overrides.
pub fn variables_from_matches(matches: &ArgMatches) -> Result<HashMap<String, VariableValue>> {
    let mut variables = match matches.get_one::<String>("vars") {
        Some(path) => config::load_variables(Path::new(path))?,
        None => HashMap::new(),
    };

    for binding in matches.get_many::<String>("set").into_iter().flatten() {
        let (name, value) = config::parse_binding(binding)?;
        variables.insert(name, value);
    }

    Ok(variables)
}

/// Expand every template argument, one output line each.
pub fn expand_all<W: Write>(
    matches: &ArgMatches,
    variables: &HashMap<String, VariableValue>,
    out: &mut W,
) -> Result<()> {
    for source in matches.get_many::<String>("templates").into_iter().flatten() {
        let template = UriTemplate::parse(source).map_err(|err| {
            let position = err.position();
            anyhow::Error::new(err)
                .context(format!("Invalid template '{}' at position {}", source, position))
        })?;
        debug!("variables referenced: {:?}", template.variable_names());
        writeln!(out, "{}", template.expand(variables))?;
    }
    Ok(())
}

fn init_logging(level: &str) -> Result<()> {
    let level: LevelFilter = level.parse().context("Invalid log level")?;
    let mut log_config = ConfigBuilder::new();
    log_config.set_location_level(LevelFilter::Off);
    TermLogger::init(
        level,
        log_config.build(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logging")
}

pub fn run() -> Result<()> {
    let matches = command().get_matches();

    let level = matches
        .get_one::<String>("log_level")
        .map(|s| s.as_str())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    init_logging(level)?;

    let variables = variables_from_matches(&matches)?;
    debug!("loaded {} variable(s)", variables.len());

    let stdout = std::io::stdout();
    expand_all(&matches, &variables, &mut stdout.lock())
}
