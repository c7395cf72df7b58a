//! Command-line interface for story scripts
//! This binary compiles story scripts into chapter pages and dice scene graphs.
//!
//! Usage:
//!   story html `<input>` [-o `<path>`] [--force]   - Write the chapter page
//!   story json `<input>` [-o `<path>`] [--force]   - Write the scene graph (dice stories only)
//!   story check `<input>`                          - Print diagnostics and a summary
//!
//! Global flags: --config `<file>`, --strict, --legacy, -v/--verbose, --stdout

mod commands;

use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command};
use story_config::{Loader, StoryConfig, LOCAL_CONFIG_FILE};
use tracing_subscriber::EnvFilter;

use crate::commands::{handle_check_command, handle_publish_command, Target};

fn build_cli() -> Command {
    Command::new("story")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compile story scripts into chapter pages and scene graphs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("Configuration file layered over the defaults and ./story.toml"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .global(true)
                .help("Require the first line to be a 'File name:' header")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("legacy")
                .long("legacy")
                .global(true)
                .help("Disable scene breaks and character descriptions")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .help("Increase log output (-v info, -vv debug)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .global(true)
                .help("Print the output instead of writing a file")
                .action(ArgAction::SetTrue),
        )
        .subcommand(publish_command("html", "Write the chapter page"))
        .subcommand(publish_command(
            "json",
            "Write the choose-your-own-adventure scene graph",
        ))
        .subcommand(
            Command::new("check")
                .about("Parse a story script and print its diagnostics")
                .arg(input_arg()),
        )
}

fn publish_command(name: &'static str, about: &'static str) -> Command {
    Command::new(name)
        .about(about)
        .arg(input_arg())
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output path (default: derived from the 'File name:' header)"),
        )
        .arg(
            Arg::new("force")
                .long("force")
                .help("Overwrite an existing output file")
                .action(ArgAction::SetTrue),
        )
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Path to the story script")
        .required(true)
        .index(1)
}

fn main() -> ExitCode {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let (name, sub) = match matches.subcommand() {
        Some(pair) => pair,
        None => return ExitCode::FAILURE,
    };

    let config = match load_config(&matches, sub) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let input = match sub.get_one::<String>("input") {
        Some(input) => input.as_str(),
        None => return ExitCode::FAILURE,
    };
    let to_stdout = matches.get_flag("stdout");

    let result = match name {
        "html" => handle_publish_command(Target::Html, input, output_arg(sub), to_stdout, &config),
        "json" => handle_publish_command(Target::Json, input, output_arg(sub), to_stdout, &config),
        "check" => handle_check_command(input, &config),
        other => Err(format!("Unknown command '{}'", other)),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("Error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn output_arg(sub: &ArgMatches) -> Option<&str> {
    sub.get_one::<String>("output").map(String::as_str)
}

/// Defaults, then `./story.toml`, then `--config`, then flag overrides.
fn load_config(matches: &ArgMatches, sub: &ArgMatches) -> Result<StoryConfig, String> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG_FILE);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("strict") {
        loader = loader
            .set_override("parsing.require_file_name_header", true)
            .map_err(|e| e.to_string())?;
    }
    if matches.get_flag("legacy") {
        loader = loader
            .set_override("parsing.scene_breaks", false)
            .and_then(|l| l.set_override("parsing.character_descriptions", false))
            .map_err(|e| e.to_string())?;
    }
    let force = sub
        .try_get_one::<bool>("force")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false);
    if force {
        loader = loader
            .set_override("output.overwrite", true)
            .map_err(|e| e.to_string())?;
    }
    loader.build().map_err(|e| e.to_string())
}

fn init_tracing(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}
