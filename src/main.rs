use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use node_gate::config::{self, Overrides};
use node_gate::detect::EnvironmentSource;
use node_gate::gate;
use node_gate::messages::{Language, Messages};
use node_gate::ui;
use node_gate::GateError;

#[derive(clap::Parser, Debug)]
#[command(
    name = "node-gate",
    version,
    about = "Refuse to install dependencies on a Node.js runtime that is too old"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, env = "NODE_GATE_MIN_MAJOR", help = "Lowest accepted major version")]
    min_major: Option<u64>,

    #[arg(
        long,
        env = "NODE_GATE_RUNTIME_VERSION",
        help = "Check this version string instead of detecting it"
    )]
    runtime_version: Option<String>,

    #[arg(long, env = "NODE_GATE_NODE", help = "Node.js binary to query")]
    node: Option<PathBuf>,

    #[arg(long, env = "NODE_GATE_LANG", help = "Message language (ru, en)")]
    lang: Option<Language>,

    #[arg(long, help = "Print debug logs to stderr")]
    verbose: bool,

    #[arg(long, help = "Disable colored output")]
    no_color: bool,
}

/// Log level: `--verbose` forces debug, otherwise `RUST_LOG`, otherwise warn.
/// Logs go to stderr so stdout carries only the result line.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("node_gate=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("node_gate=warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Reads the message language straight from the environment, for errors
/// raised before the arguments are parsed.
fn fallback_language() -> Language {
    std::env::var("NODE_GATE_LANG")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Turns a clap rejection into a configuration error, keeping only the
/// headline of clap's report.
fn usage_error(err: &clap::Error) -> GateError {
    let rendered = err.to_string();
    let headline = rendered.lines().next().unwrap_or_default().trim();
    GateError::config(headline.strip_prefix("error: ").unwrap_or(headline))
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            if std::env::var_os("NO_COLOR").is_some() {
                ui::disable_colors();
            }
            ui::display_failure(&Messages::new(fallback_language()), &usage_error(&e));
            return ExitCode::from(gate::EXIT_FAILED);
        }
    };
    init_tracing(args.verbose);

    if args.no_color || std::env::var_os("NO_COLOR").is_some() {
        ui::disable_colors();
    }

    tracing::debug!("node-gate starting with args: {:?}", args);

    let overrides = Overrides {
        min_major: args.min_major,
        language: args.lang,
    };

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg.with_overrides(&overrides),
        Err(e) => {
            let messages = Messages::new(args.lang.unwrap_or_default());
            ui::display_failure(&messages, &e);
            return ExitCode::from(gate::EXIT_FAILED);
        }
    };

    let messages = Messages::from_config(&config);
    let source = EnvironmentSource::from_env(args.runtime_version, args.node);

    let result = gate::check(&source, config.min_major);
    ui::report(&messages, &result);

    ExitCode::from(gate::exit_code(&result))
}
