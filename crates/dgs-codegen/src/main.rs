mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;
const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else {
        match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{} {err:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        }
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) = select_log_level(
        cli.verbose,
        std::env::var(LOG_LEVEL_ENV_VAR).ok().as_deref(),
    );

    // stdout is reserved for the command result.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

/// `--verbose` wins over `LOG_LEVEL`; an unrecognized `LOG_LEVEL` falls back
/// to the default and yields a warning to log once logging is up.
fn select_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    let Some(env_val) = env_val else {
        return (DEFAULT_LOG_LEVEL, None);
    };

    match env_val.trim().to_ascii_lowercase().as_str() {
        "trace" => (tracing::Level::TRACE, None),
        "debug" | "verbose" => (tracing::Level::DEBUG, None),
        "info" => (tracing::Level::INFO, None),
        "warn" => (tracing::Level::WARN, None),
        "error" => (tracing::Level::ERROR, None),
        _ => (
            DEFAULT_LOG_LEVEL,
            Some(format!(
                "Invalid `{LOG_LEVEL_ENV_VAR}` environment variable value: \
                `{env_val}`"
            )),
        ),
    }
}
