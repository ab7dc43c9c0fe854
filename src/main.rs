use std::io::{self, Write};
use std::process;

use clap::{Command, CommandFactory, Parser};
use clap_complete::{generate, Generator};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use myapp::cli::commands::execute_command;
use myapp::cli::error::IoResultExt;
use myapp::cli::{output, Cli, CliError};
use myapp::config::Settings;
use myapp::exitcode;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // help and version go to stdout with exit 0, everything else is a usage error
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let err = CliError::from(e);
            eprint!("{err}");
            process::exit(err.exit_code());
        }
    };

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        eprintln!("Generating completion file for {shell:?}...");
        print_completions(shell, &mut cmd);
        process::exit(exitcode::OK);
    }

    setup_logging(cli.verbose);

    let settings = match Settings::load(cli.config.as_deref()) {
        Ok(s) => s,
        Err(e) => {
            output::error(&e);
            process::exit(e.exit_code());
        }
    };
    if let Ok(rendered) = settings.to_toml() {
        tracing::debug!("effective settings:\n{}", rendered);
    }

    let mut out = io::stdout().lock();
    let result = execute_command(&cli, &settings, &mut out);
    let result = result.and_then(|()| out.flush().with_context("flush stdout"));
    if let Err(e) = result {
        output::error(&e);
        process::exit(e.exit_code());
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            output::warning("Don't be crazy, max is -vvv");
            LevelFilter::TRACE
        }
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
