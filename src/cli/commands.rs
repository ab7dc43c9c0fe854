//! Command dispatch: one parsed invocation, one leaf action

use std::io::Write;

use clap::CommandFactory;
use tracing::{debug, instrument};

use crate::actions::{file, greet, system, user};
use crate::cli::args::{Cli, Commands, FileCommands, UserCommands};
use crate::cli::error::{CliResult, IoResultExt};
use crate::config::Settings;

/// Run the action selected by `cli`, writing its output to `out`.
#[instrument(level = "debug", skip_all)]
pub fn execute_command(cli: &Cli, settings: &Settings, out: &mut dyn Write) -> CliResult<()> {
    match &cli.command {
        None => welcome(out),
        Some(Commands::Greet(args)) => {
            debug!("leaf: greet");
            greet::greet(args, out)
        }
        Some(Commands::User { command }) => match command {
            Some(UserCommands::Create(args)) => {
                debug!("leaf: user create");
                user::create(args, settings, out)
            }
            Some(UserCommands::List(args)) => {
                debug!("leaf: user list");
                user::list(args, out)
            }
            None => group_hint("User management commands. Use --help to see subcommands.", out),
        },
        Some(Commands::File { command }) => match command {
            Some(FileCommands::Analyze(args)) => {
                debug!("leaf: file analyze");
                file::analyze(args, out)
            }
            Some(FileCommands::Process(args)) => {
                debug!("leaf: file process");
                file::process(args, out)
            }
            Some(FileCommands::Backup(args)) => {
                debug!("leaf: file backup");
                file::backup(args, settings, out)
            }
            None => group_hint("File operations. Use --help to see subcommands.", out),
        },
        Some(Commands::System(args)) => {
            debug!("leaf: system");
            system::system(args, out)
        }
    }
}

/// Root action: banner plus the usage summary.
fn welcome(out: &mut dyn Write) -> CliResult<()> {
    let help = Cli::command().render_help();
    writeln!(out, "Welcome to MyApp CLI!").with_context("write welcome")?;
    writeln!(out, "Use --help to see available commands.").with_context("write welcome")?;
    write!(out, "{help}").with_context("write usage")
}

fn group_hint(msg: &str, out: &mut dyn Write) -> CliResult<()> {
    writeln!(out, "{msg}").with_context("write group hint")
}
