//! CLI argument definitions using clap

use std::fmt;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};

/// A demonstration CLI with nested subcommands
#[derive(Parser, Debug)]
#[command(name = "myapp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Settings file (default: $XDG_CONFIG_HOME/myapp/myapp.toml)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Print shell completion script
    #[arg(long, value_enum, hide = true)]
    pub completions: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Greet someone with various options
    Greet(GreetArgs),

    /// User management commands
    User {
        #[command(subcommand)]
        command: Option<UserCommands>,
    },

    /// File operations
    File {
        #[command(subcommand)]
        command: Option<FileCommands>,
    },

    /// System information and utilities
    System(SystemArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GreetArgs {
    /// Name to greet
    #[arg(value_name = "name", default_value = "World")]
    pub name: String,

    /// Print greeting in uppercase
    #[arg(short, long)]
    pub uppercase: bool,

    /// Include current time
    #[arg(short, long)]
    pub time: bool,

    /// Number of times to greet
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub count: i32,

    /// Greeting style
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = GreetingStyle::Friendly)]
    pub style: GreetingStyle,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Create a new user
    Create(CreateUserArgs),

    /// List all users
    List(ListUsersArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreateUserArgs {
    /// Username for the new user
    #[arg(value_name = "username")]
    pub username: String,

    /// User email address
    #[arg(short, long)]
    pub email: Option<String>,

    /// User role (default: USER, or user.default_role from settings)
    #[arg(short, long)]
    pub role: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ListUsersArgs {
    /// Output format
    #[arg(short, long, value_enum, ignore_case = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Subcommand, Debug)]
pub enum FileCommands {
    /// Analyze file contents
    Analyze(AnalyzeArgs),

    /// Process file with various operations
    Process(ProcessArgs),

    /// Create backup of files
    Backup(BackupArgs),
}

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    /// File to analyze
    #[arg(value_name = "file", value_hint = ValueHint::FilePath)]
    pub file: String,

    /// Count lines
    #[arg(short, long)]
    pub lines: bool,

    /// Count words
    #[arg(short, long)]
    pub words: bool,

    /// Count characters
    #[arg(short, long)]
    pub chars: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Input file
    #[arg(short, long, required = true, value_hint = ValueHint::FilePath)]
    pub input: String,

    /// Output file (default: stdout)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub output: Option<String>,

    /// Operation to perform
    #[arg(long, value_enum, ignore_case = true)]
    pub operation: Option<FileOperation>,
}

#[derive(Args, Debug, Clone)]
pub struct BackupArgs {
    /// Files to backup
    #[arg(value_name = "files", value_hint = ValueHint::FilePath)]
    pub files: Vec<String>,

    /// Backup destination
    #[arg(short, long)]
    pub destination: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct SystemArgs {
    /// Show system information
    #[arg(short, long)]
    pub info: bool,

    /// Show memory usage
    #[arg(short, long)]
    pub memory: bool,

    /// Show system properties
    #[arg(short, long)]
    pub properties: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum GreetingStyle {
    Formal,
    Casual,
    Friendly,
    Excited,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "UPPER")]
pub enum FileOperation {
    Copy,
    Move,
    Transform,
    Compress,
    Decompress,
    Encrypt,
    Decrypt,
}

/// Display a value enum by its declared command-line name.
fn fmt_value<T: ValueEnum>(value: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.to_possible_value() {
        Some(v) => f.write_str(v.get_name()),
        None => Err(fmt::Error),
    }
}

impl fmt::Display for GreetingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_value(self, f)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_value(self, f)
    }
}

impl fmt::Display for FileOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_value(self, f)
    }
}
