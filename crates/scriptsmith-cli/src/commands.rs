//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use scriptsmith::Framework;
use std::path::PathBuf;

/// Scriptsmith: turn recorded page interactions into automation scripts
#[derive(Parser, Debug)]
#[command(name = "scriptsmith")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a script from recorded actions
    Generate(GenerateArgs),

    /// Compile one natural-language assertion instruction
    Compile(CompileArgs),

    /// Show the normalized template set
    Templates(TemplatesArgs),
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Recorded actions (JSON array or `{ "actions": [...] }`)
    #[arg(short, long)]
    pub actions: PathBuf,

    /// Configuration file (JSON, or YAML by extension); omit for a literal DOM script
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reviewer edits (JSON)
    #[arg(short, long)]
    pub review: Option<PathBuf>,

    /// Keep only these action indexes (overrides the review's selection)
    #[arg(long, value_delimiter = ',')]
    pub select: Option<Vec<usize>>,

    /// Output file or directory [default: automation-script.js]
    #[arg(short, long, conflicts_with = "stdout")]
    pub output: Option<PathBuf>,

    /// Print the script instead of writing a file
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the compile command
#[derive(Parser, Debug)]
pub struct CompileArgs {
    /// Target framework
    #[arg(short, long, default_value = "playwright")]
    pub framework: FrameworkArg,

    /// Selector of the element the instruction talks about
    #[arg(short, long, default_value = "#target")]
    pub selector: String,

    /// Locator expression [default: resolved from the selector]
    #[arg(short, long)]
    pub locator: Option<String>,

    /// Instruction words, joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub instruction: Vec<String>,
}

/// Arguments for the templates command
#[derive(Parser, Debug)]
pub struct TemplatesArgs {
    /// Framework (overrides the configuration file's)
    #[arg(short, long)]
    pub framework: Option<FrameworkArg>,

    /// Configuration file to normalize
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Framework choice on the command line
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FrameworkArg {
    /// Literal DOM scripting
    Plain,
    /// Playwright test
    #[default]
    Playwright,
    /// Cypress spec
    Cypress,
    /// selenium-webdriver script
    Selenium,
}

impl From<FrameworkArg> for Framework {
    fn from(arg: FrameworkArg) -> Self {
        match arg {
            FrameworkArg::Plain => Self::Plain,
            FrameworkArg::Playwright => Self::Playwright,
            FrameworkArg::Cypress => Self::Cypress,
            FrameworkArg::Selenium => Self::Selenium,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
