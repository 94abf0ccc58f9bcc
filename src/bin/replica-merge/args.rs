use std::{io::IsTerminal as _, path::PathBuf};

use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};

/// Merge two edited copies of a base file through a sequence CRDT, in both
/// directions, and check that the results agree.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// The common ancestor of both edits
    #[arg(index = 1)]
    pub base: PathBuf,

    /// The first editor's version
    #[arg(index = 2)]
    pub left: PathBuf,

    /// The second editor's version
    #[arg(index = 3)]
    pub right: PathBuf,

    /// YAML file with the reconciliation settings
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Agent name of the first editor, overrides the configuration file
    #[arg(long)]
    pub left_agent: Option<String>,

    /// Agent name of the second editor, overrides the configuration file
    #[arg(long)]
    pub right_agent: Option<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the operations derived for each side
    #[arg(long)]
    pub ops: bool,

    #[command(flatten)]
    pub verbose: Verbosity<WarnLevel>,

    /// Colour the log lines written to stderr
    #[arg(
        long,
        value_name = "WHEN",
        default_value_t = ColorChoice::Auto,
        default_missing_value = "always",
        num_args = 0..=1,
        value_enum
    )]
    pub color: ColorChoice,
}

impl Args {
    pub fn use_colors(&self) -> bool {
        match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            _ => {
                std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
            }
        }
    }
}

#[derive(ValueEnum, Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.to_possible_value()
            .expect("no values are skipped")
            .get_name()
            .fmt(f)
    }
}
