use clap::{Args, Parser};
use std::path::PathBuf;

use super::types::{OutputFormat, PolicyArg};

/// Rename the QBit template to your own QBit
#[derive(Parser, Debug)]
#[command(name = "qbitify")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run as if started in <path> instead of the current working directory
    #[arg(short = 'C', value_name = "PATH")]
    pub directory: Option<PathBuf>,

    #[command(flatten)]
    pub answers: AnswerArgs,

    /// Assume yes for the confirmation prompt
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,

    /// How overlapping replacements are resolved. `sequential` keeps the
    /// template's historical output, where GitHub links keep the qrun-io org
    #[arg(long, value_enum, default_value_t = PolicyArg::LongestMatch)]
    pub policy: PolicyArg,

    /// Format of the final report
    #[arg(long, value_enum, default_value_t = OutputFormat::Summary)]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Increase diagnostic logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Answers that skip their interactive prompt
#[derive(Args, Debug, Clone, Default)]
pub struct AnswerArgs {
    /// QBit name in any format (e.g. my-feature, MyFeature)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Maven groupId
    #[arg(long, value_name = "GROUP_ID")]
    pub group_id: Option<String>,

    /// Maven artifactId (defaults to qbit-<kebab name>)
    #[arg(long, value_name = "ARTIFACT_ID")]
    pub artifact_id: Option<String>,

    /// GitHub organization
    #[arg(long, value_name = "ORG")]
    pub github_org: Option<String>,
}
