use clap::ValueEnum;
use qbitify_core::ConflictPolicy;

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

impl From<OutputFormat> for qbitify_core::OutputFormat {
    fn from(arg: OutputFormat) -> Self {
        match arg {
            OutputFormat::Summary => Self::Summary,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// How overlapping replacement rules are resolved
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum PolicyArg {
    /// Longest matching rule wins in a single pass
    LongestMatch,
    /// Each rule rewrites the whole text in table order; links to
    /// github.com/qrun-io/qbit-todo keep their org
    Sequential,
}

impl From<PolicyArg> for ConflictPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LongestMatch => Self::LongestMatch,
            PolicyArg::Sequential => Self::Sequential,
        }
    }
}
