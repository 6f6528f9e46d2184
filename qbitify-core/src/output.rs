use crate::case_model::NameForms;
use crate::relocate::RelocationOutcome;
use crate::rename::FileRename;
use nu_ansi_term::Color as AnsiColor;
use serde::Serialize;
use serde_json::json;
use std::fmt::Write;
use std::path::PathBuf;

/// Output format for the final report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Summary,
    Json,
}

const RULE_WIDTH: usize = 60;

/// `====` line framing the banner and the completion message
pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Section heading such as `Moving source files...`
pub fn heading(text: &str, use_color: bool) -> String {
    if use_color {
        AnsiColor::Yellow.bold().paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Result of a completed customization
#[derive(Debug, Clone, Serialize)]
pub struct CustomizeResult {
    pub names: NameForms,
    pub package: String,
    pub group_id: String,
    pub artifact_id: String,
    pub github: String,
    pub relocations: Vec<RelocationOutcome>,
    pub renames: Vec<FileRename>,
    pub files_scanned: usize,
    pub files_updated: Vec<PathBuf>,
    pub files_skipped: Vec<PathBuf>,
}

impl CustomizeResult {
    pub fn directories_moved(&self) -> usize {
        self.relocations
            .iter()
            .filter(|r| matches!(r, RelocationOutcome::Moved { .. }))
            .count()
    }
}

/// Trait for formatting output in different formats
pub trait OutputFormatter {
    fn format(&self, format: OutputFormat) -> String;
    fn format_json(&self) -> String;
    fn format_summary(&self) -> String;
}

impl OutputFormatter for CustomizeResult {
    fn format(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Summary => self.format_summary(),
        }
    }

    fn format_json(&self) -> String {
        serde_json::to_string(&json!({
            "success": true,
            "operation": "customize",
            "names": self.names,
            "package": self.package,
            "group_id": self.group_id,
            "artifact_id": self.artifact_id,
            "github": self.github,
            "summary": {
                "directories_moved": self.directories_moved(),
                "files_renamed": self.renames.len(),
                "files_scanned": self.files_scanned,
                "files_updated": self.files_updated.len(),
                "files_skipped": self.files_skipped.len(),
            },
            "relocations": self.relocations,
            "renames": self.renames,
            "updated": self.files_updated,
        }))
        .unwrap_or_default()
    }

    fn format_summary(&self) -> String {
        let mut output = String::new();

        writeln!(output, "{}", rule()).unwrap();
        writeln!(output, "Customization complete!").unwrap();
        writeln!(output, "{}", rule()).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "  Package:     {}", self.package).unwrap();
        writeln!(output, "  groupId:     {}", self.group_id).unwrap();
        writeln!(output, "  artifactId:  {}", self.artifact_id).unwrap();
        writeln!(output, "  GitHub:      {}", self.github).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "Next steps:").unwrap();
        writeln!(output, "  1. Review the changes: git diff").unwrap();
        writeln!(output, "  2. Build the project:  mvn clean package").unwrap();
        writeln!(output, "  3. Commit your changes").unwrap();

        output
    }
}
