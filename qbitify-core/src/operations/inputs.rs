use crate::config::Config;
use crate::customization::Customization;
use crate::output::rule;
use crate::prompt::Prompter;
use crate::NameForms;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Answers supplied up front; each one replaces its prompt.
#[derive(Debug, Clone, Default)]
pub struct Answers {
    pub name: Option<String>,
    pub group_id: Option<String>,
    pub artifact_id: Option<String>,
    pub github_org: Option<String>,
    /// Skip the final confirmation
    pub assume_yes: bool,
}

/// Walk the user through naming their QBit.
///
/// Returns `None` when the user declines the final confirmation. Nothing on
/// disk is touched here.
pub fn gather_customization<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &Config,
    answers: &Answers,
) -> Result<Option<Customization>> {
    let defaults = &config.defaults;

    {
        let out = prompter.writer();
        writeln!(out, "{}", rule())?;
        writeln!(out, "QBit Template Customization")?;
        writeln!(out, "{}", rule())?;
        writeln!(out)?;
        writeln!(out, "This will rename the template to match your QBit name.")?;
        writeln!(
            out,
            "Enter your QBit name in any format (e.g., 'my-feature', 'MyFeature')."
        )?;
        writeln!(out)?;
    }

    let name = answer_or_ask(prompter, "QBit name", &defaults.name, answers.name.as_deref())?;
    let names = NameForms::derive(&name);

    {
        let out = prompter.writer();
        writeln!(out)?;
        writeln!(out, "Derived names:")?;
        writeln!(out, "  kebab-case:  {}", names.kebab)?;
        writeln!(out, "  PascalCase:  {}", names.pascal)?;
        writeln!(out, "  camelCase:   {}", names.camel)?;
        writeln!(out, "  package:     {}", names.package)?;
        writeln!(out)?;
    }

    let group_id = answer_or_ask(
        prompter,
        "Maven groupId",
        &defaults.group_id,
        answers.group_id.as_deref(),
    )?;
    let default_artifact = format!("{}{}", defaults.artifact_prefix, names.kebab);
    let artifact_id = answer_or_ask(
        prompter,
        "Maven artifactId",
        &default_artifact,
        answers.artifact_id.as_deref(),
    )?;
    let github_org = answer_or_ask(
        prompter,
        "GitHub organization",
        &defaults.github_org,
        answers.github_org.as_deref(),
    )?;

    let customization = Customization {
        names,
        group_id,
        artifact_id,
        github_org,
    };

    {
        let out = prompter.writer();
        writeln!(out)?;
        writeln!(out, "Configuration:")?;
        writeln!(out, "  groupId:     {}", customization.group_id)?;
        writeln!(out, "  artifactId:  {}", customization.artifact_id)?;
        writeln!(out, "  GitHub:      {}", customization.github_repo())?;
        writeln!(out)?;
    }

    if !answers.assume_yes && !prompter.confirm("Proceed with customization?")? {
        writeln!(prompter.writer(), "Aborted.")?;
        return Ok(None);
    }

    Ok(Some(customization))
}

fn answer_or_ask<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    msg: &str,
    default: &str,
    preset: Option<&str>,
) -> Result<String> {
    match preset.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => {
            writeln!(prompter.writer(), "{msg}: {value}")?;
            Ok(value.to_string())
        },
        None => prompter.ask(msg, default),
    }
}
