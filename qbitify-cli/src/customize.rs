use anyhow::{Context, Result};
use qbitify_core::{
    customize_operation, ensure_template_root, gather_customization, Answers, Config,
    OutputFormatter, Prompter,
};
use std::io::{self, Write};
use std::path::Path;

use crate::cli::args::AnswerArgs;
use crate::cli::{OutputFormat, PolicyArg};

pub struct CustomizeArgs<'a> {
    pub root: &'a Path,
    pub answers: AnswerArgs,
    pub yes: bool,
    pub policy: PolicyArg,
    pub output: OutputFormat,
    pub use_color: bool,
}

pub fn handle_customize(args: CustomizeArgs<'_>) -> Result<()> {
    let config = Config::load(args.root)?;
    ensure_template_root(args.root, &config.template)?;

    // Keep stdout clean for the JSON report
    let conversation: Box<dyn Write> = match args.output {
        OutputFormat::Json => Box::new(io::stderr()),
        OutputFormat::Summary => Box::new(io::stdout()),
    };
    let mut prompter = Prompter::new(io::stdin().lock(), conversation);

    let answers = Answers {
        name: args.answers.name,
        group_id: args.answers.group_id,
        artifact_id: args.answers.artifact_id,
        github_org: args.answers.github_org,
        assume_yes: args.yes,
    };

    let Some(customization) = gather_customization(&mut prompter, &config, &answers)? else {
        return Ok(());
    };

    let result = customize_operation(
        args.root,
        &config.template,
        &customization,
        args.policy.into(),
        args.use_color,
        prompter.writer(),
    )?;

    let mut stdout = io::stdout();
    writeln!(stdout, "{}", result.format(args.output.into()))
        .context("Failed to write report")?;
    Ok(())
}
