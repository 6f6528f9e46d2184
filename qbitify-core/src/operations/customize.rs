use crate::apply::apply_to_files;
use crate::config::TemplateLayout;
use crate::customization::Customization;
use crate::error::QbitifyError;
use crate::output::{heading, CustomizeResult};
use crate::relocate::{relocate_namespace, RelocationOutcome};
use crate::rename::rename_placeholder_files;
use crate::replacement::{template_table, ConflictPolicy};
use crate::scanner::collect_content_files;
use anyhow::Result;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Fail unless `root` holds the template's build descriptor.
pub fn ensure_template_root(root: &Path, layout: &TemplateLayout) -> Result<()> {
    if root.join(&layout.build_descriptor).is_file() {
        return Ok(());
    }

    Err(QbitifyError::MissingBuildDescriptor {
        descriptor: layout.build_descriptor.clone(),
        root: root.to_path_buf(),
    }
    .into())
}

/// Turn the template at `root` into the customized QBit.
///
/// Moves the package directories, renames placeholder files, then rewrites
/// the text of every collected file, writing one progress line per action to
/// `out`. Errors stop the run where it is; nothing already changed is undone.
pub fn customize_operation<W: Write>(
    root: &Path,
    layout: &TemplateLayout,
    custom: &Customization,
    policy: ConflictPolicy,
    use_color: bool,
    out: &mut W,
) -> Result<CustomizeResult> {
    ensure_template_root(root, layout)?;

    let old_path = layout.old_package_path();
    let new_path = custom.new_package_path();
    info!(
        "Customizing {} as {} ({:?} replacements)",
        root.display(),
        custom.new_package(),
        policy
    );

    writeln!(out)?;
    writeln!(out, "{}", heading("Moving source files...", use_color))?;
    let mut relocations = Vec::new();
    for source_root in &layout.source_roots {
        let outcome = relocate_namespace(&root.join(source_root), &old_path, &new_path)?;
        if let RelocationOutcome::Moved { .. } = outcome {
            writeln!(
                out,
                "  Moved: {} -> {}",
                source_root.join(&old_path).display(),
                source_root.join(&new_path).display()
            )?;
        }
        relocations.push(outcome);
    }

    writeln!(out)?;
    writeln!(out, "{}", heading("Renaming source files...", use_color))?;
    let mut renames = Vec::new();
    for source_root in &layout.source_roots {
        let dir = root.join(source_root).join(&new_path);
        for rename in rename_placeholder_files(
            &dir,
            &layout.placeholder,
            &layout.source_extension,
            &custom.names.pascal,
        )? {
            writeln!(out, "  Renamed: {} -> {}", rename.from_name(), rename.to_name())?;
            renames.push(rename);
        }
    }

    let files = collect_content_files(root, layout)?;
    debug!("Collected {} files for content substitution", files.len());

    let table = template_table(layout, custom);
    if !table.is_rerun_safe() {
        warn!("Replacement text contains a search string; running again would rewrite it");
    }
    let replacer = table.compile(policy)?;

    writeln!(out)?;
    writeln!(out, "{}", heading("Updating file contents...", use_color))?;
    let report = apply_to_files(&files, &replacer, out)?;
    writeln!(out)?;

    info!(
        "Updated {} of {} files",
        report.updated.len(),
        report.files_scanned
    );

    Ok(CustomizeResult {
        names: custom.names.clone(),
        package: custom.new_package(),
        group_id: custom.group_id.clone(),
        artifact_id: custom.artifact_id.clone(),
        github: custom.github_repo(),
        relocations,
        renames,
        files_scanned: report.files_scanned,
        files_updated: report.updated,
        files_skipped: report.skipped,
    })
}
