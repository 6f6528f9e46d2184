use crate::config::TemplateLayout;
use anyhow::{Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Files whose text gets rewritten, in the order they are processed:
/// source files under the source tree, the build descriptor, top-level docs,
/// docs under the docs tree, then config files anywhere in the repo.
///
/// The build descriptor is listed even if it has gone missing; callers skip
/// paths that no longer exist.
pub fn collect_content_files(root: &Path, layout: &TemplateLayout) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    files.extend(walk_with_extensions(
        &root.join(&layout.source_dir),
        &[layout.source_extension.as_str()],
    )?);

    files.push(root.join(&layout.build_descriptor));

    files.extend(top_level_with_extension(root, &layout.doc_extension)?);
    files.extend(walk_with_extensions(
        &root.join(&layout.docs_dir),
        &[layout.doc_extension.as_str()],
    )?);

    // One pass per extension keeps all `.yml` ahead of all `.yaml`
    for ext in &layout.config_extensions {
        files.extend(walk_with_extensions(root, &[ext.as_str()])?);
    }

    let mut seen = HashSet::new();
    files.retain(|path| seen.insert(path.clone()));

    Ok(files)
}

fn has_extension(path: &Path, extensions: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| extensions.contains(&e))
}

/// Every regular file below `dir` with one of `extensions`. A missing `dir`
/// yields nothing, and subtrees that cannot be read are passed over.
fn walk_with_extensions(dir: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let mut found = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", dir.display(), e);
                continue;
            }
        };
        if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
            found.push(entry.into_path());
        }
    }

    Ok(found)
}

fn top_level_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut found = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let entry = entry?;
        let path = entry.path();
        if entry.file_type()?.is_file() && has_extension(&path, &[extension]) {
            found.push(path);
        }
    }
    found.sort();

    Ok(found)
}
