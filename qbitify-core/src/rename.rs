use crate::error::QbitifyError;
use anyhow::{Context, Result};
use globset::Glob;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRename {
    pub from: PathBuf,
    pub to: PathBuf,
}

impl FileRename {
    pub fn from_name(&self) -> String {
        file_name(&self.from)
    }

    pub fn to_name(&self) -> String {
        file_name(&self.to)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Rename the files directly inside `dir` that match `<placeholder>*.<extension>`,
/// replacing every occurrence of `placeholder` in the name with `replacement`.
///
/// A missing `dir` renames nothing. If a computed name is already taken the
/// run stops with [`QbitifyError::RenameCollision`] instead of overwriting it.
pub fn rename_placeholder_files(
    dir: &Path,
    placeholder: &str,
    extension: &str,
    replacement: &str,
) -> Result<Vec<FileRename>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }

    let matcher = Glob::new(&format!("{placeholder}*.{extension}"))
        .with_context(|| format!("Invalid file pattern for placeholder '{placeholder}'"))?
        .compile_matcher();

    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to read {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name();
        if matcher.is_match(Path::new(&name)) {
            candidates.push(entry.path());
        }
    }
    candidates.sort();

    let mut renames = Vec::new();
    for from in candidates {
        let new_name = file_name(&from).replace(placeholder, replacement);
        let to = from.with_file_name(&new_name);
        if to == from {
            debug!("{} already has its final name", from.display());
            continue;
        }
        if to.exists() {
            return Err(QbitifyError::RenameCollision { from, to }.into());
        }

        fs::rename(&from, &to)
            .with_context(|| format!("Failed to rename {} to {}", from.display(), to.display()))?;
        renames.push(FileRename { from, to });
    }

    Ok(renames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "").unwrap();
    }

    #[test]
    fn test_renames_matching_files() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(dir, "TodoQBitConfig.java");
        touch(dir, "TodoQBitProducer.java");
        touch(dir, "BaseTest.java");
        touch(dir, "Todo.txt");

        let renames = rename_placeholder_files(dir, "Todo", "java", "MyFeature").unwrap();

        let names: Vec<(String, String)> = renames
            .iter()
            .map(|r| (r.from_name(), r.to_name()))
            .collect();
        assert_eq!(
            names,
            vec![
                ("TodoQBitConfig.java".to_string(), "MyFeatureQBitConfig.java".to_string()),
                ("TodoQBitProducer.java".to_string(), "MyFeatureQBitProducer.java".to_string()),
            ]
        );
        assert!(dir.join("MyFeatureQBitConfig.java").exists());
        assert!(dir.join("MyFeatureQBitProducer.java").exists());
        assert!(dir.join("BaseTest.java").exists());
        assert!(dir.join("Todo.txt").exists());
    }

    #[test]
    fn test_is_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::create_dir(dir.join("model")).unwrap();
        touch(&dir.join("model"), "TodoEntity.java");

        let renames = rename_placeholder_files(dir, "Todo", "java", "MyFeature").unwrap();
        assert!(renames.is_empty());
        assert!(dir.join("model/TodoEntity.java").exists());
    }

    #[test]
    fn test_replaces_every_occurrence_in_name() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        touch(dir, "TodoToTodo.java");

        let renames = rename_placeholder_files(dir, "Todo", "java", "Task").unwrap();
        assert_eq!(renames[0].to_name(), "TaskToTask.java");
    }

    #[test]
    fn test_collision_stops_without_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path();
        fs::write(dir.join("TodoQBitConfig.java"), "template").unwrap();
        fs::write(dir.join("TaskQBitConfig.java"), "existing").unwrap();

        let err = rename_placeholder_files(dir, "Todo", "java", "Task").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<QbitifyError>(),
            Some(QbitifyError::RenameCollision { .. })
        ));
        assert_eq!(
            fs::read_to_string(dir.join("TaskQBitConfig.java")).unwrap(),
            "existing"
        );
        assert!(dir.join("TodoQBitConfig.java").exists());
    }

    #[test]
    fn test_missing_dir_renames_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let renames =
            rename_placeholder_files(&temp_dir.path().join("nope"), "Todo", "java", "X").unwrap();
        assert!(renames.is_empty());
    }

    #[test]
    fn test_same_name_is_left_alone() {
        let temp_dir = TempDir::new().unwrap();
        touch(temp_dir.path(), "TodoQBitConfig.java");
        let renames =
            rename_placeholder_files(temp_dir.path(), "Todo", "java", "Todo").unwrap();
        assert!(renames.is_empty());
        assert!(temp_dir.path().join("TodoQBitConfig.java").exists());
    }
}
