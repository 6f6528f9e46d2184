use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened to one source root's package directory.
///
/// A root without the old package directory is `Missing`. That is an expected
/// variation (a template with no test sources, say), never an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RelocationOutcome {
    Moved {
        from: PathBuf,
        to: PathBuf,
        /// Emptied ancestors of `from` that were removed, innermost first
        removed_dirs: Vec<PathBuf>,
    },
    Missing {
        path: PathBuf,
    },
}

/// Move `source_root/old_path` to `source_root/new_path`.
///
/// Parents of the destination are created as needed. Afterwards the old
/// path's ancestors below `source_root` are removed one level at a time,
/// stopping at the first directory that still has entries.
pub fn relocate_namespace(
    source_root: &Path,
    old_path: &Path,
    new_path: &Path,
) -> Result<RelocationOutcome> {
    let from = source_root.join(old_path);
    if !from.exists() {
        debug!("No package directory at {}", from.display());
        return Ok(RelocationOutcome::Missing { path: from });
    }

    let to = source_root.join(new_path);
    if let Some(parent) = to.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    fs::rename(&from, &to)
        .with_context(|| format!("Failed to move {} to {}", from.display(), to.display()))?;
    debug!("Moved {} -> {}", from.display(), to.display());

    let removed_dirs = remove_empty_ancestors(source_root, old_path);

    Ok(RelocationOutcome::Moved {
        from,
        to,
        removed_dirs,
    })
}

fn remove_empty_ancestors(source_root: &Path, old_path: &Path) -> Vec<PathBuf> {
    let mut removed = Vec::new();

    for ancestor in old_path.ancestors().skip(1) {
        if ancestor.as_os_str().is_empty() {
            break;
        }

        let dir = source_root.join(ancestor);
        match fs::remove_dir(&dir) {
            Ok(()) => removed.push(dir),
            Err(e) => {
                debug!("Keeping {}: {}", dir.display(), e);
                break;
            },
        }
    }

    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn old_path() -> PathBuf {
        ["com", "kingsrook", "qbits", "todo"].iter().collect()
    }

    #[test]
    fn test_moves_subtree_and_prunes_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("src/main/java");
        let old = root.join(old_path());
        fs::create_dir_all(old.join("model")).unwrap();
        fs::write(old.join("TodoQBitConfig.java"), "class A {}").unwrap();
        fs::write(old.join("model/ExampleEntity.java"), "class B {}").unwrap();

        let new_path: PathBuf = ["com", "acme", "myfeature"].iter().collect();
        let outcome = relocate_namespace(&root, &old_path(), &new_path).unwrap();

        let dest = root.join(&new_path);
        assert!(dest.join("TodoQBitConfig.java").exists());
        assert!(dest.join("model/ExampleEntity.java").exists());
        assert!(!root.join("com/kingsrook").exists());
        // `com` still holds `acme`
        assert!(root.join("com").exists());

        match outcome {
            RelocationOutcome::Moved {
                from,
                to,
                removed_dirs,
            } => {
                assert_eq!(from, old);
                assert_eq!(to, dest);
                assert_eq!(
                    removed_dirs,
                    vec![root.join("com/kingsrook/qbits"), root.join("com/kingsrook")]
                );
            },
            RelocationOutcome::Missing { .. } => panic!("expected a move"),
        }
    }

    #[test]
    fn test_prunes_everything_when_unrelated_destination() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("src/test/java");
        fs::create_dir_all(root.join(old_path())).unwrap();

        let new_path: PathBuf = ["org", "example", "thing"].iter().collect();
        relocate_namespace(&root, &old_path(), &new_path).unwrap();

        assert!(root.join("org/example/thing").is_dir());
        assert!(!root.join("com").exists());
        assert!(root.exists());
    }

    #[test]
    fn test_keeps_nonempty_ancestor() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join(old_path())).unwrap();
        fs::write(root.join("com/kingsrook/qbits/README.md"), "keep").unwrap();

        let new_path: PathBuf = ["com", "acme", "x"].iter().collect();
        let outcome = relocate_namespace(&root, &old_path(), &new_path).unwrap();

        assert!(root.join("com/kingsrook/qbits/README.md").exists());
        assert!(matches!(
            outcome,
            RelocationOutcome::Moved { ref removed_dirs, .. } if removed_dirs.is_empty()
        ));
    }

    #[test]
    fn test_missing_old_path_is_skipped() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("src/main/java");

        let new_path: PathBuf = ["com", "acme", "x"].iter().collect();
        let outcome = relocate_namespace(&root, &old_path(), &new_path).unwrap();

        assert_eq!(
            outcome,
            RelocationOutcome::Missing {
                path: root.join(old_path())
            }
        );
        assert!(!root.exists());
    }

    #[test]
    fn test_destination_inside_old_package_parent() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join(old_path())).unwrap();

        let new_path: PathBuf = ["com", "kingsrook", "qbits", "myfeature"].iter().collect();
        let outcome = relocate_namespace(&root, &old_path(), &new_path).unwrap();

        assert!(root.join("com/kingsrook/qbits/myfeature").is_dir());
        assert!(!root.join("com/kingsrook/qbits/todo").exists());
        assert!(matches!(
            outcome,
            RelocationOutcome::Moved { ref removed_dirs, .. } if removed_dirs.is_empty()
        ));
    }

    #[test]
    fn test_nonempty_destination_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().to_path_buf();
        fs::create_dir_all(root.join(old_path())).unwrap();
        fs::create_dir_all(root.join("com/acme/x")).unwrap();
        fs::write(root.join("com/acme/x/Existing.java"), "class E {}").unwrap();

        let new_path: PathBuf = ["com", "acme", "x"].iter().collect();
        assert!(relocate_namespace(&root, &old_path(), &new_path).is_err());
        assert!(root.join(old_path()).exists());
    }
}
