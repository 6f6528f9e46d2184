use std::path::PathBuf;
use thiserror::Error;

/// Failures the customization reports by kind rather than as a bare I/O error.
#[derive(Debug, Error)]
pub enum QbitifyError {
    #[error("Run from the template repo; {} not found.", .descriptor)]
    MissingBuildDescriptor { descriptor: String, root: PathBuf },

    #[error("Cannot rename {} to {}: destination already exists", .from.display(), .to.display())]
    RenameCollision { from: PathBuf, to: PathBuf },
}
