use crate::case_model::NameForms;
use std::path::PathBuf;

/// Everything the user chose: the QBit name and its Maven/GitHub coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customization {
    pub names: NameForms,
    pub group_id: String,
    pub artifact_id: String,
    pub github_org: String,
}

impl Customization {
    pub fn new(
        name: &str,
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        github_org: impl Into<String>,
    ) -> Self {
        Self {
            names: NameForms::derive(name),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            github_org: github_org.into(),
        }
    }

    /// `<groupId>.<package-safe name>`
    pub fn new_package(&self) -> String {
        format!("{}.{}", self.group_id, self.names.package)
    }

    pub fn new_package_path(&self) -> PathBuf {
        namespace_path(&self.new_package())
    }

    /// `<org>/<artifactId>`
    pub fn github_repo(&self) -> String {
        format!("{}/{}", self.github_org, self.artifact_id)
    }
}

/// Turn a dotted package into nested directories. Empty segments are dropped.
pub fn namespace_path(package: &str) -> PathBuf {
    package.split('.').filter(|segment| !segment.is_empty()).collect()
}
