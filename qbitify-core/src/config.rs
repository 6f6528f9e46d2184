use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the optional override file, relative to the template root.
pub const CONFIG_PATH: &str = ".qbitify/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateLayout,

    #[serde(default)]
    pub defaults: PromptDefaults,
}

/// The fixed shape of the template being customized.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateLayout {
    /// Build descriptor that must exist at the repo root
    pub build_descriptor: String,
    /// Roots holding package directories (main and test sources)
    pub source_roots: Vec<PathBuf>,
    /// Tree scanned for source files during content substitution
    pub source_dir: PathBuf,
    pub source_extension: String,
    /// Package the template ships with
    pub old_package: String,
    /// Class-name token marking template files and identifiers
    pub placeholder: String,
    pub docs_dir: PathBuf,
    pub doc_extension: String,
    /// Config files rewritten wherever they live in the repo
    pub config_extensions: Vec<String>,
    pub old_artifact_id: String,
    pub old_github_org: String,
}

impl Default for TemplateLayout {
    fn default() -> Self {
        Self {
            build_descriptor: "pom.xml".to_string(),
            source_roots: vec![PathBuf::from("src/main/java"), PathBuf::from("src/test/java")],
            source_dir: PathBuf::from("src"),
            source_extension: "java".to_string(),
            old_package: "com.kingsrook.qbits.todo".to_string(),
            placeholder: "Todo".to_string(),
            docs_dir: PathBuf::from("docs"),
            doc_extension: "md".to_string(),
            config_extensions: vec!["yml".to_string(), "yaml".to_string()],
            old_artifact_id: "qbit-todo".to_string(),
            old_github_org: "qrun-io".to_string(),
        }
    }
}

impl TemplateLayout {
    /// Namespace directory of the template's package, e.g. `com/kingsrook/qbits/todo`.
    pub fn old_package_path(&self) -> PathBuf {
        crate::customization::namespace_path(&self.old_package)
    }
}

/// Values offered at each prompt when the user just presses enter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    pub name: String,
    pub group_id: String,
    /// Prefixed to the kebab-case name to form the default artifactId
    pub artifact_prefix: String,
    pub github_org: String,
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            name: "my-qbit".to_string(),
            group_id: "com.kingsrook.qbits".to_string(),
            artifact_prefix: "qbit-".to_string(),
            github_org: "qrun-io".to_string(),
        }
    }
}

impl Config {
    /// Load `.qbitify/config.toml` under `root` if it exists, defaults otherwise
    pub fn load(root: &Path) -> Result<Self> {
        let config_path = root.join(CONFIG_PATH);
        if config_path.exists() {
            return Self::load_from_path(&config_path);
        }

        Ok(Self::default())
    }

    /// Load config from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))?;
        Ok(config)
    }
}
