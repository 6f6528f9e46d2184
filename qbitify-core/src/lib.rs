#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod apply;
pub mod case_model;
pub mod config;
pub mod customization;
pub mod error;
pub mod operations;
pub mod output;
pub mod prompt;
pub mod relocate;
pub mod rename;
pub mod replacement;
pub mod scanner;

pub use apply::{apply_to_file, apply_to_files, ContentReport, FileOutcome};
pub use case_model::{to_camel_case, to_kebab_case, to_package_name, to_pascal_case, NameForms};
pub use config::{Config, PromptDefaults, TemplateLayout};
pub use customization::{namespace_path, Customization};
pub use error::QbitifyError;
pub use operations::{customize_operation, ensure_template_root, gather_customization, Answers};
pub use output::{CustomizeResult, OutputFormat, OutputFormatter};
pub use prompt::Prompter;
pub use relocate::{relocate_namespace, RelocationOutcome};
pub use rename::{rename_placeholder_files, FileRename};
pub use replacement::{template_table, ConflictPolicy, ReplacementTable, Replacer, Rule};
pub use scanner::collect_content_files;
