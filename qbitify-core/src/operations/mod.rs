//! High-level operations behind the `qbitify` command
//!
//! The CLI gathers answers with [`gather_customization`] and hands them to
//! [`customize_operation`], which performs every filesystem change.

pub mod customize;
pub mod inputs;

pub use customize::{customize_operation, ensure_template_root};
pub use inputs::{gather_customization, Answers};
