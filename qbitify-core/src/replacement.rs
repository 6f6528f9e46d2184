use crate::case_model::to_camel_case;
use crate::config::TemplateLayout;
use crate::customization::Customization;
use aho_corasick::{AhoCorasick, AhoCorasickBuilder, MatchKind};
use anyhow::{Context, Result};

/// How overlapping rules are resolved when rewriting text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConflictPolicy {
    /// Apply each rule to the whole text in table order. Later rules see the
    /// output of earlier ones.
    Sequential,
    /// Single left-to-right pass; at each position the longest matching rule
    /// wins and replaced text is never scanned again.
    #[default]
    LongestMatch,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub search: String,
    pub replace: String,
}

/// Ordered literal-to-literal rewrite rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    rules: Vec<Rule>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule. A search string that is already present keeps its position
    /// and takes the new replacement. Empty searches are ignored.
    pub fn insert(&mut self, search: impl Into<String>, replace: impl Into<String>) {
        let search = search.into();
        let replace = replace.into();
        if search.is_empty() {
            return;
        }

        if let Some(existing) = self.rules.iter_mut().find(|r| r.search == search) {
            existing.replace = replace;
        } else {
            self.rules.push(Rule { search, replace });
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// True when no rule's search text can appear in any replacement, which
    /// makes a second run over already rewritten text a no-op.
    pub fn is_rerun_safe(&self) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.search != rule.replace)
            .all(|rule| {
                self.rules
                    .iter()
                    .all(|other| !other.replace.contains(&rule.search))
            })
    }

    pub fn compile(&self, policy: ConflictPolicy) -> Result<Replacer> {
        match policy {
            ConflictPolicy::Sequential => Ok(Replacer::Sequential(self.rules.clone())),
            ConflictPolicy::LongestMatch => {
                let matcher = AhoCorasickBuilder::new()
                    .match_kind(MatchKind::LeftmostLongest)
                    .build(self.rules.iter().map(|r| r.search.as_str()))
                    .context("Failed to build replacement matcher")?;
                Ok(Replacer::LongestMatch {
                    matcher,
                    replacements: self.rules.iter().map(|r| r.replace.clone()).collect(),
                })
            },
        }
    }
}

/// A replacement table ready to rewrite text under one policy.
#[derive(Debug, Clone)]
pub enum Replacer {
    Sequential(Vec<Rule>),
    LongestMatch {
        matcher: AhoCorasick,
        replacements: Vec<String>,
    },
}

impl Replacer {
    pub fn replace(&self, text: &str) -> String {
        match self {
            Self::Sequential(rules) => rules
                .iter()
                .fold(text.to_string(), |acc, rule| acc.replace(&rule.search, &rule.replace)),
            Self::LongestMatch {
                matcher,
                replacements,
            } => matcher.replace_all(text, replacements),
        }
    }
}

/// Rules that turn the template's package, class names, Maven coordinates and
/// GitHub links into the user's. Specific rules precede the bare placeholder.
pub fn template_table(layout: &TemplateLayout, custom: &Customization) -> ReplacementTable {
    let old_package = &layout.old_package;
    let new_package = custom.new_package();
    let token = &layout.placeholder;
    let token_camel = to_camel_case(token);
    let pascal = &custom.names.pascal;
    let camel = &custom.names.camel;
    let artifact_id = &custom.artifact_id;
    let old_artifact = &layout.old_artifact_id;
    let old_repo = format!("{}/{}", layout.old_github_org, old_artifact);

    let mut table = ReplacementTable::new();

    // Package
    table.insert(format!("package {old_package}"), format!("package {new_package}"));
    table.insert(format!("import {old_package}."), format!("import {new_package}."));
    table.insert(old_package.as_str(), new_package.as_str());

    // Class names
    table.insert(format!("{token}QBitConfig"), format!("{pascal}QBitConfig"));
    table.insert(format!("{token}QBitProducer"), format!("{pascal}QBitProducer"));
    table.insert(format!("{token_camel}QBitConfig"), format!("{camel}QBitConfig"));
    table.insert(format!("{token} QBit"), format!("{pascal} QBit"));
    table.insert(token.as_str(), pascal.as_str());

    // Maven coordinates
    table.insert(
        format!("<artifactId>{old_artifact}</artifactId>"),
        format!("<artifactId>{artifact_id}</artifactId>"),
    );
    table.insert(
        format!("<name>QBit {token}</name>"),
        format!("<name>QBit {pascal}</name>"),
    );
    table.insert(old_artifact.as_str(), artifact_id.as_str());

    // GitHub URLs
    table.insert(old_repo.as_str(), custom.github_repo());
    table.insert(
        format!("github.com/{old_repo}"),
        format!("github.com/{}", custom.github_repo()),
    );

    table
}
