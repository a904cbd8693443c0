//! compiler.rs - Compiles the declarative rule catalog into regexes.
//!
//! Each rule is compiled twice, once case-sensitively and once
//! case-insensitively, so that the engine's render mode can honor the
//! caller's case flag and strip mode can always match insensitively without
//! any regex construction happening on the transformation path.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use regex::{Regex, RegexBuilder};

use crate::config::{validate_rules, MarkupConfig, TagRule};
use crate::errors::BbkitError;

/// Represents a single compiled transformation rule.
///
/// Holds both case variants of the compiled pattern along with the render
/// and strip substitution templates.
#[derive(Debug)]
pub struct CompiledRule {
    /// The unique name of the rule, kept for diagnostics.
    pub name: String,
    /// Pattern compiled with literal tag keywords matched exactly.
    pub case_sensitive: Regex,
    /// Pattern compiled with tag keywords matched case-insensitively. The
    /// captured content is a slice of the input either way, so case
    /// insensitivity never alters what the capture preserves.
    pub case_insensitive: Regex,
    /// Template substituted in render mode.
    pub replace_with: String,
    /// Template substituted in strip mode.
    pub content: String,
}

/// The ordered, immutable set of compiled rules.
///
/// This is the registry consumed by the engine. It is fixed at construction:
/// no rule can be added, removed, or reordered afterwards, which is what
/// makes the engine stateless and safe to share across threads.
#[derive(Debug)]
pub struct CompiledRules {
    /// Compiled rules in application order.
    pub rules: Vec<CompiledRule>,
}

fn build_regex(rule: &TagRule, case_insensitive: bool) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&rule.pattern)
        .case_insensitive(case_insensitive)
        .dot_matches_new_line(rule.dot_matches_new_line)
        .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
        .build()
}

/// Compiles a [`MarkupConfig`] into [`CompiledRules`], preserving order.
///
/// Validation and compilation failures are collected and reported together
/// as a single fatal error; no partial catalog is ever returned.
pub fn compile_rules(config: &MarkupConfig) -> Result<CompiledRules, BbkitError> {
    debug!("Starting compilation of {} rules.", config.rules.len());

    validate_rules(&config.rules)?;

    let mut compiled_rules = Vec::with_capacity(config.rules.len());
    let mut compilation_errors = Vec::new();

    for rule in &config.rules {
        let sensitive = build_regex(rule, false);
        let insensitive = build_regex(rule, true);

        match (sensitive, insensitive) {
            (Ok(case_sensitive), Ok(case_insensitive)) => {
                log::debug!(
                    target: "bbkit_core::compiler",
                    "Rule '{}' compiled successfully.",
                    &rule.name
                );
                compiled_rules.push(CompiledRule {
                    name: rule.name.clone(),
                    case_sensitive,
                    case_insensitive,
                    replace_with: rule.replace_with.clone(),
                    content: rule.content.clone(),
                });
            }
            (Err(e), _) | (_, Err(e)) => {
                compilation_errors.push(BbkitError::RuleCompilationError(rule.name.clone(), e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(BbkitError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!("Finished compiling rules. Total compiled: {}.", compiled_rules.len());
        Ok(CompiledRules { rules: compiled_rules })
    }
}
