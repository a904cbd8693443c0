//! Configuration management for `bbkit-core`.
//!
//! This module defines the declarative data structures for the bracket-tag
//! rule catalog. It handles serialization/deserialization of YAML catalogs
//! and validates them at load time, so a malformed pattern can never surface
//! during a transformation call.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::BbkitError;

/// Maximum allowed length for a rule pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Matches `$n` capture-group references inside a template string.
static GROUP_REF_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());

/// A single declarative transformation rule for one bracket-tag family.
///
/// A rule pairs one recognition pattern with two substitution templates:
/// `replace_with` produces the hypertext rendering, `content` keeps only the
/// captured text for plain-text stripping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct TagRule {
    /// Unique identifier for the rule (e.g., "namedlink"). Used only for
    /// diagnostics and testing, never for matching.
    pub name: String,
    /// The regex pattern recognizing the tag, including capture groups.
    pub pattern: String,
    /// Template substituted in render mode, referencing groups as `$1`, `$2`.
    pub replace_with: String,
    /// Template substituted in strip mode, typically just the inner capture.
    pub content: String,
    /// If true, `.` in the pattern matches newlines, letting a paired tag
    /// span multiple lines. The list-item rule leaves this off so an item
    /// stays bounded by its line.
    pub dot_matches_new_line: bool,
}

impl Default for TagRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            pattern: String::new(),
            replace_with: String::new(),
            content: "$1".to_string(),
            dot_matches_new_line: true,
        }
    }
}

/// An ordered catalog of [`TagRule`]s.
///
/// Order is part of the engine's observable contract: rules are applied top
/// to bottom and the output of each becomes the input of the next. The
/// catalog is never sorted or deduplicated into a map.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct MarkupConfig {
    /// The rules, in application order.
    pub rules: Vec<TagRule>,
}

impl MarkupConfig {
    /// Loads a rule catalog from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rule catalog from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rule catalog {}", path.display()))?;
        let config: MarkupConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse rule catalog {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the built-in default catalog from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: MarkupConfig =
            serde_yml::from_str(default_yaml).context("Failed to parse default rules")?;

        validate_rules(&config.rules)?;
        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }
}

/// Validates catalog integrity (unique names, regex compilation, capture
/// group references in both templates).
pub(crate) fn validate_rules(rules: &[TagRule]) -> Result<(), BbkitError> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            errors.push(
                BbkitError::PatternLengthExceeded(
                    rule.name.clone(),
                    rule.pattern.len(),
                    MAX_PATTERN_LENGTH,
                )
                .to_string(),
            );
            continue;
        }

        if let Err(e) = Regex::new(&rule.pattern) {
            errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
            continue;
        }

        let mut group_count = 0;
        let mut is_escaped = false;
        for c in rule.pattern.chars() {
            match c {
                '\\' => is_escaped = !is_escaped,
                '(' if !is_escaped => group_count += 1,
                _ => is_escaped = false,
            }
        }

        for (template_kind, template) in
            [("replacement", &rule.replace_with), ("content", &rule.content)]
        {
            for cap in GROUP_REF_REGEX.captures_iter(template) {
                if let Some(group_num_str) = cap.get(1) {
                    if let Ok(group_num) = group_num_str.as_str().parse::<usize>() {
                        if group_num > group_count {
                            errors.push(format!(
                                "Rule '{}': {} template references non-existent capture group '${}'.",
                                rule.name, template_kind, group_num
                            ));
                        }
                    }
                }
            }
        }
    }

    if !errors.is_empty() {
        Err(BbkitError::ValidationFailed(errors.join("\n")))
    } else {
        Ok(())
    }
}
