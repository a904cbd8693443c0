// bbkit-core/src/engines/bbcode_engine.rs
//! A `MarkupEngine` implementation that transforms bracket-tag (BBCode)
//! markup with an ordered single-pass regex pipeline.
//!
//! License: MIT OR APACHE 2.0

use std::borrow::Cow;

use regex::Regex;

use crate::config::MarkupConfig;
use crate::engine::{CaseMatching, MarkupEngine};
use crate::errors::BbkitError;
use crate::rules::compiler::{compile_rules, CompiledRule, CompiledRules};

/// The standard bracket-tag transformation engine.
///
/// Construction compiles and validates the whole rule catalog; that is the
/// only point of failure. The resulting engine holds no mutable state and a
/// shared reference can serve any number of concurrent callers.
///
/// The pipeline is deliberately a forward-only sequence of global
/// substitutions rather than a recursive parser: nesting a tag inside a tag
/// of the same type is not supported, and a later substitution that happens
/// to produce text matching an earlier rule is not revisited.
#[derive(Debug)]
pub struct BbcodeEngine {
    compiled_rules: CompiledRules,
    config: MarkupConfig,
}

impl BbcodeEngine {
    /// Builds an engine from a declarative rule catalog.
    pub fn new(config: MarkupConfig) -> Result<Self, BbkitError> {
        let compiled_rules = compile_rules(&config)?;
        Ok(Self { compiled_rules, config })
    }

    /// Builds an engine over the built-in default catalog.
    pub fn with_default_rules() -> Result<Self, BbkitError> {
        let config = MarkupConfig::load_default_rules().map_err(BbkitError::AnyhowWrapper)?;
        Self::new(config)
    }

    /// Runs one ordered pass over the rule list, substituting whichever
    /// regex variant and template `select` picks for each rule.
    fn apply_pass<'a, F>(&'a self, source: &str, select: F) -> String
    where
        F: Fn(&'a CompiledRule) -> (&'a Regex, &'a str),
    {
        let mut current = source.to_string();
        for rule in &self.compiled_rules.rules {
            let (regex, template) = select(rule);
            // replace_all substitutes every non-overlapping occurrence found
            // in one left-to-right scan; a borrowed Cow means nothing matched.
            if let Cow::Owned(replaced) = regex.replace_all(&current, template) {
                current = replaced;
            }
        }
        current
    }
}

impl MarkupEngine for BbcodeEngine {
    fn render(&self, source: &str, case: CaseMatching) -> String {
        self.apply_pass(source, |rule| {
            let regex = match case {
                CaseMatching::Sensitive => &rule.case_sensitive,
                CaseMatching::Insensitive => &rule.case_insensitive,
            };
            (regex, rule.replace_with.as_str())
        })
    }

    fn strip(&self, source: &str) -> String {
        // Strip mode ignores the caller-facing case flag: keywords are
        // always matched insensitively here.
        self.apply_pass(source, |rule| (&rule.case_insensitive, rule.content.as_str()))
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn config(&self) -> &MarkupConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> BbcodeEngine {
        BbcodeEngine::with_default_rules().unwrap()
    }

    #[test]
    fn empty_input_produces_empty_output() {
        let engine = engine();
        assert_eq!(engine.render("", CaseMatching::Sensitive), "");
        assert_eq!(engine.strip(""), "");
    }

    #[test]
    fn rules_are_applied_in_catalog_order() {
        // The unordered-list rule runs before the list-item rule, so the
        // surrounding [list] pair must already be gone when items are
        // rewritten.
        let engine = engine();
        let rendered = engine.render("[list]\n[*]One\n[/list]", CaseMatching::Sensitive);
        assert_eq!(rendered, "<ul>\n<li>One</li>\n</ul>");
    }

    #[test]
    fn code_blocks_do_not_shield_inner_tags() {
        // The bold rule runs before the code rule, so markup inside [code]
        // is rewritten like anywhere else. A consequence of the ordered
        // single-pass design, kept for compatibility.
        let engine = engine();
        let rendered = engine.render("[code][b]x[/b][/code]", CaseMatching::Sensitive);
        assert_eq!(rendered, "<code><b>x</b></code>");
    }

    #[test]
    fn engine_is_shareable_across_threads() {
        let engine = std::sync::Arc::new(engine());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || engine.render("[b]x[/b]", CaseMatching::Sensitive))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "<b>x</b>");
        }
    }
}
