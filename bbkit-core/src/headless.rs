// bbkit-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the engine.
//! Each function builds an engine from the given catalog, runs a single
//! transformation, and discards the engine.

use anyhow::Result;

use crate::config::MarkupConfig;
use crate::engine::{CaseMatching, MarkupEngine};
use crate::engines::bbcode_engine::BbcodeEngine;

/// Renders a markup string to hypertext in one call.
///
/// # Arguments
///
/// * `config` - The rule catalog (default or custom).
/// * `source` - The markup string to transform.
/// * `case` - Whether tag keywords match case-insensitively.
///
/// The only fallible step is catalog compilation; the transformation itself
/// cannot fail.
pub fn headless_render_string(
    config: MarkupConfig,
    source: &str,
    case: CaseMatching,
) -> Result<String> {
    let engine = BbcodeEngine::new(config)?;
    Ok(engine.render(source, case))
}

/// Strips a markup string down to plain text in one call.
///
/// Tag keywords are always matched case-insensitively in strip mode.
pub fn headless_strip_string(config: MarkupConfig, source: &str) -> Result<String> {
    let engine = BbcodeEngine::new(config)?;
    Ok(engine.strip(source))
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_headless_render_string() -> Result<()> {
        let config = MarkupConfig::load_default_rules()?;
        let rendered =
            headless_render_string(config, "[b]Hello[/b] world", CaseMatching::Sensitive)?;
        assert_eq!(rendered, "<b>Hello</b> world");
        Ok(())
    }

    #[test]
    fn test_headless_strip_string() -> Result<()> {
        let config = MarkupConfig::load_default_rules()?;
        let stripped = headless_strip_string(config, "[b]Hello[/b] world")?;
        assert_eq!(stripped, "Hello world");
        Ok(())
    }

    #[test]
    fn test_headless_rejects_broken_catalog() {
        let config = MarkupConfig {
            rules: vec![crate::config::TagRule {
                name: "broken".to_string(),
                pattern: r"\[b\](.*?".to_string(),
                replace_with: "<b>$1</b>".to_string(),
                content: "$1".to_string(),
                dot_matches_new_line: true,
            }],
        };
        assert!(headless_render_string(config, "[b]x[/b]", CaseMatching::Sensitive).is_err());
    }
}
