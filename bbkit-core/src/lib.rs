// bbkit-core/src/lib.rs
//! # bbkit Core Library
//!
//! `bbkit-core` provides the platform-independent logic for transforming
//! bracket-tag ("BBCode") markup into sanitized hypertext or plain text. It
//! defines the declarative rule catalog, compiles it into an immutable rule
//! registry, and implements a pluggable `MarkupEngine` trait for applying the
//! transformation in two modes: render and strip.
//!
//! The library is designed to be pure and stateless, focusing solely on the
//! transformation of input strings based on the ordered rule catalog, without
//! concerns for I/O, persistence, or application-specific state.
//!
//! ## Modules
//!
//! * `config`: Defines `TagRule`s and `MarkupConfig` for the ordered catalog.
//! * `rules`: Compiles the catalog into regexes (`compile_rules`).
//! * `engine`: Defines the `MarkupEngine` trait and the `CaseMatching` flag.
//! * `engines`: Concrete implementations of the `MarkupEngine` trait.
//! * `catalog`: The documentation-facing list of supported tag families.
//! * `headless`: Convenience wrappers for one-shot transformations.
//!
//! ## Usage Example
//!
//! ```rust
//! use bbkit_core::{headless_render_string, headless_strip_string, CaseMatching, MarkupConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = MarkupConfig::load_default_rules()?;
//!
//!     let rendered = headless_render_string(
//!         config.clone(),
//!         "[b]Hello[/b] from [url=http://example.com]Example[/url]",
//!         CaseMatching::Sensitive,
//!     )?;
//!     assert_eq!(
//!         rendered,
//!         "<b>Hello</b> from <a href=\"http://example.com\">Example</a>"
//!     );
//!
//!     let stripped = headless_strip_string(config, "[b]Hello[/b]")?;
//!     assert_eq!(stripped, "Hello");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! The only fatal condition is a catalog that fails validation or regex
//! compilation at construction time, reported as [`BbkitError`]. Malformed
//! user markup is never an error: unterminated or unknown tags pass through
//! the output as literal text.
//!
//! ## Design Principles
//!
//! * **Ordered single pass:** rules apply top to bottom, each as one global
//!   substitution; earlier rules are never re-entered. Same-type tag nesting
//!   is unsupported by design.
//! * **Immutable registry:** the compiled rule set is fixed at construction
//!   and passed explicitly, never held as mutable global state.
//! * **Stateless:** an engine is a pure function of its inputs and is safe
//!   to share across concurrent callers.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod catalog;
pub mod config;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod rules;

/// Re-exports the public configuration types for the rule catalog.
pub use config::{MarkupConfig, TagRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::BbkitError;

/// Re-exports the core engine trait and its case-matching flag.
pub use engine::{CaseMatching, MarkupEngine};

/// Re-exports the standard bracket-tag engine implementation.
pub use engines::bbcode_engine::BbcodeEngine;

/// Re-exports the documentation-facing capability catalog.
pub use catalog::{usable_tags, TagDescriptor};

/// Re-exports functions for one-shot, non-interactive use.
pub use headless::{headless_render_string, headless_strip_string};

/// Re-exports compiled-rule types for advanced usage.
pub use rules::compiler::{compile_rules, CompiledRule, CompiledRules};
