// bbkit-core/src/engine.rs
//! Defines the core MarkupEngine trait and related data structures.
//!
//! The `MarkupEngine` trait provides a pluggable interface for markup
//! transformation implementations. This module defines the contract that all
//! such engines must adhere to, ensuring a consistent and interchangeable
//! core API for `bbkit`.
//!
//! License: MIT OR APACHE 2.0

use crate::config::MarkupConfig;
use crate::rules::compiler::CompiledRules;

/// Controls whether tag keywords are matched exactly or case-insensitively.
///
/// This flag only affects the bracket keywords (`[b]`, `[URL]`, ...); the
/// captured content between tags is always preserved verbatim. It applies to
/// render mode only: strip mode always matches insensitively, and the
/// asymmetry is part of the engine contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseMatching {
    /// `[B]bold[/B]` is left as literal text.
    Sensitive,
    /// `[B]bold[/B]` renders the same as `[b]bold[/b]`.
    Insensitive,
}

/// A trait that defines the core functionality of a markup transformation
/// engine.
///
/// Implementations must be pure functions of their inputs given the immutable
/// rule registry fixed at construction: no shared mutable state, no I/O, and
/// safe to invoke concurrently from any number of callers.
pub trait MarkupEngine: Send + Sync {
    /// Transforms bracket-tag markup into hypertext.
    ///
    /// Every rule in the registry is applied in catalog order, each as one
    /// global left-to-right search-and-replace over the entire working
    /// string. The output of rule N becomes the input of rule N+1; earlier
    /// rules are never re-entered. Unterminated or unknown tags fail to
    /// match and pass through unchanged — this method cannot fail.
    fn render(&self, source: &str, case: CaseMatching) -> String;

    /// Discards all markup, keeping only the captured textual content.
    ///
    /// Applies the same ordered pass as [`render`](MarkupEngine::render) but
    /// substitutes each rule's content template. Tag keywords are always
    /// matched case-insensitively here, regardless of any caller flag.
    fn strip(&self, source: &str) -> String;

    /// Returns a reference to the `CompiledRules` used by the engine.
    ///
    /// This is used by external components, such as diagnostics, to inspect
    /// the registry without recompiling it.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's declarative configuration.
    fn config(&self) -> &MarkupConfig;
}
