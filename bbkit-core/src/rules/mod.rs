//! Rule compilation for the bbkit transformation engine.
//!
//! This module turns a declarative [`MarkupConfig`](crate::config::MarkupConfig)
//! into compiled regular expressions ready for substitution. Compilation is
//! the only fallible step in the library: once a catalog compiles, render and
//! strip calls cannot fail.
//!
//! This module works closely with `config` (for rule definitions) and
//! `engines` (which apply the compiled rules).

pub mod compiler;
