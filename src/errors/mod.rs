//! Error types for the lexer crate.
//!
//! Tokenizing itself never fails: unmatched input degrades to fallback
//! tokens. The errors here cover the fallible edges around it:
//!
//! - Building the state table from its pattern definitions
//! - Parsing lexer state names
//! - Looking up the lexer by alias
//! - Reading input in the command-line front end

pub mod errors;
