//! Lexical analysis for Ante source code.
//!
//! This module contains the highlighting lexer that splits Ante source into
//! typed spans. It is organised as:
//!
//! - `tokens` - Token kinds and the token value
//! - `states` - The lexer states and their ordered regex rule tables
//! - `lexer` - The lazy driver that walks the state stack
//! - `metadata` - Name, aliases, filename globs and MIME types

pub mod lexer;
pub mod metadata;
pub mod states;
pub mod tokens;
