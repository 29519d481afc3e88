#![allow(clippy::module_inception)]

use std::ops::Range;

use crate::errors::errors::{Error, ErrorTip};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

pub use config::LexerOptions;
pub use lexer::lexer::{tokenize, Lexer};
pub use lexer::metadata::{
    find_lexer_by_name, find_lexer_for_filename, find_lexer_for_mimetype, LexerInfo, ANTE,
};
pub use lexer::states::{LexerState, Transition};
pub use lexer::tokens::{Token, TokenKind};

/// Byte offset into the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end.0 - self.start.0
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start.0..self.end.0
    }
}

/// Returns the 1-based line number, the line text and the byte column of
/// `position` in `source`.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, String, usize)> {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, line.to_string(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}


pub fn display_error(error: &Error) {
    /*
        Error: UnknownLexer (No lexer is registered under `rust`, try `ante`)
        -> no lexer registered for "rust"
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error);
}
