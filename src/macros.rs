//! Utility macros for the lexer.
//!
//! This module defines helper macros used by the state table and driver:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a rule definition for a state table
//!
//! These macros reduce boilerplate in the rule tables.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The matched slice of the source
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Keyword, "if", span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a matching rule for a lexer state.
///
/// Without a third argument the rule leaves the state stack untouched.
///
/// # Arguments
///
/// * `$pattern` - The regular expression, matched at the current position
/// * `$kind` - The TokenKind emitted for the matched text
/// * `$transition` - Optional Transition applied after the match
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"/\*", TokenKind::CommentMultiline, Transition::Push(LexerState::Comment))
/// ```
#[macro_export]
macro_rules! MK_RULE {
    ($pattern:expr, $kind:expr) => {
        RuleDef::Match {
            pattern: String::from($pattern),
            kind: $kind,
            transition: Transition::None,
        }
    };
    ($pattern:expr, $kind:expr, $transition:expr) => {
        RuleDef::Match {
            pattern: String::from($pattern),
            kind: $kind,
            transition: $transition,
        }
    };
}
