//! Property-based tests for the Ante lexer.
//!
//! These tests check that any input, well-formed Ante or not, is fully
//! covered by the token stream and that lexing is deterministic.

use ante_lexer::{tokenize, Lexer, LexerState, Token};
use proptest::prelude::*;

/// Fragments that exercise every state transition.
fn ante_fragment() -> impl Strategy<Value = String> {
    let fixed = prop::sample::select(vec![
        "/*", "*/", "![", "]", "\"", "${", "}", "\\\"", "\n", "// c", "'a'", "'t", "->",
    ])
    .prop_map(String::from);

    prop_oneof![
        fixed,
        "[a-zA-Z_][a-zA-Z0-9_]{0,6}:?",
        "[0-9_]{1,4}(\\.[0-9]{1,3})?(u8|i64|f32)?",
        "[ \t]{1,3}",
        "[!@#%&*+=|;,.<>/?$]",
    ]
}

fn ante_source() -> impl Strategy<Value = String> {
    prop::collection::vec(ante_fragment(), 0..40).prop_map(|parts| parts.concat())
}

fn rebuild(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.value).collect()
}

proptest! {
    #[test]
    fn tokens_cover_arbitrary_input(source in any::<String>()) {
        let tokens: Vec<Token> = tokenize(&source).collect();
        prop_assert_eq!(rebuild(&tokens), source.as_str());
    }

    #[test]
    fn tokens_cover_ante_like_input(source in ante_source()) {
        let tokens: Vec<Token> = tokenize(&source).collect();
        prop_assert_eq!(rebuild(&tokens), source.as_str());

        let mut expected_start = 0;
        for token in &tokens {
            prop_assert!(!token.value.is_empty());
            prop_assert_eq!(token.span.start.0, expected_start);
            expected_start = token.span.end.0;
        }
    }

    #[test]
    fn lexing_is_deterministic(source in ante_source()) {
        let first: Vec<Token> = tokenize(&source).collect();
        let second: Vec<Token> = tokenize(&source).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn state_stack_is_never_empty(source in ante_source()) {
        let mut lexer = tokenize(&source);
        while lexer.next().is_some() {
            prop_assert!(!lexer.state_stack().is_empty());
        }
        prop_assert!(!lexer.state_stack().is_empty());
    }

    #[test]
    fn any_starting_state_covers_input(source in ante_source(), index in 0usize..5) {
        let state = LexerState::ALL[index];
        let tokens: Vec<Token> = Lexer::with_stack(&source, &[LexerState::Root, state]).collect();
        prop_assert_eq!(rebuild(&tokens), source.as_str());
    }
}
