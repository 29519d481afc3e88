use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{Position, Span, MK_TOKEN};

use super::{
    states::{LexerState, RegexPattern, Transition, STATE_TABLE},
    tokens::{Token, TokenKind},
};

/// A lazy tokenizer over one source buffer.
///
/// Every byte of the source ends up in exactly one token. Text no rule
/// accepts is emitted one character at a time: a newline as `Text`, which
/// also resets the state stack to `[root]`, anything else as `Error`.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    stack: Vec<LexerState>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer::with_stack(source, &[LexerState::Root])
    }

    /// Starts lexing with `stack` as the state stack; top is the last element.
    pub fn with_stack(source: &'a str, stack: &[LexerState]) -> Lexer<'a> {
        let stack = if stack.is_empty() {
            vec![LexerState::Root]
        } else {
            stack.to_vec()
        };

        Lexer {
            source,
            pos: 0,
            stack,
        }
    }

    pub fn state_stack(&self) -> &[LexerState] {
        &self.stack
    }

    pub fn current_state(&self) -> LexerState {
        self.stack.last().copied().unwrap_or(LexerState::Root)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn emit(&mut self, kind: TokenKind, end: usize) -> Token<'a> {
        let token = MK_TOKEN!(
            kind,
            &self.source[self.pos..end],
            Span {
                start: Position(self.pos),
                end: Position(end)
            }
        );

        trace!(kind = %token.kind, value = ?token.value, "token");
        self.pos = end;
        token
    }

    fn apply(&mut self, transition: Transition) {
        let current = self.current_state();

        match transition {
            Transition::None => {}
            Transition::Push(state) => {
                debug!(from = %current, to = %state, pos = self.pos, "push state");
                self.stack.push(state);
            }
            Transition::PushCurrent => {
                debug!(state = %current, pos = self.pos, "push state");
                self.stack.push(current);
            }
            Transition::Pop => {
                if self.stack.len() > 1 {
                    self.stack.pop();
                    debug!(from = %current, to = %self.current_state(), pos = self.pos, "pop state");
                } else {
                    debug!(state = %current, pos = self.pos, "pop ignored at bottom of stack");
                }
            }
        }
    }

    fn first_match<'p>(&self, patterns: &'p [RegexPattern]) -> Option<(&'p RegexPattern, usize)> {
        patterns.iter().find_map(|pattern| {
            pattern
                .match_at(self.source, self.pos)
                .filter(|end| *end > self.pos)
                .map(|end| (pattern, end))
        })
    }

    fn fallback(&mut self) -> Option<Token<'a>> {
        let ch = self.source[self.pos..].chars().next()?;
        let end = self.pos + ch.len_utf8();

        if ch == '\n' {
            if self.stack.len() > 1 {
                debug!(pos = self.pos, "unmatched newline, resetting to root");
            }
            self.stack.clear();
            self.stack.push(LexerState::Root);
            Some(self.emit(TokenKind::Text, end))
        } else {
            debug!(state = %self.current_state(), pos = self.pos, ch = ?ch, "no rule matched");
            Some(self.emit(TokenKind::Error, end))
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if self.at_eof() {
            return None;
        }

        match self.first_match(STATE_TABLE.patterns(self.current_state())) {
            Some((pattern, end)) => {
                let token = self.emit(pattern.kind(), end);
                self.apply(pattern.transition());
                Some(token)
            }
            None => self.fallback(),
        }
    }
}

impl FusedIterator for Lexer<'_> {}

/// Tokenizes `source` lazily, starting in the root state.
pub fn tokenize(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}
