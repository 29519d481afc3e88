use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{errors::errors::Error, MK_RULE};

use super::tokens::TokenKind;

pub const KEYWORDS: &[&str] = &[
    "if", "elif", "else", "import", "mut", "with", "global", "for", "in", "do", "while", "let",
    "export", "continue", "break", "return", "this", "is", "ext", "new", "match", "trait",
    "module", "ante", "type", "where", "when", "fun", "var", "and", "or", "not", "then", "pub",
    "pro", "pri", "const", "raw", "noinit",
];

pub const BOOLEANS: &[&str] = &["true", "false"];

pub const PRIMITIVE_TYPES: &[&str] = &[
    "i8", "i16", "i32", "i64", "u8", "u16", "u32", "u64", "f16", "f32", "f64", "isz", "usz", "c8",
    "c16", "c32", "c64", "void", "bool",
];

const OPERATOR_CHARS: &str = r"[!@#%&*\-+=|;,.<>/?]";
const BRACKET_CHARS: &str = r"[:|()\[\]{}]";

// String body up to a terminator: no `"` and never crosses `${`.
const STRING_BODY: &str = r#"(?:[^"$]|\$+[^{"$])*\$*"#;

lazy_static! {
    pub static ref STATE_TABLE: StateTable =
        StateTable::build().expect("built-in lexer rules must compile");
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LexerState {
    Root,
    Comment,
    Preproc,
    String,
    Interpolation,
}

impl LexerState {
    pub const ALL: [LexerState; 5] = [
        LexerState::Root,
        LexerState::Comment,
        LexerState::Preproc,
        LexerState::String,
        LexerState::Interpolation,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            LexerState::Root => "root",
            LexerState::Comment => "comment",
            LexerState::Preproc => "preproc",
            LexerState::String => "string",
            LexerState::Interpolation => "interpolation",
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl Display for LexerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LexerState {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        LexerState::ALL
            .into_iter()
            .find(|state| state.name() == name)
            .ok_or_else(|| Error::UnknownState {
                name: name.to_string(),
            })
    }
}

/// What a matching rule does to the state stack.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Transition {
    None,
    Push(LexerState),
    /// Push another copy of the state the rule belongs to.
    PushCurrent,
    Pop,
}

/// An uncompiled entry of a state's rule list.
#[derive(Debug, Clone)]
pub enum RuleDef {
    Match {
        pattern: String,
        kind: TokenKind,
        transition: Transition,
    },
    /// Splice in every rule of another state, after the rules before it.
    Include(LexerState),
}

fn word_pattern(words: &[&str]) -> String {
    format!(r"\b(?:{})\b", words.join("|"))
}

/// Rule lists for every state, in match priority order.
pub fn definition(state: LexerState) -> Vec<RuleDef> {
    match state {
        LexerState::Root => vec![
            MK_RULE!(word_pattern(KEYWORDS), TokenKind::Keyword),
            MK_RULE!(word_pattern(BOOLEANS), TokenKind::LiteralBoolean),
            MK_RULE!(word_pattern(PRIMITIVE_TYPES), TokenKind::KeywordType),
            MK_RULE!(r"//.*?$", TokenKind::CommentSingleline),
            MK_RULE!(
                r"/\*",
                TokenKind::CommentMultiline,
                Transition::Push(LexerState::Comment)
            ),
            MK_RULE!(r"\b[A-Z]\w*\b", TokenKind::KeywordType),
            MK_RULE!(r"\w[A-Za-z_]*:", TokenKind::NameFunction),
            MK_RULE!(
                r"!\[",
                TokenKind::CommentPreproc,
                Transition::Push(LexerState::Preproc)
            ),
            MK_RULE!(r"![a-z_]\w*\b", TokenKind::CommentPreproc),
            MK_RULE!(r"'[^']'", TokenKind::LiteralStringChar),
            MK_RULE!(r"'\\[^']'", TokenKind::LiteralStringChar),
            MK_RULE!(
                "\"",
                TokenKind::LiteralString,
                Transition::Push(LexerState::String)
            ),
            MK_RULE!(r"'[a-z_]\w*", TokenKind::KeywordType),
            MK_RULE!(r" +", TokenKind::Text),
            MK_RULE!(r"[0-9_]+\.[0-9_]+(?:f16|f32|f64)?", TokenKind::LiteralNumberFloat),
            MK_RULE!(
                r"[0-9_]+(?:i8|i16|i32|i64|isz|u8|u16|u32|u64|usz|i|u)?",
                TokenKind::LiteralNumberInteger
            ),
            MK_RULE!(OPERATOR_CHARS, TokenKind::Operator),
            MK_RULE!(r"->", TokenKind::Operator),
            MK_RULE!(BRACKET_CHARS, TokenKind::Punctuation),
            MK_RULE!(r"\b\w+\b", TokenKind::Text),
        ],
        LexerState::Comment => vec![
            MK_RULE!(r"\*/", TokenKind::CommentMultiline, Transition::Pop),
            MK_RULE!(r"/\*", TokenKind::CommentMultiline, Transition::PushCurrent),
            MK_RULE!(r"\n", TokenKind::CommentMultiline),
            MK_RULE!(r".", TokenKind::CommentMultiline),
        ],
        LexerState::Preproc => vec![
            MK_RULE!(r"\]", TokenKind::CommentPreproc, Transition::Pop),
            MK_RULE!(word_pattern(KEYWORDS), TokenKind::Keyword),
            MK_RULE!(word_pattern(BOOLEANS), TokenKind::LiteralBoolean),
            MK_RULE!(word_pattern(PRIMITIVE_TYPES), TokenKind::KeywordType),
            MK_RULE!(r"\b[a-z_]\w*\b", TokenKind::CommentPreproc),
            MK_RULE!(OPERATOR_CHARS, TokenKind::CommentPreproc),
            MK_RULE!(r"->", TokenKind::CommentPreproc),
            MK_RULE!(BRACKET_CHARS, TokenKind::CommentPreproc),
            RuleDef::Include(LexerState::Root),
        ],
        LexerState::String => vec![
            MK_RULE!(
                r"\$\{",
                TokenKind::Text,
                Transition::Push(LexerState::Interpolation)
            ),
            // Escaped quote at the current position.
            MK_RULE!(r#"\\""#, TokenKind::LiteralNumber),
            MK_RULE!(format!(r"{}\n", STRING_BODY), TokenKind::LiteralString),
            MK_RULE!(format!(r#"{}\\""#, STRING_BODY), TokenKind::LiteralString),
            MK_RULE!(
                format!(r#"{}""#, STRING_BODY),
                TokenKind::LiteralString,
                Transition::Pop
            ),
            MK_RULE!(r#"(?:[^"$]|\$+[^{"$])+|\$"#, TokenKind::LiteralString),
        ],
        LexerState::Interpolation => vec![
            MK_RULE!(r"\}", TokenKind::Text, Transition::Pop),
            RuleDef::Include(LexerState::Root),
        ],
    }
}

/// A compiled rule.
///
/// Each rule is compiled twice, both anchored with `\A`: once for the start
/// of input and once consuming the preceding character, so that `\b` and `$`
/// see the real left context without searching past the current position.
#[derive(Debug, Clone)]
pub struct RegexPattern {
    source: String,
    at_start: Regex,
    after_char: Regex,
    kind: TokenKind,
    transition: Transition,
}

impl RegexPattern {
    pub fn new(
        state: LexerState,
        pattern: &str,
        kind: TokenKind,
        transition: Transition,
    ) -> Result<RegexPattern, Error> {
        let compile = |wrapped: String| {
            Regex::new(&wrapped).map_err(|source| Error::InvalidPattern {
                state: state.name(),
                pattern: pattern.to_string(),
                source,
            })
        };

        Ok(RegexPattern {
            source: pattern.to_string(),
            at_start: compile(format!(r"(?m)\A(?:{})", pattern))?,
            after_char: compile(format!(r"(?m)\A(?s:.)(?:{})", pattern))?,
            kind,
            transition,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.source
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Byte offset where a match starting exactly at `pos` ends.
    pub fn match_at(&self, source: &str, pos: usize) -> Option<usize> {
        match source[..pos].chars().next_back() {
            None => self.at_start.find(source).map(|m| m.end()),
            Some(previous) => {
                let context = pos - previous.len_utf8();
                self.after_char
                    .find(&source[context..])
                    .map(|m| context + m.end())
            }
        }
    }
}

/// Every state's rules with includes flattened.
#[derive(Debug, Clone)]
pub struct StateTable {
    states: Vec<Vec<RegexPattern>>,
}

impl StateTable {
    pub fn build() -> Result<StateTable, Error> {
        StateTable::build_from(definition)
    }

    pub fn build_from(definitions: fn(LexerState) -> Vec<RuleDef>) -> Result<StateTable, Error> {
        let mut states = Vec::with_capacity(LexerState::ALL.len());

        for state in LexerState::ALL {
            let patterns = resolve(state, definitions, &mut vec![])?;
            debug!(state = state.name(), rules = patterns.len(), "compiled lexer state");
            states.push(patterns);
        }

        Ok(StateTable { states })
    }

    pub fn patterns(&self, state: LexerState) -> &[RegexPattern] {
        &self.states[state.index()]
    }
}

fn resolve(
    state: LexerState,
    definitions: fn(LexerState) -> Vec<RuleDef>,
    visiting: &mut Vec<LexerState>,
) -> Result<Vec<RegexPattern>, Error> {
    if visiting.contains(&state) {
        return Err(Error::IncludeCycle {
            state: state.name(),
        });
    }
    visiting.push(state);

    let mut patterns = vec![];
    for rule in definitions(state) {
        match rule {
            RuleDef::Match {
                pattern,
                kind,
                transition,
            } => patterns.push(RegexPattern::new(state, &pattern, kind, transition)?),
            RuleDef::Include(included) => {
                patterns.extend(resolve(included, definitions, visiting)?)
            }
        }
    }

    visiting.pop();
    Ok(patterns)
}
