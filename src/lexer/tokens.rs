use std::fmt::Display;

use crate::Span;

/// Highlighting category of a token.
///
/// Kinds form a hierarchy (`Literal.Number.Float` is a `Literal.Number`,
/// which is a `Literal`) so renderers can fall back to a parent style.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Text,
    Error,

    Keyword,
    KeywordType,

    Name,
    NameFunction,

    Literal,
    LiteralBoolean,
    LiteralString,
    LiteralStringChar,
    LiteralNumber,
    LiteralNumberFloat,
    LiteralNumberInteger,

    Operator,
    Punctuation,

    Comment,
    CommentSingleline,
    CommentMultiline,
    CommentPreproc,
}

impl TokenKind {
    pub fn parent(&self) -> Option<TokenKind> {
        match self {
            TokenKind::KeywordType => Some(TokenKind::Keyword),
            TokenKind::NameFunction => Some(TokenKind::Name),
            TokenKind::LiteralBoolean | TokenKind::LiteralString | TokenKind::LiteralNumber => {
                Some(TokenKind::Literal)
            }
            TokenKind::LiteralStringChar => Some(TokenKind::LiteralString),
            TokenKind::LiteralNumberFloat | TokenKind::LiteralNumberInteger => {
                Some(TokenKind::LiteralNumber)
            }
            TokenKind::CommentSingleline
            | TokenKind::CommentMultiline
            | TokenKind::CommentPreproc => Some(TokenKind::Comment),
            _ => None,
        }
    }

    /// Last component of the dotted path.
    fn segment(&self) -> &'static str {
        match self {
            TokenKind::Text => "Text",
            TokenKind::Error => "Error",
            TokenKind::Keyword => "Keyword",
            TokenKind::KeywordType => "Type",
            TokenKind::Name => "Name",
            TokenKind::NameFunction => "Function",
            TokenKind::Literal => "Literal",
            TokenKind::LiteralBoolean => "Boolean",
            TokenKind::LiteralString => "String",
            TokenKind::LiteralStringChar => "Char",
            TokenKind::LiteralNumber => "Number",
            TokenKind::LiteralNumberFloat => "Float",
            TokenKind::LiteralNumberInteger => "Integer",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::Comment => "Comment",
            TokenKind::CommentSingleline => "Singleline",
            TokenKind::CommentMultiline => "Multiline",
            TokenKind::CommentPreproc => "Preproc",
        }
    }

    /// Dotted path such as `Token.Literal.Number.Float`.
    pub fn path(&self) -> String {
        let mut segments = vec![self.segment()];
        let mut current = *self;

        while let Some(parent) = current.parent() {
            segments.push(parent.segment());
            current = parent;
        }

        segments.push("Token");
        segments.reverse();
        segments.join(".")
    }

    /// True if `self` is `other` or one of its descendants.
    pub fn is_subtype_of(&self, other: TokenKind) -> bool {
        let mut current = Some(*self);

        while let Some(kind) = current {
            if kind == other {
                return true;
            }
            current = kind.parent();
        }

        false
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub value: &'a str,
    pub span: Span,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\t{:?}", self.kind, self.value)
    }
}
