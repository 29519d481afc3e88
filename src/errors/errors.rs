use std::{fmt::Display, path::PathBuf};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid pattern {pattern:?} in state {state}: {source}")]
    InvalidPattern {
        state: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("state {state} includes itself")]
    IncludeCycle { state: &'static str },
    #[error("unknown lexer state {name:?}")]
    UnknownState { name: String },
    #[error("invalid filename glob {glob:?}: {source}")]
    InvalidGlob {
        glob: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("no lexer registered for {name:?}")]
    UnknownLexer { name: String },
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn get_error_name(&self) -> &str {
        match self {
            Error::InvalidPattern { .. } => "InvalidPattern",
            Error::IncludeCycle { .. } => "IncludeCycle",
            Error::UnknownState { .. } => "UnknownState",
            Error::InvalidGlob { .. } => "InvalidGlob",
            Error::UnknownLexer { .. } => "UnknownLexer",
            Error::Io { .. } => "Io",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match self {
            Error::InvalidPattern { state, pattern, .. } => ErrorTip::Suggestion(format!(
                "Pattern `{}` of state `{}` is not a valid regular expression",
                pattern, state
            )),
            Error::IncludeCycle { state } => ErrorTip::Suggestion(format!(
                "State `{}` reaches itself through includes",
                state
            )),
            Error::UnknownState { name } => ErrorTip::Suggestion(format!(
                "Unknown state `{}`, expected one of root, comment, preproc, string, interpolation",
                name
            )),
            Error::InvalidGlob { glob, .. } => ErrorTip::Suggestion(format!(
                "Filename glob `{}` is malformed, check its `[` classes",
                glob
            )),
            Error::UnknownLexer { name } => ErrorTip::Suggestion(format!(
                "No lexer is registered under `{}`, try `ante`",
                name
            )),
            Error::Io { .. } => ErrorTip::None,
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}
