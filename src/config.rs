//! Input preprocessing options.
//!
//! `tokenize` always lexes its input verbatim. These options prepare a
//! buffer the way highlighting hosts usually do before handing it over.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Strip leading and trailing newlines.
    pub stripnl: bool,
    /// Strip all leading and trailing whitespace. Takes precedence over `stripnl`.
    pub stripall: bool,
    /// Make sure the input ends with a newline.
    pub ensurenl: bool,
    /// Expand tabs to this many spaces; 0 leaves tabs alone.
    pub tabsize: usize,
}

impl Default for LexerOptions {
    fn default() -> Self {
        LexerOptions {
            stripnl: true,
            stripall: false,
            ensurenl: true,
            tabsize: 0,
        }
    }
}

impl LexerOptions {
    /// Returns options that leave the input untouched.
    pub fn verbatim() -> Self {
        LexerOptions {
            stripnl: false,
            stripall: false,
            ensurenl: false,
            tabsize: 0,
        }
    }

    pub fn preprocess(&self, source: &str) -> String {
        let mut text = source.replace("\r\n", "\n").replace('\r', "\n");

        if self.stripall {
            text = text.trim().to_string();
        } else if self.stripnl {
            text = text.trim_matches('\n').to_string();
        }

        if self.tabsize > 0 {
            text = text.replace('\t', &" ".repeat(self.tabsize));
        }

        if self.ensurenl && !text.ends_with('\n') {
            text.push('\n');
        }

        text
    }
}
