use std::path::Path;

use glob::Pattern;

use crate::errors::errors::Error;

/// Registration data a highlighting host uses to pick this lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
}

pub const ANTE: LexerInfo = LexerInfo {
    name: "Ante",
    aliases: &["ante"],
    filenames: &["*.an"],
    mimetypes: &["text/x-ante"],
};

impl LexerInfo {
    pub fn matches_alias(&self, alias: &str) -> bool {
        self.aliases
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(alias))
    }

    /// Matches the file name component of `path` against the filename globs.
    pub fn matches_filename(&self, path: &Path) -> Result<bool, Error> {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            return Ok(false);
        };

        for glob in self.filenames {
            if glob_matches(glob, file_name)? {
                return Ok(true);
            }
        }

        Ok(false)
    }

    pub fn matches_mimetype(&self, mimetype: &str) -> bool {
        self.mimetypes
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(mimetype.trim()))
    }
}

fn glob_matches(glob: &str, file_name: &str) -> Result<bool, Error> {
    let pattern = Pattern::new(glob).map_err(|source| Error::InvalidGlob {
        glob: glob.to_string(),
        source,
    })?;

    Ok(pattern.matches(file_name))
}

pub fn find_lexer_by_name(name: &str) -> Result<&'static LexerInfo, Error> {
    if ANTE.matches_alias(name) {
        Ok(&ANTE)
    } else {
        Err(Error::UnknownLexer {
            name: name.to_string(),
        })
    }
}

pub fn find_lexer_for_filename(path: &Path) -> Result<Option<&'static LexerInfo>, Error> {
    Ok(ANTE.matches_filename(path)?.then_some(&ANTE))
}

pub fn find_lexer_for_mimetype(mimetype: &str) -> Option<&'static LexerInfo> {
    ANTE.matches_mimetype(mimetype).then_some(&ANTE)
}
