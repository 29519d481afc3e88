use std::{
    io::{self, BufWriter, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use ante_lexer::{
    display_error, errors::errors::Error, find_lexer_by_name, find_lexer_for_filename,
    get_line_at_position, tokenize, LexerOptions, TokenKind,
};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Print the highlighting token stream of an Ante source file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Source file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Lexer alias to use
    #[arg(short, long, default_value = "ante")]
    lexer: String,

    /// Prefix every token with its byte span
    #[arg(short, long)]
    spans: bool,

    /// List characters no rule matched, with line and column
    #[arg(short, long)]
    errors: bool,

    /// Strip all leading and trailing whitespace
    #[arg(long)]
    stripall: bool,

    /// Keep leading and trailing newlines
    #[arg(long)]
    keep_newlines: bool,

    /// Do not append a final newline
    #[arg(long)]
    no_ensurenl: bool,

    /// Expand tabs to this many spaces
    #[arg(long, default_value_t = 0)]
    tabsize: usize,

    /// Print the lexer's registration metadata and exit
    #[arg(long)]
    info: bool,
}

impl Cli {
    fn options(&self) -> LexerOptions {
        LexerOptions {
            stripnl: !self.keep_newlines,
            stripall: self.stripall,
            ensurenl: !self.no_ensurenl,
            tabsize: self.tabsize,
        }
    }

    fn read_source(&self) -> Result<String, Error> {
        match &self.file {
            Some(path) => std::fs::read_to_string(path).map_err(|source| Error::Io {
                path: path.clone(),
                source,
            }),
            None => {
                let mut source = String::new();
                io::stdin()
                    .read_to_string(&mut source)
                    .map_err(|source| Error::Io {
                        path: PathBuf::from("<stdin>"),
                        source,
                    })?;
                Ok(source)
            }
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let info = find_lexer_by_name(&cli.lexer)?;

    if cli.info {
        println!("name:      {}", info.name);
        println!("aliases:   {}", info.aliases.join(", "));
        println!("filenames: {}", info.filenames.join(", "));
        println!("mimetypes: {}", info.mimetypes.join(", "));
        return Ok(());
    }

    if let Some(path) = &cli.file {
        if find_lexer_for_filename(path)?.is_none() {
            info!("{:?} does not match {}, lexing anyway", path, info.filenames.join(", "));
        }
    }

    let source = cli.options().preprocess(&cli.read_source()?);
    debug!(bytes = source.len(), "source loaded");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut unmatched = vec![];
    let write_error = |source| Error::Io {
        path: PathBuf::from("<stdout>"),
        source,
    };

    for token in tokenize(&source) {
        if token.kind == TokenKind::Error {
            unmatched.push(token.span.start.0);
        }

        if cli.spans {
            write!(out, "{}..{}\t", token.span.start.0, token.span.end.0).map_err(write_error)?;
        }
        writeln!(out, "{}", token).map_err(write_error)?;
    }
    out.flush().map_err(write_error)?;

    if cli.errors {
        for position in unmatched {
            if let Some((line, line_text, column)) = get_line_at_position(&source, position) {
                let ch = line_text[column..].chars().next().unwrap_or(' ');
                eprintln!("{}:{}: unmatched {:?}", line, column + 1, ch);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}
