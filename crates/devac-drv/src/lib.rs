//! devac-drv - Compiler driver.
//!
//! The driver orchestrates the four compiler phases in order and maps their
//! outcomes onto exit codes:
//!
//! ```text
//! source text
//!      |
//!      v
//! [devac-lex]  -> token stream        (-t stops here)
//!      |
//!      v
//! [devac-par]  -> checked-for-syntax AST   (-p stops here)
//!      |
//!      v
//! [devac-sem]  -> type-checked AST
//!      |
//!      v
//! [devac-emit] -> C source, written to the output path
//! ```
//!
//! Every phase that can fail reports through a [`devac_util::Handler`]; the
//! driver prints its accumulated diagnostics and exits 1 the moment a phase
//! comes back with errors, rather than attempting to run a later phase on a
//! broken tree.

use std::path::{Path, PathBuf};

use devac_lex::{Keyword, NumberLiteral, Punct, Scanner, TokenKind};
use devac_par::Parser;
use devac_sem::SemanticAnalyzer;
use devac_util::{DevacError, DevacResult, Handler};

pub const USAGE: &str = "\
Usage: devac <input> [options]

Translates a devac source file to standard C.

Options:
  -o <path>   Write the emitted C to <path> (default: <input> with its
              extension replaced by .c)
  -t          Tokenize only: print one line per token and exit
  -p          Parse only: stop after a successful parse, write nothing
  -h          Print this message and exit
";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Compile,
    TokenizeOnly,
    ParseOnly,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub output: Option<PathBuf>,
    pub mode: Mode,
}

impl Config {
    /// The path the emitted C is written to when `-o` was not given.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.with_extension("c"))
    }
}

pub enum ConfigOutcome {
    Help,
    Run(Config),
}

/// Parses driver arguments (not including argv[0]).
pub fn parse_args(args: &[String]) -> DevacResult<ConfigOutcome> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut mode = Mode::Compile;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" => return Ok(ConfigOutcome::Help),
            "-t" => mode = Mode::TokenizeOnly,
            "-p" => mode = Mode::ParseOnly,
            "-o" => {
                let path = iter
                    .next()
                    .ok_or_else(|| DevacError::InvalidArguments("-o requires a path argument".to_string()))?;
                output = Some(PathBuf::from(path));
            }
            other if input.is_none() => input = Some(PathBuf::from(other)),
            other => {
                return Err(DevacError::InvalidArguments(format!(
                    "unexpected argument '{other}'"
                )))
            }
        }
    }

    let input = input.ok_or_else(|| DevacError::InvalidArguments("missing input file".to_string()))?;
    Ok(ConfigOutcome::Run(Config { input, output, mode }))
}

/// Runs the requested pipeline, returning `Ok(true)` on success and a
/// [`DevacError`] for an I/O failure. A diagnosed lexical, syntactic, or
/// semantic failure isn't an `Err` here - it's reported through the
/// handler and signaled to the caller as `Ok(false)`.
pub fn run(config: &Config) -> DevacResult<bool> {
    let source = std::fs::read_to_string(&config.input).map_err(|source| DevacError::ReadFailed {
        path: config.input.clone(),
        source,
    })?;

    if config.mode == Mode::TokenizeOnly {
        print_tokens(&source);
        return Ok(true);
    }

    let handler = Handler::new();
    let program = {
        let mut parser = Parser::new(&source, &handler);
        parser.parse()
    };

    if handler.has_errors() {
        let _ = handler.emit_to(&mut std::io::stderr());
        return Ok(false);
    }

    if config.mode == Mode::ParseOnly {
        println!("Parsed successfully.");
        return Ok(true);
    }

    let mut analyzer = SemanticAnalyzer::new(&handler);
    if !analyzer.analyze(&program) {
        let _ = handler.emit_to(&mut std::io::stderr());
        return Ok(false);
    }

    let c_source = devac_emit::emit(&program);
    let out_path = config.output_path();
    std::fs::write(&out_path, c_source).map_err(|source| DevacError::WriteFailed {
        path: out_path,
        source,
    })?;

    Ok(true)
}

fn print_tokens(source: &str) {
    let mut scanner = Scanner::new(source);
    loop {
        let tok = scanner.next_token();
        println!(
            "Token: {}, Line: {}, Column: {}, Text: '{}'",
            token_name(&tok.kind),
            tok.line,
            tok.column,
            tok.lexeme
        );
        if tok.is_eof() {
            break;
        }
    }
}

fn token_name(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Eof => "EOF".to_string(),
        TokenKind::Keyword(k) => format!("KEYWORD_{}", keyword_name(*k)),
        TokenKind::Ident => "IDENT".to_string(),
        TokenKind::Number(NumberLiteral::Int(_)) => "NUMBER_INT".to_string(),
        TokenKind::Number(NumberLiteral::Float(_)) => "NUMBER_FLOAT".to_string(),
        TokenKind::Str => "STRING".to_string(),
        TokenKind::Punct(p) => format!("PUNCT_{}", punct_name(*p)),
        TokenKind::Error => "ERROR".to_string(),
    }
}

fn keyword_name(kw: Keyword) -> &'static str {
    match kw {
        Keyword::Int => "INT",
        Keyword::Float => "FLOAT",
        Keyword::Char => "CHAR",
        Keyword::Void => "VOID",
        Keyword::If => "IF",
        Keyword::Else => "ELSE",
        Keyword::For => "FOR",
        Keyword::While => "WHILE",
        Keyword::Do => "DO",
        Keyword::Break => "BREAK",
        Keyword::Continue => "CONTINUE",
        Keyword::Return => "RETURN",
    }
}

fn punct_name(p: Punct) -> &'static str {
    match p {
        Punct::Plus => "PLUS",
        Punct::Minus => "MINUS",
        Punct::Star => "STAR",
        Punct::Slash => "SLASH",
        Punct::Percent => "PERCENT",
        Punct::EqEq => "EQEQ",
        Punct::NotEq => "NOTEQ",
        Punct::Lt => "LT",
        Punct::Gt => "GT",
        Punct::LtEq => "LTEQ",
        Punct::GtEq => "GTEQ",
        Punct::AndAnd => "ANDAND",
        Punct::OrOr => "OROR",
        Punct::Not => "NOT",
        Punct::Eq => "EQ",
        Punct::LParen => "LPAREN",
        Punct::RParen => "RPAREN",
        Punct::LBrace => "LBRACE",
        Punct::RBrace => "RBRACE",
        Punct::Comma => "COMMA",
        Punct::Semicolon => "SEMICOLON",
    }
}
