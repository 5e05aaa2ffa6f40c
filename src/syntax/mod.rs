use nom::error::{VerboseError, VerboseErrorKind};
use thiserror::Error;

mod literal;
mod statement;

pub type Input<'a> = &'a str;
pub type ParseError<'a> = VerboseError<Input<'a>>;
pub type Parsed<'a, O> = nom::IResult<Input<'a>, O, ParseError<'a>>;

pub use self::literal::{literal, MAX_DEPTH};
pub use self::statement::{line, Line};

/// Parse failure with a 1-based character column into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason} at column {column}")]
pub struct SyntaxError {
    pub reason: String,
    pub column: usize,
}

pub type Result<T> = std::result::Result<T, SyntaxError>;

pub fn spaces(input: Input) -> Parsed<Input> {
    nom::character::complete::multispace0(input)
}

// see https://github.com/rust-lang/rust-clippy/issues/2944
#[allow(clippy::needless_lifetimes)]
pub fn key<'a>(key: &'a str) -> impl Fn(Input<'a>) -> Parsed<'a, Input<'a>> {
    nom::sequence::preceded(spaces, nom::bytes::complete::tag(key))
}

/// Unrecoverable error carrying its own reason.
pub fn failure<'a>(at: Input<'a>, reason: &'static str) -> nom::Err<ParseError<'a>> {
    nom::Err::Failure(VerboseError {
        errors: vec![(at, VerboseErrorKind::Context(reason))],
    })
}

/// Runs `parser` over the whole of `input`.
pub fn parse<P, T>(parser: P, input: Input) -> Result<T>
where
    P: Fn(Input) -> Parsed<T>,
{
    let (rest, value) = parser(input).map_err(|e| err(e, input))?;

    if !rest.is_empty() {
        return Err(SyntaxError {
            reason: format!("unexpected {}", found(rest)),
            column: column(input, rest),
        });
    }

    Ok(value)
}

fn err(e: nom::Err<ParseError>, input: Input) -> SyntaxError {
    match e {
        nom::Err::Error(e) | nom::Err::Failure(e) => describe(&e, input),
        nom::Err::Incomplete(_) => SyntaxError {
            reason: "unexpected end of input".into(),
            column: input.chars().count() + 1,
        },
    }
}

// The innermost entry says what went wrong and where, the innermost
// context (if any) says what was being parsed.
fn describe(e: &ParseError, input: Input) -> SyntaxError {
    let (at, kind) = match e.errors.first() {
        Some((at, kind)) => (*at, kind),
        None => {
            return SyntaxError {
                reason: "invalid input".into(),
                column: 1,
            }
        }
    };

    let what = e.errors.iter().find_map(|(_, kind)| match kind {
        VerboseErrorKind::Context(what) => Some(*what),
        _ => None,
    });

    let reason = match (kind, what) {
        (VerboseErrorKind::Context(reason), _) => reason.to_string(),
        (VerboseErrorKind::Char(c), _) => format!("expected {:?}, found {}", c, found(at)),
        (VerboseErrorKind::Nom(_), Some(what)) => format!("expected {}, found {}", what, found(at)),
        (VerboseErrorKind::Nom(_), None) => format!("unexpected {}", found(at)),
    };

    SyntaxError {
        reason,
        column: column(input, at),
    }
}

fn found(rest: Input) -> String {
    match rest.chars().next() {
        Some(c) => format!("{:?}", c),
        None => "end of input".into(),
    }
}

fn column(input: Input, rest: Input) -> usize {
    let offset = input.len().saturating_sub(rest.len());
    let consumed = input
        .get(..offset)
        .map(|s| s.chars().count())
        .unwrap_or(offset);
    consumed + 1
}
