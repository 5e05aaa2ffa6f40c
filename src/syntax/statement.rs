// Line ::= Blank | Comment | Print
// Comment ::= '#' Any*
// Print ::= 'PRINT' Whitespace+ Literal    (keyword is case-insensitive)

use nom::bytes::complete::{tag_no_case, take_while1};
use nom::sequence::terminated;

use super::{Input, Parsed};

/// Classification of one physical program line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// Blank line or comment
    Skip,
    /// `PRINT` statement with its (unparsed) literal text
    Print(Input<'a>),
    Unknown(Input<'a>),
}

pub fn line(input: Input) -> Line {
    let input = input.trim();

    if input.is_empty() || input.starts_with('#') {
        return Line::Skip;
    }

    match print(input) {
        Ok((literal, _)) => Line::Print(literal),
        Err(_) => Line::Unknown(input),
    }
}

fn print(input: Input) -> Parsed<Input> {
    terminated(tag_no_case("PRINT"), take_while1(char::is_whitespace))(input)
}
