// Literal ::= Value (',' Value)* [','] ['#' Any*]
// Value ::= String | Number | Singleton | List | Tuple | Mapping
// String ::= "'" (Char | Escape)* "'" | '"' (Char | Escape)* '"'
// Escape ::= '\' (SimpleEscape | Octal | 'x' Hex{2} | 'u' Hex{4} | 'U' Hex{8} | Any)
// Number ::= ['+' | '-'] (Float | Integer)
// Float ::= Digit+ '.' Digit* [Exp] | '.' Digit+ [Exp] | Digit+ Exp
// Exp ::= ('e' | 'E') ['+' | '-'] Digit+
// Singleton ::= 'True' | 'False' | 'None'
// List ::= '[' [Elements] ']'
// Tuple ::= '(' [Elements] ')'
// Mapping ::= '{' [Entry (',' Entry)* [',']] '}'
// Elements ::= Value (',' Value)* [',']
// Entry ::= Value ':' Value

use std::convert::TryFrom;

use nom::branch::alt;
use nom::bytes::complete::{is_not, tag, take_while_m_n};
use nom::character::complete::{anychar, char, digit0, digit1, one_of};
use nom::combinator::{cut, map, map_opt, map_res, opt, recognize, rest};
use nom::error::context;
use nom::multi::{fold_many0, many0};
use nom::sequence::{pair, preceded, terminated, tuple};

use super::{failure, spaces, Input, Parsed};
use crate::value::{Int, Value};

/// Containers may nest this many levels deep.
pub const MAX_DEPTH: usize = 100;

/// Top level literal: a bare `a, b` is a tuple, a trailing comment is
/// allowed.
pub fn literal(input: Input) -> Parsed<Value> {
    let (input, first) = value(input, 0)?;
    let (input, (items, trailing_comma)) = tail(first, input, 0)?;
    let (input, _) = opt(preceded(symbol('#'), rest))(input)?;
    let (input, _) = spaces(input)?;

    Ok((input, unwrap_single(items, trailing_comma)))
}

// `depth` counts the containers enclosing the value.
fn value(input: Input, depth: usize) -> Parsed<Value> {
    let (input, _) = spaces(input)?;

    match input.chars().next() {
        Some(delimiter) if delimiter == '\'' || delimiter == '"' => string(delimiter, input),
        Some('[') | Some('(') | Some('{') if depth >= MAX_DEPTH => {
            Err(failure(input, "literal nested too deeply"))
        }
        Some('[') => list(input, depth + 1),
        Some('(') => tuple_(input, depth + 1),
        Some('{') => mapping(input, depth + 1),
        Some(c) if c.is_ascii_digit() || c == '.' || c == '+' || c == '-' => number(input),
        _ => context("literal", singleton)(input),
    }
}

// A parenthesized single value without a trailing comma is the value itself.
fn unwrap_single(mut items: Vec<Value>, trailing_comma: bool) -> Value {
    if items.len() == 1 && !trailing_comma {
        items.remove(0)
    } else {
        Value::Tuple(items)
    }
}

fn symbol<'a>(c: char) -> impl Fn(Input<'a>) -> Parsed<'a, char> {
    preceded(spaces, char(c))
}

fn tail(first: Value, input: Input, depth: usize) -> Parsed<(Vec<Value>, bool)> {
    let (input, rest) = many0(preceded(symbol(','), |i| value(i, depth)))(input)?;
    let (input, comma) = opt(symbol(','))(input)?;

    let mut items = Vec::with_capacity(rest.len() + 1);
    items.push(first);
    items.extend(rest);
    Ok((input, (items, comma.is_some())))
}

fn elements(input: Input, depth: usize) -> Parsed<(Vec<Value>, bool)> {
    match opt(|i| value(i, depth))(input)? {
        (input, Some(first)) => tail(first, input, depth),
        (input, None) => Ok((input, (Vec::new(), false))),
    }
}

fn list(input: Input, depth: usize) -> Parsed<Value> {
    let (input, _) = char('[')(input)?;
    let (input, (items, _)) = cut(terminated(|i| elements(i, depth), symbol(']')))(input)?;
    Ok((input, Value::List(items)))
}

fn tuple_(input: Input, depth: usize) -> Parsed<Value> {
    let (input, _) = char('(')(input)?;
    let (input, (items, trailing_comma)) =
        cut(terminated(|i| elements(i, depth), symbol(')')))(input)?;
    Ok((input, unwrap_single(items, trailing_comma)))
}

fn mapping(input: Input, depth: usize) -> Parsed<Value> {
    let start = input;
    let (input, _) = char('{')(input)?;
    let (input, entries) = cut(terminated(|i| entries(i, depth), symbol('}')))(input)?;

    let mapping = Value::mapping(entries).map_err(|_| failure(start, "unhashable mapping key"))?;
    Ok((input, mapping))
}

fn entries(input: Input, depth: usize) -> Parsed<Vec<(Value, Value)>> {
    let (input, first) = match opt(|i| entry(i, depth))(input)? {
        (input, Some(first)) => (input, first),
        (input, None) => return Ok((input, Vec::new())),
    };
    let (input, rest) = many0(preceded(symbol(','), |i| entry(i, depth)))(input)?;
    let (input, _) = opt(symbol(','))(input)?;

    let mut entries = Vec::with_capacity(rest.len() + 1);
    entries.push(first);
    entries.extend(rest);
    Ok((input, entries))
}

fn entry(input: Input, depth: usize) -> Parsed<(Value, Value)> {
    let (input, k) = value(input, depth)?;
    let (input, v) = cut(preceded(symbol(':'), |i| value(i, depth)))(input)?;
    Ok((input, (k, v)))
}

fn singleton(input: Input) -> Parsed<Value> {
    alt((
        map(tag("True"), |_| Value::Bool(true)),
        map(tag("False"), |_| Value::Bool(false)),
        map(tag("None"), |_| Value::None),
    ))(input)
}

enum Number {
    Float(f64),
    Integer(i128),
}

fn number(input: Input) -> Parsed<Value> {
    let (input, sign) = opt(terminated(one_of("+-"), spaces))(input)?;
    let negative = sign == Some('-');

    let start = input;
    let (input, number) = cut(context(
        "number",
        alt((map_res(float, |text: &str| text.parse().map(Number::Float)), integer)),
    ))(input)?;

    let value = match number {
        Number::Float(f) if negative => Value::Float(-f),
        Number::Float(f) => Value::Float(f),
        Number::Integer(i) => {
            let i = if negative { -i } else { i };
            let i = Int::try_from(i).map_err(|_| failure(start, "integer literal out of range"))?;
            Value::Int(i)
        }
    };

    Ok((input, value))
}

fn float(input: Input) -> Parsed<Input> {
    alt((
        recognize(tuple((digit1, char('.'), digit0, opt(exponent)))),
        recognize(tuple((char('.'), digit1, opt(exponent)))),
        recognize(pair(digit1, exponent)),
    ))(input)
}

fn exponent(input: Input) -> Parsed<Input> {
    recognize(tuple((one_of("eE"), opt(one_of("+-")), digit1)))(input)
}

fn integer(input: Input) -> Parsed<Number> {
    let (rest, digits) = digit1(input)?;

    // "0", "00" are fine, "007" is not
    if digits.starts_with('0') && digits.bytes().any(|b| b != b'0') {
        return Err(failure(input, "leading zeros in decimal integer literal"));
    }

    let i = digits
        .parse::<i128>()
        .map_err(|_| failure(input, "integer literal out of range"))?;
    Ok((rest, Number::Integer(i)))
}

enum Fragment<'a> {
    Text(&'a str),
    Char(char),
    // unknown escapes keep their backslash
    Unknown(char),
}

fn string(delimiter: char, input: Input) -> Parsed<Value> {
    let stop = if delimiter == '\'' { "'\\" } else { "\"\\" };

    let body = fold_many0(
        alt((map(is_not(stop), Fragment::Text), escape)),
        String::new(),
        |mut text, fragment| {
            match fragment {
                Fragment::Text(s) => text.push_str(s),
                Fragment::Char(c) => text.push(c),
                Fragment::Unknown(c) => {
                    text.push('\\');
                    text.push(c);
                }
            }
            text
        },
    );

    let (input, _) = char(delimiter)(input)?;
    let (input, text) = cut(terminated(body, char(delimiter)))(input)?;
    Ok((input, Value::Str(text)))
}

fn escape(input: Input) -> Parsed<Fragment> {
    preceded(
        char('\\'),
        cut(alt((
            map(one_of("\\'\"abfnrtv"), |c| Fragment::Char(simple_escape(c))),
            map_opt(take_while_m_n(1, 3, |c: char| c.is_digit(8)), |digits: &str| {
                u32::from_str_radix(digits, 8)
                    .ok()
                    .and_then(std::char::from_u32)
                    .map(Fragment::Char)
            }),
            preceded(char('x'), cut(context("two hex digits", hex_char(2)))),
            preceded(char('u'), cut(context("four hex digits", hex_char(4)))),
            preceded(
                char('U'),
                cut(context("eight hex digits naming a code point", hex_char(8))),
            ),
            map(anychar, Fragment::Unknown),
        ))),
    )(input)
}

fn hex_char<'a>(digits: usize) -> impl Fn(Input<'a>) -> Parsed<'a, Fragment<'a>> {
    map_opt(
        take_while_m_n(digits, digits, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| {
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(std::char::from_u32)
                .map(Fragment::Char)
        },
    )
}

fn simple_escape(c: char) -> char {
    match c {
        'a' => '\x07',
        'b' => '\x08',
        'f' => '\x0c',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\x0b',
        // backslash and quotes stand for themselves
        other => other,
    }
}
