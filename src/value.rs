use std::fmt::{self, Display, Formatter, Write};

pub type Int = i64;

/// Value of a TinyLang literal.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(Int),
    Float(f64),
    Str(String),
    List(Vec<Value>),
    Tuple(Vec<Value>),
    /// Insertion ordered, keys are unique under [`Value::key_eq`]
    Dict(Vec<(Value, Value)>),
}

impl Value {
    /// Builds a mapping the way a mapping display does: later duplicates
    /// overwrite the value but keep the position of the first key.
    ///
    /// Fails if any key is unhashable.
    pub fn mapping(pairs: Vec<(Value, Value)>) -> Result<Value, Value> {
        let mut entries: Vec<(Value, Value)> = Vec::with_capacity(pairs.len());
        for (key, value) in pairs {
            if !key.is_hashable() {
                return Err(key);
            }

            match entries.iter_mut().find(|(k, _)| k.key_eq(&key)) {
                Some(entry) => entry.1 = value,
                None => entries.push((key, value)),
            }
        }

        Ok(Value::Dict(entries))
    }

    pub fn is_hashable(&self) -> bool {
        match self {
            Value::List(_) | Value::Dict(_) => false,
            Value::Tuple(items) => items.iter().all(Value::is_hashable),
            _ => true,
        }
    }

    /// Equality used for mapping keys: numbers compare by value across
    /// `bool`, `int` and `float`.
    pub fn key_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => {
                a.len() == b.len() && a.iter().zip(b).all(|(x, y)| x.key_eq(y))
            }
            (a, b) => match (a.as_integer(), b.as_integer(), a.as_float(), b.as_float()) {
                (Some(x), Some(y), _, _) => x == y,
                (Some(i), _, _, Some(f)) | (_, Some(i), Some(f), _) => int_eq_float(i, f),
                (_, _, Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    /// Quoted form, the one used for elements of containers.
    pub fn repr(&self) -> Repr<'_> {
        Repr(self)
    }

    fn as_integer(&self) -> Option<Int> {
        match self {
            Value::Bool(b) => Some(Int::from(*b)),
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }
}

// Exact: no rounding of `i` to the nearest float.
fn int_eq_float(i: Int, f: f64) -> bool {
    const LIMIT: f64 = 9_223_372_036_854_775_808.0; // 2^63

    f.fract() == 0.0 && f >= -LIMIT && f < LIMIT && f as Int == i
}

/// Canonical string form: strings are printed raw, everything else quoted.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => f.write_str(s),
            other => other.repr().fmt(f),
        }
    }
}

pub struct Repr<'a>(&'a Value);

impl Display for Repr<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.0 {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(v) => f.write_str(&format_float(*v)),
            Value::Str(s) => f.write_str(&quote(s)),
            Value::List(items) => {
                f.write_char('[')?;
                write_sequence(f, items)?;
                f.write_char(']')
            }
            Value::Tuple(items) => {
                f.write_char('(')?;
                write_sequence(f, items)?;
                if items.len() == 1 {
                    f.write_char(',')?;
                }
                f.write_char(')')
            }
            Value::Dict(entries) => {
                f.write_char('{')?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key.repr(), value.repr())?;
                }
                f.write_char('}')
            }
        }
    }
}

fn write_sequence(f: &mut Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item.repr())?;
    }
    Ok(())
}

/// Shortest round-trip digits; scientific notation outside of `1e-4..1e16`.
pub fn format_float(v: f64) -> String {
    if v.is_nan() {
        return "nan".into();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.into();
    }

    let scientific = format!("{:e}", v);
    let exponent = scientific
        .split_once('e')
        .and_then(|(_, exp)| exp.parse::<i32>().ok())
        .unwrap_or(0);

    if exponent < -4 || exponent >= 16 {
        let mantissa = scientific.split('e').next().unwrap_or("0");
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let plain = v.to_string();
        if plain.contains('.') {
            plain
        } else {
            plain + ".0"
        }
    }
}

/// Encodes `text` as a string literal which parses back to `text`.
///
/// Single quotes are used unless the text contains a single quote and no
/// double quotes.
pub fn quote(text: &str) -> String {
    let delimiter = if text.contains('\'') && !text.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(delimiter);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c == delimiter => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c if (c as u32) <= 0xff => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c if (c as u32) <= 0xffff => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => {
                let _ = write!(out, "\\U{:08x}", c as u32);
            }
        }
    }
    out.push(delimiter);
    out
}

fn is_printable(c: char) -> bool {
    if c.is_ascii() {
        return c == ' ' || c.is_ascii_graphic();
    }

    !(c.is_control() || c.is_whitespace() || is_format(c))
}

// Unicode "Cf" characters that are commonly met in text.
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
    )
}
