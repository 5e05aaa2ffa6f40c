use crate::program::Program;
use crate::value::quote;

/// Prefix of the line carrying user input in a generated program's text.
pub const INPUT_MARKER: &str = "# User input: ";

/// Text the generated program prints: `source`, plus the user input on a
/// line of its own. Empty input counts as no input.
pub fn wrap(source: &str, input: Option<&str>) -> String {
    match input {
        Some(input) if !input.is_empty() => format!("{}\n{}{}", source, INPUT_MARKER, input),
        _ => source.to_string(),
    }
}

/// Builds the one-line program `PRINT <literal>` printing [`wrap`]`(source, input)`.
pub fn generate(source: &str, input: Option<&str>) -> Program {
    Program::new(format!("PRINT {}", quote(&wrap(source, input))))
}
