use super::{fail, run};
use crate::interpreter::InterpretError;
use crate::syntax::SyntaxError;

#[test]
fn bare_identifier() {
    assert_eq!(
        fail("PRINT something_not_quoted"),
        InterpretError::LiteralParse {
            line: 1,
            source: SyntaxError {
                reason: "expected literal, found 's'".into(),
                column: 1,
            },
        }
    );
}

#[test]
fn unknown_statement() {
    assert_eq!(
        fail("FOO bar"),
        InterpretError::UnknownStatement {
            line: 1,
            text: "FOO bar".into(),
        }
    );
}

#[test]
fn unknown_statement_text_is_trimmed() {
    assert_eq!(
        fail("PRINT 1\n\n   write(x)  "),
        InterpretError::UnknownStatement {
            line: 3,
            text: "write(x)".into(),
        }
    );
}

#[test]
fn print_without_argument() {
    assert_eq!(fail("PRINT").line(), 1);
    assert_eq!(fail("PRINT   ").line(), 1);
    assert!(matches!(fail("PRINT"), InterpretError::UnknownStatement { .. }));
}

#[test]
fn first_error_aborts() {
    let e = fail("PRINT 'ok'\nPRINT 1 +\nFOO");
    assert_eq!(e.line(), 2);
    assert!(matches!(e, InterpretError::LiteralParse { .. }));

    let e = fail("PRINT 'ok'\nFOO\nPRINT 1 +");
    assert_eq!(e.line(), 2);
    assert!(matches!(e, InterpretError::UnknownStatement { .. }));
}

#[test]
fn no_expressions() {
    for program in &[
        "PRINT 1 + 2",
        "PRINT __import__('os')",
        "PRINT open('/etc/passwd').read()",
        "PRINT [x for x in ()]",
        "PRINT {1, 2}",
        "PRINT lambda: 0",
        "PRINT --1",
        "PRINT 'a' 'b'",
        "PRINT 0x10",
        "PRINT true",
    ] {
        assert!(
            matches!(fail(program), InterpretError::LiteralParse { line: 1, .. }),
            "{} should not parse",
            program
        );
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        fail("# header\nPRINT [1, 2").to_string(),
        "Failed to parse literal on line 2: expected ']', found end of input at column 6"
    );
    assert_eq!(
        fail("\nFOO bar").to_string(),
        "Unknown statement on line 2: \"FOO bar\""
    );
}

#[test]
fn inline_error_markers_are_never_produced() {
    let program = "PRINT 'a'\nPRINT oops";
    assert!(crate::interpret(program).is_err());
    assert_eq!(run("PRINT 'a'"), "a");
}

#[test]
fn deeply_nested_literal() {
    let depth = crate::syntax::MAX_DEPTH + 1;
    let program = format!("PRINT 'ok'\nPRINT {}{}", "[".repeat(depth), "]".repeat(depth));
    assert_eq!(
        fail(&program),
        InterpretError::LiteralParse {
            line: 2,
            source: SyntaxError {
                reason: "literal nested too deeply".into(),
                column: depth,
            },
        }
    );

    let program = format!("PRINT {}", "[".repeat(1000));
    assert_eq!(fail(&program).line(), 1);
}
