use super::run;
use crate::fixed_point::{fixed_point_program, run_on_source, Run, Status, HEADER};
use crate::generator::{generate, INPUT_MARKER};
use crate::interpreter::InterpretError;
use crate::journal::Journal;
use crate::program::Program;

const SOURCES: &[&str] = &[
    "",
    "print('demo')",
    "plain words",
    "line one\nline two\n",
    "quotes ' and \" and \\ backslashes",
    "PRINT 'nested program'\n# comment",
    "tabs\tand\r\ncarriage returns",
    "юникод, 日本語, emoji 😀, nbsp\u{a0}, separator\u{2028}, nul\u{0}",
];

#[test]
fn generated_program_prints_its_source() {
    for source in SOURCES {
        assert_eq!(run(generate(source, None).as_str()), *source);
    }
}

#[test]
fn generated_program_is_one_print_line() {
    for source in SOURCES {
        for input in &[None, Some(""), Some("user text"), Some("multi\nline")] {
            let program = generate(source, *input);
            assert_eq!(program.lines().count(), 1, "{:?}", program);
            assert!(program.as_str().starts_with("PRINT "));
        }
    }
}

#[test]
fn input_goes_on_its_own_line() {
    let output = run(generate("source text", Some("Hello_World")).as_str());
    assert_eq!(output, format!("source text\n{}Hello_World", INPUT_MARKER));
}

#[test]
fn empty_input_is_no_input() {
    assert_eq!(generate("x", Some("")), generate("x", None));
}

#[test]
fn fixed_point_run() {
    let content = "print('demo')";
    let run = run_on_source(content, None);

    assert_eq!(run.exit_code(), 0);
    assert!(run.is_success());
    assert!(run.output.contains(content));
    assert_eq!(run.output, format!("{}\n{}", HEADER, content));
    assert_eq!(run.program, fixed_point_program(content, None));
}

#[test]
fn fixed_point_run_with_input() {
    let run = run_on_source("import sys", Some("Привет, мир!"));
    assert_eq!(
        run.output,
        format!("{}\nimport sys\n{}Привет, мир!", HEADER, INPUT_MARKER)
    );
}

#[test]
fn failed_run() {
    let run = Run::of(Program::from("PRINT 1\nPRINT nope"));
    assert_eq!(run.exit_code(), 1);
    assert_eq!(run.output, "");
    assert!(matches!(
        run.status,
        Status::Failure(InterpretError::LiteralParse { line: 2, .. })
    ));
}

#[test]
fn one_journal_record_per_run() {
    let mut journal: Vec<(String, String)> = Vec::new();

    let ok = run_on_source("text", None);
    ok.record("run", &mut journal).unwrap();

    let failed = Run::of(Program::from("FOO"));
    failed.record("exec", &mut journal as &mut dyn Journal).unwrap();

    assert_eq!(
        journal,
        vec![
            ("run".to_string(), format!("{}\ntext", HEADER)),
            (
                "exec failed".to_string(),
                "Unknown statement on line 1: \"FOO\"".to_string()
            ),
        ]
    );
}

#[test]
fn reads_source_files() {
    let path = std::env::temp_dir().join(format!("fixpoint-source-{}.txt", std::process::id()));
    std::fs::write(&path, "data").unwrap();
    assert_eq!(crate::fixed_point::read_source(&path).unwrap(), "data");
    std::fs::remove_file(&path).unwrap();
}
