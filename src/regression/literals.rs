use super::run;

fn print(literal: &str) -> String {
    run(&format!("PRINT {}", literal))
}

#[test]
fn strings() {
    assert_eq!(print("'single'"), "single");
    assert_eq!(print("\"double\""), "double");
    assert_eq!(print(r#"'\\ \' \" \a\b\f\v'"#), "\\ ' \" \x07\x08\x0c\x0b");
    assert_eq!(print(r"'\x48\151!'"), "Hi!");
    assert_eq!(print(r"'\N{DASH}'"), r"\N{DASH}");
    assert_eq!(print("'юникод'"), "юникод");
}

#[test]
fn numbers() {
    assert_eq!(print("0"), "0");
    assert_eq!(print("-0"), "0");
    assert_eq!(print("+12"), "12");
    assert_eq!(print("- 3"), "-3");
    assert_eq!(print("9223372036854775807"), "9223372036854775807");
    assert_eq!(print("3.0"), "3.0");
    assert_eq!(print("-0.0"), "-0.0");
    assert_eq!(print("1e16"), "1e+16");
    assert_eq!(print("1.5e-7"), "1.5e-07");
    assert_eq!(print("123.456"), "123.456");
    assert_eq!(print("1e400"), "inf");
    assert_eq!(print("-1e400"), "-inf");
}

#[test]
fn singletons() {
    assert_eq!(print("True"), "True");
    assert_eq!(print("False"), "False");
    assert_eq!(print("None"), "None");
}

#[test]
fn nested_containers() {
    assert_eq!(print("[[], [[]], ([],)]"), "[[], [[]], ([],)]");
    assert_eq!(print("( 1 , 2 , )"), "(1, 2)");
    assert_eq!(print("((1))"), "1");
    assert_eq!(print("[\"it's\", 'x']"), "[\"it's\", 'x']");
    assert_eq!(print("{'a': {'b': ('c', None)}}"), "{'a': {'b': ('c', None)}}");
    assert_eq!(print("{(1, 2): 'pair', None: 0,}"), "{(1, 2): 'pair', None: 0}");
}

#[test]
fn duplicate_keys_keep_first_position_and_last_value() {
    assert_eq!(print("{'a': 1, 'b': 2, 'a': 3}"), "{'a': 3, 'b': 2}");
    assert_eq!(print("{1: 'int', True: 'bool', 1.0: 'float'}"), "{1: 'float'}");
    assert_eq!(
        print("{9007199254740993: 'a', 9007199254740992.0: 'b'}"),
        "{9007199254740993: 'a', 9007199254740992.0: 'b'}"
    );
    assert_eq!(print("{2: 'int', 2.5: 'float', 2.0: 'again'}"), "{2: 'again', 2.5: 'float'}");
}

#[test]
fn strings_inside_containers_are_quoted() {
    assert_eq!(print("['a\\nb']"), "['a\\nb']");
    assert_eq!(print("('\\x00',)"), "('\\x00',)");
}

#[test]
fn comment_after_literal() {
    assert_eq!(print("'value' # why not"), "value");
    assert_eq!(print("'# not a comment'"), "# not a comment");
}
