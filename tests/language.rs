use std::fs;

use minipy::{
    Error,
    error::{LexError, ParseError, RuntimeError},
    run, run_to_string,
};
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, example) in book_examples(&content).into_iter().enumerate() {
            count += 1;
            let Some(expected) = example.output else {
                panic!("Example {} in {:?} has no ```output block after it:\n{}",
                       i + 1,
                       path,
                       example.code);
            };
            match run_to_string(&example.code) {
                Ok(output) => assert_eq!(output,
                                         expected,
                                         "Example {} in {:?} printed the wrong output:\n{}",
                                         i + 1,
                                         path,
                                         example.code),
                Err(e) => panic!("Example {} in {:?} failed:\n{}\nError: {:?}", i + 1, path, example.code, e),
            }
        }
    }

    assert!(count > 0, "No minipy examples found in book/src");
}

/// A `minipy` block from the book and the `output` block that documents it.
struct BookExample {
    code:   String,
    output: Option<String>,
}

/// Fenced blocks as `(info string, body)` pairs, in document order.
fn fenced_blocks(content: &str) -> Vec<(String, String)> {
    let mut blocks = Vec::new();
    let mut open: Option<(String, String)> = None;

    for line in content.lines() {
        match line.trim_start().strip_prefix("```") {
            Some(info) => match open.take() {
                Some(block) => blocks.push(block),
                None => open = Some((info.trim().to_string(), String::new())),
            },
            None => {
                if let Some((_, body)) = &mut open {
                    body.push_str(line);
                    body.push('\n');
                }
            },
        }
    }

    blocks
}

fn book_examples(content: &str) -> Vec<BookExample> {
    let mut examples = Vec::new();
    let mut blocks = fenced_blocks(content).into_iter().peekable();

    while let Some((info, code)) = blocks.next() {
        if info != "minipy" {
            continue;
        }
        let output = blocks.next_if(|(info, _)| info == "output").map(|(_, body)| body);
        examples.push(BookExample { code, output });
    }

    examples
}

#[test]
fn book_example_blocks_pair_with_their_output() {
    let page = "Intro\n\n```minipy\nprint(1)\n```\n\n```output\n1\n```\n\n```sh\nminipy x\n```\n\n\
                ```minipy\nprint()\n```\n";
    let examples = book_examples(page);

    assert_eq!(examples.len(), 2);
    assert_eq!(examples[0].code, "print(1)\n");
    assert_eq!(examples[0].output.as_deref(), Some("1\n"));
    assert_eq!(examples[1].code, "print()\n");
    assert_eq!(examples[1].output, None);
}

fn assert_output(src: &str, expected: &str) {
    match run_to_string(src) {
        Ok(output) => assert_eq!(output, expected, "output of {src:?}"),
        Err(e) => panic!("Script {src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    run_to_string(src).expect_err("Script succeeded but was expected to fail")
}

#[test]
fn print_statements() {
    assert_output("print()", "\n");
    assert_output("print(123)", "123\n");
    assert_output("print()\nprint(1+2)", "\n3\n");
}

#[test]
fn integers_have_no_size_limit() {
    assert_output("print(123456789012345678901234567890)", "123456789012345678901234567890\n");
    assert_output("print(9223372036854775807+1)", "9223372036854775808\n");
    assert_output("print(0-9223372036854775808-1)", "-9223372036854775809\n");
    assert_output("x = 4294967296\nprint(x*x*x)", "79228162514264337593543950336\n");
    assert_output("print((0-100000000000000000000)/3)", "-33333333333333333334\n");
}

#[test]
fn arithmetic() {
    assert_output("print(2+3)", "5\n");
    assert_output("print(2+3+5)", "10\n");
    assert_output("print(2+3-5)", "0\n");
    assert_output("print(3*4)", "12\n");
    assert_output("print(6/2)", "3\n");
    assert_output("print(2+3*4)", "14\n");
    assert_output("print((1+2)*3)", "9\n");
    assert_output("print(2-10)", "-8\n");
    assert_output("print(0-7/2)", "-3\n");
    assert_output("print((0-7)/2)", "-4\n");
}

#[test]
fn variables() {
    assert_output("a=1\nprint(a+2)", "3\n");
    assert_output("width = 6\nheight = 7\narea = width * height\nprint(area)", "42\n");
    assert_output("x = 1\nx = x + 1\nx = x * 10\nprint(x)", "20\n");
}

#[test]
fn run_returns_final_environment() {
    let mut out = Vec::new();
    let env = run("a=1\nprint(a+2)", &mut out).unwrap();

    assert_eq!(out, b"3\n");
    assert_eq!(env.get("a").map(ToString::to_string).as_deref(), Some("1"));
    assert_eq!(env.len(), 1);
}

#[test]
fn blank_lines_are_skipped() {
    assert_output("\n\nprint(1)\n   \n\t\nprint(2)\n\n", "1\n2\n");
    assert_output("", "");
}

#[test]
fn runs_do_not_share_variables() {
    assert_output("x = 5\nprint(x)", "5\n");
    assert!(matches!(assert_failure("print(x)"),
                     Error::Runtime(RuntimeError::UnknownVariable { .. })));
}

#[test]
fn division_by_zero_is_error() {
    assert!(matches!(assert_failure("x = 1 / 0"),
                     Error::Runtime(RuntimeError::DivisionByZero)));
}

#[test]
fn forward_reference_is_runtime_error() {
    let mut out = Vec::new();
    let err = run("print(1)\nprint(y)\ny = 2", &mut out).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::UnknownVariable { ref name }) if name == "y"));
    assert_eq!(out, b"1\n");
}

#[test]
fn output_before_runtime_failure_is_kept() {
    let mut out = Vec::new();
    let err = run("print(1)\nprint(2/0)\nprint(3)", &mut out).unwrap_err();

    assert!(matches!(err, Error::Runtime(RuntimeError::DivisionByZero)));
    assert_eq!(out, b"1\n");
}

#[test]
fn parse_failure_prevents_any_output() {
    let mut out = Vec::new();
    let err = run("print(1)\n\nprint(", &mut out).unwrap_err();

    assert!(matches!(err,
                     Error::Parse { line:   3,
                                    source: ParseError::ExpectedClosingParen { found: None }, }));
    assert!(out.is_empty());
}

#[test]
fn lex_failure_reports_line_and_position() {
    let err = assert_failure("a = 1\n\nb = 2 $ 3");

    assert!(matches!(err,
                     Error::Lex { line:   3,
                                  source: LexError::UnexpectedCharacter { character: '$',
                                                                          position:  6, }, }));
    assert_eq!(err.to_string(), "Error on line 3: Unexpected character '$' at position 6.");
}

#[test]
fn parse_error_messages() {
    assert_eq!(assert_failure("print(1 +)").to_string(),
               "Error on line 1: Unexpected end of input, expected a number, a name or '('.");
    assert_eq!(assert_failure("x").to_string(),
               "Error on line 1: Invalid statement starting with IDENTIFIER 'x'. Expected \
                'print(...)' or 'name = ...'.");
    assert_eq!(assert_failure("print((1)").to_string(),
               "Error on line 1: Expected closing parenthesis ')' but found end of input.");
}

#[test]
fn unsupported_syntax_is_rejected() {
    assert_failure("print(1.5)");
    assert_failure("print(\"hi\")");
    assert_failure("print(-1)");
    assert_failure("x += 1");
    assert_failure("if x");
    assert_failure("print(2 ** 3)");
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.py").unwrap();
    assert_output(&contents, "\n15\n5\n-1\n2\n50\n");
}
