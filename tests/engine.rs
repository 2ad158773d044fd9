use uselesscalc::{
    error::ParseError,
    interpreter::{
        engine::{Engine, EvalResult, UNRECOGNIZED_MARKER},
        operation::Operation,
        parser::core::try_parse,
    },
    shell::{Shell, ShellConfig},
};

fn assert_number(input: &str, expected: i128) {
    assert_eq!(Engine::new().evaluate(Some(input)),
               EvalResult::Number(expected),
               "input {input:?}");
}

fn assert_unrecognized(input: Option<&str>) {
    assert_eq!(Engine::new().evaluate(input),
               EvalResult::Unrecognized(UNRECOGNIZED_MARKER.to_string()),
               "input {input:?}");
}

#[test]
fn sums_and_differences() {
    assert_number("8+34", 42);
    assert_number("34-8", 26);
    assert_number("10-34", -24);
    assert_number("3-8", -5);
}

#[test]
fn sums_match_integer_addition() {
    for a in [0_u64, 1, 7, 99, 12_345, u64::MAX] {
        for b in [0_u64, 2, 50, 65_536, u64::MAX] {
            assert_number(&format!("{a}+{b}"), i128::from(a) + i128::from(b));
            assert_number(&format!("{a}-{b}"), i128::from(a) - i128::from(b));
        }
    }
}

#[test]
fn malformed_inputs_are_unrecognized() {
    assert_unrecognized(None);
    assert_unrecognized(Some(""));
    assert_unrecognized(Some("a+1"));
    assert_unrecognized(Some("a-1"));
    assert_unrecognized(Some("10 34+4"));
    assert_unrecognized(Some("10+34+4"));
    assert_unrecognized(Some("1+2-3"));
}

#[test]
fn evaluation_is_idempotent() {
    let engine = Engine::new();
    for input in [Some("8+34"), Some("10-34"), Some("a+1"), None] {
        assert_eq!(engine.evaluate(input), engine.evaluate(input));
    }

    let op = Operation::Difference { a: 3, b: 8 };
    assert_eq!(op.evaluate(), op.evaluate());
}

#[test]
fn parser_picks_the_matching_variant() {
    assert_eq!(try_parse(Some("8+34")), Ok(Operation::Sum { a: 8, b: 34 }));
    assert_eq!(try_parse(Some("10-34")), Ok(Operation::Difference { a: 10, b: 34 }));
}

#[test]
fn parser_reports_why_nothing_matched() {
    assert_eq!(try_parse(None), Err(ParseError::MissingInput));
    assert_eq!(try_parse(Some("a+1")),
               Err(ParseError::UnexpectedToken { token:    "a".to_string(),
                                                 position: 0, }));
    assert_eq!(try_parse(Some("1+99999999999999999999")),
               Err(ParseError::LiteralTooLarge { position: 2 }));
    assert_eq!(try_parse(Some("10+34+4")),
               Err(ParseError::Unrecognized { input: "10+34+4".to_string() }));
    assert_eq!(try_parse(Some("")),
               Err(ParseError::Unrecognized { input: String::new() }));
}

#[test]
fn operations_display_in_input_form() {
    for input in ["8+34", "10-34", "0+0"] {
        let op = try_parse(Some(input)).unwrap();
        assert_eq!(op.to_string(), input);
        assert_eq!(try_parse(Some(op.to_string().as_str())), Ok(op));
    }
}

#[test]
fn custom_marker_replaces_default() {
    let engine = Engine::with_marker("???");
    assert_eq!(engine.marker(), "???");
    assert_eq!(engine.evaluate(Some("x")).to_string(), "???");
    assert_eq!(engine.evaluate(Some("1+1")).as_number(), Some(2));
}

#[test]
fn try_evaluate_keeps_the_reason() {
    let engine = Engine::new();
    assert_eq!(engine.try_evaluate(Some("2+2")), Ok(4));
    assert!(matches!(engine.try_evaluate(Some("2 +2")),
                     Err(ParseError::UnexpectedToken { position: 1, .. })));
}

#[test]
fn engine_is_shareable_across_threads() {
    let engine = std::sync::Arc::new(Engine::new());
    let handles: Vec<_> = (0..4_u64).map(|i| {
                                        let engine = std::sync::Arc::clone(&engine);
                                        std::thread::spawn(move || {
                                            engine.evaluate(Some(format!("{i}+{i}").as_str()))
                                        })
                                    })
                                    .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let expected = i128::try_from(i * 2).unwrap();
        assert_eq!(handle.join().unwrap(), EvalResult::Number(expected));
    }
}

#[test]
fn shell_handles_exit_in_any_case() {
    let shell = Shell::new(Engine::new(), ShellConfig::default());
    for line in ["exit", "EXIT", "Exit", "eXIT"] {
        assert_eq!(shell.handle_line(line), None);
    }
    assert!(shell.handle_line("exit now").is_some());
}

#[test]
fn shell_renders_responses() {
    let shell = Shell::new(Engine::new(), ShellConfig::default());
    assert_eq!(shell.handle_line("34-8").as_deref(), Some("RESPONSE: 26"));
    assert_eq!(shell.handle_line("").as_deref(), Some("RESPONSE: Boh!"));
}

#[test]
fn strict_shell_adds_help_for_unrecognized_input() {
    let shell = Shell::new(Engine::new(),
                           ShellConfig { banner: false,
                                         strict: true, });

    let response = shell.handle_line("a+1").unwrap();
    assert!(response.starts_with("RESPONSE: Boh!\n"));
    assert!(response.contains("ERRORE: Il comando 'a+1' non è valido o non è supportato"));
    assert!(response.contains("exit    Esce dall'applicazione"));

    assert_eq!(shell.handle_line("1+1").as_deref(), Some("RESPONSE: 2"));
}

#[test]
fn banner_names_the_version() {
    let banner = Shell::banner();
    assert!(banner.contains(&format!("USELESS CALC v.{}", env!("CARGO_PKG_VERSION"))));
    assert!(banner.ends_with("Cosa posso fare per te?\n"));
}

#[test]
fn evaluate_all_answers_each_expression() {
    let shell = Shell::new(Engine::new(), ShellConfig::default());
    let results = shell.evaluate_all(&["1+1", "5-9", "nope"][..]);
    assert_eq!(results,
               vec![EvalResult::Number(2),
                    EvalResult::Number(-4),
                    EvalResult::Unrecognized("Boh!".to_string())]);
}
