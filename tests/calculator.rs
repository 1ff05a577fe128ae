use deskcalc::{
    Calculator, ERROR_DISPLAY,
    calculator::square_root_of,
    engine::{
        evaluator::evaluate_postfix,
        lexer::tokenize,
        postfix::{Op, PostfixToken, to_postfix},
    },
    error::{EvalError, ParseError},
    evaluate,
};

fn assert_evaluates(src: &str, expected: f64) {
    match evaluate(src) {
        Ok(value) => {
            assert!((value - expected).abs() < 1e-9,
                    "{src} evaluated to {value}, expected {expected}")
        },
        Err(e) => panic!("{src} failed to evaluate: {e}"),
    }
}

fn assert_rejects(src: &str) {
    if let Ok(value) = evaluate(src) {
        panic!("{src} evaluated to {value} but was expected to fail");
    }
}

#[test]
fn precedence_and_parentheses() {
    assert_evaluates("3+4*2", 11.0);
    assert_evaluates("(3+4)*2", 14.0);
    assert_evaluates("2+3*4^2", 50.0);
    assert_evaluates("10-4-3", 3.0);
    assert_evaluates("100/5/2", 10.0);
    assert_evaluates("((2+3))*((4))", 20.0);
}

#[test]
fn decimals_and_whitespace() {
    assert_evaluates("1.5*2", 3.0);
    assert_evaluates(".5+.25", 0.75);
    assert_evaluates("2.*2", 4.0);
    assert_evaluates(" 1 + 2 ", 3.0);
}

#[test]
fn exponent_is_left_associative() {
    // (2^3)^2, not 2^(3^2).
    assert_evaluates("2^3^2", 64.0);
    assert_evaluates("2^10", 1024.0);
    assert_evaluates("(2^3)^2", 64.0);
    assert_evaluates("2^(3^2)", 512.0);
}

#[test]
fn unary_minus() {
    assert_evaluates("-5+3", -2.0);
    assert_evaluates("3*-5", -15.0);
    assert_evaluates("-(2+3)", -5.0);
    assert_evaluates("--5", 5.0);
    assert_evaluates("2^-3", 0.125);
    // The sign binds tighter than the exponent.
    assert_evaluates("-2^2", 4.0);
}

#[test]
fn division_by_zero_is_not_an_error() {
    let value = evaluate("10/0").unwrap();
    assert!(value.is_infinite() && value.is_sign_positive());

    let value = evaluate("-10/0").unwrap();
    assert!(value.is_infinite() && value.is_sign_negative());

    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn mismatched_parentheses() {
    let tokens = tokenize("(1+2").unwrap();
    assert_eq!(to_postfix(&tokens), Err(ParseError::MismatchedParentheses));

    let tokens = tokenize("1+2)").unwrap();
    assert_eq!(to_postfix(&tokens), Err(ParseError::MismatchedParentheses));

    assert_rejects("(1+2");
    assert_rejects("1+2)");
}

#[test]
fn characters_outside_the_alphabet_fail_safely() {
    assert!(matches!(tokenize("2+x"),
                     Err(ParseError::UnexpectedToken { .. })));
    assert_rejects("2+x");
    assert_rejects("1$2");
}

#[test]
fn postfix_program_shape() {
    let tokens = tokenize("3+4*2").unwrap();
    assert_eq!(to_postfix(&tokens).unwrap(),
               vec![PostfixToken::Number(3.0),
                    PostfixToken::Number(4.0),
                    PostfixToken::Number(2.0),
                    PostfixToken::Op(Op::Mul),
                    PostfixToken::Op(Op::Add)]);
}

#[test]
fn programs_that_do_not_reduce_to_one_value() {
    // Two numbers and no operator.
    let program = [PostfixToken::Number(1.0), PostfixToken::Number(2.0)];
    assert_eq!(evaluate_postfix(&program),
               Err(EvalError::InvalidExpression { values: 2 }));

    // The empty program.
    assert_eq!(evaluate_postfix(&[]),
               Err(EvalError::InvalidExpression { values: 0 }));

    assert_rejects("1 2");
    assert_rejects("");
}

#[test]
fn operators_with_missing_operands() {
    let program = [PostfixToken::Number(2.0), PostfixToken::Op(Op::Add)];
    assert_eq!(evaluate_postfix(&program),
               Err(EvalError::InsufficientOperands { operator: '+' }));

    let program = [PostfixToken::Op(Op::Neg)];
    assert_eq!(evaluate_postfix(&program),
               Err(EvalError::InsufficientOperands { operator: '-' }));

    assert_rejects("2+");
    assert_rejects("*3");
}

#[test]
fn square_root_transform() {
    assert_eq!(square_root_of("16").unwrap(), 4.0);
    assert_eq!(square_root_of("2.25").unwrap(), 1.5);
    assert!(square_root_of("-4").unwrap().is_nan());
    assert_eq!(square_root_of("abc"),
               Err(EvalError::InvalidNumber { text: "abc".to_string() }));
}

#[test]
fn equals_records_history() {
    let mut calc = Calculator::new();
    calc.press("2");
    calc.press("+");
    calc.press("2");
    calc.equals();

    assert_eq!(calc.display(), "4");
    let entry = calc.history().last().unwrap();
    assert_eq!(entry.expression, "2+2");
    assert_eq!(entry.result, 4.0);

    calc.clear_history();
    assert!(calc.history().is_empty());
}

#[test]
fn failures_show_the_sentinel_and_record_nothing() {
    let mut calc = Calculator::new();
    calc.press("(1+2");
    calc.equals();

    assert_eq!(calc.display(), ERROR_DISPLAY);
    assert!(calc.history().is_empty());

    // The calculator stays usable after a failure.
    calc.clear();
    calc.press("1+1");
    calc.equals();
    assert_eq!(calc.display(), "2");
}

#[test]
fn backspace_bottoms_out_at_zero() {
    let mut calc = Calculator::new();
    calc.backspace();
    assert_eq!(calc.display(), "0");

    calc.clear();
    calc.press("7");
    calc.backspace();
    assert_eq!(calc.display(), "0");

    calc.clear();
    calc.press("123");
    calc.backspace();
    assert_eq!(calc.display(), "12");
}

#[test]
fn sign_toggle_is_an_involution() {
    let mut calc = Calculator::new();
    calc.press("5");
    calc.toggle_sign();
    assert_eq!(calc.display(), "-5");
    calc.toggle_sign();
    assert_eq!(calc.display(), "5");
}

#[test]
fn square_root_on_the_display() {
    let mut calc = Calculator::new();
    calc.press("16");
    calc.square_root();
    assert_eq!(calc.display(), "4");

    calc.clear();
    calc.press("4");
    calc.toggle_sign();
    calc.square_root();
    assert_eq!(calc.display(), "NaN");

    calc.clear();
    calc.square_root();
    assert_eq!(calc.display(), ERROR_DISPLAY);
}

#[test]
fn recall_restores_an_expression() {
    let mut calc = Calculator::new();
    calc.press("2+2");
    calc.equals();
    calc.clear();

    calc.recall(0);
    assert_eq!(calc.display(), "2+2");

    // Out-of-range indices are ignored.
    calc.recall(7);
    assert_eq!(calc.display(), "2+2");
}

#[test]
fn history_panel_toggle() {
    let mut calc = Calculator::new();
    assert!(!calc.is_history_open());
    calc.toggle_history();
    assert!(calc.is_history_open());
    calc.toggle_history();
    assert!(!calc.is_history_open());
}
