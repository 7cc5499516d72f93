use ruleval::{evaluate, ParseError, RuleError, RuntimeError, Value, Variables};

fn vars(pairs: &[(&str, Value)]) -> Variables {
    pairs.iter()
         .map(|(name, value)| ((*name).to_string(), value.clone()))
         .collect()
}

fn eval_number(src: &str, variables: &Variables) -> f64 {
    match evaluate(src, variables) {
        Ok(Value::Number(n)) => n,
        other => panic!("Rule '{src}' did not produce a number: {other:?}"),
    }
}

fn eval_bool(src: &str, variables: &Variables) -> bool {
    match evaluate(src, variables) {
        Ok(Value::Bool(b)) => b,
        other => panic!("Rule '{src}' did not produce a boolean: {other:?}"),
    }
}

#[test]
fn arithmetic_over_variables() {
    let variables = vars(&[("A", Value::Number(5.0)), ("B", Value::Number(12.0))]);

    assert_eq!(eval_number("A + B", &variables), 17.0);
    assert_eq!(eval_number("A - B", &variables), -7.0);
    assert_eq!(eval_number("A * B", &variables), 60.0);
    assert_eq!(eval_number("B / A", &variables), 2.4);
}

#[test]
fn power_operator() {
    let variables = vars(&[("A", Value::Number(3.0))]);

    assert_eq!(eval_number("A ** 2", &variables), 9.0);
    // ** is right-associative: 2 ** 3 ** 2 == 2 ** 9
    assert_eq!(eval_number("2 ** 3 ** 2", &Variables::new()), 512.0);
}

#[test]
fn modulo_operator() {
    assert_eq!(eval_number("10 % 3", &Variables::new()), 1.0);
    assert_eq!(eval_number("10 % 4", &Variables::new()), 2.0);
}

#[test]
fn division_by_zero_is_error() {
    let variables = vars(&[("X", Value::Number(5.0))]);

    assert!(matches!(evaluate("X / 0", &variables),
                     Err(RuleError::Runtime(RuntimeError::DivisionByZero))));
    assert!(matches!(evaluate("X % 0", &variables),
                     Err(RuleError::Runtime(RuntimeError::DivisionByZero))));
}

#[test]
fn power_has_no_zero_check() {
    assert_eq!(eval_number("0 ** 0", &Variables::new()), 1.0);
}

#[test]
fn logical_and_short_circuits() {
    let empty = Variables::new();

    // the right operand is never evaluated, so no DivisionByZero
    assert!(!eval_bool("false AND (1/0)", &empty));
    assert!(eval_bool("true OR (1/0)", &empty));
}

#[test]
fn logical_operators_both_spellings() {
    let empty = Variables::new();

    assert!(eval_bool("true AND true", &empty));
    assert!(!eval_bool("true && false", &empty));
    assert!(eval_bool("false || true", &empty));
    assert!(!eval_bool("false OR false", &empty));
}

#[test]
fn logical_operands_are_coerced() {
    let empty = Variables::new();

    assert!(eval_bool("1 AND 'true'", &empty));
    assert!(!eval_bool("'' OR 0", &empty));
}

#[test]
fn ternary_evaluates_exactly_one_branch() {
    let empty = Variables::new();

    assert_eq!(eval_number("true ? 1 : (1/0)", &empty), 1.0);
    assert_eq!(eval_number("false ? (1/0) : 2", &empty), 2.0);
}

#[test]
fn ternary_is_right_associative() {
    let empty = Variables::new();

    assert_eq!(eval_number("false ? 1 : true ? 2 : 3", &empty), 2.0);
}

#[test]
fn membership_is_case_insensitive() {
    let variables = vars(&[("Type", Value::from("cg"))]);

    assert!(eval_bool("Type IN ['CG', 'SP', 'WU-SP']", &variables));
    assert!(!eval_bool("Type NOT IN ['CG', 'SP', 'WU-SP']", &variables));
}

#[test]
fn membership_and_its_negation_are_complementary() {
    let variables = vars(&[("Type", Value::from("CO2"))]);

    for list in ["['CG', 'SP']", "['co2']", "[]"] {
        let is_in = eval_bool(&format!("Type IN {list}"), &variables);
        let not_in = eval_bool(&format!("Type NOT IN {list}"), &variables);
        assert_ne!(is_in, not_in, "IN and NOT IN agreed for {list}");
    }
}

#[test]
fn membership_compares_renderings() {
    let empty = Variables::new();

    // numbers and numeric strings render identically
    assert!(eval_bool("3 IN [1 + 2, 4]", &empty));
    assert!(eval_bool("'5' IN [5]", &empty));
}

#[test]
fn membership_requires_a_list() {
    assert!(matches!(evaluate("'a' IN 'abc'", &Variables::new()),
                     Err(RuleError::Runtime(RuntimeError::InvalidMembershipOperand))));
}

#[test]
fn empty_list_membership() {
    let empty = Variables::new();

    assert!(!eval_bool("1 IN []", &empty));
    assert!(eval_bool("1 NOT IN []", &empty));
}

#[test]
fn equality_compares_renderings() {
    let empty = Variables::new();

    assert!(eval_bool("5 == '5'", &empty));
    assert!(!eval_bool("5 != '5'", &empty));
    assert!(eval_bool("'CG' == 'CG'", &empty));
    assert!(eval_bool("5 = 5", &empty));
}

#[test]
fn strict_equality_also_compares_kinds() {
    let empty = Variables::new();

    assert!(!eval_bool("5 === '5'", &empty));
    assert!(eval_bool("5 !== '5'", &empty));
    assert!(eval_bool("5 === 5", &empty));
    assert!(eval_bool("'CG' === 'CG'", &empty));
}

#[test]
fn relational_comparisons() {
    let empty = Variables::new();

    assert!(eval_bool("5 > 3", &empty));
    assert!(eval_bool("3 <= 3", &empty));
    assert!(!eval_bool("2 >= 3", &empty));
    // operands are coerced to numbers
    assert!(eval_bool("'12' > 5", &empty));
}

#[test]
fn unary_operators() {
    let variables = vars(&[("X", Value::Number(5.0))]);

    assert_eq!(eval_number("-X", &variables), -5.0);
    assert_eq!(eval_number("-'3'", &variables), -3.0);
    assert!(eval_bool("NOT 0", &variables));
    assert!(!eval_bool("NOT 'true'", &variables));
}

#[test]
fn missing_variable_is_error() {
    let variables = vars(&[("A", Value::Number(1.0))]);

    match evaluate("A + B", &variables) {
        Err(RuleError::Runtime(RuntimeError::MissingVariable { name })) => {
            assert_eq!(name, "B");
        },
        other => panic!("Expected MissingVariable, got {other:?}"),
    }
}

#[test]
fn evaluation_is_pure() {
    let variables = vars(&[("Type", Value::from("FOAM")), ("HydroDone", Value::Number(7.0))]);
    let rule = "Type IN ['CG','CO'] ? 12 : (Type IN ['FOAM'] ? HydroDone + 5 : 0)";

    let first = evaluate(rule, &variables).unwrap();
    let second = evaluate(rule, &variables).unwrap();
    assert_eq!(first, second);
}

#[test]
fn multi_word_variable_names_resolve() {
    let variables = vars(&[("Passed Tests", Value::Number(5.0)),
                           ("Failed Tests", Value::Number(12.0))]);

    assert_eq!(eval_number("Passed Tests + Failed Tests", &variables), 17.0);
    assert_eq!(eval_number("Passed Tests - Failed Tests", &variables), -7.0);
}

#[test]
fn punctuated_variable_names_resolve() {
    let variables = vars(&[("Q1:Visible/Unobstructed", Value::from("✔")),
                           ("Q2:LockPin/Seal", Value::from("✔"))]);

    assert!(eval_bool("Q1:Visible/Unobstructed === '✔' && Q2:LockPin/Seal === '✔'",
                      &variables));
}

#[test]
fn digit_led_variable_names_resolve() {
    let variables = vars(&[("100% PSI", Value::Number(4.0)), ("30-Day Total", Value::Number(2.0))]);

    assert_eq!(eval_number("100% PSI + 1", &variables), 5.0);
    assert_eq!(eval_number("30-Day Total * 2", &variables), 4.0);
}

#[test]
fn variable_resolution_fallbacks() {
    let variables = vars(&[("100% PSI", Value::Number(4.0)), ("Site:HydroDone", Value::Number(7.0))]);

    // case-insensitive
    assert_eq!(eval_number("(100% psi)", &variables), 4.0);
    // suffix match supports namespaced keys
    assert_eq!(eval_number("HydroDone", &variables), 7.0);
    // normalized match reconciles spacing/percent variants
    assert_eq!(eval_number("(100%PSI)", &variables), 4.0);
}

#[test]
fn nested_ternary_selects_the_right_branch() {
    let rule = "Type IN ['CG','CO'] ? 12 : (Type IN ['FOAM'] ? HydroDone + 5 : 0)";

    let cg = vars(&[("Type", Value::from("CG")), ("HydroDone", Value::Number(0.0))]);
    assert_eq!(eval_number(rule, &cg), 12.0);

    let foam = vars(&[("Type", Value::from("FOAM")), ("HydroDone", Value::Number(7.0))]);
    assert_eq!(eval_number(rule, &foam), 12.0);

    let other = vars(&[("Type", Value::from("DRY")), ("HydroDone", Value::Number(7.0))]);
    assert_eq!(eval_number(rule, &other), 0.0);
}

#[test]
fn inspection_rule_end_to_end() {
    let variables = vars(&[("PassAll", Value::from("")),
                           ("Q1:Visible/Unobstructed", Value::from("✔")),
                           ("Q2:LockPin/Seal", Value::from("✔")),
                           ("Q3", Value::from("✔")),
                           ("Q4", Value::from("✔")),
                           ("Q5", Value::from("✔")),
                           ("Q6", Value::from("✔"))]);

    let rule = "PassAll === '✔' ? 'OK' : \
                (Q1:Visible/Unobstructed === '✔' && \
                 Q2:LockPin/Seal === '✔' && \
                 Q3 === '✔' && \
                 Q4 === '✔' && \
                 Q5 === '✔' && \
                 Q6 === '✔' ? 'OK' : 'Not OK')";

    assert_eq!(evaluate(rule, &variables).unwrap(), Value::from("OK"));
}

#[test]
fn psi_formula_end_to_end() {
    let variables = vars(&[("Discharge Coefficient", Value::Number(1.0)),
                           ("Nozzle Diameter", Value::Number(2.0)),
                           ("100% PSI", Value::Number(4.0))]);

    let rule = "29.84 * (Discharge Coefficient) * ((Nozzle Diameter) ** 2) * ((100% PSI) ** (1/2))";

    let result = eval_number(rule, &variables);
    assert!((result - 238.72).abs() < 1e-9, "got {result}");
}

#[test]
fn string_coercion_in_arithmetic() {
    let empty = Variables::new();

    // blank text coerces to zero
    assert_eq!(eval_number("'' + 5", &empty), 5.0);
    assert_eq!(eval_number("'  ' + 5", &empty), 5.0);
    assert_eq!(eval_number("'3' * '4'", &empty), 12.0);
}

#[test]
fn non_numeric_text_fails_coercion() {
    match evaluate("'abc' + 1", &Variables::new()) {
        Err(RuleError::Runtime(RuntimeError::TypeMismatch { expected, found })) => {
            assert_eq!(expected, "Number");
            assert_eq!(found, "abc");
        },
        other => panic!("Expected TypeMismatch, got {other:?}"),
    }
}

#[test]
fn non_boolean_condition_fails_coercion() {
    assert!(matches!(evaluate("'maybe' ? 1 : 2", &Variables::new()),
                     Err(RuleError::Runtime(RuntimeError::TypeMismatch { .. }))));
}

#[test]
fn empty_string_condition_is_false() {
    let variables = vars(&[("X", Value::from(""))]);

    assert_eq!(eval_number("X ? 1 : 2", &variables), 2.0);
}

#[test]
fn list_values_from_the_bag() {
    let variables = vars(&[("Allowed",
                            Value::List(vec![Value::from("CG"), Value::from("CO")])),
                           ("Type", Value::from("co"))]);

    assert!(eval_bool("Type IN Allowed", &variables));
}

#[test]
fn trailing_tokens_are_rejected() {
    match evaluate("5 5", &Variables::new()) {
        Err(RuleError::Parse(ParseError::UnexpectedToken { token })) => {
            assert_eq!(token, "5");
        },
        other => panic!("Expected UnexpectedToken, got {other:?}"),
    }
}

#[test]
fn open_constructs_fail_on_end_of_input() {
    let empty = Variables::new();

    assert!(matches!(evaluate("(1 + 2", &empty),
                     Err(RuleError::Parse(ParseError::UnexpectedEndOfInput))));
    assert!(matches!(evaluate("[1, 2", &empty),
                     Err(RuleError::Parse(ParseError::UnexpectedEndOfInput))));
    assert!(matches!(evaluate("1 +", &empty),
                     Err(RuleError::Parse(ParseError::UnexpectedEndOfInput))));
}

#[test]
fn trailing_comma_in_list_is_rejected() {
    assert!(matches!(evaluate("1 IN ['a',]", &Variables::new()),
                     Err(RuleError::Parse(ParseError::UnexpectedToken { .. }))));
}

#[test]
fn lone_ampersand_truncates_the_stream() {
    // A lone `&` lexes as end-of-input, so the rest of the rule is silently
    // dropped and the expression evaluates as just `A`. Inherited behavior,
    // kept for parity with existing rule text.
    let variables = vars(&[("A", Value::Number(1.0)), ("B", Value::Number(2.0))]);

    assert_eq!(eval_number("A & B", &variables), 1.0);
}

#[test]
fn unterminated_string_reads_to_end() {
    assert_eq!(evaluate("'abc", &Variables::new()).unwrap(), Value::from("abc"));
    assert!(matches!(evaluate("('abc", &Variables::new()),
                     Err(RuleError::Parse(ParseError::UnexpectedEndOfInput))));
}

#[test]
fn malformed_number_yields_zero() {
    assert_eq!(eval_number("1.2.3 + 1", &Variables::new()), 1.0);
}

#[test]
fn deeply_nested_expression_is_rejected() {
    let mut rule = String::new();
    for _ in 0..300 {
        rule.push('(');
    }
    rule.push('1');
    for _ in 0..300 {
        rule.push(')');
    }

    assert!(matches!(evaluate(&rule, &Variables::new()),
                     Err(RuleError::Parse(ParseError::ExpressionTooDeep))));
}

#[test]
fn moderately_nested_expression_is_fine() {
    let mut rule = String::new();
    for _ in 0..50 {
        rule.push('(');
    }
    rule.push('1');
    for _ in 0..50 {
        rule.push(')');
    }

    assert_eq!(eval_number(&rule, &Variables::new()), 1.0);
}

#[test]
fn operator_precedence() {
    let empty = Variables::new();

    assert_eq!(eval_number("1 + 2 * 3", &empty), 7.0);
    assert_eq!(eval_number("(1 + 2) * 3", &empty), 9.0);
    assert_eq!(eval_number("2 * 3 ** 2", &empty), 18.0);
    assert!(eval_bool("1 + 1 == 2 AND 2 + 2 == 4", &empty));
    assert!(eval_bool("false AND false OR true", &empty));
}
