use ruleval::interpreter::lexer::{Lexer, Token};

fn tokens(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

fn identifier(name: &str) -> Token {
    Token::Identifier(name.to_string())
}

fn string(text: &str) -> Token {
    Token::String(text.to_string())
}

#[test]
fn basic_expression() {
    assert_eq!(tokens("HydroDone + 5"),
               vec![identifier("HydroDone"), Token::Plus, Token::Number(5.0), Token::Eof]);
}

#[test]
fn membership_rule() {
    assert_eq!(tokens("Type IN ['CG', 'SP']"),
               vec![identifier("Type"),
                    Token::In,
                    Token::LBracket,
                    string("CG"),
                    Token::Comma,
                    string("SP"),
                    Token::RBracket,
                    Token::Eof]);
}

#[test]
fn keywords_are_case_insensitive() {
    assert_eq!(tokens("a and b or c"),
               vec![identifier("a"),
                    Token::And,
                    identifier("b"),
                    Token::Or,
                    identifier("c"),
                    Token::Eof]);
}

#[test]
fn not_in_is_fused() {
    assert_eq!(tokens("Type NOT IN ['CG']"),
               vec![identifier("Type"),
                    Token::NotIn,
                    Token::LBracket,
                    string("CG"),
                    Token::RBracket,
                    Token::Eof]);
}

#[test]
fn not_without_in_stays_not() {
    assert_eq!(tokens("NOT Inbound"),
               vec![Token::Not, identifier("Inbound"), Token::Eof]);
}

#[test]
fn digit_led_span_with_letter_is_an_identifier() {
    assert_eq!(tokens("100% PSI"), vec![identifier("100% PSI"), Token::Eof]);
    assert_eq!(tokens("30-Day"), vec![identifier("30-Day"), Token::Eof]);
    assert_eq!(tokens("100%PSI"), vec![identifier("100%PSI"), Token::Eof]);
}

#[test]
fn percent_after_a_value_is_modulo() {
    assert_eq!(tokens("10 % 3"),
               vec![Token::Number(10.0), Token::Percent, Token::Number(3.0), Token::Eof]);
    assert_eq!(tokens("(10) % x"),
               vec![Token::LParen,
                    Token::Number(10.0),
                    Token::RParen,
                    Token::Percent,
                    identifier("x"),
                    Token::Eof]);
}

#[test]
fn percent_inside_a_name_is_folded() {
    assert_eq!(tokens("CG%Value"), vec![identifier("CG%Value"), Token::Eof]);
}

#[test]
fn punctuated_identifiers_are_single_tokens() {
    assert_eq!(tokens("Q1:Visible/Unobstructed"),
               vec![identifier("Q1:Visible/Unobstructed"), Token::Eof]);
}

#[test]
fn multi_word_names_are_separate_identifier_tokens() {
    // the parser merges these in primary position
    assert_eq!(tokens("Passed Tests"),
               vec![identifier("Passed"), identifier("Tests"), Token::Eof]);
}

#[test]
fn operators_are_greedily_matched() {
    assert_eq!(tokens("a == b === c"),
               vec![identifier("a"),
                    Token::Equal,
                    identifier("b"),
                    Token::StrictEqual,
                    identifier("c"),
                    Token::Eof]);
    assert_eq!(tokens("a != b !== c"),
               vec![identifier("a"),
                    Token::NotEqual,
                    identifier("b"),
                    Token::StrictNotEqual,
                    identifier("c"),
                    Token::Eof]);
    assert_eq!(tokens("2 ** 3"),
               vec![Token::Number(2.0), Token::Power, Token::Number(3.0), Token::Eof]);
    assert_eq!(tokens("a >= b <= c"),
               vec![identifier("a"),
                    Token::GreaterEqual,
                    identifier("b"),
                    Token::LessEqual,
                    identifier("c"),
                    Token::Eof]);
}

#[test]
fn single_equals_is_equality() {
    assert_eq!(tokens("a = b"),
               vec![identifier("a"), Token::Equal, identifier("b"), Token::Eof]);
}

#[test]
fn symbolic_logical_operators() {
    assert_eq!(tokens("a && b || c"),
               vec![identifier("a"),
                    Token::LogicalAnd,
                    identifier("b"),
                    Token::LogicalOr,
                    identifier("c"),
                    Token::Eof]);
}

#[test]
fn lone_ampersand_or_pipe_ends_the_stream() {
    // inherited dead end: the rest of the input is silently dropped
    assert_eq!(tokens("a & b"), vec![identifier("a"), Token::Eof]);
    assert_eq!(tokens("a | b"), vec![identifier("a"), Token::Eof]);
}

#[test]
fn string_literals_accept_both_quotes() {
    assert_eq!(tokens("'CG' \"CO\""), vec![string("CG"), string("CO"), Token::Eof]);
}

#[test]
fn unterminated_string_reads_to_end_of_input() {
    assert_eq!(tokens("'abc"), vec![string("abc"), Token::Eof]);
}

#[test]
fn malformed_number_becomes_zero() {
    assert_eq!(tokens("1.2.3"), vec![Token::Number(0.0), Token::Eof]);
}

#[test]
fn over_reading_returns_eof_forever() {
    let mut lexer = Lexer::new("x");
    assert_eq!(lexer.next_token(), identifier("x"));
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
    assert_eq!(lexer.next_token(), Token::Eof);
}

#[test]
fn ternary_tokens() {
    assert_eq!(tokens("a ? 1 : 2"),
               vec![identifier("a"),
                    Token::Question,
                    Token::Number(1.0),
                    Token::Colon,
                    Token::Number(2.0),
                    Token::Eof]);
}
