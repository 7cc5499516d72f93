/// Represents a lexical token in the rule text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the rule grammar.
///
/// Tokens carry no source position; errors reference the token's rendering
/// instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `29.84`.
    Number(f64),
    /// String literal tokens, delimited by `'` or `"`.
    String(String),
    /// Identifier tokens; variable names such as `HydroDone`, `100% PSI` or
    /// `Q1:Visible/Unobstructed`.
    Identifier(String),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%` (only when resolved as the modulo operator)
    Percent,
    /// `**`
    Power,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `NOT`
    Not,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `=` or `==`
    Equal,
    /// `!=`
    NotEqual,
    /// `===`
    StrictEqual,
    /// `!==`
    StrictNotEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `IN`
    In,
    /// `NOT IN`, fused from the two keywords
    NotIn,
    /// `?`
    Question,
    /// `:`
    Colon,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `,`
    Comma,
    /// End of input. Also produced for a lone `&` or `|` and for any
    /// unrecognized character, silently truncating the stream.
    Eof,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "'{s}'"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Star => write!(f, "*"),
            Self::Slash => write!(f, "/"),
            Self::Percent => write!(f, "%"),
            Self::Power => write!(f, "**"),
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Not => write!(f, "NOT"),
            Self::LogicalAnd => write!(f, "&&"),
            Self::LogicalOr => write!(f, "||"),
            Self::Equal => write!(f, "=="),
            Self::NotEqual => write!(f, "!="),
            Self::StrictEqual => write!(f, "==="),
            Self::StrictNotEqual => write!(f, "!=="),
            Self::Greater => write!(f, ">"),
            Self::GreaterEqual => write!(f, ">="),
            Self::Less => write!(f, "<"),
            Self::LessEqual => write!(f, "<="),
            Self::In => write!(f, "IN"),
            Self::NotIn => write!(f, "NOT IN"),
            Self::Question => write!(f, "?"),
            Self::Colon => write!(f, ":"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::LBracket => write!(f, "["),
            Self::RBracket => write!(f, "]"),
            Self::Comma => write!(f, ","),
            Self::Eof => write!(f, "EOF"),
        }
    }
}

/// Returns `true` if `c` can begin an identifier.
fn is_identifier_start(c: char) -> bool {
    c.is_alphanumeric()
}

/// Returns `true` if `c` can continue an identifier.
///
/// Identifiers may contain letters, digits and the punctuation that appears
/// in free-form variable names (`Q1:Visible/Unobstructed`, `WU-SP`). `%` is
/// handled separately because it is ambiguous with the modulo operator.
fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ':' | '/' | '_' | '-' | '?')
}

/// Converts rule text into a sequence of [`Token`]s.
///
/// The lexer is single-use: one instance tokenizes one expression. It works
/// over an index-addressable character buffer so the context-sensitive rules
/// (`%` disambiguation, digit-led identifier spans, `NOT IN` fusion) can use
/// plain lookahead and cursor save/restore rather than backtracking.
///
/// # Example
/// ```
/// use ruleval::interpreter::lexer::{Lexer, Token};
///
/// let tokens = Lexer::new("HydroDone + 5").tokenize();
/// assert_eq!(tokens,
///            vec![Token::Identifier("HydroDone".to_string()),
///                 Token::Plus,
///                 Token::Number(5.0),
///                 Token::Eof]);
/// ```
pub struct Lexer {
    chars:    Vec<char>,
    index:    usize,
    /// The most recently emitted token, consulted when deciding whether a
    /// `%` is the modulo operator.
    previous: Token,
}

impl Lexer {
    /// Creates a lexer over the given rule text.
    #[must_use]
    pub fn new(input: &str) -> Self {
        Self { chars:    input.chars().collect(),
               index:    0,
               previous: Token::Eof, }
    }

    /// Tokenizes the whole input, including the terminating [`Token::Eof`].
    ///
    /// A lone `&` or `|` (and any unrecognized character) produces `Eof`
    /// early, truncating the stream at that point.
    #[must_use]
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token == Token::Eof;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// Returns the next token, advancing the cursor.
    ///
    /// Once the input is exhausted this returns [`Token::Eof`] forever; over-
    /// reading is not an error.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan_token();
        self.previous = token.clone();
        token
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let c = match self.peek() {
            Some(c) => c,
            None => return Token::Eof,
        };

        if c.is_ascii_digit() {
            // A leading digit does not guarantee a number: `100% PSI` and
            // `30-Day Total` are identifiers.
            if self.digit_span_has_letter() {
                return self.read_identifier();
            }
            return self.read_number();
        }
        if c == '\'' || c == '"' {
            return self.read_string();
        }
        if c == '%' {
            if self.percent_is_modulo() {
                self.index += 1;
                return Token::Percent;
            }
            return self.read_identifier();
        }
        if is_identifier_start(c) {
            return self.read_identifier();
        }

        self.index += 1;

        match c {
            '+' => Token::Plus,
            '-' => Token::Minus,
            '*' => {
                if self.match_char('*') {
                    Token::Power
                } else {
                    Token::Star
                }
            },
            '/' => Token::Slash,
            '?' => Token::Question,
            ':' => Token::Colon,
            '(' => Token::LParen,
            ')' => Token::RParen,
            '[' => Token::LBracket,
            ']' => Token::RBracket,
            ',' => Token::Comma,
            '=' => {
                if self.match_char('=') {
                    if self.match_char('=') {
                        Token::StrictEqual
                    } else {
                        Token::Equal
                    }
                } else {
                    Token::Equal
                }
            },
            '!' => {
                if self.match_char('=') {
                    if self.match_char('=') {
                        Token::StrictNotEqual
                    } else {
                        Token::NotEqual
                    }
                } else {
                    Token::Not
                }
            },
            '>' => {
                if self.match_char('=') {
                    Token::GreaterEqual
                } else {
                    Token::Greater
                }
            },
            '<' => {
                if self.match_char('=') {
                    Token::LessEqual
                } else {
                    Token::Less
                }
            },
            '&' => {
                if self.match_char('&') {
                    Token::LogicalAnd
                } else {
                    Token::Eof
                }
            },
            '|' => {
                if self.match_char('|') {
                    Token::LogicalOr
                } else {
                    Token::Eof
                }
            },
            _ => Token::Eof,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.index < self.chars.len() && self.chars[self.index].is_whitespace() {
            self.index += 1;
        }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.index).copied()
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.index += 1;
            return true;
        }
        false
    }

    /// Decides whether the `%` at the cursor is the modulo operator.
    ///
    /// `%` is modulo when the previously emitted token produces a value
    /// (number, identifier, `)`, `]`) and the next non-whitespace character
    /// starts a value (alphanumeric or `(`). Otherwise it begins or
    /// continues an identifier such as `100% PSI`.
    fn percent_is_modulo(&self) -> bool {
        let value_before = matches!(self.previous,
                                    Token::Number(_)
                                    | Token::Identifier(_)
                                    | Token::RParen
                                    | Token::RBracket);
        if !value_before {
            return false;
        }

        let mut k = self.index + 1;
        while k < self.chars.len() && self.chars[k].is_whitespace() {
            k += 1;
        }
        match self.chars.get(k) {
            Some(&c) => c.is_alphanumeric() || c == '(',
            None => false,
        }
    }

    /// Looks ahead from a leading digit to the next structural boundary and
    /// reports whether the span is really an identifier.
    ///
    /// The span continues over identifier characters and the decimal point.
    /// A letter anywhere in the span, or a `%` whose next non-whitespace
    /// character is a letter, makes the span an identifier.
    fn digit_span_has_letter(&self) -> bool {
        let mut j = self.index;
        while j < self.chars.len() {
            let c = self.chars[j];
            if c.is_alphabetic() {
                return true;
            }
            if c.is_ascii_digit() || matches!(c, '.' | ':' | '/' | '_' | '-' | '?') {
                j += 1;
                continue;
            }
            if c == '%' {
                let mut k = j + 1;
                while k < self.chars.len() && self.chars[k].is_whitespace() {
                    k += 1;
                }
                return match self.chars.get(k) {
                    Some(&next) => next.is_alphabetic(),
                    None => false,
                };
            }
            break;
        }
        false
    }

    /// Reads a numeric literal: a contiguous run of digits and dots.
    ///
    /// Malformed numeric text (e.g. `1.2.3`) yields `0` rather than failing
    /// the lexer.
    fn read_number(&mut self) -> Token {
        let start = self.index;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() || c == '.' {
                self.index += 1;
            } else {
                break;
            }
        }
        let text: String = self.chars[start..self.index].iter().collect();
        Token::Number(text.parse().unwrap_or(0.0))
    }

    /// Reads a string literal delimited by `'` or `"`.
    ///
    /// No escape processing is applied. An unterminated string is read to
    /// the end of input; the parser will fail later if the expression is
    /// incomplete.
    fn read_string(&mut self) -> Token {
        let quote = self.chars[self.index];
        self.index += 1;

        let start = self.index;
        while self.index < self.chars.len() && self.chars[self.index] != quote {
            self.index += 1;
        }
        let value: String = self.chars[start..self.index].iter().collect();
        if self.index < self.chars.len() {
            self.index += 1;
        }
        Token::String(value)
    }

    /// Reads an identifier, mapping keywords and fusing `NOT IN`.
    ///
    /// Keyword recognition (`AND`, `OR`, `NOT`, `IN`) is case-insensitive
    /// and applies only to a bare identifier. After a `NOT`, the lexer looks
    /// ahead for an `IN` and fuses the pair into a single [`Token::NotIn`];
    /// the lookahead restores the cursor when no `IN` follows.
    fn read_identifier(&mut self) -> Token {
        let word = self.read_word();

        match word.to_uppercase().as_str() {
            "AND" => Token::And,
            "OR" => Token::Or,
            "IN" => Token::In,
            "NOT" => {
                if self.try_fuse_in() {
                    Token::NotIn
                } else {
                    Token::Not
                }
            },
            _ => Token::Identifier(word),
        }
    }

    /// Reads one identifier word from the cursor.
    ///
    /// A `%` inside the word always folds into it; when a letter follows the
    /// `%` after whitespace, the whitespace run collapses to a single space
    /// and the word continues (so `100% PSI` is one identifier).
    fn read_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(c) = self.peek() {
            if is_identifier_char(c) {
                word.push(c);
                self.index += 1;
            } else if c == '%' {
                word.push('%');
                self.index += 1;

                let mut k = self.index;
                while k < self.chars.len() && self.chars[k].is_whitespace() {
                    k += 1;
                }
                if k > self.index && k < self.chars.len() && self.chars[k].is_alphabetic() {
                    word.push(' ');
                    self.index = k;
                }
            } else {
                break;
            }
        }
        word
    }

    /// Looks ahead for a bare `IN` after a `NOT`, consuming it on success.
    fn try_fuse_in(&mut self) -> bool {
        let saved = self.index;

        self.skip_whitespace();
        if self.peek().is_some_and(is_identifier_start) {
            let word = self.read_word();
            if word.eq_ignore_ascii_case("in") {
                return true;
            }
        }

        self.index = saved;
        false
    }
}
