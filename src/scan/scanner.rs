use std::iter::Peekable;
use std::ops::Range;
use std::str::CharIndices;

use log::{debug, trace};
use smol_str::SmolStr;

use super::error::{Reporter, ScanError, ScanErrorKind};
use super::token::{Literal, Token, TokenKind};
use crate::span::Span;

/// Scans `source` into tokens, handing every lexical error to `reporter`.
///
/// The result always ends with exactly one [`TokenKind::Eof`].
pub fn scan_tokens<R: Reporter>(source: &str, reporter: R) -> Vec<Token> {
    Scanner::new(source, reporter).scan()
}

#[derive(Debug)]
pub struct Scanner<'a, R> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    tokens: Vec<Token>,
    /// `start..current` of the lexeme being recognized, in bytes.
    cursor: Range<usize>,
    line: usize,
    /// Line the current lexeme started on.
    start_line: usize,
    reporter: R,
}

impl<'a, R: Reporter> Scanner<'a, R> {
    pub fn new(source: &'a str, reporter: R) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            tokens: vec![],
            cursor: 0..0,
            line: 1,
            start_line: 1,
            reporter,
        }
    }

    pub fn scan(mut self) -> Vec<Token> {
        while !self.is_end() {
            self.cursor.start = self.cursor.end;
            self.start_line = self.line;
            self.scan_token();
        }

        let len = self.source.len();
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            lexeme: SmolStr::default(),
            literal: None,
            span: Span::new(len..len, self.line),
        });

        debug!(
            "scanned {} tokens over {} lines",
            self.tokens.len(),
            self.line
        );

        self.tokens
    }
}

impl<'a, R: Reporter> Scanner<'a, R> {
    fn is_end(&self) -> bool {
        self.cursor.end == self.source.len()
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let lexeme = SmolStr::from(&self.source[self.cursor.clone()]);
        trace!("line {}: {kind} {lexeme:?}", self.start_line);

        self.tokens.push(Token {
            kind,
            lexeme,
            literal,
            span: Span::new(self.cursor.clone(), self.start_line),
        });
    }

    fn error(&mut self, kind: ScanErrorKind) {
        let error = ScanError::new(kind, Span::new(self.cursor.clone(), self.line));
        debug!("line {}: {error}", error.line());
        self.reporter.report(&error);
    }

    fn scan_token(&mut self) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.expect_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind)
            }
            '=' => {
                let kind = if self.expect_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind)
            }
            '<' => {
                let kind = if self.expect_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind)
            }
            '>' => {
                let kind = if self.expect_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind)
            }
            '/' => {
                if self.expect_char('/') {
                    // the newline is left for the main loop to count
                    while self.expect_pred(|c| c != '\n') {}
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => (),
            '\n' => self.line += 1,
            '"' => self.string(),
            c if c.is_ascii_digit() => self.number(),
            c => self.error(ScanErrorKind::UnexpectedCharacter(c)),
        }
    }

    fn string(&mut self) {
        while let Some(c) = self.advance() {
            match c {
                '"' => {
                    let inner = self.cursor.start + 1..self.cursor.end - 1;
                    let value = SmolStr::from(&self.source[inner]);
                    self.add_literal(TokenKind::String, Some(Literal::String(value)));
                    return;
                }
                '\n' => self.line += 1,
                _ => (),
            }
        }

        self.error(ScanErrorKind::UnterminatedString);
    }

    fn number(&mut self) {
        while self.expect_pred(|c| c.is_ascii_digit()) {}

        // a trailing `.` stays out of the number
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            let _ = self.advance();

            while self.expect_pred(|c| c.is_ascii_digit()) {}
        }

        match self.source[self.cursor.clone()].parse::<f64>() {
            Ok(x) if x.is_finite() => {
                self.add_literal(TokenKind::Number, Some(Literal::Number(x)))
            }
            _ => self.error(ScanErrorKind::NumberOutOfRange),
        }
    }

    fn advance(&mut self) -> Option<char> {
        let (_, c) = self.chars.next()?;
        self.cursor.end = self
            .chars
            .peek()
            .map(|(i, _)| *i)
            .unwrap_or(self.source.len());
        Some(c)
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        self.source[self.cursor.end..].chars().nth(1)
    }

    fn expect_char(&mut self, expected: char) -> bool {
        self.expect_pred(|c| c == expected)
    }

    fn expect_pred<F>(&mut self, pred: F) -> bool
    where
        F: FnOnce(char) -> bool,
    {
        if self.peek().is_some_and(pred) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner(source: &str) -> Scanner<'_, Vec<ScanError>> {
        Scanner::new(source, vec![])
    }

    #[test]
    fn advance_steps_over_whole_chars() {
        let mut s = scanner("é+");
        assert_eq!(s.advance(), Some('é'));
        assert_eq!(s.cursor, 0..2);
        assert_eq!(s.advance(), Some('+'));
        assert_eq!(s.cursor, 0..3);
        assert!(s.is_end());
        assert_eq!(s.advance(), None);
    }

    #[test]
    fn peek_does_not_move_cursor() {
        let mut s = scanner("1.5");
        assert_eq!(s.peek(), Some('1'));
        assert_eq!(s.peek_next(), Some('.'));
        assert_eq!(s.cursor, 0..0);

        let _ = s.advance();
        assert_eq!(s.peek(), Some('.'));
        assert_eq!(s.peek_next(), Some('5'));

        let _ = s.advance();
        let _ = s.advance();
        assert_eq!(s.peek(), None);
        assert_eq!(s.peek_next(), None);
    }

    #[test]
    fn expect_only_consumes_on_match() {
        let mut s = scanner("=>");
        assert!(s.expect_char('='));
        assert!(!s.expect_char('='));
        assert_eq!(s.cursor.end, 1);
        assert!(s.expect_pred(|c| c == '>'));
        assert!(!s.expect_char('>'));
        assert!(s.is_end());
    }

    #[test]
    fn comment_leaves_newline_for_line_count() {
        let tokens = scanner("// one\n// two\n").scan();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].line(), 3);
    }

    #[test]
    fn error_span_covers_offending_char() {
        let mut errors = vec![];
        let _ = Scanner::new("+ ç", &mut errors).scan();
        assert_eq!(
            errors,
            vec![ScanError::new(
                ScanErrorKind::UnexpectedCharacter('ç'),
                Span::new(2..4, 1)
            )]
        );
    }

    #[test]
    fn huge_number_is_out_of_range() {
        let source = "9".repeat(400);
        let mut errors = vec![];
        let tokens = Scanner::new(&source, &mut errors).scan();
        assert_eq!(tokens.len(), 1);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ScanErrorKind::NumberOutOfRange);
        assert_eq!(errors[0].span.range, 0..400);
    }
}
