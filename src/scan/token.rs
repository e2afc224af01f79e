use std::fmt;

use smol_str::SmolStr;

use crate::span::Span;

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Exact source text of the lexeme, empty for [`TokenKind::Eof`].
    pub lexeme: SmolStr,
    pub literal: Option<Literal>,
    pub span: Span,
}

impl Token {
    pub fn line(&self) -> usize {
        self.span.line
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// ```text
/// NUMBER      -> DIGIT+ ( "." DIGIT+ )? ;
/// STRING      -> '"' <any char except '"'>* '"' ;
/// DIGIT       -> "0" ... "9" ;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `-`
    Minus,
    /// `+`
    Plus,
    /// `;`
    Semicolon,
    /// `/`
    Slash,
    /// `*`
    Star,
    /// `!`
    Bang,
    /// `!=`
    BangEqual,
    /// `=`
    Equal,
    /// `==`
    EqualEqual,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// string literal
    String,
    /// number literal
    Number,
    /// End of file
    Eof,
}

/// Decoded value of a literal token.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Number(f64),
    /// Text between the quotes, backslashes kept as they are.
    String(SmolStr),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Minus => "MINUS",
            TokenKind::Plus => "PLUS",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Slash => "SLASH",
            TokenKind::Star => "STAR",
            TokenKind::Bang => "BANG",
            TokenKind::BangEqual => "BANG_EQUAL",
            TokenKind::Equal => "EQUAL",
            TokenKind::EqualEqual => "EQUAL_EQUAL",
            TokenKind::Greater => "GREATER",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::String => "STRING",
            TokenKind::Number => "NUMBER",
            TokenKind::Eof => "EOF",
        };

        f.write_str(s)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // `{:?}` keeps the fractional part, `123` prints as `123.0`
            Literal::Number(x) => write!(f, "{x:?}"),
            Literal::String(s) => f.write_str(s),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ", self.kind, self.lexeme)?;
        match &self.literal {
            Some(lit) => write!(f, "{lit}"),
            None => f.write_str("nil"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(kind: TokenKind, lexeme: &str, literal: Option<Literal>) -> Token {
        Token {
            kind,
            lexeme: lexeme.into(),
            literal,
            span: Span::new(0..lexeme.len(), 1),
        }
    }

    #[test]
    fn display_punctuation() {
        let t = token(TokenKind::LessEqual, "<=", None);
        assert_eq!(t.to_string(), "LESS_EQUAL <= nil");
    }

    #[test]
    fn display_literals() {
        let n = token(TokenKind::Number, "123", Some(Literal::Number(123.0)));
        assert_eq!(n.to_string(), "NUMBER 123 123.0");

        let s = token(
            TokenKind::String,
            r#""hi\n""#,
            Some(Literal::String(r"hi\n".into())),
        );
        assert_eq!(s.to_string(), r#"STRING "hi\n" hi\n"#);
    }

    #[test]
    fn display_eof() {
        let t = token(TokenKind::Eof, "", None);
        assert!(t.is_eof());
        assert_eq!(t.to_string(), "EOF  nil");
    }
}
