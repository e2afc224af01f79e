use std::fmt;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    UnexpectedCharacter(char),
    UnterminatedString,
    /// Digits decode to a value past `f64::MAX`.
    NumberOutOfRange,
}

/// A lexical error. Never fatal, the scanner keeps going after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub span: Span,
}

impl ScanError {
    pub const fn new(kind: ScanErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn line(&self) -> usize {
        self.span.line
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ScanErrorKind::UnexpectedCharacter(c) => write!(f, "unexpected character `{c}`"),
            ScanErrorKind::UnterminatedString => f.write_str("unterminated string"),
            ScanErrorKind::NumberOutOfRange => f.write_str("number literal out of range"),
        }
    }
}

impl std::error::Error for ScanError {}

/// Sink for lexical errors.
///
/// The scanner calls [`Reporter::report`] once per error and carries on, so
/// whether an error stops the pipeline is up to the implementor.
pub trait Reporter {
    fn report(&mut self, error: &ScanError);
}

impl Reporter for Vec<ScanError> {
    fn report(&mut self, error: &ScanError) {
        self.push(error.clone());
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, error: &ScanError) {
        (**self).report(error)
    }
}
