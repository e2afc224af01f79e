pub mod cli;
mod diag;
mod scan;
mod span;

pub use diag::Diagnostics;
pub use scan::{
    scan_tokens, Literal, Reporter, ScanError, ScanErrorKind, Scanner, Token, TokenKind,
};
pub use span::Span;

/// Scans `source`, printing every token to stdout and every error to stderr.
///
/// Returns how many errors were reported.
pub fn run(name: &str, source: &str) -> usize {
    let mut diag = Diagnostics::new(name, source);

    for token in scan_tokens(source, &mut diag) {
        println!("{token}");
    }

    diag.count()
}
