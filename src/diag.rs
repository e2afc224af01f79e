use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use log::warn;

use crate::scan::{Reporter, ScanError};

/// Renders each reported error to stderr with `ariadne`, and counts them.
#[derive(Debug)]
pub struct Diagnostics<'a> {
    name: &'a str,
    source: &'a str,
    count: usize,
}

impl<'a> Diagnostics<'a> {
    pub const fn new(name: &'a str, source: &'a str) -> Self {
        Self {
            name,
            source,
            count: 0,
        }
    }

    pub const fn count(&self) -> usize {
        self.count
    }
}

impl Reporter for Diagnostics<'_> {
    fn report(&mut self, error: &ScanError) {
        self.count += 1;

        let name = self.name;
        let printed = Report::build(ReportKind::Error, (name, error.span.range.clone()))
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_message(format!("[line {}] {error}", error.line()))
            .with_label(
                Label::new((name, error.span.range.clone()))
                    .with_message(error.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((name, Source::from(self.source)));

        if let Err(e) = printed {
            warn!("cannot print diagnostic for line {}: {e}", error.line());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::scan_tokens;

    #[test]
    fn counts_every_error() {
        let source = "@ + #\n\"open";
        let mut diag = Diagnostics::new("test.lox", source);
        let tokens = scan_tokens(source, &mut diag);

        assert_eq!(diag.count(), 3);
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn clean_source_has_no_errors() {
        let source = "(1 + 2) * 3;";
        let mut diag = Diagnostics::new("test.lox", source);
        let _ = scan_tokens(source, &mut diag);

        assert_eq!(diag.count(), 0);
    }
}
