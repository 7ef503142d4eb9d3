//! Error types for template parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Fatal parse failures. Parsing never recovers or returns a partial
/// tree; the first violation in scan order is reported.
#[derive(Error, Debug)]
pub enum ParseError {
    /// A sibling of the same name is already registered at this level
    #[error("block '{name}' already exists at this nesting level")]
    DuplicateName { name: String, span: Span },

    /// A `USE` directive's source name resolves nowhere in the scope chain
    #[error("block '{name}' cannot be found from the current scope")]
    ReferenceNotFound { name: String, span: Span },

    /// A `RECURSION` directive's name matches no open block
    #[error("No parent block named '{name}'")]
    NoMatchingAncestor { name: String, span: Span },

    /// The nesting stack grew past the configured ceiling
    #[error("maximum nesting depth of {max} exceeded by block '{name}'")]
    MaxDepthExceeded { name: String, max: usize, span: Span },

    /// A close directive arrived with only the root on the stack
    #[error("close directive for '{name}' without an open block")]
    UnbalancedClose { name: String, span: Span },

    /// Input ended while blocks were still open
    #[error("block '{name}' is never closed")]
    UnclosedBlock { name: String, span: Span },
}

impl ParseError {
    /// The source span the error points at
    pub fn span(&self) -> Span {
        match self {
            ParseError::DuplicateName { span, .. }
            | ParseError::ReferenceNotFound { span, .. }
            | ParseError::NoMatchingAncestor { span, .. }
            | ParseError::MaxDepthExceeded { span, .. }
            | ParseError::UnbalancedClose { span, .. }
            | ParseError::UnclosedBlock { span, .. } => span.clone(),
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let span = self.span();
        let mut buf = Vec::new();
        Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.to_string())
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .unwrap();
        String::from_utf8(buf).unwrap()
    }
}
