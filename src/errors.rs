//! Error types with rich diagnostics using miette.
//!
//! Shape math never fails: absent coordinates default to zero and
//! malformed attribute values propagate as `NaN`. Errors exist only at the
//! markup boundary, where they carry source spans.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Errors that occur while parsing an SVG markup fragment.
#[derive(Error, Diagnostic, Debug)]
pub enum ParseError {
    #[error("malformed svg fragment: {message}")]
    #[diagnostic(code(easel::parse::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid syntax here")]
        span: SourceSpan,
    },

    #[error("mismatched closing tag: expected </{expected}>, found </{found}>")]
    #[diagnostic(code(easel::parse::mismatched_closing_tag))]
    MismatchedClosingTag {
        expected: String,
        found: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("closing tag here")]
        span: SourceSpan,
    },
}

impl ParseError {
    /// Wrap a pest error, preserving its input location as a span.
    pub(crate) fn syntax<R: pest::RuleType>(markup: &str, err: pest::error::Error<R>) -> Self {
        let span = match err.location {
            pest::error::InputLocation::Pos(p) => SourceSpan::from(p..p),
            pest::error::InputLocation::Span((s, e)) => SourceSpan::from(s..e),
        };
        ParseError::Syntax {
            message: err.variant.message().into_owned(),
            src: NamedSource::new("<markup>", markup.to_string()),
            span,
        }
    }
}
