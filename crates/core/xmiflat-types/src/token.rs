//! Word-level tokens from the syntax type system.

use serde::{Deserialize, Serialize};

use crate::Span;

/// A position-tagged surface form with its part-of-speech tag.
///
/// Built from a dependency node; immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub span: Span,
    pub part_of_speech: Option<String>,
    pub surface_form: Option<String>,
}

impl Token {
    pub fn new(
        span: Span,
        part_of_speech: Option<String>,
        surface_form: Option<String>,
    ) -> Self {
        Self {
            span,
            part_of_speech,
            surface_form,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start
    }
}
