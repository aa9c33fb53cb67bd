//! Concept mentions and the flattened rows they expand into.

use serde::{Deserialize, Serialize};

/// Identifier joining a mention's concept reference to a concept element.
///
/// This is the `xmi:id` of the referenced ontology concept.
pub type ConceptId = u64;

/// Half-open character interval `[start, end)` into the note text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a span. No ordering check; see [`Span::is_empty`].
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// True if the span covers no characters (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if `offset` lies in `[start, end)`.
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// One parsed concept-mention element, before expansion.
///
/// A mention references one or more ontology concepts; each reference
/// becomes its own [`ConceptRecord`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mention {
    /// Tag name of the mention element, e.g. `DiseaseDisorderMention`.
    pub kind: String,
    pub span: Span,
    pub negated: bool,
    pub confidence: Option<f64>,
    pub uncertainty: Option<f64>,
    pub conditional: Option<bool>,
    pub generic: Option<bool>,
    pub subject: Option<String>,
    /// Referenced concept ids, in attribute order.
    pub concept_ids: Vec<ConceptId>,
}

impl Mention {
    /// Negation rule: only a strictly positive polarity affirms.
    pub fn negated_from_polarity(polarity: i64) -> bool {
        polarity <= 0
    }

    /// Expand into one record per referenced concept.
    pub fn into_records(self) -> Vec<ConceptRecord> {
        let Mention {
            kind,
            span,
            negated,
            confidence,
            uncertainty,
            conditional,
            generic,
            subject,
            concept_ids,
        } = self;

        concept_ids
            .into_iter()
            .map(|concept_id| ConceptRecord {
                mention_kind: kind.clone(),
                concept_kind: None,
                concept_id,
                span,
                coding_scheme: None,
                cui: None,
                tui: None,
                preferred_text: None,
                score: None,
                negated,
                confidence,
                uncertainty,
                conditional,
                generic,
                subject: subject.clone(),
                part_of_speech: None,
                reconstructed_text: String::new(),
            })
            .collect()
    }
}

/// One row of the flattened output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConceptRecord {
    /// Tag name of the mention that produced this row.
    pub mention_kind: String,
    /// Tag name of the resolved concept element; `None` until resolved.
    pub concept_kind: Option<String>,
    pub concept_id: ConceptId,
    pub span: Span,
    pub coding_scheme: Option<String>,
    pub cui: Option<String>,
    pub tui: Option<String>,
    pub preferred_text: Option<String>,
    pub score: Option<f64>,
    pub negated: bool,
    pub confidence: Option<f64>,
    pub uncertainty: Option<f64>,
    pub conditional: Option<bool>,
    pub generic: Option<bool>,
    pub subject: Option<String>,
    /// POS tag of the token starting exactly at `span.start`.
    pub part_of_speech: Option<String>,
    /// Space-joined forms of the tokens starting inside `span`.
    pub reconstructed_text: String,
}

impl ConceptRecord {
    /// True once a concept element has been joined onto this row.
    pub fn is_resolved(&self) -> bool {
        self.concept_kind.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mention(ids: Vec<ConceptId>) -> Mention {
        Mention {
            kind: "SignSymptomMention".to_string(),
            span: Span::new(10, 20),
            negated: false,
            confidence: Some(0.5),
            uncertainty: None,
            conditional: Some(false),
            generic: None,
            subject: Some("patient".to_string()),
            concept_ids: ids,
        }
    }

    #[test]
    fn test_span_half_open() {
        let span = Span::new(10, 20);
        assert!(span.contains(10));
        assert!(span.contains(19));
        assert!(!span.contains(20));
        assert!(!span.contains(9));
        assert_eq!(span.len(), 10);
        assert_eq!(span.to_string(), "[10, 20)");
    }

    #[test]
    fn test_span_empty() {
        assert!(Span::new(5, 5).is_empty());
        assert!(Span::new(6, 5).is_empty());
        assert!(!Span::new(5, 6).is_empty());
        assert_eq!(Span::new(6, 5).len(), 0);
    }

    #[test]
    fn test_negation_rule() {
        assert!(Mention::negated_from_polarity(0));
        assert!(Mention::negated_from_polarity(-1));
        assert!(!Mention::negated_from_polarity(1));
        assert!(!Mention::negated_from_polarity(7));
    }

    #[test]
    fn test_expansion_one_record_per_concept() {
        let records = mention(vec![501, 502, 503]).into_records();
        assert_eq!(records.len(), 3);
        let ids: Vec<_> = records.iter().map(|r| r.concept_id).collect();
        assert_eq!(ids, vec![501, 502, 503]);

        for record in &records {
            assert_eq!(record.mention_kind, "SignSymptomMention");
            assert_eq!(record.span, Span::new(10, 20));
            assert_eq!(record.confidence, Some(0.5));
            assert_eq!(record.subject.as_deref(), Some("patient"));
            assert!(!record.is_resolved());
            assert!(record.reconstructed_text.is_empty());
        }
    }

    #[test]
    fn test_expansion_without_concepts() {
        assert!(mention(vec![]).into_records().is_empty());
    }
}
