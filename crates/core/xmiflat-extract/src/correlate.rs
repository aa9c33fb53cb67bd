//! Token correlation: reconstructed text and part-of-speech per record.
//!
//! A token belongs to a record when the token's *start* lies in the
//! record's half-open span; the token need not end inside it. The index
//! keeps token positions stable-sorted by start, so each record is a
//! binary-search range query. Ties keep document order.

use xmiflat_types::{ConceptRecord, Span, Token};

/// Read-only start-offset index over a token slice.
#[derive(Debug, Clone)]
pub struct TokenIndex<'a> {
    tokens: &'a [Token],
    /// Positions into `tokens`, sorted by start offset (stable).
    by_start: Vec<usize>,
}

impl<'a> TokenIndex<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        let mut by_start: Vec<usize> = (0..tokens.len()).collect();
        by_start.sort_by_key(|&i| tokens[i].start());
        Self { tokens, by_start }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    fn lower_bound(&self, offset: usize) -> usize {
        self.by_start
            .partition_point(|&i| self.tokens[i].start() < offset)
    }

    /// Tokens starting in `[span.start, span.end)`, in document order.
    pub fn starting_within(&self, span: Span) -> Vec<&'a Token> {
        if span.is_empty() {
            return Vec::new();
        }
        let lo = self.lower_bound(span.start);
        let hi = self.lower_bound(span.end);
        let mut hits = self.by_start[lo..hi].to_vec();
        hits.sort_unstable();
        hits.into_iter().map(|i| &self.tokens[i]).collect()
    }

    /// Earliest token in document order that starts exactly at `offset`.
    pub fn first_starting_at(&self, offset: usize) -> Option<&'a Token> {
        self.by_start
            .get(self.lower_bound(offset))
            .map(|&i| &self.tokens[i])
            .filter(|token| token.start() == offset)
    }

    /// Space-joined surface forms of the tokens starting inside `span`.
    pub fn text_for(&self, span: Span) -> String {
        self.starting_within(span)
            .into_iter()
            .filter_map(|token| token.surface_form.as_deref())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fills `reconstructed_text` and `part_of_speech` on records.
#[derive(Debug, Clone)]
pub struct Correlator<'a> {
    index: TokenIndex<'a>,
}

impl<'a> Correlator<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            index: TokenIndex::new(tokens),
        }
    }

    pub fn index(&self) -> &TokenIndex<'a> {
        &self.index
    }

    /// Overwrite the derived fields of one record. Idempotent.
    pub fn correlate(&self, record: &mut ConceptRecord) {
        record.reconstructed_text = self.index.text_for(record.span);
        record.part_of_speech = self
            .index
            .first_starting_at(record.span.start)
            .and_then(|token| token.part_of_speech.clone());
    }

    pub fn correlate_all(&self, records: &mut [ConceptRecord]) {
        for record in records.iter_mut() {
            self.correlate(record);
        }
    }
}
