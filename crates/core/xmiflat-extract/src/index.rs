//! Record collection with a concept-id multimap.
//!
//! Reference updates are joined through `concept_id -> [row positions]`
//! instead of scanning every row. Updates are also kept after they are
//! applied, so rows created later in the document pick them up; the join
//! therefore holds whichever of mention and concept comes first.

use std::collections::HashMap;

use xmiflat_types::{ConceptId, ConceptRecord, Mention, ReferenceUpdate};

#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    records: Vec<ConceptRecord>,
    by_concept: HashMap<ConceptId, Vec<usize>>,
    resolved: HashMap<ConceptId, ReferenceUpdate>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expand `mention` into rows and append them. Returns the number added.
    pub fn insert_mention(&mut self, mention: Mention) -> usize {
        let records = mention.into_records();
        let added = records.len();
        for mut record in records {
            if let Some(update) = self.resolved.get(&record.concept_id) {
                update.apply_to(&mut record);
            }
            let position = self.records.len();
            self.by_concept
                .entry(record.concept_id)
                .or_default()
                .push(position);
            self.records.push(record);
        }
        added
    }

    /// Apply `update` to every current row with its key and remember it for
    /// rows added later. Returns the number of rows updated now.
    pub fn apply(&mut self, update: ReferenceUpdate) -> usize {
        let mut matched = 0;
        if let Some(positions) = self.by_concept.get(&update.key) {
            for &position in positions {
                update.apply_to(&mut self.records[position]);
                matched += 1;
            }
        }
        self.resolved.insert(update.key, update);
        matched
    }

    /// Row positions currently sharing `concept_id`.
    pub fn positions(&self, concept_id: ConceptId) -> &[usize] {
        self.by_concept
            .get(&concept_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of reference updates whose key matches no row.
    pub fn unmatched_references(&self) -> usize {
        self.resolved
            .keys()
            .filter(|key| !self.by_concept.contains_key(key))
            .count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ConceptRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<ConceptRecord> {
        self.records
    }
}
