//! Ontology concept references joined onto concept records.

use serde::{Deserialize, Serialize};

use crate::{ConceptId, ConceptRecord};

/// Payload of one concept-reference element, keyed by its `xmi:id`.
///
/// Never emitted as a row; it overwrites the concept fields of every
/// record whose `concept_id` equals `key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceUpdate {
    pub key: ConceptId,
    /// Tag name of the concept element, e.g. `UmlsConcept`.
    pub concept_kind: String,
    pub coding_scheme: Option<String>,
    pub cui: Option<String>,
    pub preferred_text: Option<String>,
    pub tui: Option<String>,
    pub score: Option<f64>,
}

impl ReferenceUpdate {
    /// Whether this update targets `record`.
    pub fn matches(&self, record: &ConceptRecord) -> bool {
        record.concept_id == self.key
    }

    /// Overwrite the concept field group of `record`.
    ///
    /// Absent attributes clear the corresponding field; this is assignment,
    /// not a merge.
    pub fn apply_to(&self, record: &mut ConceptRecord) {
        record.concept_kind = Some(self.concept_kind.clone());
        record.coding_scheme = self.coding_scheme.clone();
        record.cui = self.cui.clone();
        record.preferred_text = self.preferred_text.clone();
        record.tui = self.tui.clone();
        record.score = self.score;
    }
}
