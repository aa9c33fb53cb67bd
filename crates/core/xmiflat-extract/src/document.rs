//! Whole-document extraction: one classification pass, then correlation.

use serde::Serialize;
use tracing::debug;
use xmiflat_types::{ConceptRecord, Diagnostic, Result, Token, TypeSystem};

use crate::builders::{build_mention, build_reference, build_token};
use crate::classify::{Classification, Classifier, Family};
use crate::correlate::Correlator;
use crate::index::RecordTable;
use crate::xml::{scan_children, Element};

/// Counters collected during the classification pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ExtractStats {
    /// Direct children of the root.
    pub elements: usize,
    /// Mention elements turned into rows.
    pub mentions: usize,
    /// Text-semantics elements without linked concepts.
    pub unlinked: usize,
    /// Reference elements applied.
    pub references: usize,
    /// References whose key matched no row.
    pub unmatched_references: usize,
    /// Tokens collected.
    pub tokens: usize,
    /// Sentinel root dependency nodes skipped.
    pub root_nodes: usize,
    /// Elements outside the three families.
    pub ignored: usize,
    /// Elements dropped with a diagnostic.
    pub dropped: usize,
}

/// Result of extracting one document.
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    /// Correlated rows, in creation order.
    pub records: Vec<ConceptRecord>,
    /// Tokens in document order.
    pub tokens: Vec<Token>,
    /// One entry per dropped element.
    pub diagnostics: Vec<Diagnostic>,
    pub stats: ExtractStats,
}

/// Runs the classify, build, correlate pipeline over a document.
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    classifier: Classifier,
}

impl Extractor {
    pub fn new(type_system: TypeSystem) -> Self {
        Self {
            classifier: Classifier::new(type_system),
        }
    }

    pub fn type_system(&self) -> &TypeSystem {
        self.classifier.type_system()
    }

    /// Extract from raw bytes, which must be UTF-8.
    pub fn extract_bytes(&self, bytes: &[u8]) -> Result<Extraction> {
        let xml = std::str::from_utf8(bytes)?;
        self.extract(xml)
    }

    /// Extract and correlate all concept records of `xml`.
    ///
    /// Malformed elements are dropped and reported in
    /// [`Extraction::diagnostics`]; only structural problems fail.
    pub fn extract(&self, xml: &str) -> Result<Extraction> {
        let mut pass = Pass::new(&self.classifier);
        scan_children(xml, |element| pass.visit(element))?;
        Ok(pass.finish())
    }
}

/// Extract with the default cTAKES type system.
pub fn extract_document(xml: &str) -> Result<Extraction> {
    Extractor::default().extract(xml)
}

/// State of one classification pass.
struct Pass<'c> {
    classifier: &'c Classifier,
    table: RecordTable,
    tokens: Vec<Token>,
    diagnostics: Vec<Diagnostic>,
    stats: ExtractStats,
}

impl<'c> Pass<'c> {
    fn new(classifier: &'c Classifier) -> Self {
        Self {
            classifier,
            table: RecordTable::new(),
            tokens: Vec::new(),
            diagnostics: Vec::new(),
            stats: ExtractStats::default(),
        }
    }

    fn visit(&mut self, element: Element) {
        self.stats.elements += 1;
        let family = match self.classifier.classify(&element) {
            Classification::Family(family) => family,
            Classification::Unlinked => {
                self.stats.unlinked += 1;
                return;
            }
            Classification::RootNode => {
                self.stats.root_nodes += 1;
                return;
            }
            Classification::Ignored => {
                self.stats.ignored += 1;
                return;
            }
        };

        let built = match family {
            Family::Mention => build_mention(
                &element,
                &self.classifier.type_system().concept_array_attribute,
            )
            .map(|mention| {
                self.table.insert_mention(mention);
                self.stats.mentions += 1;
            }),
            Family::Reference => build_reference(&element).map(|update| {
                self.table.apply(update);
                self.stats.references += 1;
            }),
            Family::Token => build_token(&element).map(|token| {
                self.tokens.push(token);
                self.stats.tokens += 1;
            }),
        };

        if let Err(error) = built {
            let diagnostic = Diagnostic::new(
                element.namespace.unwrap_or_default(),
                element.tag,
                element.attributes.string(xmiflat_types::XMI_ID),
                error,
            );
            debug!(family = ?family, %diagnostic, "Dropped element");
            self.stats.dropped += 1;
            self.diagnostics.push(diagnostic);
        }
    }

    fn finish(self) -> Extraction {
        let mut stats = self.stats;
        stats.unmatched_references = self.table.unmatched_references();

        let tokens = self.tokens;
        let mut records = self.table.into_records();
        Correlator::new(&tokens).correlate_all(&mut records);

        Extraction {
            records,
            tokens,
            diagnostics: self.diagnostics,
            stats,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xmiflat_types::ExtractError;

    const NS: &str = r#"xmlns:xmi="http://www.omg.org/XMI" xmlns:textsem="http:///org/apache/ctakes/typesystem/type/textsem.ecore" xmlns:refsem="http:///org/apache/ctakes/typesystem/type/refsem.ecore" xmlns:syntax="http:///org/apache/ctakes/typesystem/type/syntax.ecore""#;

    fn doc(body: &str) -> String {
        format!("<xmi:XMI {}>{}</xmi:XMI>", NS, body)
    }

    #[test]
    fn test_extract_counts() {
        let xml = doc(r#"
            <syntax:ConllDependencyNode xmi:id="1" id="0" begin="0" end="0"/>
            <syntax:ConllDependencyNode xmi:id="2" id="1" begin="0" end="4" form="Pain" postag="NN"/>
            <textsem:DateAnnotation xmi:id="3" begin="5" end="9"/>
            <textsem:SignSymptomMention xmi:id="4" begin="0" end="4" polarity="1" ontologyConceptArr="5"/>
            <refsem:UmlsConcept xmi:id="5" cui="C0030193" tui="T184"/>
            <refsem:UmlsConcept xmi:id="6" cui="C9999999"/>
            <cas:Sofa xmlns:cas="http:///uima/cas.ecore" xmi:id="7" sofaString="Pain"/>
        "#);
        let out = extract_document(&xml).unwrap();
        assert_eq!(
            out.stats,
            ExtractStats {
                elements: 7,
                mentions: 1,
                unlinked: 1,
                references: 2,
                unmatched_references: 1,
                tokens: 1,
                root_nodes: 1,
                ignored: 1,
                dropped: 0,
            }
        );
        assert_eq!(out.records.len(), 1);
        assert_eq!(out.records[0].reconstructed_text, "Pain");
        assert_eq!(out.records[0].cui.as_deref(), Some("C0030193"));
    }

    #[test]
    fn test_dropped_element_reports_identity() {
        let xml = doc(r#"
            <textsem:MedicationMention xmi:id="40" begin="x" end="9" ontologyConceptArr="1"/>
        "#);
        let out = extract_document(&xml).unwrap();
        assert!(out.records.is_empty());
        assert_eq!(out.stats.dropped, 1);
        let d = &out.diagnostics[0];
        assert_eq!(d.tag, "MedicationMention");
        assert_eq!(d.xmi_id.as_deref(), Some("40"));
        assert_eq!(d.attribute(), "begin");
    }

    #[test]
    fn test_extract_bytes_rejects_invalid_utf8() {
        let err = Extractor::default()
            .extract_bytes(&[b'<', 0xff, b'/', b'>'])
            .unwrap_err();
        assert!(matches!(err, ExtractError::Encoding(_)));
    }
}
