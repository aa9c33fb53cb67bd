//! Single-pass extraction of clinical concept annotations from XMI.
//!
//! This crate turns one cTAKES-style XMI document into flat
//! [`ConceptRecord`](xmiflat_types::ConceptRecord) rows:
//!
//! - **Scan**: every direct child of the root is visited once, in order
//! - **Classify**: children are routed to the mention, reference or token
//!   family by namespace URI and local tag
//! - **Build**: each family's builder reads typed attributes; a malformed
//!   element is dropped and reported as a
//!   [`Diagnostic`](xmiflat_types::Diagnostic)
//! - **Join**: reference updates are applied to rows sharing their concept id
//! - **Correlate**: rows get reconstructed text and part-of-speech from the
//!   tokens starting inside their span
//!
//! # Example
//!
//! ```
//! use xmiflat_extract::extract_document;
//!
//! let xml = r#"<xmi:XMI xmlns:xmi="http://www.omg.org/XMI"
//!     xmlns:textsem="http:///org/apache/ctakes/typesystem/type/textsem.ecore"
//!     xmlns:refsem="http:///org/apache/ctakes/typesystem/type/refsem.ecore"
//!     xmlns:syntax="http:///org/apache/ctakes/typesystem/type/syntax.ecore">
//!   <textsem:SignSymptomMention xmi:id="10" begin="10" end="20" polarity="-1" ontologyConceptArr="501"/>
//!   <refsem:UmlsConcept xmi:id="501" cui="C0030193" tui="T184" preferredText="Pain"/>
//!   <syntax:ConllDependencyNode xmi:id="2" id="1" begin="10" end="13" form="no" postag="DT"/>
//!   <syntax:ConllDependencyNode xmi:id="3" id="2" begin="14" end="20" form="pain" postag="NN"/>
//! </xmi:XMI>"#;
//!
//! let extraction = extract_document(xml).unwrap();
//! let record = &extraction.records[0];
//! assert!(record.negated);
//! assert_eq!(record.cui.as_deref(), Some("C0030193"));
//! assert_eq!(record.reconstructed_text, "no pain");
//! assert_eq!(record.part_of_speech.as_deref(), Some("DT"));
//! ```

pub mod attrs;
pub mod builders;
pub mod classify;
pub mod correlate;
pub mod document;
pub mod index;
pub mod xml;

pub use attrs::Attributes;
pub use builders::{build_mention, build_reference, build_token};
pub use classify::{Classification, Classifier, Family};
pub use correlate::{Correlator, TokenIndex};
pub use document::{extract_document, ExtractStats, Extraction, Extractor};
pub use index::RecordTable;
pub use xml::{scan_children, Element};
