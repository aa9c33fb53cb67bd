//! Data structures for flattening clinical XMI annotations.
//!
//! This crate holds the data model shared by the extraction engine, the
//! table writer and the command-line tool. It contains no parsing logic,
//! only type definitions with serialization support.
//!
//! # Module Organization
//!
//! - [`constants`] - Namespace URIs, attribute names, output columns
//! - [`error`] - Attribute and document-level error types
//! - [`record`] - Mentions, spans and the flattened [`ConceptRecord`] row
//! - [`reference`] - Concept references joined onto records
//! - [`token`] - Position-tagged tokens
//! - [`diagnostic`] - Data describing dropped elements
//! - [`type_system`] - Configurable family names
//!
//! # Example
//!
//! ```
//! use xmiflat_types::{Mention, ReferenceUpdate, Span};
//!
//! let mention = Mention {
//!     kind: "SignSymptomMention".to_string(),
//!     span: Span::new(10, 20),
//!     negated: Mention::negated_from_polarity(1),
//!     confidence: None,
//!     uncertainty: None,
//!     conditional: None,
//!     generic: None,
//!     subject: None,
//!     concept_ids: vec![501, 502],
//! };
//!
//! let mut records = mention.into_records();
//! assert_eq!(records.len(), 2);
//!
//! let update = ReferenceUpdate {
//!     key: 502,
//!     concept_kind: "UmlsConcept".to_string(),
//!     coding_scheme: Some("SNOMEDCT_US".to_string()),
//!     cui: Some("C0030193".to_string()),
//!     preferred_text: Some("Pain".to_string()),
//!     tui: Some("T184".to_string()),
//!     score: None,
//! };
//! for record in records.iter_mut().filter(|r| update.matches(r)) {
//!     update.apply_to(record);
//! }
//! assert!(!records[0].is_resolved());
//! assert_eq!(records[1].cui.as_deref(), Some("C0030193"));
//! ```

/// Crate version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod constants;
pub mod diagnostic;
pub mod error;
pub mod record;
pub mod reference;
pub mod token;
pub mod type_system;

pub use constants::*;
pub use diagnostic::Diagnostic;
pub use error::{AttrError, ExtractError, Result};
pub use record::{ConceptId, ConceptRecord, Mention, Span};
pub use reference::ReferenceUpdate;
pub use token::Token;
pub use type_system::TypeSystem;
