//! Type system constants and the output table contract.
//!
//! The namespace URIs and attribute names match the XMI emitted by the
//! Apache cTAKES default pipeline. They are the defaults for
//! [`TypeSystem`](crate::TypeSystem) and can be overridden there.

// =============================================================================
// Namespaces
// =============================================================================

/// Text semantics type system (concept mentions).
pub const TEXTSEM_NAMESPACE: &str = "http:///org/apache/ctakes/typesystem/type/textsem.ecore";

/// Reference semantics type system (ontology concepts).
pub const REFSEM_NAMESPACE: &str = "http:///org/apache/ctakes/typesystem/type/refsem.ecore";

/// Syntax type system (tokens and dependency nodes).
pub const SYNTAX_NAMESPACE: &str = "http:///org/apache/ctakes/typesystem/type/syntax.ecore";

/// XMI namespace, owner of the `xmi:id` attribute.
pub const XMI_NAMESPACE: &str = "http://www.omg.org/XMI";

// =============================================================================
// Tags and attributes
// =============================================================================

/// Tag of the syntax element that carries token form and POS tag.
pub const DEPENDENCY_NODE_TAG: &str = "ConllDependencyNode";

/// Multi-valued mention attribute listing referenced concept ids.
pub const CONCEPT_ARRAY_ATTRIBUTE: &str = "ontologyConceptArr";

/// Dependency node `id` value that marks the sentinel root.
pub const ROOT_NODE_ID: &str = "0";

/// Normalized key for the XMI identifier attribute.
pub const XMI_ID: &str = "xmi:id";

pub const ATTR_BEGIN: &str = "begin";
pub const ATTR_END: &str = "end";
pub const ATTR_POLARITY: &str = "polarity";
pub const ATTR_CONFIDENCE: &str = "confidence";
pub const ATTR_UNCERTAINTY: &str = "uncertainty";
pub const ATTR_CONDITIONAL: &str = "conditional";
pub const ATTR_GENERIC: &str = "generic";
pub const ATTR_SUBJECT: &str = "subject";
pub const ATTR_CODING_SCHEME: &str = "codingScheme";
pub const ATTR_CUI: &str = "cui";
pub const ATTR_TUI: &str = "tui";
pub const ATTR_PREFERRED_TEXT: &str = "preferredText";
pub const ATTR_SCORE: &str = "score";
pub const ATTR_NODE_ID: &str = "id";
pub const ATTR_POSTAG: &str = "postag";
pub const ATTR_FORM: &str = "form";

/// Polarity assumed when a mention carries no `polarity` attribute.
pub const DEFAULT_POLARITY: i64 = 0;

// =============================================================================
// Output table
// =============================================================================

/// Output columns, in contract order.
pub const COLUMNS: [&str; 18] = [
    "textsem",
    "refsem",
    "id",
    "pos_start",
    "pos_end",
    "cui",
    "negated",
    "preferred_text",
    "scheme",
    "tui",
    "score",
    "confidence",
    "uncertainty",
    "conditional",
    "generic",
    "subject",
    "part_of_speech",
    "true_text",
];

/// Token written in place of an absent value.
pub const DEFAULT_NULL_TOKEN: &str = "NULL";

/// Extension given to every output table.
pub const TABLE_EXTENSION: &str = "csv";
