//! Names that identify the three annotation families in a document.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CONCEPT_ARRAY_ATTRIBUTE, DEPENDENCY_NODE_TAG, REFSEM_NAMESPACE, SYNTAX_NAMESPACE,
    TEXTSEM_NAMESPACE,
};

/// Namespace URIs and names the classifier dispatches on.
///
/// Defaults match the cTAKES type system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeSystem {
    /// Namespace of concept-mention elements.
    pub textsem_namespace: String,
    /// Namespace of concept-reference elements.
    pub refsem_namespace: String,
    /// Namespace of syntax elements.
    pub syntax_namespace: String,
    /// Syntax tag that becomes a token.
    pub dependency_node_tag: String,
    /// Mention attribute listing referenced concept ids.
    pub concept_array_attribute: String,
}

impl Default for TypeSystem {
    fn default() -> Self {
        Self {
            textsem_namespace: TEXTSEM_NAMESPACE.to_string(),
            refsem_namespace: REFSEM_NAMESPACE.to_string(),
            syntax_namespace: SYNTAX_NAMESPACE.to_string(),
            dependency_node_tag: DEPENDENCY_NODE_TAG.to_string(),
            concept_array_attribute: CONCEPT_ARRAY_ATTRIBUTE.to_string(),
        }
    }
}

impl TypeSystem {
    /// Names of empty fields, for configuration validation.
    pub fn empty_fields(&self) -> Vec<&'static str> {
        let fields = [
            ("textsem_namespace", &self.textsem_namespace),
            ("refsem_namespace", &self.refsem_namespace),
            ("syntax_namespace", &self.syntax_namespace),
            ("dependency_node_tag", &self.dependency_node_tag),
            ("concept_array_attribute", &self.concept_array_attribute),
        ];
        fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }
}
