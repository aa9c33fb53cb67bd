//! Routing of root children into annotation families.

use serde::Serialize;
use xmiflat_types::{TypeSystem, ATTR_NODE_ID, ROOT_NODE_ID};

use crate::xml::Element;

/// The three annotation families the pass extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Family {
    /// Concept mention in the text-semantics namespace.
    Mention,
    /// Ontology concept in the reference-semantics namespace.
    Reference,
    /// Dependency node in the syntax namespace.
    Token,
}

/// Outcome of classifying one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Route to the family's builder.
    Family(Family),
    /// Text-semantics element without linked concepts.
    Unlinked,
    /// Sentinel root dependency node (`id="0"`).
    RootNode,
    /// Not part of any family.
    Ignored,
}

/// Dispatches elements by `(namespace, tag)`.
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    type_system: TypeSystem,
}

impl Classifier {
    pub fn new(type_system: TypeSystem) -> Self {
        Self { type_system }
    }

    pub fn type_system(&self) -> &TypeSystem {
        &self.type_system
    }

    pub fn classify(&self, element: &Element) -> Classification {
        let ts = &self.type_system;
        let Some(namespace) = element.namespace.as_deref() else {
            return Classification::Ignored;
        };

        if namespace == ts.textsem_namespace {
            let linked = element
                .attributes
                .get(&ts.concept_array_attribute)
                .is_some_and(|ids| !ids.trim().is_empty());
            if linked {
                Classification::Family(Family::Mention)
            } else {
                Classification::Unlinked
            }
        } else if namespace == ts.refsem_namespace {
            Classification::Family(Family::Reference)
        } else if namespace == ts.syntax_namespace && element.tag == ts.dependency_node_tag {
            if element.attributes.get(ATTR_NODE_ID) == Some(ROOT_NODE_ID) {
                Classification::RootNode
            } else {
                Classification::Family(Family::Token)
            }
        } else {
            Classification::Ignored
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attributes;
    use xmiflat_types::{REFSEM_NAMESPACE, SYNTAX_NAMESPACE, TEXTSEM_NAMESPACE};

    fn element(namespace: Option<&str>, tag: &str, attrs: &[(&str, &str)]) -> Element {
        Element {
            namespace: namespace.map(str::to_string),
            tag: tag.to_string(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Attributes>(),
        }
    }

    #[test]
    fn test_mention_requires_concepts() {
        let c = Classifier::default();
        let linked = element(
            Some(TEXTSEM_NAMESPACE),
            "DiseaseDisorderMention",
            &[("ontologyConceptArr", "12 13")],
        );
        assert_eq!(c.classify(&linked), Classification::Family(Family::Mention));

        let bare = element(Some(TEXTSEM_NAMESPACE), "DateAnnotation", &[]);
        assert_eq!(c.classify(&bare), Classification::Unlinked);

        let blank = element(
            Some(TEXTSEM_NAMESPACE),
            "MedicationMention",
            &[("ontologyConceptArr", "  ")],
        );
        assert_eq!(c.classify(&blank), Classification::Unlinked);
    }

    #[test]
    fn test_reference_always_routed() {
        let c = Classifier::default();
        let e = element(Some(REFSEM_NAMESPACE), "UmlsConcept", &[]);
        assert_eq!(c.classify(&e), Classification::Family(Family::Reference));
    }

    #[test]
    fn test_token_routing() {
        let c = Classifier::default();
        let node = element(
            Some(SYNTAX_NAMESPACE),
            "ConllDependencyNode",
            &[("id", "3")],
        );
        assert_eq!(c.classify(&node), Classification::Family(Family::Token));

        let root = element(
            Some(SYNTAX_NAMESPACE),
            "ConllDependencyNode",
            &[("id", "0")],
        );
        assert_eq!(c.classify(&root), Classification::RootNode);

        let word = element(Some(SYNTAX_NAMESPACE), "WordToken", &[("id", "3")]);
        assert_eq!(c.classify(&word), Classification::Ignored);
    }

    #[test]
    fn test_unknown_namespace_ignored() {
        let c = Classifier::default();
        assert_eq!(
            c.classify(&element(Some("http:///uima/cas.ecore"), "Sofa", &[])),
            Classification::Ignored
        );
        assert_eq!(
            c.classify(&element(None, "UmlsConcept", &[])),
            Classification::Ignored
        );
    }

    #[test]
    fn test_custom_type_system() {
        let c = Classifier::new(TypeSystem {
            syntax_namespace: "urn:syntax".to_string(),
            dependency_node_tag: "Node".to_string(),
            ..TypeSystem::default()
        });
        let node = element(Some("urn:syntax"), "Node", &[("id", "1")]);
        assert_eq!(c.classify(&node), Classification::Family(Family::Token));
    }
}
