//! Per-element extraction diagnostics.

use serde::{Deserialize, Serialize};

use crate::AttrError;

/// An element that was dropped from the pass, and why.
///
/// Returned as data next to the records so the caller decides where it is
/// logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Namespace URI of the dropped element.
    pub namespace: String,
    /// Local tag name of the dropped element.
    pub tag: String,
    /// The element's `xmi:id`, when it had one.
    pub xmi_id: Option<String>,
    pub error: AttrError,
}

impl Diagnostic {
    pub fn new(
        namespace: impl Into<String>,
        tag: impl Into<String>,
        xmi_id: Option<String>,
        error: AttrError,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            tag: tag.into(),
            xmi_id,
            error,
        }
    }

    /// Name of the attribute that caused the drop.
    pub fn attribute(&self) -> &str {
        self.error.attribute()
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}{}", self.namespace, self.tag)?;
        if let Some(ref id) = self.xmi_id {
            write!(f, " xmi:id={}", id)?;
        }
        write!(f, ": {}", self.error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_element_identity() {
        let d = Diagnostic::new(
            "urn:textsem",
            "MedicationMention",
            Some("42".to_string()),
            AttrError::NotInteger {
                attribute: "begin".to_string(),
                value: "x".to_string(),
            },
        );
        assert_eq!(
            d.to_string(),
            "{urn:textsem}MedicationMention xmi:id=42: attribute `begin` is not an integer: \"x\""
        );
        assert_eq!(d.attribute(), "begin");
    }

    #[test]
    fn test_display_without_id() {
        let d = Diagnostic::new("urn:syntax", "ConllDependencyNode", None, AttrError::missing("end"));
        assert_eq!(
            d.to_string(),
            "{urn:syntax}ConllDependencyNode: required attribute `end` is missing"
        );
    }
}
