//! Builders turning classified elements into mentions, references and tokens.
//!
//! Each builder is all-or-nothing: the first attribute that fails to parse
//! aborts the element and is returned to the caller.

use xmiflat_types::{
    AttrError, ConceptId, Mention, ReferenceUpdate, Span, Token, ATTR_BEGIN, ATTR_CODING_SCHEME,
    ATTR_CONDITIONAL, ATTR_CONFIDENCE, ATTR_CUI, ATTR_END, ATTR_FORM, ATTR_GENERIC,
    ATTR_POLARITY, ATTR_POSTAG, ATTR_PREFERRED_TEXT, ATTR_SCORE, ATTR_SUBJECT, ATTR_TUI,
    ATTR_UNCERTAINTY, DEFAULT_POLARITY, XMI_ID,
};

use crate::xml::Element;

fn read_span(element: &Element) -> Result<Span, AttrError> {
    let begin = element.attributes.required_int::<usize>(ATTR_BEGIN)?;
    let end = element.attributes.required_int::<usize>(ATTR_END)?;
    Ok(Span::new(begin, end))
}

/// Build a concept mention from a text-semantics element.
///
/// `concept_array_attribute` names the attribute listing referenced
/// concept ids.
pub fn build_mention(element: &Element, concept_array_attribute: &str) -> Result<Mention, AttrError> {
    let attrs = &element.attributes;

    let span = read_span(element)?;
    if span.is_empty() {
        return Err(AttrError::InvalidSpan {
            begin: span.start,
            end: span.end,
        });
    }

    let polarity = attrs
        .optional_int::<i64>(ATTR_POLARITY)?
        .unwrap_or(DEFAULT_POLARITY);

    Ok(Mention {
        kind: element.tag.clone(),
        span,
        negated: Mention::negated_from_polarity(polarity),
        confidence: attrs.optional_float(ATTR_CONFIDENCE)?,
        uncertainty: attrs.optional_float(ATTR_UNCERTAINTY)?,
        conditional: attrs.optional_bool(ATTR_CONDITIONAL)?,
        generic: attrs.optional_bool(ATTR_GENERIC)?,
        subject: attrs.string(ATTR_SUBJECT),
        concept_ids: attrs.int_list::<ConceptId>(concept_array_attribute)?,
    })
}

/// Build a reference update from a reference-semantics element.
pub fn build_reference(element: &Element) -> Result<ReferenceUpdate, AttrError> {
    let attrs = &element.attributes;
    Ok(ReferenceUpdate {
        key: attrs.required_int::<ConceptId>(XMI_ID)?,
        concept_kind: element.tag.clone(),
        coding_scheme: attrs.string(ATTR_CODING_SCHEME),
        cui: attrs.string(ATTR_CUI),
        preferred_text: attrs.string(ATTR_PREFERRED_TEXT),
        tui: attrs.string(ATTR_TUI),
        score: attrs.optional_float(ATTR_SCORE)?,
    })
}

/// Build a token from a dependency node.
pub fn build_token(element: &Element) -> Result<Token, AttrError> {
    let attrs = &element.attributes;
    Ok(Token::new(
        read_span(element)?,
        attrs.string(ATTR_POSTAG),
        attrs.string(ATTR_FORM),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attrs::Attributes;
    use proptest::prelude::any;
    use xmiflat_types::CONCEPT_ARRAY_ATTRIBUTE;

    fn element(tag: &str, attrs: &[(&str, &str)]) -> Element {
        Element {
            namespace: Some("urn:test".to_string()),
            tag: tag.to_string(),
            attributes: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect::<Attributes>(),
        }
    }

    fn mention(attrs: &[(&str, &str)]) -> Result<Mention, AttrError> {
        build_mention(&element("SignSymptomMention", attrs), CONCEPT_ARRAY_ATTRIBUTE)
    }

    #[test]
    fn test_mention_all_fields() {
        let m = mention(&[
            ("begin", "10"),
            ("end", "20"),
            ("polarity", "1"),
            ("confidence", "0.9"),
            ("uncertainty", "0"),
            ("conditional", "false"),
            ("generic", "true"),
            ("subject", "patient"),
            ("ontologyConceptArr", "501 502"),
        ])
        .unwrap();

        assert_eq!(m.kind, "SignSymptomMention");
        assert_eq!(m.span, Span::new(10, 20));
        assert!(!m.negated);
        assert_eq!(m.confidence, Some(0.9));
        assert_eq!(m.uncertainty, Some(0.0));
        assert_eq!(m.conditional, Some(false));
        assert_eq!(m.generic, Some(true));
        assert_eq!(m.subject.as_deref(), Some("patient"));
        assert_eq!(m.concept_ids, vec![501, 502]);
    }

    #[test]
    fn test_mention_polarity_defaults_to_negated() {
        let m = mention(&[("begin", "0"), ("end", "4"), ("ontologyConceptArr", "1")]).unwrap();
        assert!(m.negated);
        assert_eq!(m.confidence, None);
        assert_eq!(m.subject, None);

        let m = mention(&[
            ("begin", "0"),
            ("end", "4"),
            ("polarity", "-1"),
            ("ontologyConceptArr", "1"),
        ])
        .unwrap();
        assert!(m.negated);
    }

    #[test]
    fn test_mention_bad_begin() {
        let err = mention(&[("begin", "ten"), ("end", "20"), ("ontologyConceptArr", "1")])
            .unwrap_err();
        assert_eq!(err.attribute(), "begin");
    }

    #[test]
    fn test_mention_missing_end() {
        let err = mention(&[("begin", "1"), ("ontologyConceptArr", "1")]).unwrap_err();
        assert_eq!(err, AttrError::missing("end"));
    }

    #[test]
    fn test_mention_empty_span_rejected() {
        let err = mention(&[("begin", "5"), ("end", "5"), ("ontologyConceptArr", "1")])
            .unwrap_err();
        assert_eq!(err, AttrError::InvalidSpan { begin: 5, end: 5 });
    }

    #[test]
    fn test_mention_malformed_optional_fields() {
        let err = mention(&[
            ("begin", "1"),
            ("end", "3"),
            ("generic", "sometimes"),
            ("ontologyConceptArr", "1"),
        ])
        .unwrap_err();
        assert_eq!(err.attribute(), "generic");

        let err = mention(&[("begin", "1"), ("end", "3"), ("ontologyConceptArr", "1 x")])
            .unwrap_err();
        assert_eq!(err.attribute(), "ontologyConceptArr");
    }

    #[test]
    fn test_reference() {
        let r = build_reference(&element(
            "UmlsConcept",
            &[
                ("xmi:id", "501"),
                ("codingScheme", "SNOMEDCT_US"),
                ("cui", "C0000000"),
                ("tui", "T000"),
                ("preferredText", "Something"),
                ("score", "0.0"),
            ],
        ))
        .unwrap();
        assert_eq!(r.key, 501);
        assert_eq!(r.concept_kind, "UmlsConcept");
        assert_eq!(r.coding_scheme.as_deref(), Some("SNOMEDCT_US"));
        assert_eq!(r.cui.as_deref(), Some("C0000000"));
        assert_eq!(r.tui.as_deref(), Some("T000"));
        assert_eq!(r.score, Some(0.0));
    }

    #[test]
    fn test_reference_sparse_and_bad_id() {
        let r = build_reference(&element("UmlsConcept", &[("xmi:id", "9")])).unwrap();
        assert_eq!(r.cui, None);
        assert_eq!(r.score, None);

        let err = build_reference(&element("UmlsConcept", &[("xmi:id", "abc")])).unwrap_err();
        assert_eq!(err.attribute(), "xmi:id");
        let err = build_reference(&element("UmlsConcept", &[])).unwrap_err();
        assert_eq!(err, AttrError::missing("xmi:id"));
    }

    #[test]
    fn test_token() {
        let t = build_token(&element(
            "ConllDependencyNode",
            &[("id", "1"), ("begin", "10"), ("end", "13"), ("form", "no"), ("postag", "DT")],
        ))
        .unwrap();
        assert_eq!(t.span, Span::new(10, 13));
        assert_eq!(t.surface_form.as_deref(), Some("no"));
        assert_eq!(t.part_of_speech.as_deref(), Some("DT"));

        let err = build_token(&element("ConllDependencyNode", &[("begin", "1"), ("end", "?")]))
            .unwrap_err();
        assert_eq!(err.attribute(), "end");
    }

    proptest::proptest! {
        #[test]
        fn prop_negation_follows_polarity_sign(polarity in any::<i32>(), ids in proptest::collection::vec(0u32..1000, 1..5)) {
            let polarity = polarity.to_string();
            let concepts = ids.iter().map(u32::to_string).collect::<Vec<_>>().join(" ");
            let built = mention(&[
                ("begin", "0"),
                ("end", "4"),
                ("polarity", polarity.as_str()),
                (CONCEPT_ARRAY_ATTRIBUTE, concepts.as_str()),
            ])
            .unwrap();
            let expect = polarity.parse::<i64>().unwrap() <= 0;
            let records = built.into_records();
            proptest::prop_assert_eq!(records.len(), ids.len());
            proptest::prop_assert!(records.iter().all(|r| r.negated == expect));
        }
    }
}
