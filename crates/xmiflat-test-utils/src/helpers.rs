//! Builders for cTAKES-style XMI test documents.
//!
//! Elements are emitted under the usual `xmi`, `textsem`, `refsem`,
//! `syntax` and `cas` prefixes, with `xmi:id` values assigned in insertion
//! order unless given explicitly.

use xmiflat_types::{REFSEM_NAMESPACE, SYNTAX_NAMESPACE, TEXTSEM_NAMESPACE, XMI_NAMESPACE};

/// Namespace URI used for the `cas:` prefix.
pub const CAS_NAMESPACE: &str = "http:///uima/cas.ecore";

/// Escape a value for use inside a double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// A concept mention to be emitted as a `textsem:` element.
#[derive(Debug, Clone)]
pub struct MentionFixture {
    pub tag: String,
    pub xmi_id: Option<u64>,
    pub begin: String,
    pub end: String,
    pub polarity: Option<String>,
    pub concept_ids: Vec<u64>,
    pub extra: Vec<(String, String)>,
}

impl MentionFixture {
    pub fn new(tag: &str, begin: usize, end: usize) -> Self {
        Self {
            tag: tag.to_string(),
            xmi_id: None,
            begin: begin.to_string(),
            end: end.to_string(),
            polarity: None,
            concept_ids: Vec::new(),
            extra: Vec::new(),
        }
    }

    pub fn id(mut self, xmi_id: u64) -> Self {
        self.xmi_id = Some(xmi_id);
        self
    }

    pub fn polarity(mut self, polarity: i64) -> Self {
        self.polarity = Some(polarity.to_string());
        self
    }

    pub fn concepts(mut self, ids: &[u64]) -> Self {
        self.concept_ids = ids.to_vec();
        self
    }

    /// Override `begin` with a raw, possibly malformed, value.
    pub fn raw_begin(mut self, begin: &str) -> Self {
        self.begin = begin.to_string();
        self
    }

    pub fn attr(mut self, key: &str, value: &str) -> Self {
        self.extra.push((key.to_string(), value.to_string()));
        self
    }
}

/// Incrementally builds an XMI document.
#[derive(Debug, Clone, Default)]
pub struct XmiBuilder {
    body: Vec<String>,
    next_id: u64,
}

impl XmiBuilder {
    pub fn new() -> Self {
        Self {
            body: Vec::new(),
            next_id: 1000,
        }
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn push(&mut self, prefix: &str, tag: &str, attrs: &[(String, String)]) {
        let mut line = format!("<{}:{}", prefix, tag);
        for (key, value) in attrs {
            line.push_str(&format!(" {}=\"{}\"", key, escape_attr(value)));
        }
        line.push_str("/>");
        self.body.push(line);
    }

    /// Add a `textsem:` mention.
    pub fn mention(mut self, fixture: MentionFixture) -> Self {
        let id = fixture.xmi_id.unwrap_or_else(|| self.fresh_id());
        let mut attrs = vec![
            ("xmi:id".to_string(), id.to_string()),
            ("begin".to_string(), fixture.begin),
            ("end".to_string(), fixture.end),
        ];
        if let Some(polarity) = fixture.polarity {
            attrs.push(("polarity".to_string(), polarity));
        }
        if !fixture.concept_ids.is_empty() {
            let ids: Vec<String> = fixture.concept_ids.iter().map(u64::to_string).collect();
            attrs.push(("ontologyConceptArr".to_string(), ids.join(" ")));
        }
        attrs.extend(fixture.extra);
        self.push("textsem", &fixture.tag, &attrs);
        self
    }

    /// Add a `textsem:` element with no concept array.
    pub fn annotation(mut self, tag: &str, begin: usize, end: usize) -> Self {
        let id = self.fresh_id();
        let attrs = vec![
            ("xmi:id".to_string(), id.to_string()),
            ("begin".to_string(), begin.to_string()),
            ("end".to_string(), end.to_string()),
        ];
        self.push("textsem", tag, &attrs);
        self
    }

    /// Add a `refsem:UmlsConcept` with the given id and attributes.
    pub fn umls_concept(mut self, xmi_id: u64, attrs: &[(&str, &str)]) -> Self {
        let mut all = vec![("xmi:id".to_string(), xmi_id.to_string())];
        all.extend(attrs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        self.push("refsem", "UmlsConcept", &all);
        self
    }

    /// Add a `syntax:ConllDependencyNode` token.
    pub fn token(mut self, node_id: u32, begin: usize, end: usize, form: &str, postag: &str) -> Self {
        let id = self.fresh_id();
        let attrs = vec![
            ("xmi:id".to_string(), id.to_string()),
            ("id".to_string(), node_id.to_string()),
            ("begin".to_string(), begin.to_string()),
            ("end".to_string(), end.to_string()),
            ("form".to_string(), form.to_string()),
            ("postag".to_string(), postag.to_string()),
        ];
        self.push("syntax", "ConllDependencyNode", &attrs);
        self
    }

    /// Add the sentinel root dependency node.
    pub fn root_node(mut self, begin: usize, end: usize) -> Self {
        let id = self.fresh_id();
        let attrs = vec![
            ("xmi:id".to_string(), id.to_string()),
            ("id".to_string(), "0".to_string()),
            ("begin".to_string(), begin.to_string()),
            ("end".to_string(), end.to_string()),
        ];
        self.push("syntax", "ConllDependencyNode", &attrs);
        self
    }

    /// Add the `cas:Sofa` holding the document text.
    pub fn sofa(mut self, text: &str) -> Self {
        let id = self.fresh_id();
        let attrs = vec![
            ("xmi:id".to_string(), id.to_string()),
            ("sofaNum".to_string(), "1".to_string()),
            ("sofaString".to_string(), text.to_string()),
        ];
        self.push("cas", "Sofa", &attrs);
        self
    }

    /// Add a raw element line verbatim.
    pub fn raw(mut self, element: &str) -> Self {
        self.body.push(element.to_string());
        self
    }

    pub fn build(&self) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <xmi:XMI xmlns:xmi=\"{}\" xmlns:cas=\"{}\" xmlns:textsem=\"{}\" \
             xmlns:refsem=\"{}\" xmlns:syntax=\"{}\" xmi:version=\"2.0\">\n{}\n</xmi:XMI>\n",
            XMI_NAMESPACE,
            CAS_NAMESPACE,
            TEXTSEM_NAMESPACE,
            REFSEM_NAMESPACE,
            SYNTAX_NAMESPACE,
            self.body.join("\n"),
        )
    }
}

/// The "no pain" note: one negated symptom mention, its concept, two tokens.
pub fn no_pain_document() -> String {
    XmiBuilder::new()
        .sofa("Patient: no pain today.")
        .root_node(0, 23)
        .token(1, 10, 13, "no", "DT")
        .token(2, 14, 20, "pain", "NN")
        .mention(
            MentionFixture::new("SignSymptomMention", 10, 20)
                .polarity(-1)
                .concepts(&[501]),
        )
        .umls_concept(
            501,
            &[
                ("codingScheme", "SNOMEDCT_US"),
                ("cui", "C0030193"),
                ("tui", "T184"),
                ("preferredText", "Pain"),
            ],
        )
        .build()
}

/// A document with `mentions` linked mentions, each with one concept and
/// one token, for throughput measurements.
pub fn synthetic_document(mentions: usize) -> String {
    let mut builder = XmiBuilder::new();
    for n in 0..mentions {
        let begin = n * 10;
        let concept = 100_000 + n as u64;
        builder = builder
            .token((n + 1) as u32, begin, begin + 5, &format!("word{}", n), "NN")
            .mention(
                MentionFixture::new("DiseaseDisorderMention", begin, begin + 5)
                    .polarity(1)
                    .concepts(&[concept]),
            )
            .umls_concept(
                concept,
                &[("codingScheme", "SNOMEDCT_US"), ("cui", &format!("C{:07}", n))],
            );
    }
    builder.build()
}
