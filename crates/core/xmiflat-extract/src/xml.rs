//! Namespace-aware scan over the root element's direct children.

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

use xmiflat_types::{ExtractError, Result, XMI_NAMESPACE};

use crate::attrs::Attributes;

/// One direct child of the document root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Resolved namespace URI; `None` for unbound or unknown prefixes.
    pub namespace: Option<String>,
    /// Local tag name.
    pub tag: String,
    pub attributes: Attributes,
}

impl Element {
    /// The element's `xmi:id`, if it has one.
    pub fn xmi_id(&self) -> Option<&str> {
        self.attributes.get(xmiflat_types::XMI_ID)
    }
}

/// Visit every direct child of the root element in document order.
///
/// Fails if the input is not well-formed or does not have exactly one root.
/// Deeper descendants are not visited.
pub fn scan_children<F>(xml: &str, mut visit: F) -> Result<()>
where
    F: FnMut(Element),
{
    let mut reader = NsReader::from_str(xml);
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader
            .read_resolved_event()
            .map(|(ns, event)| (namespace_uri(&ns), event));
        let (namespace, event) = match event {
            Ok(pair) => pair,
            Err(e) => return Err(ExtractError::xml(reader.error_position() as u64, e.to_string())),
        };

        match event {
            Event::Start(start) => {
                if depth == 0 {
                    if seen_root {
                        return Err(ExtractError::MultipleRoots);
                    }
                    seen_root = true;
                } else if depth == 1 {
                    visit(read_element(&reader, namespace?, &start)?);
                }
                depth += 1;
            }
            Event::Empty(start) => {
                if depth == 0 {
                    if seen_root {
                        return Err(ExtractError::MultipleRoots);
                    }
                    seen_root = true;
                } else if depth == 1 {
                    visit(read_element(&reader, namespace?, &start)?);
                }
            }
            Event::End(_) => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    ExtractError::xml(reader.buffer_position() as u64, "unmatched end tag")
                })?;
            }
            Event::Text(text) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(ExtractError::xml(
                        reader.buffer_position() as u64,
                        "text outside root element",
                    ));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(ExtractError::xml(
                    reader.buffer_position() as u64,
                    "text outside root element",
                ));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if depth > 0 {
        return Err(ExtractError::Truncated { open: depth });
    }
    if !seen_root {
        return Err(ExtractError::NoRoot);
    }
    Ok(())
}

fn namespace_uri(ns: &ResolveResult<'_>) -> Result<Option<String>> {
    match ns {
        ResolveResult::Bound(Namespace(uri)) => Ok(Some(std::str::from_utf8(uri)?.to_string())),
        ResolveResult::Unbound | ResolveResult::Unknown(_) => Ok(None),
    }
}

fn read_element(
    reader: &NsReader<&[u8]>,
    namespace: Option<String>,
    start: &BytesStart<'_>,
) -> Result<Element> {
    let tag = std::str::from_utf8(start.local_name().as_ref())?.to_string();
    let mut attributes = Attributes::new();

    for attr in start.attributes() {
        let attr = attr.map_err(|e| {
            ExtractError::xml(reader.buffer_position() as u64, e.to_string())
        })?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }

        let (resolved, local) = reader.resolve_attribute(attr.key);
        let local = std::str::from_utf8(local.as_ref())?;
        let key = match resolved {
            ResolveResult::Bound(Namespace(uri)) if uri == XMI_NAMESPACE.as_bytes() => {
                format!("xmi:{}", local)
            }
            ResolveResult::Unbound => local.to_string(),
            _ => std::str::from_utf8(attr.key.as_ref())?.to_string(),
        };
        let value = attr.unescape_value().map_err(|e| {
            ExtractError::xml(reader.buffer_position() as u64, e.to_string())
        })?;
        attributes.push(key, value.into_owned());
    }

    Ok(Element {
        namespace,
        tag,
        attributes,
    })
}
