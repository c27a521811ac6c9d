use quick_xml::events::Event;
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::markup::{DOAP_NS, RDF_NS};

/// Strictly read a DOAP RDF/XML document and collect every problem found.
///
/// An empty list means the document is well-formed XML, every prefix in use is
/// declared, the root is `rdf:RDF` and it describes a DOAP `Project`. Reading stops at
/// the first well-formedness error, since nothing after it can be trusted.
pub fn validate_doap(input: &str) -> Vec<String> {
    let mut reader = NsReader::from_str(input);
    let mut errors = Vec::new();
    let mut open: Vec<String> = Vec::new();
    let mut seen_root = false;
    let mut has_project = false;

    loop {
        let (resolved, event) = match reader.read_resolved_event() {
            Ok(v) => v,
            Err(e) => {
                errors.push(format!(
                    "malformed XML at byte {}: {e}",
                    reader.error_position()
                ));
                return errors;
            }
        };
        let namespace = match resolved {
            ResolveResult::Bound(ns) => Ok(Some(ns.as_ref().to_vec())),
            ResolveResult::Unbound => Ok(None),
            ResolveResult::Unknown(prefix) => Err(String::from_utf8_lossy(&prefix).into_owned()),
        };

        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let qname = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let local = e.local_name();
                let namespace = match namespace {
                    Ok(ns) => ns,
                    Err(prefix) => {
                        errors.push(format!(
                            "undeclared namespace prefix '{prefix}' on <{qname}>"
                        ));
                        None
                    }
                };
                let in_ns = |uri: &str| namespace.as_deref() == Some(uri.as_bytes());

                if open.is_empty() {
                    if seen_root {
                        errors.push(format!("<{qname}> follows the root element"));
                    } else if !(local.as_ref() == b"RDF" && in_ns(RDF_NS)) {
                        errors.push(format!("root element is <{qname}>, expected <rdf:RDF>"));
                    }
                    seen_root = true;
                }
                if local.as_ref() == b"Project" && in_ns(DOAP_NS) {
                    has_project = true;
                }

                for attr in e.attributes() {
                    match attr {
                        Ok(attr) => {
                            let key = attr.key;
                            let prefix = key.prefix().map(|p| p.into_inner());
                            if prefix == Some(b"xml".as_slice())
                                || prefix == Some(b"xmlns".as_slice())
                                || key.as_ref() == b"xmlns"
                            {
                                continue;
                            }
                            if let (ResolveResult::Unknown(prefix), _) =
                                reader.resolve_attribute(key)
                            {
                                errors.push(format!(
                                    "undeclared namespace prefix '{}' on attribute '{}' of <{qname}>",
                                    String::from_utf8_lossy(&prefix),
                                    String::from_utf8_lossy(key.as_ref()),
                                ));
                            }
                        }
                        Err(e) => errors.push(format!("bad attribute on <{qname}>: {e}")),
                    }
                }

                if matches!(event, Event::Start(_)) {
                    open.push(qname);
                }
            }
            Event::End(_) => {
                open.pop();
            }
            Event::Text(ref t) => {
                if let Err(e) = t.unescape() {
                    errors.push(format!("bad character reference in text: {e}"));
                } else if open.is_empty() && t.iter().any(|b| !b.is_ascii_whitespace()) {
                    errors.push("text outside the root element".to_string());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(name) = open.last() {
        errors.push(format!("element <{name}> is not closed"));
    }
    if !seen_root {
        errors.push("missing <rdf:RDF> root element".to_string());
    } else if !has_project {
        errors.push("no DOAP <Project> element".to_string());
    }
    errors
}
