//! quick-xml backed engines.

use std::fmt::Display;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::reader::NsReader;

use super::{ReadError, TreeBuilder, XmlAttribute, XmlDocument, XmlNode};

/// What to do with a `<!DOCTYPE ...>` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DoctypePolicy {
    Reject,
    Skip,
}

pub(crate) fn read_document(
    input: &[u8],
    doctype: DoctypePolicy,
) -> Result<XmlDocument, ReadError> {
    let mut reader = NsReader::from_reader(input);
    let config = reader.config_mut();
    config.expand_empty_elements = true;
    config.check_end_names = true;

    let mut tree = TreeBuilder::default();
    let mut buf = Vec::new();

    loop {
        let position = reader.buffer_position();
        let resolved = reader
            .read_resolved_event_into(&mut buf)
            .map(|(namespace, event)| (resolved_namespace(namespace), event));
        let (namespace, event) = match resolved {
            Ok(pair) => pair,
            Err(e) => {
                return Err(format!(
                    "XML parse error at position {}: {e}",
                    reader.error_position()
                )
                .into());
            }
        };

        match event {
            Event::Start(e) => {
                let node = read_start(&reader, namespace?, &e)?;
                tree.open(node).map_err(|err| err.at(position))?;
            }
            Event::Empty(e) => {
                let node = read_start(&reader, namespace?, &e)?;
                tree.open(node).map_err(|err| err.at(position))?;
                tree.close().map_err(|msg| at(position, msg))?;
            }
            Event::End(_) => {
                tree.close().map_err(|msg| at(position, msg))?;
            }
            Event::Text(e) => {
                let text = e
                    .unescape()
                    .map_err(|err| at(position, format!("invalid text: {err}")))?;
                tree.text(text.into_owned()).map_err(|msg| at(position, msg))?;
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(&e).into_owned();
                tree.text(text).map_err(|msg| at(position, msg))?;
            }
            Event::DocType(_) => {
                if doctype == DoctypePolicy::Reject {
                    return Err(at(position, "document type declarations are not accepted").into());
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(tree.finish()?)
}

fn at(position: impl Display, message: impl Display) -> String {
    format!("XML parse error at position {position}: {message}")
}

fn resolved_namespace(namespace: ResolveResult<'_>) -> Result<Option<String>, String> {
    match namespace {
        ResolveResult::Bound(ns) => std::str::from_utf8(ns.as_ref())
            .map(|uri| Some(uri.to_string()))
            .map_err(|e| format!("invalid namespace URI: {e}")),
        ResolveResult::Unbound => Ok(None),
        ResolveResult::Unknown(prefix) => Err(format!(
            "namespace prefix '{}' is not bound",
            String::from_utf8_lossy(&prefix)
        )),
    }
}

fn read_start(
    reader: &NsReader<&[u8]>,
    namespace: Option<String>,
    e: &BytesStart<'_>,
) -> Result<XmlNode, String> {
    let local_name = std::str::from_utf8(e.local_name().as_ref())
        .map_err(|e| format!("invalid tag name: {e}"))?
        .to_string();
    let mut node = XmlNode::new(namespace, local_name);

    for attr_result in e.attributes() {
        let attr = attr_result.map_err(|e| format!("attribute error: {e}"))?;
        if attr.key.as_namespace_binding().is_some() {
            continue;
        }
        let (attr_namespace, attr_local) = reader.resolve_attribute(attr.key);
        let namespace = resolved_namespace(attr_namespace)?;
        let local_name = std::str::from_utf8(attr_local.as_ref())
            .map_err(|e| format!("invalid attribute name: {e}"))?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| format!("attribute value error: {e}"))?
            .into_owned();
        node.attributes.push(XmlAttribute {
            namespace,
            local_name,
            value,
        });
    }

    Ok(node)
}
