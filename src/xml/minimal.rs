//! roxmltree backed engine, the last step of the fallback chain.

use roxmltree::{Document, Node, ParsingOptions};

use super::{ReadError, TreeBuilder, XmlAttribute, XmlDocument, XmlNode};

pub(crate) fn read_document(input: &[u8]) -> Result<XmlDocument, ReadError> {
    let text = std::str::from_utf8(input).map_err(|e| format!("invalid UTF-8: {e}"))?;
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).map_err(|e| format!("XML: {e}"))?;

    let mut tree = TreeBuilder::default();
    copy_element(doc.root_element(), &mut tree)?;
    Ok(tree.finish()?)
}

fn copy_element(node: Node<'_, '_>, tree: &mut TreeBuilder) -> Result<(), ReadError> {
    let tag = node.tag_name();
    let mut copy = XmlNode::new(tag.namespace().map(str::to_string), tag.name());
    copy.attributes = node
        .attributes()
        .map(|attr| XmlAttribute {
            namespace: attr.namespace().map(str::to_string),
            local_name: attr.name().to_string(),
            value: attr.value().to_string(),
        })
        .collect();

    tree.open(copy)?;
    for child in node.children() {
        if child.is_element() {
            copy_element(child, tree)?;
        } else if child.is_text() {
            tree.text(child.text().unwrap_or_default().to_string())?;
        }
    }
    Ok(tree.close()?)
}
