//! The schema walk: XML document tree → model entities.
//!
//! Only direct children of the document root become root elements and
//! top-level complex types. Everything below is reached through an owner:
//! an element folds its first unprocessed inline `<complexType>`, and complex
//! type content (sequences, then choices, then attributes) is written into a
//! [`ContentSink`]. Every node turned into an entity is marked in the
//! [`ProcessedNodes`] set so it is never produced twice.

use tracing::{trace, warn};

use super::ProcessedNodes;
use crate::base::constants::{DERIVATION_PATHS, XSD_NAMESPACE as XS, local_name};
use crate::model::{
    Attribute, AttributeUse, ComplexType, ContentSink, Element, ElementId, Structure,
};
use crate::xml::{NodeId, XmlDocument};

/// Build the structure for `doc`, marking every consumed node in `processed`.
pub(crate) fn build_structure(doc: &XmlDocument, processed: &mut ProcessedNodes) -> Structure {
    let root = doc.root();
    let target_namespace = doc.node(root).attribute("targetNamespace").unwrap_or_default();
    let mut structure = Structure::new(target_namespace);

    let root_elements: Vec<NodeId> = doc.children_named(root, XS, local_name::ELEMENT).collect();
    for node in root_elements {
        if processed.mark(node) {
            let id = parse_element(doc, node, processed, &mut structure, true);
            structure.add_root_element(id);
        }
    }

    let complex_types: Vec<NodeId> = doc
        .children_named(root, XS, local_name::COMPLEX_TYPE)
        .collect();
    for node in complex_types {
        if processed.mark(node) {
            let complex_type = parse_complex_type(doc, node, processed, &mut structure);
            structure.add_complex_type(complex_type);
        }
    }

    structure
}

fn parse_element(
    doc: &XmlDocument,
    node: NodeId,
    processed: &mut ProcessedNodes,
    structure: &mut Structure,
    is_root: bool,
) -> ElementId {
    let xml = doc.node(node);
    let mut element = Element::new(xml.attribute("name").unwrap_or_default());
    element.set_root(is_root);

    if let Some(type_name) = xml.non_empty_attribute("type") {
        element.set_type(type_name);
    }
    if let Some(min_occurs) = xml.non_empty_attribute("minOccurs") {
        element.set_min_occurs(parse_min_occurs(element.name(), min_occurs));
    }
    if let Some(max_occurs) = xml.non_empty_attribute("maxOccurs") {
        element.set_max_occurs(max_occurs);
    }
    if let Some(text) = documentation(doc, node) {
        element.set_documentation(text);
    }

    // Only the first unprocessed inline complex type is folded.
    let inline_type = doc
        .children_named(node, XS, local_name::COMPLEX_TYPE)
        .find(|candidate| processed.mark(*candidate));
    if let Some(inline_type) = inline_type {
        parse_content(doc, inline_type, processed, structure, &mut element);
    }

    trace!(
        name = element.name(),
        children = element.children().len(),
        attributes = element.attributes().len(),
        "parsed element"
    );
    structure.alloc(element)
}

fn parse_complex_type(
    doc: &XmlDocument,
    node: NodeId,
    processed: &mut ProcessedNodes,
    structure: &mut Structure,
) -> ComplexType {
    let xml = doc.node(node);
    let mut complex_type = ComplexType::new(xml.attribute("name").unwrap_or_default());
    complex_type.set_abstract(xml.attribute("abstract").is_some_and(is_true));
    complex_type.set_mixed(xml.attribute("mixed").is_some_and(is_true));
    if let Some(text) = documentation(doc, node) {
        complex_type.set_documentation(text);
    }

    parse_content(doc, node, processed, structure, &mut complex_type);

    trace!(
        name = complex_type.name(),
        elements = complex_type.element_count(),
        attributes = complex_type.attribute_count(),
        "parsed complex type"
    );
    complex_type
}

/// Sequences, then choices, then attributes (direct, then derived).
fn parse_content<S: ContentSink>(
    doc: &XmlDocument,
    node: NodeId,
    processed: &mut ProcessedNodes,
    structure: &mut Structure,
    sink: &mut S,
) {
    // Choices are flattened exactly like sequences.
    for group in [local_name::SEQUENCE, local_name::CHOICE] {
        for particle in doc.children_named(node, XS, group) {
            parse_group(doc, particle, processed, structure, sink);
        }
    }

    parse_attributes(doc, node, processed, sink);
    for (content, derivation) in DERIVATION_PATHS {
        for content_node in doc.children_named(node, XS, content) {
            for derivation_node in doc.children_named(content_node, XS, derivation) {
                if let Some(base) = doc.node(derivation_node).non_empty_attribute("base") {
                    sink.record_base_type(base);
                }
                parse_attributes(doc, derivation_node, processed, sink);
            }
        }
    }
}

fn parse_group<S: ContentSink>(
    doc: &XmlDocument,
    group: NodeId,
    processed: &mut ProcessedNodes,
    structure: &mut Structure,
    sink: &mut S,
) {
    for child in doc.children_named(group, XS, local_name::ELEMENT) {
        if processed.mark(child) {
            let id = parse_element(doc, child, processed, structure, false);
            sink.add_element(id);
        }
    }
}

fn parse_attributes<S: ContentSink>(
    doc: &XmlDocument,
    node: NodeId,
    processed: &mut ProcessedNodes,
    sink: &mut S,
) {
    for child in doc.children_named(node, XS, local_name::ATTRIBUTE) {
        if processed.mark(child) {
            sink.add_attribute(parse_attribute(doc, child));
        }
    }
}

fn parse_attribute(doc: &XmlDocument, node: NodeId) -> Attribute {
    let xml = doc.node(node);
    let mut attribute = Attribute::new(xml.attribute("name").unwrap_or_default());

    if let Some(type_name) = xml.non_empty_attribute("type") {
        attribute = attribute.with_type(type_name);
    }
    if let Some(usage) = xml.non_empty_attribute("use") {
        let parsed = AttributeUse::parse(usage).unwrap_or_else(|| {
            warn!(
                attribute = attribute.name(),
                usage, "unknown attribute use, assuming optional"
            );
            AttributeUse::Optional
        });
        attribute = attribute.with_use(parsed);
    }
    if let Some(default) = xml.non_empty_attribute("default") {
        attribute = attribute.with_default(default);
    }
    if let Some(fixed) = xml.non_empty_attribute("fixed") {
        attribute = attribute.with_fixed(fixed);
    }
    if let Some(text) = documentation(doc, node) {
        attribute = attribute.with_documentation(text);
    }

    trace!(name = attribute.name(), "parsed attribute");
    attribute
}

/// Trimmed text of the first `<annotation>/<documentation>`, if present.
fn documentation(doc: &XmlDocument, node: NodeId) -> Option<String> {
    let annotation = doc.first_child_named(node, XS, local_name::ANNOTATION)?;
    let documentation = doc.first_child_named(annotation, XS, local_name::DOCUMENTATION)?;
    Some(doc.text_content(documentation).trim().to_string())
}

/// Malformed or negative values fall back to 1.
fn parse_min_occurs(element: &str, value: &str) -> u32 {
    value.parse().unwrap_or_else(|_| {
        warn!(element, value, "malformed minOccurs, using 1");
        1
    })
}

fn is_true(value: &str) -> bool {
    matches!(value, "true" | "1")
}
