//! Lookups and assertions over parsed structures.

use xsd_view::{DiagramController, Element, ElementId, Structure, parse_schema};

/// Parse or fail the test.
pub fn parse(text: &str) -> Structure {
    parse_schema(text.as_bytes()).expect("schema should parse")
}

/// The single element named `name`.
pub fn element<'a>(structure: &'a Structure, name: &str) -> &'a Element {
    let found = structure.find_by_name(name);
    assert_eq!(found.len(), 1, "expected exactly one element named {name}");
    found[0]
}

pub fn id(structure: &Structure, name: &str) -> ElementId {
    element(structure, name).id()
}

pub fn child_names(structure: &Structure, name: &str) -> Vec<String> {
    structure
        .children(element(structure, name))
        .map(|child| child.name().to_string())
        .collect()
}

pub fn root_names(structure: &Structure) -> Vec<String> {
    structure
        .root_elements()
        .map(|root| root.name().to_string())
        .collect()
}

/// First label line of every visible box, in paint order.
pub fn visible(controller: &DiagramController) -> Vec<String> {
    controller
        .layout()
        .boxes
        .iter()
        .map(|node| node.label[0].clone())
        .collect()
}
