//! Parser Tests - Schema walk
//!
//! Element scoping, occurrences, attributes, complex types and the engine
//! fallback chain, exercised through the public API.

mod helpers;

use helpers::schema_fixtures::*;
use helpers::structure_assertions::*;
use rstest::rstest;
use xsd_view::model::AttributeUse;
use xsd_view::parser::{ParseError, SchemaParser};
use xsd_view::xml::XmlEngine;

// ============================================================================
// Scoping
// ============================================================================

#[test]
fn test_purchase_order_shape() {
    let structure = parse(PURCHASE_ORDER);
    assert_eq!(root_names(&structure), ["purchaseOrder"]);
    assert_eq!(
        child_names(&structure, "purchaseOrder"),
        ["shipTo", "comment", "items"]
    );
    assert_eq!(child_names(&structure, "items"), ["item"]);
    assert_eq!(child_names(&structure, "item"), ["productName", "quantity"]);
    assert_eq!(structure.target_namespace(), "http://example.com/po");

    let names: Vec<_> = structure.complex_types().iter().map(|t| t.name()).collect();
    assert_eq!(names, ["USAddress", "PremiumAddress"]);
    assert_eq!(structure.element_count(), 10);
}

#[test]
fn test_type_references_are_not_resolved() {
    let structure = parse(PURCHASE_ORDER);
    let ship_to = element(&structure, "shipTo");
    assert_eq!(ship_to.type_name(), "USAddress");
    assert!(!ship_to.has_children());
}

#[rstest]
#[case("", 0, 0)]
#[case(r#"<xs:element name="a"/>"#, 1, 0)]
#[case(r#"<xs:element name="a"/><xs:element name="b"/>"#, 2, 0)]
#[case(r#"<xs:complexType name="T"/>"#, 0, 1)]
#[case(
    r#"<xs:element name="a"><xs:complexType><xs:sequence><xs:element name="b"/></xs:sequence></xs:complexType></xs:element>"#,
    1,
    0
)]
fn test_top_level_counts(#[case] body: &str, #[case] roots: usize, #[case] types: usize) {
    let structure = parse(&schema(body));
    assert_eq!(structure.root_ids().len(), roots);
    assert_eq!(structure.complex_types().len(), types);
    assert_eq!(structure.is_empty(), roots == 0 && types == 0);
}

// ============================================================================
// Occurrences
// ============================================================================

#[rstest]
#[case("", 1, "1", "")]
#[case(r#"minOccurs="0""#, 0, "1", "[0..1]")]
#[case(r#"maxOccurs="unbounded""#, 1, "unbounded", "[1..unbounded]")]
#[case(r#"minOccurs="2" maxOccurs="5""#, 2, "5", "[2..5]")]
#[case(r#"minOccurs="abc""#, 1, "1", "")]
#[case(r#"minOccurs="""#, 1, "1", "")]
#[case(r#"maxOccurs="many""#, 1, "many", "[1..many]")]
fn test_occurrences(
    #[case] attrs: &str,
    #[case] min: u32,
    #[case] max: &str,
    #[case] occurrence: &str,
) {
    let structure = parse(&schema(&format!(r#"<xs:element name="e" {attrs}/>"#)));
    let e = element(&structure, "e");
    assert_eq!(e.min_occurs(), min);
    assert_eq!(e.max_occurs(), max);
    assert_eq!(e.occurrence(), occurrence);
}

// ============================================================================
// Attributes
// ============================================================================

#[rstest]
#[case(r#"use="required""#, AttributeUse::Required)]
#[case(r#"use="optional""#, AttributeUse::Optional)]
#[case(r#"use="prohibited""#, AttributeUse::Prohibited)]
#[case("", AttributeUse::Optional)]
#[case(r#"use="REQUIRED""#, AttributeUse::Optional)]
fn test_attribute_use(#[case] attrs: &str, #[case] expected: AttributeUse) {
    let body = format!(
        r#"<xs:element name="e"><xs:complexType><xs:attribute name="a" {attrs}/></xs:complexType></xs:element>"#
    );
    let structure = parse(&schema(&body));
    assert_eq!(element(&structure, "e").attributes()[0].usage(), expected);
}

#[rstest]
#[case("partNum", "@partNum (SKU) *")]
#[case("orderDate", "@orderDate (xsd:date)")]
fn test_element_attribute_display(#[case] name: &str, #[case] expected: &str) {
    let structure = parse(PURCHASE_ORDER);
    let owner = structure
        .elements()
        .iter()
        .find(|e| e.find_attribute(name).is_some())
        .expect("owner");
    assert_eq!(owner.find_attribute(name).map(|a| a.to_string()).as_deref(), Some(expected));
}

#[test]
fn test_complex_type_attributes_and_derivation() {
    let structure = parse(PURCHASE_ORDER);

    let address = structure.complex_type("USAddress").expect("USAddress");
    assert_eq!(address.element_count(), 3);
    assert_eq!(
        address.find_attribute("country").and_then(|a| a.fixed_value()),
        Some("US")
    );

    let premium = structure.complex_type("PremiumAddress").expect("PremiumAddress");
    assert_eq!(premium.base_type(), Some("USAddress"));
    assert!(!premium.has_elements());
    assert_eq!(premium.attributes()[0].to_string(), "@tier (xsd:string) [default=gold]");
    assert_eq!(premium.display_name(), "<<PremiumAddress>> extends USAddress");
}

#[test]
fn test_documentation() {
    let structure = parse(PURCHASE_ORDER);
    assert_eq!(
        element(&structure, "purchaseOrder").documentation(),
        Some("A customer order.")
    );
    assert_eq!(element(&structure, "item").documentation(), None);
}

// ============================================================================
// Engines and failures
// ============================================================================

#[rstest]
#[case(XmlEngine::Strict)]
#[case(XmlEngine::Tolerant)]
#[case(XmlEngine::Minimal)]
fn test_every_engine_builds_the_same_structure(#[case] engine: XmlEngine) {
    let structure = SchemaParser::with_engines([engine])
        .parse_str(PURCHASE_ORDER)
        .expect("parse");
    assert_eq!(structure, parse(PURCHASE_ORDER));
}

#[rstest]
#[case("")]
#[case("not xml")]
#[case("<xs:schema xmlns:xs=\"http://www.w3.org/2001/XMLSchema\">")]
#[case("<a></b>")]
fn test_malformed_input_is_structural_error(#[case] input: &str) {
    let err = SchemaParser::new().parse_str(input).expect_err("malformed");
    assert!(matches!(err, ParseError::Structural { attempts: 3, .. }));
    assert!(err.to_string().contains("well-formed"));
}

#[test]
fn test_doctype_falls_back_to_tolerant_engine() {
    let input = format!("<!DOCTYPE schema>\n{SINGLE_ELEMENT}");
    assert!(SchemaParser::with_engines([XmlEngine::Strict]).parse_str(&input).is_err());
    let structure = SchemaParser::new().parse_str(&input).expect("fallback");
    assert_eq!(root_names(&structure), ["note"]);
}

#[test]
fn test_parser_is_reusable_across_documents() {
    let parser = SchemaParser::new();
    let first = parser.parse_str(PURCHASE_ORDER).expect("first");
    let second = parser.parse_str(SINGLE_ELEMENT).expect("second");
    let third = parser.parse_str(PURCHASE_ORDER).expect("third");
    assert_eq!(root_names(&second), ["note"]);
    assert_eq!(first, third);
}

#[test]
fn test_empty_schema_summary() {
    let structure = parse(EMPTY_SCHEMA);
    assert!(structure.is_empty());
    assert_eq!(structure.summary(), "Root elements: 0 | Complex types: 0");
}
