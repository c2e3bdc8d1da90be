//! Tests for the layout engine

use super::*;
use crate::base::{Point, Rect, Size};
use crate::model::{ElementId, Structure};
use crate::parser::parse_schema;

fn structure(body: &str) -> Structure {
    let text = format!(r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">{body}</xs:schema>"#);
    parse_schema(text.as_bytes()).expect("schema should parse")
}

/// Default geometry without the minimum canvas clamp.
fn unclamped() -> LayoutEngine {
    LayoutEngine::new(LayoutConfig::default().with_min_canvas(0, 0))
}

fn id_of(structure: &Structure, name: &str) -> ElementId {
    structure.find_by_name(name)[0].id()
}

fn roots_only(structure: &Structure) -> impl Fn(ElementId) -> bool + '_ {
    move |id| structure.element(id).is_some_and(|e| e.is_root())
}

const NESTED: &str = r#"
  <xs:element name="A"><xs:complexType><xs:sequence>
    <xs:element name="B"><xs:complexType><xs:sequence>
      <xs:element name="D"/>
    </xs:sequence></xs:complexType></xs:element>
    <xs:element name="C"/>
  </xs:sequence></xs:complexType></xs:element>"#;

#[test]
fn test_empty_structure_gives_empty_canvas() {
    let layout = LayoutEngine::default().compute(&Structure::default(), &|_: ElementId| true);
    assert!(layout.is_empty());
    assert_eq!(layout.size, Size::new(400, 200));
    assert_eq!(layout.message, Some(EMPTY_MESSAGE));
}

#[test]
fn test_root_with_one_child() {
    let s = structure(
        r#"<xs:element name="A"><xs:complexType><xs:sequence>
             <xs:element name="B"/></xs:sequence></xs:complexType></xs:element>"#,
    );
    let layout = unclamped().compute(&s, &roots_only(&s));

    assert_eq!(layout.boxes.len(), 2);
    let a = &layout.boxes[0];
    assert_eq!(a.bounds, Rect::new(50, 50, 140, 60));
    assert_eq!(a.depth, 0);
    assert_eq!(a.expander, Some(Rect::new(55, 55, 16, 16)));
    assert!(a.expanded);
    assert_eq!(a.style, NodeStyle::RootElement);

    let b = &layout.boxes[1];
    assert_eq!(b.bounds, Rect::new(230, 50, 140, 60));
    assert_eq!(b.depth, 1);
    assert_eq!(b.expander, None);
    assert_eq!(b.style, NodeStyle::Element);

    assert_eq!(
        layout.connectors,
        [Connector {
            from: Point::new(190, 80),
            to: Point::new(230, 80),
        }]
    );
    assert_eq!(layout.max_depth, 1);
    assert_eq!(layout.content_height, 100 + 80);
    assert_eq!(layout.size, Size::new(2 * 180 + 100, 180 + 100));
    assert_eq!(layout.message, None);
}

#[test]
fn test_minimum_canvas_applies() {
    let s = structure(r#"<xs:element name="A"/>"#);
    let layout = LayoutEngine::default().compute(&s, &roots_only(&s));
    assert_eq!(layout.size, Size::new(800, 600));
}

#[test]
fn test_collapsed_root_hides_children() {
    let s = structure(NESTED);
    let layout = unclamped().compute(&s, &|_: ElementId| false);

    assert_eq!(layout.boxes.len(), 1);
    assert!(layout.connectors.is_empty());
    assert!(!layout.boxes[0].expanded);
    assert!(layout.boxes[0].expander.is_some());
    assert_eq!(layout.max_depth, 0);
    assert_eq!(layout.content_height, 60 + 80);
    assert_eq!(layout.size.width, 180 + 100);
}

#[test]
fn test_fully_expanded_tree_in_paint_order() {
    let s = structure(NESTED);
    let layout = unclamped().compute(&s, &|_: ElementId| true);

    let placed: Vec<_> = layout
        .boxes
        .iter()
        .map(|node| (node.label[0].as_str(), node.bounds.origin(), node.depth))
        .collect();
    assert_eq!(
        placed,
        [
            ("A", Point::new(50, 50), 0),
            ("B", Point::new(230, 50), 1),
            ("D", Point::new(410, 50), 2),
            ("C", Point::new(230, 190), 1),
        ]
    );
    // B reserves 60 + 40 for D, then the sibling gap; C adds 60 + 40.
    assert_eq!(layout.content_height, 240 + 80);
    assert_eq!(layout.max_depth, 2);
    assert_eq!(layout.size, Size::new(3 * 180 + 100, 320 + 100));
    assert_eq!(layout.connectors.len(), 3);
}

#[test]
fn test_siblings_are_separated_by_half_spacing() {
    let s = structure(
        r#"<xs:element name="A"><xs:complexType><xs:sequence>
             <xs:element name="B"/><xs:element name="C"/>
           </xs:sequence></xs:complexType></xs:element>"#,
    );
    let layout = unclamped().compute(&s, &roots_only(&s));
    let c = layout.element_box(id_of(&s, "C")).expect("C visible");
    assert_eq!(c.bounds.origin(), Point::new(230, 150));
    assert_eq!(layout.content_height, 200 + 80);
}

#[test]
fn test_complex_types_follow_root_elements() {
    let s = structure(
        r#"<xs:element name="R"/>
           <xs:complexType name="T"><xs:sequence>
             <xs:element name="x"/><xs:element name="y"/>
           </xs:sequence></xs:complexType>"#,
    );
    let layout = unclamped().compute(&s, &roots_only(&s));

    let t = layout
        .boxes
        .iter()
        .find(|node| node.node == NodeRef::ComplexType(0))
        .expect("complex type box");
    assert_eq!(t.bounds.origin(), Point::new(50, 50 + 60 + 80));
    assert_eq!(t.expander, None);
    assert_eq!(t.style, NodeStyle::ComplexType);
    assert_eq!(t.label, ["<<T>>", "ComplexType"]);

    let y = layout.element_box(id_of(&s, "y")).expect("type members are always shown");
    assert_eq!(y.bounds.origin(), Point::new(230, 190 + 100));
    assert_eq!(y.depth, 1);

    // Complex types do not count toward the canvas depth.
    assert_eq!(layout.max_depth, 0);
    assert_eq!(layout.content_height, (60 + 80) + (200 + 80));
}

#[test]
fn test_element_labels() {
    let s = structure(
        r#"<xs:element name="order" type="OrderType" minOccurs="0" maxOccurs="unbounded"/>
           <xs:element name="note"/>"#,
    );
    let layout = unclamped().compute(&s, &roots_only(&s));
    assert_eq!(layout.boxes[0].label, ["order", "(OrderType)", "[0..unbounded]"]);
    assert_eq!(layout.boxes[1].label, ["note", "(string)"]);
}

#[test]
fn test_attribute_markers_stack_right_of_box() {
    let s = structure(
        r#"<xs:element name="e"><xs:complexType>
             <xs:attribute name="a"/><xs:attribute name="b"/>
           </xs:complexType></xs:element>"#,
    );
    let layout = unclamped().compute(&s, &roots_only(&s));
    let e = id_of(&s, "e");
    let bounds: Vec<_> = layout.markers_of(e).map(|marker| marker.bounds).collect();
    assert_eq!(bounds, [Rect::new(195, 60, 15, 15), Rect::new(195, 75, 15, 15)]);
    // Markers take no column space.
    assert_eq!(layout.size.width, 180 + 100);
    assert_eq!(layout.boxes[0].expander, None);
}

#[test]
fn test_hit_testing() {
    let s = structure(NESTED);
    let layout = unclamped().compute(&s, &roots_only(&s));
    let a = id_of(&s, "A");

    let hit = layout.expander_at(Point::new(55, 55)).expect("affordance");
    assert_eq!(hit.node, NodeRef::Element(a));
    assert!(layout.expander_at(Point::new(60, 80)).is_none());

    assert_eq!(layout.box_at(Point::new(190, 110)).map(|n| n.node), Some(NodeRef::Element(a)));
    assert!(layout.box_at(Point::new(200, 80)).is_none());
    assert!(layout.box_at(Point::new(0, 0)).is_none());
}

#[test]
fn test_collapsing_never_increases_height() {
    let s = structure(NESTED);
    let engine = unclamped();
    for element in s.elements() {
        let target = element.id();
        let expanded = engine.compute(&s, &|_: ElementId| true);
        let collapsed = engine.compute(&s, &|id: ElementId| id != target);
        assert!(
            collapsed.content_height <= expanded.content_height,
            "collapsing {} grew the diagram",
            element.name()
        );
        assert!(collapsed.size.height <= expanded.size.height);
    }
}

#[test]
fn test_custom_config() {
    let config = LayoutConfig::new()
        .with_node_size(100, 40)
        .with_horizontal_spacing(120)
        .with_vertical_spacing(20)
        .with_margin(10)
        .with_min_canvas(0, 0);
    let s = structure(
        r#"<xs:element name="A"><xs:complexType><xs:sequence>
             <xs:element name="B"/></xs:sequence></xs:complexType></xs:element>"#,
    );
    let layout = LayoutEngine::new(config).compute(&s, &roots_only(&s));
    assert_eq!(layout.boxes[1].bounds, Rect::new(130, 10, 100, 40));
    assert_eq!(layout.content_height, 50 + 20);
    assert_eq!(layout.size, Size::new(2 * 120 + 20, 70 + 20));
}

#[cfg(feature = "serde")]
#[test]
fn test_layout_json_export() {
    let s = structure(r#"<xs:element name="A"/>"#);
    let json = unclamped().compute(&s, &roots_only(&s)).to_json().expect("serialize");
    assert!(json.contains("\"RootElement\""));
    assert!(json.contains("\"boxes\""));
}
