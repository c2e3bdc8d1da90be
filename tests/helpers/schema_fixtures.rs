//! Common XSD fixtures for tests.

/// Wrap declarations in an `xs:schema` root.
pub fn schema(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
{body}
</xs:schema>"#
    )
}

pub const EMPTY_SCHEMA: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema"/>"#;

pub const SINGLE_ELEMENT: &str = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <xs:element name="note" type="xs:string"/>
</xs:schema>"#;

/// The purchase order schema: one root, two named types.
pub const PURCHASE_ORDER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<xsd:schema xmlns:xsd="http://www.w3.org/2001/XMLSchema"
            targetNamespace="http://example.com/po">
  <xsd:annotation>
    <xsd:documentation xml:lang="en">Purchase order schema.</xsd:documentation>
  </xsd:annotation>

  <xsd:element name="purchaseOrder">
    <xsd:annotation>
      <xsd:documentation>A customer order.</xsd:documentation>
    </xsd:annotation>
    <xsd:complexType>
      <xsd:sequence>
        <xsd:element name="shipTo" type="USAddress"/>
        <xsd:element name="comment" type="xsd:string" minOccurs="0"/>
        <xsd:element name="items">
          <xsd:complexType>
            <xsd:sequence>
              <xsd:element name="item" minOccurs="0" maxOccurs="unbounded">
                <xsd:complexType>
                  <xsd:sequence>
                    <xsd:element name="productName" type="xsd:string"/>
                    <xsd:element name="quantity" type="xsd:positiveInteger"/>
                  </xsd:sequence>
                  <xsd:attribute name="partNum" type="SKU" use="required"/>
                </xsd:complexType>
              </xsd:element>
            </xsd:sequence>
          </xsd:complexType>
        </xsd:element>
      </xsd:sequence>
      <xsd:attribute name="orderDate" type="xsd:date"/>
    </xsd:complexType>
  </xsd:element>

  <xsd:complexType name="USAddress">
    <xsd:sequence>
      <xsd:element name="name" type="xsd:string"/>
      <xsd:element name="street" type="xsd:string"/>
      <xsd:element name="zip" type="xsd:decimal"/>
    </xsd:sequence>
    <xsd:attribute name="country" type="xsd:NMTOKEN" fixed="US"/>
  </xsd:complexType>

  <xsd:complexType name="PremiumAddress">
    <xsd:complexContent>
      <xsd:extension base="USAddress">
        <xsd:attribute name="tier" type="xsd:string" default="gold"/>
      </xsd:extension>
    </xsd:complexContent>
  </xsd:complexType>
</xsd:schema>"#;
