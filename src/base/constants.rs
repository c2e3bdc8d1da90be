//! Domain constants shared by the parser and the host command.

/// The XML Schema namespace. Only nodes bound to this URI are recognized.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// File extension accepted by the host command (compared case-insensitively).
pub const XSD_EXTENSION: &str = "xsd";

/// Type name reported for elements and attributes that declare none.
pub const DEFAULT_TYPE: &str = "string";

/// `maxOccurs` reported when the attribute is absent.
pub const DEFAULT_MAX_OCCURS: &str = "1";

/// Deepest element nesting accepted in an input document.
///
/// Bounds every recursive walk over the document, the model and the layout.
pub const MAX_NESTING_DEPTH: usize = 512;

/// Literal `maxOccurs` value meaning "no upper bound".
pub const UNBOUNDED: &str = "unbounded";

/// Local names of the XSD constructs the parser recognizes.
pub mod local_name {
    pub const ELEMENT: &str = "element";
    pub const COMPLEX_TYPE: &str = "complexType";
    pub const SEQUENCE: &str = "sequence";
    pub const CHOICE: &str = "choice";
    pub const ATTRIBUTE: &str = "attribute";
    pub const ANNOTATION: &str = "annotation";
    pub const DOCUMENTATION: &str = "documentation";
    pub const COMPLEX_CONTENT: &str = "complexContent";
    pub const SIMPLE_CONTENT: &str = "simpleContent";
    pub const EXTENSION: &str = "extension";
    pub const RESTRICTION: &str = "restriction";
}

/// Derivation paths searched for inherited attributes, in search order.
pub const DERIVATION_PATHS: [(&str, &str); 4] = [
    (local_name::COMPLEX_CONTENT, local_name::EXTENSION),
    (local_name::SIMPLE_CONTENT, local_name::EXTENSION),
    (local_name::COMPLEX_CONTENT, local_name::RESTRICTION),
    (local_name::SIMPLE_CONTENT, local_name::RESTRICTION),
];
