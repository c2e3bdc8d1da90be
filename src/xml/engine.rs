//! XML engine configurations tried by the schema parser.
//!
//! The parser walks an ordered list of engines and keeps the first document
//! that parses. Each step is more permissive than the one before it, and none
//! of them ever resolves external entities or loads an external DTD:
//!
//! | Engine     | Backend   | DOCTYPE                       |
//! |------------|-----------|-------------------------------|
//! | `Strict`   | quick-xml | rejected                      |
//! | `Tolerant` | quick-xml | skipped (entities not defined)|
//! | `Minimal`  | roxmltree | internal subset honoured      |

use std::fmt;

use super::{XmlDocument, XmlError, minimal, reader};

/// A namespace-aware XML engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum XmlEngine {
    /// Hardened quick-xml reader; any DOCTYPE declaration is an error.
    Strict,
    /// quick-xml reader that skips DOCTYPE declarations.
    Tolerant,
    /// roxmltree with the internal DTD subset enabled.
    Minimal,
}

impl XmlEngine {
    /// The default fallback chain, in the order it is tried.
    pub const DEFAULT_CHAIN: [XmlEngine; 3] = [Self::Strict, Self::Tolerant, Self::Minimal];

    /// Short human-readable engine name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Tolerant => "tolerant",
            Self::Minimal => "minimal",
        }
    }

    /// Parse `input` into a document tree.
    pub fn parse(&self, input: &[u8]) -> Result<XmlDocument, XmlError> {
        let result = match self {
            Self::Strict => reader::read_document(input, reader::DoctypePolicy::Reject),
            Self::Tolerant => reader::read_document(input, reader::DoctypePolicy::Skip),
            Self::Minimal => minimal::read_document(input),
        };
        result.map_err(|error| error.into_xml_error(*self))
    }
}

impl fmt::Display for XmlEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
