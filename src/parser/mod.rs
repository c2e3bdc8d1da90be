//! XSD parser: raw schema markup → [`Structure`].
//!
//! ## Pipeline
//!
//! ```text
//! bytes ──▶ to_utf8 ──▶ XmlEngine chain ──▶ XmlDocument ──▶ schema walk ──▶ Structure
//!           (BOM or     (first success)                    (ProcessedNodes
//!            declared)                                      per call)
//! ```
//!
//! ## Usage
//!
//! ```
//! use xsd_view::parser::SchemaParser;
//!
//! let xsd = r#"<xs:schema xmlns:xs="http://www.w3.org/2001/XMLSchema">
//!   <xs:element name="note" type="xs:string"/>
//! </xs:schema>"#;
//!
//! let structure = SchemaParser::new().parse_str(xsd)?;
//! assert_eq!(structure.root_elements().count(), 1);
//! # Ok::<(), xsd_view::parser::ParseError>(())
//! ```

mod error;
mod schema;
mod visited;

pub use error::ParseError;

use visited::ProcessedNodes;

use std::io::Read;

use tracing::{debug, warn};

use crate::base::constants::MAX_NESTING_DEPTH;
use crate::model::Structure;
use crate::xml::{XmlDocument, XmlEngine, XmlError, to_utf8};

/// Parses XSD documents into [`Structure`]s.
///
/// A parser holds only its engine configuration; all parse-scoped state is
/// created fresh inside each call.
#[derive(Debug, Clone)]
pub struct SchemaParser {
    engines: Vec<XmlEngine>,
}

impl Default for SchemaParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaParser {
    /// A parser using [`XmlEngine::DEFAULT_CHAIN`].
    pub fn new() -> Self {
        Self::with_engines(XmlEngine::DEFAULT_CHAIN)
    }

    /// A parser trying `engines` in order.
    pub fn with_engines(engines: impl IntoIterator<Item = XmlEngine>) -> Self {
        Self {
            engines: engines.into_iter().collect(),
        }
    }

    pub fn engines(&self) -> &[XmlEngine] {
        &self.engines
    }

    /// Parse an XSD document held in memory.
    ///
    /// Non-UTF-8 input is transcoded first, following its byte order mark or
    /// the `encoding` of its XML declaration.
    pub fn parse(&self, input: &[u8]) -> Result<Structure, ParseError> {
        let input = to_utf8(input)?;
        let document = self.read_document(&input)?;
        let mut processed = ProcessedNodes::default();
        let structure = schema::build_structure(&document, &mut processed);
        debug!(
            roots = structure.root_ids().len(),
            complex_types = structure.complex_types().len(),
            elements = structure.element_count(),
            processed = processed.len(),
            "built schema structure"
        );
        Ok(structure)
    }

    pub fn parse_str(&self, input: &str) -> Result<Structure, ParseError> {
        self.parse(input.as_bytes())
    }

    /// Read the whole stream, then parse it.
    pub fn parse_reader(&self, mut reader: impl Read) -> Result<Structure, ParseError> {
        let mut input = Vec::new();
        reader.read_to_end(&mut input)?;
        self.parse(&input)
    }

    /// Try each engine in order; the first success wins.
    ///
    /// Hitting the nesting limit stops the chain, since every engine shares it.
    fn read_document(&self, input: &[u8]) -> Result<XmlDocument, ParseError> {
        let mut last_error: Option<XmlError> = None;
        for engine in &self.engines {
            debug!(engine = engine.name(), "parsing XML");
            match engine.parse(input) {
                Ok(document) => return Ok(document),
                Err(error) if error.is_nesting_limit() => {
                    warn!(engine = engine.name(), %error, "document nested too deeply");
                    return Err(ParseError::TooDeep {
                        limit: MAX_NESTING_DEPTH,
                    });
                }
                Err(error) => {
                    warn!(engine = engine.name(), %error, "XML engine failed");
                    last_error = Some(error);
                }
            }
        }
        match last_error {
            Some(source) => Err(ParseError::Structural {
                attempts: self.engines.len(),
                source,
            }),
            None => Err(ParseError::NoEngines),
        }
    }
}

/// Parse an XSD document with the default engine chain.
pub fn parse_schema(input: &[u8]) -> Result<Structure, ParseError> {
    SchemaParser::new().parse(input)
}
