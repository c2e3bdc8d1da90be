//! Error types for schema parsing.

use thiserror::Error;

use crate::xml::{EncodingError, XmlError};

/// Errors that abort a parse. There is no partial result.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The document is not well-formed: every configured engine failed.
    #[error("failed to parse XSD after {attempts} attempt(s); check that the file is well-formed: {source}")]
    Structural {
        attempts: usize,
        /// The last engine's failure.
        #[source]
        source: XmlError,
    },

    /// Elements are nested deeper than the readers accept.
    #[error("XSD nests elements deeper than {limit} levels")]
    TooDeep { limit: usize },

    /// The input is not valid in the encoding it declares.
    #[error("failed to decode XSD: {0}")]
    Encoding(#[from] EncodingError),

    /// The parser was configured without any engine.
    #[error("no XML engine configured")]
    NoEngines,

    /// Reading the input stream failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ParseError {
    /// The last engine failure, for structural errors.
    pub fn xml_cause(&self) -> Option<&XmlError> {
        match self {
            Self::Structural { source, .. } => Some(source),
            _ => None,
        }
    }
}
