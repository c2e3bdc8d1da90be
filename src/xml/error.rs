//! Error types for XML reading.

use thiserror::Error;

use super::XmlEngine;

/// Why an engine gave up on a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum XmlErrorKind {
    /// The document is not well-formed XML.
    Syntax,
    /// Elements are nested deeper than
    /// [`MAX_NESTING_DEPTH`](crate::base::constants::MAX_NESTING_DEPTH).
    NestingLimit,
}

/// One engine's failure to turn the input into an [`XmlDocument`](super::XmlDocument).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{engine} engine: {message}")]
pub struct XmlError {
    /// The engine configuration that failed.
    pub engine: XmlEngine,
    pub kind: XmlErrorKind,
    /// The underlying cause, as reported by the engine.
    pub message: String,
}

impl XmlError {
    /// Create a syntax error for `engine`.
    pub fn new(engine: XmlEngine, message: impl Into<String>) -> Self {
        Self {
            engine,
            kind: XmlErrorKind::Syntax,
            message: message.into(),
        }
    }

    pub fn is_nesting_limit(&self) -> bool {
        self.kind == XmlErrorKind::NestingLimit
    }
}

/// The input declares (or starts with the mark of) an encoding it does not
/// actually use.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("input is not valid {encoding}")]
pub struct EncodingError {
    pub encoding: &'static str,
}

/// Engine-independent reading failure, tagged with its engine by
/// [`XmlEngine::parse`].
#[derive(Debug)]
pub(crate) struct ReadError {
    pub(crate) kind: XmlErrorKind,
    pub(crate) message: String,
}

impl ReadError {
    pub(crate) fn nesting_limit(limit: usize) -> Self {
        Self {
            kind: XmlErrorKind::NestingLimit,
            message: format!("elements nested deeper than {limit} levels"),
        }
    }

    /// Prefix a syntax message with the byte position it was found at.
    pub(crate) fn at(mut self, position: impl std::fmt::Display) -> Self {
        if self.kind == XmlErrorKind::Syntax {
            self.message = format!("XML parse error at position {position}: {}", self.message);
        }
        self
    }

    pub(crate) fn into_xml_error(self, engine: XmlEngine) -> XmlError {
        XmlError {
            engine,
            kind: self.kind,
            message: self.message,
        }
    }
}

impl From<String> for ReadError {
    fn from(message: String) -> Self {
        Self {
            kind: XmlErrorKind::Syntax,
            message,
        }
    }
}
