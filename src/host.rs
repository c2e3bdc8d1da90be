//! File entry point: open an `.xsd` file as a diagram.
//!
//! ```no_run
//! use xsd_view::host::{OpenedSchema, SchemaHost};
//!
//! match SchemaHost::new().open("orders.xsd".as_ref())? {
//!     OpenedSchema::Diagram(controller) => println!("{}", controller.summary()),
//!     OpenedSchema::Empty { message, .. } => println!("{message}"),
//! }
//! # Ok::<(), xsd_view::host::HostError>(())
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use crate::base::constants::XSD_EXTENSION;
use crate::interaction::DiagramController;
use crate::layout::{EMPTY_MESSAGE, LayoutConfig};
use crate::parser::{ParseError, SchemaParser};

/// Whether `path` names an XSD file (extension `xsd`, any case).
pub fn is_schema_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(XSD_EXTENSION))
}

/// Open `path` with the default parser and layout.
pub fn open_schema(path: &Path) -> Result<OpenedSchema, HostError> {
    SchemaHost::new().open(path)
}

/// What opening a schema file produced.
#[derive(Debug)]
pub enum OpenedSchema {
    /// A diagram ready to render and click.
    Diagram(DiagramController),
    /// The file parsed but declares nothing to display.
    Empty {
        path: PathBuf,
        message: &'static str,
    },
}

impl OpenedSchema {
    pub fn controller(&self) -> Option<&DiagramController> {
        match self {
            Self::Diagram(controller) => Some(controller),
            Self::Empty { .. } => None,
        }
    }

    pub fn into_controller(self) -> Option<DiagramController> {
        match self {
            Self::Diagram(controller) => Some(controller),
            Self::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Parser and layout settings used to open files.
#[derive(Debug, Clone, Default)]
pub struct SchemaHost {
    parser: SchemaParser,
    config: LayoutConfig,
}

impl SchemaHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parser(mut self, parser: SchemaParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn with_config(mut self, config: LayoutConfig) -> Self {
        self.config = config;
        self
    }

    /// Parse the file and build its diagram.
    ///
    /// Files without the `xsd` extension are refused before anything is read.
    pub fn open(&self, path: &Path) -> Result<OpenedSchema, HostError> {
        if !is_schema_file(path) {
            return Err(HostError::InvalidFile(path.to_path_buf()));
        }
        let bytes = std::fs::read(path)?;
        self.open_bytes(path, &bytes)
    }

    /// Build a diagram from content already in memory; `path` only labels it.
    pub fn open_bytes(&self, path: &Path, bytes: &[u8]) -> Result<OpenedSchema, HostError> {
        let structure = self.parser.parse(bytes)?;
        if structure.is_empty() {
            debug!(path = %path.display(), "schema has nothing to display");
            return Ok(OpenedSchema::Empty {
                path: path.to_path_buf(),
                message: EMPTY_MESSAGE,
            });
        }
        info!(path = %path.display(), summary = %structure.summary(), "opened schema");
        Ok(OpenedSchema::Diagram(DiagramController::with_config(
            structure,
            self.config,
        )))
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// Errors from opening a schema file.
#[derive(Debug, Error)]
pub enum HostError {
    /// Not an `.xsd` file.
    #[error("invalid file: {}", .0.display())]
    InvalidFile(PathBuf),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}
