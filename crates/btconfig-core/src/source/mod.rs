mod xml;

pub use xml::{DEFAULT_CONFIG_PATH, XmlSource};

use thiserror::Error;

/// Kind of a node event, with the data the dispatcher needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Element start; `tag` is the value of its tag-bearing attribute.
    ElementStart { tag: Option<String> },
    /// Trimmed, non-empty character data.
    Text { payload: String },
    /// Declarations, doctypes, comments, end tags.
    Other,
}

/// One step of a depth-first document traversal.
///
/// The root element has depth 0; text directly inside an element at depth
/// `d` has depth `d + 1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeEvent {
    pub kind: NodeKind,
    pub depth: usize,
}

impl NodeEvent {
    pub fn element(depth: usize, tag: Option<&str>) -> Self {
        Self {
            kind: NodeKind::ElementStart {
                tag: tag.map(str::to_string),
            },
            depth,
        }
    }

    pub fn text(depth: usize, payload: &str) -> Self {
        Self {
            kind: NodeKind::Text {
                payload: payload.to_string(),
            },
            depth,
        }
    }

    pub fn other(depth: usize) -> Self {
        Self {
            kind: NodeKind::Other,
            depth,
        }
    }
}

/// Pull-based producer of node events.
///
/// `Ok(None)` marks the end of the document; an error ends the stream.
pub trait NodeSource {
    fn next_node(&mut self) -> Result<Option<NodeEvent>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML parse error: {0}")]
    Xml(String),
    #[error("document ended with {open} unclosed element(s)")]
    Truncated { open: usize },
}

impl From<xml::error::XmlSourceError> for SourceError {
    fn from(value: xml::error::XmlSourceError) -> Self {
        match value {
            xml::error::XmlSourceError::Io(err) => SourceError::Io(err),
            xml::error::XmlSourceError::Xml {
                context,
                position,
                message,
            } => SourceError::Xml(format!("{context} at byte {position}: {message}")),
            xml::error::XmlSourceError::Truncated { open } => SourceError::Truncated { open },
        }
    }
}
