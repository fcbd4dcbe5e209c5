use thiserror::Error;

#[derive(Debug, Error)]
pub enum XmlSourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("XML error ({context}) at byte {position}: {message}")]
    Xml {
        context: &'static str,
        position: u64,
        message: String,
    },
    #[error("document ended with {open} unclosed element(s)")]
    Truncated { open: usize },
}
