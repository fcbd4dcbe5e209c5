use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::source::{NodeEvent, NodeKind, NodeSource, SourceError};

use super::error::XmlSourceError;
use super::layout;
use super::reader::{cdata_payload, tag_value, text_payload};

/// Node source reading an XML document from any buffered reader.
pub struct XmlSource<R> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
    tag_attribute: Option<Vec<u8>>,
    finished: bool,
}

impl XmlSource<BufReader<File>> {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(SourceError::from)?;
        Ok(Self::from_reader(BufReader::with_capacity(
            layout::READ_BUFFER_SIZE,
            file,
        )))
    }
}

impl<R: BufRead> XmlSource<R> {
    pub fn from_reader(inner: R) -> Self {
        Self {
            reader: Reader::from_reader(inner),
            buf: Vec::new(),
            depth: 0,
            tag_attribute: None,
            finished: false,
        }
    }

    /// Read tags from the named attribute instead of the first one.
    pub fn with_tag_attribute(mut self, attribute: Option<&str>) -> Self {
        self.tag_attribute = attribute.map(|name| name.as_bytes().to_vec());
        self
    }
}

impl<R: BufRead> NodeSource for XmlSource<R> {
    fn next_node(&mut self) -> Result<Option<NodeEvent>, SourceError> {
        next_node(self).map_err(SourceError::from)
    }
}

fn next_node<R: BufRead>(source: &mut XmlSource<R>) -> Result<Option<NodeEvent>, XmlSourceError> {
    if source.finished {
        return Ok(None);
    }
    loop {
        source.buf.clear();
        let position = source.reader.buffer_position();
        let event = source
            .reader
            .read_event_into(&mut source.buf)
            .map_err(|e| XmlSourceError::Xml {
                context: "read event",
                position: source.reader.buffer_position(),
                message: e.to_string(),
            })?;
        let attribute = source.tag_attribute.as_deref();

        let node = match event {
            Event::Start(start) => {
                let tag = tag_value(&start, attribute, position)?;
                let depth = source.depth;
                source.depth += 1;
                Some(NodeEvent {
                    kind: NodeKind::ElementStart { tag },
                    depth,
                })
            }
            Event::Empty(start) => {
                let tag = tag_value(&start, attribute, position)?;
                Some(NodeEvent {
                    kind: NodeKind::ElementStart { tag },
                    depth: source.depth,
                })
            }
            Event::End(_) => {
                source.depth = source.depth.saturating_sub(1);
                Some(NodeEvent::other(source.depth))
            }
            Event::Text(text) => text_payload(&text, position)?.map(|payload| NodeEvent {
                kind: NodeKind::Text { payload },
                depth: source.depth,
            }),
            Event::CData(data) => cdata_payload(&data, position)?.map(|payload| NodeEvent {
                kind: NodeKind::Text { payload },
                depth: source.depth,
            }),
            Event::Eof => {
                source.finished = true;
                if source.depth > 0 {
                    return Err(XmlSourceError::Truncated { open: source.depth });
                }
                return Ok(None);
            }
            _ => Some(NodeEvent::other(source.depth)),
        };

        if node.is_some() {
            return Ok(node);
        }
    }
}
