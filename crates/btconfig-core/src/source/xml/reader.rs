use quick_xml::events::{BytesCData, BytesStart, BytesText};

use super::error::XmlSourceError;

/// Extract the tag-bearing attribute value of an element.
///
/// With `attribute == None` the first attribute is used. The value is kept
/// as written; only an empty value counts as absent.
///
/// # Examples
/// This helper is part of an internal module, so the example is marked as
/// text example.
/// ```text
/// use quick_xml::events::BytesStart;
///
/// let start = BytesStart::from_content(r#"N3 Tag="Adapter""#, 2);
/// assert_eq!(tag_value(&start, None, 0).unwrap().as_deref(), Some("Adapter"));
/// ```
pub fn tag_value(
    start: &BytesStart<'_>,
    attribute: Option<&[u8]>,
    position: u64,
) -> Result<Option<String>, XmlSourceError> {
    for attr in start.attributes() {
        let attr = attr.map_err(|e| XmlSourceError::Xml {
            context: "element attribute",
            position,
            message: e.to_string(),
        })?;
        if attribute.is_some_and(|name| attr.key.as_ref() != name) {
            continue;
        }
        let value = attr.unescape_value().map_err(|e| XmlSourceError::Xml {
            context: "attribute value",
            position,
            message: e.to_string(),
        })?;
        if value.is_empty() {
            return Ok(None);
        }
        return Ok(Some(value.into_owned()));
    }
    Ok(None)
}

/// Unescape character data. Whitespace-only runs are formatting between
/// elements and are dropped; any other payload is kept verbatim.
pub fn text_payload(text: &BytesText<'_>, position: u64) -> Result<Option<String>, XmlSourceError> {
    let value = text.unescape().map_err(|e| XmlSourceError::Xml {
        context: "text content",
        position,
        message: e.to_string(),
    })?;
    Ok(non_blank(&value))
}

/// Decode a CDATA section as UTF-8, with the same whitespace rule as text.
pub fn cdata_payload(
    data: &BytesCData<'_>,
    position: u64,
) -> Result<Option<String>, XmlSourceError> {
    let value = std::str::from_utf8(data).map_err(|e| XmlSourceError::Xml {
        context: "cdata",
        position,
        message: e.to_string(),
    })?;
    Ok(non_blank(value))
}

pub fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
