use serde::{Deserialize, Serialize};

use super::layout;

/// Field kind selected for a text payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTag {
    Service,
    HidDescriptor,
    HogpReport,
    GattAttribute,
    DeviceClass,
    Timestamp,
    Address,
    PlainText,
}

/// Markers tested against the active tag, in priority order.
const MARKERS: [(&str, FieldTag); 7] = [
    (layout::SERVICE_MARKER, FieldTag::Service),
    (layout::HID_DESCRIPTOR_MARKER, FieldTag::HidDescriptor),
    (layout::HOGP_REPORT_MARKER, FieldTag::HogpReport),
    (layout::GATT_ATTRIBUTE_MARKER, FieldTag::GattAttribute),
    (layout::DEVICE_CLASS_MARKER, FieldTag::DeviceClass),
    (layout::TIMESTAMP_MARKER, FieldTag::Timestamp),
    (layout::ADDRESS_MARKER, FieldTag::Address),
];

impl FieldTag {
    /// Classify an active tag name.
    ///
    /// The first marker contained anywhere in `tag` wins, so a tag holding
    /// several markers resolves to the earliest one in `MARKERS`.
    ///
    /// # Examples
    /// ```
    /// use btconfig_core::FieldTag;
    ///
    /// assert_eq!(FieldTag::classify("ServiceAndDevClass"), FieldTag::Service);
    /// assert_eq!(FieldTag::classify("LeDevClass"), FieldTag::DeviceClass);
    /// assert_eq!(FieldTag::classify("Name"), FieldTag::PlainText);
    /// ```
    pub fn classify(tag: &str) -> FieldTag {
        MARKERS
            .iter()
            .find(|(marker, _)| tag.contains(*marker))
            .map(|(_, kind)| *kind)
            .unwrap_or(FieldTag::PlainText)
    }
}
