use serde::{Deserialize, Serialize};

use super::address::Address;
use super::dev_class::{DeviceClass, decode_device_class};
use super::hogp::{HogpReportEntry, decode_hogp_reports};
use super::layout;
use super::service::{ServiceEntry, decode_services};
use super::symbols::SymbolTables;
use super::tag::FieldTag;
use super::timestamp::{Timestamp, decode_timestamp};

/// Decoded value of one text payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldValue {
    Services { entries: Vec<ServiceEntry> },
    /// Raw descriptor text; not decoded further.
    HidDescriptor { raw: String },
    HogpReports { entries: Vec<HogpReportEntry> },
    /// Raw attribute tokens; not decoded further.
    GattAttributes { tokens: Vec<String> },
    DeviceClass(DeviceClass),
    Timestamp(Timestamp),
    Address {
        raw: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        address: Option<Address>,
    },
    Text { raw: String },
}

impl FieldValue {
    pub fn address(&self) -> Option<Address> {
        match self {
            FieldValue::Address { address, .. } => *address,
            _ => None,
        }
    }
}

/// Decode a text payload with the decoder selected by `tag`.
pub fn decode_field(tag: FieldTag, payload: &str, tables: &SymbolTables<'_>) -> FieldValue {
    match tag {
        FieldTag::Service => FieldValue::Services {
            entries: decode_services(payload, tables),
        },
        FieldTag::HidDescriptor => FieldValue::HidDescriptor {
            raw: payload.to_string(),
        },
        FieldTag::HogpReport => FieldValue::HogpReports {
            entries: decode_hogp_reports(payload, tables),
        },
        FieldTag::GattAttribute => FieldValue::GattAttributes {
            tokens: payload
                .split(layout::TOKEN_SEPARATOR)
                .map(str::to_string)
                .collect(),
        },
        FieldTag::DeviceClass => FieldValue::DeviceClass(decode_device_class(payload)),
        FieldTag::Timestamp => FieldValue::Timestamp(decode_timestamp(payload)),
        FieldTag::Address => FieldValue::Address {
            raw: payload.to_string(),
            address: Address::parse(payload),
        },
        FieldTag::PlainText => FieldValue::Text {
            raw: payload.to_string(),
        },
    }
}
