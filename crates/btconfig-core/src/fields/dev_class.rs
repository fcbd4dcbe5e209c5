use serde::{Deserialize, Serialize};

use super::decoded::{Decoded, decode_decimal};
use super::layout;

/// Decoded Class of Device value.
///
/// The document stores the 24-bit class as a decimal integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceClass {
    pub value: Decoded<u32>,
    /// Class bytes, least significant first.
    pub bytes: [u8; layout::COD_LEN],
    pub major_device: String,
    pub minor_device: u8,
    pub services: Vec<String>,
}

const MAJOR_SERVICE_CLASSES: &[(u32, &str)] = &[
    (0, "Limited Discoverable Mode"),
    (3, "Positioning"),
    (4, "Networking"),
    (5, "Rendering"),
    (6, "Capturing"),
    (7, "Object Transfer"),
    (8, "Audio"),
    (9, "Telephony"),
    (10, "Information"),
];

const MAJOR_DEVICE_CLASSES: &[(u32, &str)] = &[
    (0x00, "Miscellaneous"),
    (0x01, "Computer"),
    (0x02, "Phone"),
    (0x03, "LAN/Network Access Point"),
    (0x04, "Audio/Video"),
    (0x05, "Peripheral"),
    (0x06, "Imaging"),
    (0x07, "Wearable"),
    (0x08, "Toy"),
    (0x09, "Health"),
    (0x1f, "Uncategorized"),
];

/// Decode a decimal Class of Device payload; non-numeric input yields
/// `Defaulted(0)`.
pub fn decode_device_class(payload: &str) -> DeviceClass {
    let value = decode_decimal::<u32>(payload);
    if !value.is_parsed() {
        tracing::warn!(payload, "device class is not a decimal integer");
    }
    let raw = value.value();
    let [b0, b1, b2, _] = raw.to_le_bytes();

    let major = (raw >> layout::COD_MAJOR_DEVICE_SHIFT) & layout::COD_MAJOR_DEVICE_MASK;
    let minor = (raw >> layout::COD_MINOR_DEVICE_SHIFT) & layout::COD_MINOR_DEVICE_MASK;
    let service_bits = (raw >> layout::COD_MAJOR_SERVICE_SHIFT) & layout::COD_MAJOR_SERVICE_MASK;

    let major_device = super::symbols::lookup(MAJOR_DEVICE_CLASSES, major)
        .map(str::to_string)
        .unwrap_or_else(|| format!("Reserved ({major:#04x})"));
    let services = MAJOR_SERVICE_CLASSES
        .iter()
        .filter(|(bit, _)| service_bits & (1u32 << *bit) != 0)
        .map(|(_, name)| name.to_string())
        .collect();

    DeviceClass {
        value,
        bytes: [b0, b1, b2],
        major_device,
        minor_device: minor as u8,
        services,
    }
}
