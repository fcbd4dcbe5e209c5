/// Separator between entries of list-valued fields (services, reports, attributes).
pub const TOKEN_SEPARATOR: char = ' ';
/// Delimiter ending the UUID prefix of a service token.
pub const SERVICE_UUID_DELIMITER: char = '-';
/// Delimiter between the sub-fields of a HOGP report token.
pub const HOGP_FIELD_DELIMITER: char = ':';
/// Number of sub-fields carried by a HOGP report token.
pub const HOGP_FIELD_COUNT: usize = 5;

pub const ADDRESS_LEN: usize = 6;
pub const ADDRESS_SEPARATORS: [char; 2] = [':', '-'];
pub const ADDRESS_OCTET_DIGITS: usize = 2;

pub const SERVICE_MARKER: &str = "Service";
pub const HID_DESCRIPTOR_MARKER: &str = "HidDescriptor";
pub const HOGP_REPORT_MARKER: &str = "HogpRpt";
pub const GATT_ATTRIBUTE_MARKER: &str = "GattAttrs";
pub const DEVICE_CLASS_MARKER: &str = "DevClass";
pub const TIMESTAMP_MARKER: &str = "Timestamp";
pub const ADDRESS_MARKER: &str = "Address";

pub const COD_MAJOR_SERVICE_SHIFT: u32 = 13;
pub const COD_MAJOR_SERVICE_MASK: u32 = 0x7ff;
pub const COD_MAJOR_DEVICE_SHIFT: u32 = 8;
pub const COD_MAJOR_DEVICE_MASK: u32 = 0x1f;
pub const COD_MINOR_DEVICE_SHIFT: u32 = 2;
pub const COD_MINOR_DEVICE_MASK: u32 = 0x3f;
pub const COD_LEN: usize = 3;
