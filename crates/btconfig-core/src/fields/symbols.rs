//! Identifier-to-name symbol tables.
//!
//! Tables are ordered `(value, name)` slices scanned front to back; the first
//! matching entry wins.

/// Look up the display name for `value` in an ordered symbol table.
///
/// # Examples
/// ```
/// use btconfig_core::lookup;
///
/// let table = [(0x1101u16, "SerialPort"), (0x1800, "GenericAccess")];
/// assert_eq!(lookup(&table, 0x1800), Some("GenericAccess"));
/// assert_eq!(lookup(&table, 0x1802), None);
/// ```
pub fn lookup<'a, V: PartialEq>(table: &[(V, &'a str)], value: V) -> Option<&'a str> {
    table
        .iter()
        .find(|(candidate, _)| *candidate == value)
        .map(|(_, name)| *name)
}

/// Symbol tables used by the field decoders.
///
/// `Default` provides the built-in Bluetooth tables; tests and callers may
/// substitute their own.
#[derive(Debug, Clone, Copy)]
pub struct SymbolTables<'a> {
    pub uuids: &'a [(u16, &'a str)],
    pub report_types: &'a [(u8, &'a str)],
}

impl Default for SymbolTables<'static> {
    fn default() -> Self {
        Self {
            uuids: BLUETOOTH_UUIDS,
            report_types: REPORT_TYPES,
        }
    }
}

/// HID report types as stored in the Report Reference descriptor.
pub const REPORT_TYPES: &[(u8, &str)] = &[(1, "Input"), (2, "Output"), (3, "Feature")];

/// 16-bit Bluetooth SIG assigned UUIDs: protocols, service classes, GATT
/// services and the characteristics found in paired device records.
pub const BLUETOOTH_UUIDS: &[(u16, &str)] = &[
    // Protocols
    (0x0001, "SDP"),
    (0x0003, "RFCOMM"),
    (0x0005, "TCS-BIN"),
    (0x0007, "ATT"),
    (0x0008, "OBEX"),
    (0x000f, "BNEP"),
    (0x0011, "HIDP"),
    (0x0017, "AVCTP"),
    (0x0019, "AVDTP"),
    (0x001e, "MCAP Control Channel"),
    (0x001f, "MCAP Data Channel"),
    (0x0100, "L2CAP"),
    // Service classes and profiles
    (0x1000, "Service Discovery Server Service Class ID"),
    (0x1001, "Browse Group Descriptor Service Class ID"),
    (0x1101, "Serial Port"),
    (0x1102, "LAN Access Using PPP"),
    (0x1103, "Dialup Networking"),
    (0x1104, "IrMC Sync"),
    (0x1105, "OBEX Object Push"),
    (0x1106, "OBEX File Transfer"),
    (0x1107, "IrMC Sync Command"),
    (0x1108, "Headset"),
    (0x1109, "Cordless Telephony"),
    (0x110a, "Audio Source"),
    (0x110b, "Audio Sink"),
    (0x110c, "A/V Remote Control Target"),
    (0x110d, "Advanced Audio Distribution"),
    (0x110e, "A/V Remote Control"),
    (0x110f, "A/V Remote Control Controller"),
    (0x1110, "Intercom"),
    (0x1111, "Fax"),
    (0x1112, "Headset Audio Gateway"),
    (0x1113, "WAP"),
    (0x1114, "WAP Client"),
    (0x1115, "PANU"),
    (0x1116, "NAP"),
    (0x1117, "GN"),
    (0x1118, "Direct Printing"),
    (0x1119, "Reference Printing"),
    (0x111a, "Basic Imaging Profile"),
    (0x111b, "Imaging Responder"),
    (0x111c, "Imaging Automatic Archive"),
    (0x111d, "Imaging Referenced Objects"),
    (0x111e, "Handsfree"),
    (0x111f, "Handsfree Audio Gateway"),
    (0x1120, "Direct Printing Reference Objects Service"),
    (0x1121, "Reflected UI"),
    (0x1122, "Basic Printing"),
    (0x1123, "Printing Status"),
    (0x1124, "Human Interface Device Service"),
    (0x1125, "Hardcopy Cable Replacement"),
    (0x1126, "HCR Print"),
    (0x1127, "HCR Scan"),
    (0x1128, "Common ISDN Access"),
    (0x112d, "SIM Access"),
    (0x112e, "Phonebook Access Client"),
    (0x112f, "Phonebook Access Server"),
    (0x1130, "Phonebook Access"),
    (0x1131, "Headset HS"),
    (0x1132, "Message Access Server"),
    (0x1133, "Message Notification Server"),
    (0x1134, "Message Access Profile"),
    (0x1135, "GNSS"),
    (0x1136, "GNSS Server"),
    (0x1200, "PnP Information"),
    (0x1201, "Generic Networking"),
    (0x1202, "Generic File Transfer"),
    (0x1203, "Generic Audio"),
    (0x1204, "Generic Telephony"),
    (0x1205, "UPNP Service"),
    (0x1206, "UPNP IP Service"),
    (0x1300, "ESDP UPNP IP PAN"),
    (0x1301, "ESDP UPNP IP LAP"),
    (0x1302, "ESDP UPNP L2CAP"),
    (0x1303, "Video Source"),
    (0x1304, "Video Sink"),
    (0x1305, "Video Distribution"),
    (0x1400, "HDP"),
    (0x1401, "HDP Source"),
    (0x1402, "HDP Sink"),
    // GATT services
    (0x1800, "Generic Access Profile"),
    (0x1801, "Generic Attribute Profile"),
    (0x1802, "Immediate Alert"),
    (0x1803, "Link Loss"),
    (0x1804, "Tx Power"),
    (0x1805, "Current Time Service"),
    (0x1806, "Reference Time Update Service"),
    (0x1807, "Next DST Change Service"),
    (0x1808, "Glucose"),
    (0x1809, "Health Thermometer"),
    (0x180a, "Device Information"),
    (0x180d, "Heart Rate"),
    (0x180e, "Phone Alert Status Service"),
    (0x180f, "Battery Service"),
    (0x1810, "Blood Pressure"),
    (0x1811, "Alert Notification Service"),
    (0x1812, "Human Interface Device"),
    (0x1813, "Scan Parameters"),
    (0x1814, "Running Speed and Cadence"),
    (0x1815, "Automation IO"),
    (0x1816, "Cycling Speed and Cadence"),
    (0x1818, "Cycling Power"),
    (0x1819, "Location and Navigation"),
    (0x181a, "Environmental Sensing"),
    (0x181c, "User Data"),
    (0x181d, "Weight Scale"),
    (0x181e, "Bond Management"),
    (0x1820, "Internet Protocol Support"),
    // GATT declarations and descriptors
    (0x2800, "Primary Service"),
    (0x2801, "Secondary Service"),
    (0x2802, "Include"),
    (0x2803, "Characteristic"),
    (0x2900, "Characteristic Extended Properties"),
    (0x2901, "Characteristic User Description"),
    (0x2902, "Client Characteristic Configuration"),
    (0x2903, "Server Characteristic Configuration"),
    (0x2904, "Characteristic Format"),
    (0x2905, "Characteristic Aggregate Format"),
    (0x2907, "External Report Reference"),
    (0x2908, "Report Reference"),
    // GATT characteristics
    (0x2a00, "Device Name"),
    (0x2a01, "Appearance"),
    (0x2a02, "Peripheral Privacy Flag"),
    (0x2a03, "Reconnection Address"),
    (0x2a04, "Peripheral Preferred Connection Parameters"),
    (0x2a05, "Service Changed"),
    (0x2a19, "Battery Level"),
    (0x2a22, "Boot Keyboard Input Report"),
    (0x2a23, "System ID"),
    (0x2a24, "Model Number String"),
    (0x2a25, "Serial Number String"),
    (0x2a26, "Firmware Revision String"),
    (0x2a27, "Hardware Revision String"),
    (0x2a28, "Software Revision String"),
    (0x2a29, "Manufacturer Name String"),
    (0x2a32, "Boot Keyboard Output Report"),
    (0x2a33, "Boot Mouse Input Report"),
    (0x2a37, "Heart Rate Measurement"),
    (0x2a4a, "HID Information"),
    (0x2a4b, "Report Map"),
    (0x2a4c, "HID Control Point"),
    (0x2a4d, "Report"),
    (0x2a4e, "Protocol Mode"),
    (0x2a4f, "Scan Interval Window"),
    (0x2a50, "PnP ID"),
];

#[cfg(test)]
mod tests {
    use super::{BLUETOOTH_UUIDS, REPORT_TYPES, lookup};

    #[test]
    fn first_match_wins() {
        let table = [(7u8, "first"), (7, "second")];
        assert_eq!(lookup(&table, 7), Some("first"));
    }

    #[test]
    fn missing_value_is_none() {
        assert_eq!(lookup(REPORT_TYPES, 9), None);
        let empty: [(u16, &str); 0] = [];
        assert_eq!(lookup(&empty, 1), None);
    }

    #[test]
    fn builtin_tables_resolve_common_ids() {
        assert_eq!(lookup(BLUETOOTH_UUIDS, 0x110a), Some("Audio Source"));
        assert_eq!(lookup(BLUETOOTH_UUIDS, 0x1812), Some("Human Interface Device"));
        assert_eq!(lookup(BLUETOOTH_UUIDS, 0x2a4b), Some("Report Map"));
        assert_eq!(lookup(REPORT_TYPES, 1), Some("Input"));
    }

    #[test]
    fn builtin_uuid_table_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        for (value, _) in BLUETOOTH_UUIDS {
            assert!(seen.insert(*value), "duplicate uuid {value:#06x}");
        }
    }
}
