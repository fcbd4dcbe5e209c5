//! btconfig core library for offline inspection of Bluetooth pairing
//! databases.
//!
//! This crate implements the scan pipeline used by the CLI: a node source
//! turns the Bluedroid `bt_config.xml` document into depth-annotated node
//! events, a dispatcher routes each text payload to a field decoder chosen
//! from the most recent tag, and an address registry detects devices that
//! share an address. All I/O is isolated in `source`; decoders are pure.
//!
//! Invariants:
//! - Decoder selection is an ordered substring match on the active tag; the
//!   earliest marker wins.
//! - Only successfully parsed addresses enter the registry; nothing leaves it.
//! - A parse failure keeps everything decoded before it.
//!
//! # Examples
//! ```no_run
//! use std::path::Path;
//!
//! use btconfig_core::{ScanOptions, render_text, scan_config_file};
//!
//! let report = scan_config_file(Path::new("bt_config.xml"), &ScanOptions::default())?;
//! println!("{}", render_text(&report));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

mod fields;
mod render;
mod scan;
mod source;

pub use fields::{
    Address, AddressError, BLUETOOTH_UUIDS, Decoded, DeviceClass, FieldTag, FieldValue,
    HogpReportEntry, Named, REPORT_TYPES, ServiceEntry, SymbolTables, Timestamp, decode_device_class,
    decode_field, decode_hogp_reports, decode_services, decode_timestamp, lookup,
};
pub use render::{render_lines, render_text};
pub use scan::{
    AddressRegistry, DEFAULT_RECORD_DEPTH, Dispatcher, Phase, ScanError, ScanOptions, ScanOutcome,
    TraversalState, scan_config_file, scan_source, scan_str,
};
pub use source::{DEFAULT_CONFIG_PATH, NodeEvent, NodeKind, NodeSource, SourceError, XmlSource};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Scan report with records in document order.
///
/// # Examples
/// ```
/// use btconfig_core::make_stub_report;
///
/// let report = make_stub_report("bt_config.xml", 123);
/// assert_eq!(report.report_version, btconfig_core::REPORT_VERSION);
/// assert!(report.records.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    pub tool: ToolInfo,
    pub input: InputInfo,
    /// Fields decoded outside any device record.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub loose_fields: Vec<DecodedField>,
    pub records: Vec<DeviceRecord>,
    /// First address decoded from an `Address` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_adapter: Option<Address>,
    /// Set when a remote entry reuses the local adapter address.
    pub local_adapter_conflict: bool,
    /// Distinct addresses in the order they were first seen.
    pub addresses: Vec<Address>,
    /// Addresses seen more than once, in order of first repeat.
    pub conflicts: Vec<Address>,
    /// Reader failure that ended the scan early, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

/// Tool metadata embedded in reports.
///
/// # Examples
/// ```
/// use btconfig_core::ToolInfo;
///
/// let tool = ToolInfo {
///     name: "btconfig".to_string(),
///     version: "0.1.0".to_string(),
/// };
/// assert_eq!(tool.name, "btconfig");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

/// Input document metadata embedded in reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path as provided to the scanner.
    pub path: String,
    /// Input size in bytes.
    pub bytes: u64,
}

/// One decoded text payload and the tag that selected its decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedField {
    pub tag: String,
    /// Depth of the element that carried `tag`.
    pub depth: usize,
    pub value: FieldValue,
}

/// Fields grouped under one element at the record depth.
///
/// # Examples
/// ```
/// use btconfig_core::{Address, DeviceRecord};
///
/// let record = DeviceRecord {
///     tag: Some("00:1A:7D:DA:71:13".to_string()),
///     depth: 2,
///     address: Address::parse("00:1A:7D:DA:71:13"),
///     fields: Vec::new(),
/// };
/// assert!(record.address.is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub depth: usize,
    /// Address the record tag parses to, when it is one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    pub fields: Vec<DecodedField>,
}

/// Build a stub report with base fields filled and empty aggregates.
pub fn make_stub_report(input_path: &str, input_bytes: u64) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "btconfig".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        loose_fields: vec![],
        records: vec![],
        local_adapter: None,
        local_adapter_conflict: false,
        addresses: vec![],
        conflicts: vec![],
        parse_error: None,
    }
}
