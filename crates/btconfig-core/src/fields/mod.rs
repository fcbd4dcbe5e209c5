//! Field decoders.
//!
//! Every text payload in a device record is decoded by one micro-grammar
//! selected from the active tag name:
//! - `layout`: separators, markers and bit positions (source of truth)
//! - `symbols`: identifier-to-name tables
//! - `decoded`: best-effort numeric results
//! - one module per field kind (`address`, `service`, `hogp`, `dev_class`,
//!   `timestamp`)
//!
//! Decoders are pure and never fail: malformed numbers degrade to
//! `Decoded::Defaulted` and malformed addresses to `None`.

pub mod address;
pub mod decoded;
pub mod dev_class;
pub mod error;
pub mod hogp;
pub mod layout;
pub mod service;
pub mod symbols;
pub mod tag;
pub mod timestamp;
pub mod value;

pub use address::Address;
pub use decoded::Decoded;
pub use dev_class::{DeviceClass, decode_device_class};
pub use error::AddressError;
pub use hogp::{HogpReportEntry, Named, decode_hogp_reports};
pub use service::{ServiceEntry, decode_services};
pub use symbols::{BLUETOOTH_UUIDS, REPORT_TYPES, SymbolTables, lookup};
pub use tag::FieldTag;
pub use timestamp::{Timestamp, decode_timestamp};
pub use value::{FieldValue, decode_field};
