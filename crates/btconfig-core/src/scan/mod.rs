use std::path::Path;

use thiserror::Error;

use crate::fields::SymbolTables;
use crate::source::{NodeSource, SourceError, XmlSource};
use crate::{Report, make_stub_report};

mod dispatch;
mod registry;

pub use dispatch::{Dispatcher, Phase, ScanOutcome, TraversalState};
pub use registry::AddressRegistry;

/// Depth of the elements that delimit device records in a Bluedroid config.
pub const DEFAULT_RECORD_DEPTH: usize = 2;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("unable to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: SourceError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Scan configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Attribute carrying element tags; `None` uses each element's first
    /// attribute.
    pub tag_attribute: Option<String>,
    /// Depth at which elements start a new device record.
    pub record_depth: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            tag_attribute: None,
            record_depth: DEFAULT_RECORD_DEPTH,
        }
    }
}

pub fn scan_config_file(path: &Path, options: &ScanOptions) -> Result<Report, ScanError> {
    let source = XmlSource::open(path)
        .map_err(|source| ScanError::Open {
            path: path.display().to_string(),
            source,
        })?
        .with_tag_attribute(options.tag_attribute.as_deref());
    let bytes = path.metadata()?.len();
    Ok(scan_source(
        &path.display().to_string(),
        bytes,
        source,
        options,
    ))
}

/// Scan an in-memory document.
///
/// # Examples
/// ```
/// use btconfig_core::{ScanOptions, scan_str};
///
/// let xml = r#"<N1 Tag="Bluedroid"><N2 Tag="Remote">
///     <N3 Tag="aa:bb:cc:dd:ee:ff"><N4 Tag="Name">Headset</N4></N3>
///     <N3 Tag="AA:BB:CC:DD:EE:FF"/>
/// </N2></N1>"#;
/// let report = scan_str(xml, &ScanOptions::default());
/// assert_eq!(report.addresses.len(), 1);
/// assert_eq!(report.conflicts.len(), 1);
/// ```
pub fn scan_str(xml: &str, options: &ScanOptions) -> Report {
    let source =
        XmlSource::from_reader(xml.as_bytes()).with_tag_attribute(options.tag_attribute.as_deref());
    scan_source("<memory>", xml.len() as u64, source, options)
}

/// Drive a node source to the end and build the report.
///
/// A source error stops the scan; everything decoded before it is kept and
/// the error is recorded in `Report::parse_error`.
pub fn scan_source<S: NodeSource>(
    input_path: &str,
    input_bytes: u64,
    mut source: S,
    options: &ScanOptions,
) -> Report {
    let mut dispatcher = Dispatcher::new(SymbolTables::default(), options.record_depth);
    let mut parse_error = None;

    loop {
        match source.next_node() {
            Ok(Some(event)) => {
                dispatcher.dispatch(event);
            }
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(input = input_path, error = %err, "failed to parse");
                parse_error = Some(err.to_string());
                break;
            }
        }
    }

    let outcome = dispatcher.finish();
    let mut report = make_stub_report(input_path, input_bytes);
    report.local_adapter = outcome.registry.local_adapter();
    report.local_adapter_conflict = outcome.registry.local_adapter_conflict();
    report.addresses = outcome.registry.dump_all().to_vec();
    report.conflicts = outcome.registry.report_conflicts().to_vec();
    report.loose_fields = outcome.loose_fields;
    report.records = outcome.records;
    report.parse_error = parse_error;
    tracing::debug!(
        records = report.records.len(),
        addresses = report.addresses.len(),
        conflicts = report.conflicts.len(),
        "scan finished"
    );
    report
}
