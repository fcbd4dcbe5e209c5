use serde::{Deserialize, Serialize};

use super::decoded::{Decoded, decode_decimal, decode_hex_u16};
use super::layout;
use super::symbols::{SymbolTables, lookup};

/// A numeric identifier together with its resolved display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Named<T> {
    pub value: Decoded<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// One HOGP report, `uuid:report-id:report-type:property:instance-id`.
///
/// Sub-fields missing from the end of the token are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HogpReportEntry {
    pub raw: String,
    pub uuid: Option<Named<u16>>,
    pub report_id: Option<String>,
    pub report_type: Option<Named<u8>>,
    pub property: Option<String>,
    pub instance_id: Option<String>,
}

/// Decode a space-separated list of HOGP report tokens.
pub fn decode_hogp_reports(payload: &str, tables: &SymbolTables<'_>) -> Vec<HogpReportEntry> {
    payload
        .split(layout::TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(|token| decode_report_token(token, tables))
        .collect()
}

fn decode_report_token(token: &str, tables: &SymbolTables<'_>) -> HogpReportEntry {
    let mut parts = token
        .split(layout::HOGP_FIELD_DELIMITER)
        .take(layout::HOGP_FIELD_COUNT);

    let uuid = parts.next().map(|text| {
        let value = decode_hex_u16(text);
        Named {
            name: value
                .parsed()
                .and_then(|v| lookup(tables.uuids, v))
                .map(str::to_string),
            value,
        }
    });
    let report_id = parts.next().map(str::to_string);
    let report_type = parts.next().map(|text| {
        let value = decode_decimal::<u8>(text);
        Named {
            name: value
                .parsed()
                .and_then(|v| lookup(tables.report_types, v))
                .map(str::to_string),
            value,
        }
    });
    let property = parts.next().map(str::to_string);
    let instance_id = parts.next().map(str::to_string);

    HogpReportEntry {
        raw: token.to_string(),
        uuid,
        report_id,
        report_type,
        property,
        instance_id,
    }
}

#[cfg(test)]
mod tests {
    use super::{Named, decode_hogp_reports};
    use crate::fields::decoded::Decoded;
    use crate::fields::symbols::SymbolTables;

    const UUIDS: &[(u16, &str)] = &[(0x2a4d, "ReportMap")];
    const REPORT_TYPES: &[(u8, &str)] = &[(3, "Input")];

    fn tables() -> SymbolTables<'static> {
        SymbolTables {
            uuids: UUIDS,
            report_types: REPORT_TYPES,
        }
    }

    #[test]
    fn decodes_full_report() {
        let reports = decode_hogp_reports("2a4d:01:3:dynamic:0", &tables());
        assert_eq!(reports.len(), 1);
        let report = &reports[0];
        assert_eq!(
            report.uuid,
            Some(Named {
                value: Decoded::Parsed(0x2a4d),
                name: Some("ReportMap".to_string()),
            })
        );
        assert_eq!(report.report_id.as_deref(), Some("01"));
        assert_eq!(
            report.report_type,
            Some(Named {
                value: Decoded::Parsed(3),
                name: Some("Input".to_string()),
            })
        );
        assert_eq!(report.property.as_deref(), Some("dynamic"));
        assert_eq!(report.instance_id.as_deref(), Some("0"));
    }

    #[test]
    fn missing_trailing_fields_are_absent() {
        let reports = decode_hogp_reports("2a4d:02", &tables());
        let report = &reports[0];
        assert_eq!(report.report_id.as_deref(), Some("02"));
        assert!(report.report_type.is_none());
        assert!(report.property.is_none());
        assert!(report.instance_id.is_none());
    }

    #[test]
    fn multiple_reports_skip_empty_tokens() {
        let reports = decode_hogp_reports("2a4d:01:1:a:0  2a4d:02:2:b:1", &tables());
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[1].instance_id.as_deref(), Some("1"));
    }

    #[test]
    fn bad_report_type_defaults() {
        let reports = decode_hogp_reports("2a4d:01:x:a:0", &tables());
        let report_type = reports[0].report_type.as_ref().unwrap();
        assert_eq!(report_type.value, Decoded::Defaulted(0));
        assert!(report_type.name.is_none());
    }

    #[test]
    fn extra_fields_are_ignored() {
        let reports = decode_hogp_reports("2a4d:01:3:p:7:extra", &tables());
        assert_eq!(reports[0].instance_id.as_deref(), Some("7"));
    }
}
