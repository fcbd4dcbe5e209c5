//! Human-readable report rendering.
//!
//! Indentation follows element depth: one tab for record elements (depth 2),
//! two tabs for field elements (depth 3), three tabs plus a space for list
//! entries. Records are preceded by a blank line.

use crate::fields::{Decoded, FieldValue, HogpReportEntry, ServiceEntry};
use crate::{DecodedField, Report};

const ENTRY_INDENT: &str = "\t\t\t ";

fn indent(depth: usize) -> &'static str {
    match depth {
        2 => "\t",
        3 => "\t\t",
        _ => "",
    }
}

pub fn render_text(report: &Report) -> String {
    let mut text = render_lines(report).join("\n");
    text.push('\n');
    text
}

pub fn render_lines(report: &Report) -> Vec<String> {
    let mut lines = Vec::new();
    for field in &report.loose_fields {
        render_field(field, &mut lines);
    }
    for record in &report.records {
        lines.push(String::new());
        lines.push(format!(
            "{}{}",
            indent(record.depth),
            record.tag.as_deref().unwrap_or("<untagged>")
        ));
        for field in &record.fields {
            render_field(field, &mut lines);
        }
    }
    render_summary(report, &mut lines);
    lines
}

fn render_field(field: &DecodedField, lines: &mut Vec<String>) {
    let head = format!("{}{}:", indent(field.depth), field.tag);
    match &field.value {
        FieldValue::Services { entries } => {
            lines.push(head);
            lines.extend(entries.iter().map(service_line));
        }
        FieldValue::HidDescriptor { raw } => {
            lines.push(head);
            lines.push(format!("{ENTRY_INDENT}{raw}"));
        }
        FieldValue::HogpReports { entries } => {
            lines.push(head);
            for entry in entries {
                hogp_lines(entry, lines);
            }
        }
        FieldValue::GattAttributes { tokens } => {
            lines.push(head);
            lines.extend(tokens.iter().map(|token| format!("{ENTRY_INDENT}{token}")));
        }
        FieldValue::DeviceClass(class) => {
            let mut line = format!(
                "{head} {} (0x{:02x}{:02x}{:02x}) {}, minor 0x{:02x}",
                numeric(&class.value),
                class.bytes[2],
                class.bytes[1],
                class.bytes[0],
                class.major_device,
                class.minor_device
            );
            if !class.services.is_empty() {
                line.push_str(&format!(" [{}]", class.services.join(", ")));
            }
            lines.push(line);
        }
        FieldValue::Timestamp(ts) => {
            let shown = ts
                .calendar
                .clone()
                .unwrap_or_else(|| numeric(&ts.seconds));
            if ts.seconds.is_parsed() {
                lines.push(format!("{head} {shown}"));
            } else {
                lines.push(format!("{head} {shown} (unparsed)"));
            }
        }
        FieldValue::Address { raw, address } => match address {
            Some(_) => lines.push(format!("{head} {raw}")),
            None => lines.push(format!("{head} {raw} (invalid address)")),
        },
        FieldValue::Text { raw } => lines.push(format!("{head} {raw}")),
    }
}

fn numeric<T: Copy + std::fmt::Display>(value: &Decoded<T>) -> String {
    match value {
        Decoded::Parsed(v) => v.to_string(),
        Decoded::Defaulted(v) => format!("{v} (unparsed)"),
    }
}

fn service_line(entry: &ServiceEntry) -> String {
    let name = entry.name.as_deref().unwrap_or("Unknown");
    match entry.uuid {
        Decoded::Parsed(uuid) => format!("{ENTRY_INDENT}{}: {uuid:04x} {name}", entry.raw),
        Decoded::Defaulted(_) => format!("{ENTRY_INDENT}{}: ---- {name}", entry.raw),
    }
}

fn hogp_lines(entry: &HogpReportEntry, lines: &mut Vec<String>) {
    lines.push(format!("{ENTRY_INDENT}{}", entry.raw));
    if let Some(uuid) = &entry.uuid {
        lines.push(format!(
            "{ENTRY_INDENT}uuid: \t{:04x} {}",
            uuid.value.value(),
            uuid.name.as_deref().unwrap_or("Unknown")
        ));
    }
    if let Some(report_id) = &entry.report_id {
        lines.push(format!("{ENTRY_INDENT}report ID: \t0x{report_id}"));
    }
    if let Some(report_type) = &entry.report_type {
        lines.push(format!(
            "{ENTRY_INDENT}report type: \t{} {}",
            numeric(&report_type.value),
            report_type.name.as_deref().unwrap_or("Unknown")
        ));
    }
    if let Some(property) = &entry.property {
        lines.push(format!("{ENTRY_INDENT}property: \t{property}"));
    }
    if let Some(instance_id) = &entry.instance_id {
        lines.push(format!("{ENTRY_INDENT}inst_id: \t{instance_id}"));
    }
}

fn render_summary(report: &Report, lines: &mut Vec<String>) {
    lines.push(String::new());
    match report.local_adapter {
        Some(adapter) => lines.push(format!("Local adapter: {adapter}")),
        None => lines.push("Local adapter: unknown".to_string()),
    }
    lines.push(format!("Known addresses ({}):", report.addresses.len()));
    lines.extend(report.addresses.iter().map(|addr| format!("\t{addr}")));
    if report.conflicts.is_empty() {
        lines.push("No address conflicts".to_string());
    } else {
        lines.push(format!("Address conflicts ({}):", report.conflicts.len()));
        lines.extend(report.conflicts.iter().map(|addr| format!("\t{addr}")));
    }
    if report.local_adapter_conflict {
        if let Some(adapter) = report.local_adapter {
            lines.push(format!(
                "WARNING: local adapter address {adapter} is also used by a remote device"
            ));
        }
    }
}
