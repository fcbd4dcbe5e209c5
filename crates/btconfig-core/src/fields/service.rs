use serde::{Deserialize, Serialize};

use super::decoded::{Decoded, decode_hex_u16};
use super::layout;
use super::symbols::{SymbolTables, lookup};

/// One entry of a `Service` field, e.g. `0000110a-0000-1000-8000-00805f9b34fb`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Token as it appeared in the document.
    pub raw: String,
    pub uuid: Decoded<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Decode a space-separated service list.
///
/// Only the part of each token before the first `-` is used as the UUID.
/// Tokens whose prefix is not a 16-bit hex value decode to `Defaulted(0)`
/// without a name.
pub fn decode_services(payload: &str, tables: &SymbolTables<'_>) -> Vec<ServiceEntry> {
    payload
        .split(layout::TOKEN_SEPARATOR)
        .filter(|token| !token.is_empty())
        .map(|token| decode_service_token(token, tables))
        .collect()
}

fn decode_service_token(token: &str, tables: &SymbolTables<'_>) -> ServiceEntry {
    let prefix = token
        .split(layout::SERVICE_UUID_DELIMITER)
        .next()
        .unwrap_or_default();
    let uuid = decode_hex_u16(prefix);
    let name = uuid
        .parsed()
        .and_then(|value| lookup(tables.uuids, value))
        .map(str::to_string);
    if !uuid.is_parsed() {
        tracing::warn!(token, "service token has no 16-bit uuid prefix");
    }
    ServiceEntry {
        raw: token.to_string(),
        uuid,
        name,
    }
}
