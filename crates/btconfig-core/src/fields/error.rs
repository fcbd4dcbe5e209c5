use thiserror::Error;

/// Errors returned when a text value is not a device address.
///
/// Note: address failures never abort a scan; the dispatcher simply skips
/// registration. The error exists so `Address::from_str` callers can tell
/// why a value was rejected.
///
/// # Examples
/// ```
/// use btconfig_core::AddressError;
///
/// let err = AddressError::OctetCount { count: 5 };
/// assert!(err.to_string().contains("expected 6 octets"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("expected 6 octets, got {count}")]
    OctetCount { count: usize },
    #[error("invalid octet '{octet}' at position {index}")]
    InvalidOctet { index: usize, octet: String },
    #[error("mixed or unknown octet separators")]
    Separator,
}
