use serde::{Deserialize, Serialize};

/// Outcome of a best-effort numeric decode.
///
/// Malformed numbers never abort decoding; they fall back to a default
/// value. Keeping the two cases apart lets callers tell a real zero from a
/// fallback zero.
///
/// # Examples
/// ```
/// use btconfig_core::Decoded;
///
/// let real = Decoded::Parsed(0u32);
/// let fallback = Decoded::<u32>::Defaulted(0);
/// assert_eq!(real.value(), fallback.value());
/// assert!(real.is_parsed());
/// assert!(!fallback.is_parsed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decoded<T> {
    Parsed(T),
    Defaulted(T),
}

impl<T: Copy> Decoded<T> {
    pub fn value(&self) -> T {
        match self {
            Decoded::Parsed(value) | Decoded::Defaulted(value) => *value,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, Decoded::Parsed(_))
    }

    /// The parsed value, or `None` when the default was substituted.
    pub fn parsed(&self) -> Option<T> {
        match self {
            Decoded::Parsed(value) => Some(*value),
            Decoded::Defaulted(_) => None,
        }
    }
}

pub(crate) fn decode_hex_u16(text: &str) -> Decoded<u16> {
    match u16::from_str_radix(text, 16) {
        Ok(value) if !text.starts_with('+') => Decoded::Parsed(value),
        _ => Decoded::Defaulted(0),
    }
}

pub(crate) fn decode_decimal<T>(text: &str) -> Decoded<T>
where
    T: std::str::FromStr + Default,
{
    match text.trim().parse::<T>() {
        Ok(value) => Decoded::Parsed(value),
        Err(_) => Decoded::Defaulted(T::default()),
    }
}
