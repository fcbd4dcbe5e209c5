use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::AddressError;
use super::layout;

/// A 6-byte Bluetooth device address.
///
/// Bytes are kept in the order they are written, so `AA:BB:CC:DD:EE:FF`
/// is `[0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]`.
///
/// # Examples
/// ```
/// use btconfig_core::Address;
///
/// let addr: Address = "aa-bb-cc-dd-ee-ff".parse()?;
/// assert_eq!(addr.to_string(), "AA:BB:CC:DD:EE:FF");
/// assert_eq!(addr.octets(), [0xAA, 0xBB, 0xCC, 0xDD, 0xEE, 0xFF]);
/// # Ok::<(), btconfig_core::AddressError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; layout::ADDRESS_LEN]);

impl Address {
    pub const fn new(octets: [u8; layout::ADDRESS_LEN]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> [u8; layout::ADDRESS_LEN] {
        self.0
    }

    /// Parse a textual address, returning `None` when it is malformed.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let separator = s
            .chars()
            .find(|c| layout::ADDRESS_SEPARATORS.contains(c))
            .ok_or(AddressError::OctetCount { count: 1 })?;
        if s
            .chars()
            .any(|c| c != separator && layout::ADDRESS_SEPARATORS.contains(&c))
        {
            return Err(AddressError::Separator);
        }

        let groups: Vec<&str> = s.split(separator).collect();
        if groups.len() != layout::ADDRESS_LEN {
            return Err(AddressError::OctetCount {
                count: groups.len(),
            });
        }

        let mut octets = [0u8; layout::ADDRESS_LEN];
        for (index, (slot, group)) in octets.iter_mut().zip(groups).enumerate() {
            *slot = parse_octet(group).ok_or_else(|| AddressError::InvalidOctet {
                index,
                octet: group.to_string(),
            })?;
        }
        Ok(Self(octets))
    }
}

fn parse_octet(group: &str) -> Option<u8> {
    if group.len() != layout::ADDRESS_OCTET_DIGITS
        || !group.chars().all(|c| c.is_ascii_hexdigit())
    {
        return None;
    }
    u8::from_str_radix(group, 16).ok()
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02X}:{b:02X}:{c:02X}:{d:02X}:{e:02X}:{g:02X}")
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
