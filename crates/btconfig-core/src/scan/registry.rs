use std::collections::HashMap;

use crate::fields::Address;

/// Append-only registry of device addresses seen during one scan.
#[derive(Debug, Default)]
pub struct AddressRegistry {
    order: Vec<Address>,
    counts: HashMap<Address, u32>,
    conflicts: Vec<Address>,
    local_adapter: Option<Address>,
}

impl AddressRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an address; a repeat marks it as a conflict.
    ///
    /// Returns `true` when the address was new.
    pub fn register(&mut self, address: Address) -> bool {
        let count = self.counts.entry(address).or_insert(0);
        *count += 1;
        match *count {
            1 => {
                self.order.push(address);
                true
            }
            2 => {
                tracing::warn!(%address, "address conflict detected");
                self.conflicts.push(address);
                false
            }
            _ => false,
        }
    }

    /// Remember the local adapter address; only the first one is kept.
    pub fn note_local_adapter(&mut self, address: Address) {
        if self.local_adapter.is_none() {
            self.local_adapter = Some(address);
        }
    }

    pub fn local_adapter(&self) -> Option<Address> {
        self.local_adapter
    }

    /// Addresses registered more than once, in order of first repeat.
    pub fn report_conflicts(&self) -> &[Address] {
        &self.conflicts
    }

    /// Every distinct address, in insertion order.
    pub fn dump_all(&self) -> &[Address] {
        &self.order
    }

    pub fn times_registered(&self, address: &Address) -> u32 {
        self.counts.get(address).copied().unwrap_or(0)
    }

    /// Whether a remote entry reuses the local adapter's own address.
    pub fn local_adapter_conflict(&self) -> bool {
        self.local_adapter
            .is_some_and(|adapter| self.conflicts.contains(&adapter))
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
