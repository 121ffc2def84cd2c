use crate::vault::models::{CredentialEntry, Credentials};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

/// How `CredentialStore::add` picks the serial for a new entry.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SerialMode {
    /// Counter that never goes backwards; unique for the store's lifetime.
    #[default]
    Monotonic,
    /// `len + 1` at insertion time. May collide with a surviving entry after a delete.
    Length,
}

impl fmt::Display for SerialMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerialMode::Monotonic => f.write_str("monotonic"),
            SerialMode::Length => f.write_str("length"),
        }
    }
}

impl FromStr for SerialMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monotonic" => Ok(SerialMode::Monotonic),
            "length" => Ok(SerialMode::Length),
            other => Err(other.to_string()),
        }
    }
}

/// Ordered in-memory credential collection. Insertion order is display order.
#[derive(Debug)]
pub struct CredentialStore {
    entries: Vec<CredentialEntry>,
    mode: SerialMode,
    next_serial: u32,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new(SerialMode::default())
    }
}

impl CredentialStore {
    pub fn new(mode: SerialMode) -> Self {
        Self {
            entries: Vec::new(),
            mode,
            next_serial: 1,
        }
    }

    pub fn mode(&self) -> SerialMode {
        self.mode
    }

    /// Append a new entry and return its serial. The caller validates the fields.
    pub fn add(&mut self, credentials: Credentials) -> u32 {
        let serial = match self.mode {
            SerialMode::Monotonic => {
                let s = self.next_serial;
                self.next_serial = self.next_serial.saturating_add(1);
                s
            }
            SerialMode::Length => self.entries.len() as u32 + 1,
        };
        if self.entries.iter().any(|e| e.serial == serial) {
            warn!(serial, "serial collides with an existing entry");
        }
        debug!(serial, platform = %credentials.platform, "credential added");
        self.entries.push(CredentialEntry::new(serial, credentials));
        serial
    }

    /// Remove the entry with `serial`. Unknown serials are a no-op.
    pub fn delete(&mut self, serial: u32) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.serial != serial);
        let removed = self.entries.len() != before;
        debug!(serial, removed, "credential delete");
        removed
    }

    /// Entries whose platform or username contains `term`, ignoring case.
    /// An empty term returns everything. Store order is preserved.
    pub fn query(&self, term: &str) -> Vec<&CredentialEntry> {
        filter_entries(&self.entries, term)
    }

    pub fn get(&self, serial: u32) -> Option<&CredentialEntry> {
        self.entries.iter().find(|e| e.serial == serial)
    }

    pub fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct platform strings (exact match).
    pub fn platform_count(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.platform.as_str())
            .collect::<BTreeSet<_>>()
            .len()
    }
}

/// Search filter shared by the store and the read-only seed table.
pub fn filter_entries<'a>(entries: &'a [CredentialEntry], term: &str) -> Vec<&'a CredentialEntry> {
    if term.is_empty() {
        return entries.iter().collect();
    }
    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|e| e.matches_lowercase(&needle))
        .collect()
}
