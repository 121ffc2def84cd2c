//! Display derivation: search filtering, password masking and the reveal set.
//!
//! Nothing here mutates the store. Rows are rebuilt from scratch on every change.

use crate::vault::models::CredentialEntry;
use crate::vault::store::CredentialStore;
use secrecy::ExposeSecret;
use std::collections::BTreeSet;

pub const MASK_CHAR: char = '•';
pub const DEFAULT_MASK_LIMIT: usize = 12;

pub const EMPTY_HEADLINE: &str = "No credentials found";
pub const EMPTY_STORE_HINT: &str = "Start by adding your first credential";
pub const NO_MATCHES_HINT: &str = "Try adjusting your search terms";

/// Mask of `min(len, limit)` bullet characters. Length counts UTF-16 code
/// units, so a character outside the BMP (emoji) counts as two.
pub fn mask_password(password: &str, limit: usize) -> String {
    let n = password.encode_utf16().count().min(limit);
    MASK_CHAR.to_string().repeat(n)
}

/// Serials whose password is currently shown in plaintext.
#[derive(Debug, Default, Clone)]
pub struct RevealSet {
    serials: BTreeSet<u32>,
}

impl RevealSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership. Returns true if the serial is now revealed.
    pub fn toggle(&mut self, serial: u32) -> bool {
        if self.serials.remove(&serial) {
            false
        } else {
            self.serials.insert(serial);
            true
        }
    }

    pub fn is_revealed(&self, serial: u32) -> bool {
        self.serials.contains(&serial)
    }

    pub fn len(&self) -> usize {
        self.serials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.serials.is_empty()
    }
}

/// One rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub serial: u32,
    pub platform: String,
    pub username: String,
    pub password: String,
    pub revealed: bool,
}

impl Row {
    pub fn from_entry(entry: &CredentialEntry, revealed: bool, mask_limit: usize) -> Self {
        let secret = entry.password.expose_secret();
        Self {
            serial: entry.serial,
            platform: entry.platform.clone(),
            username: entry.username.clone(),
            password: if revealed {
                secret.to_string()
            } else {
                mask_password(secret, mask_limit)
            },
            revealed,
        }
    }
}

/// Which message the table shows when no rows are visible.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EmptyState {
    NoCredentials,
    NoMatches,
}

impl EmptyState {
    pub fn headline(self) -> &'static str {
        EMPTY_HEADLINE
    }

    pub fn hint(self) -> &'static str {
        match self {
            EmptyState::NoCredentials => EMPTY_STORE_HINT,
            EmptyState::NoMatches => NO_MATCHES_HINT,
        }
    }
}

/// Summary counters shown above the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub platforms: usize,
    pub filtered: usize,
}

/// Filtered, masked projection of the store for one search term.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub rows: Vec<Row>,
    pub stats: Stats,
}

impl FilteredView {
    pub fn build(
        store: &CredentialStore,
        search: &str,
        reveal: &RevealSet,
        mask_limit: usize,
    ) -> Self {
        let rows: Vec<Row> = store
            .query(search)
            .into_iter()
            .map(|e| Row::from_entry(e, reveal.is_revealed(e.serial), mask_limit))
            .collect();
        let stats = Stats {
            total: store.len(),
            platforms: store.platform_count(),
            filtered: rows.len(),
        };
        Self { rows, stats }
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if !self.rows.is_empty() {
            None
        } else if self.stats.total == 0 {
            Some(EmptyState::NoCredentials)
        } else {
            Some(EmptyState::NoMatches)
        }
    }
}
