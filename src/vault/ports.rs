use anyhow::Result;

use super::models::CredentialEntry;

/// Read-only table widget. Receives records, never calls back into the store.
pub trait EntryRenderer {
    fn render(&self, entries: &[CredentialEntry]) -> Result<()>;
}

/// Decodes seed data (the static mock records shown by `show`).
pub trait SeedCodec: Send + Sync {
    fn decode(&self, data: &[u8]) -> Result<Vec<CredentialEntry>, super::seed::SeedError>;
}
