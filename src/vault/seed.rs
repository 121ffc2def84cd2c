use crate::vault::models::CredentialEntry;
use crate::vault::ports::SeedCodec;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("seed file {0} does not exist")]
    Missing(PathBuf),
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("seed data is not a valid credential list: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("seed record {index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },
}

/// Read and decode a seed file without blocking the runtime.
pub async fn load_seed(path: &Path, codec: &dyn SeedCodec) -> Result<Vec<CredentialEntry>, SeedError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(b) => b,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SeedError::Missing(path.to_path_buf()))
        }
        Err(source) => {
            return Err(SeedError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let entries = codec.decode(&bytes)?;
    info!(path = %path.display(), count = entries.len(), "seed data loaded");
    Ok(entries)
}
