use crate::config::config::Config;
use crate::vault::codec::JsonSeedCodec;
use crate::vault::ports::{EntryRenderer, SeedCodec};
use crate::vault::render::{JsonRenderer, RenderOptions, TextTableRenderer};
use crate::vault::seed::load_seed;
use crate::vault::store::filter_entries;
use crate::vault::view::{EMPTY_STORE_HINT, NO_MATCHES_HINT};
use anyhow::{Context, Result};
use std::io;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Default, Clone)]
pub struct ShowOptions {
    pub query: Option<String>,
    pub reveal: bool,
    pub json: bool,
}

pub struct Vault<'a> {
    config: &'a Config,
    codec: Arc<dyn SeedCodec>,
}

impl<'a> Vault<'a> {
    pub fn create(config: &'a Config) -> Self {
        Vault {
            config,
            codec: Arc::new(JsonSeedCodec),
        }
    }

    /// Render seed records read-only through a table widget.
    pub async fn handle_show(&self, opts: ShowOptions) -> Result<()> {
        let path = &self.config.seed_path;
        let entries = load_seed(path, self.codec.as_ref())
            .await
            .with_context(|| format!("cannot show seed data from {}", path.display()))?;

        let term = opts.query.unwrap_or_default();
        let visible: Vec<_> = filter_entries(&entries, &term)
            .into_iter()
            .cloned()
            .collect();
        debug!(total = entries.len(), visible = visible.len(), %term, "show");

        let render_opts = RenderOptions {
            reveal: opts.reveal,
            mask_limit: self.config.mask_limit,
        };
        let stdout = io::stdout();
        if opts.json {
            JsonRenderer::new(stdout.lock(), render_opts).render(&visible)?;
            return Ok(());
        }

        TextTableRenderer::new(stdout.lock(), render_opts).render(&visible)?;
        if visible.is_empty() {
            let hint = if entries.is_empty() {
                EMPTY_STORE_HINT
            } else {
                NO_MATCHES_HINT
            };
            println!("{hint}");
        }
        Ok(())
    }
}
