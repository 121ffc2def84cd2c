use crate::vault::models::CredentialEntry;
use crate::vault::ports::EntryRenderer;
use crate::vault::view::{mask_password, EMPTY_HEADLINE};
use anyhow::{anyhow, Result};
use secrecy::ExposeSecret;
use serde_json::json;
use std::io::Write;
use std::sync::Mutex;

#[derive(Copy, Clone, Debug)]
pub struct RenderOptions {
    pub reveal: bool,
    pub mask_limit: usize,
}

impl RenderOptions {
    fn password(&self, entry: &CredentialEntry) -> String {
        let secret = entry.password.expose_secret();
        if self.reveal {
            secret.to_string()
        } else {
            mask_password(secret, self.mask_limit)
        }
    }
}

/// Plain-text column table.
pub struct TextTableRenderer<W: Write> {
    out: Mutex<W>,
    opts: RenderOptions,
}

impl<W: Write> TextTableRenderer<W> {
    pub fn new(out: W, opts: RenderOptions) -> Self {
        Self {
            out: Mutex::new(out),
            opts,
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| anyhow!("renderer output poisoned"))
    }
}

impl<W: Write> EntryRenderer for TextTableRenderer<W> {
    fn render(&self, entries: &[CredentialEntry]) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("renderer output poisoned"))?;
        if entries.is_empty() {
            writeln!(out, "{EMPTY_HEADLINE}")?;
            return Ok(());
        }

        let header = ["#", "PLATFORM", "USERNAME", "PASSWORD"];
        let rows: Vec<[String; 4]> = entries
            .iter()
            .map(|e| {
                [
                    e.serial.to_string(),
                    e.platform.clone(),
                    e.username.clone(),
                    self.opts.password(e),
                ]
            })
            .collect();

        let mut widths = header.map(|h| h.chars().count());
        for row in &rows {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let line = |cells: [&str; 4]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths)
                .map(|(c, w)| {
                    let pad = w.saturating_sub(c.chars().count());
                    format!("{c}{}", " ".repeat(pad))
                })
                .collect();
            padded.join("  ").trim_end().to_string()
        };

        writeln!(out, "{}", line(header))?;
        for row in &rows {
            writeln!(out, "{}", line(row.each_ref().map(String::as_str)))?;
        }
        Ok(())
    }
}

/// Machine-readable JSON array in the display record shape.
pub struct JsonRenderer<W: Write> {
    out: Mutex<W>,
    opts: RenderOptions,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W, opts: RenderOptions) -> Self {
        Self {
            out: Mutex::new(out),
            opts,
        }
    }

    pub fn into_inner(self) -> Result<W> {
        self.out
            .into_inner()
            .map_err(|_| anyhow!("renderer output poisoned"))
    }
}

impl<W: Write> EntryRenderer for JsonRenderer<W> {
    fn render(&self, entries: &[CredentialEntry]) -> Result<()> {
        let items: Vec<_> = entries
            .iter()
            .map(|e| {
                json!({
                    "id": e.serial,
                    "platform": e.platform,
                    "username": e.username,
                    "password": self.opts.password(e),
                })
            })
            .collect();
        let mut out = self
            .out
            .lock()
            .map_err(|_| anyhow!("renderer output poisoned"))?;
        serde_json::to_writer_pretty(&mut *out, &items)?;
        writeln!(out)?;
        Ok(())
    }
}
