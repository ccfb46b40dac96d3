//! Append-only transaction journal.
//!
//! Records every submitted gateway transaction to a JSONL file.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

use crate::config::GatewayConfig;
use crate::observer::{TxEvent, TxObserver};
use crate::types::Receipt;

/// Errors from the journal.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("journal lock poisoned")]
    Lock,
}

/// One journal line.
#[derive(Debug, Clone, Serialize)]
pub struct JournalRecord {
    pub timestamp: DateTime<Utc>,
    /// "submitted", "confirmed" or "failed".
    pub event: String,
    pub method: String,
    pub contract: String,
    pub tx_hash: String,
    /// Structured details (block, gas, failure reason).
    pub details: serde_json::Value,
}

impl JournalRecord {
    /// Create a record for `event` stamped with the current time.
    pub fn new(event: impl Into<String>, tx: &TxEvent<'_>, details: serde_json::Value) -> Self {
        Self {
            timestamp: Utc::now(),
            event: event.into(),
            method: tx.method.to_string(),
            contract: tx.contract.to_string(),
            tx_hash: format!("0x{}", hex::encode(tx.tx_hash)),
            details,
        }
    }
}

/// JSONL journal usable as a [`TxObserver`].
pub struct JournalObserver {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl std::fmt::Debug for JournalObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalObserver")
            .field("path", &self.path)
            .finish()
    }
}

impl JournalObserver {
    /// Create or open a journal file for appending.
    pub fn new(path: &Path) -> Result<Self, JournalError> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    /// Opens the journal named by `config.journal_path`, if any.
    pub fn from_config(config: &GatewayConfig) -> Result<Option<Self>, JournalError> {
        config.journal_path.as_deref().map(Self::new).transpose()
    }

    /// Append a record. Flushes after each write.
    pub fn record(&self, record: &JournalRecord) -> Result<(), JournalError> {
        let line = serde_json::to_string(record)?;
        let mut writer = self.writer.lock().map_err(|_| JournalError::Lock)?;
        writeln!(writer, "{line}")?;
        writer.flush()?;
        Ok(())
    }

    /// Path of the journal file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record_or_warn(&self, record: JournalRecord) {
        if let Err(e) = self.record(&record) {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write journal record");
        }
    }
}

impl TxObserver for JournalObserver {
    fn on_submitted(&self, event: &TxEvent<'_>) {
        self.record_or_warn(JournalRecord::new("submitted", event, serde_json::json!({})));
    }

    fn on_confirmed(&self, event: &TxEvent<'_>, receipt: &Receipt) {
        self.record_or_warn(JournalRecord::new(
            "confirmed",
            event,
            serde_json::json!({
                "block_number": receipt.block_number,
                "gas_used": receipt.gas_used,
            }),
        ));
    }

    fn on_failed(&self, event: &TxEvent<'_>, reason: &str) {
        self.record_or_warn(JournalRecord::new(
            "failed",
            event,
            serde_json::json!({ "reason": reason }),
        ));
    }
}
