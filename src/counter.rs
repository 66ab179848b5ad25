//! # Bill Counter
//!
//! Persists the last issued bill number as `{"lastBillNumber": N}`.
//! A missing or unreadable file falls back to [`BillCounter::DEFAULT_LAST`]
//! so the shop can always issue a bill.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::BillError;

#[derive(Debug, Serialize, Deserialize)]
struct CounterFile {
    #[serde(rename = "lastBillNumber")]
    last_bill_number: u64,
}

/// File-backed bill number counter.
#[derive(Debug, Clone)]
pub struct BillCounter {
    path: PathBuf,
}

impl BillCounter {
    /// Last bill number assumed before any bill has been saved.
    pub const DEFAULT_LAST: u64 = 185;

    /// Counter file name used when none is given.
    pub const DEFAULT_FILE: &'static str = "bill_config.json";

    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last issued bill number.
    pub fn last(&self) -> u64 {
        if !self.path.exists() {
            return Self::DEFAULT_LAST;
        }
        match self.read() {
            Ok(n) => n,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Unreadable bill counter, using default");
                Self::DEFAULT_LAST
            }
        }
    }

    /// Number for the next bill.
    pub fn next(&self) -> Result<u64, BillError> {
        let last = self.last();
        last.checked_add(1).ok_or_else(|| {
            BillError::Config(format!(
                "bill counter in {} is exhausted at {}",
                self.path.display(),
                last
            ))
        })
    }

    /// Record `bill_number` as the last issued bill.
    pub fn save(&self, bill_number: u64) -> Result<(), BillError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&CounterFile {
            last_bill_number: bill_number,
        })?;
        fs::write(&self.path, json)?;
        info!(path = %self.path.display(), bill_number, "Saved bill counter");
        Ok(())
    }

    fn read(&self) -> Result<u64, BillError> {
        let text = fs::read_to_string(&self.path)?;
        let file: CounterFile = serde_json::from_str(&text)?;
        Ok(file.last_bill_number)
    }
}
