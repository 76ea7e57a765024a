// In-memory spreadsheet used by pipeline and router tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use anyhow::bail;
use async_trait::async_trait;

use inventory_domain::ports::SpreadsheetClient;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedUpdate {
    pub spreadsheet_id: String,
    pub range: String,
    pub values: Vec<Vec<String>>,
}

#[derive(Default)]
pub struct InMemorySpreadsheet {
    ranges: Mutex<HashMap<String, Vec<Vec<String>>>>,
    reads: Mutex<Vec<String>>,
    updates: Mutex<Vec<RecordedUpdate>>,
    fail_reads: AtomicBool,
    fail_updates: AtomicBool,
}

impl InMemorySpreadsheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(self, range: &str, grid: Vec<Vec<&str>>) -> Self {
        let grid = grid
            .into_iter()
            .map(|row| row.into_iter().map(ToString::to_string).collect())
            .collect();
        self.lock_ranges().insert(range.to_string(), grid);
        self
    }

    pub fn with_cell(self, range: &str, value: &str) -> Self {
        self.with_range(range, vec![vec![value]])
    }

    pub fn failing_reads(self) -> Self {
        self.fail_reads.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_updates(self) -> Self {
        self.fail_updates.store(true, Ordering::SeqCst);
        self
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().map(|reads| reads.clone()).unwrap_or_default()
    }

    pub fn updates(&self) -> Vec<RecordedUpdate> {
        self.updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }

    fn lock_ranges(&self) -> std::sync::MutexGuard<'_, HashMap<String, Vec<Vec<String>>>> {
        self.ranges.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl SpreadsheetClient for InMemorySpreadsheet {
    async fn read_range(
        &self,
        _spreadsheet_id: &str,
        range: &str,
    ) -> anyhow::Result<Vec<Vec<String>>> {
        if let Ok(mut reads) = self.reads.lock() {
            reads.push(range.to_string());
        }
        if self.fail_reads.load(Ordering::SeqCst) {
            bail!("read of {} refused", range);
        }
        Ok(self.lock_ranges().get(range).cloned().unwrap_or_default())
    }

    async fn update_range(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: Vec<Vec<String>>,
    ) -> anyhow::Result<()> {
        if self.fail_updates.load(Ordering::SeqCst) {
            bail!("update of {} refused", range);
        }
        if let Ok(mut updates) = self.updates.lock() {
            updates.push(RecordedUpdate {
                spreadsheet_id: spreadsheet_id.to_string(),
                range: range.to_string(),
                values: values.clone(),
            });
        }
        self.lock_ranges().insert(range.to_string(), values);
        Ok(())
    }
}
