//! Run summary collection
//!
//! The optimizer reports one structured record per run under a category key.
//! Sinks decide what to do with it; `RunSummary` keeps everything in memory
//! and can write it out as JSON.

use crate::Result;
use chrono::Utc;
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::path::Path;

/// Category the ORF optimizer records under
pub const ORF_CATEGORY: &str = "orf";

/// Receiver of run records
pub trait RunSummarySink {
    fn add_to_run_summary(&mut self, category: &str, record: Value);
}

/// In-memory run summary, categories kept in sorted order
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    records: BTreeMap<String, Vec<Value>>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent record of a category
    pub fn latest(&self, category: &str) -> Option<&Value> {
        self.records.get(category).and_then(|r| r.last())
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Single-record categories map straight to the record, others to a list
    pub fn to_json(&self) -> Value {
        let mut summary = Map::new();
        for (category, records) in &self.records {
            let value = match records.as_slice() {
                [single] => single.clone(),
                many => Value::Array(many.to_vec()),
            };
            summary.insert(category.clone(), value);
        }
        Value::Object(summary)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P, pretty: bool) -> Result<()> {
        let document = json!({
            "generated_at": Utc::now().to_rfc3339(),
            "run_summary": self.to_json(),
        });
        let contents = if pretty {
            serde_json::to_string_pretty(&document)?
        } else {
            serde_json::to_string(&document)?
        };
        std::fs::write(path, contents)?;
        Ok(())
    }
}

impl RunSummarySink for RunSummary {
    fn add_to_run_summary(&mut self, category: &str, record: Value) {
        self.records
            .entry(category.to_string())
            .or_default()
            .push(record);
    }
}

/// Discards every record
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSummary;

impl RunSummarySink for NullSummary {
    fn add_to_run_summary(&mut self, _category: &str, _record: Value) {}
}
