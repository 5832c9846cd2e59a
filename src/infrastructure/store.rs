//! Tree record stores
//!
//! `JsonFileStore` keeps every record in one pretty-printed JSON array file;
//! `InMemoryStore` is for tests and throwaway runs.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, ResultExt};
use crate::domain::{NewTreeRecord, TreeRecord};
use crate::infrastructure::traits::{FileSystem, TreeStore};

fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn next_id(records: &[TreeRecord]) -> u64 {
    records.iter().map(|r| r.id).max().unwrap_or(0) + 1
}

/// Most recent first; records created within the same tick fall back to id.
fn sort_recent(records: &mut [TreeRecord]) {
    records.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Store backed by a single JSON file.
///
/// A missing file means no records; the parent directory is created on the
/// first append. Writes go to a sibling temp file which is then renamed over
/// the store file.
pub struct JsonFileStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> ApplicationResult<Vec<TreeRecord>> {
        if !self.fs.exists(&self.path) {
            debug!("load: no store file at {}", self.path.display());
            return Ok(Vec::new());
        }
        let content = self
            .fs
            .read_to_string(&self.path)
            .with_path_context("read store", &self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        serde_json::from_str::<Vec<TreeRecord>>(&content)
            .with_path_context("decode store", &self.path)
    }

    fn save(&self, records: &[TreeRecord]) -> ApplicationResult<()> {
        let content =
            serde_json::to_string_pretty(records).with_path_context("encode store", &self.path)?;
        self.fs
            .ensure_parent(&self.path)
            .with_path_context("create store directory", &self.path)?;

        let tmp = self.path.with_extension("json.tmp");
        self.fs
            .write(&tmp, &content)
            .with_path_context("write store", &tmp)?;
        self.fs
            .rename(&tmp, &self.path)
            .with_path_context("replace store", &self.path)
    }
}

impl TreeStore for JsonFileStore {
    #[instrument(level = "debug", skip(self, record), fields(path = %self.path.display()))]
    fn append(&self, record: NewTreeRecord) -> ApplicationResult<TreeRecord> {
        let _guard = lock(&self.write_lock);
        let mut records = self.load()?;
        let stored = record.into_record(next_id(&records), now());
        records.push(stored.clone());
        self.save(&records)?;
        debug!("append: stored #{}, {} records total", stored.id, records.len());
        Ok(stored)
    }

    fn list_recent(&self) -> ApplicationResult<Vec<TreeRecord>> {
        let mut records = self.load()?;
        sort_recent(&mut records);
        Ok(records)
    }

    fn get(&self, id: u64) -> ApplicationResult<Option<TreeRecord>> {
        Ok(self.load()?.into_iter().find(|r| r.id == id))
    }
}

/// Store that lives for the duration of the process.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    records: Mutex<Vec<TreeRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.records).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TreeStore for InMemoryStore {
    fn append(&self, record: NewTreeRecord) -> ApplicationResult<TreeRecord> {
        let mut records = lock(&self.records);
        let stored = record.into_record(next_id(&records), now());
        records.push(stored.clone());
        Ok(stored)
    }

    fn list_recent(&self) -> ApplicationResult<Vec<TreeRecord>> {
        let mut records = lock(&self.records).clone();
        sort_recent(&mut records);
        Ok(records)
    }

    fn get(&self, id: u64) -> ApplicationResult<Option<TreeRecord>> {
        Ok(lock(&self.records).iter().find(|r| r.id == id).cloned())
    }
}
