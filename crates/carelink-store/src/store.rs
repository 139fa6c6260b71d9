//! JSON-array collection store.

use std::path::PathBuf;

use serde_json::{Map, Value};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use carelink_models::Record;

use crate::error::{StoreError, StoreResult};

/// CRUD over one durable collection file, one instance per collection.
///
/// Every mutation is a read-modify-write of the entire collection. The write
/// lock serializes those cycles, so two concurrent mutations on the same
/// collection cannot overwrite each other's effects. The rewrite itself goes
/// through a sibling temp file and a rename, so a reader never observes a
/// partially written array.
pub struct JsonStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    /// Open a collection file, creating the parent directory and seeding a
    /// missing file with an empty array.
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        if !fs::try_exists(&path).await? {
            fs::write(&path, b"[]").await?;
            debug!(path = %path.display(), "seeded empty collection file");
        }
        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// List every record, insertion order preserved.
    pub async fn list(&self) -> StoreResult<Vec<Record>> {
        self.read_all().await
    }

    /// Fetch one record by id.
    pub async fn get(&self, id: &str) -> StoreResult<Record> {
        let records = self.read_all().await?;
        records
            .into_iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Create a record with a fresh server-assigned id and persist the
    /// collection.
    pub async fn create(&self, fields: Map<String, Value>) -> StoreResult<Record> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        let record = Record::new(fields);
        records.push(record.clone());
        self.persist(&records).await?;
        debug!(id = %record.id, path = %self.path.display(), "created record");
        Ok(record)
    }

    /// Shallow-merge `fields` over the record with the given id and persist.
    ///
    /// Fields absent from the patch are preserved. Fails with `NotFound` when
    /// no record matches.
    pub async fn update(&self, id: &str, fields: Map<String, Value>) -> StoreResult<Record> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        let record = records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        record.merge(fields);
        let updated = record.clone();
        self.persist(&records).await?;
        Ok(updated)
    }

    /// Remove the record with the given id and persist.
    ///
    /// Idempotent: deleting an absent id succeeds silently.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut records = self.read_all().await?;
        let before = records.len();
        records.retain(|r| r.id != id);
        if records.len() == before {
            debug!(id, path = %self.path.display(), "delete of absent record");
        }
        self.persist(&records).await?;
        Ok(())
    }

    async fn read_all(&self) -> StoreResult<Vec<Record>> {
        let bytes = fs::read(&self.path).await?;
        serde_json::from_slice(&bytes).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    async fn persist(&self, records: &[Record]) -> StoreResult<()> {
        let data = serde_json::to_vec_pretty(records).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data).await?;
        fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}
