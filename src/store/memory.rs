use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::error::{AppError, AppResult};
use crate::model::{Collection, DemoEnquiry, Enquiry, NewDemoEnquiry, NewEnquiry, Record, RecordId};
use crate::store::RecordStore;

/// In-memory record store.
///
/// Each collection sits behind its own lock, so the two never contend with
/// each other. The handle can be closed to simulate a lost store connection;
/// a closed handle fails every operation with `Unavailable`, which is what
/// the rest of the stack expects from real connectivity loss.
#[derive(Debug, Default)]
pub struct MemoryStore {
    enquiries: RwLock<HashMap<RecordId, Enquiry>>,
    demo_enquiries: RwLock<HashMap<RecordId, DemoEnquiry>>,
    closed: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the handle as unreachable. Subsequent operations fail with
    /// `Unavailable` until the process constructs a fresh handle.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }

    fn ensure_open(&self) -> AppResult<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(AppError::unavailable("store handle is closed"));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list_enquiries(&self) -> AppResult<Vec<Enquiry>> {
        self.ensure_open()?;
        Ok(self.enquiries.read().await.values().cloned().collect())
    }

    async fn list_demo_enquiries(&self) -> AppResult<Vec<DemoEnquiry>> {
        self.ensure_open()?;
        Ok(self.demo_enquiries.read().await.values().cloned().collect())
    }

    async fn remove(&self, collection: Collection, id: RecordId) -> AppResult<Option<Record>> {
        self.ensure_open()?;
        let removed = match collection {
            Collection::Enquiry => self
                .enquiries
                .write()
                .await
                .remove(&id)
                .map(Record::Enquiry),
            Collection::DemoEnquiry => self
                .demo_enquiries
                .write()
                .await
                .remove(&id)
                .map(Record::DemoEnquiry),
        };
        Ok(removed)
    }

    async fn insert_enquiry(&self, draft: NewEnquiry) -> AppResult<Enquiry> {
        self.ensure_open()?;
        let enquiry = draft.into_record(RecordId::generate(), Utc::now());
        self.enquiries
            .write()
            .await
            .insert(enquiry.id, enquiry.clone());
        Ok(enquiry)
    }

    async fn insert_demo_enquiry(&self, draft: NewDemoEnquiry) -> AppResult<DemoEnquiry> {
        self.ensure_open()?;
        let demo = draft.into_record(RecordId::generate(), Utc::now());
        self.demo_enquiries
            .write()
            .await
            .insert(demo.id, demo.clone());
        Ok(demo)
    }
}
