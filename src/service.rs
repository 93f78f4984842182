use std::sync::Arc;

use crate::error::AppResult;
use crate::model::{Collection, Record, RecordId};
use crate::store::RecordStore;

/// Read-only listing over a single collection. Pure reads, no side effects.
#[derive(Clone)]
pub struct QueryService {
    store: Arc<dyn RecordStore>,
}

impl QueryService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    pub async fn list_enquiries(&self) -> AppResult<Vec<crate::model::Enquiry>> {
        self.store.list_enquiries().await
    }

    pub async fn list_demo_enquiries(&self) -> AppResult<Vec<crate::model::DemoEnquiry>> {
        self.store.list_demo_enquiries().await
    }

    /// Full unordered contents of `collection`, tagged with their collection.
    pub async fn list_all(&self, collection: Collection) -> AppResult<Vec<Record>> {
        let records = match collection {
            Collection::Enquiry => self
                .store
                .list_enquiries()
                .await?
                .into_iter()
                .map(Record::Enquiry)
                .collect(),
            Collection::DemoEnquiry => self
                .store
                .list_demo_enquiries()
                .await?
                .into_iter()
                .map(Record::DemoEnquiry)
                .collect(),
        };
        Ok(records)
    }
}

/// Result of a delete request. A missing target is a normal outcome, not an
/// error: deleting an already-deleted id reports `NotFound` and changes
/// nothing, so two racing deletes of the same id both complete cleanly.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    Deleted(Record),
    NotFound,
}

impl DeleteOutcome {
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted(_))
    }
}

/// Delete-by-identifier against a single collection.
#[derive(Clone)]
pub struct MutationService {
    store: Arc<dyn RecordStore>,
}

impl MutationService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    /// Delete the record identified by `raw_id` from `collection`.
    ///
    /// The identifier is validated before the store is touched; malformed
    /// input fails with `InvalidIdentifier` without any store access. Exactly
    /// one record is removed on success, from exactly the named collection.
    pub async fn delete_by_id(
        &self,
        collection: Collection,
        raw_id: &str,
    ) -> AppResult<DeleteOutcome> {
        let id = RecordId::parse(raw_id)?;
        let outcome = match self.store.remove(collection, id).await? {
            Some(record) => DeleteOutcome::Deleted(record),
            None => DeleteOutcome::NotFound,
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::model::{DemoEnquiry, Enquiry, NewDemoEnquiry, NewEnquiry};
    use crate::store::MemoryStore;
    use async_trait::async_trait;

    /// Store double that panics on any access. Used to prove that malformed
    /// identifiers are rejected before the store is reached.
    struct UntouchableStore;

    #[async_trait]
    impl RecordStore for UntouchableStore {
        async fn list_enquiries(&self) -> AppResult<Vec<Enquiry>> {
            panic!("store must not be reached");
        }

        async fn list_demo_enquiries(&self) -> AppResult<Vec<DemoEnquiry>> {
            panic!("store must not be reached");
        }

        async fn remove(&self, _: Collection, _: RecordId) -> AppResult<Option<Record>> {
            panic!("store must not be reached");
        }

        async fn insert_enquiry(&self, _: NewEnquiry) -> AppResult<Enquiry> {
            panic!("store must not be reached");
        }

        async fn insert_demo_enquiry(&self, _: NewDemoEnquiry) -> AppResult<DemoEnquiry> {
            panic!("store must not be reached");
        }
    }

    async fn seeded_store() -> (Arc<MemoryStore>, Enquiry) {
        let store = Arc::new(MemoryStore::new());
        let enquiry = store
            .insert_enquiry(NewEnquiry {
                name: "Asha".to_string(),
                email: "a@x.com".to_string(),
                mobile: None,
                message: "hello".to_string(),
            })
            .await
            .expect("seed insert should succeed");
        (store, enquiry)
    }

    #[tokio::test]
    async fn malformed_id_is_rejected_before_store_access() {
        let mutation = MutationService::new(Arc::new(UntouchableStore));
        let err = mutation
            .delete_by_id(Collection::Enquiry, "missing-id")
            .await
            .expect_err("malformed id should be rejected");
        assert!(matches!(err, AppError::InvalidIdentifier(_)));
    }

    #[tokio::test]
    async fn delete_of_present_record_reports_deleted() {
        let (store, enquiry) = seeded_store().await;
        let mutation = MutationService::new(store.clone());
        let query = QueryService::new(store);

        let outcome = mutation
            .delete_by_id(Collection::Enquiry, &enquiry.id.to_string())
            .await
            .expect("delete should succeed");
        assert_eq!(outcome, DeleteOutcome::Deleted(Record::Enquiry(enquiry)));

        assert!(
            query
                .list_all(Collection::Enquiry)
                .await
                .expect("list should succeed")
                .is_empty()
        );
    }

    #[tokio::test]
    async fn delete_of_absent_record_reports_not_found_and_changes_nothing() {
        let (store, enquiry) = seeded_store().await;
        let mutation = MutationService::new(store.clone());
        let query = QueryService::new(store);

        let outcome = mutation
            .delete_by_id(Collection::Enquiry, &RecordId::generate().to_string())
            .await
            .expect("delete should succeed");
        assert_eq!(outcome, DeleteOutcome::NotFound);

        let listed = query
            .list_all(Collection::Enquiry)
            .await
            .expect("list should succeed");
        assert_eq!(listed, vec![Record::Enquiry(enquiry)]);
    }

    #[tokio::test]
    async fn double_delete_is_idempotent() {
        let (store, enquiry) = seeded_store().await;
        let mutation = MutationService::new(store);
        let raw_id = enquiry.id.to_string();

        let first = mutation
            .delete_by_id(Collection::Enquiry, &raw_id)
            .await
            .expect("first delete should succeed");
        assert!(first.is_deleted());

        let second = mutation
            .delete_by_id(Collection::Enquiry, &raw_id)
            .await
            .expect("second delete should succeed");
        assert_eq!(second, DeleteOutcome::NotFound);
    }

    #[tokio::test]
    async fn list_all_tags_records_with_their_collection() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert_demo_enquiry(NewDemoEnquiry {
                name: "Ravi".to_string(),
                email: "r@x.com".to_string(),
                mobile: None,
                college: None,
                course: "Rust 101".to_string(),
            })
            .await
            .expect("insert should succeed");

        let query = QueryService::new(store);
        let records = query
            .list_all(Collection::DemoEnquiry)
            .await
            .expect("list should succeed");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].collection(), Collection::DemoEnquiry);
    }
}
