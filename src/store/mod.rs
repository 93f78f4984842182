pub mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::model::{Collection, DemoEnquiry, Enquiry, NewDemoEnquiry, NewEnquiry, Record, RecordId};

/// Handle to the record store.
///
/// The hosting process constructs one handle at startup and shares it across
/// all requests; the implementation is the serialization point for concurrent
/// access. Reads return full collection contents (no paging exists at this
/// layer), removal is permanent, and `insert_*` is the seam the external
/// submission intake writes through — the admin service itself never creates
/// records.
///
/// Every operation fails with [`crate::error::AppError::Unavailable`] when the
/// store cannot be reached. No retries happen here; retry policy belongs to
/// whoever manages connectivity.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn list_enquiries(&self) -> AppResult<Vec<Enquiry>>;

    async fn list_demo_enquiries(&self) -> AppResult<Vec<DemoEnquiry>>;

    /// Remove the record with `id` from `collection`. Returns the removed
    /// record, or `None` when no such record exists (deleting an absent id is
    /// a no-op, not an error). Collections are independent: a removal in one
    /// never touches the other.
    async fn remove(&self, collection: Collection, id: RecordId) -> AppResult<Option<Record>>;

    async fn insert_enquiry(&self, draft: NewEnquiry) -> AppResult<Enquiry>;

    async fn insert_demo_enquiry(&self, draft: NewDemoEnquiry) -> AppResult<DemoEnquiry>;
}
