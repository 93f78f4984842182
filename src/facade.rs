use std::sync::Arc;

use serde::Serialize;

use crate::error::AppResult;
use crate::model::{Collection, DemoEnquiry, Enquiry};
use crate::service::{DeleteOutcome, MutationService, QueryService};
use crate::store::RecordStore;

/// Combined contents of both collections, taken at a single point in time.
/// Order within each list is unspecified.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub enquiries: Vec<Enquiry>,
    pub demo_enquiries: Vec<DemoEnquiry>,
}

/// Single read/mutate contract the presentation layer talks to.
///
/// Listing both collections happens concurrently; a delete is always followed
/// by a full reload so the caller's view matches store state after the call
/// returns. There is no incremental update path.
#[derive(Clone)]
pub struct DashboardService {
    query: QueryService,
    mutation: MutationService,
}

impl DashboardService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self {
            query: QueryService::new(store.clone()),
            mutation: MutationService::new(store),
        }
    }

    /// Load both collections. Both listings must complete; if either fails,
    /// the whole load fails with the first error and no partial dashboard is
    /// returned. An empty store yields empty lists, not an error.
    pub async fn load_dashboard(&self) -> AppResult<DashboardSnapshot> {
        let (enquiries, demo_enquiries) = tokio::join!(
            self.query.list_enquiries(),
            self.query.list_demo_enquiries(),
        );

        Ok(DashboardSnapshot {
            enquiries: enquiries?,
            demo_enquiries: demo_enquiries?,
        })
    }

    /// Delete `raw_id` from `collection`, then reload the dashboard.
    ///
    /// The reload runs for both `Deleted` and `NotFound` outcomes, so the
    /// returned snapshot always reflects store state after the delete. When
    /// the delete itself fails (malformed id, store unreachable) the reload
    /// is skipped and the error surfaces; the caller's previous view must be
    /// treated as stale.
    pub async fn delete_and_refresh(
        &self,
        collection: Collection,
        raw_id: &str,
    ) -> AppResult<(DeleteOutcome, DashboardSnapshot)> {
        let outcome = self.mutation.delete_by_id(collection, raw_id).await?;
        let snapshot = self.load_dashboard().await?;
        Ok((outcome, snapshot))
    }
}
