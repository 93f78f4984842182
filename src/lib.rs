pub mod app;
pub mod config;
pub mod error;
pub mod facade;
pub mod handlers;
pub mod model;
pub mod service;
pub mod state;
pub mod store;

pub use app::build_router;
pub use error::{AppError, AppResult};
pub use facade::{DashboardService, DashboardSnapshot};
pub use model::{Collection, DemoEnquiry, Enquiry, Record, RecordId};
pub use service::{DeleteOutcome, MutationService, QueryService};
pub use store::{MemoryStore, RecordStore};
