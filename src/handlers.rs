use axum::{
    Json,
    extract::{Path, State},
};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::{
    error::{AppError, AppResult},
    facade::DashboardSnapshot,
    model::{Collection, DemoEnquiry, Enquiry},
    state::AppState,
};

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Display-ready dashboard rows. This is the presentation boundary: the
/// mobile marker rule and the derived demo date are applied here, nowhere
/// deeper.
#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub enquiries: Vec<EnquiryRow>,
    pub demo_enquiries: Vec<DemoEnquiryRow>,
}

#[derive(Debug, Serialize)]
pub struct EnquiryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct DemoEnquiryRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub college: Option<String>,
    pub date: NaiveDate,
    pub course: String,
}

impl From<&Enquiry> for EnquiryRow {
    fn from(enquiry: &Enquiry) -> Self {
        Self {
            id: enquiry.id.to_string(),
            name: enquiry.name.clone(),
            email: enquiry.email.clone(),
            mobile: enquiry.mobile_label().to_string(),
            message: enquiry.message.clone(),
            created_at: enquiry.created_at,
        }
    }
}

impl From<&DemoEnquiry> for DemoEnquiryRow {
    fn from(demo: &DemoEnquiry) -> Self {
        Self {
            id: demo.id.to_string(),
            name: demo.name.clone(),
            email: demo.email.clone(),
            mobile: demo.mobile_label().to_string(),
            college: demo.college.clone(),
            date: demo.demo_date(),
            course: demo.course.clone(),
        }
    }
}

impl From<&DashboardSnapshot> for DashboardView {
    fn from(snapshot: &DashboardSnapshot) -> Self {
        Self {
            enquiries: snapshot.enquiries.iter().map(EnquiryRow::from).collect(),
            demo_enquiries: snapshot
                .demo_enquiries
                .iter()
                .map(DemoEnquiryRow::from)
                .collect(),
        }
    }
}

pub async fn healthcheck() -> Json<ApiResponse<ApiMessage>> {
    Json(ApiResponse {
        data: ApiMessage {
            message: "ok".to_string(),
        },
    })
}

pub async fn list_enquiries(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<Enquiry>>>> {
    let enquiries = state.query.list_enquiries().await?;
    Ok(Json(ApiResponse { data: enquiries }))
}

pub async fn list_demo_enquiries(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<DemoEnquiry>>>> {
    let demo_enquiries = state.query.list_demo_enquiries().await?;
    Ok(Json(ApiResponse {
        data: demo_enquiries,
    }))
}

pub async fn get_dashboard(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<DashboardView>>> {
    let snapshot = state.dashboard.load_dashboard().await?;
    Ok(Json(ApiResponse {
        data: DashboardView::from(&snapshot),
    }))
}

pub async fn delete_enquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DashboardView>>> {
    delete_and_render(&state, Collection::Enquiry, &id).await
}

pub async fn delete_demo_enquiry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<DashboardView>>> {
    delete_and_render(&state, Collection::DemoEnquiry, &id).await
}

async fn delete_and_render(
    state: &AppState,
    collection: Collection,
    raw_id: &str,
) -> AppResult<Json<ApiResponse<DashboardView>>> {
    let (outcome, snapshot) = state.dashboard.delete_and_refresh(collection, raw_id).await?;

    if !outcome.is_deleted() {
        return Err(AppError::not_found("entry not found"));
    }

    Ok(Json(ApiResponse {
        data: DashboardView::from(&snapshot),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NOT_AVAILABLE, RecordId};
    use chrono::TimeZone;

    #[test]
    fn rows_apply_the_presentation_rules() {
        let created = Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap();
        let snapshot = DashboardSnapshot {
            enquiries: vec![Enquiry {
                id: RecordId::generate(),
                name: "Asha".to_string(),
                email: "a@x.com".to_string(),
                mobile: None,
                message: "hello".to_string(),
                created_at: created,
                updated_at: created,
            }],
            demo_enquiries: vec![DemoEnquiry {
                id: RecordId::generate(),
                name: "Ravi".to_string(),
                email: "r@x.com".to_string(),
                mobile: Some("+91 9000000001".to_string()),
                college: None,
                course: "Rust 101".to_string(),
                created_at: created,
                updated_at: created,
            }],
        };

        let view = DashboardView::from(&snapshot);
        assert_eq!(view.enquiries[0].mobile, NOT_AVAILABLE);
        assert_eq!(view.demo_enquiries[0].mobile, "+91 9000000001");
        assert_eq!(view.demo_enquiries[0].date, created.date_naive());
    }
}
