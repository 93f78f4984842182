use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Placeholder shown wherever an optional contact field has no usable value.
/// The dashboard must never render an empty cell for a missing mobile number.
pub const NOT_AVAILABLE: &str = "N/A";

/// Identifier assigned by the record store at insert time.
///
/// Identifiers are unique within their collection and never reused. Raw ids
/// arriving from callers go through [`RecordId::parse`], which rejects
/// malformed input before any store access happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(raw: &str) -> AppResult<Self> {
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| AppError::invalid_identifier(format!("'{raw}' is not a valid record id")))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The two disjoint collections of the store. A record never migrates from
/// one to the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Enquiry,
    DemoEnquiry,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enquiry => f.write_str("enquiries"),
            Self::DemoEnquiry => f.write_str("demo_enquiries"),
        }
    }
}

/// A general contact-form submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enquiry {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Enquiry {
    pub fn mobile_label(&self) -> &str {
        mobile_label(self.mobile.as_deref())
    }
}

/// A demo-class request submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoEnquiry {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub college: Option<String>,
    pub course: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DemoEnquiry {
    pub fn mobile_label(&self) -> &str {
        mobile_label(self.mobile.as_deref())
    }

    /// Date of the requested demo. The intake schema persists no separate
    /// date field, so it is derived from the creation timestamp.
    pub fn demo_date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// A stored document, tagged by the collection it belongs to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "collection", rename_all = "snake_case")]
pub enum Record {
    Enquiry(Enquiry),
    DemoEnquiry(DemoEnquiry),
}

impl Record {
    pub fn id(&self) -> RecordId {
        match self {
            Self::Enquiry(enquiry) => enquiry.id,
            Self::DemoEnquiry(demo) => demo.id,
        }
    }

    pub fn collection(&self) -> Collection {
        match self {
            Self::Enquiry(_) => Collection::Enquiry,
            Self::DemoEnquiry(_) => Collection::DemoEnquiry,
        }
    }
}

/// Payload the external submission intake inserts into the enquiry
/// collection. This service never builds one outside of seeding and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEnquiry {
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub message: String,
}

impl NewEnquiry {
    pub fn into_record(self, id: RecordId, now: DateTime<Utc>) -> Enquiry {
        Enquiry {
            id,
            name: self.name,
            email: self.email,
            mobile: normalize_optional(self.mobile),
            message: self.message,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Intake payload for the demo-enquiry collection.
#[derive(Debug, Clone, Deserialize)]
pub struct NewDemoEnquiry {
    pub name: String,
    pub email: String,
    pub mobile: Option<String>,
    pub college: Option<String>,
    pub course: String,
}

impl NewDemoEnquiry {
    pub fn into_record(self, id: RecordId, now: DateTime<Utc>) -> DemoEnquiry {
        DemoEnquiry {
            id,
            name: self.name,
            email: self.email,
            mobile: normalize_optional(self.mobile),
            college: normalize_optional(self.college),
            course: self.course,
            created_at: now,
            updated_at: now,
        }
    }
}

fn mobile_label(mobile: Option<&str>) -> &str {
    match mobile.map(str::trim) {
        Some(mobile) if !mobile.is_empty() => mobile,
        _ => NOT_AVAILABLE,
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
