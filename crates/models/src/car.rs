use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Vehicle size class, also the key of per-size service pricing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeClass {
    Small,
    Medium,
    Large,
    ExtraLarge,
}

impl SizeClass {
    pub const ALL: [SizeClass; 4] =
        [SizeClass::Small, SizeClass::Medium, SizeClass::Large, SizeClass::ExtraLarge];

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
            SizeClass::ExtraLarge => "extra_large",
        }
    }
}

impl std::fmt::Display for SizeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Pending => "pending",
            JobStatus::InProgress => "in_progress",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A vehicle being serviced, row of the `cars` table.
///
/// `crew` and `services` hold ids into the crew-member and service tables.
/// The store enforces no referential integrity; a dangling id simply fails
/// to resolve to a name at display time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Uuid,
    pub plate: String,
    pub model: String,
    pub size: SizeClass,
    pub service: String,
    pub status: JobStatus,
    #[serde(default)]
    pub crew: Option<Vec<Uuid>>,
    #[serde(default)]
    pub services: Option<Vec<Uuid>>,
    pub phone: String,
    #[serde(default)]
    pub total_cost: Option<f64>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize)]
pub struct NewCar {
    pub plate: String,
    pub model: String,
    pub size: SizeClass,
    pub service: String,
    pub status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Uuid>>,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

#[derive(Clone, Debug, Default, Serialize)]
pub struct CarChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeClass>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crew: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub services: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_cost: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_and_status_use_snake_case_on_the_wire() {
        assert_eq!(serde_json::to_value(SizeClass::ExtraLarge).unwrap(), "extra_large");
        assert_eq!(serde_json::to_value(JobStatus::InProgress).unwrap(), "in_progress");
        let parsed: JobStatus = serde_json::from_value("cancelled".into()).unwrap();
        assert_eq!(parsed, JobStatus::Cancelled);
    }
}
