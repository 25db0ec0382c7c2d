use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Status value that marks a caregiver as part of the working team.
pub const ACTIVE_STATUS: &str = "Active";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CaregiverId(pub String);

impl fmt::Display for CaregiverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CaregiverId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisitId(pub String);

/// Hours, visits, and patients logged by one caregiver on one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyUtilization {
    #[serde(default)]
    pub hours: f64,
    #[serde(default)]
    pub visits: u32,
    #[serde(default)]
    pub patients: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub care_plan: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "deserialize_optional_timestamp")]
    pub next_visit: Option<NaiveDateTime>,
    #[serde(default)]
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caregiver {
    pub id: CaregiverId,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub specialty: String,
    pub region: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub assigned_hours: f64,
    pub max_hours: f64,
    #[serde(default)]
    pub patients: u32,
    #[serde(default)]
    pub visits: u32,
    pub status: String,
    #[serde(default)]
    pub patients_list: Vec<Patient>,
    #[serde(default)]
    pub utilization: BTreeMap<NaiveDate, DailyUtilization>,
}

impl Caregiver {
    pub fn is_active(&self) -> bool {
        self.status == ACTIVE_STATUS
    }

    /// Hours summed over every logged day, regardless of date.
    pub fn logged_hours(&self) -> f64 {
        self.utilization.values().map(|day| day.hours).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VisitStatus {
    Scheduled,
    Completed,
    Cancelled,
}

impl VisitStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Scheduled, Self::Completed, Self::Cancelled]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "scheduled" => Some(Self::Scheduled),
            "completed" => Some(Self::Completed),
            "cancelled" | "canceled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visit {
    pub id: VisitId,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub scheduled_at: NaiveDateTime,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    pub patient_name: String,
    pub caregiver_name: String,
    pub status: VisitStatus,
}

impl Visit {
    pub fn date(&self) -> NaiveDate {
        self.scheduled_at.date()
    }
}

/// Parses the timestamp shapes found in roster exports.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{raw}'")))
}

fn deserialize_optional_timestamp<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    match opt {
        Some(raw) if !raw.trim().is_empty() => parse_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized timestamp '{raw}'"))),
        _ => Ok(None),
    }
}
