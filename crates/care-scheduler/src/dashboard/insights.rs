use super::roster::Caregiver;
use super::workload::{WorkloadStatus, WorkloadSubject};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightLevel {
    Warning,
    Info,
}

impl InsightLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Info => "Info",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadInsight {
    pub level: InsightLevel,
    pub level_label: &'static str,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub caregivers: Vec<String>,
}

impl WorkloadInsight {
    fn new(level: InsightLevel, message: String, caregivers: Vec<String>) -> Self {
        Self {
            level,
            level_label: level.label(),
            message,
            caregivers,
        }
    }
}

fn staff_phrase(count: usize) -> String {
    if count == 1 {
        "1 caregiver is".to_string()
    } else {
        format!("{count} caregivers are")
    }
}

/// Advisories over the active part of the team, warnings first.
pub fn generate_insights<'a, I>(caregivers: I) -> Vec<WorkloadInsight>
where
    I: IntoIterator<Item = &'a Caregiver>,
{
    let mut overloaded = Vec::new();
    let mut underutilized = Vec::new();

    for caregiver in caregivers.into_iter().filter(|caregiver| caregiver.is_active()) {
        match caregiver.workload_status() {
            WorkloadStatus::Overloaded => overloaded.push(caregiver.name.clone()),
            WorkloadStatus::Underutilized => underutilized.push(caregiver.name.clone()),
            _ => {}
        }
    }

    let mut insights = Vec::new();

    if !overloaded.is_empty() {
        insights.push(WorkloadInsight::new(
            InsightLevel::Warning,
            format!(
                "{} overloaded: {}. Consider redistributing visits.",
                staff_phrase(overloaded.len()),
                overloaded.join(", ")
            ),
            overloaded,
        ));
    }

    if !underutilized.is_empty() {
        insights.push(WorkloadInsight::new(
            InsightLevel::Info,
            format!(
                "{} underutilized: {}. They have capacity for additional patients.",
                staff_phrase(underutilized.len()),
                underutilized.join(", ")
            ),
            underutilized,
        ));
    }

    if insights.is_empty() {
        insights.push(WorkloadInsight::new(
            InsightLevel::Info,
            "Workload is well balanced across the active team.".to_string(),
            Vec::new(),
        ));
    }

    insights
}
