use super::roster::Caregiver;
use serde::Serialize;

/// Load at or above which a caregiver is overloaded.
pub const OVERLOADED_PERCENT: f64 = 95.0;
/// Load at or above which a caregiver is near their limit.
pub const NEAR_LIMIT_PERCENT: f64 = 75.0;
/// Load below which a caregiver is underutilized.
pub const UNDERUTILIZED_PERCENT: f64 = 60.0;

/// Anything that carries an hours-against-capacity pair.
pub trait WorkloadSubject {
    fn assigned_hours(&self) -> f64;
    fn max_hours(&self) -> f64;

    fn load_ratio(&self) -> f64 {
        load_ratio(self.assigned_hours(), self.max_hours())
    }

    fn load_percent(&self) -> f64 {
        load_percent(self.assigned_hours(), self.max_hours())
    }

    fn workload_status(&self) -> WorkloadStatus {
        WorkloadStatus::classify(self.assigned_hours(), self.max_hours())
    }
}

impl WorkloadSubject for Caregiver {
    fn assigned_hours(&self) -> f64 {
        self.assigned_hours
    }

    fn max_hours(&self) -> f64 {
        self.max_hours
    }
}

/// `hours / capacity`, or 0 when there is no capacity.
pub fn load_ratio(hours: f64, capacity: f64) -> f64 {
    if capacity > 0.0 {
        hours / capacity
    } else {
        0.0
    }
}

pub fn load_percent(hours: f64, capacity: f64) -> f64 {
    load_ratio(hours, capacity) * 100.0
}

/// Whether `hours` cover at least `percent` of `capacity`. Compares the raw
/// ratio so boundaries such as 5.1 of 8.5 land exactly on 60 %.
pub fn reaches_percent(hours: f64, capacity: f64, percent: f64) -> bool {
    load_ratio(hours, capacity) >= percent / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadStatus {
    Overloaded,
    NearLimit,
    Optimal,
    Underutilized,
    Inactive,
}

impl WorkloadStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Overloaded,
            Self::NearLimit,
            Self::Optimal,
            Self::Underutilized,
            Self::Inactive,
        ]
    }

    pub fn classify(assigned: f64, max: f64) -> Self {
        if max <= 0.0 {
            return Self::Inactive;
        }

        if reaches_percent(assigned, max, OVERLOADED_PERCENT) {
            Self::Overloaded
        } else if reaches_percent(assigned, max, NEAR_LIMIT_PERCENT) {
            Self::NearLimit
        } else if !reaches_percent(assigned, max, UNDERUTILIZED_PERCENT) {
            Self::Underutilized
        } else {
            Self::Optimal
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Overloaded => "Overloaded",
            Self::NearLimit => "Near Limit",
            Self::Optimal => "Optimal",
            Self::Underutilized => "Underutilized",
            Self::Inactive => "Inactive",
        }
    }

    pub const fn severity(self) -> WorkloadSeverity {
        match self {
            Self::Overloaded => WorkloadSeverity::Critical,
            Self::NearLimit => WorkloadSeverity::Elevated,
            Self::Optimal => WorkloadSeverity::Healthy,
            Self::Underutilized => WorkloadSeverity::Low,
            Self::Inactive => WorkloadSeverity::Idle,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkloadSeverity {
    Critical,
    Elevated,
    Healthy,
    Low,
    Idle,
}

impl WorkloadSeverity {
    pub const fn color(self) -> &'static str {
        match self {
            Self::Critical => "red",
            Self::Elevated => "orange",
            Self::Healthy => "green",
            Self::Low => "blue",
            Self::Idle => "gray",
        }
    }
}

/// Label and severity band for one hours/capacity pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadClassification {
    pub status: WorkloadStatus,
    pub label: &'static str,
    pub severity: WorkloadSeverity,
    pub color: &'static str,
    pub load_percent: f64,
}

pub fn classify(assigned: f64, max: f64) -> WorkloadClassification {
    let status = WorkloadStatus::classify(assigned, max);
    let severity = status.severity();
    WorkloadClassification {
        status,
        label: status.label(),
        severity,
        color: severity.color(),
        load_percent: load_percent(assigned, max),
    }
}

/// Orders records overloaded-first, then by descending load. Equal keys keep
/// their input order.
pub fn sort_by_workload<'a, T, I>(records: I) -> Vec<&'a T>
where
    T: WorkloadSubject + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut ranked: Vec<(bool, f64, &T)> = records
        .into_iter()
        .map(|record| {
            let ratio = record.load_ratio();
            (ratio >= OVERLOADED_PERCENT / 100.0, ratio, record)
        })
        .collect();

    ranked.sort_by(|(a_over, a_ratio, _), (b_over, b_ratio, _)| {
        b_over.cmp(a_over).then_with(|| b_ratio.total_cmp(a_ratio))
    });

    ranked.into_iter().map(|(_, _, record)| record).collect()
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCountEntry {
    pub status: WorkloadStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadSummary {
    pub caregivers: usize,
    pub total_assigned_hours: f64,
    pub total_capacity_hours: f64,
    pub team_load_percent: f64,
    pub status_counts: Vec<StatusCountEntry>,
}

impl WorkloadSummary {
    pub fn from_records<'a, T, I>(records: I) -> Self
    where
        T: WorkloadSubject + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let mut caregivers = 0;
        let mut total_assigned_hours = 0.0;
        let mut total_capacity_hours = 0.0;
        let mut counts = [0usize; 5];

        for record in records {
            caregivers += 1;
            total_assigned_hours += record.assigned_hours();
            total_capacity_hours += record.max_hours();
            let status = record.workload_status();
            if let Some(slot) = WorkloadStatus::ordered()
                .iter()
                .position(|candidate| *candidate == status)
            {
                counts[slot] += 1;
            }
        }

        let status_counts = WorkloadStatus::ordered()
            .into_iter()
            .zip(counts)
            .map(|(status, count)| StatusCountEntry {
                status,
                status_label: status.label(),
                count,
            })
            .collect();

        Self {
            caregivers,
            total_assigned_hours,
            total_capacity_hours,
            team_load_percent: load_percent(total_assigned_hours, total_capacity_hours),
            status_counts,
        }
    }

    pub fn count(&self, status: WorkloadStatus) -> usize {
        self.status_counts
            .iter()
            .find(|entry| entry.status == status)
            .map_or(0, |entry| entry.count)
    }
}
