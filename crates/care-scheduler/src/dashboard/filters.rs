use super::roster::Caregiver;
use super::workload::{load_percent, reaches_percent};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Summed daily utilization at or above which a caregiver counts as overbooked.
pub const OVERBOOKED_PERCENT: f64 = 91.0;

/// Dropdown value: either the `"all"` sentinel or one concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    pub const ALL: &'static str = "all";

    pub fn only(value: impl Into<String>) -> Self {
        Self::Only(value.into())
    }

    pub fn value(&self) -> Option<&str> {
        match self {
            Self::All => None,
            Self::Only(value) => Some(value),
        }
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        if value == Self::ALL {
            Self::All
        } else {
            Self::Only(value)
        }
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        match value {
            Selection::All => Selection::ALL.to_string(),
            Selection::Only(value) => value,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value().unwrap_or(Self::ALL))
    }
}

/// Screen the caregiver list is rendered on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DashboardView {
    #[default]
    List,
    Workload,
    Heatmap,
}

impl DashboardView {
    pub const fn label(self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Workload => "Workload",
            Self::Heatmap => "Heatmap",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "list" => Some(Self::List),
            "workload" => Some(Self::Workload),
            "heatmap" => Some(Self::Heatmap),
            _ => None,
        }
    }
}

/// Percent of capacity covered by every logged day; 0 without capacity.
pub fn logged_utilization_percent(caregiver: &Caregiver) -> f64 {
    load_percent(caregiver.logged_hours(), caregiver.max_hours)
}

pub fn is_overbooked(caregiver: &Caregiver) -> bool {
    reaches_percent(caregiver.logged_hours(), caregiver.max_hours, OVERBOOKED_PERCENT)
}

/// Filter state of the caregiver screens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CaregiverFilters {
    pub search: String,
    pub region: Selection,
    pub role: Selection,
    pub view: DashboardView,
    pub overbooked_only: bool,
}

impl CaregiverFilters {
    pub fn matches(&self, caregiver: &Caregiver) -> bool {
        self.matches_search(caregiver)
            && self.matches_region(caregiver)
            && self.matches_role(caregiver)
            && self.passes_overbooked_gate(caregiver)
    }

    /// Keeps matching caregivers in input order.
    pub fn apply<'a, I>(&self, caregivers: I) -> Vec<&'a Caregiver>
    where
        I: IntoIterator<Item = &'a Caregiver>,
    {
        caregivers
            .into_iter()
            .filter(|caregiver| self.matches(caregiver))
            .collect()
    }

    fn matches_search(&self, caregiver: &Caregiver) -> bool {
        let needle = self.search.to_lowercase();
        let contains = |haystack: &str| haystack.to_lowercase().contains(&needle);

        contains(&caregiver.name)
            || contains(&caregiver.role)
            || contains(&caregiver.specialty)
            || caregiver
                .patients_list
                .iter()
                .any(|patient| contains(&patient.name) || contains(&patient.care_plan))
    }

    fn matches_region(&self, caregiver: &Caregiver) -> bool {
        self.region
            .value()
            .map_or(true, |region| caregiver.region == region)
    }

    // Case-sensitive, unlike search.
    fn matches_role(&self, caregiver: &Caregiver) -> bool {
        self.role
            .value()
            .map_or(true, |role| caregiver.role.contains(role))
    }

    fn passes_overbooked_gate(&self, caregiver: &Caregiver) -> bool {
        if self.view == DashboardView::Heatmap && self.overbooked_only {
            is_overbooked(caregiver)
        } else {
            true
        }
    }
}
