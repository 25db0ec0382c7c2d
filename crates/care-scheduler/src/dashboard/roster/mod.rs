mod domain;
mod sample;

pub use domain::{
    parse_timestamp, Caregiver, CaregiverId, DailyUtilization, Patient, PatientId, Visit, VisitId,
    VisitStatus, ACTIVE_STATUS,
};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only snapshot of caregivers and visits served by the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    #[serde(default)]
    pub caregivers: Vec<Caregiver>,
    #[serde(default)]
    pub visits: Vec<Visit>,
}

impl Roster {
    pub fn new(caregivers: Vec<Caregiver>, visits: Vec<Visit>) -> Self {
        Self { caregivers, visits }
    }

    /// Built-in roster used by demos and when no roster file is configured.
    pub fn demo() -> Self {
        sample::demo_roster()
    }

    pub fn caregiver(&self, id: &CaregiverId) -> Option<&Caregiver> {
        self.caregivers.iter().find(|caregiver| &caregiver.id == id)
    }

    /// Every patient paired with the caregiver that owns it.
    pub fn patients(&self) -> impl Iterator<Item = (&Caregiver, &Patient)> {
        self.caregivers.iter().flat_map(|caregiver| {
            caregiver
                .patients_list
                .iter()
                .map(move |patient| (caregiver, patient))
        })
    }

    /// Visits whose caregiver name matches exactly; visits carry no caregiver id.
    pub fn visits_for<'a>(&'a self, caregiver: &'a Caregiver) -> impl Iterator<Item = &'a Visit> {
        self.visits
            .iter()
            .filter(move |visit| visit.caregiver_name == caregiver.name)
    }

    /// Checks the capacity invariants the workload engine relies on.
    pub fn validate(&self) -> Result<(), RosterError> {
        let mut seen = HashSet::new();
        for caregiver in &self.caregivers {
            if !seen.insert(&caregiver.id) {
                return Err(RosterError::DuplicateCaregiver(caregiver.id.clone()));
            }

            for (field, value) in [
                ("assignedHours", caregiver.assigned_hours),
                ("maxHours", caregiver.max_hours),
            ] {
                if !value.is_finite() || value < 0.0 {
                    return Err(RosterError::InvalidHours {
                        caregiver: caregiver.id.clone(),
                        field,
                        value,
                    });
                }
            }

            if let Some((date, day)) = caregiver
                .utilization
                .iter()
                .find(|(_, day)| !day.hours.is_finite() || day.hours < 0.0)
            {
                return Err(RosterError::InvalidDailyHours {
                    caregiver: caregiver.id.clone(),
                    date: *date,
                    value: day.hours,
                });
            }
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RosterError {
    #[error("caregiver '{0}' appears more than once")]
    DuplicateCaregiver(CaregiverId),
    #[error("caregiver '{caregiver}' has invalid {field} ({value}); hours must be finite and non-negative")]
    InvalidHours {
        caregiver: CaregiverId,
        field: &'static str,
        value: f64,
    },
    #[error("caregiver '{caregiver}' logged invalid hours ({value}) on {date}")]
    InvalidDailyHours {
        caregiver: CaregiverId,
        date: chrono::NaiveDate,
        value: f64,
    },
}
