use super::filters::Selection;
use super::roster::{CaregiverId, PatientId, Roster, Visit, VisitId, VisitStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PatientFilters {
    pub search: String,
    pub status: Selection,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientListEntry {
    pub id: PatientId,
    pub name: String,
    pub age: u32,
    pub care_plan: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_visit: Option<NaiveDateTime>,
    pub contact: String,
    pub caregiver_id: CaregiverId,
    pub caregiver_name: String,
}

impl PatientFilters {
    /// Patients in caregiver order, then in each caregiver's roster order.
    pub fn apply(&self, roster: &Roster) -> Vec<PatientListEntry> {
        let needle = self.search.to_lowercase();

        roster
            .patients()
            .filter(|(_, patient)| {
                patient.name.to_lowercase().contains(&needle)
                    || patient.care_plan.to_lowercase().contains(&needle)
            })
            .filter(|(_, patient)| {
                self.status
                    .value()
                    .map_or(true, |status| patient.status == status)
            })
            .map(|(caregiver, patient)| PatientListEntry {
                id: patient.id.clone(),
                name: patient.name.clone(),
                age: patient.age,
                care_plan: patient.care_plan.clone(),
                status: patient.status.clone(),
                next_visit: patient.next_visit,
                contact: patient.contact.clone(),
                caregiver_id: caregiver.id.clone(),
                caregiver_name: caregiver.name.clone(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisitFilters {
    pub search: String,
    pub status: Option<VisitStatus>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitListEntry {
    pub id: VisitId,
    pub scheduled_at: NaiveDateTime,
    pub duration: u32,
    pub patient_name: String,
    pub caregiver_name: String,
    pub status: VisitStatus,
    pub status_label: &'static str,
}

impl VisitListEntry {
    pub fn from_visit(visit: &Visit) -> Self {
        Self {
            id: visit.id.clone(),
            scheduled_at: visit.scheduled_at,
            duration: visit.duration,
            patient_name: visit.patient_name.clone(),
            caregiver_name: visit.caregiver_name.clone(),
            status: visit.status,
            status_label: visit.status.label(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitStatusCount {
    pub status: VisitStatus,
    pub status_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitListing {
    pub visits: Vec<VisitListEntry>,
    pub status_counts: Vec<VisitStatusCount>,
}

impl VisitFilters {
    pub fn matches(&self, visit: &Visit) -> bool {
        let needle = self.search.to_lowercase();
        let search_hit = visit.patient_name.to_lowercase().contains(&needle)
            || visit.caregiver_name.to_lowercase().contains(&needle);
        let status_hit = self.status.map_or(true, |status| visit.status == status);
        let date = visit.date();
        let after_start = self.from.map_or(true, |from| date >= from);
        let before_end = self.to.map_or(true, |to| date <= to);

        search_hit && status_hit && after_start && before_end
    }

    /// Matching visits by scheduled time, with counts per status.
    pub fn apply<'a, I>(&self, visits: I) -> VisitListing
    where
        I: IntoIterator<Item = &'a Visit>,
    {
        let mut matched: Vec<&Visit> = visits
            .into_iter()
            .filter(|visit| self.matches(visit))
            .collect();
        matched.sort_by_key(|visit| visit.scheduled_at);

        let status_counts = VisitStatus::ordered()
            .into_iter()
            .map(|status| VisitStatusCount {
                status,
                status_label: status.label(),
                count: matched.iter().filter(|visit| visit.status == status).count(),
            })
            .collect();

        VisitListing {
            visits: matched.into_iter().map(VisitListEntry::from_visit).collect(),
            status_counts,
        }
    }
}
