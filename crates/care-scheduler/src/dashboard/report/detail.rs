use super::super::filters::{is_overbooked, logged_utilization_percent};
use super::super::listings::VisitListEntry;
use super::super::roster::{CaregiverId, Roster};
use super::views::{CaregiverDetailView, CaregiverWorkloadView, UtilizationEntry};

/// Detail dialog content; `None` when nobody with that id is on the roster.
pub fn caregiver_detail(roster: &Roster, id: &CaregiverId) -> Option<CaregiverDetailView> {
    let caregiver = roster.caregiver(id)?;

    let utilization = caregiver
        .utilization
        .iter()
        .map(|(date, day)| UtilizationEntry {
            date: *date,
            day: *day,
        })
        .collect();

    let mut scheduled_visits: Vec<VisitListEntry> = roster
        .visits_for(caregiver)
        .map(VisitListEntry::from_visit)
        .collect();
    scheduled_visits.sort_by_key(|visit| visit.scheduled_at);

    Some(CaregiverDetailView {
        workload: CaregiverWorkloadView::from_caregiver(caregiver),
        photo: caregiver.photo.clone(),
        logged_hours: caregiver.logged_hours(),
        logged_percent: logged_utilization_percent(caregiver),
        overbooked: is_overbooked(caregiver),
        utilization,
        patients_list: caregiver.patients_list.clone(),
        scheduled_visits,
    })
}
