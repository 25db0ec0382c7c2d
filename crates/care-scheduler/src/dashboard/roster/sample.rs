use super::domain::{
    Caregiver, CaregiverId, DailyUtilization, Patient, PatientId, Visit, VisitId, VisitStatus,
};
use super::Roster;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeMap;

/// First day of the demo scheduling week (a Monday).
pub(crate) const DEMO_WEEK_START: (i32, u32, u32) = (2025, 3, 17);

fn day(offset: u32) -> NaiveDate {
    let (year, month, first) = DEMO_WEEK_START;
    NaiveDate::from_ymd_opt(year, month, first + offset).unwrap_or_default()
}

fn at(offset: u32, hour: u32, minute: u32) -> NaiveDateTime {
    day(offset).and_hms_opt(hour, minute, 0).unwrap_or_default()
}

fn week(hours: [f64; 7], visits: [u32; 7]) -> BTreeMap<NaiveDate, DailyUtilization> {
    hours
        .into_iter()
        .zip(visits)
        .enumerate()
        .filter(|(_, (hours, _))| *hours > 0.0)
        .map(|(offset, (hours, visits))| {
            (
                day(offset as u32),
                DailyUtilization {
                    hours,
                    visits,
                    patients: visits.min(3),
                },
            )
        })
        .collect()
}

fn patient(id: &str, name: &str, age: u32, care_plan: &str, next_visit: NaiveDateTime) -> Patient {
    Patient {
        id: PatientId(id.to_string()),
        name: name.to_string(),
        age,
        care_plan: care_plan.to_string(),
        status: "Stable".to_string(),
        next_visit: Some(next_visit),
        contact: format!("+1-555-01{}", &id[id.len().saturating_sub(2)..]),
    }
}

#[allow(clippy::too_many_arguments)]
fn caregiver(
    id: &str,
    name: &str,
    role: &str,
    specialty: &str,
    region: &str,
    assigned_hours: f64,
    max_hours: f64,
    status: &str,
    patients_list: Vec<Patient>,
    utilization: BTreeMap<NaiveDate, DailyUtilization>,
) -> Caregiver {
    let visits = utilization.values().map(|day| day.visits).sum();
    Caregiver {
        id: CaregiverId(id.to_string()),
        name: name.to_string(),
        role: role.to_string(),
        specialty: specialty.to_string(),
        region: region.to_string(),
        photo: None,
        assigned_hours,
        max_hours,
        patients: patients_list.len() as u32,
        visits,
        status: status.to_string(),
        patients_list,
        utilization,
    }
}

fn visit(
    id: &str,
    scheduled_at: NaiveDateTime,
    duration: u32,
    patient_name: &str,
    caregiver_name: &str,
    status: VisitStatus,
) -> Visit {
    Visit {
        id: VisitId(id.to_string()),
        scheduled_at,
        duration,
        patient_name: patient_name.to_string(),
        caregiver_name: caregiver_name.to_string(),
        status,
    }
}

pub(crate) fn demo_roster() -> Roster {
    let caregivers = vec![
        caregiver(
            "cg-001",
            "Maria Lopez",
            "Registered Nurse",
            "Wound Care",
            "North",
            38.0,
            40.0,
            "Active",
            vec![
                patient("p-101", "Harold Finch", 81, "Post-surgical wound care", at(3, 9, 0)),
                patient("p-102", "Edith Moreno", 76, "Diabetes management", at(3, 13, 30)),
            ],
            week([8.0, 8.0, 7.0, 8.0, 7.0, 0.0, 0.0], [3, 3, 2, 3, 2, 0, 0]),
        ),
        caregiver(
            "cg-002",
            "James Carter",
            "Home Health Aide",
            "Mobility Support",
            "South",
            20.0,
            40.0,
            "Active",
            vec![patient("p-201", "Walter Boyd", 88, "Fall prevention and mobility", at(2, 10, 0))],
            week([4.0, 4.0, 4.0, 4.0, 4.0, 0.0, 0.0], [1, 1, 1, 1, 1, 0, 0]),
        ),
        caregiver(
            "cg-003",
            "Priya Natarajan",
            "Registered Nurse",
            "Palliative Care",
            "North",
            32.0,
            40.0,
            "Active",
            vec![
                patient("p-301", "Grace Liu", 92, "Palliative comfort care", at(1, 8, 30)),
                patient("p-302", "Otto Brenner", 69, "COPD monitoring", at(4, 11, 0)),
            ],
            week([8.0, 7.0, 7.0, 7.0, 7.0, 0.0, 0.0], [2, 2, 2, 2, 2, 0, 0]),
        ),
        caregiver(
            "cg-004",
            "Samuel Okafor",
            "Physical Therapist",
            "Rehabilitation",
            "East",
            26.0,
            40.0,
            "Active",
            vec![patient("p-401", "Rosa Delgado", 74, "Hip replacement rehabilitation", at(2, 15, 0))],
            week([6.0, 5.0, 5.0, 5.0, 5.0, 0.0, 0.0], [2, 2, 2, 2, 2, 0, 0]),
        ),
        caregiver(
            "cg-005",
            "Linda Chen",
            "Licensed Practical Nurse",
            "Dementia Care",
            "West",
            0.0,
            0.0,
            "On Leave",
            Vec::new(),
            BTreeMap::new(),
        ),
    ];

    let visits = vec![
        visit("v-1001", at(0, 9, 0), 60, "Harold Finch", "Maria Lopez", VisitStatus::Completed),
        visit("v-1002", at(0, 13, 0), 45, "Edith Moreno", "Maria Lopez", VisitStatus::Completed),
        visit("v-1003", at(1, 8, 30), 90, "Grace Liu", "Priya Natarajan", VisitStatus::Completed),
        visit("v-1004", at(2, 10, 0), 60, "Walter Boyd", "James Carter", VisitStatus::Cancelled),
        visit("v-1005", at(2, 15, 0), 60, "Rosa Delgado", "Samuel Okafor", VisitStatus::Scheduled),
        visit("v-1006", at(3, 9, 0), 60, "Harold Finch", "Maria Lopez", VisitStatus::Scheduled),
        visit("v-1007", at(3, 13, 30), 45, "Edith Moreno", "Maria Lopez", VisitStatus::Scheduled),
        visit("v-1008", at(4, 11, 0), 60, "Otto Brenner", "Priya Natarajan", VisitStatus::Scheduled),
    ];

    Roster::new(caregivers, visits)
}
