use care_scheduler::dashboard::{
    roster::RosterError, DashboardService, RosterImportError, RosterImporter, WorkloadStatus,
};
use std::fs;
use std::path::PathBuf;

fn scratch_file(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("care-scheduler-{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create scratch dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write scratch file");
    path
}

const ROSTER_JSON: &str = r#"{
  "caregivers": [
    {
      "id": "cg-1", "name": "Ana Ruiz", "role": "Registered Nurse", "specialty": "Wound Care",
      "region": "North", "assignedHours": 38, "maxHours": 40, "patients": 1, "visits": 3,
      "status": "Active",
      "patientsList": [
        {"id": "p-1", "name": "Harold Finch", "age": 81, "carePlan": "Wound care",
         "status": "Stable", "nextVisit": "2025-03-20T09:00:00Z", "contact": "555-0101"}
      ],
      "utilization": {
        "2025-03-17": {"hours": 8, "visits": 2, "patients": 1},
        "2025-03-18": {"hours": 8, "visits": 2, "patients": 1}
      }
    },
    {
      "id": "cg-2", "name": "Ben Cole", "role": "Home Health Aide", "region": "South",
      "assignedHours": 10, "maxHours": 40, "status": "Active"
    }
  ],
  "visits": [
    {"id": "v-1", "scheduledAt": "2025-03-20 09:00", "duration": 60, "patientName": "Harold Finch",
     "caregiverName": "Ana Ruiz", "status": "scheduled"}
  ]
}"#;

#[test]
fn json_roster_loads_from_disk_and_serves_views() {
    let path = scratch_file("roster.json", ROSTER_JSON);
    let roster = RosterImporter::from_path(&path).expect("roster imports");
    assert_eq!(roster.caregivers.len(), 2);
    assert_eq!(roster.visits.len(), 1);

    let service = DashboardService::new(roster);
    let detail = service
        .caregiver(&"cg-1".into())
        .expect("caregiver detail");
    assert_eq!(detail.workload.workload, WorkloadStatus::Overloaded);
    assert_eq!(detail.scheduled_visits.len(), 1);
    assert_eq!(detail.logged_hours, 16.0);

    let insights = service.insights();
    assert_eq!(insights[0].caregivers, ["Ana Ruiz"]);
    assert_eq!(insights[1].caregivers, ["Ben Cole"]);
}

#[test]
fn csv_roster_is_detected_by_extension() {
    let path = scratch_file(
        "team.csv",
        "id,name,role,specialty,region,assignedHours,maxHours,status\n\
cg-1,Ana Ruiz,Registered Nurse,Wound Care,North,30,40,Active\n",
    );
    let roster = RosterImporter::from_path(&path).expect("csv imports");
    assert_eq!(roster.caregivers[0].name, "Ana Ruiz");
    assert!(roster.caregivers[0].utilization.is_empty());
}

#[test]
fn duplicate_caregiver_ids_are_rejected() {
    let json = r#"{"caregivers": [
        {"id": "cg-1", "name": "A", "role": "RN", "region": "North", "assignedHours": 1, "maxHours": 2, "status": "Active"},
        {"id": "cg-1", "name": "B", "role": "RN", "region": "North", "assignedHours": 1, "maxHours": 2, "status": "Active"}
    ]}"#;
    let path = scratch_file("duplicate.json", json);

    match RosterImporter::from_path(&path) {
        Err(RosterImportError::Invalid(RosterError::DuplicateCaregiver(id))) => {
            assert_eq!(id.0, "cg-1")
        }
        other => panic!("expected duplicate caregiver error, got {other:?}"),
    }
}

#[test]
fn negative_daily_hours_are_rejected() {
    let json = r#"{"caregivers": [
        {"id": "cg-1", "name": "A", "role": "RN", "region": "North", "assignedHours": 1, "maxHours": 2,
         "status": "Active", "utilization": {"2025-03-17": {"hours": -3}}}
    ]}"#;
    let path = scratch_file("negative.json", json);

    assert!(matches!(
        RosterImporter::from_path(&path),
        Err(RosterImportError::Invalid(RosterError::InvalidDailyHours { .. }))
    ));
}
