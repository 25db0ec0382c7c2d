use care_scheduler::dashboard::{
    filters::{CaregiverFilters, DashboardView},
    generate_insights, sort_by_workload,
    roster::{Caregiver, CaregiverId, DailyUtilization},
    workload::{classify, WorkloadStatus},
    InsightLevel,
};
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

fn caregiver(name: &str, assigned: f64, max: f64) -> Caregiver {
    Caregiver {
        id: CaregiverId::from(name),
        name: name.to_string(),
        role: "Registered Nurse".to_string(),
        specialty: "General".to_string(),
        region: "North".to_string(),
        photo: None,
        assigned_hours: assigned,
        max_hours: max,
        patients: 0,
        visits: 0,
        status: "Active".to_string(),
        patients_list: Vec::new(),
        utilization: BTreeMap::new(),
    }
}

fn with_daily_hours(mut caregiver: Caregiver, hours: &[f64]) -> Caregiver {
    let monday = NaiveDate::from_ymd_opt(2025, 3, 17).expect("valid date");
    caregiver.utilization = hours
        .iter()
        .enumerate()
        .map(|(offset, hours)| {
            (
                monday + Duration::days(offset as i64),
                DailyUtilization {
                    hours: *hours,
                    visits: 2,
                    patients: 2,
                },
            )
        })
        .collect();
    caregiver
}

#[test]
fn scenario_overloaded_at_exactly_ninety_five_percent() {
    let a = caregiver("A", 38.0, 40.0);
    let classification = classify(a.assigned_hours, a.max_hours);
    assert_eq!(classification.load_percent, 95.0);
    assert_eq!(classification.status, WorkloadStatus::Overloaded);
}

#[test]
fn scenario_half_capacity_is_underutilized() {
    let b = caregiver("B", 20.0, 40.0);
    assert_eq!(
        classify(b.assigned_hours, b.max_hours).status,
        WorkloadStatus::Underutilized
    );
}

#[test]
fn scenario_zero_capacity_is_inactive_and_sorts_last() {
    let team = vec![
        caregiver("C", 0.0, 0.0),
        caregiver("B", 20.0, 40.0),
        caregiver("Low", 1.0, 40.0),
        caregiver("A", 38.0, 40.0),
    ];
    assert_eq!(
        classify(team[0].assigned_hours, team[0].max_hours).status,
        WorkloadStatus::Inactive
    );

    let sorted: Vec<_> = sort_by_workload(&team)
        .into_iter()
        .map(|caregiver| caregiver.name.as_str())
        .collect();
    assert_eq!(sorted, ["A", "B", "Low", "C"]);
}

#[test]
fn scenario_insights_warn_then_inform() {
    let team = [caregiver("A", 38.0, 40.0), caregiver("B", 20.0, 40.0)];
    let insights = generate_insights(&team);

    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0].level, InsightLevel::Warning);
    assert_eq!(insights[0].caregivers, ["A"]);
    assert!(insights[0].message.contains('A'));
    assert_eq!(insights[1].level, InsightLevel::Info);
    assert_eq!(insights[1].caregivers, ["B"]);
}

#[test]
fn scenario_overbooked_gate_threshold() {
    let included = with_daily_hours(caregiver("Busy", 38.0, 40.0), &[8.0, 8.0, 8.0, 7.0, 7.0]);
    let excluded = with_daily_hours(caregiver("Steady", 36.0, 40.0), &[8.0, 7.0, 7.0, 7.0, 7.0]);
    let team = vec![included, excluded];

    let filters = CaregiverFilters {
        view: DashboardView::Heatmap,
        overbooked_only: true,
        ..CaregiverFilters::default()
    };

    let kept: Vec<_> = filters
        .apply(&team)
        .into_iter()
        .map(|caregiver| caregiver.name.as_str())
        .collect();
    assert_eq!(kept, ["Busy"]);
}

#[test]
fn filtering_never_grows_the_list() {
    let team: Vec<_> = (0..12)
        .map(|index| caregiver(&format!("cg-{index}"), index as f64 * 4.0, 40.0))
        .collect();

    for search in ["", "cg-1", "nurse", "nobody"] {
        for view in [DashboardView::List, DashboardView::Workload, DashboardView::Heatmap] {
            let filters = CaregiverFilters {
                search: search.to_string(),
                view,
                overbooked_only: true,
                ..CaregiverFilters::default()
            };
            assert!(filters.apply(&team).len() <= team.len());
        }
    }
}

#[test]
fn sorting_twice_changes_nothing() {
    let team: Vec<_> = [12.0, 39.0, 0.0, 30.0, 24.0, 39.0, 50.0]
        .into_iter()
        .enumerate()
        .map(|(index, hours)| caregiver(&format!("cg-{index}"), hours, 40.0))
        .collect();

    let once = sort_by_workload(&team);
    let twice = sort_by_workload(once.iter().copied());
    assert_eq!(once, twice);
}
