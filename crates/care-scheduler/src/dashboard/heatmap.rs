use super::filters::OVERBOOKED_PERCENT;
use super::roster::{Caregiver, CaregiverId};
use super::workload::{load_percent, reaches_percent};
use chrono::{Duration, NaiveDate};
use serde::Serialize;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;
pub const MAX_WINDOW_DAYS: u32 = 31;

/// Consecutive days shown as heatmap columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatmapWindow {
    pub start: NaiveDate,
    pub days: u32,
}

impl HeatmapWindow {
    pub fn new(start: NaiveDate, days: u32) -> Self {
        Self { start, days }
    }

    pub fn week_of(start: NaiveDate) -> Self {
        Self::new(start, DEFAULT_WINDOW_DAYS)
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        (0..self.days).map_while(move |offset| {
            self.start
                .checked_add_signed(Duration::days(i64::from(offset)))
        })
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.dates().last()
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapCell {
    pub date: NaiveDate,
    pub hours: f64,
    pub visits: u32,
    pub patients: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatmapRow {
    pub caregiver_id: CaregiverId,
    pub caregiver_name: String,
    pub max_hours: f64,
    pub cells: Vec<HeatmapCell>,
    pub total_hours: f64,
    pub utilization_percent: f64,
    pub overbooked: bool,
}

impl HeatmapRow {
    pub fn for_caregiver(caregiver: &Caregiver, window: &HeatmapWindow) -> Self {
        let cells: Vec<HeatmapCell> = window
            .dates()
            .map(|date| {
                let day = caregiver.utilization.get(&date).copied().unwrap_or_default();
                HeatmapCell {
                    date,
                    hours: day.hours,
                    visits: day.visits,
                    patients: day.patients,
                }
            })
            .collect();

        let total_hours = cells.iter().map(|cell| cell.hours).sum();
        let utilization_percent = load_percent(total_hours, caregiver.max_hours);

        Self {
            caregiver_id: caregiver.id.clone(),
            caregiver_name: caregiver.name.clone(),
            max_hours: caregiver.max_hours,
            cells,
            total_hours,
            utilization_percent,
            overbooked: reaches_percent(total_hours, caregiver.max_hours, OVERBOOKED_PERCENT),
        }
    }
}

/// One row per caregiver, in input order.
pub fn build_heatmap<'a, I>(caregivers: I, window: &HeatmapWindow) -> Vec<HeatmapRow>
where
    I: IntoIterator<Item = &'a Caregiver>,
{
    caregivers
        .into_iter()
        .map(|caregiver| HeatmapRow::for_caregiver(caregiver, window))
        .collect()
}
