use super::super::roster::{Caregiver, CaregiverId};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::io::Read;

/// Flat caregiver export: one row per caregiver, no patients or daily entries.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CaregiverRow {
    id: String,
    name: String,
    role: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    specialty: Option<String>,
    region: String,
    assigned_hours: f64,
    max_hours: f64,
    status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    patients: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    visits: Option<String>,
}

impl CaregiverRow {
    fn into_caregiver(self) -> Caregiver {
        Caregiver {
            id: CaregiverId(self.id),
            name: self.name,
            role: self.role,
            specialty: self.specialty.unwrap_or_default(),
            region: self.region,
            photo: None,
            assigned_hours: self.assigned_hours,
            max_hours: self.max_hours,
            patients: parse_count(self.patients.as_deref()),
            visits: parse_count(self.visits.as_deref()),
            status: self.status,
            patients_list: Vec::new(),
            utilization: BTreeMap::new(),
        }
    }
}

pub(crate) fn parse_caregivers<R: Read>(reader: R) -> Result<Vec<Caregiver>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<CaregiverRow>()
        .map(|row| row.map(CaregiverRow::into_caregiver))
        .collect()
}

fn parse_count(value: Option<&str>) -> u32 {
    value
        .and_then(|raw| raw.trim().parse::<u32>().ok())
        .unwrap_or(0)
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
