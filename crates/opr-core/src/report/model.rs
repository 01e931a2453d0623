//! Report domain model.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::images::ImageSlots;

pub const DEFAULT_SCHOOL_NAME: &str = "SEKOLAH KEBANGSAAN CONTOH";
pub const DEFAULT_VENUE: &str = "Dewan Sekolah";
pub const DEFAULT_ORGANIZER: &str = "Unit Kokurikulum";
pub const DEFAULT_PARTICIPANTS: &str = "Semua Murid Tahap 2";
pub const DEFAULT_PREPARED_BY: &str = "Setiausaha Program";
pub const DEFAULT_VERIFIED_BY: &str = "Guru Besar";
pub const DEFAULT_OBJECTIVES: [&str; 2] = [
    "Mengeratkan silaturrahim antara guru dan murid.",
    "Meningkatkan keceriaan kawasan sekolah.",
];

/// A one page activity report.
///
/// Exactly one report exists per editing session. It is never mutated in
/// place: edits go through [`Report::apply`] and produce a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub school_name: String,
    /// Required before the AI assist can run.
    pub program_name: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub venue: String,
    pub organizer: String,
    /// Target audience ("Sasaran").
    pub participants: String,
    /// Numbered list, in display order.
    pub objectives: Vec<String>,
    pub executive_summary: String,
    #[serde(default)]
    pub images: ImageSlots,
    pub prepared_by: String,
    pub verified_by: String,
}

impl Report {
    /// Creates a report pre-seeded with the default placeholders, dated `date`.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            school_name: DEFAULT_SCHOOL_NAME.to_string(),
            program_name: String::new(),
            date,
            venue: DEFAULT_VENUE.to_string(),
            organizer: DEFAULT_ORGANIZER.to_string(),
            participants: DEFAULT_PARTICIPANTS.to_string(),
            objectives: DEFAULT_OBJECTIVES.iter().map(|s| s.to_string()).collect(),
            executive_summary: String::new(),
            images: ImageSlots::new(),
            prepared_by: DEFAULT_PREPARED_BY.to_string(),
            verified_by: DEFAULT_VERIFIED_BY.to_string(),
        }
    }
}

impl Default for Report {
    /// Defaults dated with today's local date (the session start date).
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn test_new_seeds_placeholders() {
        let report = Report::new(sample_date());

        assert_eq!(report.school_name, "SEKOLAH KEBANGSAAN CONTOH");
        assert!(report.program_name.is_empty());
        assert_eq!(report.venue, "Dewan Sekolah");
        assert_eq!(report.organizer, "Unit Kokurikulum");
        assert_eq!(report.participants, "Semua Murid Tahap 2");
        assert_eq!(report.objectives.len(), 2);
        assert!(report.executive_summary.is_empty());
        assert_eq!(report.images.filled_count(), 0);
        assert_eq!(report.prepared_by, "Setiausaha Program");
        assert_eq!(report.verified_by, "Guru Besar");
    }

    #[test]
    fn test_default_uses_today() {
        let report = Report::default();
        assert_eq!(report.date, Local::now().date_naive());
    }

    #[test]
    fn test_serializes_with_camel_case_and_iso_date() {
        let report = Report::new(sample_date());
        let value = serde_json::to_value(&report).unwrap();

        assert_eq!(value["schoolName"], "SEKOLAH KEBANGSAAN CONTOH");
        assert_eq!(value["date"], "2025-03-14");
        assert_eq!(value["executiveSummary"], "");
        assert_eq!(value["images"].as_array().unwrap().len(), 4);

        let parsed: Report = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, report);
    }
}
