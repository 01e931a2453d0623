//! Pure report transitions.
//!
//! Each [`ReportAction`] maps the current report to a new one that differs in
//! exactly one field, or one element of `objectives` / `images`. Untouched
//! image payloads are shared with the previous report.

use chrono::NaiveDate;

use super::images::ImagePayload;
use super::model::Report;
use crate::error::{OprError, Result};
use crate::generation::GenerationResult;

/// A single edit routed from the editor into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportAction {
    SetSchoolName(String),
    SetProgramName(String),
    SetDate(NaiveDate),
    SetVenue(String),
    SetOrganizer(String),
    SetParticipants(String),
    SetExecutiveSummary(String),
    SetPreparedBy(String),
    SetVerifiedBy(String),
    /// Appends an empty objective at the end.
    AddObjective,
    UpdateObjective { index: usize, value: String },
    /// Removes an objective; later objectives move up one position.
    RemoveObjective(usize),
    SetImage { index: usize, payload: ImagePayload },
    /// Empties a slot without shifting the others.
    ClearImage(usize),
    /// Merges an AI assist result (see [`Report::merge_generation`]).
    ApplyGeneration(GenerationResult),
}

impl Report {
    /// Applies `action`, returning the next report. `self` is left untouched,
    /// so a rejected action leaves the caller's report exactly as it was.
    pub fn apply(&self, action: ReportAction) -> Result<Report> {
        let mut next = self.clone();
        match action {
            ReportAction::SetSchoolName(value) => next.school_name = value,
            ReportAction::SetProgramName(value) => next.program_name = value,
            ReportAction::SetDate(value) => next.date = value,
            ReportAction::SetVenue(value) => next.venue = value,
            ReportAction::SetOrganizer(value) => next.organizer = value,
            ReportAction::SetParticipants(value) => next.participants = value,
            ReportAction::SetExecutiveSummary(value) => next.executive_summary = value,
            ReportAction::SetPreparedBy(value) => next.prepared_by = value,
            ReportAction::SetVerifiedBy(value) => next.verified_by = value,
            ReportAction::AddObjective => next.objectives.push(String::new()),
            ReportAction::UpdateObjective { index, value } => {
                let len = next.objectives.len();
                let slot = next
                    .objectives
                    .get_mut(index)
                    .ok_or_else(|| OprError::invalid_index("objectives", index, len))?;
                *slot = value;
            }
            ReportAction::RemoveObjective(index) => {
                if index >= next.objectives.len() {
                    return Err(OprError::invalid_index(
                        "objectives",
                        index,
                        next.objectives.len(),
                    ));
                }
                next.objectives.remove(index);
            }
            ReportAction::SetImage { index, payload } => {
                next.images = self.images.set_slot(index, payload)?;
            }
            ReportAction::ClearImage(index) => {
                next.images = self.images.clear_slot(index)?;
            }
            ReportAction::ApplyGeneration(result) => return Ok(self.merge_generation(result)),
        }
        Ok(next)
    }

    /// Merges a generation result into a copy of this report.
    ///
    /// The summary is always replaced, even with an empty string. Objectives
    /// are replaced only when the result carries at least one; an empty list
    /// means the model did not address them and the user's list is kept.
    pub fn merge_generation(&self, result: GenerationResult) -> Report {
        let mut next = self.clone();
        next.executive_summary = result.summary;
        if !result.objectives.is_empty() {
            next.objectives = result.objectives;
        }
        next
    }
}
