use crate::report::scoring_report::ScoringReport;

use serde::Serialize;

/// Wrapper structure for serializing a report with its document version.
///
/// # Fields
///
/// * `format_version` - Version of the emitted JSON layout, so the
///   rendering collaborator can detect incompatible documents.
/// * `report` - The report body, flattened into the JSON object.
#[derive(Serialize, Debug)]
pub struct JsonFormat<'a> {
    pub(crate) format_version: u32,
    #[serde(flatten)]
    pub(crate) report: &'a ScoringReport,
}
