use crate::report::json_format::JsonFormat;
use crate::report::report_error::ReportError;
use crate::report::scoring_report::ScoringReport;

use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

const FORMAT_VERSION: u32 = 1;

/// Serializes a report into the versioned, pretty-printed JSON document.
///
/// # Arguments
///
/// * `report` - The report to serialize.
///
/// # Returns
///
/// A `Result` containing the serialized JSON string if successful, or a
/// `ReportError` if serialization fails.
fn generate_json(report: &ScoringReport) -> Result<String, ReportError> {
    let wrapper = JsonFormat {
        format_version: FORMAT_VERSION,
        report,
    };
    Ok(serde_json::to_string_pretty(&wrapper)?)
}

/// Creates a JSON file from a report and writes it to the specified filename.
///
/// # Arguments
///
/// * `filename` - The path to the file where the JSON will be written.
/// * `report` - The report to be written.
///
/// # Returns
///
/// A `Result` indicating success or failure. Errors are represented by
/// `ReportError`.
pub fn create_report_file(filename: &str, report: &ScoringReport) -> Result<(), ReportError> {
    let json_output = generate_json(report)?;

    let file = File::create(filename).map_err(|source| ReportError::FileCreation {
        path: filename.into(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(json_output.as_bytes())
        .map_err(|source| ReportError::FileWrite {
            path: filename.into(),
            source,
        })?;

    Ok(())
}
