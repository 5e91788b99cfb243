pub mod chart_config;
pub mod json_format;
pub mod report_error;
pub mod report_writer;
pub mod scoring_report;
