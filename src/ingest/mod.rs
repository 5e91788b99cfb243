pub mod csv_source;
pub mod game_log_row;
pub mod ingest_error;
