use scoring_report::ingest::csv_source::{CsvGameLogSource, GameLogSource};
use scoring_report::pipeline::top_n::DEFAULT_TOP_N;
use scoring_report::report::report_writer::create_report_file;
use scoring_report::report::scoring_report::build_scoring_report;

use log::{error, info};
use std::env;

/// Parses command-line arguments for the data directory, season, number of
/// threads, output file name and optional ranking size.
///
/// # Returns
///
/// * `Ok((data_dir, season, num_threads, output_file_name, top_n))` - A tuple
///   with the parsed arguments; `top_n` defaults to 10 when omitted.
/// * `Err(String)` - An error message if the arguments are invalid or missing.
fn parse_args() -> Result<(String, u32, usize, String, usize), String> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 5 || args.len() > 6 {
        return Err(
            "Usage: cargo run <data-dir> <season> <num-threads> <output-file-name> [top-n]".into(),
        );
    }

    let data_dir = args[1].clone();
    let season: u32 = args[2]
        .parse()
        .map_err(|_| "Season must be a valid year.")?;
    let num_threads: usize = args[3]
        .parse()
        .map_err(|_| "Number of threads must be a valid integer.")?;
    let output_file_name = args[4].clone();
    let top_n = match args.get(5) {
        Some(raw) => raw
            .parse()
            .ok()
            .filter(|&n| n > 0)
            .ok_or("Top-N must be a positive integer.")?,
        None => DEFAULT_TOP_N,
    };

    Ok((data_dir, season, num_threads, output_file_name, top_n))
}

fn main() -> Result<(), String> {
    env_logger::init();

    let (data_dir, season, num_threads, output_file_name, top_n) = parse_args()?;

    let source = CsvGameLogSource::new(data_dir, num_threads);
    let rows = source.fetch(season).map_err(|err| err.to_string())?;
    info!("fetched {} game log rows for season {}", rows.len(), season);

    let report = build_scoring_report(season, &rows, top_n).map_err(|err| err.to_string())?;

    match create_report_file(&output_file_name, &report) {
        Ok(()) => println!("Report created successfully."),
        Err(err) => {
            error!("Failed to create report: {}", err);
            return Err(err.to_string());
        }
    }

    Ok(())
}
