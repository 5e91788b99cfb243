use crate::ingest::game_log_row::GameLogRow;
use crate::ingest::ingest_error::FetchError;

use log::debug;
use rayon::prelude::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use std::fs::{read_dir, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Capability interface over the season game-log provider.
///
/// The pipeline treats a fetch as one blocking call that either returns the
/// complete, already-assembled row set for the season or fails outright.
/// How the provider gathers the rows (and with how much parallelism) is its
/// own business.
pub trait GameLogSource {
    /// Fetches every game log row for the given season.
    ///
    /// # Arguments
    ///
    /// * `season` - The season's year identifier.
    ///
    /// # Returns
    ///
    /// All rows for the season, or a `FetchError` if any part of the fetch failed.
    fn fetch(&self, season: u32) -> Result<Vec<GameLogRow>, FetchError>;
}

/// Game-log provider backed by a directory of CSV exports.
///
/// Expects one subdirectory per season under `base_dir`, holding any number
/// of `*.csv` files with a header line and `player,points,fgm,fg3m,ftm`
/// records. Files are parsed in parallel and their rows concatenated.
pub struct CsvGameLogSource {
    base_dir: PathBuf,
    num_threads: usize,
}

impl CsvGameLogSource {
    /// Creates a source reading from `base_dir` with `num_threads` parser threads.
    pub fn new(base_dir: impl Into<PathBuf>, num_threads: usize) -> CsvGameLogSource {
        CsvGameLogSource {
            base_dir: base_dir.into(),
            num_threads,
        }
    }
}

impl GameLogSource for CsvGameLogSource {
    fn fetch(&self, season: u32) -> Result<Vec<GameLogRow>, FetchError> {
        let season_dir = self.base_dir.join(season.to_string());
        let paths = collect_csv_files(&season_dir)?;
        debug!(
            "parsing {} game log files for season {}",
            paths.len(),
            season
        );

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(self.num_threads)
            .build()?;

        let per_file: Vec<Vec<GameLogRow>> = thread_pool.install(|| {
            paths
                .par_iter()
                .map(parse_file)
                .collect::<Result<_, FetchError>>()
        })?;

        Ok(per_file.into_iter().flatten().collect())
    }
}

/// Collects all CSV files from the season directory, in path order.
///
/// # Arguments
///
/// * `season_dir` - The directory holding the season's CSV exports.
///
/// # Returns
///
/// The paths of all CSV files found, or a `FetchError` if the directory
/// cannot be read.
fn collect_csv_files(season_dir: &Path) -> Result<Vec<PathBuf>, FetchError> {
    let dir = read_dir(season_dir).map_err(|source| FetchError::SeasonDirUnreadable {
        path: season_dir.to_owned(),
        source,
    })?;

    let mut paths: Vec<PathBuf> = dir
        .flatten()
        .map(|d| d.path())
        .filter(|path| path.extension().map_or(false, |ext| ext == "csv"))
        .collect();
    paths.sort();

    Ok(paths)
}

/// Parses a single CSV file into game log rows.
///
/// The first line is the header and is skipped; fully blank lines are
/// ignored. Any I/O or row-integrity error aborts the parse — there is no
/// skip-and-continue, since a partial row set would silently skew the
/// aggregates.
///
/// # Arguments
///
/// * `path` - The path to the CSV file.
///
/// # Returns
///
/// The rows of the file, or the first error hit.
fn parse_file(path: &PathBuf) -> Result<Vec<GameLogRow>, FetchError> {
    let file = File::open(path).map_err(|source| FetchError::FileUnreadable {
        path: path.clone(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut rows = Vec::new();
    for line in reader.lines().skip(1) {
        let line = line.map_err(|source| FetchError::FileUnreadable {
            path: path.clone(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(GameLogRow::from_line(&line)?);
    }

    Ok(rows)
}
