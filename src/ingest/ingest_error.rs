use std::path::PathBuf;

use thiserror::Error;

/// Rejections raised while turning raw CSV records into game log rows.
///
/// # Variants
///
/// * `MissingPlayerName` - The line has no player name field.
/// * `UnparseableField` - A stat field is present but is not a non-negative integer.
/// * `ThreesExceedMakes` - A row reports more 3-point makes than total field goal makes.
/// * `PointsMismatch` - A row's points do not equal the points implied by its makes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataIntegrityError {
    #[error("game log line has no player name: {line:?}")]
    MissingPlayerName { line: String },
    #[error("{field} for {player} is not a non-negative integer: {value:?}")]
    UnparseableField {
        player: String,
        field: &'static str,
        value: String,
    },
    #[error("{player} has more 3-point makes ({fg3m}) than field goal makes ({fgm})")]
    ThreesExceedMakes { player: String, fg3m: u32, fgm: u32 },
    #[error("{player} scored {points} points but the makes add up to {derived}")]
    PointsMismatch {
        player: String,
        points: u32,
        derived: u32,
    },
}

/// Failures surfaced by a game log fetch.
///
/// Any of these aborts the whole fetch; the pipeline never sees a partial
/// row set.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not read season directory {}: {source}", path.display())]
    SeasonDirUnreadable { path: PathBuf, source: std::io::Error },
    #[error("could not read game log file {}: {source}", path.display())]
    FileUnreadable { path: PathBuf, source: std::io::Error },
    #[error("could not build the ingestion thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error(transparent)]
    Integrity(#[from] DataIntegrityError),
}
