use serde::Serialize;

/// A player's season totals split into the three scoring categories.
///
/// The category point values partition `total_points` exactly:
/// `points_2pt + points_3pt + points_ft == total_points`.
///
/// # Fields
///
/// * `player` - The player's name.
/// * `total_points` - Season point total, carried over from the aggregation.
/// * `games_played` - Season game count, carried over from the aggregation.
/// * `points_per_game` - Rounded scoring rate, carried over from the aggregation.
/// * `points_2pt` - Points from 2-point field goals: `(fgm − fg3m) × 2`.
/// * `points_3pt` - Points from 3-point field goals: `fg3m × 3`.
/// * `points_ft` - Points from free throws: `ftm × 1`.
/// * `pct_2pt`, `pct_3pt`, `pct_ft` - Each category's share of
///   `total_points`. `None` when the player never scored, since the share
///   is undefined there; serialized as JSON null.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoringBreakdown {
    pub player: String,
    pub total_points: u32,
    pub games_played: u32,
    pub points_per_game: f64,
    pub points_2pt: u32,
    pub points_3pt: u32,
    pub points_ft: u32,
    pub pct_2pt: Option<f64>,
    pub pct_3pt: Option<f64>,
    pub pct_ft: Option<f64>,
}
