use serde::Serialize;

/// Season-long scoring totals for one player.
///
/// # Fields
///
/// * `player` - The player's name; unique within one aggregation output.
/// * `total_points` - Points summed over every game log row of the player.
/// * `games_played` - Number of game log rows for the player.
/// * `points_per_game` - `total_points / games_played`, rounded to one decimal.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PlayerSeasonTotals {
    pub player: String,
    pub total_points: u32,
    pub games_played: u32,
    pub points_per_game: f64,
}
