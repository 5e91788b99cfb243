use crate::ingest::game_log_row::GameLogRow;
use crate::pipeline::pipeline_error::EmptyInputError;
use crate::pipeline::player_season_totals::PlayerSeasonTotals;

use std::collections::HashMap;

/// Groups game log rows by player name and computes season totals.
///
/// Grouping is by exact, case-sensitive name match. The output carries one
/// entry per distinct player, sorted by player name so the stage is
/// deterministic on its own; ranking order is imposed by the top-N stage.
///
/// # Arguments
///
/// * `rows` - The full row set for the season, in any order.
///
/// # Returns
///
/// One `PlayerSeasonTotals` per distinct player, or `EmptyInputError` when
/// `rows` is empty.
pub fn aggregate(rows: &[GameLogRow]) -> Result<Vec<PlayerSeasonTotals>, EmptyInputError> {
    if rows.is_empty() {
        return Err(EmptyInputError);
    }

    let mut groups: HashMap<&str, (u32, u32)> = HashMap::new();
    for row in rows {
        let entry = groups.entry(row.player.as_str()).or_insert((0, 0));
        entry.0 += row.points;
        entry.1 += 1;
    }

    let mut totals: Vec<PlayerSeasonTotals> = groups
        .into_iter()
        .map(|(player, (total_points, games_played))| PlayerSeasonTotals {
            player: player.to_owned(),
            total_points,
            games_played,
            points_per_game: round_points_per_game(total_points, games_played),
        })
        .collect();

    totals.sort_by(|t1, t2| t1.player.cmp(&t2.player));

    Ok(totals)
}

/// Points per game rounded to one decimal place.
///
/// Rounding mode is half away from zero (`f64::round`), which for the
/// non-negative values occurring here is round-half-up: 1.25 becomes 1.3.
///
/// # Arguments
///
/// * `total_points` - The player's season point total.
/// * `games_played` - The player's game count; never zero for a formed group.
fn round_points_per_game(total_points: u32, games_played: u32) -> f64 {
    (total_points as f64 / games_played as f64 * 10.0).round() / 10.0
}
