use crate::ingest::game_log_row::GameLogRow;
use crate::pipeline::player_season_totals::PlayerSeasonTotals;
use crate::pipeline::scoring_breakdown::ScoringBreakdown;

use std::collections::HashMap;

/// Computes the category breakdown for each selected player.
///
/// The makes are re-summed from the raw rows rather than carried through
/// the aggregation, so `rows` must be the same row set the totals were
/// aggregated from. Output order matches `selected`, preserving the
/// ranking.
///
/// # Arguments
///
/// * `selected` - The ranked players to break down.
/// * `rows` - The full game log row set for the season.
///
/// # Returns
///
/// One `ScoringBreakdown` per selected player, in the same order.
pub fn compute_breakdowns(
    selected: &[PlayerSeasonTotals],
    rows: &[GameLogRow],
) -> Vec<ScoringBreakdown> {
    let makes = sum_makes_per_player(rows);

    selected
        .iter()
        .map(|totals| {
            let (fgm, fg3m, ftm) = makes
                .get(totals.player.as_str())
                .copied()
                .unwrap_or((0, 0, 0));

            let points_2pt = (fgm - fg3m) * 2;
            let points_3pt = fg3m * 3;
            let points_ft = ftm;

            ScoringBreakdown {
                player: totals.player.clone(),
                total_points: totals.total_points,
                games_played: totals.games_played,
                points_per_game: totals.points_per_game,
                points_2pt,
                points_3pt,
                points_ft,
                pct_2pt: share_of_total(points_2pt, totals.total_points),
                pct_3pt: share_of_total(points_3pt, totals.total_points),
                pct_ft: share_of_total(points_ft, totals.total_points),
            }
        })
        .collect()
}

/// Sums field goal, 3-point and free throw makes per player.
///
/// # Arguments
///
/// * `rows` - The full game log row set.
///
/// # Returns
///
/// A map from player name to their `(fgm, fg3m, ftm)` season sums.
fn sum_makes_per_player(rows: &[GameLogRow]) -> HashMap<&str, (u32, u32, u32)> {
    let mut makes: HashMap<&str, (u32, u32, u32)> = HashMap::new();
    for row in rows {
        let entry = makes.entry(row.player.as_str()).or_insert((0, 0, 0));
        entry.0 += row.fgm;
        entry.1 += row.fg3m;
        entry.2 += row.ftm;
    }
    makes
}

/// Share of `total` covered by `points`.
///
/// Returns the `None` sentinel when `total` is zero: the share is
/// mathematically undefined there, and it must never leak into the output
/// as infinity or NaN.
pub(crate) fn share_of_total(points: u32, total: u32) -> Option<f64> {
    if total == 0 {
        return None;
    }
    Some(points as f64 / total as f64)
}
