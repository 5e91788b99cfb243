use crate::pipeline::player_season_totals::PlayerSeasonTotals;

/// How many players a report ranks when no override is given.
pub const DEFAULT_TOP_N: usize = 10;

/// Ranks players by scoring rate and keeps the first `n`.
///
/// Sort order: points per game descending, ties broken by total points
/// descending, then player name ascending. The tiebreak makes the ranking
/// deterministic regardless of input order, and therefore idempotent:
/// re-selecting the top `n` from this function's own output returns the
/// same players in the same order.
///
/// # Arguments
///
/// * `totals` - The season totals to rank.
/// * `n` - How many players to keep. When fewer than `n` players exist,
///   all of them are returned; no padding, no error.
///
/// # Returns
///
/// The ranked prefix of the players.
pub fn select_top_n(totals: Vec<PlayerSeasonTotals>, n: usize) -> Vec<PlayerSeasonTotals> {
    let mut ranked = totals;
    ranked.sort_by(|t1, t2| {
        t2.points_per_game
            .total_cmp(&t1.points_per_game)
            .then_with(|| t2.total_points.cmp(&t1.total_points))
            .then_with(|| t1.player.cmp(&t2.player))
    });
    ranked.truncate(n);
    ranked
}
