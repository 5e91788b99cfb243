// tests/pipeline_properties.rs
//
// Invariants of the aggregate -> top-N -> breakdown -> reshape chain.

use pretty_assertions::assert_eq;

use scoring_report::ingest::game_log_row::GameLogRow;
use scoring_report::pipeline::aggregator::aggregate;
use scoring_report::pipeline::breakdown::compute_breakdowns;
use scoring_report::pipeline::long_form_row::Category;
use scoring_report::pipeline::pipeline_error::EmptyInputError;
use scoring_report::pipeline::player_season_totals::PlayerSeasonTotals;
use scoring_report::pipeline::reshape::{pivot, to_share_rows, unpivot};
use scoring_report::pipeline::top_n::select_top_n;

/// A game log row whose points are consistent with its makes.
fn game(player: &str, fgm: u32, fg3m: u32, ftm: u32) -> GameLogRow {
    GameLogRow {
        player: player.to_owned(),
        points: fg3m * 3 + (fgm - fg3m) * 2 + ftm,
        fgm,
        fg3m,
        ftm,
    }
}

fn entry(player: &str, total_points: u32, games_played: u32, ppg: f64) -> PlayerSeasonTotals {
    PlayerSeasonTotals {
        player: player.to_owned(),
        total_points,
        games_played,
        points_per_game: ppg,
    }
}

fn sample_rows() -> Vec<GameLogRow> {
    vec![
        game("Ivy Ward", 10, 4, 3),
        game("Ivy Ward", 8, 0, 6),
        game("Mo Diallo", 12, 6, 0),
        game("Mo Diallo", 5, 5, 2),
        game("Rui Sato", 7, 1, 4),
        game("Tess Lane", 0, 0, 0),
        game("Tess Lane", 0, 0, 0),
    ]
}

#[test]
fn category_points_sum_exactly_to_total_points() {
    let rows = sample_rows();
    let totals = aggregate(&rows).unwrap();
    let breakdowns = compute_breakdowns(&totals, &rows);

    assert_eq!(breakdowns.len(), 4);
    for b in &breakdowns {
        assert_eq!(
            b.points_2pt + b.points_3pt + b.points_ft,
            b.total_points,
            "category partition broken for {}",
            b.player
        );
    }
}

#[test]
fn shares_sum_to_one_for_scoring_players() {
    let rows = sample_rows();
    let totals = aggregate(&rows).unwrap();
    let breakdowns = compute_breakdowns(&totals, &rows);

    for b in breakdowns.iter().filter(|b| b.total_points > 0) {
        let sum = b.pct_2pt.unwrap() + b.pct_3pt.unwrap() + b.pct_ft.unwrap();
        assert!(
            (sum - 1.0).abs() < 1e-9,
            "shares of {} sum to {}",
            b.player,
            sum
        );
    }
}

#[test]
fn worked_example_breakdown() {
    // 10 identical games: 80 makes, 10 of them threes, 30 free throws.
    // Season: 2000 points, 800 fgm, 100 fg3m, 300 ftm.
    let rows: Vec<GameLogRow> = (0..10).map(|_| game("X", 80, 10, 30)).collect();

    let totals = aggregate(&rows).unwrap();
    assert_eq!(totals[0].total_points, 2000);
    assert_eq!(totals[0].games_played, 10);
    assert_eq!(totals[0].points_per_game, 200.0);

    let breakdowns = compute_breakdowns(&totals, &rows);
    let b = &breakdowns[0];
    assert_eq!(b.points_3pt, 300);
    assert_eq!(b.points_2pt, 1400);
    assert_eq!(b.points_ft, 300);
    assert_eq!(b.points_2pt + b.points_3pt + b.points_ft, 2000);
    assert_eq!(b.pct_3pt, Some(0.15));
    assert_eq!(b.pct_2pt, Some(0.70));
    assert_eq!(b.pct_ft, Some(0.15));
}

#[test]
fn aggregate_rejects_empty_input() {
    assert_eq!(aggregate(&[]), Err(EmptyInputError));
}

#[test]
fn aggregate_output_is_sorted_by_player_name() {
    let rows = sample_rows();
    let totals = aggregate(&rows).unwrap();
    let names: Vec<&str> = totals.iter().map(|t| t.player.as_str()).collect();
    assert_eq!(names, vec!["Ivy Ward", "Mo Diallo", "Rui Sato", "Tess Lane"]);
}

#[test]
fn points_per_game_rounds_half_up_to_one_decimal() {
    // 5 points over 4 games: 1.25 rounds up to 1.3.
    let rows = vec![
        game("Free Throw Phil", 0, 0, 2),
        game("Free Throw Phil", 0, 0, 1),
        game("Free Throw Phil", 0, 0, 1),
        game("Free Throw Phil", 0, 0, 1),
    ];
    let totals = aggregate(&rows).unwrap();
    assert_eq!(totals[0].points_per_game, 1.3);

    // 4 points over 3 games: 1.333... rounds down to 1.3.
    let rows = vec![
        game("Lowtick Lou", 0, 0, 2),
        game("Lowtick Lou", 0, 0, 1),
        game("Lowtick Lou", 0, 0, 1),
    ];
    let totals = aggregate(&rows).unwrap();
    assert_eq!(totals[0].points_per_game, 1.3);
}

#[test]
fn top_n_of_fifteen_returns_ten_sorted_and_is_idempotent() {
    let pool: Vec<PlayerSeasonTotals> = (1..=15)
        .map(|i| entry(&format!("P{:02}", i), i * 10, 1, (i * 10) as f64))
        .collect();

    let selected = select_top_n(pool, 10);
    assert_eq!(selected.len(), 10);
    for pair in selected.windows(2) {
        assert!(pair[0].points_per_game >= pair[1].points_per_game);
    }
    assert_eq!(selected[0].player, "P15");
    assert_eq!(selected[9].player, "P06");

    let reselected = select_top_n(selected.clone(), 10);
    assert_eq!(reselected, selected);
}

#[test]
fn top_n_returns_everyone_when_fewer_than_n() {
    let pool = vec![entry("Solo", 30, 2, 15.0)];
    let selected = select_top_n(pool.clone(), 10);
    assert_eq!(selected, pool);
}

#[test]
fn top_n_ties_break_by_total_points_then_name() {
    // All three average 20 points per game.
    let pool = vec![
        entry("Avery", 20, 1, 20.0),
        entry("Casey", 20, 1, 20.0),
        entry("Blake", 40, 2, 20.0),
    ];
    let selected = select_top_n(pool, 3);
    let names: Vec<&str> = selected.iter().map(|t| t.player.as_str()).collect();
    assert_eq!(names, vec!["Blake", "Avery", "Casey"]);
}

#[test]
fn zero_total_player_gets_sentinel_shares() {
    let rows = vec![game("Tess Lane", 0, 0, 0), game("Tess Lane", 0, 0, 0)];
    let totals = aggregate(&rows).unwrap();
    let breakdowns = compute_breakdowns(&totals, &rows);

    let b = &breakdowns[0];
    assert_eq!(b.total_points, 0);
    assert_eq!(b.pct_2pt, None);
    assert_eq!(b.pct_3pt, None);
    assert_eq!(b.pct_ft, None);

    let share_rows = to_share_rows(&unpivot(&breakdowns));
    assert!(share_rows.iter().all(|row| row.share.is_none()));
}

#[test]
fn unpivot_emits_three_rows_per_player_in_fixed_order() {
    let rows = sample_rows();
    let totals = aggregate(&rows).unwrap();
    let breakdowns = compute_breakdowns(&totals, &rows);
    let long = unpivot(&breakdowns);

    assert_eq!(long.len(), breakdowns.len() * 3);
    for (i, b) in breakdowns.iter().enumerate() {
        let block = &long[i * 3..i * 3 + 3];
        let categories: Vec<Category> = block.iter().map(|row| row.category).collect();
        assert_eq!(categories, Category::ORDER.to_vec());
        assert!(block.iter().all(|row| row.player == b.player));
        let block_points: u32 = block.iter().map(|row| row.points).sum();
        assert_eq!(block_points, b.total_points);
    }
}

#[test]
fn share_rows_match_breakdown_shares_exactly() {
    let rows = sample_rows();
    let totals = aggregate(&rows).unwrap();
    let breakdowns = compute_breakdowns(&totals, &rows);
    let share_rows = to_share_rows(&unpivot(&breakdowns));

    for (i, b) in breakdowns.iter().enumerate() {
        let block = &share_rows[i * 3..i * 3 + 3];
        assert_eq!(block[0].share, b.pct_2pt);
        assert_eq!(block[1].share, b.pct_3pt);
        assert_eq!(block[2].share, b.pct_ft);
    }
}

#[test]
fn pivot_reverses_unpivot() {
    let rows = sample_rows();
    let totals = aggregate(&rows).unwrap();
    let breakdowns = compute_breakdowns(&totals, &rows);
    let wide = pivot(&unpivot(&breakdowns));

    assert_eq!(wide.len(), breakdowns.len());
    for (b, (player, cells)) in breakdowns.iter().zip(&wide) {
        assert_eq!(player, &b.player);
        assert_eq!(cells, &[b.points_2pt, b.points_3pt, b.points_ft]);
    }
}
