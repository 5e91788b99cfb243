use crate::pipeline::breakdown::share_of_total;
use crate::pipeline::long_form_row::{Category, LongFormRow, LongFormShareRow};
use crate::pipeline::scoring_breakdown::ScoringBreakdown;

use std::collections::HashMap;

/// Unpivots breakdown rows into the long-format points table.
///
/// Each breakdown row becomes exactly three `LongFormRow`s, always emitted
/// in the order 2PT, 3PT, FT. Player order is preserved from the input, so
/// the ranking imposed by the top-N stage carries through to the table.
///
/// # Arguments
///
/// * `breakdowns` - The ranked breakdown rows.
///
/// # Returns
///
/// The long-format table, three rows per player.
pub fn unpivot(breakdowns: &[ScoringBreakdown]) -> Vec<LongFormRow> {
    let mut rows = Vec::with_capacity(breakdowns.len() * Category::ORDER.len());
    for breakdown in breakdowns {
        for category in Category::ORDER {
            rows.push(LongFormRow {
                player: breakdown.player.clone(),
                category,
                points: category_points(breakdown, category),
            });
        }
    }
    rows
}

/// Recomputes each row's share of its player's category-point sum.
///
/// Since a player's category points sum exactly to their total points, the
/// shares produced here equal the ones already on the breakdown rows; the
/// recomputation works from the long table alone so the two views can be
/// cross-checked against each other.
///
/// # Arguments
///
/// * `rows` - The long-format points table.
///
/// # Returns
///
/// The percent-normalized table, row for row in the same order.
pub fn to_share_rows(rows: &[LongFormRow]) -> Vec<LongFormShareRow> {
    let mut totals: HashMap<&str, u32> = HashMap::new();
    for row in rows {
        *totals.entry(row.player.as_str()).or_insert(0) += row.points;
    }

    rows.iter()
        .map(|row| {
            let total = totals.get(row.player.as_str()).copied().unwrap_or(0);
            LongFormShareRow {
                player: row.player.clone(),
                category: row.category,
                share: share_of_total(row.points, total),
            }
        })
        .collect()
}

/// Pivots long-format rows back into one wide row per player.
///
/// The inverse of [`unpivot`]: cells land in 2PT, 3PT, FT column order and
/// players keep their first-appearance order, so pivoting an unpivoted
/// table reproduces the original per-player category values.
///
/// # Arguments
///
/// * `rows` - The long-format points table.
///
/// # Returns
///
/// `(player, [points_2pt, points_3pt, points_ft])` per player.
pub fn pivot(rows: &[LongFormRow]) -> Vec<(String, [u32; 3])> {
    let mut order: Vec<String> = Vec::new();
    let mut wide: HashMap<String, [u32; 3]> = HashMap::new();

    for row in rows {
        if !wide.contains_key(&row.player) {
            order.push(row.player.clone());
        }
        let cells = wide.entry(row.player.clone()).or_insert([0; 3]);
        cells[category_column(row.category)] += row.points;
    }

    order
        .into_iter()
        .map(|player| {
            let cells = wide.remove(&player).unwrap_or([0; 3]);
            (player, cells)
        })
        .collect()
}

fn category_points(breakdown: &ScoringBreakdown, category: Category) -> u32 {
    match category {
        Category::TwoPoint => breakdown.points_2pt,
        Category::ThreePoint => breakdown.points_3pt,
        Category::FreeThrow => breakdown.points_ft,
    }
}

fn category_column(category: Category) -> usize {
    match category {
        Category::TwoPoint => 0,
        Category::ThreePoint => 1,
        Category::FreeThrow => 2,
    }
}
