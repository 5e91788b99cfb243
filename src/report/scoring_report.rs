use crate::ingest::game_log_row::GameLogRow;
use crate::pipeline::aggregator::aggregate;
use crate::pipeline::breakdown::compute_breakdowns;
use crate::pipeline::long_form_row::{LongFormRow, LongFormShareRow};
use crate::pipeline::pipeline_error::EmptyInputError;
use crate::pipeline::reshape::{to_share_rows, unpivot};
use crate::pipeline::scoring_breakdown::ScoringBreakdown;
use crate::pipeline::top_n::select_top_n;
use crate::report::chart_config::ChartConfig;

use serde::Serialize;

/// Everything the rendering collaborator needs for the two report charts.
///
/// # Fields
///
/// * `season` - The season the report covers.
/// * `top_n` - The requested ranking size; the tables may hold fewer
///   players when the season had fewer.
/// * `player_order` - Players by descending points per game; both tables
///   follow this order.
/// * `breakdowns` - The ranked wide-format breakdown rows.
/// * `points_by_category` - Long-format table with raw point values, for
///   absolute-volume plotting.
/// * `shares_by_category` - The percent-normalized equivalent, for
///   share-of-total plotting.
/// * `points_chart`, `shares_chart` - Explicit per-chart configuration.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ScoringReport {
    pub season: u32,
    pub top_n: usize,
    pub player_order: Vec<String>,
    pub breakdowns: Vec<ScoringBreakdown>,
    pub points_by_category: Vec<LongFormRow>,
    pub shares_by_category: Vec<LongFormShareRow>,
    pub points_chart: ChartConfig,
    pub shares_chart: ChartConfig,
}

/// Runs the full transformation chain over one season's rows.
///
/// Aggregates the rows into season totals, ranks the top `top_n` players by
/// points per game, breaks their totals into scoring categories, and
/// reshapes the result into the two plot-ready tables.
///
/// # Arguments
///
/// * `season` - The season's year identifier, recorded in the report.
/// * `rows` - The complete fetched row set for the season.
/// * `top_n` - How many players to rank.
///
/// # Returns
///
/// The assembled report, or `EmptyInputError` when `rows` is empty.
pub fn build_scoring_report(
    season: u32,
    rows: &[GameLogRow],
    top_n: usize,
) -> Result<ScoringReport, EmptyInputError> {
    let totals = aggregate(rows)?;
    let selected = select_top_n(totals, top_n);
    let breakdowns = compute_breakdowns(&selected, rows);
    let points_by_category = unpivot(&breakdowns);
    let shares_by_category = to_share_rows(&points_by_category);

    Ok(ScoringReport {
        season,
        top_n,
        player_order: selected.into_iter().map(|totals| totals.player).collect(),
        breakdowns,
        points_by_category,
        shares_by_category,
        points_chart: ChartConfig::points_chart(season),
        shares_chart: ChartConfig::shares_chart(season),
    })
}
