pub mod aggregator;
pub mod breakdown;
pub mod long_form_row;
pub mod pipeline_error;
pub mod player_season_totals;
pub mod reshape;
pub mod scoring_breakdown;
pub mod top_n;
