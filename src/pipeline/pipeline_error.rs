use thiserror::Error;

/// Returned by the aggregation stage when there are no rows to group.
///
/// Surfaced to the caller immediately; with zero groups the downstream
/// top-N selection is undefined, so the run stops here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no game log rows to aggregate")]
pub struct EmptyInputError;
