use serde::Serialize;

/// One of the three mutually exclusive, exhaustive scoring buckets.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "2PT")]
    TwoPoint,
    #[serde(rename = "3PT")]
    ThreePoint,
    #[serde(rename = "FT")]
    FreeThrow,
}

impl Category {
    /// Fixed emission order for the long-format tables. Stable across all
    /// players so a renderer gets a deterministic stacking order.
    pub const ORDER: [Category; 3] = [Category::TwoPoint, Category::ThreePoint, Category::FreeThrow];

    /// The chart label for this bucket.
    pub fn label(self) -> &'static str {
        match self {
            Category::TwoPoint => "2PT",
            Category::ThreePoint => "3PT",
            Category::FreeThrow => "FT",
        }
    }
}

/// One (player, category, points) tuple of the unpivoted breakdown table.
///
/// Every player contributes exactly three of these, one per category, and
/// their points sum to that player's total points.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LongFormRow {
    pub player: String,
    pub category: Category,
    pub points: u32,
}

/// Percent-normalized counterpart of [`LongFormRow`].
///
/// # Fields
///
/// * `player` - The player's name.
/// * `category` - The scoring bucket.
/// * `share` - The category's share of the player's category-point sum;
///   `None` when that sum is zero.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LongFormShareRow {
    pub player: String,
    pub category: Category,
    pub share: Option<f64>,
}
