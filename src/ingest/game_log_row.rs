use crate::ingest::ingest_error::DataIntegrityError;

/// One player's stat line for a single game.
///
/// # Fields
///
/// * `player` - The player's name, matched exactly (case-sensitive) when grouping.
/// * `points` - Points scored in the game.
/// * `fgm` - Field goals made, 3-pointers included.
/// * `fg3m` - 3-point field goals made.
/// * `ftm` - Free throws made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLogRow {
    pub player: String,
    pub points: u32,
    pub fgm: u32,
    pub fg3m: u32,
    pub ftm: u32,
}

impl GameLogRow {
    /// Parses one comma-separated game log line into a validated row.
    ///
    /// Field order is `player,points,fgm,fg3m,ftm`. Absent or empty numeric
    /// fields (including a literal `null`) are read as zero.
    ///
    /// # Arguments
    ///
    /// * `line` - The content of a line from a game log CSV file.
    ///
    /// # Returns
    ///
    /// The parsed row, or a `DataIntegrityError` if a field is malformed or
    /// the row fails validation.
    pub fn from_line(line: &str) -> Result<GameLogRow, DataIntegrityError> {
        let mut fields = line.split(',');

        let player = fields.next().unwrap_or("").to_owned();
        if player.is_empty() {
            return Err(DataIntegrityError::MissingPlayerName {
                line: line.to_owned(),
            });
        }

        let points = parse_stat_field(&player, "points", fields.next())?;
        let fgm = parse_stat_field(&player, "fgm", fields.next())?;
        let fg3m = parse_stat_field(&player, "fg3m", fields.next())?;
        let ftm = parse_stat_field(&player, "ftm", fields.next())?;

        let row = GameLogRow {
            player,
            points,
            fgm,
            fg3m,
            ftm,
        };
        row.validate()?;
        Ok(row)
    }

    /// Rejects rows whose stat fields cannot describe a real game line.
    ///
    /// Two checks: 3-point makes may not exceed field goal makes, and the
    /// points field must equal `3·fg3m + 2·(fgm − fg3m) + ftm`. The second
    /// check is what lets the category breakdown downstream always sum back
    /// to the player's total points.
    ///
    /// # Returns
    ///
    /// `Ok(())` for a consistent row, otherwise the matching `DataIntegrityError`.
    pub fn validate(&self) -> Result<(), DataIntegrityError> {
        if self.fg3m > self.fgm {
            return Err(DataIntegrityError::ThreesExceedMakes {
                player: self.player.clone(),
                fg3m: self.fg3m,
                fgm: self.fgm,
            });
        }

        let derived = self.fg3m * 3 + (self.fgm - self.fg3m) * 2 + self.ftm;
        if self.points != derived {
            return Err(DataIntegrityError::PointsMismatch {
                player: self.player.clone(),
                points: self.points,
                derived,
            });
        }

        Ok(())
    }
}

/// Parses a single numeric stat field, treating missing/empty/null as zero.
///
/// # Arguments
///
/// * `player` - The player the field belongs to, for the error message.
/// * `field` - The field name, for the error message.
/// * `raw` - The raw field content, if the line had one.
///
/// # Returns
///
/// The parsed value, or an `UnparseableField` error. Negative numbers fail
/// the parse since stat fields are unsigned.
fn parse_stat_field(
    player: &str,
    field: &'static str,
    raw: Option<&str>,
) -> Result<u32, DataIntegrityError> {
    let raw = raw.map(str::trim).unwrap_or("");
    if raw.is_empty() || raw.eq_ignore_ascii_case("null") {
        return Ok(0);
    }

    raw.parse().map_err(|_| DataIntegrityError::UnparseableField {
        player: player.to_owned(),
        field,
        value: raw.to_owned(),
    })
}
