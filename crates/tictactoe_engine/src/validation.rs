//! Mark validation shared by both construction paths.

use crate::error::{ConfigurationIssue, EngineError};
use crate::types::{Mark, Seat};
use tracing::{instrument, warn};

/// Validates the human-chosen marks of a new game.
///
/// `second` is `None` when seat 2 is the machine. Checks run seat 1 first,
/// then seat 2, then distinctness.
#[instrument(skip_all, fields(first = %first))]
pub(crate) fn validate_marks(first: &Mark, second: Option<&Mark>) -> Result<(), EngineError> {
    check_human_mark(Seat::One, first)?;
    if let Some(second) = second {
        check_human_mark(Seat::Two, second)?;
        if first == second {
            warn!(mark = %first, "Duplicate marks rejected");
            return Err(ConfigurationIssue::DuplicateMarks(first.clone()).into());
        }
    }
    Ok(())
}

fn check_human_mark(seat: Seat, mark: &Mark) -> Result<(), EngineError> {
    if mark.is_blank() {
        warn!(%seat, "Blank mark rejected");
        return Err(ConfigurationIssue::BlankMark(seat).into());
    }
    if mark.is_reserved() {
        warn!(%seat, %mark, "Reserved mark rejected");
        return Err(ConfigurationIssue::ReservedMark(seat, mark.clone()).into());
    }
    Ok(())
}
