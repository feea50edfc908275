//! Schedule Parser
//!
//! Decodes the model reply into typed schedule items. The whole reply must be
//! a JSON array; prose or code-fence wrappers are rejected, not stripped.

use routine_domain::{Result, RoutineError, ScheduleItem};
use tracing::debug;

/// Decode raw reply text into schedule items.
///
/// # Errors
/// Returns `RoutineError::Decode` if the text is not valid JSON, is not an
/// array, or any record lacks one of the four string fields.
pub fn parse_schedule(raw: &str) -> Result<Vec<ScheduleItem>> {
    let items: Vec<ScheduleItem> = serde_json::from_str(raw)
        .map_err(|err| RoutineError::Decode(format!("model reply is not a schedule array: {err}")))?;

    debug!(item_count = items.len(), "decoded schedule reply");
    Ok(items)
}
