//! Message command - classify a match score

use recommender::core::services::match_message;
use recommender::output::{MatchMessageResult, OutputMode};

/// Print the label for a match score
pub fn message(score: i64, mode: OutputMode) -> anyhow::Result<()> {
    MatchMessageResult {
        score,
        message: match_message(score).to_string(),
    }
    .render(mode);
    Ok(())
}
