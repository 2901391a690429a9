use shared::{domain::Grid, protocol::GridPayload};

use crate::error::GenerationError;

/// Parses `--json` stdout into a grid. Empty or ill-shaped output is an
/// error, never an empty grid.
pub fn decode_grid(stdout: Vec<u8>) -> Result<Grid, GenerationError> {
    let text = String::from_utf8(stdout)?;
    if text.trim().is_empty() {
        return Err(GenerationError::MalformedOutput {
            reason: "generator produced no output".to_string(),
        });
    }

    let payload: GridPayload = serde_json::from_str(text.trim())?;
    let grid = Grid::from_payload(payload)?;
    if grid.is_empty() {
        return Err(GenerationError::MalformedOutput {
            reason: "generator returned an empty grid".to_string(),
        });
    }

    Ok(grid)
}
