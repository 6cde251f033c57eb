//! Memento encoding
//!
//! A memento is a JSON object keyed by field name:
//! `{"formatVersion":1,"attemptsRemaining":3,"level":1,"score":0}`.
//! Missing fields decode to their defaults and unknown fields are ignored.

use keepsake_core::{GameState, KeepsakeError, KeepsakeResult, Memento};
use serde::{Deserialize, Serialize};

/// Memento format written by this version
pub const FORMAT_VERSION: u32 = 1;

/// Version assumed for mementos written before `formatVersion` existed
pub const LEGACY_FORMAT_VERSION: u32 = 1;

/// On-the-wire layout of a memento
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    /// Absent in mementos written before the field existed
    #[serde(default = "legacy_format_version")]
    format_version: u32,
    #[serde(flatten)]
    state: GameState,
}

fn legacy_format_version() -> u32 {
    LEGACY_FORMAT_VERSION
}

/// Serialize a state snapshot into a memento
pub fn encode_state(state: &GameState) -> KeepsakeResult<Memento> {
    let envelope = Envelope {
        format_version: FORMAT_VERSION,
        state: *state,
    };
    serde_json::to_vec(&envelope)
        .map(Memento::from_bytes)
        .map_err(|e| KeepsakeError::EncodingFailure(e.to_string()))
}

/// Deserialize memento bytes back into a state
pub fn decode_state(bytes: &[u8]) -> KeepsakeResult<GameState> {
    let envelope: Envelope = serde_json::from_slice(bytes)
        .map_err(|e| KeepsakeError::DecodingFailure(e.to_string()))?;

    if envelope.format_version == 0 || envelope.format_version > FORMAT_VERSION {
        return Err(KeepsakeError::DecodingFailure(format!(
            "unsupported memento format version {} (supported: {}..={})",
            envelope.format_version, LEGACY_FORMAT_VERSION, FORMAT_VERSION
        )));
    }

    Ok(envelope.state)
}
